pub use crate::model::*;
use crate::session::Session;

/// A builder for loading a draft table row by row.
///
/// ```
/// use draft_stats::builder::Builder;
///
/// let mut builder = Builder::new();
/// builder.add_row(&["1973", "1", "A", "QB", "X", "", "1"]);
/// builder.add_row(&["1974", "no pick", "B", "", "", "", ""]);
///
/// let session = builder.build();
/// assert_eq!(session.stats().total, 1);
/// assert_eq!(session.stats().hof_total, 1);
/// assert_eq!(session.pick_series().len(), 2);
/// ```
#[derive(Debug, Default)]
pub struct Builder {
    _records: Vec<Record>,
}

impl Builder {
    pub fn new() -> Builder {
        Builder {
            _records: Vec::new(),
        }
    }

    /// Adds a row given as raw fields, in the order of `COLUMNS`.
    ///
    /// Short rows are accepted: the missing fields are empty.
    pub fn add_row(&mut self, fields: &[&str]) {
        self.add_record(Record::from_fields(fields))
    }

    pub fn add_record(&mut self, record: Record) {
        self._records.push(record);
    }

    pub fn len(&self) -> usize {
        self._records.len()
    }

    pub fn is_empty(&self) -> bool {
        self._records.is_empty()
    }

    /// Freezes the rows into a session. The derived tables are computed here.
    pub fn build(self) -> Session {
        Session::new(self._records)
    }
}
