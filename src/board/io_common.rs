use std::path::Path;

use draft_stats::{Record, COLUMNS};
use log::{debug, warn};

pub fn simplify_file_name(path: &str) -> String {
    Path::new(path)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or(path)
        .to_string()
}

/// Maps the columns of an input table to the record fields, using the names
/// found in the header row. The order of the columns does not matter.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct HeaderMap {
    columns: Vec<String>,
}

impl HeaderMap {
    pub fn new<'a>(headers: impl IntoIterator<Item = &'a str>) -> HeaderMap {
        let columns: Vec<String> = headers
            .into_iter()
            .map(|h| h.trim_start_matches('\u{feff}').trim().to_string())
            .collect();
        for expected in COLUMNS.iter() {
            if !columns.iter().any(|c| c == expected) {
                warn!("Missing column {:?} in the header, it will be left empty", expected);
            }
        }
        debug!("HeaderMap: columns: {:?}", columns);
        HeaderMap { columns }
    }

    /// Builds a record from one row. Missing fields stay empty and unknown
    /// columns are dropped. The values are kept untrimmed.
    pub fn record<'a>(&self, fields: impl IntoIterator<Item = &'a str>) -> Record {
        let mut record = Record::default();
        for (column, value) in self.columns.iter().zip(fields) {
            record.set_field(column, value);
        }
        record
    }
}
