use log::info;

use crate::*;

/// A loaded draft table and everything derived from it.
///
/// The records are never modified after construction. Loading new data means
/// building a new session: the summary and the series are never patched.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct Session {
    records: Vec<Record>,
    stats: AggregateStats,
    pick_series: Vec<PickSeriesEntry>,
}

impl Session {
    pub fn new(records: Vec<Record>) -> Session {
        info!("Session: loading {} records", records.len());
        let stats = aggregate(&records);
        let pick_series = build_pick_series(&records);
        Session {
            records,
            stats,
            pick_series,
        }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn stats(&self) -> &AggregateStats {
        &self.stats
    }

    pub fn pick_series(&self) -> &[PickSeriesEntry] {
        &self.pick_series
    }

    /// The real picks behind one row of the college or position table.
    pub fn by_dimension(&self, dimension: Dimension, key: &str) -> Vec<Record> {
        filter_by_dimension(&self.records, dimension, key)
    }

    /// The records behind one Hall-of-Fame chip.
    pub fn hall_of_famer(&self, player: &str, season: &str) -> Vec<Record> {
        filter_by_hof_player(&self.records, player, season)
    }

    pub fn season(&self, season: &str) -> Vec<Record> {
        filter_by_season(&self.records, season)
    }
}

impl Default for Session {
    fn default() -> Self {
        Session::new(Vec::new())
    }
}
