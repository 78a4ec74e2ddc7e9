//! Record predicates and the drill-down filters.
//!
//! All the functions here re-scan the full record slice; no index is kept.

use log::debug;

use crate::model::*;

/// True for the misattributed entry that is removed from all the statistics.
///
/// This is a case-sensitive prefix match on the untrimmed player name.
pub fn is_excluded_player(record: &Record) -> bool {
    record.player.starts_with(EXCLUDED_PLAYER_PREFIX)
}

/// A real pick has a non-empty overall pick which is not the "no pick" marker.
pub fn is_real_pick(record: &Record) -> bool {
    let pick = record.pick_overall.trim();
    !pick.is_empty() && !is_no_pick_marker(pick)
}

/// A real pick whose Hall-of-Fame flag reads as exactly 1.
pub fn is_hall_of_famer(record: &Record) -> bool {
    is_real_pick(record) && hall_of_fame_flag(record) == 1.0
}

pub(crate) fn is_no_pick_marker(trimmed_pick: &str) -> bool {
    trimmed_pick.eq_ignore_ascii_case(NO_PICK_MARKER)
}

// Numeric reading of the flag column: blank reads as 0, and so does anything
// that is not a number.
pub(crate) fn hall_of_fame_flag(record: &Record) -> f64 {
    let s = record.hall_of_fame.trim();
    if s.is_empty() {
        return 0.0;
    }
    match s.parse::<f64>() {
        Ok(x) if x.is_finite() => x,
        _ => 0.0,
    }
}

/// All the real picks whose trimmed college (or position) is exactly `key`.
pub fn filter_by_dimension(records: &[Record], dimension: Dimension, key: &str) -> Vec<Record> {
    let res: Vec<Record> = records
        .iter()
        .filter(|r| !is_excluded_player(r) && is_real_pick(r))
        .filter(|r| dimension.field(r).trim() == key)
        .cloned()
        .collect();
    debug!(
        "filter_by_dimension: {} = {:?}: {} records",
        dimension.name(),
        key,
        res.len()
    );
    res
}

/// The Hall-of-Fame picks matching both the player and the season.
///
/// Both sides are compared as trimmed strings. Duplicated rows are all
/// returned, in input order.
pub fn filter_by_hof_player(records: &[Record], player: &str, season: &str) -> Vec<Record> {
    let player = player.trim();
    let season = season.trim();
    let res: Vec<Record> = records
        .iter()
        .filter(|r| !is_excluded_player(r) && is_hall_of_famer(r))
        .filter(|r| r.player.trim() == player && r.season.trim() == season)
        .cloned()
        .collect();
    debug!(
        "filter_by_hof_player: {:?} ({:?}): {} records",
        player,
        season,
        res.len()
    );
    res
}

/// The records of one season, compared without trimming.
///
/// Unlike the other filters, a blank overall pick is let through here: only
/// the explicit "no pick" marker is rejected. This is what the dashboard has
/// always shown and it may need revisiting.
pub fn filter_by_season(records: &[Record], season: &str) -> Vec<Record> {
    let res: Vec<Record> = records
        .iter()
        .filter(|r| !is_excluded_player(r))
        .filter(|r| r.season == season)
        .filter(|r| !is_no_pick_marker(r.pick_overall.trim()))
        .cloned()
        .collect();
    debug!("filter_by_season: {:?}: {} records", season, res.len());
    res
}
