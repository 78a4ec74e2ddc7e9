mod model;
use log::{debug, info};
use unicode_normalization::UnicodeNormalization;

pub mod builder;
pub mod filters;
pub mod manual;
pub mod session;

use std::{
    cmp::Ordering,
    collections::{HashMap, HashSet},
};

use crate::filters::{hall_of_fame_flag, is_no_pick_marker};
pub use crate::filters::*;
pub use crate::model::*;
pub use crate::session::Session;

// **** Private helpers ****

// Running counts for one dimension (college or position).
#[derive(Debug, Default)]
struct Tally(HashMap<String, u64>);

impl Tally {
    fn add(&mut self, raw: &str) {
        let label = raw.trim();
        if label.is_empty() {
            return;
        }
        *self.0.entry(label.to_string()).or_insert(0) += 1;
    }

    fn distinct(&self) -> usize {
        self.0.len()
    }

    // Descending by count, then ascending by label.
    fn into_sorted(self) -> Vec<LabelCount> {
        let mut res: Vec<LabelCount> = self
            .0
            .into_iter()
            .map(|(label, count)| LabelCount { label, count })
            .collect();
        res.sort_by(|a, b| {
            b.count
                .cmp(&a.count)
                .then_with(|| compare_labels(&a.label, &b.label))
        });
        res
    }
}

// The label without its accents and case, compared first.
fn label_base(label: &str) -> String {
    label
        .nfd()
        .filter(|c| !unicode_normalization::char::is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

// The label with its accents but without case.
fn label_accented(label: &str) -> String {
    label.nfd().flat_map(char::to_lowercase).collect()
}

// One entry per letter: lowercase letters come before uppercase ones.
fn label_case(label: &str) -> Vec<bool> {
    label.nfd().map(char::is_uppercase).collect()
}

/// Orders two labels the way a reader expects from a sorted table.
///
/// Accents and case are ignored first, so `"Élon"` sits next to `"Elon"`.
/// Remaining ties put unaccented before accented letters, then lowercase
/// before uppercase, and finally fall back to the raw strings to stay total.
pub fn compare_labels(a: &str, b: &str) -> Ordering {
    label_base(a)
        .cmp(&label_base(b))
        .then_with(|| label_accented(a).cmp(&label_accented(b)))
        .then_with(|| label_case(a).cmp(&label_case(b)))
        .then_with(|| a.cmp(b))
}

// Blank seasons read as 0, like an empty numeric field in a spreadsheet.
fn season_number(season: &str) -> Option<f64> {
    let s = season.trim();
    if s.is_empty() {
        return Some(0.0);
    }
    s.parse::<f64>().ok().filter(|x| x.is_finite())
}

/// Orders seasons numerically. A blank season counts as 0. Seasons that are
/// not numbers come after all the numeric ones and are ordered between
/// themselves as strings.
pub fn compare_seasons(a: &str, b: &str) -> Ordering {
    let by_number = match (season_number(a), season_number(b)) {
        (Some(x), Some(y)) => x.total_cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    };
    by_number.then_with(|| a.cmp(b))
}

/// Reads the overall pick as an integer: an optional sign followed by the
/// leading digits of the trimmed text. Anything after the digits is ignored.
/// Digit runs too large for an `i64` saturate to `i64::MAX` (or `i64::MIN`).
pub fn parse_pick_number(pick_overall: &str) -> Option<i64> {
    let s = pick_overall.trim();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let digits_end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    if digits_end == 0 {
        return None;
    }
    let value = rest[..digits_end].bytes().fold(0i64, |acc, d| {
        let digit = i64::from(d - b'0');
        if negative {
            acc.saturating_mul(10).saturating_sub(digit)
        } else {
            acc.saturating_mul(10).saturating_add(digit)
        }
    });
    Some(value)
}

/// Computes the summary counts over a full draft table.
///
/// Records are never rejected: anything malformed simply does not count.
/// The college and position tables count every non-excluded record with a
/// value, whether it is a real pick or not.
pub fn aggregate(records: &[Record]) -> AggregateStats {
    info!("aggregate: processing {} records", records.len());

    let mut total: u64 = 0;
    let mut hof_players: Vec<HallOfFamer> = Vec::new();
    let mut colleges = Tally::default();
    let mut positions = Tally::default();
    let mut seasons: HashSet<String> = HashSet::new();

    for r in records.iter() {
        if is_excluded_player(r) {
            debug!("aggregate: skipping excluded record {:?}", r);
            continue;
        }
        let real = is_real_pick(r);
        if real {
            total += 1;
        }
        if real && hall_of_fame_flag(r) == 1.0 {
            hof_players.push(HallOfFamer {
                season: r.season.clone(),
                player: r.player.clone(),
            });
        }
        colleges.add(&r.college);
        positions.add(&r.position);
        if !r.season.is_empty() {
            seasons.insert(r.season.clone());
        }
    }

    hof_players.sort_by(|a, b| compare_seasons(&a.season, &b.season));
    let mut seasons_sorted: Vec<String> = seasons.into_iter().collect();
    seasons_sorted.sort_by(|a, b| compare_seasons(a, b));

    let stats = AggregateStats {
        total,
        hof_total: hof_players.len() as u64,
        distinct_colleges: colleges.distinct(),
        distinct_positions: positions.distinct(),
        by_college: colleges.into_sorted(),
        by_position: positions.into_sorted(),
        hof_players,
        seasons_sorted,
    };
    info!(
        "aggregate: {} picks, {} hall of famers, {} colleges, {} positions, {} seasons",
        stats.total,
        stats.hof_total,
        stats.distinct_colleges,
        stats.distinct_positions,
        stats.seasons_sorted.len()
    );
    stats
}

/// Builds the best pick of every season, in ascending season order.
///
/// For each season:
/// - the smallest numeric pick wins, and the first one seen wins a tie
/// - a "no pick" marker only counts while no numeric pick has been seen
/// - a season with only unreadable picks stays in the list with no pick
///
/// A blank season is a season of its own and sorts as 0.
pub fn build_pick_series(records: &[Record]) -> Vec<PickSeriesEntry> {
    info!("build_pick_series: processing {} records", records.len());
    let mut by_season: HashMap<String, PickSeriesEntry> = HashMap::new();

    for r in records.iter() {
        if is_excluded_player(r) {
            continue;
        }
        let entry = by_season
            .entry(r.season.clone())
            .or_insert_with(|| PickSeriesEntry::empty(&r.season));

        let pick = r.pick_overall.trim();
        if pick.is_empty() {
            continue;
        }
        if is_no_pick_marker(pick) {
            if entry.pick.is_none() {
                entry.no_pick = true;
            }
            continue;
        }
        match parse_pick_number(pick) {
            Some(p) if entry.pick.map_or(true, |current| p < current) => {
                debug!(
                    "build_pick_series: season {}: best pick {} ({})",
                    r.season, p, r.player
                );
                entry.pick = Some(p);
                entry.player = Some(r.player.clone());
                entry.no_pick = false;
            }
            Some(_) => {}
            None => {
                debug!(
                    "build_pick_series: season {}: unreadable pick {:?}",
                    r.season, r.pick_overall
                );
            }
        }
    }

    let mut res: Vec<PickSeriesEntry> = by_season.into_values().collect();
    res.sort_by(|a, b| compare_seasons(&a.season, &b.season));
    res
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(season: &str, pick: &str, player: &str, position: &str, college: &str) -> Record {
        Record {
            season: season.to_string(),
            pick_overall: pick.to_string(),
            player: player.to_string(),
            position: position.to_string(),
            college: college.to_string(),
            notes: String::new(),
            hall_of_fame: String::new(),
        }
    }

    fn hof(mut r: Record) -> Record {
        r.hall_of_fame = "1".to_string();
        r
    }

    fn init_logger() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    #[test]
    fn empty_input() {
        init_logger();
        let stats = aggregate(&[]);
        assert_eq!(stats, AggregateStats::default());
        assert_eq!(stats.total, 0);
        assert!(stats.by_college.is_empty());
        assert!(stats.hof_players.is_empty());
        assert!(stats.seasons_sorted.is_empty());
        assert!(build_pick_series(&[]).is_empty());
    }

    #[test]
    fn excluded_player_counts_nowhere() {
        init_logger();
        let records = vec![
            hof(rec("1968", "6", "Carl Eller", "DE", "Minnesota")),
            hof(rec("1969", "1", "Carl Eller Jr.", "DE", "Minnesota")),
        ];
        let stats = aggregate(&records);
        assert_eq!(stats, AggregateStats::default());
        assert!(build_pick_series(&records).is_empty());
    }

    #[test]
    fn label_tables_sorted_by_count_then_label() {
        init_logger();
        let mut records = Vec::new();
        for (college, n) in [("Miami", 3), ("Ohio State", 3), ("LSU", 5)] {
            for i in 0..n {
                records.push(rec(&format!("{}", 1970 + i), "10", "P", "QB", college));
            }
        }
        let stats = aggregate(&records);
        let order: Vec<(&str, u64)> = stats
            .by_college
            .iter()
            .map(|lc| (lc.label.as_str(), lc.count))
            .collect();
        assert_eq!(order, vec![("LSU", 5), ("Miami", 3), ("Ohio State", 3)]);
        assert_eq!(stats.distinct_colleges, 3);
        assert_eq!(stats.by_position, vec![LabelCount { label: "QB".to_string(), count: 11 }]);
    }

    #[test]
    fn label_ties_ignore_accents_and_put_lowercase_first() {
        init_logger();
        let records: Vec<Record> = ["Florida", "Élon", "alabama", "Alabama"]
            .iter()
            .map(|college| rec("1980", "5", "P", "", college))
            .collect();
        let stats = aggregate(&records);
        let order: Vec<&str> = stats.by_college.iter().map(|lc| lc.label.as_str()).collect();
        assert_eq!(order, vec!["alabama", "Alabama", "Élon", "Florida"]);

        assert_eq!(compare_labels("Elon", "Élon"), Ordering::Less);
        assert_eq!(compare_labels("Élon", "Emory"), Ordering::Less);
    }

    #[test]
    fn labels_are_trimmed_and_counted_for_no_pick_rows() {
        init_logger();
        let records = vec![
            rec("1985", "no pick", "", "", " Clemson "),
            rec("1986", "12", "A", " RB", "Clemson"),
            rec("1987", "", "B", "RB ", "   "),
        ];
        let stats = aggregate(&records);
        assert_eq!(stats.total, 1);
        assert_eq!(
            stats.by_college,
            vec![LabelCount { label: "Clemson".to_string(), count: 2 }]
        );
        assert_eq!(
            stats.by_position,
            vec![LabelCount { label: "RB".to_string(), count: 2 }]
        );
        assert_eq!(stats.seasons_sorted, vec!["1985", "1986", "1987"]);
    }

    #[test]
    fn hof_requires_real_pick() {
        init_logger();
        let records = vec![
            hof(rec("1990", "no pick", "Ghost", "", "")),
            hof(rec("1991", "", "Blank", "", "")),
            hof(rec("1992", "8", "Real", "", "")),
        ];
        let stats = aggregate(&records);
        assert_eq!(stats.hof_total, 1);
        assert_eq!(stats.hof_players[0].player, "Real");
    }

    #[test]
    fn seasons_sorted_numerically_with_text_last() {
        init_logger();
        let records = vec![
            hof(rec("n/a", "3", "X", "", "")),
            hof(rec("2001", "8", "B", "", "")),
            hof(rec("999", "1", "A", "", "")),
            hof(rec("2001", "9", "C", "", "")),
            rec("", "4", "NoSeason", "", ""),
        ];
        let stats = aggregate(&records);
        assert_eq!(stats.seasons_sorted, vec!["999", "2001", "n/a"]);
        let hofs: Vec<&str> = stats.hof_players.iter().map(|h| h.player.as_str()).collect();
        assert_eq!(hofs, vec!["A", "B", "C", "X"]);
        assert_eq!(stats.total, 5);
    }

    #[test]
    fn blank_season_sorts_as_zero() {
        init_logger();
        let records = vec![
            rec("1990", "3", "A", "", ""),
            rec("", "5", "B", "", ""),
        ];
        let series = build_pick_series(&records);
        assert_eq!(
            series,
            vec![
                PickSeriesEntry {
                    season: "".to_string(),
                    pick: Some(5),
                    player: Some("B".to_string()),
                    no_pick: false,
                },
                PickSeriesEntry {
                    season: "1990".to_string(),
                    pick: Some(3),
                    player: Some("A".to_string()),
                    no_pick: false,
                },
            ]
        );

        let stats = aggregate(&[
            hof(rec("1990", "3", "A", "", "")),
            hof(rec("", "5", "B", "", "")),
        ]);
        let hofs: Vec<&str> = stats.hof_players.iter().map(|h| h.player.as_str()).collect();
        assert_eq!(hofs, vec!["B", "A"]);
        assert_eq!(stats.seasons_sorted, vec!["1990"]);
        assert_eq!(compare_seasons(" ", "-1"), Ordering::Greater);
    }

    #[test]
    fn pick_series_tie_keeps_first() {
        init_logger();
        let records = vec![
            rec("1990", "12", "First", "", ""),
            rec("1990", "12", "Second", "", ""),
        ];
        let series = build_pick_series(&records);
        assert_eq!(series.len(), 1);
        assert_eq!(series[0].pick, Some(12));
        assert_eq!(series[0].player.as_deref(), Some("First"));
    }

    #[test]
    fn pick_series_real_pick_overrides_no_pick() {
        init_logger();
        let records = vec![
            rec("1985", "no pick", "", "", ""),
            rec("1985", "22", "Later", "", ""),
            rec("1985", "No Pick", "", "", ""),
        ];
        let series = build_pick_series(&records);
        assert_eq!(
            series,
            vec![PickSeriesEntry {
                season: "1985".to_string(),
                pick: Some(22),
                player: Some("Later".to_string()),
                no_pick: false,
            }]
        );
    }

    #[test]
    fn pick_series_keeps_smallest_and_unreadable_seasons() {
        init_logger();
        let records = vec![
            rec("2003", "25", "Late", "", ""),
            rec("2003", " 4 ", "Early", "", ""),
            rec("2003", "7", "Middle", "", ""),
            rec("1999", "TBD", "Unknown", "", ""),
            rec("2000", "", "Blank", "", ""),
        ];
        let series = build_pick_series(&records);
        let seasons: Vec<&str> = series.iter().map(|e| e.season.as_str()).collect();
        assert_eq!(seasons, vec!["1999", "2000", "2003"]);
        assert_eq!(series[0], PickSeriesEntry::empty("1999"));
        assert_eq!(series[1], PickSeriesEntry::empty("2000"));
        assert_eq!(series[2].pick, Some(4));
        assert_eq!(series[2].player.as_deref(), Some("Early"));
    }

    #[test]
    fn pick_number_parsing() {
        assert_eq!(parse_pick_number("1"), Some(1));
        assert_eq!(parse_pick_number(" 17 "), Some(17));
        assert_eq!(parse_pick_number("12 (from MIA)"), Some(12));
        assert_eq!(parse_pick_number("-3"), Some(-3));
        assert_eq!(parse_pick_number("abc"), None);
        assert_eq!(parse_pick_number("-"), None);
        assert_eq!(parse_pick_number(""), None);
        assert_eq!(parse_pick_number("99999999999999999999"), Some(i64::MAX));
        assert_eq!(parse_pick_number("-99999999999999999999"), Some(i64::MIN));
        assert_eq!(parse_pick_number("9223372036854775807"), Some(i64::MAX));
    }

    #[test]
    fn two_season_scenario() {
        init_logger();
        let records = vec![
            Record {
                hall_of_fame: "1".to_string(),
                ..rec("1973", "1", "A", "QB", "X")
            },
            rec("1974", "no pick", "B", "", ""),
        ];
        let stats = aggregate(&records);
        assert_eq!(stats.total, 1);
        assert_eq!(stats.hof_total, 1);
        assert_eq!(stats.distinct_colleges, 1);
        assert_eq!(
            stats.hof_players,
            vec![HallOfFamer {
                season: "1973".to_string(),
                player: "A".to_string()
            }]
        );

        let series = build_pick_series(&records);
        assert_eq!(
            series,
            vec![
                PickSeriesEntry {
                    season: "1973".to_string(),
                    pick: Some(1),
                    player: Some("A".to_string()),
                    no_pick: false,
                },
                PickSeriesEntry {
                    season: "1974".to_string(),
                    pick: None,
                    player: None,
                    no_pick: true,
                },
            ]
        );
    }
}
