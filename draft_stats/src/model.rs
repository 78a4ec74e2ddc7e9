// ********* Input data structures ***********

use std::error::Error;
use std::fmt::Display;
use std::str::FromStr;

/// Records whose player starts with this prefix are dropped from every statistic.
///
/// The source table attributes one pick to the wrong player; the entry is
/// kept in the data file but must never be counted.
pub const EXCLUDED_PLAYER_PREFIX: &str = "Carl Eller";

/// Marker used in the overall pick column for seasons without a first-round pick.
/// Compared case-insensitively after trimming.
pub const NO_PICK_MARKER: &str = "no pick";

/// The column names expected in the header of a draft table.
pub const COLUMNS: [&str; 7] = [
    "season",
    "pick_overall",
    "player",
    "position",
    "college",
    "notes",
    "hall_of_fame",
];

/// One row of the draft table.
///
/// All the fields are kept as raw text, exactly as read. A field that is
/// missing in the source is the empty string.
#[derive(Eq, PartialEq, Debug, Clone, Default, Hash)]
pub struct Record {
    pub season: String,
    pub pick_overall: String,
    pub player: String,
    pub position: String,
    pub college: String,
    pub notes: String,
    pub hall_of_fame: String,
}

impl Record {
    /// Builds a record from the fields in `COLUMNS` order.
    /// Missing trailing fields are left empty.
    pub fn from_fields(fields: &[&str]) -> Record {
        let get = |idx: usize| fields.get(idx).map(|s| s.to_string()).unwrap_or_default();
        Record {
            season: get(0),
            pick_overall: get(1),
            player: get(2),
            position: get(3),
            college: get(4),
            notes: get(5),
            hall_of_fame: get(6),
        }
    }

    /// Sets a field by its column name. Unknown columns are ignored and
    /// reported with `false`.
    pub fn set_field(&mut self, column: &str, value: &str) -> bool {
        let slot = match column {
            "season" => &mut self.season,
            "pick_overall" => &mut self.pick_overall,
            "player" => &mut self.player,
            "position" => &mut self.position,
            "college" => &mut self.college,
            "notes" => &mut self.notes,
            "hall_of_fame" => &mut self.hall_of_fame,
            _ => return false,
        };
        *slot = value.to_string();
        true
    }
}

/// The dimensions a summary table can be drilled into.
#[derive(Eq, PartialEq, Debug, Clone, Copy, Hash)]
pub enum Dimension {
    College,
    Position,
}

impl Dimension {
    pub fn name(&self) -> &'static str {
        match self {
            Dimension::College => "college",
            Dimension::Position => "position",
        }
    }

    pub(crate) fn field<'a>(&self, record: &'a Record) -> &'a str {
        match self {
            Dimension::College => record.college.as_str(),
            Dimension::Position => record.position.as_str(),
        }
    }
}

#[derive(Eq, PartialEq, Debug, Clone)]
pub struct UnknownDimension(pub String);

impl Error for UnknownDimension {}

impl Display for UnknownDimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown dimension {:?} (expected college or position)", self.0)
    }
}

impl FromStr for Dimension {
    type Err = UnknownDimension;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "college" => Ok(Dimension::College),
            "position" => Ok(Dimension::Position),
            x => Err(UnknownDimension(x.to_string())),
        }
    }
}

// ******** Output data structures *********

/// A grouped count, as shown in the college and position tables.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct LabelCount {
    pub label: String,
    pub count: u64,
}

/// A Hall-of-Fame pick, as listed in the summary.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct HallOfFamer {
    pub season: String,
    pub player: String,
}

/// Summary counts over a whole draft table.
///
/// This is a snapshot: it is recomputed from scratch for every load.
#[derive(Eq, PartialEq, Debug, Clone, Default)]
pub struct AggregateStats {
    /// Number of real picks.
    pub total: u64,
    pub hof_total: u64,
    pub distinct_colleges: usize,
    pub distinct_positions: usize,
    /// Descending by count, then ascending by label.
    pub by_college: Vec<LabelCount>,
    pub by_position: Vec<LabelCount>,
    /// Ascending by season.
    pub hof_players: Vec<HallOfFamer>,
    pub seasons_sorted: Vec<String>,
}

/// The best pick of one season, used to draw the timeline chart.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct PickSeriesEntry {
    pub season: String,
    /// The smallest overall pick number seen for this season.
    pub pick: Option<i64>,
    pub player: Option<String>,
    /// Only a "no pick" marker was seen for this season.
    pub no_pick: bool,
}

impl PickSeriesEntry {
    pub(crate) fn empty(season: &str) -> PickSeriesEntry {
        PickSeriesEntry {
            season: season.to_string(),
            pick: None,
            player: None,
            no_pick: false,
        }
    }
}
