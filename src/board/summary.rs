// The JSON summary handed to the dashboard.

use serde_json::json;

use crate::board::io_common::simplify_file_name;
use crate::board::*;

fn label_counts_to_json(counts: &[LabelCount]) -> Vec<JSValue> {
    counts
        .iter()
        .map(|lc| json!({"label": lc.label, "count": lc.count}))
        .collect()
}

pub fn stats_to_json(stats: &AggregateStats) -> JSValue {
    let hof_players: Vec<JSValue> = stats
        .hof_players
        .iter()
        .map(|h| json!({"season": h.season, "player": h.player}))
        .collect();
    json!({
        "total": stats.total,
        "hofTotal": stats.hof_total,
        "distinctColleges": stats.distinct_colleges,
        "distinctPositions": stats.distinct_positions,
        "byCollege": label_counts_to_json(&stats.by_college),
        "byPosition": label_counts_to_json(&stats.by_position),
        "hofPlayers": hof_players,
        "seasonsSorted": stats.seasons_sorted,
    })
}

pub fn pick_series_to_json(series: &[PickSeriesEntry]) -> Vec<JSValue> {
    series
        .iter()
        .map(|e| {
            json!({
                "season": e.season,
                "pick": e.pick,
                "player": e.player,
                "noPick": e.no_pick,
            })
        })
        .collect()
}

pub fn records_to_json(records: &[Record]) -> Vec<JSValue> {
    records
        .iter()
        .map(|r| {
            json!({
                "season": r.season,
                "pick_overall": r.pick_overall,
                "player": r.player,
                "position": r.position,
                "college": r.college,
                "notes": r.notes,
                "hall_of_fame": r.hall_of_fame,
            })
        })
        .collect()
}

fn drill_down_to_json(dd: &DrillDown, session: &Session) -> Option<JSValue> {
    let mut res = serde_json::Map::new();
    if let Some(season) = &dd.season {
        res.insert(
            "season".to_string(),
            json!({"key": season, "records": records_to_json(&session.season(season))}),
        );
    }
    for (dimension, key) in [
        (Dimension::College, &dd.college),
        (Dimension::Position, &dd.position),
    ] {
        if let Some(key) = key {
            let records = session.by_dimension(dimension, key);
            res.insert(
                dimension.name().to_string(),
                json!({"key": key, "records": records_to_json(&records)}),
            );
        }
    }
    if let (Some(player), Some(season)) = (&dd.hof_player, &dd.hof_season) {
        res.insert(
            "hallOfFame".to_string(),
            json!({
                "player": player,
                "season": season,
                "records": records_to_json(&session.hall_of_famer(player, season)),
            }),
        );
    }
    if res.is_empty() {
        None
    } else {
        Some(JSValue::Object(res))
    }
}

pub fn build_summary_js(settings: &RunSettings, session: &Session) -> JSValue {
    let mut js = json!({
        "config": {
            "title": settings.title,
            "source": simplify_file_name(&settings.input_path),
            "provider": settings.provider.name(),
            "records": session.records().len(),
        },
        "stats": stats_to_json(session.stats()),
        "pickSeries": pick_series_to_json(session.pick_series()),
    });
    if let Some(dd) = drill_down_to_json(&settings.drill_down, session) {
        js["drillDown"] = dd;
    }
    js
}
