// Primitives for reading CSV files.

use std::fs;

use draft_stats::Record;
use log::debug;
use snafu::ResultExt;

use crate::board::io_common::HeaderMap;
use crate::board::*;

fn read_text(path: &str) -> BoardResult<String> {
    fs::read_to_string(path).context(OpeningFileSnafu { path })
}

pub fn read_csv_records(path: &str) -> BoardResult<Vec<Record>> {
    parse_csv(&read_text(path)?)
}

pub fn read_csv_records_naive(path: &str) -> BoardResult<Vec<Record>> {
    Ok(parse_csv_naive(&read_text(path)?))
}

/// Parses a CSV table with a header row, with support for quoted fields.
/// Rows may be shorter or longer than the header.
pub fn parse_csv(text: &str) -> BoardResult<Vec<Record>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());
    let header_map = HeaderMap::new(rdr.headers().context(CsvLineParseSnafu { lineno: 1_usize })?);

    let mut res: Vec<Record> = Vec::new();
    for (idx, line_r) in rdr.records().enumerate() {
        let lineno = idx + 2;
        let line = line_r.context(CsvLineParseSnafu { lineno })?;
        debug!("parse_csv: lineno: {:?} row: {:?}", lineno, line);
        res.push(header_map.record(line.iter()));
    }
    Ok(res)
}

/// Parses a CSV table by splitting lines and then bare commas.
///
/// There is no quoting: a comma inside a field shifts all the following
/// columns of that row. Blank lines are skipped.
pub fn parse_csv_naive(text: &str) -> Vec<Record> {
    let mut lines = text
        .split('\n')
        .map(|l| l.strip_suffix('\r').unwrap_or(l));
    let header_map = match lines.next() {
        Some(h) if !h.trim().is_empty() => HeaderMap::new(h.split(',')),
        _ => return Vec::new(),
    };
    lines
        .filter(|l| !l.trim().is_empty())
        .map(|l| header_map.record(l.split(',')))
        .collect()
}
