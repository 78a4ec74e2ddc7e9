// Reading the draft table from an Excel workbook.

use calamine::{open_workbook, DataType, Reader, Xlsx};
use snafu::{OptionExt, ResultExt};

use crate::board::io_common::HeaderMap;
use crate::board::*;

/// Reads the given worksheet (the first one by default). The first row is the
/// header, and every cell is turned back into the text it displays.
pub fn read_excel_records(path: &str, worksheet: Option<&str>) -> BoardResult<Vec<Record>> {
    let mut workbook: Xlsx<_> = open_workbook(path).context(OpeningExcelSnafu { path })?;
    let range = match worksheet {
        Some(name) => workbook
            .worksheet_range(name)
            .context(MissingWorksheetSnafu { name, path })?,
        None => workbook
            .worksheet_range_at(0)
            .context(EmptyExcelSnafu { path })?,
    }
    .context(OpeningExcelSnafu { path })?;

    let mut rows = range.rows();
    let header: Vec<String> = rows
        .next()
        .context(EmptyExcelSnafu { path })?
        .iter()
        .map(cell_text)
        .collect();
    let header_map = HeaderMap::new(header.iter().map(|s| s.as_str()));

    let mut res: Vec<Record> = Vec::new();
    for row in rows {
        let fields: Vec<String> = row.iter().map(cell_text).collect();
        if fields.iter().all(|f| f.trim().is_empty()) {
            continue;
        }
        debug!("read_excel_records: row: {:?}", fields);
        res.push(header_map.record(fields.iter().map(|s| s.as_str())));
    }
    Ok(res)
}

fn cell_text(cell: &DataType) -> String {
    match cell {
        DataType::String(s) => s.clone(),
        DataType::Int(i) => i.to_string(),
        // Whole numbers are stored as floats: 1.0 must read back as "1".
        DataType::Float(f) if f.fract() == 0.0 && f.abs() < 1e15 => format!("{}", *f as i64),
        DataType::Float(f) => f.to_string(),
        DataType::Bool(b) => b.to_string(),
        DataType::Empty => String::new(),
        other => {
            warn!("cell_text: unsupported cell {:?}, read as empty", other);
            String::new()
        }
    }
}
