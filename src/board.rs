use log::{debug, info, warn};

use draft_stats::*;
use snafu::{prelude::*, Snafu};

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value as JSValue;
use text_diff::print_diff;

use crate::args::Args;
use crate::board::config_reader::*;
use crate::board::io_common::simplify_file_name;
use crate::board::summary::build_summary_js;

pub mod config_reader;
pub mod io_common;
pub mod io_csv;
pub mod io_excel;
pub mod report;
pub mod summary;

const DEFAULT_TITLE: &str = "First-Round Draft Picks";

#[derive(Debug, Snafu)]
pub enum BoardError {
    #[snafu(display("Error opening file {path}"))]
    OpeningFile {
        source: std::io::Error,
        path: String,
    },
    #[snafu(display("Error writing file {path}"))]
    WritingFile {
        source: std::io::Error,
        path: String,
    },
    #[snafu(display("Error parsing line {lineno} of the CSV input"))]
    CsvLineParse { source: csv::Error, lineno: usize },
    #[snafu(display("Error opening Excel file {path}"))]
    OpeningExcel {
        source: calamine::XlsxError,
        path: String,
    },
    #[snafu(display("Worksheet {name} not found in {path}"))]
    MissingWorksheet { name: String, path: String },
    #[snafu(display("No header row in {path}"))]
    EmptyExcel { path: String },
    #[snafu(display("Error parsing JSON in {path}"))]
    ParsingJson {
        source: serde_json::Error,
        path: String,
    },
    #[snafu(display("Error serializing JSON"))]
    WritingJson { source: serde_json::Error },
    #[snafu(display("The summary differs from the reference summary {path}"))]
    ReferenceMismatch { path: String },

    #[snafu(whatever, display("{message}"))]
    Whatever {
        message: String,
        #[snafu(source(from(Box<dyn std::error::Error>, Some)))]
        source: Option<Box<dyn std::error::Error>>,
    },
}

pub type BoardResult<T> = Result<T, BoardError>;

/// The input formats of the draft table.
#[derive(Eq, PartialEq, Debug, Clone, Copy)]
pub enum Provider {
    /// Quoted CSV (RFC 4180).
    Csv,
    /// Line and comma splitting only, without any quoting.
    CsvNaive,
    Xlsx,
}

impl Provider {
    pub fn parse(name: &str) -> BoardResult<Provider> {
        match name {
            "csv" => Ok(Provider::Csv),
            "csv_naive" => Ok(Provider::CsvNaive),
            "xlsx" => Ok(Provider::Xlsx),
            x => whatever!("Provider not implemented: {:?}", x),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Provider::Csv => "csv",
            Provider::CsvNaive => "csv_naive",
            Provider::Xlsx => "xlsx",
        }
    }

    fn from_extension(path: &str) -> Provider {
        match Path::new(path).extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("xlsx") => Provider::Xlsx,
            _ => Provider::Csv,
        }
    }
}

/// Everything needed for one run, after merging the configuration file and
/// the command line.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct RunSettings {
    pub title: String,
    pub input_path: String,
    pub provider: Provider,
    pub excel_worksheet_name: Option<String>,
    pub out: Option<String>,
    pub reference: Option<String>,
    pub drill_down: DrillDown,
}

fn resolve_path(root: Option<&Path>, p: &str) -> String {
    match root {
        Some(dir) if Path::new(p).is_relative() => {
            let full: PathBuf = dir.join(p);
            full.display().to_string()
        }
        _ => p.to_string(),
    }
}

fn dimension_selection(args: &Args) -> BoardResult<Option<(Dimension, String)>> {
    match (&args.dimension, &args.key) {
        (None, None) => Ok(None),
        (Some(name), Some(key)) => match name.parse::<Dimension>() {
            Ok(dimension) => Ok(Some((dimension, key.clone()))),
            Err(e) => whatever!("{}", e),
        },
        _ => whatever!("--dimension and --key must be used together"),
    }
}

pub fn resolve_settings(args: &Args) -> BoardResult<RunSettings> {
    let (config, config_dir): (BoardConfig, Option<PathBuf>) = match &args.config {
        Some(config_path) => {
            let config = read_config(config_path)?;
            let dir = Path::new(config_path).parent().map(|p| p.to_path_buf());
            (config, dir)
        }
        None => (BoardConfig::default(), None),
    };
    debug!("resolve_settings: config: {:?}", config);
    let root = config_dir.as_deref();

    let source = config.data_source.clone();
    let input_path = match (&args.input, &source) {
        (Some(p), _) => p.clone(),
        (None, Some(ds)) => resolve_path(root, &ds.file_path),
        (None, None) => {
            whatever!("No draft table given: use --input or a configuration file with a dataSource")
        }
    };

    let provider_name = args
        .input_type
        .clone()
        .or_else(|| source.as_ref().and_then(|ds| ds.provider.clone()));
    let provider = match provider_name {
        Some(name) => Provider::parse(&name)?,
        None => Provider::from_extension(&input_path),
    };

    let excel_worksheet_name = args
        .excel_worksheet_name
        .clone()
        .or_else(|| source.and_then(|ds| ds.excel_worksheet_name));

    let out = match &args.out {
        Some(o) => Some(o.clone()),
        None => config
            .output_settings
            .output_path
            .as_deref()
            .map(|p| resolve_path(root, p)),
    };

    let from_config = config.drill_down.unwrap_or_default();
    let (by_college, by_position) = match dimension_selection(args)? {
        Some((Dimension::College, key)) => (Some(key), None),
        Some((Dimension::Position, key)) => (None, Some(key)),
        None => (None, None),
    };
    let drill_down = DrillDown {
        season: args.season.clone().or(from_config.season),
        college: args.college.clone().or(by_college).or(from_config.college),
        position: args.position.clone().or(by_position).or(from_config.position),
        hof_player: args.hof_player.clone().or(from_config.hof_player),
        hof_season: args.hof_season.clone().or(from_config.hof_season),
    };
    if drill_down.hof_player.is_some() != drill_down.hof_season.is_some() {
        whatever!("A Hall-of-Fame drill-down needs both a player and a season");
    }

    Ok(RunSettings {
        title: config
            .output_settings
            .dashboard_title
            .unwrap_or_else(|| DEFAULT_TITLE.to_string()),
        input_path,
        provider,
        excel_worksheet_name,
        out,
        reference: args.reference.clone(),
        drill_down,
    })
}

/// The row source: reads the whole draft table, in file order.
pub fn read_draft_table(settings: &RunSettings) -> BoardResult<Vec<Record>> {
    let path = settings.input_path.as_str();
    info!(
        "Attempting to read draft table {:?} ({})",
        path,
        settings.provider.name()
    );
    let records = match settings.provider {
        Provider::Csv => io_csv::read_csv_records(path)?,
        Provider::CsvNaive => io_csv::read_csv_records_naive(path)?,
        Provider::Xlsx => {
            io_excel::read_excel_records(path, settings.excel_worksheet_name.as_deref())?
        }
    };
    info!(
        "Read {} records from {}",
        records.len(),
        simplify_file_name(path)
    );
    Ok(records)
}

fn write_summary(out: Option<&str>, pretty: &str) -> BoardResult<()> {
    match out {
        None | Some("stdout") | Some("") => {
            println!("{}", pretty);
        }
        Some(path) => {
            info!("Writing summary to {:?}", path);
            fs::write(path, pretty).context(WritingFileSnafu { path })?;
        }
    }
    Ok(())
}

fn check_reference(reference_path: &str, pretty: &str) -> BoardResult<()> {
    let summary_ref: JSValue = read_summary(reference_path)?;
    let pretty_ref = serde_json::to_string_pretty(&summary_ref).context(WritingJsonSnafu {})?;
    if pretty_ref != pretty {
        warn!("Found differences with the reference summary");
        print_diff(pretty_ref.as_str(), pretty, "\n");
        return ReferenceMismatchSnafu {
            path: reference_path,
        }
        .fail();
    }
    info!("Summary matches the reference {:?}", reference_path);
    Ok(())
}

pub fn run_board(args: &Args) -> BoardResult<()> {
    let settings = resolve_settings(args)?;
    info!("settings: {:?}", settings);

    let records = read_draft_table(&settings)?;
    let session = Session::new(records);

    let summary_js = build_summary_js(&settings, &session);
    let pretty = serde_json::to_string_pretty(&summary_js).context(WritingJsonSnafu {})?;
    write_summary(settings.out.as_deref(), &pretty)?;

    if let Some(reference) = &settings.reference {
        check_reference(reference, &pretty)?;
    }
    Ok(())
}
