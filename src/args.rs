use clap::{Parser, Subcommand};

/// Summary tables, best-pick timeline and drill-downs for a table of first-round draft picks.
#[derive(Parser, Debug, Clone)]
#[clap(author, version, about, long_about = None)]
pub struct Args {
    /// (file path, optional) A JSON file describing the data source, the output and the drill-downs.
    /// See the manual for the format. Options passed on the command line override it.
    #[clap(short, long, value_parser)]
    pub config: Option<String>,

    /// (file path) A reference summary in JSON format. If provided, draftboard checks that the
    /// computed summary matches it and prints the differences otherwise.
    #[clap(short, long, value_parser)]
    pub reference: Option<String>,

    /// (file path, 'stdout' or empty) Where to write the JSON summary. Defaults to stdout.
    /// Setting this option overrides the path that may be specified with the --config option.
    #[clap(short, long, value_parser)]
    pub out: Option<String>,

    /// (file path) The draft table. Setting this option overrides the file of the --config option.
    #[clap(short, long, value_parser)]
    pub input: Option<String>,

    /// (default csv) The type of the input: csv, csv_naive or xlsx.
    #[clap(long, value_parser)]
    pub input_type: Option<String>,

    /// (default: first worksheet) When using an Excel file, the name of the worksheet to read.
    #[clap(long, value_parser)]
    pub excel_worksheet_name: Option<String>,

    /// Adds the records of this season to the summary.
    #[clap(long, value_parser)]
    pub season: Option<String>,

    /// Adds the real picks from this college to the summary.
    #[clap(long, value_parser)]
    pub college: Option<String>,

    /// Adds the real picks at this position to the summary.
    #[clap(long, value_parser)]
    pub position: Option<String>,

    /// (college or position) Drills into one dimension of the summary tables. Must be used with --key.
    #[clap(long, value_parser)]
    pub dimension: Option<String>,

    /// The label selected in the dimension given by --dimension, for example "LSU" or "QB".
    #[clap(long, value_parser)]
    pub key: Option<String>,

    /// Adds the records of this Hall-of-Fame player to the summary. Must be used with --hof-season.
    #[clap(long, value_parser)]
    pub hof_player: Option<String>,

    /// The season of the Hall-of-Fame player selected with --hof-player.
    #[clap(long, value_parser)]
    pub hof_season: Option<String>,

    // Other arguments
    /// If passed as an argument, will turn on verbose logging to the standard error.
    #[clap(long, takes_value = false)]
    pub verbose: bool,

    #[clap(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Edits and exports the free-text project report.
    Report(ReportArgs),
}

#[derive(Parser, Debug, Clone)]
pub struct ReportArgs {
    /// (file path) The file holding the saved report. It is created on the first save.
    #[clap(short, long, value_parser, default_value = "project-report.json")]
    pub state: String,

    /// Replaces the title of the report.
    #[clap(long, value_parser)]
    pub title: Option<String>,

    /// Replaces the content of the report.
    #[clap(long, value_parser)]
    pub content: Option<String>,

    /// (file path) Replaces the content of the report with the content of this file. Cannot be used with --content.
    #[clap(long, value_parser)]
    pub content_file: Option<String>,

    /// (file path) Exports the report as a standalone HTML page.
    #[clap(long, value_parser)]
    pub html: Option<String>,

    /// (file path) Exports the report as Markdown.
    #[clap(long, value_parser)]
    pub markdown: Option<String>,
}
