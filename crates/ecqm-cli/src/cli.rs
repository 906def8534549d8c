//! CLI argument definitions for the eCQM list generator.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use colorchoice_clap::Color;
use ecqm_cli::config::{DEFAULT_JSON_DIR, DEFAULT_OUTPUT_DIR};

#[derive(Parser)]
#[command(
    name = "ecqm-list",
    version,
    about = "Generate list_options SQL for an eCQM measure list",
    long_about = "Scan extracted eCQM measure descriptors and write a SQL script that\n\
                  inserts them as a selectable list into the list_options table."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for warnings only).
    #[command(flatten)]
    pub verbosity: Verbosity<InfoLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Generate the list_options SQL script from a measures directory.
    Generate(GenerateArgs),

    /// Show one measure package and its value sets.
    Show(ShowArgs),
}

/// Where measure descriptors are read from.
#[derive(Args)]
pub struct InputArgs {
    /// Directory containing extracted eCQM JSON measures.
    #[arg(long = "json-dir", env = "ECQM_JSON_DIR", value_name = "DIR", default_value = DEFAULT_JSON_DIR)]
    pub json_dir: PathBuf,

    /// Reporting-period year (e.g. 2025).
    ///
    /// Selects `<BASE_DIR>/<YEAR>_reporting_period/<JSON_DIR>` as input and
    /// derives the list id and title when they are not given.
    #[arg(long = "year", env = "ECQM_YEAR", value_name = "YYYY")]
    pub year: Option<u16>,

    /// Directory holding the `<YEAR>_reporting_period` folders.
    #[arg(long = "base-dir", env = "ECQM_BASE_DIR", value_name = "DIR", default_value = ".")]
    pub base_dir: PathBuf,
}

#[derive(Args)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// List id (default: ecqm_<YEAR>_reporting).
    #[arg(long = "list-id", env = "ECQM_LIST_ID", value_name = "ID")]
    pub list_id: Option<String>,

    /// List title (default: eCQM <YEAR> Performance Period).
    #[arg(long = "list-title", env = "ECQM_LIST_TITLE", value_name = "TITLE")]
    pub list_title: Option<String>,

    /// Where to write the SQL output.
    #[arg(long = "output-dir", env = "ECQM_OUTPUT_DIR", value_name = "DIR", default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: PathBuf,

    /// Comma-separated measure ids to mark as default active.
    #[arg(
        long = "defaults",
        env = "ECQM_DEFAULTS",
        value_name = "IDS",
        value_delimiter = ','
    )]
    pub defaults: Vec<String>,

    /// Print the SQL to stdout instead of writing the file.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

#[derive(Args)]
pub struct ShowArgs {
    /// Measure name, e.g. CMS122v12.
    #[arg(value_name = "MEASURE")]
    pub measure: String,

    #[command(flatten)]
    pub input: InputArgs,

    /// Print the raw measure JSON.
    #[arg(long = "raw")]
    pub raw: bool,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
