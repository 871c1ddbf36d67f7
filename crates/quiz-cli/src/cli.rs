//! CLI argument definitions for the quiz converter.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use quiz_cli::logging::LogFormat;
use quiz_ingest::DEFAULT_TAG_MIN_FIELDS;
use tracing::level_filters::LevelFilter;

#[derive(Parser)]
#[command(
    name = "anki2quiz",
    version,
    about = "Convert Anki quiz exports to question JSON",
    long_about = "Convert tab-separated Anki quiz exports into a JSON array of questions.\n\n\
                  Comment lines (starting with '#') and blank lines are ignored.\n\
                  Rows with fewer than 8 columns are skipped and reported."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

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
    /// Convert an export file to question JSON.
    Convert(ConvertArgs),

    /// List the expected input columns.
    Columns,
}

#[derive(Parser)]
pub struct ConvertArgs {
    /// Tab-separated export to read.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// JSON file to write (overwritten if present).
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,

    /// Minimum row width for reading the last column as tags.
    ///
    /// The default only reads tags from the long export variant. Use 9 for
    /// exports that carry tags in a ninth column.
    #[arg(long = "tag-min-fields", value_name = "N", default_value_t = DEFAULT_TAG_MIN_FIELDS)]
    pub tag_min_fields: usize,

    /// Convert and report without writing the output file.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
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

impl From<LogLevelArg> for LevelFilter {
    fn from(level: LogLevelArg) -> Self {
        match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        }
    }
}

impl From<LogFormatArg> for LogFormat {
    fn from(format: LogFormatArg) -> Self {
        match format {
            LogFormatArg::Pretty => LogFormat::Pretty,
            LogFormatArg::Compact => LogFormat::Compact,
            LogFormatArg::Json => LogFormat::Json,
        }
    }
}
