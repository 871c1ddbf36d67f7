//! `anki2quiz`: convert Anki quiz exports to question JSON.

use std::io::{self, IsTerminal};
use std::process::ExitCode;

use clap::{ColorChoice, Parser};
use quiz_cli::logging::{LogConfig, init_logging};

mod cli;
mod commands;
mod summary;

use crate::cli::{Cli, Command};
use crate::commands::{run_columns, run_convert};

fn main() -> ExitCode {
    let cli = Cli::parse();
    cli.color.write_global();
    if let Err(error) = init_logging(&log_config_from_cli(&cli)) {
        eprintln!("error: failed to initialize logging: {error}");
        return ExitCode::FAILURE;
    }

    let outcome = match &cli.command {
        Command::Convert(args) => run_convert(args),
        Command::Columns => run_columns(),
    };
    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        // skipped rows never get here; only file-level failures do
        Err(error) => {
            eprintln!("error: {error:#}");
            ExitCode::FAILURE
        }
    }
}

/// An explicit `--log-level` wins over `-v`/`-q`; with neither, `RUST_LOG`
/// may override the default warn level.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let config = LogConfig::default()
        .with_format(cli.log_format.into())
        .with_log_file(cli.log_file.clone())
        .with_ansi(ansi_enabled(cli));
    match cli.log_level {
        Some(level) => config.with_level(level.into()),
        None if cli.verbosity.is_present() => {
            config.with_level(cli.verbosity.tracing_level_filter())
        }
        None => config,
    }
}

fn ansi_enabled(cli: &Cli) -> bool {
    match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    }
}
