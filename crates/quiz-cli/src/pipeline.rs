//! Conversion pipeline: ingest, convert, write.

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{debug, info, info_span};

use quiz_ingest::{Conversion, ConvertOptions, RowConverter, SkippedRow, read_rows};
use quiz_output::write_records;

use crate::types::ConvertResult;

/// What to do with the converted records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteMode {
    Write,
    DryRun,
}

/// Receives row diagnostics while an export is converted.
pub trait ConvertReporter {
    /// Called once per run with every skipped row, before any output is
    /// written. Not called when no row was skipped.
    fn skipped_rows(&mut self, rows: &[SkippedRow]);
}

/// Convert `input` into question JSON at `output`.
///
/// Short rows are skipped, handed to `reporter`, and returned in the result.
/// Failing to read the input or to write the output is an error; rows
/// skipped before a failed write have already been reported.
pub fn convert_export(
    input: &Path,
    output: &Path,
    options: ConvertOptions,
    mode: WriteMode,
    reporter: &mut dyn ConvertReporter,
) -> Result<ConvertResult> {
    let span = info_span!(
        "convert",
        input = %input.display(),
        output = %output.display()
    );
    let _guard = span.enter();

    // =========================================================================
    // Stage 1: Ingest
    // =========================================================================
    let ingest_start = Instant::now();
    let rows = read_rows(input).with_context(|| format!("read export {}", input.display()))?;
    debug!(
        rows = rows.len(),
        duration_ms = ingest_start.elapsed().as_millis(),
        "ingest complete"
    );

    // =========================================================================
    // Stage 2: Convert
    // =========================================================================
    let conversion = RowConverter::new(options).convert(&rows);
    info!(
        records = conversion.record_count(),
        skipped = conversion.skipped.len(),
        "converted rows"
    );
    if !conversion.skipped.is_empty() {
        reporter.skipped_rows(&conversion.skipped);
    }

    // =========================================================================
    // Stage 3: Output
    // =========================================================================
    let bytes_written = match mode {
        WriteMode::Write => {
            let written = write_records(output, &conversion.records)
                .with_context(|| format!("write output {}", output.display()))?;
            Some(written.bytes)
        }
        WriteMode::DryRun => {
            info!("dry run: output not written");
            None
        }
    };

    Ok(build_result(input, output, conversion, bytes_written))
}

fn build_result(
    input: &Path,
    output: &Path,
    conversion: Conversion,
    bytes_written: Option<usize>,
) -> ConvertResult {
    let unrecognized_answers = conversion.unrecognized_answers();
    ConvertResult {
        input: input.to_path_buf(),
        output: output.to_path_buf(),
        records: conversion.record_count(),
        skipped: conversion.skipped,
        comment_rows: conversion.comment_rows,
        unrecognized_answers,
        bytes_written,
    }
}
