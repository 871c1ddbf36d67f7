//! Error types for quiz export ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// File-level failures while reading an export.
///
/// Row-level problems are not errors: short rows are reported as
/// [`SkippedRow`](crate::SkippedRow) entries and conversion continues.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Input file does not exist.
    #[error("input file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Input file exists but could not be opened or read.
    #[error("failed to read file {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The reader rejected the content (invalid UTF-8, I/O during iteration).
    #[error("failed to parse {path} at line {line}: {message}")]
    Parse {
        path: PathBuf,
        line: u64,
        message: String,
    },
}

impl IngestError {
    pub(crate) fn open(path: PathBuf, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::FileNotFound { path }
        } else {
            Self::FileRead { path, source }
        }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
