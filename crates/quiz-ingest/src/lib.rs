//! Quiz export ingestion.
//!
//! Reads tab-delimited flashcard exports and turns their rows into
//! [`QuestionRecord`](quiz_model::QuestionRecord)s.
//!
//! # Row handling
//!
//! - **Blank rows** and **comment rows** (first field starting with `#`) are skipped
//! - **Short rows** (fewer than [`MIN_FIELDS`] fields) are skipped and reported
//! - **Data rows** become one record each, numbered from 1 in input order
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use quiz_ingest::{ConvertOptions, convert_file};
//!
//! let conversion = convert_file(Path::new("export.txt"), &ConvertOptions::default())?;
//! for skipped in &conversion.skipped {
//!     println!("line {} has {} fields", skipped.line, skipped.field_count());
//! }
//! ```

mod convert;
mod error;
mod normalize;
mod options;
mod schema;
mod tsv;

// === Error Types ===
pub use error::{IngestError, Result};

// === Reading ===
pub use tsv::{FIELD_DELIMITER, SourceRow, parse_rows, read_rows};

// === Row Schema ===
pub use schema::{Column, DataRow, MIN_FIELDS, RowKind, classify};

// === Normalization ===
pub use normalize::{normalize_answer, normalize_question, split_tags};

// === Conversion ===
pub use convert::{Conversion, RowConverter, SkippedRow, convert_file};
pub use options::{ConvertOptions, DEFAULT_TAG_MIN_FIELDS};
