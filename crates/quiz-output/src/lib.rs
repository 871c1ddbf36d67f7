//! Output generation for converted quiz records.
//!
//! Records are written as one JSON array, indented with four spaces and with
//! non-ASCII text kept literal. The array is rendered in memory and written
//! to disk in a single call, replacing any existing file.

mod error;
mod json;

pub use error::{OutputError, Result};
pub use json::{JSON_INDENT, WrittenOutput, to_json_string, write_records};
