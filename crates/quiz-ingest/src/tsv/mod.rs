//! Tab-delimited reading utilities.

mod reader;

pub use reader::{FIELD_DELIMITER, SourceRow, parse_rows, read_rows};
