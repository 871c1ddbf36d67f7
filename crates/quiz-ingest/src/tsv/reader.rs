//! Tab-delimited export reading.
//!
//! Quoting is disabled: quote characters are literal text, and a tab or
//! newline inside a field misaligns the columns of that row.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};

use crate::error::{IngestError, Result};

/// Field delimiter of the export format.
pub const FIELD_DELIMITER: u8 = b'\t';

/// One raw row of the export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceRow {
    /// 1-based line number where the row starts.
    pub line: u64,
    pub fields: Vec<String>,
}

impl SourceRow {
    pub fn new(line: u64, fields: Vec<String>) -> Self {
        Self { line, fields }
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Reads every row of an export file.
///
/// The file is opened, read to the end and closed before returning.
pub fn read_rows(path: &Path) -> Result<Vec<SourceRow>> {
    let file = File::open(path).map_err(|e| IngestError::open(path.to_path_buf(), e))?;
    parse_rows(file, path)
}

/// Reads every row from `reader`; `origin` is only used in error messages.
pub fn parse_rows<R: Read>(reader: R, origin: &Path) -> Result<Vec<SourceRow>> {
    let mut reader = ReaderBuilder::new()
        .delimiter(FIELD_DELIMITER)
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .from_reader(reader);

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| IngestError::Parse {
            path: origin.to_path_buf(),
            line: e.position().map_or(0, csv::Position::line),
            message: e.to_string(),
        })?;
        let line = record.position().map_or(0, csv::Position::line);
        let mut fields = record_fields(&record);
        if rows.is_empty() {
            strip_bom(&mut fields);
        }
        rows.push(SourceRow::new(line, fields));
    }

    tracing::debug!(path = %origin.display(), rows = rows.len(), "read export rows");
    Ok(rows)
}

fn record_fields(record: &StringRecord) -> Vec<String> {
    record.iter().map(str::to_string).collect()
}

fn strip_bom(fields: &mut [String]) {
    if let Some(first) = fields.first_mut() {
        if let Some(rest) = first.strip_prefix('\u{feff}') {
            *first = rest.to_string();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn parse(content: &str) -> Vec<SourceRow> {
        parse_rows(content.as_bytes(), Path::new("<memory>")).unwrap()
    }

    #[test]
    fn test_splits_on_tabs() {
        let rows = parse("a\tb\tc\nd\te\n");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].fields, vec!["a", "b", "c"]);
        assert_eq!(rows[1].fields, vec!["d", "e"]);
    }

    #[test]
    fn test_quotes_are_literal() {
        let rows = parse("\"quoted\ttext\"\tsay \"hi\"\n");
        assert_eq!(rows[0].fields, vec!["\"quoted", "text\"", "say \"hi\""]);
    }

    #[test]
    fn test_records_line_numbers() {
        let rows = parse("a\tb\nc\td\r\ne\tf");
        let lines: Vec<u64> = rows.iter().map(|r| r.line).collect();
        assert_eq!(lines, vec![1, 2, 3]);
        assert_eq!(rows[1].fields, vec!["c", "d"]);
    }

    #[test]
    fn test_keeps_empty_trailing_fields() {
        let rows = parse("a\t\t\n");
        assert_eq!(rows[0].fields, vec!["a", "", ""]);
    }

    #[test]
    fn test_strips_bom() {
        let rows = parse("\u{feff}G1\tTopic\n");
        assert_eq!(rows[0].fields[0], "G1");
    }

    #[test]
    fn test_invalid_utf8_is_parse_error() {
        let bytes: &[u8] = b"ok\tfine\n\xff\xfe\tbad\n";
        let result = parse_rows(bytes, Path::new("bad.txt"));
        assert!(matches!(result, Err(IngestError::Parse { .. })));
    }

    #[test]
    fn test_read_rows_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "#separator:tab\nG1\tTema\n").unwrap();
        let rows = read_rows(file.path()).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].fields, vec!["#separator:tab"]);
    }

    #[test]
    fn test_read_rows_missing_file() {
        let result = read_rows(Path::new("/definitely/not/here.txt"));
        assert!(matches!(result, Err(IngestError::FileNotFound { .. })));
    }
}
