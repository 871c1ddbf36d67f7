use std::fs;
use std::path::{Path, PathBuf};

use quiz_model::QuestionRecord;
use serde::Serialize;
use serde_json::Serializer;
use serde_json::ser::PrettyFormatter;

use crate::error::{OutputError, Result};

/// Indentation unit of the emitted JSON.
pub const JSON_INDENT: &[u8] = b"    ";

/// A completed output write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenOutput {
    pub path: PathBuf,
    pub records: usize,
    pub bytes: usize,
}

/// Render records as a pretty-printed JSON array (no trailing newline).
pub fn to_json_string(records: &[QuestionRecord]) -> Result<String> {
    let mut buffer = Vec::new();
    let formatter = PrettyFormatter::with_indent(JSON_INDENT);
    let mut serializer = Serializer::with_formatter(&mut buffer, formatter);
    records.serialize(&mut serializer)?;
    // serde_json only emits valid UTF-8
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

/// Write records to `path`, truncating any existing file.
///
/// The parent directory must already exist.
pub fn write_records(path: &Path, records: &[QuestionRecord]) -> Result<WrittenOutput> {
    let json = to_json_string(records)?;
    fs::write(path, json.as_bytes()).map_err(|source| OutputError::FileWrite {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(
        path = %path.display(),
        records = records.len(),
        bytes = json.len(),
        "wrote output"
    );
    Ok(WrittenOutput {
        path: path.to_path_buf(),
        records: records.len(),
        bytes: json.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_model::AnswerOptions;
    use tempfile::tempdir;

    fn record(id: usize, question: &str, tags: &[&str]) -> QuestionRecord {
        QuestionRecord {
            id,
            topic: "Constitución".to_string(),
            question_text: question.to_string(),
            options: AnswerOptions::new("Sí", "No", "Quizá", "Nunca"),
            correct_answer: "a".to_string(),
            explanation: String::new(),
            tags: tags.iter().map(|t| (*t).to_string()).collect(),
        }
    }

    #[test]
    fn test_empty_array() {
        assert_eq!(to_json_string(&[]).unwrap(), "[]");
    }

    #[test]
    fn test_four_space_indent_and_literal_unicode() {
        let json = to_json_string(&[record(1, "¿Qué?", &[])]).unwrap();
        insta::assert_snapshot!(json, @r#"
[
    {
        "id": 1,
        "tema": "Constitución",
        "pregunta": "¿Qué?",
        "opciones": {
            "a": "Sí",
            "b": "No",
            "c": "Quizá",
            "d": "Nunca"
        },
        "respuestaCorrecta": "a",
        "explicacion": "",
        "tags": []
    }
]
"#);
        assert!(!json.ends_with('\n'));
    }

    #[test]
    fn test_write_overwrites_existing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.json");
        fs::write(&path, "stale content that is longer than the new output").unwrap();

        let written = write_records(&path, &[record(1, "Q", &["T1"])]).unwrap();
        let contents = fs::read_to_string(&path).unwrap();

        assert_eq!(written.records, 1);
        assert_eq!(written.bytes, contents.len());
        let parsed: Vec<QuestionRecord> = serde_json::from_str(&contents).unwrap();
        assert_eq!(parsed, vec![record(1, "Q", &["T1"])]);
    }

    #[test]
    fn test_write_into_missing_directory_fails() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing").join("out.json");
        let error = write_records(&path, &[]).unwrap_err();
        assert!(matches!(error, OutputError::FileWrite { .. }));
        assert_eq!(error.to_string(), format!("failed to write {}", path.display()));
    }
}
