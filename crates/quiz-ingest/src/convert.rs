//! Row-to-record conversion.

use std::path::Path;

use quiz_model::{AnswerOptions, QuestionRecord};
use tracing::{debug, warn};

use crate::error::Result;
use crate::normalize::{normalize_answer, normalize_question, split_tags};
use crate::options::ConvertOptions;
use crate::schema::{Column, DataRow, RowKind, classify};
use crate::tsv::{SourceRow, read_rows};

/// A row dropped for having too few fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRow {
    pub line: u64,
    pub fields: Vec<String>,
}

impl SkippedRow {
    pub fn field_count(&self) -> usize {
        self.fields.len()
    }
}

/// Outcome of converting one export.
#[derive(Debug, Clone, Default)]
pub struct Conversion {
    /// Records in input order, ids `1..=records.len()`.
    pub records: Vec<QuestionRecord>,
    pub skipped: Vec<SkippedRow>,
    pub comment_rows: usize,
}

impl Conversion {
    pub fn record_count(&self) -> usize {
        self.records.len()
    }

    /// Records whose answer letter is not one of `a`-`d`.
    pub fn unrecognized_answers(&self) -> usize {
        self.records
            .iter()
            .filter(|record| record.answer_key().is_none())
            .count()
    }
}

/// Turns export rows into question records.
#[derive(Debug, Clone, Default)]
pub struct RowConverter {
    options: ConvertOptions,
}

impl RowConverter {
    pub fn new(options: ConvertOptions) -> Self {
        Self { options }
    }

    /// Convert rows in order. Short rows are collected in
    /// [`Conversion::skipped`] and do not consume an id.
    pub fn convert(&self, rows: &[SourceRow]) -> Conversion {
        let mut conversion = Conversion::default();
        for row in rows {
            match classify(&row.fields) {
                // the reader already drops empty lines
                RowKind::Blank => {}
                RowKind::Comment => conversion.comment_rows += 1,
                RowKind::Malformed => {
                    warn!(
                        line = row.line,
                        fields = row.len(),
                        "skipping malformed row"
                    );
                    conversion.skipped.push(SkippedRow {
                        line: row.line,
                        fields: row.fields.clone(),
                    });
                }
                RowKind::Data => {
                    let Some(data) = DataRow::new(&row.fields) else {
                        continue;
                    };
                    let id = conversion.records.len() + 1;
                    let record = self.build_record(id, &data);
                    if record.answer_key().is_none() {
                        debug!(
                            line = row.line,
                            id,
                            answer = %record.correct_answer,
                            "answer letter outside a-d"
                        );
                    }
                    conversion.records.push(record);
                }
            }
        }
        debug!(
            records = conversion.records.len(),
            skipped = conversion.skipped.len(),
            comments = conversion.comment_rows,
            "conversion finished"
        );
        conversion
    }

    fn build_record(&self, id: usize, row: &DataRow<'_>) -> QuestionRecord {
        QuestionRecord {
            id,
            topic: row.get(Column::Topic).to_string(),
            question_text: normalize_question(row.get(Column::Question)),
            options: AnswerOptions::new(
                row.get(Column::OptionA),
                row.get(Column::OptionB),
                row.get(Column::OptionC),
                row.get(Column::OptionD),
            ),
            correct_answer: normalize_answer(row.get(Column::CorrectAnswer)),
            explanation: String::new(),
            tags: split_tags(row, &self.options),
        }
    }
}

/// Read and convert an export file.
pub fn convert_file(path: &Path, options: &ConvertOptions) -> Result<Conversion> {
    let rows = read_rows(path)?;
    Ok(RowConverter::new(*options).convert(&rows))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(line: u64, values: &[&str]) -> SourceRow {
        SourceRow::new(line, values.iter().map(|v| (*v).to_string()).collect())
    }

    fn valid(line: u64, question: &str, answer: &str) -> SourceRow {
        row(line, &["G1", "Topic", question, "o1", "o2", "o3", "o4", answer])
    }

    #[test]
    fn test_ids_are_contiguous() {
        let rows = vec![valid(1, "Q1", "A"), valid(2, "Q2", "B"), valid(3, "Q3", "C")];
        let conversion = RowConverter::default().convert(&rows);
        let ids: Vec<usize> = conversion.records.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_short_row_does_not_consume_id() {
        let rows = vec![
            valid(1, "R1", "A"),
            row(2, &["G2", "Topic", "R2", "o1", "o2", "o3"]),
            valid(3, "R3", "D"),
        ];
        let conversion = RowConverter::default().convert(&rows);

        assert_eq!(conversion.record_count(), 2);
        assert_eq!(conversion.records[0].id, 1);
        assert_eq!(conversion.records[0].question_text, "R1");
        assert_eq!(conversion.records[1].id, 2);
        assert_eq!(conversion.records[1].question_text, "R3");

        assert_eq!(conversion.skipped.len(), 1);
        assert_eq!(conversion.skipped[0].line, 2);
        assert_eq!(conversion.skipped[0].field_count(), 6);
    }

    #[test]
    fn test_comments_and_blank_rows_are_not_diagnosed() {
        let rows = vec![
            row(1, &["#separator:tab"]),
            row(2, &["#html:false"]),
            row(3, &[""]),
            valid(4, "Q", "a"),
        ];
        let conversion = RowConverter::default().convert(&rows);

        assert_eq!(conversion.record_count(), 1);
        assert!(conversion.skipped.is_empty());
        assert_eq!(conversion.comment_rows, 2);
    }

    #[test]
    fn test_builds_full_record() {
        let rows = vec![row(
            1,
            &[
                "G1",
                "Topic1",
                "1. - What is 2+2?",
                "3",
                "4",
                "5",
                "6",
                "B",
                "x",
                "x",
                "x",
                "Tag1 Tag2",
            ],
        )];
        let conversion = RowConverter::default().convert(&rows);
        let record = &conversion.records[0];

        assert_eq!(record.id, 1);
        assert_eq!(record.topic, "Topic1");
        assert_eq!(record.question_text, "What is 2+2?");
        assert_eq!(record.options, AnswerOptions::new("3", "4", "5", "6"));
        assert_eq!(record.correct_answer, "b");
        assert_eq!(record.explanation, "");
        assert_eq!(record.tags, vec!["Tag1", "Tag2"]);
    }

    #[test]
    fn test_invalid_answer_passes_through() {
        let conversion = RowConverter::default().convert(&[valid(1, "Q", "Z")]);
        assert_eq!(conversion.records[0].correct_answer, "z");
        assert_eq!(conversion.unrecognized_answers(), 1);
    }

    #[test]
    fn test_converter_applies_tag_threshold() {
        let options = ConvertOptions::default().with_tag_min_fields(9);
        let rows = vec![row(1, &["G1", "T", "Q", "a", "b", "c", "d", "A", "Real"])];
        let conversion = RowConverter::new(options).convert(&rows);
        assert_eq!(conversion.records[0].tags, vec!["Real"]);
        assert_eq!(conversion.unrecognized_answers(), 0);
    }
}
