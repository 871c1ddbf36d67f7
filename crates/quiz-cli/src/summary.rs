use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ColumnConstraint, ContentArrangement, Table, Width,
};

use quiz_cli::pipeline::ConvertReporter;
use quiz_cli::types::ConvertResult;
use quiz_ingest::SkippedRow;

/// Prints skipped rows on stdout as soon as conversion reports them.
pub struct StdoutReporter;

impl ConvertReporter for StdoutReporter {
    fn skipped_rows(&mut self, rows: &[SkippedRow]) {
        println!("Skipped malformed rows:");
        println!("{}", skipped_table(rows));
    }
}

pub fn print_summary(result: &ConvertResult) {
    if result.unrecognized_answers > 0 {
        println!(
            "Note: {} question(s) have an answer other than a, b, c or d",
            result.unrecognized_answers
        );
    }
    println!("{}", summary_line(result));
}

fn summary_line(result: &ConvertResult) -> String {
    if result.dry_run() {
        format!(
            "Dry run: {} questions would be written to {}",
            result.records,
            result.output.display()
        )
    } else {
        format!(
            "Successfully converted {} questions to {}",
            result.records,
            result.output.display()
        )
    }
}

fn skipped_table(skipped: &[SkippedRow]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Line"),
        header_cell("Fields"),
        header_cell("Contents"),
    ]);
    apply_skipped_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 1, CellAlignment::Right);
    for row in skipped {
        table.add_row(vec![
            Cell::new(row.line),
            Cell::new(row.field_count()).fg(Color::Yellow),
            Cell::new(format!("{:?}", row.fields)),
        ]);
    }
    table
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_skipped_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(140);
    table.set_constraints(vec![
        ColumnConstraint::LowerBoundary(Width::Fixed(6)),
        ColumnConstraint::LowerBoundary(Width::Fixed(8)),
        ColumnConstraint::UpperBoundary(Width::Percentage(85)),
    ]);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

pub fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn result(bytes_written: Option<usize>) -> ConvertResult {
        ConvertResult {
            input: PathBuf::from("anki.txt"),
            output: PathBuf::from("data/out.json"),
            records: 42,
            skipped: vec![SkippedRow {
                line: 3,
                fields: vec!["G3".to_string(), "Topic".to_string()],
            }],
            comment_rows: 2,
            unrecognized_answers: 0,
            bytes_written,
        }
    }

    #[test]
    fn summary_line_reports_count_and_path() {
        assert_eq!(
            summary_line(&result(Some(100))),
            "Successfully converted 42 questions to data/out.json"
        );
        assert_eq!(
            summary_line(&result(None)),
            "Dry run: 42 questions would be written to data/out.json"
        );
    }

    #[test]
    fn skipped_table_lists_each_row() {
        let table = skipped_table(&result(None).skipped);
        let rendered = table.to_string();
        assert!(rendered.contains("Line"));
        assert!(rendered.contains("G3"));
    }
}
