use anyhow::Result;
use comfy_table::Table;
use tracing::info;

use quiz_cli::pipeline::{WriteMode, convert_export};
use quiz_ingest::{Column, ConvertOptions};

use crate::cli::ConvertArgs;
use crate::summary::{StdoutReporter, apply_table_style, header_cell, print_summary};

pub fn run_columns() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Column"),
        header_cell("Description"),
    ]);
    apply_table_style(&mut table);
    for column in Column::ALL {
        table.add_row(vec![
            (column.index() + 1).to_string(),
            column.name().to_string(),
            column.description().to_string(),
        ]);
    }
    table.add_row(vec![
        "last".to_string(),
        "Tags".to_string(),
        "Space-separated tags, read from wide rows only".to_string(),
    ]);
    println!("{table}");
    Ok(())
}

pub fn run_convert(args: &ConvertArgs) -> Result<()> {
    let options = ConvertOptions::default().with_tag_min_fields(args.tag_min_fields);
    let mode = if args.dry_run {
        WriteMode::DryRun
    } else {
        WriteMode::Write
    };
    let result = convert_export(
        &args.input,
        &args.output,
        options,
        mode,
        &mut StdoutReporter,
    )?;
    info!(
        records = result.records,
        skipped = result.skipped.len(),
        comments = result.comment_rows,
        "convert finished"
    );
    print_summary(&result);
    Ok(())
}
