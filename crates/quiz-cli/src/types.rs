use std::path::PathBuf;

use quiz_ingest::SkippedRow;

/// Result of one `convert` run.
#[derive(Debug)]
pub struct ConvertResult {
    pub input: PathBuf,
    pub output: PathBuf,
    pub records: usize,
    pub skipped: Vec<SkippedRow>,
    pub comment_rows: usize,
    /// Records whose answer letter is not one of `a`-`d`.
    pub unrecognized_answers: usize,
    /// Bytes written; `None` for a dry run.
    pub bytes_written: Option<usize>,
}

impl ConvertResult {
    pub fn dry_run(&self) -> bool {
        self.bytes_written.is_none()
    }
}
