//! Column layout of the export and row classification.

/// Named positional columns of a data row.
///
/// Columns past [`Column::CorrectAnswer`] carry no fixed meaning; only the
/// last field of a wide row is read, as the tag string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Column {
    ExternalId,
    Topic,
    Question,
    OptionA,
    OptionB,
    OptionC,
    OptionD,
    CorrectAnswer,
}

impl Column {
    pub const ALL: [Column; 8] = [
        Self::ExternalId,
        Self::Topic,
        Self::Question,
        Self::OptionA,
        Self::OptionB,
        Self::OptionC,
        Self::OptionD,
        Self::CorrectAnswer,
    ];

    /// 0-based field index.
    pub const fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::ExternalId => "ExternalId",
            Self::Topic => "Topic",
            Self::Question => "Question",
            Self::OptionA => "OptionA",
            Self::OptionB => "OptionB",
            Self::OptionC => "OptionC",
            Self::OptionD => "OptionD",
            Self::CorrectAnswer => "CorrectAnswer",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::ExternalId => "External identifier (not exported)",
            Self::Topic => "Topic, exported as `tema`",
            Self::Question => "Question text, enumeration prefix removed",
            Self::OptionA => "Option a",
            Self::OptionB => "Option b",
            Self::OptionC => "Option c",
            Self::OptionD => "Option d",
            Self::CorrectAnswer => "Correct answer letter, lowercased",
        }
    }
}

/// Minimum number of fields in a data row.
pub const MIN_FIELDS: usize = Column::ALL.len();

/// How a raw row is handled by the converter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKind {
    /// No content; skipped silently. Rows read through [`crate::read_rows`]
    /// never land here since empty lines are dropped by the reader.
    Blank,
    /// First field starts with `#`; skipped silently.
    Comment,
    /// Fewer than [`MIN_FIELDS`] fields; skipped with a diagnostic.
    Malformed,
    Data,
}

pub fn classify(fields: &[String]) -> RowKind {
    match fields {
        [] => RowKind::Blank,
        [only] if only.is_empty() => RowKind::Blank,
        [first, ..] if first.starts_with('#') => RowKind::Comment,
        _ if fields.len() < MIN_FIELDS => RowKind::Malformed,
        _ => RowKind::Data,
    }
}

/// A row known to hold every named column.
#[derive(Debug, Clone, Copy)]
pub struct DataRow<'a> {
    fields: &'a [String],
}

impl<'a> DataRow<'a> {
    /// Returns `None` when the row is shorter than [`MIN_FIELDS`].
    pub fn new(fields: &'a [String]) -> Option<Self> {
        (fields.len() >= MIN_FIELDS).then_some(Self { fields })
    }

    pub fn get(&self, column: Column) -> &'a str {
        &self.fields[column.index()]
    }

    /// Last field of the row; may be one of the named columns on short rows.
    pub fn last(&self) -> &'a str {
        &self.fields[self.fields.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
