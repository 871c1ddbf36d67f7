//! Field normalization for question text, answers and tags.

use std::sync::OnceLock;

use regex::Regex;

use crate::options::ConvertOptions;
use crate::schema::DataRow;

/// Leading enumeration such as `12. - `, `3.-` or `7 - `.
const ENUMERATION_PREFIX: &str = r"^\d+[.\-\s]+";

fn enumeration_prefix() -> &'static Regex {
    static PREFIX: OnceLock<Regex> = OnceLock::new();
    PREFIX.get_or_init(|| Regex::new(ENUMERATION_PREFIX).expect("enumeration prefix pattern"))
}

/// Trim the question and drop its leading enumeration.
///
/// Only the prefix is removed; the remaining text is kept verbatim.
pub fn normalize_question(raw: &str) -> String {
    let trimmed = raw.trim();
    enumeration_prefix().replace(trimmed, "").into_owned()
}

/// Lowercase the answer letter. The result is not validated.
pub fn normalize_answer(raw: &str) -> String {
    raw.to_lowercase()
}

/// Tags from the last field of a wide row.
///
/// Splits on single spaces without trimming tokens, so repeated spaces yield
/// empty tags.
pub fn split_tags(row: &DataRow<'_>, options: &ConvertOptions) -> Vec<String> {
    if row.len() < options.tag_min_fields {
        return Vec::new();
    }
    let raw = row.last();
    if raw.is_empty() {
        return Vec::new();
    }
    raw.split(' ').map(str::to_string).collect()
}
