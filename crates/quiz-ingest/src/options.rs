//! Conversion options.

use crate::schema::MIN_FIELDS;

/// Default minimum row width for reading the last field as tags.
///
/// Only the long export variant carries tags in its last column.
pub const DEFAULT_TAG_MIN_FIELDS: usize = 12;

/// Options controlling how rows become records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConvertOptions {
    /// Rows with at least this many fields have their last field read as tags.
    pub tag_min_fields: usize,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            tag_min_fields: DEFAULT_TAG_MIN_FIELDS,
        }
    }
}

impl ConvertOptions {
    /// Set the tag threshold. Values below the data row width are raised to it,
    /// so tags never come from a named column of a short row.
    #[must_use]
    pub fn with_tag_min_fields(mut self, min_fields: usize) -> Self {
        self.tag_min_fields = min_fields.max(MIN_FIELDS + 1);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_threshold() {
        assert_eq!(ConvertOptions::default().tag_min_fields, 12);
    }

    #[test]
    fn test_threshold_never_below_data_width() {
        let options = ConvertOptions::default().with_tag_min_fields(3);
        assert_eq!(options.tag_min_fields, 9);
        let options = ConvertOptions::default().with_tag_min_fields(15);
        assert_eq!(options.tag_min_fields, 15);
    }
}
