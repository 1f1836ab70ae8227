//! Result and fallback types for header metadata extraction.

/// Author credited when no header yields one.
pub const DEFAULT_AUTHORS: &str = "Barak Naveh";

/// Year used when no header yields one.
pub const DEFAULT_YEAR: &str = "2016";

/// End year of the emitted copyright range.
pub const DEFAULT_RANGE_END: &str = "2016";

/// Partial metadata recovered by a single extraction strategy.
///
/// Either field may be absent; the runner merges partials from successive
/// strategies and substitutes [`Fallbacks`] for whatever is still missing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HeaderFields {
    pub year: Option<String>,
    pub authors: Option<String>,
}

impl HeaderFields {
    /// True once both fields are filled.
    pub fn is_complete(&self) -> bool {
        self.year.is_some() && self.authors.is_some()
    }

    /// Take values from `other` only for fields still missing here.
    pub fn merge_missing(&mut self, other: HeaderFields) {
        if self.year.is_none() {
            self.year = other.year;
        }
        if self.authors.is_none() {
            self.authors = other.authors;
        }
    }

    /// Finalize into a record, filling gaps from `fallbacks`.
    pub fn into_record(self, fallbacks: &Fallbacks) -> CopyrightRecord {
        CopyrightRecord {
            year: self.year.unwrap_or_else(|| fallbacks.year.clone()),
            authors: self.authors.unwrap_or_else(|| fallbacks.authors.clone()),
        }
    }
}

/// Values substituted for fields no strategy could fill.
#[derive(Debug, Clone)]
pub struct Fallbacks {
    pub year: String,
    pub authors: String,
}

impl Default for Fallbacks {
    fn default() -> Self {
        Fallbacks {
            year: DEFAULT_YEAR.to_string(),
            authors: DEFAULT_AUTHORS.to_string(),
        }
    }
}

/// The normalized copyright metadata for one file.
#[derive(Debug, Clone, PartialEq)]
pub struct CopyrightRecord {
    /// First year of the copyright range.
    pub year: String,
    /// Author names, scrubbed of trailing "and ..." tails and periods.
    pub authors: String,
}

impl CopyrightRecord {
    /// Render the single output line for `path`.
    pub fn format_line(&self, range_end: &str, path: &str) -> String {
        format!(
            "(C) Copyright {}-{}, by {}, and Contributors. {}",
            self.year, range_end, self.authors, path
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_missing_keeps_existing_fields() {
        let mut fields = HeaderFields {
            year: Some("2003".to_string()),
            authors: None,
        };
        fields.merge_missing(HeaderFields {
            year: Some("1999".to_string()),
            authors: Some("Jane Doe".to_string()),
        });
        assert_eq!(fields.year.as_deref(), Some("2003"));
        assert_eq!(fields.authors.as_deref(), Some("Jane Doe"));
    }

    #[test]
    fn test_into_record_substitutes_fallbacks() {
        let record = HeaderFields::default().into_record(&Fallbacks::default());
        assert_eq!(record.year, DEFAULT_YEAR);
        assert_eq!(record.authors, DEFAULT_AUTHORS);
    }

    #[test]
    fn test_is_complete() {
        let mut fields = HeaderFields::default();
        assert!(!fields.is_complete());
        fields.year = Some("2003".to_string());
        assert!(!fields.is_complete());
        fields.authors = Some("Barak Naveh".to_string());
        assert!(fields.is_complete());
    }

    #[test]
    fn test_format_line() {
        let record = CopyrightRecord {
            year: "2003".to_string(),
            authors: "Barak Naveh".to_string(),
        };
        assert_eq!(
            record.format_line("2016", "src/DirectedGraph.java"),
            "(C) Copyright 2003-2016, by Barak Naveh, and Contributors. src/DirectedGraph.java"
        );
    }
}
