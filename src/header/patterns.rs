//! Compiled regex patterns for header metadata extraction.
//!
//! Every heuristic the extractor runs is a regex search; all of them are
//! compiled once at first use via `LazyLock`. The patterns intentionally
//! reproduce the quirks of the legacy headers they were tuned against
//! (optional `by` keyword, comma required after the year, greedy prefixes
//! that select the last year on a line), so edit with care.

use std::sync::LazyLock;

use regex::Regex;

/// Two adjacent block comments: `/* ... */` followed by an optional blank
/// line and a second `/* ... */`. DOTALL so the blocks may span lines;
/// `\r?` tolerates CRLF files.
pub(super) static DOUBLE_HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)/\*(.*?)\*/\r?\n\n?/\*(.*?)\*/").unwrap());

/// A lone block comment opening with the phrase "This program".
pub(super) static SINGLE_HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)/\*\s*This\sprogram(.*?)\*/").unwrap());

/// Marker promising a parseable copyright statement in the same block.
pub(super) static C_MARKER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\(C\)").unwrap());

/// A copyright statement line. Group 1 is the first year, group 2 an
/// optional range end, group 4 the raw author text up to end of line.
pub(super) static COPYRIGHT_STATEMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(C\)\s*Copyright\s*(\d+)-?(\d+)?,\s*(by)?\s*(.*)").unwrap());

/// Splits an author string before its last ` and` (" and Contributors",
/// " and others", ...). Group 1 is everything before it.
pub(super) static TRAILING_AND: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(.*)(\sand)").unwrap());

/// An `Original Author:` line; group 1 is the rest of the line.
pub(super) static ORIGINAL_AUTHOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Original\sAuthor:\s*(.*)").unwrap());

/// A javadoc `@author` tag, optionally written `@author Original:`.
/// Group 3 is the author name.
pub(super) static AUTHOR_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"@author\s*(Original)?(:)?\s*(.*)").unwrap());

/// A change-log line of the form `24-Jul-2003 : Initial revision`.
/// The greedy prefix makes group 2 the last four-digit year before
/// "Initial" on the line.
pub(super) static INITIAL_YEAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(.*)([0-9]{4})(.*)Initial").unwrap());

/// A `(C) ... 2003-2008` range; group 1 is the end year.
pub(super) static FIRST_HEADER_RANGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(C\).*?[0-9]{4}-([0-9]{4})").unwrap());

/// A javadoc `@since` tag followed by a four-digit year on the same line.
/// Group 2 is the year.
pub(super) static SINCE_YEAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"@since(.*?)([0-9]{4})").unwrap());

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copyright_statement_groups() {
        let caps = COPYRIGHT_STATEMENT
            .captures("(C) Copyright 2003-2008, by Barak Naveh and Contributors.")
            .unwrap();
        assert_eq!(&caps[1], "2003");
        assert_eq!(caps.get(2).map(|m| m.as_str()), Some("2008"));
        assert_eq!(&caps[4], "Barak Naveh and Contributors.");
    }

    #[test]
    fn test_copyright_statement_single_year_no_by() {
        let caps = COPYRIGHT_STATEMENT
            .captures("(C) Copyright 1999, Acme Corp")
            .unwrap();
        assert_eq!(&caps[1], "1999");
        assert_eq!(caps.get(2), None);
        assert_eq!(&caps[4], "Acme Corp");
    }

    #[test]
    fn test_copyright_statement_requires_comma() {
        assert!(
            COPYRIGHT_STATEMENT
                .captures("(C) Copyright 2003 by Barak Naveh")
                .is_none()
        );
    }

    #[test]
    fn test_trailing_and_takes_last_occurrence() {
        let caps = TRAILING_AND
            .captures("Barak Naveh and John Smith and Contributors.")
            .unwrap();
        assert_eq!(&caps[1], "Barak Naveh and John Smith");
    }

    #[test]
    fn test_initial_year_takes_last_year_on_line() {
        let caps = INITIAL_YEAR.captures("2001-2003 : Initial revision").unwrap();
        assert_eq!(&caps[2], "2003");
    }

    #[test]
    fn test_initial_year_does_not_cross_lines() {
        assert!(INITIAL_YEAR.captures("2003 something\nInitial revision").is_none());
    }

    #[test]
    fn test_since_year_first_year_after_tag() {
        let caps = SINCE_YEAR.captures(" * @since July 19, 2003").unwrap();
        assert_eq!(&caps[2], "2003");
    }

    #[test]
    fn test_author_tag_variants() {
        let caps = AUTHOR_TAG.captures("@author John Smith").unwrap();
        assert_eq!(&caps[3], "John Smith");

        let caps = AUTHOR_TAG.captures("@author Original: Jane Doe").unwrap();
        assert_eq!(&caps[3], "Jane Doe");

        let caps = AUTHOR_TAG.captures("@author: Jane Doe").unwrap();
        assert_eq!(&caps[3], "Jane Doe");
    }

    #[test]
    fn test_first_header_range_end_year() {
        let caps = FIRST_HEADER_RANGE
            .captures("(C) Copyright 2003-2008, by Barak Naveh")
            .unwrap();
        assert_eq!(&caps[1], "2008");
    }
}
