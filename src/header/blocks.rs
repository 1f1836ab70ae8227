//! Header shape classification.
//!
//! Classifies a file's leading comment region before any field extraction
//! runs. Exactly one shape is recognized per file: a double header (two
//! adjacent block comments) wins over a single "This program" header, and
//! a single header is only reported when no double header exists.

use super::patterns::{DOUBLE_HEADER, SINGLE_HEADER};

/// The comment-block layout found at the top of a file.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HeaderShape<'a> {
    /// Two adjacent block comments; the second usually carries the
    /// per-file credits.
    Double { first: &'a str, second: &'a str },
    /// One block comment opening with "This program".
    Single { body: &'a str },
    /// No recognizable header.
    None,
}

/// Classify `content` into its header shape.
pub fn scan(content: &str) -> HeaderShape<'_> {
    if let Some(caps) = DOUBLE_HEADER.captures(content) {
        return HeaderShape::Double {
            first: caps.get(1).map_or("", |m| m.as_str()),
            second: caps.get(2).map_or("", |m| m.as_str()),
        };
    }
    if let Some(caps) = SINGLE_HEADER.captures(content) {
        return HeaderShape::Single {
            body: caps.get(1).map_or("", |m| m.as_str()),
        };
    }
    HeaderShape::None
}
