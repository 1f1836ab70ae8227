//! Extraction strategies.
//!
//! Each strategy owns one header layout and returns `Ok(None)` when that
//! layout is absent, or a possibly-partial [`HeaderFields`] when it applies.
//! The runner in the parent module tries them in priority order and keeps
//! only the fields still missing. Strategies never fall back to defaults
//! themselves; they warn through the sink and leave the field empty.

use anyhow::{Result, bail};

use super::blocks::{HeaderShape, scan};
use super::patterns::{
    AUTHOR_TAG, C_MARKER, COPYRIGHT_STATEMENT, FIRST_HEADER_RANGE, INITIAL_YEAR, ORIGINAL_AUTHOR,
    SINCE_YEAR, TRAILING_AND,
};
use super::sink::WarningSink;
use super::types::HeaderFields;

/// One file's text plus its classified header shape.
pub struct Source<'a> {
    pub path: &'a str,
    pub content: &'a str,
    pub shape: HeaderShape<'a>,
}

impl<'a> Source<'a> {
    pub fn scan(path: &'a str, content: &'a str) -> Self {
        Source {
            path,
            content,
            shape: scan(content),
        }
    }
}

/// A single header-layout extraction heuristic.
pub(super) trait Strategy {
    fn name(&self) -> &'static str;

    /// `Ok(None)` when this strategy's header layout is absent. `Ok(Some)`
    /// carries whatever fields the layout yielded; missing fields have
    /// already been reported through `sink`.
    fn extract(
        &self,
        src: &Source<'_>,
        sink: &mut dyn WarningSink,
    ) -> Result<Option<HeaderFields>>;
}

/// Strategies in priority order.
pub(super) static STRATEGIES: [&(dyn Strategy + Sync); 3] =
    [&CopyrightStatement, &CreditsBlock, &ProgramProlog];

/// Double header whose second block carries a `(C)` copyright statement.
///
/// The marker promises a parseable statement; a marker without one is the
/// extractor's only unrecoverable error.
pub(super) struct CopyrightStatement;

impl Strategy for CopyrightStatement {
    fn name(&self) -> &'static str {
        "copyright-statement"
    }

    fn extract(
        &self,
        src: &Source<'_>,
        _sink: &mut dyn WarningSink,
    ) -> Result<Option<HeaderFields>> {
        let HeaderShape::Double { second, .. } = src.shape else {
            return Ok(None);
        };
        if !C_MARKER.is_match(second) {
            return Ok(None);
        }

        let Some(caps) = COPYRIGHT_STATEMENT.captures(second) else {
            bail!(
                "Cannot parse copyright statement in 2nd header: {}\n{}",
                src.path,
                second
            );
        };

        let year = caps[1].to_string();
        let raw_authors = caps.get(4).map_or("", |m| m.as_str());
        Ok(Some(HeaderFields {
            year: Some(year),
            authors: Some(scrub_authors(raw_authors)),
        }))
    }
}

/// Double header without a `(C)` marker: per-file credits block.
///
/// Authors come from an `Original Author:` line in the second block, or
/// failing that an `@author` tag anywhere in the file. The year comes from
/// a change-log `... 2003 ... Initial` line in the second block, or failing
/// that the end year of a `(C) ... YYYY-YYYY` range in the first block.
pub(super) struct CreditsBlock;

impl Strategy for CreditsBlock {
    fn name(&self) -> &'static str {
        "credits-block"
    }

    fn extract(
        &self,
        src: &Source<'_>,
        sink: &mut dyn WarningSink,
    ) -> Result<Option<HeaderFields>> {
        let HeaderShape::Double { first, second } = src.shape else {
            return Ok(None);
        };
        if C_MARKER.is_match(second) {
            return Ok(None);
        }

        let mut fields = HeaderFields::default();

        if let Some(caps) = ORIGINAL_AUTHOR.captures(second) {
            fields.authors = Some(caps[1].trim_end().to_string());
        } else if let Some(caps) = AUTHOR_TAG.captures(src.content) {
            fields.authors = Some(caps[3].trim_end().to_string());
        } else {
            sink.warn(format!(
                "Cannot find original author in 2nd header: {}; using default author",
                src.path
            ));
        }

        if let Some(caps) = INITIAL_YEAR.captures(second) {
            fields.year = Some(caps[2].to_string());
        } else if let Some(caps) = FIRST_HEADER_RANGE.captures(first) {
            fields.year = Some(caps[1].to_string());
        } else {
            sink.warn(format!(
                "Cannot find Initial version in 2nd header: {}; using default year",
                src.path
            ));
        }

        Ok(Some(fields))
    }
}

/// Single block comment opening with "This program".
///
/// Such files carry no credits block, so both fields come from javadoc
/// tags anywhere in the file: `@author` for the name, `@since` for the year.
pub(super) struct ProgramProlog;

impl Strategy for ProgramProlog {
    fn name(&self) -> &'static str {
        "program-prolog"
    }

    fn extract(
        &self,
        src: &Source<'_>,
        sink: &mut dyn WarningSink,
    ) -> Result<Option<HeaderFields>> {
        let HeaderShape::Single { .. } = src.shape else {
            return Ok(None);
        };

        let mut fields = HeaderFields::default();

        if let Some(caps) = AUTHOR_TAG.captures(src.content) {
            fields.authors = Some(caps[3].trim_end().to_string());
        } else {
            sink.warn(format!(
                "Cannot find author in file: {}; using default author",
                src.path
            ));
        }

        if let Some(caps) = SINCE_YEAR.captures(src.content) {
            fields.year = Some(caps[2].to_string());
        } else {
            sink.warn(format!(
                "Cannot find year in file: {}; using default year",
                src.path
            ));
        }

        Ok(Some(fields))
    }
}

/// Normalize a raw author capture: cut everything from the last ` and`
/// onward ("and Contributors" and variations), drop periods, trim a
/// trailing CR left behind on CRLF files.
fn scrub_authors(raw: &str) -> String {
    let base = match TRAILING_AND.captures(raw) {
        Some(caps) => caps.get(1).map_or("", |m| m.as_str()),
        None => raw,
    };
    base.replace('.', "").trim_end().to_string()
}
