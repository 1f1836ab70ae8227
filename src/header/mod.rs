//! Header metadata extraction.
//!
//! Recovers author and year metadata from a file's leading comment blocks
//! in three stages:
//! 1. Shape classification (double header, single "This program" header,
//!    or nothing)
//! 2. An ordered list of extraction strategies, each filling the fields its
//!    header layout can provide
//! 3. Fallback substitution for fields no strategy filled
//!
//! Recoverable gaps go to the caller's [`WarningSink`]; the only hard
//! failure is a `(C)` marker whose copyright statement does not parse.

mod blocks;
mod patterns;
mod sink;
mod strategies;
mod types;

pub use blocks::HeaderShape;
pub use sink::{BufferedSink, StdoutSink, WarningSink};
pub use types::{
    CopyrightRecord, DEFAULT_AUTHORS, DEFAULT_RANGE_END, DEFAULT_YEAR, Fallbacks, HeaderFields,
};

use anyhow::Result;
use log::debug;

use strategies::{STRATEGIES, Source};

/// Extract one copyright record from `content`.
///
/// `path` is used in warnings and errors only; the file itself is never
/// touched. Exactly one record is produced per call: fields no strategy
/// yields are taken from `fallbacks`, and a file with no recognizable
/// header at all additionally produces a single warning.
pub fn extract(
    path: &str,
    content: &str,
    fallbacks: &Fallbacks,
    sink: &mut dyn WarningSink,
) -> Result<CopyrightRecord> {
    let src = Source::scan(path, content);

    let mut fields = HeaderFields::default();
    let mut matched = false;

    for strategy in STRATEGIES {
        if fields.is_complete() {
            break;
        }
        if let Some(partial) = strategy.extract(&src, sink)? {
            debug!("strategy {} matched {}: {:?}", strategy.name(), path, partial);
            matched = true;
            fields.merge_missing(partial);
        }
    }

    if !matched {
        sink.warn(format!("Did not find any headers: {path}"));
    }

    Ok(fields.into_record(fallbacks))
}
