use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Read a file's full text for header inspection.
///
/// The read is read-only and buffered; the extractor never writes back.
/// Decoding is lossy so legacy single-byte encodings degrade to replacement
/// characters instead of aborting the run.
pub fn read_source_text(path: &Path) -> Result<String> {
    let bytes = fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
