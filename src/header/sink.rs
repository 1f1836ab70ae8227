//! Warning sinks.
//!
//! Extraction reports recoverable gaps (no author found, no year found, no
//! header at all) through an explicit sink handed in by the caller instead
//! of a process-global channel. The CLI prints bare messages on standard
//! output; tests and embedding callers collect them in memory.

/// Destination for recoverable extraction warnings.
pub trait WarningSink {
    fn warn(&mut self, message: String);
}

/// Prints each warning as a bare line on standard output.
#[derive(Debug, Default)]
pub struct StdoutSink;

impl WarningSink for StdoutSink {
    fn warn(&mut self, message: String) {
        println!("{message}");
    }
}

/// Collects warnings in memory.
#[derive(Debug, Default)]
pub struct BufferedSink {
    pub messages: Vec<String>,
}

impl WarningSink for BufferedSink {
    fn warn(&mut self, message: String) {
        self.messages.push(message);
    }
}
