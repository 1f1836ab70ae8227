pub mod cli;
pub mod header;
pub mod utils;

pub use header::{
    BufferedSink, CopyrightRecord, Fallbacks, HeaderFields, StdoutSink, WarningSink, extract,
};
