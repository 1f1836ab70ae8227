use clap::Parser;

use crate::header::{DEFAULT_AUTHORS, DEFAULT_RANGE_END, DEFAULT_YEAR};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Source file whose header should be inspected
    pub file_path: String,

    /// Author credited when no header yields one
    #[arg(long, default_value = DEFAULT_AUTHORS)]
    pub fallback_authors: String,

    /// Year used when no header yields one
    #[arg(long, default_value = DEFAULT_YEAR)]
    pub fallback_year: String,

    /// End year of the emitted copyright range
    #[arg(long, default_value = DEFAULT_RANGE_END)]
    pub range_end: String,
}
