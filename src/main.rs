use clap::Parser;
use std::error::Error;
use std::path::Path;

use crate::cli::Cli;
use crate::header::{Fallbacks, StdoutSink, extract};
use crate::utils::file::read_source_text;

mod cli;
mod header;
mod utils;

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    let content = read_source_text(Path::new(&cli.file_path))?;
    let fallbacks = Fallbacks {
        year: cli.fallback_year,
        authors: cli.fallback_authors,
    };

    let mut sink = StdoutSink;
    let record = extract(&cli.file_path, &content, &fallbacks, &mut sink)?;

    println!("{}", record.format_line(&cli.range_end, &cli.file_path));
    Ok(())
}
