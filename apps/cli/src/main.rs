//! coursemark CLI — course-catalog structured-data generator.
//!
//! Reads spreadsheet-exported catalog tables and emits one JSON-LD
//! document (schema.org vocabulary) per category landing page.

mod commands;

use clap::Parser;
use color_eyre::eyre::Result;

use commands::Cli;

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    commands::init_tracing(&cli);
    commands::run(cli)
}
