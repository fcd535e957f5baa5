//! wordtally - Count predefined words in a text file
//!
//! wordtally provides:
//! - Case-insensitive, whole-word matching against a predefined word list
//! - Configurable limits on file size, word count and word length
//! - A fixed-width table report (or json/jsonl)

use anyhow::Result;
use clap::Parser;

mod cli;
mod core;
mod flows;
mod words;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.log_level())
        .parse_default_env()
        .init();

    cli::run(cli)
}
