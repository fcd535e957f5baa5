//! CLI module - Command-line interface definitions and handlers

use anyhow::Result;
use clap::Parser;
use log::LevelFilter;
use std::path::PathBuf;

use crate::core::limits::{
    Limits, DEFAULT_MAX_FILE_SIZE, DEFAULT_MAX_WORD_COUNT, DEFAULT_MAX_WORD_LENGTH,
};
use crate::core::render::OutputFormat;

/// wordtally - count predefined words in a text file.
#[derive(Parser, Debug)]
#[command(name = "wordtally")]
#[command(
    author,
    version,
    about,
    long_about = r#"wordtally counts how often each word from a predefined list appears in an
input text file and prints a two-column table of word and match count.

Matching is case-insensitive and works on whole words only: "names" does not
match "name", and "dash-dash" contains the word "dash" twice. Words are reported
with the spelling used in the predefined list, in the order they were first found.

Examples:
    wordtally --input notes.txt --predefined words.txt
    wordtally --input notes.txt --predefined words.txt --format jsonl
    wordtally --input big.txt --predefined words.txt --max-file-size 104857600
"#
)]
pub struct Cli {
    /// Path to the input file.
    #[arg(long, value_name = "FILE")]
    pub input: PathBuf,

    /// Path to the predefined words file.
    #[arg(
        long,
        value_name = "FILE",
        long_help = "Path to the predefined words file, one word per line.\n\n\
Surrounding whitespace is trimmed. Words must be unique ignoring case."
    )]
    pub predefined: PathBuf,

    /// Maximum size of either file in bytes.
    #[arg(
        long,
        env = "WORDTALLY_MAX_FILE_SIZE",
        default_value_t = DEFAULT_MAX_FILE_SIZE,
        value_name = "BYTES"
    )]
    pub max_file_size: u64,

    /// Maximum number of predefined words.
    #[arg(
        long,
        env = "WORDTALLY_MAX_WORD_COUNT",
        default_value_t = DEFAULT_MAX_WORD_COUNT,
        value_name = "N"
    )]
    pub max_word_count: usize,

    /// Maximum length of a predefined word in characters.
    #[arg(
        long,
        env = "WORDTALLY_MAX_WORD_LENGTH",
        default_value_t = DEFAULT_MAX_WORD_LENGTH,
        value_name = "N"
    )]
    pub max_word_length: usize,

    /// Output format (table/json/jsonl).
    #[arg(
        long,
        default_value = "table",
        value_name = "FORMAT",
        value_parser = parse_format,
        long_help = "Select the output format.\n\n\
Supported values:\n\
- table (default): fixed-width word and count columns\n\
- json: a single JSON array of {\"word\", \"count\"} objects\n\
- jsonl: one JSON object per line"
    )]
    pub format: OutputFormat,

    /// Quiet mode (errors only on stderr).
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Verbose mode (more diagnostics on stderr).
    #[arg(short, long)]
    pub verbose: bool,
}

fn parse_format(s: &str) -> std::result::Result<OutputFormat, String> {
    s.parse()
}

impl Cli {
    /// Limits assembled from flags and environment
    pub fn limits(&self) -> Limits {
        Limits {
            max_file_size: self.max_file_size,
            max_word_count: self.max_word_count,
            max_word_length: self.max_word_length,
        }
    }

    /// Log level selected by --quiet / --verbose
    pub fn log_level(&self) -> LevelFilter {
        if self.quiet {
            LevelFilter::Error
        } else if self.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Warn
        }
    }
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    let limits = cli.limits();
    crate::flows::count::run_count(&cli.input, &cli.predefined, &limits, cli.format)
}
