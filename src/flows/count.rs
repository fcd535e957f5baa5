//! Count flow - Validate, load, match and report
//!
//! Each stage runs to completion before the next starts. The first failure
//! aborts the run and nothing is printed.

use anyhow::{Context, Result};
use log::info;
use std::path::Path;

use crate::core::error::TallyError;
use crate::core::file_reader::validate_file_size;
use crate::core::limits::Limits;
use crate::core::render::{OutputFormat, Renderer};
use crate::words::dictionary::WordDictionary;
use crate::words::tally::{count_matches, MatchTally};

/// Produce the tally for an input file and a predefined word list
pub fn tally_files(
    input: &Path,
    predefined: &Path,
    limits: &Limits,
) -> std::result::Result<MatchTally, TallyError> {
    validate_file_size(input, limits.max_file_size)?;
    validate_file_size(predefined, limits.max_file_size)?;

    let dictionary = WordDictionary::load(predefined, limits.max_word_length)?;
    if dictionary.is_empty() {
        return Err(TallyError::EmptyDictionary);
    }
    if dictionary.len() > limits.max_word_count {
        return Err(TallyError::DictionaryTooLarge {
            count: dictionary.len(),
            limit: limits.max_word_count,
        });
    }
    info!("{} predefined words loaded", dictionary.len());

    let tally = count_matches(input, &dictionary)?;
    if tally.is_empty() {
        return Err(TallyError::NoMatches);
    }
    info!("{} predefined words matched", tally.len());

    Ok(tally)
}

/// Run the count command
pub fn run_count(
    input: &Path,
    predefined: &Path,
    limits: &Limits,
    format: OutputFormat,
) -> Result<()> {
    let tally = tally_files(input, predefined, limits)?;

    let stdout = std::io::stdout();
    Renderer::new(format)
        .render_to(&tally, stdout.lock())
        .context("Failed to write report")?;

    Ok(())
}
