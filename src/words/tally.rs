//! Match tally
//!
//! Scans text line by line and counts the tokens that are predefined words.
//! Entries keep the order in which each word was first matched.

use log::debug;
use serde::Serialize;
use std::collections::HashMap;
use std::path::Path;

use crate::core::error::Result;
use crate::core::file_reader::open_lines;
use crate::core::tokenizer::lowercase_tokens;
use crate::words::dictionary::WordDictionary;

/// One report row: a predefined word and how often it matched
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordCount {
    pub word: String,
    pub count: u64,
}

/// Insertion-ordered word counts
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchTally {
    rows: Vec<WordCount>,
    index: HashMap<String, usize>,
}

impl MatchTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one occurrence of `word`, appending it if it is new.
    pub fn increment(&mut self, word: &str) {
        match self.index.get(word) {
            Some(&pos) => self.rows[pos].count += 1,
            None => {
                self.index.insert(word.to_string(), self.rows.len());
                self.rows.push(WordCount {
                    word: word.to_string(),
                    count: 1,
                });
            }
        }
    }

    /// Rows in first-match order
    pub fn rows(&self) -> &[WordCount] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, u64)> for MatchTally {
    fn from_iter<T: IntoIterator<Item = (S, u64)>>(iter: T) -> Self {
        let mut tally = MatchTally::new();
        for (word, count) in iter {
            let word = word.into();
            match tally.index.get(&word) {
                Some(&pos) => tally.rows[pos].count += count,
                None => {
                    tally.index.insert(word.clone(), tally.rows.len());
                    tally.rows.push(WordCount { word, count });
                }
            }
        }
        tally
    }
}

/// Count dictionary words in a sequence of lines
pub fn count_lines<I>(lines: I, dictionary: &WordDictionary) -> Result<MatchTally>
where
    I: IntoIterator<Item = Result<String>>,
{
    let mut tally = MatchTally::new();
    let mut line_count = 0usize;

    for line in lines {
        let line = line?;
        line_count += 1;

        for token in lowercase_tokens(&line) {
            if let Some(original) = dictionary.lookup(&token) {
                tally.increment(original);
            }
        }
    }

    debug!(
        "scanned {} lines, {} distinct predefined words matched",
        line_count,
        tally.len()
    );
    Ok(tally)
}

/// Count dictionary words in a file
pub fn count_matches(path: &Path, dictionary: &WordDictionary) -> Result<MatchTally> {
    count_lines(open_lines(path)?, dictionary)
}
