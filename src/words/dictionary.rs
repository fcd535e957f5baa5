//! Predefined word dictionary
//!
//! Maps each lowercased predefined word to its original spelling. The
//! original spelling is the only form ever shown in a report.

use log::debug;
use std::collections::HashMap;
use std::path::Path;

use crate::core::error::{Result, TallyError};
use crate::core::file_reader::open_lines;

/// Case-insensitive lookup of predefined words
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordDictionary {
    entries: HashMap<String, String>,
}

impl WordDictionary {
    /// Load a dictionary from a word list file, one word per line.
    pub fn load(path: &Path, max_word_length: usize) -> Result<Self> {
        let dictionary = Self::from_lines(open_lines(path)?, max_word_length)?;
        debug!(
            "loaded {} predefined words from {}",
            dictionary.len(),
            path.display()
        );
        Ok(dictionary)
    }

    /// Build a dictionary from lines.
    ///
    /// Each line is trimmed of surrounding whitespace. A blank line becomes
    /// the empty word, which is kept and participates in the duplicate check.
    pub fn from_lines<I>(lines: I, max_word_length: usize) -> Result<Self>
    where
        I: IntoIterator<Item = Result<String>>,
    {
        let mut entries = HashMap::new();

        for line in lines {
            let line = line?;
            let word = line.trim();

            if word.chars().count() > max_word_length {
                return Err(TallyError::InvalidDictionaryEntry {
                    word: word.to_string(),
                    limit: max_word_length,
                });
            }

            let key = word.to_lowercase();
            if entries.contains_key(&key) {
                return Err(TallyError::DuplicateDictionaryEntry {
                    word: word.to_string(),
                });
            }
            entries.insert(key, word.to_string());
        }

        Ok(Self { entries })
    }

    /// Original spelling for a lowercased token, if it is a predefined word
    pub fn lookup(&self, lowercase_token: &str) -> Option<&str> {
        self.entries.get(lowercase_token).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
