//! Error taxonomy for a tally run
//!
//! Every variant is terminal: it is raised where the violation is detected and
//! propagates unchanged to the top-level command.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while validating, loading, matching or reporting.
#[derive(Debug, Error)]
pub enum TallyError {
    /// A file is larger than the configured byte limit.
    #[error("File size of {} is {size}, which exceeds {limit}", .path.display())]
    SizeLimitExceeded {
        path: PathBuf,
        size: u64,
        limit: u64,
    },

    /// A predefined word is longer than the configured character limit.
    #[error("Predefined word {word} is exceeding length of {limit}")]
    InvalidDictionaryEntry { word: String, limit: usize },

    /// Two predefined words are equal after lowercasing.
    #[error("Predefined word has duplicate word {word}")]
    DuplicateDictionaryEntry { word: String },

    #[error("Predefined words list is empty")]
    EmptyDictionary,

    #[error("Predefined words list has size {count}, which exceeds {limit}")]
    DictionaryTooLarge { count: usize, limit: usize },

    #[error("No match was found")]
    NoMatches,

    /// The file could not be opened or read.
    #[error("Failed to read {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl TallyError {
    /// Wrap an I/O error with the path it occurred on.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        TallyError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Convenience alias used throughout the domain modules
pub type Result<T> = std::result::Result<T, TallyError>;
