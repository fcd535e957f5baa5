//! Run limits
//!
//! Bounds applied to both input files and to the predefined word list.

/// Default maximum file size in bytes (20 MB)
pub const DEFAULT_MAX_FILE_SIZE: u64 = 20 * 1024 * 1024;

/// Default maximum number of predefined words
pub const DEFAULT_MAX_WORD_COUNT: usize = 10_000;

/// Default maximum length of one predefined word, in characters
pub const DEFAULT_MAX_WORD_LENGTH: usize = 256;

/// Configuration for a tally run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    /// Maximum size of either file (bytes)
    pub max_file_size: u64,

    /// Maximum number of entries in the predefined word list
    pub max_word_count: usize,

    /// Maximum length of a single predefined word (characters)
    pub max_word_length: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_file_size: DEFAULT_MAX_FILE_SIZE,
            max_word_count: DEFAULT_MAX_WORD_COUNT,
            max_word_length: DEFAULT_MAX_WORD_LENGTH,
        }
    }
}
