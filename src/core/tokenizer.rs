//! Word tokenizer
//!
//! A token is a maximal run of word characters (letters, digits, underscore).
//! Everything else, hyphens and apostrophes included, separates tokens.

use once_cell::sync::Lazy;
use regex::Regex;

/// Static regex for word tokens
pub static WORD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\w+").expect("Invalid WORD_RE regex"));

/// Lowercase a line and yield its tokens in left-to-right order.
pub fn lowercase_tokens(line: &str) -> Vec<String> {
    let lower = line.to_lowercase();
    WORD_RE
        .find_iter(&lower)
        .map(|m| m.as_str().to_string())
        .collect()
}
