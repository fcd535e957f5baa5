//! Words module - Predefined word dictionary and match counting

pub mod dictionary;
pub mod tally;
