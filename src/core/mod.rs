//! Core module - Contains the shared plumbing for a tally run
//!
//! This module provides:
//! - Error taxonomy
//! - Run limits
//! - File size validation and line reading
//! - Word tokenization
//! - Report rendering

pub mod error;
pub mod file_reader;
pub mod limits;
pub mod render;
pub mod tokenizer;
