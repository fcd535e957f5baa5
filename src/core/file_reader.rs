//! File reading for tally runs
//!
//! Provides:
//! - Size validation from metadata, before any content is read
//! - A lazy, single-pass line reader with lossy UTF-8 decoding

use log::{debug, warn};
use std::fs::{self, File};
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use crate::core::error::{Result, TallyError};

/// Check that a file does not exceed `max_file_size` bytes.
///
/// Returns the file size on success.
pub fn validate_file_size(path: &Path, max_file_size: u64) -> Result<u64> {
    let metadata = fs::metadata(path).map_err(|e| TallyError::io(path, e))?;
    let file_size = metadata.len();

    if file_size > max_file_size {
        return Err(TallyError::SizeLimitExceeded {
            path: path.to_path_buf(),
            size: file_size,
            limit: max_file_size,
        });
    }

    debug!(
        "{}: {} bytes (limit {})",
        path.display(),
        file_size,
        max_file_size
    );
    Ok(file_size)
}

/// Lazy line iterator over a buffered source.
///
/// Line terminators (`\n`, `\r\n`) are removed. Invalid UTF-8 is replaced
/// with U+FFFD and reported once through the log.
pub struct LineReader<R> {
    reader: R,
    origin: PathBuf,
    buffer: Vec<u8>,
    lossy_reported: bool,
}

impl<R: BufRead> LineReader<R> {
    /// Wrap a reader; `origin` is only used in messages.
    pub fn new(reader: R, origin: impl Into<PathBuf>) -> Self {
        Self {
            reader,
            origin: origin.into(),
            buffer: Vec::new(),
            lossy_reported: false,
        }
    }

    fn decode_line(&mut self) -> String {
        let mut end = self.buffer.len();
        if end > 0 && self.buffer[end - 1] == b'\n' {
            end -= 1;
            if end > 0 && self.buffer[end - 1] == b'\r' {
                end -= 1;
            }
        }

        match std::str::from_utf8(&self.buffer[..end]) {
            Ok(line) => line.to_string(),
            Err(_) => {
                if !self.lossy_reported {
                    warn!(
                        "{}: invalid UTF-8, lossy conversion applied",
                        self.origin.display()
                    );
                    self.lossy_reported = true;
                }
                String::from_utf8_lossy(&self.buffer[..end]).into_owned()
            }
        }
    }
}

impl<R: BufRead> Iterator for LineReader<R> {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        self.buffer.clear();
        match self.reader.read_until(b'\n', &mut self.buffer) {
            Ok(0) => None,
            Ok(_) => Some(Ok(self.decode_line())),
            Err(e) => Some(Err(TallyError::io(self.origin.clone(), e))),
        }
    }
}

/// Open a file for line-by-line reading
pub fn open_lines(path: &Path) -> Result<LineReader<BufReader<File>>> {
    let file = File::open(path).map_err(|e| TallyError::io(path, e))?;
    Ok(LineReader::new(BufReader::new(file), path))
}
