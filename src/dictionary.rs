//! Loading a dictionary from a line-delimited text source.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use log::info;

use crate::error::{FriendsError, Result};

/// How raw lines become dictionary words.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DictionaryOptions {
    /// Drop empty lines instead of keeping them as empty-string words
    pub skip_empty_lines: bool,
    /// Lowercase every word
    pub lowercase: bool,
}

impl Default for DictionaryOptions {
    fn default() -> Self {
        Self {
            skip_empty_lines: true,
            lowercase: false,
        }
    }
}

impl DictionaryOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply the options to one line. Returns `None` if the line is dropped.
    pub fn normalize(&self, line: &str) -> Option<String> {
        if self.skip_empty_lines && line.is_empty() {
            return None;
        }
        if self.lowercase {
            Some(line.to_lowercase())
        } else {
            Some(line.to_string())
        }
    }
}

/// Read one word per line from `reader`, in source order.
///
/// Line terminators are stripped; everything else is kept verbatim unless the
/// options say otherwise.
pub fn read_dictionary<R: BufRead>(reader: R, options: &DictionaryOptions) -> io::Result<Vec<String>> {
    let mut words = Vec::new();
    for line in reader.lines() {
        if let Some(word) = options.normalize(&line?) {
            words.push(word);
        }
    }
    Ok(words)
}

/// Load the dictionary stored at `path`.
pub fn load_dictionary<P: AsRef<Path>>(path: P, options: &DictionaryOptions) -> Result<Vec<String>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| FriendsError::source_unreadable(path, e))?;
    let words = read_dictionary(BufReader::new(file), options)
        .map_err(|e| FriendsError::source_unreadable(path, e))?;
    info!("Loaded {} words from {}", words.len(), path.display());
    Ok(words)
}
