//! Checker configuration.
//!
//! Configuration comes from [`CheckerConfig::default`], optionally overlaid
//! by a JSON file, and finally by command line flags.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, TypoError};
use crate::spelling::dictionary::DEFAULT_DICTIONARY_FILE;

/// Words shorter than this are never checked.
pub const DEFAULT_MIN_WORD_LEN: usize = 5;

/// Default edit distance for suggestions.
pub const DEFAULT_DISTANCE: usize = 1;

/// Configuration for [`TypoChecker`](crate::spelling::checker::TypoChecker).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckerConfig {
    /// Minimum length of a word for typo checking.
    pub min_word_len: usize,
    /// Maximum edit distance of suggestions.
    pub distance: usize,
    /// Whether swapping two adjacent letters counts as a single edit.
    pub transpositions: bool,
    /// Word list with one word per line.
    pub dictionary_file: PathBuf,
    /// Optional list of domain keywords, same format as the word list.
    pub keyword_file: Option<PathBuf>,
    /// Check lines in parallel.
    pub parallel: bool,
}

impl Default for CheckerConfig {
    fn default() -> Self {
        CheckerConfig {
            min_word_len: DEFAULT_MIN_WORD_LEN,
            distance: DEFAULT_DISTANCE,
            transpositions: true,
            dictionary_file: PathBuf::from(DEFAULT_DICTIONARY_FILE),
            keyword_file: None,
            parallel: false,
        }
    }
}

impl CheckerConfig {
    /// Load a configuration from a JSON file. Missing fields take their defaults.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            TypoError::configuration(format!("cannot read config {}: {e}", path.display()))
        })?;
        let config: CheckerConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings the checker cannot work with.
    pub fn validate(&self) -> Result<()> {
        if self.distance == 0 {
            return Err(TypoError::configuration("edit distance must be at least 1"));
        }
        Ok(())
    }
}
