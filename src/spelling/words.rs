//! Extraction of checkable words from a line of text.

use std::sync::Arc;

use ahash::AHashSet;
use lazy_static::lazy_static;
use regex::Regex;

use crate::error::{Result, TypoError};

/// A letter followed by lowercase letters. Picks up ordinary words and the
/// capitalized parts of camel case identifiers.
pub const WORD_PATTERN: &str = r"[a-zA-Z][a-z]+";

/// An all-caps run with a non-word character on both sides. The boundary
/// characters belong to the match, so two such runs separated by a single
/// character only yield the first.
pub const ACRONYM_PATTERN: &str = r"[^A-Za-z0-9_]([A-Z]{2,})[^A-Za-z0-9_]";

lazy_static! {
    static ref DEFAULT_EXTRACTOR: WordExtractor = WordExtractor {
        words: Arc::new(Regex::new(WORD_PATTERN).expect("Default word pattern should be valid")),
        acronyms: Arc::new(Regex::new(ACRONYM_PATTERN).expect("Default acronym pattern should be valid")),
    };
}

/// Splits lines into lowercase candidate words.
///
/// "parseXMLDocument now" yields `parse`, `document` and `now`; an acronym is
/// only picked up when it stands alone, as in "the XML parser".
#[derive(Clone, Debug)]
pub struct WordExtractor {
    words: Arc<Regex>,
    acronyms: Arc<Regex>,
}

impl WordExtractor {
    /// Create an extractor with the default patterns.
    pub fn new() -> Self {
        DEFAULT_EXTRACTOR.clone()
    }

    /// Create an extractor with custom patterns. The acronym pattern must
    /// have a capture group for the acronym itself.
    pub fn with_patterns(word_pattern: &str, acronym_pattern: &str) -> Result<Self> {
        let compile = |pattern: &str| {
            Regex::new(pattern)
                .map_err(|e| TypoError::analysis(format!("Invalid regex pattern: {e}")))
        };
        let acronyms = compile(acronym_pattern)?;
        if acronyms.captures_len() < 2 {
            return Err(TypoError::analysis(format!(
                "acronym pattern has no capture group: {acronym_pattern}"
            )));
        }

        Ok(WordExtractor {
            words: Arc::new(compile(word_pattern)?),
            acronyms: Arc::new(acronyms),
        })
    }

    /// Lowercase words of `line` without duplicates, in order of first appearance.
    pub fn parse_words(&self, line: &str) -> Vec<String> {
        let words = self.words.find_iter(line).map(|m| m.as_str());
        let acronyms = self
            .acronyms
            .captures_iter(line)
            .filter_map(|caps| caps.get(1))
            .map(|m| m.as_str());

        let mut seen = AHashSet::new();
        words
            .chain(acronyms)
            .map(str::to_lowercase)
            .filter(|word| seen.insert(word.clone()))
            .collect()
    }
}

impl Default for WordExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse words with the default extractor.
pub fn parse_words(line: &str) -> Vec<String> {
    DEFAULT_EXTRACTOR.parse_words(line)
}
