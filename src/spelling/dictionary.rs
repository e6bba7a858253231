//! Dictionary of known words for typo checking.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use ahash::AHashSet;
use log::info;

use crate::error::{Result, TypoError};
use crate::spelling::morphology::word_variations;

/// Default word list on Linux and macOS.
pub const DEFAULT_DICTIONARY_FILE: &str = "/usr/share/dict/words";

/// A set of lowercase words, including the inflected forms of every loaded word.
///
/// Loaded words and their derived forms are stored alike; membership is all
/// the dictionary records.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: AHashSet<String>,
}

impl Dictionary {
    /// Create a new empty dictionary.
    pub fn new() -> Self {
        Dictionary {
            words: AHashSet::new(),
        }
    }

    /// Build a dictionary from a word list and an optional keyword list.
    ///
    /// Either file failing to open or read is a configuration error.
    pub fn make_dictionary<P: AsRef<Path>, Q: AsRef<Path>>(
        dictionary_file: P,
        keyword_file: Option<Q>,
    ) -> Result<Self> {
        let mut dictionary = Dictionary::new();
        dictionary.load_word_list_file(dictionary_file)?;
        if let Some(keyword_file) = keyword_file {
            dictionary.load_word_list_file(keyword_file)?;
        }
        Ok(dictionary)
    }

    /// Build a dictionary from in-memory words, normalizing and expanding each.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut dictionary = Dictionary::new();
        for word in words {
            dictionary.insert_with_variations(word.as_ref());
        }
        dictionary
    }

    /// Load a file with one word per line.
    pub fn load_word_list_file<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        let path = path.as_ref();
        let unreadable = |e: std::io::Error| {
            TypoError::configuration(format!("cannot read word list {}: {e}", path.display()))
        };

        let file = File::open(path).map_err(unreadable)?;
        let reader = BufReader::new(file);

        let before = self.words.len();
        let mut lines = 0usize;
        for line in reader.lines() {
            let line = line.map_err(unreadable)?;
            self.insert_with_variations(&line);
            lines += 1;
        }

        info!(
            "loaded word list {}: {lines} lines, {} new entries",
            path.display(),
            self.words.len() - before
        );
        Ok(())
    }

    /// Insert a normalized word and its past tense, progressive and plural
    /// forms. Blank input is ignored.
    pub fn insert_with_variations(&mut self, word: &str) {
        let normalized = word.trim().to_lowercase();
        if normalized.is_empty() {
            return;
        }

        for variation in word_variations(&normalized) {
            self.words.insert(variation);
        }
        self.words.insert(normalized);
    }

    /// Check if a word exists in the dictionary. `word` must already be lowercase.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Number of entries, derived forms included.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the dictionary has no entries.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn word_file(words: &[&str]) -> NamedTempFile {
        let mut temp_file = NamedTempFile::new().unwrap();
        for word in words {
            writeln!(temp_file, "{word}").unwrap();
        }
        temp_file.flush().unwrap();
        temp_file
    }

    #[test]
    fn test_dictionary_basic_operations() {
        let mut dict = Dictionary::new();
        assert!(dict.is_empty());
        assert!(!dict.contains("hello"));

        dict.insert_with_variations("hello");
        assert!(dict.contains("hello"));
        assert!(dict.contains("helloed"));
        assert!(dict.contains("helloing"));
        assert!(dict.contains("hellos"));
        assert_eq!(dict.len(), 4);
    }

    #[test]
    fn test_normalization() {
        let dict = Dictionary::from_words(["  Knife \t", "STUDY"]);

        assert!(dict.contains("knife"));
        assert!(dict.contains("knives"));
        assert!(dict.contains("study"));
        assert!(dict.contains("studied"));
        assert!(dict.contains("studying"));
        assert!(dict.contains("studies"));
        // Lookup is on the lowercased key space only.
        assert!(!dict.contains("Knife"));
    }

    #[test]
    fn test_blank_lines_skipped() {
        let dict = Dictionary::from_words(["", "   ", "word"]);
        assert!(!dict.contains(""));
        assert!(!dict.contains("ing"));
        assert!(dict.contains("word"));
    }

    #[test]
    fn test_load_from_file() {
        let temp_file = word_file(&["Hello", "world", "hello"]);

        let mut dict = Dictionary::new();
        dict.load_word_list_file(temp_file.path()).unwrap();
        assert!(dict.contains("hello"));
        assert!(dict.contains("world"));
        assert!(dict.contains("worlds"));
        assert_eq!(dict.len(), 8);
    }

    #[test]
    fn test_make_dictionary_with_keywords() {
        let words = word_file(&["apple"]);
        let keywords = word_file(&["rustacean"]);

        let dict = Dictionary::make_dictionary(words.path(), Some(keywords.path())).unwrap();
        assert!(dict.contains("apple"));
        assert!(dict.contains("rustacean"));
        assert!(dict.contains("rustaceans"));
    }

    #[test]
    fn test_load_order_does_not_matter() {
        let first = word_file(&["alpha", "beta"]);
        let second = word_file(&["gamma", "alpha"]);

        let a = Dictionary::make_dictionary(first.path(), Some(second.path())).unwrap();
        let b = Dictionary::make_dictionary(second.path(), Some(first.path())).unwrap();
        assert_eq!(a.words, b.words);
    }

    #[test]
    fn test_missing_primary_is_configuration_error() {
        let result = Dictionary::make_dictionary("/nonexistent/words", None::<&str>);
        assert!(matches!(result, Err(TypoError::Configuration(_))));
    }

    #[test]
    fn test_missing_keyword_file_is_configuration_error() {
        let words = word_file(&["apple"]);
        let result = Dictionary::make_dictionary(words.path(), Some("/nonexistent/keywords"));
        assert!(matches!(result, Err(TypoError::Configuration(_))));
    }
}
