//! Typo checker that ties word extraction, the dictionary and candidate
//! generation together.

use std::fmt;
use std::fs;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};

use ahash::AHashMap;
use log::{debug, info};
use parking_lot::RwLock;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::config::CheckerConfig;
use crate::error::Result;
use crate::spelling::candidates::CandidateGenerator;
use crate::spelling::dictionary::Dictionary;
use crate::spelling::words::WordExtractor;

/// A word that is possibly a typo, with the dictionary words close to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypoInfo {
    /// The word as extracted from the text (lowercase).
    pub word: String,
    /// Suggestions in the order they were generated.
    pub suggestions: Vec<String>,
}

impl TypoInfo {
    /// Create a new typo record.
    pub fn new<S: Into<String>>(word: S, suggestions: Vec<String>) -> Self {
        TypoInfo {
            word: word.into(),
            suggestions,
        }
    }
}

/// A typo found on a line of a file. Lines are counted from 0.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineTypo {
    pub line: usize,
    #[serde(flatten)]
    pub typo: TypoInfo,
}

impl fmt::Display for LineTypo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} is possibly typo. Did you mean: {}",
            self.line,
            self.typo.word,
            self.typo.suggestions.join(",")
        )
    }
}

/// Finds typos in lines and files and suggests correct words.
///
/// Suggestions for each typo are cached for the lifetime of the checker, so
/// a misspelling repeated across lines or files is only resolved once. The
/// cache is behind a lock and the checker can be shared between threads.
pub struct TypoChecker {
    dictionary: Dictionary,
    extractor: WordExtractor,
    generator: CandidateGenerator,
    config: CheckerConfig,
    typo_cache: RwLock<AHashMap<String, Vec<String>>>,
    generations: AtomicUsize,
}

impl TypoChecker {
    /// Create a checker, loading the word lists named in `config`.
    pub fn new(config: CheckerConfig) -> Result<Self> {
        config.validate()?;
        let dictionary =
            Dictionary::make_dictionary(&config.dictionary_file, config.keyword_file.as_ref())?;
        Ok(Self::with_dictionary(dictionary, config))
    }

    /// Create a checker over an already built dictionary. The word list paths
    /// in `config` are ignored.
    pub fn with_dictionary(dictionary: Dictionary, config: CheckerConfig) -> Self {
        let generator =
            CandidateGenerator::new(config.min_word_len).with_transpositions(config.transpositions);

        TypoChecker {
            dictionary,
            extractor: WordExtractor::new(),
            generator,
            config,
            typo_cache: RwLock::new(AHashMap::new()),
            generations: AtomicUsize::new(0),
        }
    }

    /// Check every line of a file.
    pub fn check_file<P: AsRef<Path>>(&self, path: P) -> Result<Vec<LineTypo>> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        // Keep line terminators: they bound acronyms at the end of a line.
        let lines: Vec<&str> = content.split_inclusive('\n').collect();

        let typos = self.check_lines(&lines);
        info!(
            "checked {}: {} lines, {} possible typos",
            path.display(),
            lines.len(),
            typos.len()
        );
        Ok(typos)
    }

    /// Check a sequence of lines, numbering them from 0.
    pub fn check_lines<S: AsRef<str> + Sync>(&self, lines: &[S]) -> Vec<LineTypo> {
        let check = |(index, line): (usize, &S)| {
            self.check_line(line.as_ref())
                .into_iter()
                .map(|typo| LineTypo { line: index, typo })
                .collect::<Vec<_>>()
        };

        let per_line: Vec<Vec<LineTypo>> = if self.config.parallel {
            lines.par_iter().enumerate().map(check).collect()
        } else {
            lines.iter().enumerate().map(check).collect()
        };
        per_line.into_iter().flatten().collect()
    }

    /// Typos in a single line, in order of first appearance.
    pub fn check_line(&self, line: &str) -> Vec<TypoInfo> {
        self.extractor
            .parse_words(line)
            .into_iter()
            .filter(|word| word.chars().count() >= self.config.min_word_len)
            .filter_map(|word| self.find_typo(&word))
            .collect()
    }

    /// Whether `word` is possibly a typo, and if so what it might have meant.
    ///
    /// Returns `None` for dictionary words, and also for unknown words with
    /// no dictionary word within the edit distance.
    pub fn find_typo(&self, word: &str) -> Option<TypoInfo> {
        if self.dictionary.contains(word) {
            return None;
        }
        if let Some(suggestions) = self.typo_cache.read().get(word) {
            debug!("typo cache hit: {word}");
            return Some(TypoInfo::new(word, suggestions.clone()));
        }

        self.generations.fetch_add(1, Ordering::Relaxed);
        let suggestions: Vec<String> = self
            .generator
            .generate(word, self.config.distance)
            .into_iter()
            .filter(|candidate| self.dictionary.contains(candidate))
            .collect();
        if suggestions.is_empty() {
            return None;
        }

        debug!("typo {word}: {} suggestions", suggestions.len());
        // Another thread may have resolved the same word; its entry is identical.
        self.typo_cache
            .write()
            .entry(word.to_string())
            .or_insert_with(|| suggestions.clone());
        Some(TypoInfo::new(word, suggestions))
    }

    /// The dictionary in use.
    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    /// The active configuration.
    pub fn config(&self) -> &CheckerConfig {
        &self.config
    }

    /// Number of cached typos.
    pub fn cache_len(&self) -> usize {
        self.typo_cache.read().len()
    }

    /// How many times candidates have been generated. Cache hits and
    /// dictionary words do not count.
    pub fn generation_count(&self) -> usize {
        self.generations.load(Ordering::Relaxed)
    }
}

/// Render typos one per line, as printed by the command line tool.
pub fn format_report(typos: &[LineTypo]) -> String {
    typos.iter().map(|typo| format!("{typo}\n")).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checker(words: &[&str]) -> TypoChecker {
        TypoChecker::with_dictionary(Dictionary::from_words(words), CheckerConfig::default())
    }

    #[test]
    fn test_check_line_finds_typos() {
        let checker = checker(&["hello", "world"]);
        let typos = checker.check_line("helloo wrold");

        assert_eq!(typos.len(), 2);
        assert_eq!(typos[0].word, "helloo");
        assert!(typos[0].suggestions.contains(&"hello".to_string()));
        assert_eq!(typos[1].word, "wrold");
        assert!(typos[1].suggestions.contains(&"world".to_string()));
    }

    #[test]
    fn test_dictionary_words_are_not_typos() {
        let checker = checker(&["hello", "world"]);
        assert!(checker.check_line("Hello worlds, hellos World!").is_empty());
        assert!(checker.find_typo("hello").is_none());
    }

    #[test]
    fn test_short_words_are_never_checked() {
        let checker = checker(&["cart"]);
        assert!(checker.check_line("the cat sat").is_empty());
        assert_eq!(checker.generation_count(), 0);
    }

    #[test]
    fn test_words_without_suggestions_are_ignored() {
        let checker = checker(&["hello"]);
        assert!(checker.find_typo("zzzzzz").is_none());
        assert_eq!(checker.cache_len(), 0);
    }

    #[test]
    fn test_cache_hit_skips_generation() {
        let checker = checker(&["spelling"]);

        let first = checker.find_typo("speling").unwrap();
        assert_eq!(checker.generation_count(), 1);

        let second = checker.find_typo("speling").unwrap();
        assert_eq!(first, second);
        assert_eq!(checker.generation_count(), 1);
        assert_eq!(checker.cache_len(), 1);

        checker.check_line("Speling it");
        assert_eq!(checker.generation_count(), 1);
    }

    #[test]
    fn test_suggestions_are_unique() {
        let checker = checker(&["letter", "setter", "better"]);
        let typo = checker.find_typo("getter").unwrap();

        let mut sorted = typo.suggestions.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted.len(), typo.suggestions.len());
        assert_eq!(sorted, vec!["better", "letter", "setter"]);
        // Substitutions are generated letter by letter.
        assert_eq!(typo.suggestions, vec!["better", "letter", "setter"]);
    }

    #[test]
    fn test_check_lines_numbering() {
        let checker = checker(&["hello", "world"]);
        let typos = checker.check_lines(&["all fine", "helloo there", "", "wrold"]);

        let lines: Vec<usize> = typos.iter().map(|t| t.line).collect();
        assert_eq!(lines, vec![1, 3]);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let words = ["hello", "world", "spelling", "checker"];
        let lines = vec![
            "helloo wrold",
            "a speling chekcer",
            "nothing wrong",
            "helloo again",
        ];

        let sequential = checker(&words).check_lines(&lines);
        let config = CheckerConfig {
            parallel: true,
            ..Default::default()
        };
        let parallel =
            TypoChecker::with_dictionary(Dictionary::from_words(words), config).check_lines(&lines);

        assert_eq!(sequential, parallel);
        assert!(!sequential.is_empty());
    }

    #[test]
    fn test_line_typo_display() {
        let typo = LineTypo {
            line: 3,
            typo: TypoInfo::new("wrold", vec!["world".to_string(), "would".to_string()]),
        };
        assert_eq!(
            typo.to_string(),
            "3: wrold is possibly typo. Did you mean: world,would"
        );
        assert_eq!(
            format_report(&[typo]),
            "3: wrold is possibly typo. Did you mean: world,would\n"
        );
    }

    #[test]
    fn test_distance_two() {
        let config = CheckerConfig {
            distance: 2,
            ..Default::default()
        };
        let checker = TypoChecker::with_dictionary(Dictionary::from_words(["checker"]), config);

        let typo = checker.find_typo("chekkerr").unwrap();
        assert!(typo.suggestions.contains(&"checker".to_string()));
    }

    #[test]
    fn test_distance_two_suggestion_order() {
        let config = CheckerConfig {
            distance: 2,
            transpositions: false,
            ..Default::default()
        };
        let checker =
            TypoChecker::with_dictionary(Dictionary::from_words(["ahelp", "xhelps"]), config);

        let typo = checker.find_typo("xhelp").unwrap();
        assert_eq!(typo.suggestions, vec!["ahelp", "xhelps", "ahelps"]);
    }
}
