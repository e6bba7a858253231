//! Brute-force generation of strings within an edit distance of a word.
//!
//! Nothing is pruned while generating: every deletion, insertion and
//! substitution (and optionally adjacent transposition) is produced, and
//! distance `n` is the union of every distance-1 candidate expanded to
//! distance `n - 1`. The
//! candidate count grows roughly by a factor of `53 * len` per level, so
//! distances above 2 are impractical for real words.

use ahash::AHashSet;

/// Letters used for insertions and substitutions.
pub const ALPHABET: [char; 26] = [
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r', 's',
    't', 'u', 'v', 'w', 'x', 'y', 'z',
];

/// Generates edit candidates for a word.
#[derive(Debug, Clone)]
pub struct CandidateGenerator {
    /// Words of at most this many characters get no deletion candidates.
    min_word_len: usize,
    /// Whether swapping two adjacent characters counts as one edit.
    transpositions: bool,
}

impl CandidateGenerator {
    /// Create a generator; deletions are skipped for words no longer than `min_word_len`.
    pub fn new(min_word_len: usize) -> Self {
        CandidateGenerator {
            min_word_len,
            transpositions: true,
        }
    }

    /// Enable or disable adjacent transpositions.
    pub fn with_transpositions(mut self, transpositions: bool) -> Self {
        self.transpositions = transpositions;
        self
    }

    /// All candidates within `distance` edits of `word`, without duplicates,
    /// in the order they were first produced. `word` itself is never returned.
    ///
    /// For distance 1 the order is deletions, insertions, substitutions and
    /// transpositions. For larger distances each distance-1 candidate is
    /// expanded in turn, and the result is the union of those expansions in
    /// that order. A substitution may keep a letter unchanged, so every
    /// distance-1 candidate is part of its own expansion and the result for
    /// `d` is a subset of the result for `d + 1`. Distance 0 yields nothing.
    pub fn generate(&self, word: &str, distance: usize) -> Vec<String> {
        let mut out = Vec::new();
        let mut seen = AHashSet::new();
        self.collect(word, distance, &mut out, &mut seen);
        out.retain(|candidate| candidate != word);
        out
    }

    fn collect(
        &self,
        word: &str,
        distance: usize,
        out: &mut Vec<String>,
        seen: &mut AHashSet<String>,
    ) {
        if distance == 0 {
            return;
        }

        let mut level = AHashSet::new();
        let single = self
            .single_edits(word)
            .into_iter()
            .filter(|candidate| level.insert(candidate.clone()));

        if distance == 1 {
            for candidate in single {
                if seen.insert(candidate.clone()) {
                    out.push(candidate);
                }
            }
        } else {
            for candidate in single {
                self.collect(&candidate, distance - 1, out, seen);
            }
        }
    }

    /// Every single-edit variant of `word`, duplicates included.
    fn single_edits(&self, word: &str) -> Vec<String> {
        let chars: Vec<char> = word.chars().collect();

        let mut edits = Vec::new();
        if chars.len() > self.min_word_len {
            edits.extend(deletions(&chars));
        }
        edits.extend(insertions(&chars));
        edits.extend(substitutions(&chars));
        if self.transpositions {
            edits.extend(transpositions(&chars));
        }
        edits
    }
}

impl Default for CandidateGenerator {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_MIN_WORD_LEN)
    }
}

/// Remove one character at each position.
pub fn deletions(chars: &[char]) -> Vec<String> {
    (0..chars.len())
        .map(|i| {
            let mut new_word = chars.to_vec();
            new_word.remove(i);
            new_word.into_iter().collect()
        })
        .collect()
}

/// Insert every letter at every position, letter by letter.
pub fn insertions(chars: &[char]) -> Vec<String> {
    let mut edits = Vec::with_capacity(ALPHABET.len() * (chars.len() + 1));
    for ch in ALPHABET {
        for i in 0..=chars.len() {
            let mut new_word = chars.to_vec();
            new_word.insert(i, ch);
            edits.push(new_word.into_iter().collect());
        }
    }
    edits
}

/// Replace each position with every letter, letter by letter. Replacing a
/// letter with itself gives back the input.
pub fn substitutions(chars: &[char]) -> Vec<String> {
    let mut edits = Vec::with_capacity(ALPHABET.len() * chars.len());
    for ch in ALPHABET {
        for i in 0..chars.len() {
            let mut new_word = chars.to_vec();
            new_word[i] = ch;
            edits.push(new_word.into_iter().collect());
        }
    }
    edits
}

/// Swap each pair of differing adjacent characters.
pub fn transpositions(chars: &[char]) -> Vec<String> {
    (0..chars.len().saturating_sub(1))
        .filter(|&i| chars[i] != chars[i + 1])
        .map(|i| {
            let mut new_word = chars.to_vec();
            new_word.swap(i, i + 1);
            new_word.into_iter().collect()
        })
        .collect()
}
