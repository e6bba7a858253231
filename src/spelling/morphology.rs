//! Inflected word forms derived from ordered suffix rules.
//!
//! Each rule set is evaluated in order and the first rule whose predicate
//! accepts the word produces the derived form. The last rule of every set
//! accepts everything.

/// Vowels used by the suffix rules.
pub const VOWELS: &str = "aiueo";

/// A single suffix rule: a predicate over the word and the transformation
/// applied when the predicate holds.
#[derive(Clone, Copy)]
pub struct MorphologyRule {
    /// Whether this rule applies to the word.
    pub matches: fn(&str) -> bool,
    /// Produce the derived form.
    pub convert: fn(&str) -> String,
}

impl std::fmt::Debug for MorphologyRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MorphologyRule")
            .field("matches", &"<fn>")
            .field("convert", &"<fn>")
            .finish()
    }
}

/// Rules for the past tense of a verb.
///
/// chop -> chopped, study -> studied, like -> liked, other -> append "ed".
pub const PAST_TENSE_RULES: &[MorphologyRule] = &[
    MorphologyRule {
        matches: ends_with_cvc,
        convert: |word| format!("{word}{}ed", last_char(word)),
    },
    MorphologyRule {
        matches: ends_with_consonant_y,
        convert: |word| format!("{}ied", chop(word, 1)),
    },
    MorphologyRule {
        matches: |word| word.ends_with('e'),
        convert: |word| format!("{word}d"),
    },
    MorphologyRule {
        matches: always,
        convert: |word| format!("{word}ed"),
    },
];

/// Rules for the present progressive tense of a verb.
///
/// lie -> lying, chop -> chopping, love -> loving, other -> append "ing".
pub const PRESENT_PROGRESSIVE_TENSE_RULES: &[MorphologyRule] = &[
    MorphologyRule {
        matches: |word| word.ends_with("ie"),
        convert: |word| format!("{}ying", chop(word, 2)),
    },
    MorphologyRule {
        matches: ends_with_cvc,
        convert: |word| format!("{word}{}ing", last_char(word)),
    },
    MorphologyRule {
        matches: |word| word.ends_with('e'),
        convert: |word| format!("{}ing", chop(word, 1)),
    },
    MorphologyRule {
        matches: always,
        convert: |word| format!("{word}ing"),
    },
];

/// Rules for the plural form of a noun.
///
/// knife -> knives, baby -> babies, brush -> brushes, other -> append "s".
pub const PLURAL_FORM_RULES: &[MorphologyRule] = &[
    MorphologyRule {
        matches: |word| word.ends_with('f') || word.ends_with("fe"),
        convert: |word| {
            let stem = word
                .strip_suffix("fe")
                .or_else(|| word.strip_suffix('f'))
                .unwrap_or(word);
            format!("{stem}ves")
        },
    },
    MorphologyRule {
        matches: ends_with_consonant_y,
        convert: |word| format!("{}ies", chop(word, 1)),
    },
    MorphologyRule {
        matches: |word| ["s", "sh", "ch", "x"].iter().any(|s| word.ends_with(s)),
        convert: |word| format!("{word}es"),
    },
    MorphologyRule {
        matches: always,
        convert: |word| format!("{word}s"),
    },
];

/// The inflections added to the dictionary for every loaded word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordForm {
    PastTense,
    PresentProgressive,
    Plural,
}

impl WordForm {
    /// All forms, in the order variations are produced.
    pub const ALL: [WordForm; 3] = [
        WordForm::PastTense,
        WordForm::PresentProgressive,
        WordForm::Plural,
    ];

    /// The rule set producing this form.
    pub fn rules(self) -> &'static [MorphologyRule] {
        match self {
            WordForm::PastTense => PAST_TENSE_RULES,
            WordForm::PresentProgressive => PRESENT_PROGRESSIVE_TENSE_RULES,
            WordForm::Plural => PLURAL_FORM_RULES,
        }
    }

    /// Derive this form of `word`.
    pub fn apply(self, word: &str) -> String {
        convert_word(self.rules(), word)
    }
}

/// Convert a word with the first matching rule of `rules`.
///
/// A rule set without a matching rule leaves the word unchanged; the
/// predefined sets always end with a catch-all.
pub fn convert_word(rules: &[MorphologyRule], word: &str) -> String {
    rules
        .iter()
        .find(|rule| (rule.matches)(word))
        .map(|rule| (rule.convert)(word))
        .unwrap_or_else(|| word.to_string())
}

/// Past tense, present progressive and plural forms of `word`.
pub fn word_variations(word: &str) -> [String; 3] {
    WordForm::ALL.map(|form| form.apply(word))
}

fn always(_word: &str) -> bool {
    true
}

fn is_vowel(c: char) -> bool {
    VOWELS.contains(c)
}

fn is_consonant(c: char) -> bool {
    c.is_ascii_lowercase() && !is_vowel(c)
}

fn ends_with_cvc(word: &str) -> bool {
    let mut tail = word.chars().rev();
    matches!(
        (tail.next(), tail.next(), tail.next()),
        (Some(c3), Some(v), Some(c1)) if is_consonant(c1) && is_vowel(v) && is_consonant(c3)
    )
}

fn ends_with_consonant_y(word: &str) -> bool {
    let mut tail = word.chars().rev();
    matches!((tail.next(), tail.next()), (Some('y'), Some(c)) if is_consonant(c))
}

fn last_char(word: &str) -> char {
    word.chars().next_back().unwrap_or_default()
}

/// Drop the last `n` characters.
fn chop(word: &str, n: usize) -> &str {
    match word.char_indices().rev().nth(n.saturating_sub(1)) {
        Some((idx, _)) if n > 0 => &word[..idx],
        _ if n == 0 => word,
        _ => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_past_tense() {
        assert_eq!(convert_word(PAST_TENSE_RULES, "chop"), "chopped");
        assert_eq!(convert_word(PAST_TENSE_RULES, "study"), "studied");
        assert_eq!(convert_word(PAST_TENSE_RULES, "like"), "liked");
        assert_eq!(convert_word(PAST_TENSE_RULES, "walk"), "walked");
    }

    #[test]
    fn test_present_progressive() {
        assert_eq!(convert_word(PRESENT_PROGRESSIVE_TENSE_RULES, "lie"), "lying");
        assert_eq!(
            convert_word(PRESENT_PROGRESSIVE_TENSE_RULES, "chop"),
            "chopping"
        );
        assert_eq!(
            convert_word(PRESENT_PROGRESSIVE_TENSE_RULES, "love"),
            "loving"
        );
        assert_eq!(
            convert_word(PRESENT_PROGRESSIVE_TENSE_RULES, "read"),
            "reading"
        );
    }

    #[test]
    fn test_plural() {
        assert_eq!(convert_word(PLURAL_FORM_RULES, "knife"), "knives");
        assert_eq!(convert_word(PLURAL_FORM_RULES, "leaf"), "leaves");
        assert_eq!(convert_word(PLURAL_FORM_RULES, "baby"), "babies");
        assert_eq!(convert_word(PLURAL_FORM_RULES, "brush"), "brushes");
        assert_eq!(convert_word(PLURAL_FORM_RULES, "box"), "boxes");
        assert_eq!(convert_word(PLURAL_FORM_RULES, "book"), "books");
    }

    #[test]
    fn test_first_match_wins() {
        // "play" ends consonant-vowel-consonant, so the doubling rule fires
        // before the vowel+y case is ever considered.
        assert_eq!(convert_word(PAST_TENSE_RULES, "play"), "playyed");
        // "enter" also ends in CVC.
        assert_eq!(convert_word(PAST_TENSE_RULES, "enter"), "enterred");
    }

    #[test]
    fn test_short_and_empty_words() {
        assert_eq!(convert_word(PAST_TENSE_RULES, ""), "ed");
        assert_eq!(convert_word(PRESENT_PROGRESSIVE_TENSE_RULES, "ie"), "ying");
        assert_eq!(convert_word(PLURAL_FORM_RULES, "y"), "ys");
    }

    #[test]
    fn test_word_variations() {
        let variations = word_variations("chop");
        assert_eq!(variations, ["chopped", "chopping", "chops"]);
    }

    #[test]
    fn test_empty_rule_set_leaves_word() {
        assert_eq!(convert_word(&[], "word"), "word");
    }

    #[test]
    fn test_chop() {
        assert_eq!(chop("lie", 2), "l");
        assert_eq!(chop("ab", 2), "");
        assert_eq!(chop("a", 3), "");
        assert_eq!(chop("abc", 0), "abc");
    }
}
