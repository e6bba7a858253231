//! Spelling support: dictionary construction with inflected forms, word
//! extraction from source lines, and edit-distance typo detection.

pub mod candidates;
pub mod checker;
pub mod dictionary;
pub mod morphology;
pub mod words;

pub use candidates::CandidateGenerator;
pub use checker::{LineTypo, TypoChecker, TypoInfo, format_report};
pub use dictionary::Dictionary;
pub use morphology::{
    MorphologyRule, PAST_TENSE_RULES, PLURAL_FORM_RULES, PRESENT_PROGRESSIVE_TENSE_RULES,
    WordForm, convert_word, word_variations,
};
pub use words::{WordExtractor, parse_words};
