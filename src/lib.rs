//! # typochecker
//!
//! Finds likely typos in text files by comparing every word against a word
//! list and suggesting dictionary words within a small edit distance.
//!
//! ## Features
//!
//! - Dictionaries built from a word list plus optional domain keywords
//! - Past tense, present progressive and plural forms added automatically
//! - Camel case aware word extraction for source code
//! - Suggestion cache shared across lines and files
//!
//! ```no_run
//! use typochecker::prelude::*;
//!
//! let checker = TypoChecker::new(CheckerConfig::default())?;
//! for typo in checker.check_file("README.md")? {
//!     println!("{typo}");
//! }
//! # Ok::<(), TypoError>(())
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod spelling;

pub mod prelude {
    pub use crate::config::CheckerConfig;
    pub use crate::error::{Result, TypoError};
    pub use crate::spelling::{Dictionary, LineTypo, TypoChecker, TypoInfo};
}
