//! Error types for the typochecker library.
//!
//! All fallible operations return [`Result`], whose error side is the
//! [`TypoError`] enum.
//!
//! # Examples
//!
//! ```
//! use typochecker::error::{Result, TypoError};
//!
//! fn example_operation() -> Result<()> {
//!     Err(TypoError::configuration("dictionary not found"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for typochecker operations.
#[derive(Error, Debug)]
pub enum TypoError {
    /// I/O errors while reading a target file.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Missing or unreadable word lists, invalid option values.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Word extraction errors (invalid patterns)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for operations that may fail with TypoError.
pub type Result<T> = std::result::Result<T, TypoError>;

impl TypoError {
    /// Create a new configuration error.
    pub fn configuration<S: Into<String>>(msg: S) -> Self {
        TypoError::Configuration(msg.into())
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        TypoError::Analysis(msg.into())
    }
}
