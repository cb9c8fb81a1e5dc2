//! Error types for validation and generation, with error codes and helpful messages.
//!
//! # Error Codes
//!
//! Each error variant has a unique code for documentation lookup:
//!
//! - V001: `WordTooLong` (Word longer than the largest grid dimension)
//! - V002: `InvalidCharacters` (Word contains something other than A-Z)
//! - V003: `DuplicateWord` (Word appears more than once)
//! - V004: `EmptyWordList` (No words given)
//! - G001: `Validation` (Word list failed validation (wraps [`ValidationErrors`]))
//! - G002: `InvalidDimensions` (Grid width or height is zero)
//! - G003: `WordNotPlaced` (Word-search placer ran out of attempts for a word)
//!
//! # Examples
//!
//! ```
//! use wordgrid::errors::ValidationError;
//!
//! let err = ValidationError::WordTooLong { word: "ELEPHANT".to_string(), len: 8, max: 5 };
//! assert_eq!(err.code(), "V001");
//! println!("{}", err.display_detailed());
//! ```

use std::fmt;

/// One problem found in a raw word list.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("\"{word}\" is {len} letters long but the grid allows at most {max}")]
    WordTooLong { word: String, len: usize, max: usize },

    #[error("\"{word}\" contains characters other than the letters A-Z")]
    InvalidCharacters { word: String },

    #[error("\"{word}\" appears more than once")]
    DuplicateWord { word: String },

    #[error("No words were given")]
    EmptyWordList,
}

impl ValidationError {
    /// Returns the error code for this error variant
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            ValidationError::WordTooLong { .. } => "V001",
            ValidationError::InvalidCharacters { .. } => "V002",
            ValidationError::DuplicateWord { .. } => "V003",
            ValidationError::EmptyWordList => "V004",
        }
    }

    /// Returns a short description of this error type (for documentation)
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            ValidationError::WordTooLong { .. } => "Word longer than the largest grid dimension",
            ValidationError::InvalidCharacters { .. } => "Word contains something other than A-Z",
            ValidationError::DuplicateWord { .. } => "Word appears more than once",
            ValidationError::EmptyWordList => "No words given",
        }
    }

    /// Returns detailed explanation of this error type (for documentation)
    #[must_use]
    pub fn details(&self) -> &'static str {
        match self {
            ValidationError::WordTooLong { .. } => "Every word must fit along a straight line of the grid, so its length cannot exceed max(width, height).",
            ValidationError::InvalidCharacters { .. } => "Words are uppercased and trimmed, then must consist only of the letters A-Z. Spaces, digits, punctuation and accented letters are rejected.",
            ValidationError::DuplicateWord { .. } => "Words are compared after uppercasing, so \"cat\" and \"CAT\" are the same word. Any duplicate invalidates the whole list.",
            ValidationError::EmptyWordList => "After dropping blank lines the word list was empty, so there is nothing to place.",
        }
    }

    /// Returns a helpful suggestion for this error
    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            ValidationError::WordTooLong { .. } => Some("Use a larger grid or a shorter word"),
            ValidationError::InvalidCharacters { .. } => Some("Remove spaces, digits and punctuation (e.g., 'ICECREAM' not 'ice cream!')"),
            ValidationError::DuplicateWord { .. } => Some("Remove the repeated word from the list"),
            ValidationError::EmptyWordList => Some("Enter at least one word, one per line"),
        }
    }

    /// Formats the error with code and optional help text
    #[must_use]
    pub fn display_detailed(&self) -> String {
        format_error_with_code_and_help(&self.to_string(), self.code(), self.help())
    }
}

/// Every problem found in one word list. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors(Vec<ValidationError>);

impl ValidationErrors {
    /// Wrap a batch of errors, or `None` if there were none.
    pub(crate) fn from_vec(errors: Vec<ValidationError>) -> Option<Self> {
        (!errors.is_empty()).then_some(Self(errors))
    }

    #[must_use]
    pub fn errors(&self) -> &[ValidationError] {
        &self.0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ValidationError> {
        self.0.iter()
    }

    /// One detailed line per error
    #[must_use]
    pub fn display_detailed(&self) -> String {
        self.0
            .iter()
            .map(ValidationError::display_detailed)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<String> = self.0.iter().map(ToString::to_string).collect();
        f.write_str(&messages.join("\n"))
    }
}

impl std::error::Error for ValidationErrors {}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a ValidationError;
    type IntoIter = std::slice::Iter<'a, ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Unified error type for the generation pipeline.
///
/// The crossword placer giving up is *not* an error: it is reported as
/// `Ok(None)` by [`crate::generate::generate_crossword`].
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    /// The word list failed validation; nothing was placed.
    #[error("invalid word list:\n{0}")]
    Validation(#[from] ValidationErrors),

    #[error("invalid grid size {width}x{height}: both dimensions must be positive")]
    InvalidDimensions { width: usize, height: usize },

    /// The word-search placer used its whole attempt budget on one word.
    #[error("could not place \"{word}\" in a {width}x{height} grid after {attempts} attempts")]
    WordNotPlaced { word: String, width: usize, height: usize, attempts: usize },
}

impl GenerateError {
    /// Returns the error code for this error variant
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            GenerateError::Validation(_) => "G001",
            GenerateError::InvalidDimensions { .. } => "G002",
            GenerateError::WordNotPlaced { .. } => "G003",
        }
    }

    /// Returns a short description of this error type (for documentation)
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            GenerateError::Validation(_) => "Word list failed validation",
            GenerateError::InvalidDimensions { .. } => "Grid width or height is zero",
            GenerateError::WordNotPlaced { .. } => "Word-search placer ran out of attempts for a word",
        }
    }

    /// Returns detailed explanation of this error type (for documentation)
    #[must_use]
    pub fn details(&self) -> &'static str {
        match self {
            GenerateError::Validation(_) => "The word list was rejected before any placement started. This wraps every validation error found in the list (see Validation Errors section for specific error codes).",
            GenerateError::InvalidDimensions { .. } => "A grid needs at least one row and one column.",
            GenerateError::WordNotPlaced { .. } => "Each word gets width × height × 5 random position/direction draws. None of them fitted this word around the words already placed. The generator does not retry; call it again with different inputs.",
        }
    }

    /// Returns a helpful suggestion for this error
    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            GenerateError::Validation(_) => None, // each ValidationError has its own help
            GenerateError::InvalidDimensions { .. } => Some("Use a width and height of at least 1 (e.g., 15x15)"),
            GenerateError::WordNotPlaced { .. } => Some("Increase the grid size or reduce the number of words"),
        }
    }

    /// Formats the error with code and optional help text
    #[must_use]
    pub fn display_detailed(&self) -> String {
        match self {
            GenerateError::Validation(errors) => {
                // delegate to each ValidationError's detailed display
                format!("{}\n  caused by:\n{}", self.code(), errors.display_detailed())
            }
            _ => format_error_with_code_and_help(&self.to_string(), self.code(), self.help()),
        }
    }
}

/// Helper function to format error messages with code and optional help text
pub(crate) fn format_error_with_code_and_help(base_msg: &str, code: &str, help: Option<&str>) -> String {
    if let Some(help_text) = help {
        format!("{base_msg} ({code})\n{help_text}")
    } else {
        format!("{base_msg} ({code})")
    }
}
