//! Generate error code documentation from the source of truth (error enums).
//!
//! This binary reads the error codes, descriptions, details, and help text
//! directly from the `ValidationError` and `GenerateError` implementations via
//! their `code()`, `description()`, `details()`, and `help()` methods.
//!
//! Run with:
//! ```bash
//! cargo run --bin generate_error_docs > docs/ERROR_CODES.md
//! ```

use std::fmt::Write;

use wordgrid::errors::{GenerateError, ValidationError};
use wordgrid::word_list::validate_words;

/// Macro to generate error documentation for any error type
/// with `code()`, `description()`, `details()`, `help()`, and `display_detailed()` methods
macro_rules! write_error_docs {
    ($out:expr, $errors:expr) => {
        for error in $errors {
            let _ = writeln!($out, "### {}: {}\n", error.code(), error.description());
            let _ = writeln!($out, "**Details:** {}\n", error.details());

            if let Some(help_text) = error.help() {
                let _ = writeln!($out, "**How to fix:**\n```\n{}\n```\n", help_text);
            }

            let _ = writeln!($out, "**Example error message:**\n```\n{}\n```\n", error);
            let _ = writeln!($out, "**Detailed format:**\n```\n{}\n```\n", error.display_detailed());
            let _ = writeln!($out, "---\n");
        }
    };
}

/// Helper to create all `ValidationError` variants for documentation
fn all_validation_error_variants() -> Vec<ValidationError> {
    vec![
        ValidationError::WordTooLong { word: "ELEPHANT".to_string(), len: 8, max: 5 },
        ValidationError::InvalidCharacters { word: "R2D2".to_string() },
        ValidationError::DuplicateWord { word: "CAT".to_string() },
        ValidationError::EmptyWordList,
    ]
}

/// Helper to create all `GenerateError` variants for documentation
fn all_generate_error_variants() -> Vec<GenerateError> {
    let mut variants = Vec::new();
    // the validation wrapper can only come out of the validator itself
    if let Err(errors) = validate_words(&["cat", "CAT", "R2D2"], 10) {
        variants.push(GenerateError::Validation(errors));
    }
    variants.push(GenerateError::InvalidDimensions { width: 0, height: 15 });
    variants.push(GenerateError::WordNotPlaced {
        word: "CROCODILE".to_string(),
        width: 9,
        height: 9,
        attempts: 405,
    });
    variants
}

fn render_docs() -> String {
    let mut out = String::new();

    let _ = writeln!(out, "# Error Code Reference\n");
    let _ = writeln!(out, "**⚠️ This document is auto-generated from the source code. Do not edit manually.**\n");

    let _ = writeln!(out, "## Table of Contents\n");
    let _ = writeln!(out, "- [Generate Errors (G001–G003)](#generate-errors)");
    let _ = writeln!(out, "- [Validation Errors (V001–V004)](#validation-errors)");
    let _ = writeln!(out, "- [How to Use Error Codes](#how-to-use-error-codes)\n");

    let _ = writeln!(out, "## Generate Errors\n");
    let _ = writeln!(out, "Top-level errors from the generators. A rejected word list is wrapped in G001.\n");
    write_error_docs!(&mut out, all_generate_error_variants());

    let _ = writeln!(out, "## Validation Errors\n");
    let _ = writeln!(out, "Problems found in the word list before any placement happens. All of them are reported at once.\n");
    write_error_docs!(&mut out, all_validation_error_variants());

    let _ = writeln!(out, "\n## How to Use Error Codes\n");
    let _ = writeln!(out, "When you see an error like:\n");
    let _ = writeln!(out, "```");
    let _ = writeln!(out, "\"R2D2\" contains characters other than the letters A-Z (V002)");
    let _ = writeln!(out, "```\n");
    let _ = writeln!(out, "1. Note the error code (e.g., `V002`)");
    let _ = writeln!(out, "2. Look it up in this document for detailed explanation");
    let _ = writeln!(out, "3. Follow the suggested resolution steps\n");

    out
}

fn main() {
    print!("{}", render_docs());
}
