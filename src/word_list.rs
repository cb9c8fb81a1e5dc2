//! `word_list`: parse and validate the raw word list handed to the generators
//!
//! Raw input comes from a text box, a file or a JS array, so this module accepts
//! either newline-delimited text or an already-split list of strings.
//!
//! The parsing logic:
//! - Each line is trimmed; blank lines are skipped silently.
//! - For crosswords, a line may be `word;clue`. Everything after the first `;`
//!   is the clue (trimmed); an empty clue counts as no clue.
//!
//! The validation logic (see [`validate_words`]):
//! - Words are trimmed and uppercased.
//! - Every word must be at most `max_dimension` letters long.
//! - Every word must match `^[A-Z]+$`.
//! - No word may appear twice (case-insensitive, since we uppercase first).
//!
//! All rules are checked for all words, and every violation is reported, so the
//! user can fix the whole list in one go. Validation is a pure function.
//!
//! `load_from_path(...)` is **native-only**; everything else is WASM-safe.

use crate::errors::{ValidationError, ValidationErrors};
use crate::letters::is_grid_word;
use serde::Serialize;
use std::collections::HashSet;

/// A word plus its optional crossword clue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    pub word: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clue: Option<String>,
}

impl Entry {
    #[must_use]
    pub fn new(word: impl Into<String>, clue: Option<&str>) -> Self {
        Self {
            word: word.into(),
            clue: clue.map(str::to_string),
        }
    }
}

impl From<&str> for Entry {
    fn from(word: &str) -> Self {
        Entry::new(word, None)
    }
}

/// A validated word list: uppercased, trimmed, duplicate-free, in input order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordList {
    pub words: Vec<String>,
}

/// Raw (unvalidated) entries as read from text.
#[derive(Debug, Clone)]
pub struct EntryList {
    pub entries: Vec<Entry>,
}

impl EntryList {
    /// Parse entries from an in-memory string. WASM-safe.
    ///
    /// Lines are `word` or `word;clue`; blank lines are skipped.
    #[must_use]
    pub fn parse_from_str(contents: &str) -> EntryList {
        EntryList { entries: parse_entries(contents) }
    }

    /// Native-only convenience method: read from a file path and parse.
    ///
    /// # Errors
    ///
    /// Will return an `Error` if unable to read a file at `path`.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> std::io::Result<EntryList> {
        let path_ref = path.as_ref();

        let data = std::fs::read_to_string(path_ref).map_err(|e| {
            std::io::Error::new(
                e.kind(),
                format!("failed to read word list from '{}': {}", path_ref.display(), e)
            )
        })?;

        Ok(Self::parse_from_str(&data))
    }

    /// Just the words, clues dropped.
    #[must_use]
    pub fn words(&self) -> Vec<String> {
        self.entries.iter().map(|e| e.word.clone()).collect()
    }
}

/// Split newline-delimited text into trimmed, non-blank words.
#[must_use]
pub fn parse_words(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Parse `word` / `word;clue` lines; the clue is everything after the first `;`.
#[must_use]
pub fn parse_entries(text: &str) -> Vec<Entry> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| match line.split_once(';') {
            Some((word, clue)) => {
                let clue = clue.trim();
                Entry::new(word.trim(), (!clue.is_empty()).then_some(clue))
            }
            None => Entry::new(line, None),
        })
        .collect()
}

/// Normalize every word and collect every rule violation.
///
/// Returns the normalized (trimmed, uppercased) non-blank words in input order,
/// together with the index of the raw word each one came from.
fn check_words<'a>(
    raw_words: impl Iterator<Item = &'a str>,
    max_dimension: usize,
) -> Result<Vec<(usize, String)>, ValidationErrors> {
    let mut errors = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();
    let mut reported_duplicates: HashSet<String> = HashSet::new();
    let mut normalized = Vec::new();

    for (i, raw) in raw_words.enumerate() {
        let word = raw.trim().to_uppercase();
        if word.is_empty() {
            continue;
        }

        let len = word.chars().count();
        if len > max_dimension {
            errors.push(ValidationError::WordTooLong { word: word.clone(), len, max: max_dimension });
        }

        if !is_grid_word(&word) {
            errors.push(ValidationError::InvalidCharacters { word: word.clone() });
        }

        // report each duplicated word once, however many times it repeats
        if !seen.insert(word.clone()) && reported_duplicates.insert(word.clone()) {
            errors.push(ValidationError::DuplicateWord { word: word.clone() });
        }

        normalized.push((i, word));
    }

    if normalized.is_empty() {
        errors.push(ValidationError::EmptyWordList);
    }

    match ValidationErrors::from_vec(errors) {
        Some(errors) => {
            log::debug!("word list rejected with {} error(s)", errors.len());
            Err(errors)
        }
        None => Ok(normalized),
    }
}

/// Validate a raw word list against a grid whose larger side is `max_dimension`.
///
/// # Errors
///
/// Returns every [`ValidationError`] found across the whole list.
pub fn validate_words<S: AsRef<str>>(
    raw_words: &[S],
    max_dimension: usize,
) -> Result<WordList, ValidationErrors> {
    let words = check_words(raw_words.iter().map(AsRef::as_ref), max_dimension)?
        .into_iter()
        .map(|(_, word)| word)
        .collect();

    Ok(WordList { words })
}

/// Validate crossword entries; clues are carried through unchanged.
///
/// # Errors
///
/// Returns every [`ValidationError`] found across the whole list.
pub fn validate_entries(
    entries: &[Entry],
    max_dimension: usize,
) -> Result<Vec<Entry>, ValidationErrors> {
    let checked = check_words(entries.iter().map(|e| e.word.as_str()), max_dimension)?;

    Ok(checked
        .into_iter()
        .map(|(i, word)| Entry { word, clue: entries[i].clue.clone() })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_normalizes() {
        let list = validate_words(&["  cat ", "Dog", "BIRD"], 10).unwrap();
        assert_eq!(list.words, vec!["CAT", "DOG", "BIRD"]);
    }

    #[test]
    fn test_validate_keeps_input_order() {
        let list = validate_words(&["zebra", "ab", "monkey"], 10).unwrap();
        assert_eq!(list.words, vec!["ZEBRA", "AB", "MONKEY"]);
    }

    #[test]
    fn test_duplicate_case_insensitive() {
        let errors = validate_words(&["HI", "hi"], 10).unwrap_err();
        assert_eq!(errors.errors(), &[ValidationError::DuplicateWord { word: "HI".to_string() }]);
    }

    #[test]
    fn test_duplicate_reported_once() {
        let errors = validate_words(&["cat", "CAT", "Cat", "dog"], 10).unwrap_err();
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_too_long() {
        let errors = validate_words(&["TOOLONGWORD"], 5).unwrap_err();
        assert_eq!(
            errors.errors(),
            &[ValidationError::WordTooLong { word: "TOOLONGWORD".to_string(), len: 11, max: 5 }]
        );
    }

    #[test]
    fn test_length_equal_to_dimension_is_fine() {
        assert!(validate_words(&["SEVENXX"], 7).is_ok());
    }

    #[test]
    fn test_invalid_characters() {
        for bad in ["OK1", "ice cream", "don't", "café"] {
            let errors = validate_words(&[bad], 20).unwrap_err();
            assert!(
                errors.iter().any(|e| matches!(e, ValidationError::InvalidCharacters { .. })),
                "{bad} should be rejected"
            );
        }
    }

    #[test]
    fn test_collects_all_errors() {
        let errors = validate_words(&["OK1", "hi", "HI", "WAYTOOLONG"], 5).unwrap_err();
        let codes: Vec<&str> = errors.iter().map(ValidationError::code).collect();
        assert_eq!(codes, vec!["V002", "V003", "V001"]);
    }

    #[test]
    fn test_one_word_can_break_two_rules() {
        let errors = validate_words(&["BAD WORD!"], 4).unwrap_err();
        let codes: Vec<&str> = errors.iter().map(ValidationError::code).collect();
        assert_eq!(codes, vec!["V001", "V002"]);
    }

    #[test]
    fn test_empty_list() {
        let errors = validate_words::<&str>(&[], 10).unwrap_err();
        assert_eq!(errors.errors(), &[ValidationError::EmptyWordList]);

        let errors = validate_words(&["", "   "], 10).unwrap_err();
        assert_eq!(errors.errors(), &[ValidationError::EmptyWordList]);
    }

    #[test]
    fn test_parse_words_skips_blank_lines() {
        let words = parse_words("cat\n\n  dog  \r\n\nbird\n");
        assert_eq!(words, vec!["cat", "dog", "bird"]);
    }

    #[test]
    fn test_parse_entries_with_clues() {
        let list = EntryList::parse_from_str("cat; Feline pet\ndog\n\nemu;  \nrye;Bread; or whiskey");
        assert_eq!(
            list.entries,
            vec![
                Entry::new("cat", Some("Feline pet")),
                Entry::new("dog", None),
                Entry::new("emu", None),
                Entry::new("rye", Some("Bread; or whiskey")),
            ]
        );
        assert_eq!(list.words(), vec!["cat", "dog", "emu", "rye"]);
    }

    #[test]
    fn test_validate_entries_carries_clues() {
        let entries = vec![Entry::new(" cat", Some("Feline pet")), Entry::new("dog", None)];
        let valid = validate_entries(&entries, 8).unwrap();
        assert_eq!(valid, vec![Entry::new("CAT", Some("Feline pet")), Entry::new("DOG", None)]);
    }

    #[test]
    fn test_validate_entries_skips_blank_words() {
        let entries = vec![Entry::new("", Some("orphan clue")), Entry::new("owl", Some("Night bird"))];
        let valid = validate_entries(&entries, 8).unwrap();
        assert_eq!(valid, vec![Entry::new("OWL", Some("Night bird"))]);
    }
}
