use crate::errors::{GenerateError, ValidationErrors};
use crate::generate::{generate_crossword, generate_word_search};
use crate::log::init_logger;
use crate::word_list::{parse_entries, validate_words, Entry};
use rand::rngs::StdRng;
use rand::SeedableRng;
use wasm_bindgen::prelude::*;

use serde_wasm_bindgen::to_value;

/// Structured error information for JavaScript consumers
#[derive(serde::Serialize)]
struct WasmError {
    /// Error code (e.g., "V001", "G003")
    code: String,
    /// Display message
    message: String,
    /// Short description of error type
    description: String,
    /// Detailed explanation
    details: String,
    /// Optional helpful suggestion
    #[serde(skip_serializing_if = "Option::is_none")]
    help: Option<String>,
}

impl From<GenerateError> for WasmError {
    fn from(e: GenerateError) -> Self {
        match &e {
            // show every validation problem, with the first one's code
            GenerateError::Validation(errors) => WasmError::from(errors),
            _ => WasmError {
                code: e.code().to_string(),
                message: e.to_string(),
                description: e.description().to_string(),
                details: e.details().to_string(),
                help: e.help().map(|s| s.to_string()),
            },
        }
    }
}

impl From<&ValidationErrors> for WasmError {
    fn from(errors: &ValidationErrors) -> Self {
        let first = &errors.errors()[0];
        WasmError {
            code: first.code().to_string(),
            message: errors.to_string(),
            description: first.description().to_string(),
            details: first.details().to_string(),
            help: first.help().map(|s| s.to_string()),
        }
    }
}

impl From<WasmError> for JsValue {
    fn from(e: WasmError) -> Self {
        let mut msg = format!("Error {}: {}", e.code, e.message);

        if !e.details.is_empty() {
            msg.push_str(&format!("\n\n{}", e.details));
        }

        if let Some(help) = e.help {
            msg.push_str(&format!("\n\nSuggestion: {}", help));
        }

        js_sys::Error::new(&msg).into()
    }
}

fn serialization_error(code: &str, what: &str, e: &serde_wasm_bindgen::Error) -> JsValue {
    WasmError {
        code: code.to_string(),
        message: format!("serialization failed: {e}"),
        description: format!("Failed to serialize {what}"),
        details: format!("The {what} could not be converted to JavaScript format."),
        help: Some("This is an internal error. Please report this issue.".to_string()),
    }
    .into()
}

/// Initialize logging with the specified debug setting.
///
/// This function must be called from JavaScript after the WASM module loads.
#[wasm_bindgen]
pub fn initialize(debug_enabled: bool) {
    console_error_panic_hook::set_once();
    init_logger(debug_enabled);
    log::info!("WASM module initialized");
}

fn words_from_js(words: JsValue) -> Result<Vec<String>, JsValue> {
    serde_wasm_bindgen::from_value(words).map_err(|e| {
        WasmError {
            code: "WASM001".to_string(),
            message: format!("words must be string[]: {e}"),
            description: "Invalid word-list format".to_string(),
            details: "The words parameter must be a JavaScript array of strings.".to_string(),
            help: Some("Ensure you're passing a valid string array, e.g., ['cat', 'dog', 'fish']".to_string()),
        }
        .into()
    })
}

#[derive(serde::Deserialize)]
struct JsEntry {
    word: String,
    #[serde(default)]
    clue: Option<String>,
}

/// JS entry: (words: string[], max_dimension: number)
/// returns the normalized words, or throws listing every problem
#[wasm_bindgen]
pub fn validate_words_wasm(words: JsValue, max_dimension: usize) -> Result<JsValue, JsValue> {
    let words = words_from_js(words)?;
    let list = validate_words(&words, max_dimension).map_err(|errors| WasmError::from(&errors))?;
    to_value(&list.words).map_err(|e| serialization_error("WASM002", "word list", &e))
}

/// JS entry: (words: string[], width: number, height: number, seed: number)
/// returns `{ grid, wordPlacements }`
#[wasm_bindgen]
pub fn generate_word_search_wasm(
    words: JsValue,
    width: usize,
    height: usize,
    seed: u32,
) -> Result<JsValue, JsValue> {
    let words = words_from_js(words)?;
    let mut rng = StdRng::seed_from_u64(u64::from(seed));

    let puzzle = generate_word_search(&words, width, height, &mut rng).map_err(WasmError::from)?;
    to_value(&puzzle).map_err(|e| serialization_error("WASM002", "word search", &e))
}

/// JS entry: (entries: {word, clue?}[], width: number, height: number, seed: number)
/// returns the crossword, or `null` if no satisfactory crossword exists
#[wasm_bindgen]
pub fn generate_crossword_wasm(
    entries: JsValue,
    width: usize,
    height: usize,
    seed: u32,
) -> Result<JsValue, JsValue> {
    let entries: Vec<JsEntry> = serde_wasm_bindgen::from_value(entries).map_err(|e| -> JsValue {
        WasmError {
            code: "WASM001".to_string(),
            message: format!("entries must be {{word, clue?}}[]: {e}"),
            description: "Invalid entry-list format".to_string(),
            details: "The entries parameter must be a JavaScript array of objects with a `word` string and an optional `clue` string.".to_string(),
            help: Some("e.g., [{word: 'cat', clue: 'Feline pet'}, {word: 'arm'}]".to_string()),
        }
        .into()
    })?;
    let entries: Vec<Entry> = entries
        .into_iter()
        .map(|e| Entry { word: e.word, clue: e.clue })
        .collect();
    let mut rng = StdRng::seed_from_u64(u64::from(seed));

    match generate_crossword(&entries, width, height, &mut rng).map_err(WasmError::from)? {
        Some(crossword) => to_value(&crossword).map_err(|e| serialization_error("WASM002", "crossword", &e)),
        None => Ok(JsValue::NULL),
    }
}

/// Parse newline-separated `word` / `word;clue` text into `{word, clue?}` objects.
#[wasm_bindgen]
pub fn parse_entry_list(text: &str) -> Result<JsValue, JsValue> {
    to_value(&parse_entries(text)).map_err(|e| serialization_error("WASM003", "entry list", &e))
}

/// Generate a debug report for troubleshooting.
///
/// Users can copy/paste it when reporting issues.
#[wasm_bindgen]
pub fn get_debug_info(
    puzzle_kind: &str,
    error_message: &str,
    word_count: usize,
    width: usize,
    height: usize,
) -> String {
    use std::fmt::Write;
    let mut report = String::new();

    // NB: writing to a String never fails
    let _ = writeln!(&mut report, "=== WORDGRID DEBUG REPORT ===");
    let _ = writeln!(&mut report, "Version: {} ({})", env!("CARGO_PKG_VERSION"), env!("GIT_HASH"));
    let _ = writeln!(&mut report, "Generated: {}", js_sys::Date::new_0().to_iso_string().as_string().unwrap_or_else(|| "unknown".to_string()));
    let _ = writeln!(&mut report);

    let _ = writeln!(&mut report, "## Error");
    let _ = writeln!(&mut report, "{}", error_message);
    let _ = writeln!(&mut report);

    let _ = writeln!(&mut report, "## Input");
    let _ = writeln!(&mut report, "Puzzle: {}", puzzle_kind);
    let _ = writeln!(&mut report, "Words: {}", word_count);
    let _ = writeln!(&mut report, "Grid: {}x{}", width, height);
    let _ = writeln!(&mut report);

    let _ = writeln!(&mut report, "## Environment");
    if let Some(window) = web_sys::window() {
        if let Ok(user_agent) = window.navigator().user_agent() {
            let _ = writeln!(&mut report, "User Agent: {}", user_agent);
        }
        let _ = writeln!(&mut report, "Location: {}", window.location().href().unwrap_or_else(|_| "unknown".to_string()));
    }
    let _ = writeln!(&mut report);

    let _ = writeln!(&mut report, "=== END DEBUG REPORT ===");

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ValidationError;

    #[test]
    fn test_validation_error_lists_every_problem() {
        let errors = validate_words(&["OK1", "hi", "HI"], 10).unwrap_err();
        let wasm_err = WasmError::from(GenerateError::Validation(errors));
        assert_eq!(wasm_err.code, "V002");
        assert!(wasm_err.message.contains("OK1"));
        assert!(wasm_err.message.contains("more than once"));
    }

    #[test]
    fn test_generate_error_keeps_code_and_help() {
        let wasm_err = WasmError::from(GenerateError::WordNotPlaced {
            word: "CAT".to_string(),
            width: 2,
            height: 2,
            attempts: 20,
        });
        assert_eq!(wasm_err.code, "G003");
        assert!(wasm_err.help.is_some());
    }

    #[test]
    fn test_empty_list_code() {
        let errors = validate_words::<&str>(&[], 10).unwrap_err();
        assert!(matches!(errors.errors()[0], ValidationError::EmptyWordList));
        assert_eq!(WasmError::from(&errors).code, "V004");
    }

    #[test]
    fn test_get_debug_info_structure() {
        let report = get_debug_info("crossword", "no crossword found", 12, 15, 15);
        let lines: Vec<&str> = report.lines().collect();

        assert_eq!(lines[0], "=== WORDGRID DEBUG REPORT ===");
        assert!(lines[2].starts_with("Generated: "));
        let input_idx = lines.iter().position(|&l| l == "## Input").unwrap();
        assert_eq!(lines[input_idx + 1], "Puzzle: crossword");
        assert_eq!(lines[input_idx + 2], "Words: 12");
        assert_eq!(lines[input_idx + 3], "Grid: 15x15");
        assert_eq!(lines.last(), Some(&"=== END DEBUG REPORT ==="));
    }
}
