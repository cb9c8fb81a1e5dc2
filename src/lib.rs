// Reusable library API: visible to the CLI, the bench runner and WASM builds
pub mod annotate;
pub mod crossword;
pub mod errors;
pub mod generate;
pub mod grid;
pub mod letters;
pub mod log;
pub mod word_list;
pub mod word_search;

// Compile the wasm glue only when targeting wasm32.
#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub use annotate::CrosswordGrid;
pub use errors::{GenerateError, ValidationError, ValidationErrors};
pub use word_list::Entry;
pub use word_search::PuzzleGrid;
