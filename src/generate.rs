//! End-to-end puzzle generation: validate, place, and (for crosswords) annotate.
//!
//! # Error Handling
//!
//! Both pipelines return [`GenerateError`]:
//!
//! - G001: `Validation` (the word list was rejected; nothing was placed)
//! - G002: `InvalidDimensions` (zero width or height)
//! - G003: `WordNotPlaced` (word search only)
//!
//! A crossword that cannot reach the placement threshold is *not* an error:
//! [`generate_crossword`] returns `Ok(None)`.
//!
//! # Examples
//!
//! ## Word search
//!
//! ```
//! use rand::{rngs::StdRng, SeedableRng};
//! use wordgrid::generate;
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let puzzle = generate::generate_word_search(&["cat", "dog"], 7, 7, &mut rng)?;
//! println!("{puzzle}");
//! # Ok::<(), wordgrid::errors::GenerateError>(())
//! ```
//!
//! ## Crossword
//!
//! ```
//! use rand::{rngs::StdRng, SeedableRng};
//! use wordgrid::generate;
//! use wordgrid::word_list::Entry;
//!
//! let entries = vec![
//!     Entry::new("cat", Some("Feline pet")),
//!     Entry::new("car", Some("Sedan, e.g.")),
//!     Entry::new("arm", Some("Limb")),
//! ];
//! let mut rng = StdRng::seed_from_u64(7);
//! match generate::generate_crossword(&entries, 8, 8, &mut rng)? {
//!     Some(crossword) => {
//!         for clue in &crossword.across_clues {
//!             println!("{}. {:?}", clue.number, clue.clue);
//!         }
//!     }
//!     None => println!("Try different words or a larger grid"),
//! }
//! # Ok::<(), wordgrid::errors::GenerateError>(())
//! ```

use crate::annotate::{annotate, CrosswordGrid};
use crate::crossword;
use crate::errors::GenerateError;
use crate::word_list::{validate_entries, validate_words, Entry};
use crate::word_search::{self, PuzzleGrid};
use instant::Instant;
use log::info;
use rand::Rng;

fn check_dimensions(width: usize, height: usize) -> Result<(), GenerateError> {
    if width == 0 || height == 0 {
        return Err(GenerateError::InvalidDimensions { width, height });
    }
    Ok(())
}

/// Validate `words` and build a word search.
///
/// # Errors
///
/// See the module documentation.
pub fn generate_word_search<S: AsRef<str>, R: Rng + ?Sized>(
    words: &[S],
    width: usize,
    height: usize,
    rng: &mut R,
) -> Result<PuzzleGrid, GenerateError> {
    check_dimensions(width, height)?;
    let list = validate_words(words, width.max(height))?;

    let start = Instant::now();
    let puzzle = word_search::place_words(&list.words, width, height, rng)?;
    info!(
        "word search {width}x{height} with {} words built in {:.3}s",
        puzzle.placements.len(),
        start.elapsed().as_secs_f64()
    );

    Ok(puzzle)
}

/// Validate `entries` and build a crossword.
///
/// Returns `Ok(None)` if no attempt placed enough of the words.
///
/// # Errors
///
/// See the module documentation.
pub fn generate_crossword<R: Rng + ?Sized>(
    entries: &[Entry],
    width: usize,
    height: usize,
    rng: &mut R,
) -> Result<Option<CrosswordGrid>, GenerateError> {
    check_dimensions(width, height)?;
    let entries = validate_entries(entries, width.max(height))?;

    let start = Instant::now();
    let result = crossword::place_entries(&entries, width, height, rng).map(annotate);
    match &result {
        Some(grid) => info!(
            "crossword {width}x{height} with {}/{} words built in {:.3}s",
            grid.placements.len(),
            entries.len(),
            start.elapsed().as_secs_f64()
        ),
        None => info!("no crossword found after {:.3}s", start.elapsed().as_secs_f64()),
    }

    Ok(result)
}
