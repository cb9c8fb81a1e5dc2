//! Random word-search placement.
//!
//! Words are placed longest-first, each at a random start cell and direction.
//! A draw is accepted when the whole word stays on the grid and every cell it
//! touches is either empty or already holds the same letter, so words may
//! cross at shared letters. Each word gets `width × height × DIRECTIONS.len()`
//! draws; running out is a terminal [`GenerateError::WordNotPlaced`].
//!
//! Once every word is placed, the remaining empty cells are filled with
//! uniformly random letters.
//!
//! # Example
//!
//! ```
//! use rand::{rngs::StdRng, SeedableRng};
//! use wordgrid::word_search;
//!
//! let mut rng = StdRng::seed_from_u64(1);
//! let words = vec!["CAT".to_string(), "DOG".to_string()];
//! let puzzle = word_search::place_words(&words, 7, 7, &mut rng)?;
//! assert_eq!(puzzle.placements.len(), 2);
//! # Ok::<(), wordgrid::errors::GenerateError>(())
//! ```

use crate::errors::GenerateError;
use crate::grid::{Direction, Grid, Placed, Position, DIRECTIONS};
use crate::letters::random_letter;
use log::debug;
use rand::Rng;
use serde::ser::{SerializeStruct, Serializer};
use serde::Serialize;
use std::fmt;

/// A word hidden in a word search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordPlacement {
    pub word: String,
    pub start: Position,
    pub direction: Direction,
}

impl Placed for WordPlacement {
    fn word(&self) -> &str {
        &self.word
    }

    fn start(&self) -> Position {
        self.start
    }

    fn step(&self) -> (isize, isize) {
        self.direction.delta()
    }
}

/// Serialized with its letter count as `length`.
impl Serialize for WordPlacement {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("WordPlacement", 4)?;
        state.serialize_field("word", &self.word)?;
        state.serialize_field("start", &self.start)?;
        state.serialize_field("direction", &self.direction)?;
        state.serialize_field("length", &self.len())?;
        state.end()
    }
}

/// A finished word search: every cell holds a letter.
#[derive(Debug, Clone, Serialize)]
pub struct PuzzleGrid {
    pub grid: Grid<char>,
    /// In placement order (longest word first).
    #[serde(rename = "wordPlacements")]
    pub placements: Vec<WordPlacement>,
}

impl PuzzleGrid {
    #[must_use]
    pub fn width(&self) -> usize {
        self.grid.width()
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.grid.height()
    }
}

impl fmt::Display for PuzzleGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.grid.rows() {
            let line: Vec<String> = row.iter().map(char::to_string).collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}

/// Number of random draws allowed for a single word.
#[must_use]
pub fn attempt_budget(width: usize, height: usize) -> usize {
    width * height * DIRECTIONS.len()
}

/// True if `word` can be written from `start` along `direction`.
fn fits(grid: &Grid<Option<char>>, word: &str, start: Position, direction: Direction) -> bool {
    word.chars().enumerate().all(|(i, letter)| {
        start
            .offset(direction.delta(), i)
            .and_then(|pos| grid.get(pos))
            .is_some_and(|cell| cell.map_or(true, |existing| existing == letter))
    })
}

/// Write a word whose fit was already checked.
fn write(grid: &mut Grid<Option<char>>, placement: &WordPlacement) {
    for (cell, letter) in placement.cells().into_iter().zip(placement.word.chars()) {
        if let Some(slot) = cell.and_then(|pos| grid.get_mut(pos)) {
            debug_assert!(slot.map_or(true, |existing| existing == letter));
            *slot = Some(letter);
        }
    }
}

/// Try random draws until `word` fits or the budget runs out.
fn place_one<R: Rng + ?Sized>(
    grid: &mut Grid<Option<char>>,
    word: &str,
    rng: &mut R,
) -> Option<WordPlacement> {
    let budget = attempt_budget(grid.width(), grid.height());

    for attempt in 0..budget {
        let start = Position::new(rng.gen_range(0..grid.height()), rng.gen_range(0..grid.width()));
        let direction = DIRECTIONS[rng.gen_range(0..DIRECTIONS.len())];

        if fits(grid, word, start, direction) {
            let placement = WordPlacement { word: word.to_string(), start, direction };
            write(grid, &placement);
            debug!("placed {word} at {start} going {direction:?} after {} draw(s)", attempt + 1);
            return Some(placement);
        }
    }

    None
}

/// Place every word and backfill the rest of the grid.
///
/// `words` should already be validated (see [`crate::word_list::validate_words`]).
///
/// # Errors
///
/// [`GenerateError::InvalidDimensions`] for a zero-sized grid, or
/// [`GenerateError::WordNotPlaced`] naming the first word that did not fit.
pub fn place_words<S: AsRef<str>, R: Rng + ?Sized>(
    words: &[S],
    width: usize,
    height: usize,
    rng: &mut R,
) -> Result<PuzzleGrid, GenerateError> {
    if width == 0 || height == 0 {
        return Err(GenerateError::InvalidDimensions { width, height });
    }

    // hardest-to-fit words go first, while the grid is emptiest
    let mut ordered: Vec<&str> = words.iter().map(AsRef::as_ref).collect();
    ordered.sort_by_key(|w| std::cmp::Reverse(w.len()));

    let mut grid: Grid<Option<char>> = Grid::new(width, height, None);
    let mut placements = Vec::with_capacity(ordered.len());

    for word in ordered {
        debug_assert!(!word.is_empty(), "validated words are never empty");
        let Some(placement) = place_one(&mut grid, word, rng) else {
            return Err(GenerateError::WordNotPlaced {
                word: word.to_string(),
                width,
                height,
                attempts: attempt_budget(width, height),
            });
        };
        placements.push(placement);
    }

    let grid = grid.map(|cell| cell.unwrap_or_else(|| random_letter(rng)));

    Ok(PuzzleGrid { grid, placements })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::letters::GridChar;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|w| w.to_string()).collect()
    }

    fn assert_integrity(puzzle: &PuzzleGrid) {
        for p in &puzzle.placements {
            assert_eq!(puzzle.grid.read(p).as_deref(), Some(p.word.as_str()), "{p:?}");
        }
        assert!(puzzle.grid.iter().all(|(_, c)| c.is_grid_letter()));
    }

    #[test]
    fn test_places_cat_and_dog() {
        let mut rng = StdRng::seed_from_u64(3);
        let puzzle = place_words(&words(&["CAT", "DOG"]), 7, 7, &mut rng).unwrap();

        assert_eq!(puzzle.width(), 7);
        assert_eq!(puzzle.height(), 7);
        let mut placed: Vec<&str> = puzzle.placements.iter().map(|p| p.word.as_str()).collect();
        placed.sort_unstable();
        assert_eq!(placed, vec!["CAT", "DOG"]);
        assert_integrity(&puzzle);
    }

    #[test]
    fn test_longest_word_placed_first() {
        let mut rng = StdRng::seed_from_u64(11);
        let puzzle = place_words(&words(&["AB", "ABCDE", "ABC"]), 8, 8, &mut rng).unwrap();
        let order: Vec<&str> = puzzle.placements.iter().map(|p| p.word.as_str()).collect();
        assert_eq!(order, vec!["ABCDE", "ABC", "AB"]);
    }

    #[test]
    fn test_word_as_long_as_grid() {
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let puzzle = place_words(&words(&["FIVER"]), 5, 5, &mut rng).unwrap();
            assert_integrity(&puzzle);
        }
    }

    #[test]
    fn test_single_column_grid_only_vertical() {
        let mut rng = StdRng::seed_from_u64(5);
        let puzzle = place_words(&words(&["TALL"]), 1, 8, &mut rng).unwrap();
        let direction = puzzle.placements[0].direction;
        assert!(matches!(direction, Direction::Down | Direction::Up), "{direction:?}");
        assert_integrity(&puzzle);
    }

    #[test]
    fn test_unplaceable_word_is_named() {
        let mut rng = StdRng::seed_from_u64(0);
        // 2x2 grid: "ABC" cannot fit in any direction
        let err = place_words(&words(&["AB", "ABC"]), 2, 2, &mut rng).unwrap_err();
        match err {
            GenerateError::WordNotPlaced { word, attempts, .. } => {
                assert_eq!(word, "ABC");
                assert_eq!(attempts, 20);
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn test_conflicting_letters_rejected() {
        let mut grid = Grid::new(3, 1, None);
        let cat = WordPlacement { word: "CAT".into(), start: Position::new(0, 0), direction: Direction::Right };
        write(&mut grid, &cat);

        assert!(fits(&grid, "CAT", Position::new(0, 0), Direction::Right));
        assert!(!fits(&grid, "COT", Position::new(0, 0), Direction::Right));
        assert!(!fits(&grid, "CATS", Position::new(0, 0), Direction::Right));
    }

    #[test]
    fn test_shared_letter_overlap_accepted() {
        let mut grid = Grid::new(3, 3, None);
        let across = WordPlacement { word: "CAT".into(), start: Position::new(1, 0), direction: Direction::Right };
        write(&mut grid, &across);

        // "BAD" down through the 'A' of "CAT"
        assert!(fits(&grid, "BAD", Position::new(0, 1), Direction::Down));
        // "BED" would need an 'E' where the 'A' is
        assert!(!fits(&grid, "BED", Position::new(0, 1), Direction::Down));
    }

    #[test]
    fn test_crowded_grid_keeps_integrity() {
        let list = words(&["APPLE", "GRAPE", "LEMON", "MELON", "PEACH", "PLUM", "LIME", "KIWI", "FIG"]);
        for seed in 0..25 {
            let mut rng = StdRng::seed_from_u64(seed);
            let puzzle = place_words(&list, 10, 10, &mut rng).unwrap();
            assert_eq!(puzzle.placements.len(), list.len());
            assert_integrity(&puzzle);
        }
    }

    #[test]
    fn test_zero_dimension_rejected() {
        let mut rng = StdRng::seed_from_u64(0);
        assert!(matches!(
            place_words(&words(&["A"]), 0, 3, &mut rng),
            Err(GenerateError::InvalidDimensions { width: 0, height: 3 })
        ));
    }

    #[test]
    fn test_json_uses_word_placements_with_length() {
        let mut rng = StdRng::seed_from_u64(2);
        let puzzle = place_words(&words(&["CAT"]), 5, 5, &mut rng).unwrap();
        let json = serde_json::to_value(&puzzle).unwrap();

        assert!(json.get("placements").is_none());
        let placed = &json["wordPlacements"][0];
        assert_eq!(placed["word"], "CAT");
        assert_eq!(placed["length"], 3);
        assert!(placed["direction"].is_string());
    }

    #[test]
    fn test_display_one_line_per_row() {
        let mut rng = StdRng::seed_from_u64(9);
        let puzzle = place_words(&words(&["SUN"]), 4, 3, &mut rng).unwrap();
        let text = puzzle.to_string();
        assert_eq!(text.lines().count(), 3);
        assert!(text.lines().all(|l| l.split(' ').count() == 4));
    }
}
