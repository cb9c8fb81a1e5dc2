//! Crossword placement by intersection search.
//!
//! # Overview
//!
//! One *attempt* builds a grid from scratch:
//! 1. Sort words longest-first and put the longest one in the middle of the
//!    grid, across or down at random.
//! 2. Sweep the unplaced words in a freshly shuffled order (a *pass*). For each
//!    word, look for a letter it shares with an already-placed word and try to
//!    cross it there, perpendicular to that word. The first valid crossing wins.
//! 3. Repeat passes until one places nothing new.
//!
//! An attempt is accepted if it placed at least [`MIN_PLACED_PERCENT`]% of the
//! words. Otherwise it is thrown away and a new attempt starts, up to
//! [`MAX_ATTEMPTS`] times. Running out of attempts is an expected outcome and is
//! reported as `None`, not as an error.
//!
//! # Validity
//!
//! A word may be written at `start` along `axis` only if:
//! - every letter lands on the grid;
//! - every cell is empty or already holds the same letter, and a non-empty cell
//!   is not already used by a word on the same axis (shared cells are always
//!   genuine crossings);
//! - every *newly written* cell has empty neighbors on both perpendicular sides,
//!   so the word never runs alongside another one;
//! - the cells just before the first letter and just after the last letter are
//!   empty or off-grid, so it never extends another word on its own axis.
//!
//! The rules are applied the same way for across and down.

use crate::grid::{Axis, Grid, Placed, Position};
use crate::word_list::Entry;
use log::{debug, info, warn};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::ser::{SerializeStruct, Serializer};
use serde::Serialize;
use std::cmp::Reverse;

/// Whole-grid attempts made before giving up.
pub const MAX_ATTEMPTS: usize = 20;
/// Share of the input words (in percent) an attempt must place to be accepted.
pub const MIN_PLACED_PERCENT: usize = 70;

/// A word placed in a crossword.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrosswordPlacement {
    pub word: String,
    pub clue: Option<String>,
    pub start: Position,
    pub axis: Axis,
    /// Assigned once, by [`crate::annotate::annotate`].
    pub number: Option<u32>,
}

impl Placed for CrosswordPlacement {
    fn word(&self) -> &str {
        &self.word
    }

    fn start(&self) -> Position {
        self.start
    }

    fn step(&self) -> (isize, isize) {
        self.axis.delta()
    }
}

/// The axis goes out as `direction`, next to the letter count as `length`.
impl Serialize for CrosswordPlacement {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("CrosswordPlacement", 6)?;
        state.serialize_field("word", &self.word)?;
        match &self.clue {
            Some(clue) => state.serialize_field("clue", clue)?,
            None => state.skip_field("clue")?,
        }
        state.serialize_field("start", &self.start)?;
        state.serialize_field("direction", &self.axis)?;
        state.serialize_field("length", &self.len())?;
        state.serialize_field("number", &self.number)?;
        state.end()
    }
}

/// The raw outcome of a successful attempt, before numbering.
#[derive(Debug, Clone)]
pub struct CrosswordFill {
    pub grid: Grid<Option<char>>,
    /// In placement order.
    pub placements: Vec<CrosswordPlacement>,
}

/// True if `placed` out of `total` words is enough to accept an attempt.
///
/// Integer form of `placed >= ceil(total * 0.7)`.
#[must_use]
pub fn meets_threshold(placed: usize, total: usize) -> bool {
    placed * 100 >= total * MIN_PLACED_PERCENT
}

#[derive(Debug, Clone, Copy, Default)]
struct Cell {
    letter: Option<char>,
    across: bool,
    down: bool,
}

impl Cell {
    fn used_by(self, axis: Axis) -> bool {
        match axis {
            Axis::Across => self.across,
            Axis::Down => self.down,
        }
    }
}

fn negate((d_row, d_col): (isize, isize)) -> (isize, isize) {
    (-d_row, -d_col)
}

/// Working grid for one attempt. Tracks which axes use each cell.
struct Board {
    cells: Grid<Cell>,
}

impl Board {
    fn new(width: usize, height: usize) -> Self {
        Self { cells: Grid::new(width, height, Cell::default()) }
    }

    /// Off-grid cells count as free.
    fn is_free(&self, pos: Option<Position>) -> bool {
        pos.and_then(|p| self.cells.get(p))
            .map_or(true, |cell| cell.letter.is_none())
    }

    fn can_place(&self, word: &[char], start: Position, axis: Axis) -> bool {
        let step = axis.delta();
        let side = axis.perpendicular().delta();

        if !self.is_free(start.offset(negate(step), 1)) || !self.is_free(start.offset(step, word.len())) {
            return false;
        }

        word.iter().enumerate().all(|(i, &letter)| {
            let Some(pos) = start.offset(step, i) else {
                return false;
            };
            let Some(cell) = self.cells.get(pos) else {
                return false;
            };
            match cell.letter {
                // a crossing: same letter, and only ever with a perpendicular word
                Some(existing) => existing == letter && !cell.used_by(axis),
                None => self.is_free(pos.offset(side, 1)) && self.is_free(pos.offset(negate(side), 1)),
            }
        })
    }

    fn write(&mut self, placement: &CrosswordPlacement) {
        for (cell, letter) in placement.cells().into_iter().zip(placement.word.chars()) {
            if let Some(slot) = cell.and_then(|pos| self.cells.get_mut(pos)) {
                debug_assert!(slot.letter.map_or(true, |existing| existing == letter));
                slot.letter = Some(letter);
                match placement.axis {
                    Axis::Across => slot.across = true,
                    Axis::Down => slot.down = true,
                }
            }
        }
    }

    fn into_letters(self) -> Grid<Option<char>> {
        self.cells.map(|cell| cell.letter)
    }
}

/// Centered start for the first word, or `None` if it is too long for `axis`.
fn centered_start(len: usize, width: usize, height: usize, axis: Axis) -> Option<Position> {
    match axis {
        Axis::Across => (len <= width).then(|| Position::new(height / 2, (width - len) / 2)),
        Axis::Down => (len <= height).then(|| Position::new((height - len) / 2, width / 2)),
    }
}

/// First valid crossing of `word` with any placed word, in placement order.
fn find_crossing(board: &Board, word: &[char], placed: &[CrosswordPlacement]) -> Option<(Position, Axis)> {
    for other in placed {
        let axis = other.axis.perpendicular();
        for (i, &letter) in word.iter().enumerate() {
            for (j, other_letter) in other.word.chars().enumerate() {
                if letter != other_letter {
                    continue;
                }
                let Some(start) = other.cell(j).and_then(|shared| shared.offset(negate(axis.delta()), i)) else {
                    continue;
                };
                if board.can_place(word, start, axis) {
                    return Some((start, axis));
                }
            }
        }
    }
    None
}

fn make_placement(entry: &Entry, start: Position, axis: Axis) -> CrosswordPlacement {
    CrosswordPlacement {
        word: entry.word.clone(),
        clue: entry.clue.clone(),
        start,
        axis,
        number: None,
    }
}

/// One attempt from an empty grid. Always returns what it managed to place.
fn attempt<R: Rng + ?Sized>(entries: &[Entry], width: usize, height: usize, rng: &mut R) -> CrosswordFill {
    let mut board = Board::new(width, height);
    let mut placements: Vec<CrosswordPlacement> = Vec::with_capacity(entries.len());
    let letters: Vec<Vec<char>> = entries.iter().map(|e| e.word.chars().collect()).collect();

    let mut order: Vec<usize> = (0..entries.len()).collect();
    order.sort_by_key(|&i| Reverse(letters[i].len()));

    if let Some((&first, rest)) = order.split_first() {
        let len = letters[first].len();
        let preferred = if rng.gen_bool(0.5) { Axis::Across } else { Axis::Down };
        let seed = [preferred, preferred.perpendicular()]
            .into_iter()
            .find_map(|axis| centered_start(len, width, height, axis).map(|start| (start, axis)))
            .filter(|&(start, axis)| board.can_place(&letters[first], start, axis));

        if let Some((start, axis)) = seed {
            let placement = make_placement(&entries[first], start, axis);
            board.write(&placement);
            placements.push(placement);

            let mut remaining = rest.to_vec();
            let mut pass = 0;
            while !remaining.is_empty() {
                pass += 1;
                remaining.shuffle(rng);

                let mut unplaced = Vec::with_capacity(remaining.len());
                for &i in &remaining {
                    match find_crossing(&board, &letters[i], &placements) {
                        Some((start, axis)) => {
                            let placement = make_placement(&entries[i], start, axis);
                            board.write(&placement);
                            placements.push(placement);
                        }
                        None => unplaced.push(i),
                    }
                }

                let progressed = unplaced.len() < remaining.len();
                debug!("pass {pass}: {} word(s) still unplaced", unplaced.len());
                remaining = unplaced;
                if !progressed {
                    break;
                }
            }
        } else {
            debug!("first word {} does not fit a {width}x{height} grid", entries[first].word);
        }
    }

    CrosswordFill { grid: board.into_letters(), placements }
}

/// Build a crossword from validated entries.
///
/// Returns `None` when no attempt placed enough words; callers should offer
/// different or additional words, or a larger grid.
pub fn place_entries<R: Rng + ?Sized>(
    entries: &[Entry],
    width: usize,
    height: usize,
    rng: &mut R,
) -> Option<CrosswordFill> {
    if entries.is_empty() || width == 0 || height == 0 {
        return None;
    }

    for n in 1..=MAX_ATTEMPTS {
        let fill = attempt(entries, width, height, rng);
        let placed = fill.placements.len();
        if meets_threshold(placed, entries.len()) {
            info!("crossword attempt {n} placed {placed}/{} words", entries.len());
            return Some(fill);
        }
        debug!("crossword attempt {n} placed only {placed}/{} words; retrying", entries.len());
    }

    warn!("no crossword placed {MIN_PLACED_PERCENT}% of {} words in {MAX_ATTEMPTS} attempts", entries.len());
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn chars(word: &str) -> Vec<char> {
        word.chars().collect()
    }

    fn entries(words: &[&str]) -> Vec<Entry> {
        words.iter().map(|&w| Entry::from(w)).collect()
    }

    fn board_with(width: usize, height: usize, placed: &[(&str, Position, Axis)]) -> (Board, Vec<CrosswordPlacement>) {
        let mut board = Board::new(width, height);
        let mut placements = Vec::new();
        for &(word, start, axis) in placed {
            let p = make_placement(&Entry::from(word), start, axis);
            board.write(&p);
            placements.push(p);
        }
        (board, placements)
    }

    #[test]
    fn test_threshold() {
        assert!(meets_threshold(7, 10));
        assert!(!meets_threshold(6, 10));
        assert!(meets_threshold(3, 3));
        assert!(!meets_threshold(2, 3)); // 66%
        assert!(meets_threshold(3, 4)); // ceil(2.8) = 3
        assert!(!meets_threshold(2, 4));
        assert!(meets_threshold(1, 1));
        assert!(!meets_threshold(0, 1));
    }

    #[test]
    fn test_centered_start() {
        assert_eq!(centered_start(3, 8, 8, Axis::Across), Some(Position::new(4, 2)));
        assert_eq!(centered_start(3, 8, 8, Axis::Down), Some(Position::new(2, 4)));
        assert_eq!(centered_start(6, 5, 9, Axis::Across), None);
        assert_eq!(centered_start(6, 5, 9, Axis::Down), Some(Position::new(1, 2)));
    }

    #[test]
    fn test_crossing_at_shared_letter() {
        let (board, placed) = board_with(8, 8, &[("CAT", Position::new(4, 2), Axis::Across)]);
        let found = find_crossing(&board, &chars("CAR"), &placed);
        assert_eq!(found, Some((Position::new(4, 2), Axis::Down)));
    }

    #[test]
    fn test_conflicting_letter_rejected() {
        let (board, _) = board_with(8, 8, &[("CAT", Position::new(4, 2), Axis::Across)]);
        // "DOG" down through (4,3) would need an 'O' where the 'A' is
        assert!(!board.can_place(&chars("DOG"), Position::new(3, 3), Axis::Down));
        assert!(board.can_place(&chars("BAD"), Position::new(3, 3), Axis::Down));
    }

    #[test]
    fn test_out_of_bounds_rejected() {
        let (board, _) = board_with(5, 5, &[]);
        assert!(!board.can_place(&chars("HELLO"), Position::new(0, 1), Axis::Across));
        assert!(!board.can_place(&chars("HELLO"), Position::new(1, 0), Axis::Down));
        assert!(board.can_place(&chars("HELLO"), Position::new(0, 0), Axis::Down));
    }

    #[test]
    fn test_parallel_neighbors_rejected_both_axes() {
        // across word on row 2; a down word crossing at col 2 is fine, but a
        // down word in the next column would touch it side by side
        let (board, _) = board_with(7, 7, &[("CAT", Position::new(2, 1), Axis::Across)]);
        assert!(!board.can_place(&chars("AXE"), Position::new(2, 2), Axis::Across)); // same axis reuse
        assert!(!board.can_place(&chars("RAT"), Position::new(3, 1), Axis::Across)); // directly below

        let (board, _) = board_with(7, 7, &[("CAT", Position::new(1, 2), Axis::Down)]);
        assert!(!board.can_place(&chars("RAT"), Position::new(1, 3), Axis::Down)); // directly right
        assert!(!board.can_place(&chars("RAT"), Position::new(1, 1), Axis::Down)); // directly left
    }

    #[test]
    fn test_adjacent_new_cell_rejected() {
        // CAT across at row 4; ARM down from the 'A' is fine on its own, but
        // CAR down from 'C' would then sit beside ARM's R
        let (board, _) = board_with(
            8,
            8,
            &[("CAT", Position::new(4, 2), Axis::Across), ("ARM", Position::new(4, 3), Axis::Down)],
        );
        assert!(!board.can_place(&chars("CAR"), Position::new(4, 2), Axis::Down));
    }

    #[test]
    fn test_end_caps() {
        let (board, _) = board_with(9, 9, &[("CAT", Position::new(4, 2), Axis::Across)]);
        // "TO" across starting right after CAT would read as "CATTO"
        assert!(!board.can_place(&chars("TO"), Position::new(4, 5), Axis::Across));
        // "ART" down ending just above the 'C'
        assert!(!board.can_place(&chars("ART"), Position::new(1, 2), Axis::Down));
        // "TA" down ending on the 'A' of CAT: the cell below that 'A' is free
        assert!(board.can_place(&chars("TA"), Position::new(3, 3), Axis::Down));
    }

    #[test]
    fn test_three_interlocking_words() {
        for seed in 0..10 {
            let mut rng = StdRng::seed_from_u64(seed);
            let fill = place_entries(&entries(&["CAT", "CAR", "ARM"]), 8, 8, &mut rng).unwrap();
            assert_eq!(fill.placements.len(), 3, "seed {seed}");
            for p in &fill.placements {
                assert_eq!(fill.grid.read(p).as_deref(), Some(p.word.as_str()));
            }
        }
    }

    #[test]
    fn test_unplaceable_set_gives_none() {
        // no shared letters at all: only the first word can ever be placed
        let mut rng = StdRng::seed_from_u64(1);
        assert!(place_entries(&entries(&["ABC", "DEF", "GHI"]), 10, 10, &mut rng).is_none());
    }

    #[test]
    fn test_partial_success_accepted() {
        // 9 of 10 share letters; "XYZ" can never cross anything
        let words = ["STONE", "TONES", "NOTES", "ONSET", "SETON", "STENO", "TENSE", "SCENT", "CENTS", "XYZ"];
        let mut rng = StdRng::seed_from_u64(4);
        let fill = place_entries(&entries(&words), 15, 15, &mut rng).expect("9 of 10 words can interlock");
        assert_eq!(fill.placements.len(), 9);
        assert!(meets_threshold(fill.placements.len(), words.len()));
        assert!(fill.placements.iter().all(|p| p.word != "XYZ"));
    }

    #[test]
    fn test_first_word_switches_axis_when_needed() {
        for seed in 0..10 {
            let mut rng = StdRng::seed_from_u64(seed);
            let fill = place_entries(&entries(&["LONGER"]), 3, 8, &mut rng).unwrap();
            assert_eq!(fill.placements[0].axis, Axis::Down);
            assert_eq!(fill.placements[0].start, Position::new(1, 1));
        }
    }

    #[test]
    fn test_empty_inputs_give_none() {
        let mut rng = StdRng::seed_from_u64(0);
        assert!(place_entries(&[], 5, 5, &mut rng).is_none());
        assert!(place_entries(&entries(&["A"]), 0, 5, &mut rng).is_none());
    }

    #[test]
    fn test_clues_travel_with_placements() {
        let mut rng = StdRng::seed_from_u64(2);
        let list = vec![Entry::new("CAT", Some("Feline")), Entry::new("ACT", None)];
        let fill = place_entries(&list, 6, 6, &mut rng).unwrap();
        let cat = fill.placements.iter().find(|p| p.word == "CAT").unwrap();
        assert_eq!(cat.clue.as_deref(), Some("Feline"));
    }

    #[test]
    fn test_json_shape() {
        let mut placement = make_placement(&Entry::new("CAT", Some("Feline")), Position::new(2, 1), Axis::Down);
        placement.number = Some(4);
        let json = serde_json::to_value(&placement).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "word": "CAT",
                "clue": "Feline",
                "start": { "row": 2, "col": 1 },
                "direction": "down",
                "length": 3,
                "number": 4
            })
        );

        let unclued = serde_json::to_value(make_placement(&Entry::from("ARM"), Position::new(0, 0), Axis::Across)).unwrap();
        assert!(unclued.get("clue").is_none());
        assert!(unclued.get("axis").is_none());
    }
}
