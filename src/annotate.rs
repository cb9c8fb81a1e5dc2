//! Turn a finished crossword fill into numbered, renderable output.
//!
//! Numbering walks the placements in reading order (row, then column). Each new
//! start cell mints the next number; a placement starting on a cell that already
//! has one (an across and a down word sharing a first letter) reuses it. The
//! start cell → number map is built once, so the pass is linear after the sort.

use crate::crossword::{CrosswordFill, CrosswordPlacement};
use crate::grid::{Axis, Grid, Position};
use crate::letters::BLACK_CELL;
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};
use std::fmt;

/// Per-cell metadata for rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CellData {
    pub letter: Option<char>,
    /// Clue number starting in this cell, or 0.
    pub number: u32,
    /// True if no word covers this cell.
    pub black: bool,
}

impl Default for CellData {
    fn default() -> Self {
        Self { letter: None, number: 0, black: true }
    }
}

/// One line of a clue list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClueEntry {
    pub number: u32,
    pub clue: Option<String>,
    pub answer: String,
}

/// A finished crossword, ready to hand to a renderer.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CrosswordGrid {
    pub grid: Grid<Option<char>>,
    /// In placement order, each with its number set.
    #[serde(rename = "wordPlacements")]
    pub placements: Vec<CrosswordPlacement>,
    pub width: usize,
    pub height: usize,
    /// Clue text of every placed word that has one, keyed by word.
    pub clues: BTreeMap<String, String>,
    #[serde(rename = "gridData")]
    pub cells: Grid<CellData>,
    pub across_clues: Vec<ClueEntry>,
    pub down_clues: Vec<ClueEntry>,
}

impl fmt::Display for CrosswordGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.grid.rows() {
            let line: String = row
                .iter()
                .map(|cell| cell.unwrap_or(BLACK_CELL))
                .flat_map(|c| [c, ' '])
                .collect();
            writeln!(f, "{}", line.trim_end())?;
        }
        Ok(())
    }
}

/// Number every placement in reading order, returning the start cell → number map.
///
/// Ties on the start cell are broken across-before-down, so the result does not
/// depend on placement order.
pub fn number_placements(placements: &mut [CrosswordPlacement]) -> HashMap<Position, u32> {
    let mut order: Vec<usize> = (0..placements.len()).collect();
    order.sort_by_key(|&i| (placements[i].start, placements[i].axis));

    let mut numbers: HashMap<Position, u32> = HashMap::with_capacity(placements.len());
    let mut next = 1;
    for i in order {
        let number = *numbers.entry(placements[i].start).or_insert_with(|| {
            let n = next;
            next += 1;
            n
        });
        placements[i].number = Some(number);
    }

    numbers
}

fn clue_list(placements: &[CrosswordPlacement], axis: Axis) -> Vec<ClueEntry> {
    let mut list: Vec<ClueEntry> = placements
        .iter()
        .filter(|p| p.axis == axis)
        .map(|p| ClueEntry {
            number: p.number.unwrap_or(0),
            clue: p.clue.clone(),
            answer: p.word.clone(),
        })
        .collect();
    list.sort_by_key(|entry| entry.number);
    list
}

/// Number the placements and build the cell metadata and clue lists.
#[must_use]
pub fn annotate(fill: CrosswordFill) -> CrosswordGrid {
    let CrosswordFill { grid, mut placements } = fill;
    let numbers = number_placements(&mut placements);

    let mut cells = grid.map(|&letter| CellData { letter, number: 0, black: letter.is_none() });
    for (&pos, &number) in &numbers {
        if let Some(cell) = cells.get_mut(pos) {
            cell.number = number;
        }
    }

    let clues = placements
        .iter()
        .filter_map(|p| p.clue.as_ref().map(|clue| (p.word.clone(), clue.clone())))
        .collect();

    CrosswordGrid {
        width: grid.width(),
        height: grid.height(),
        across_clues: clue_list(&placements, Axis::Across),
        down_clues: clue_list(&placements, Axis::Down),
        grid,
        placements,
        clues,
        cells,
    }
}
