//! Fixed-size letter grids and the geometry shared by both generators.
//!
//! A [`Grid`] is an owned, row-major buffer whose dimensions never change
//! after creation. Every access goes through a [`Position`] and is bounds
//! checked, so a placer can never write outside the grid.
//!
//! Coordinates are `(row, col)`, with row 0 at the top and col 0 at the left.

use serde::ser::{SerializeSeq, Serializer};
use serde::Serialize;
use std::fmt;

/// A cell coordinate inside a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Step `steps` times by `(d_row, d_col)`.
    ///
    /// Returns `None` if the result would have a negative coordinate; the
    /// upper bound is the grid's business (see [`Grid::contains`]).
    #[must_use]
    pub fn offset(self, (d_row, d_col): (isize, isize), steps: usize) -> Option<Position> {
        let steps = isize::try_from(steps).ok()?;
        let row = isize::try_from(self.row).ok()?.checked_add(d_row.checked_mul(steps)?)?;
        let col = isize::try_from(self.col).ok()?.checked_add(d_col.checked_mul(steps)?)?;
        Some(Position {
            row: usize::try_from(row).ok()?,
            col: usize::try_from(col).ok()?,
        })
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Word-search directions. Only "forward-reading" directions are used, so
/// every hidden word reads left-to-right or top-to-bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Right,
    Down,
    DownRight,
    Up,
    UpRight,
}

/// Every direction the word-search placer draws from.
pub const DIRECTIONS: [Direction; 5] = [
    Direction::Right,
    Direction::Down,
    Direction::DownRight,
    Direction::Up,
    Direction::UpRight,
];

impl Direction {
    /// Unit step as `(d_row, d_col)`.
    #[must_use]
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Direction::Right => (0, 1),
            Direction::Down => (1, 0),
            Direction::DownRight => (1, 1),
            Direction::Up => (-1, 0),
            Direction::UpRight => (-1, 1),
        }
    }
}

/// Crossword axes. Exactly one component of the step is nonzero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    Across,
    Down,
}

impl Axis {
    /// Unit step as `(d_row, d_col)`.
    #[must_use]
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Axis::Across => (0, 1),
            Axis::Down => (1, 0),
        }
    }

    #[must_use]
    pub const fn perpendicular(self) -> Axis {
        match self {
            Axis::Across => Axis::Down,
            Axis::Down => Axis::Across,
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Across => f.write_str("across"),
            Axis::Down => f.write_str("down"),
        }
    }
}

/// Anything that lays a word along a straight line of cells.
pub trait Placed {
    fn word(&self) -> &str;
    fn start(&self) -> Position;
    /// Unit step between consecutive letters, as `(d_row, d_col)`.
    fn step(&self) -> (isize, isize);

    /// Length in letters, not bytes.
    fn len(&self) -> usize {
        self.word().chars().count()
    }

    /// The cell holding letter `i`, or `None` if it falls off the top/left.
    fn cell(&self, i: usize) -> Option<Position> {
        self.start().offset(self.step(), i)
    }

    /// The cells of every letter in order.
    fn cells(&self) -> Vec<Option<Position>> {
        (0..self.len()).map(|i| self.cell(i)).collect()
    }
}

/// Owned `height × width` buffer, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    width: usize,
    height: usize,
    cells: Vec<T>,
}

impl<T: Clone> Grid<T> {
    /// Create a grid with every cell set to `fill`.
    #[must_use]
    pub fn new(width: usize, height: usize, fill: T) -> Self {
        Self {
            width,
            height,
            cells: vec![fill; width * height],
        }
    }
}

impl<T> Grid<T> {
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    #[must_use]
    pub fn contains(&self, pos: Position) -> bool {
        pos.row < self.height && pos.col < self.width
    }

    fn index(&self, pos: Position) -> Option<usize> {
        self.contains(pos).then(|| pos.row * self.width + pos.col)
    }

    #[must_use]
    pub fn get(&self, pos: Position) -> Option<&T> {
        self.index(pos).map(|i| &self.cells[i])
    }

    pub fn get_mut(&mut self, pos: Position) -> Option<&mut T> {
        self.index(pos).map(move |i| &mut self.cells[i])
    }

    /// Rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        // with width 0 the buffer is empty, so the chunk size is irrelevant
        self.cells.chunks(self.width.max(1))
    }

    /// Every cell paired with its position, in reading order.
    pub fn iter(&self) -> impl Iterator<Item = (Position, &T)> {
        let width = self.width.max(1);
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, cell)| (Position::new(i / width, i % width), cell))
    }

    /// Build a same-sized grid by transforming every cell.
    #[must_use]
    pub fn map<U, F: FnMut(&T) -> U>(&self, f: F) -> Grid<U> {
        Grid {
            width: self.width,
            height: self.height,
            cells: self.cells.iter().map(f).collect(),
        }
    }

    /// Copy the grid out as nested rows.
    #[must_use]
    pub fn to_rows(&self) -> Vec<Vec<T>>
    where
        T: Clone,
    {
        self.rows().map(<[T]>::to_vec).collect()
    }
}

impl<T: Copy + Into<Option<char>>> Grid<T> {
    /// Read the letters a placement covers.
    ///
    /// Returns `None` if any cell is off-grid or holds no letter.
    pub fn read<P: Placed + ?Sized>(&self, placement: &P) -> Option<String> {
        placement
            .cells()
            .into_iter()
            .map(|cell| cell.and_then(|pos| self.get(pos)).and_then(|&c| c.into()))
            .collect()
    }
}

/// Serialized as `height` rows of `width` cells.
impl<T: Serialize> Serialize for Grid<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.height))?;
        for row in self.rows() {
            seq.serialize_element(row)?;
        }
        seq.end()
    }
}
