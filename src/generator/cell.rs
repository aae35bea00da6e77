/*
cell.rs

Copyright 2025 Hervé Quatremain

This file is part of Wordhunt.

Wordhunt is free software: you can redistribute it and/or modify it under the
terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Wordhunt is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Wordhunt. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Cell coordinates, directions, and straight lines in the grid.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;
use std::str::FromStr;
use strum_macros::FromRepr;

/// Number of orthogonal directions. In the [`Direction`] enum, the orthogonal directions come
/// first, so that `Direction::from_repr(0..N_ORTHOGONAL)` only returns orthogonal directions.
pub const N_ORTHOGONAL: usize = 4;

/// Number of directions, diagonals included.
pub const N_DIRECTIONS: usize = 8;

/// Position of a cell in the grid.
///
/// The canonical key of a cell is the `"row:col"` string returned by the [`fmt::Display`]
/// implementation. Cells are serialized as this key, so that maps indexed by cells, or lists
/// of cells, stay readable in JSON.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(into = "String", try_from = "String")]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

/// Type of errors when parsing a cell key.
#[derive(Debug, PartialEq)]
pub enum CellParseError {
    /// The key does not have the `row:col` format.
    MissingSeparator(String),

    /// The row or the column is not a positive integer.
    BadNumber(String),
}

impl fmt::Display for CellParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CellParseError::MissingSeparator(s) => write!(f, "{s}: expected \"row:col\""),
            CellParseError::BadNumber(s) => write!(f, "{s}: not a valid coordinate"),
        }
    }
}

impl Error for CellParseError {}

impl Cell {
    /// Create a [`Cell`] object.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Return the canonical `"row:col"` key of the cell.
    pub fn key(&self) -> String {
        self.to_string()
    }

    /// Whether the cell is inside a `size × size` grid.
    pub fn is_inside(&self, size: usize) -> bool {
        self.row < size && self.col < size
    }

    /// Return the cell that is `distance` steps away in the given direction, or None if that
    /// cell would be outside a `size × size` grid.
    pub fn step(&self, direction: Direction, distance: usize, size: usize) -> Option<Cell> {
        let (dr, dc) = direction.delta();
        let distance = isize::try_from(distance).ok()?;
        let row = (self.row as isize).checked_add(dr * distance)?;
        let col = (self.col as isize).checked_add(dc * distance)?;

        if row < 0 || col < 0 {
            return None;
        }
        let cell = Cell::new(row as usize, col as usize);
        cell.is_inside(size).then_some(cell)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}:{}", self.row, self.col)
    }
}

impl FromStr for Cell {
    type Err = CellParseError;

    fn from_str(s: &str) -> Result<Cell, CellParseError> {
        let Some((row, col)) = s.split_once(':') else {
            return Err(CellParseError::MissingSeparator(s.to_string()));
        };
        let row: usize = row
            .trim()
            .parse()
            .map_err(|_| CellParseError::BadNumber(s.to_string()))?;
        let col: usize = col
            .trim()
            .parse()
            .map_err(|_| CellParseError::BadNumber(s.to_string()))?;
        Ok(Cell::new(row, col))
    }
}

impl From<Cell> for String {
    fn from(cell: Cell) -> String {
        cell.key()
    }
}

impl TryFrom<String> for Cell {
    type Error = CellParseError;

    fn try_from(s: String) -> Result<Cell, CellParseError> {
        s.parse()
    }
}

/// Unit directions in the grid.
///
/// Rows grow downward (south) and columns grow to the right (east).
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash, FromRepr)]
#[repr(usize)]
pub enum Direction {
    East,
    South,
    West,
    North,
    SouthEast,
    SouthWest,
    NorthEast,
    NorthWest,
}

impl Direction {
    /// Return the (row, column) unit vector of the direction.
    pub fn delta(&self) -> (isize, isize) {
        match self {
            Direction::East => (0, 1),
            Direction::South => (1, 0),
            Direction::West => (0, -1),
            Direction::North => (-1, 0),
            Direction::SouthEast => (1, 1),
            Direction::SouthWest => (1, -1),
            Direction::NorthEast => (-1, 1),
            Direction::NorthWest => (-1, -1),
        }
    }

    /// Whether the direction is one of the four diagonals.
    pub fn is_diagonal(&self) -> bool {
        let (dr, dc) = self.delta();
        dr != 0 && dc != 0
    }

    /// Return the number of directions available for placing or selecting words.
    pub fn count(allow_diagonal: bool) -> usize {
        if allow_diagonal {
            N_DIRECTIONS
        } else {
            N_ORTHOGONAL
        }
    }

    /// Return the direction that goes from `start` toward `end`, or None if the two cells are
    /// not on the same row, column, or 45° diagonal (or if they are the same cell).
    pub fn between(start: Cell, end: Cell) -> Option<Direction> {
        let dr = end.row as isize - start.row as isize;
        let dc = end.col as isize - start.col as isize;

        if dr == 0 && dc == 0 {
            return None;
        }
        if dr != 0 && dc != 0 && dr.abs() != dc.abs() {
            return None;
        }
        (0..N_DIRECTIONS)
            .filter_map(Direction::from_repr)
            .find(|d| d.delta() == (dr.signum(), dc.signum()))
    }
}

/// Return the ordered list of cells from `start` to `end`, both included.
///
/// Return None if the segment is not horizontal, vertical, or (only when `allow_diagonal` is
/// set) an exact 45° diagonal. A segment reduced to a single cell is a line of one cell.
pub fn straight_line(start: Cell, end: Cell, allow_diagonal: bool) -> Option<Vec<Cell>> {
    if start == end {
        return Some(vec![start]);
    }
    let direction: Direction = Direction::between(start, end)?;
    if direction.is_diagonal() && !allow_diagonal {
        return None;
    }

    let len: usize = start.row.abs_diff(end.row).max(start.col.abs_diff(end.col)) + 1;
    let (dr, dc) = direction.delta();
    Some(
        (0..len as isize)
            .map(|i| {
                Cell::new(
                    (start.row as isize + dr * i) as usize,
                    (start.col as isize + dc * i) as usize,
                )
            })
            .collect(),
    )
}
