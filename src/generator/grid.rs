/*
grid.rs

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

//! Square grid of letters.
//!
//! A [`Grid`] is either built by the [`super::random_grid::RandomGrid`] generator or parsed from
//! rows of text for authored puzzles:
//!
//! ```text
//! CATXQ
//! ODOGP
//! WZRTM
//! LKEVB
//! YHJUS
//! ```
//!
//! Spaces inside the rows are ignored, and lowercase letters are converted to uppercase.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;
use std::str::FromStr;

use super::cell::Cell;

/// Grid of `size × size` uppercase letters, stored row by row.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(into = "Vec<String>", try_from = "Vec<String>")]
pub struct Grid {
    size: usize,
    letters: Vec<char>,
}

/// Type of errors when parsing an authored grid.
#[derive(Debug, PartialEq)]
pub enum GridParseError {
    /// The row (line number, starting at 1) does not have as many letters as there are rows.
    NotSquare { line: usize, len: usize, size: usize },

    /// The row (line number, starting at 1) contains a character that is not a letter.
    BadCharacter(usize, char),
}

impl fmt::Display for GridParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            GridParseError::NotSquare { line, len, size } => write!(
                f,
                "line {line}: {len} letters in the row, but the grid has {size} rows"
            ),
            GridParseError::BadCharacter(line, ch) => {
                write!(f, "line {line}: unexpected character {ch:?}")
            }
        }
    }
}

impl Error for GridParseError {}

impl Grid {
    /// Create a [`Grid`] object from the letters of a generated grid, row by row.
    ///
    /// # Panics
    ///
    /// Panics if the number of letters does not match the size, or if a letter is not
    /// alphabetic. Both cases are bugs in the generator.
    pub fn from_letters(size: usize, letters: Vec<char>) -> Self {
        assert_eq!(
            letters.len(),
            size * size,
            "Bug: {} letters for a grid of size {size}",
            letters.len()
        );
        if let Some(ch) = letters.iter().find(|ch| !ch.is_alphabetic()) {
            panic!("Bug: non-alphabetic letter {ch:?} in the generated grid");
        }
        Self { size, letters }
    }

    /// Parse an authored grid from its rows.
    ///
    /// Blank rows are skipped. An empty list of rows gives an empty grid (size 0).
    ///
    /// # Errors
    ///
    /// The method returns an error when a row contains a character that is not a letter, or
    /// when the grid is not square.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self, GridParseError> {
        let mut parsed: Vec<(usize, Vec<char>)> = Vec::with_capacity(rows.len());

        for (i, row) in rows.iter().enumerate() {
            let line: usize = i + 1;
            let mut letters: Vec<char> = Vec::new();

            for ch in row.as_ref().chars().filter(|ch| !ch.is_whitespace()) {
                if !ch.is_alphabetic() {
                    return Err(GridParseError::BadCharacter(line, ch));
                }
                let mut upper = ch.to_uppercase();
                match (upper.next(), upper.next()) {
                    (Some(u), None) => letters.push(u),
                    // Letters such as ß have no single-character uppercase form
                    _ => return Err(GridParseError::BadCharacter(line, ch)),
                }
            }
            if !letters.is_empty() {
                parsed.push((line, letters));
            }
        }

        let size: usize = parsed.len();
        let mut letters: Vec<char> = Vec::with_capacity(size * size);
        for (line, row) in parsed {
            if row.len() != size {
                return Err(GridParseError::NotSquare {
                    line,
                    len: row.len(),
                    size,
                });
            }
            letters.extend(row);
        }
        Ok(Self { size, letters })
    }

    /// Return the number of rows (and columns) of the grid.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether the grid has no cells.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Return the letter in the given cell, or None if the cell is outside the grid.
    pub fn letter(&self, cell: Cell) -> Option<char> {
        if cell.is_inside(self.size) {
            Some(self.letters[cell.row * self.size + cell.col])
        } else {
            None
        }
    }

    /// Return the letters read along the given cells. Cells outside the grid are skipped.
    pub fn letters_along(&self, cells: &[Cell]) -> String {
        cells.iter().filter_map(|c| self.letter(*c)).collect()
    }

    /// Return the grid as a list of rows.
    pub fn rows(&self) -> Vec<String> {
        if self.size == 0 {
            return Vec::new();
        }
        self.letters
            .chunks(self.size)
            .map(|row| row.iter().collect())
            .collect()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in self.rows() {
            writeln!(f, "{row}")?;
        }
        Ok(())
    }
}

impl FromStr for Grid {
    type Err = GridParseError;

    fn from_str(s: &str) -> Result<Grid, GridParseError> {
        let rows: Vec<&str> = s.lines().collect();
        Grid::from_rows(&rows)
    }
}

impl From<Grid> for Vec<String> {
    fn from(grid: Grid) -> Vec<String> {
        grid.rows()
    }
}

impl TryFrom<Vec<String>> for Grid {
    type Error = GridParseError;

    fn try_from(rows: Vec<String>) -> Result<Grid, GridParseError> {
        Grid::from_rows(&rows)
    }
}
