/*
generator.rs

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

//! Build the letter grid of a puzzle.
//!
//! [`target::Target`] objects are the words to find.
//! A [`puzzle::Puzzle`] groups the targets with a [`grid::Grid`] and the location of each word
//! in the grid.
//!
//! There are two ways to get a puzzle:
//!
//! * Generate a random grid with [`puzzle::Puzzle::generate`].
//!   The generation parameters are grouped in a [`random_grid::PuzzleConfig`] object, and the
//!   work is done by a [`random_grid::RandomGrid`] object.
//!   Words that cannot be placed are skipped and listed in the
//!   [`random_grid::GenerationReport`].
//!
//! * Parse an authored grid with [`grid::Grid::from_rows`] and create the puzzle with
//!   [`puzzle::Puzzle::authored`].
//!   The location of the words is unknown in that case, and the solution cannot be revealed.
//!
//! The [`cell`] module provides the coordinates and the straight-line geometry shared with the
//! selection engine in [`crate::game`].

pub mod cell;
pub mod grid;
pub mod puzzle;
pub mod random_grid;
pub mod target;
