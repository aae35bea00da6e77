/*
random_grid.rs

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

//! Generate a random grid that contains the target words.
//!
//! Words are placed one after the other, in the order of the target list.
//! For each word, the generator tries random directions and random anchor cells, up to
//! [`PuzzleConfig::retry_budget`] times.
//! A word can cross another word only where both words use the same letter.
//! A word that cannot be placed is skipped: the generator never fails, but the
//! [`GenerationReport`] lists the skipped targets.
//! The remaining empty cells are filled with random letters from the alphabet.

use log::{Level, debug, log_enabled};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::Instant;

use super::cell::{Cell, Direction};
use super::grid::Grid;
use super::target::Target;
use crate::config::{DEFAULT_ALPHABET, DEFAULT_SIZE, MAX_SIZE, MIN_SIZE, RETRY_BUDGET};
use crate::normalize::normalize;

/// Cells used by each placed word, indexed by target ID.
///
/// The cells are listed in the order the letters were written, so that reading them from the
/// grid gives the word, or its reversal when the generator reversed the word.
pub type Placements = HashMap<String, Vec<Cell>>;

/// Generation parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct PuzzleConfig {
    /// Number of rows and columns. Clamped between [`MIN_SIZE`] and [`MAX_SIZE`].
    pub size: usize,

    /// Whether words can be placed, and selected, along the diagonals.
    pub allow_diagonal: bool,

    /// Whether words can be written backward, and selected from their last letter.
    pub allow_reverse: bool,

    /// Letters used to fill the cells that no word covers.
    pub alphabet: String,

    /// Number of placement attempts per word.
    pub retry_budget: usize,

    /// Seed for the random generator. Two grids generated with the same seed and the same
    /// parameters are identical. If not set, a random seed is used.
    pub seed: Option<u64>,
}

impl Default for PuzzleConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            allow_diagonal: false,
            allow_reverse: false,
            alphabet: DEFAULT_ALPHABET.to_string(),
            retry_budget: RETRY_BUDGET,
            seed: None,
        }
    }
}

impl PuzzleConfig {
    /// Return the grid size, clamped into the supported range.
    pub fn clamped_size(&self) -> usize {
        self.size.clamp(MIN_SIZE, MAX_SIZE)
    }

    /// Return the normalized letters of the alphabet.
    /// An alphabet without any letter is replaced by the default alphabet.
    pub fn alphabet_letters(&self) -> Vec<char> {
        let letters: Vec<char> = normalize(&self.alphabet)
            .chars()
            .filter(|ch| ch.is_alphabetic())
            .collect();
        if letters.is_empty() {
            DEFAULT_ALPHABET.chars().collect()
        } else {
            letters
        }
    }
}

/// Reason why a target is not in the grid.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The word is longer than the grid size.
    TooLong,

    /// The target has no spelling, or its spelling includes characters that are not letters.
    NoLetters,

    /// The retry budget is exhausted.
    NoRoom,
}

/// A target that the generator did not place.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SkippedTarget {
    pub id: String,
    pub reason: SkipReason,
}

/// Statistics about the last generated grid.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct GenerationReport {
    /// Targets that are not in the grid, in the order of the target list.
    pub skipped: Vec<SkippedTarget>,

    /// Total number of placement attempts for all the words.
    pub attempts: usize,

    /// Duration in seconds it took to generate the grid.
    pub duration: f32,
}

impl GenerationReport {
    /// Whether the given target was skipped.
    pub fn is_skipped(&self, target_id: &str) -> bool {
        self.skipped.iter().any(|s| s.id == target_id)
    }
}

/// Result of [`RandomGrid::generate`].
#[derive(Debug, Clone)]
pub struct GeneratedGrid {
    pub grid: Grid,
    pub placements: Placements,
    pub report: GenerationReport,
}

/// [`RandomGrid`] object.
pub struct RandomGrid {
    /// Generation parameters.
    config: PuzzleConfig,

    /// Grid size after clamping.
    size: usize,

    /// Letters used to fill the empty cells.
    alphabet: Vec<char>,

    /// Random generator. Seeded from [`PuzzleConfig::seed`] when provided.
    rng: StdRng,
}

impl RandomGrid {
    /// Create the object.
    pub fn new(config: &PuzzleConfig) -> Self {
        let rng: StdRng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_rng(&mut rand::rng()),
        };
        Self {
            config: config.clone(),
            size: config.clamped_size(),
            alphabet: config.alphabet_letters(),
            rng,
        }
    }

    /// Generate a grid that contains the words of the given targets.
    ///
    /// Calling the method several times on the same object produces different grids, because
    /// the random generator is not reseeded.
    pub fn generate(&mut self, targets: &[Target]) -> GeneratedGrid {
        let start: Instant = Instant::now();
        let mut cells: Vec<Option<char>> = vec![None; self.size * self.size];
        let mut placements: Placements = HashMap::with_capacity(targets.len());
        let mut report: GenerationReport = GenerationReport::default();

        debug!(
            "Generating a {0}x{0} grid for {1} words (diagonal = {2}, reverse = {3})",
            self.size,
            targets.len(),
            self.config.allow_diagonal,
            self.config.allow_reverse
        );

        for target in targets {
            let word: Vec<char> = match target.primary_word() {
                Some(w) if !w.is_empty() && w.chars().all(char::is_alphabetic) => {
                    w.chars().collect()
                }
                _ => {
                    debug!("Skipping {}: no letters to place", target.id);
                    report.skipped.push(SkippedTarget {
                        id: target.id.clone(),
                        reason: SkipReason::NoLetters,
                    });
                    continue;
                }
            };

            if word.len() > self.size {
                debug!(
                    "Skipping {}: {} letters for a grid of size {}",
                    target.id,
                    word.len(),
                    self.size
                );
                report.skipped.push(SkippedTarget {
                    id: target.id.clone(),
                    reason: SkipReason::TooLong,
                });
                continue;
            }

            match self.place_word(&mut cells, word, &mut report.attempts) {
                Some(path) => {
                    debug!(
                        "Placed {} from {} to {}",
                        target.id,
                        path[0],
                        path[path.len() - 1]
                    );
                    placements.insert(target.id.clone(), path);
                }
                None => {
                    debug!(
                        "Skipping {}: no room after {} attempts",
                        target.id, self.config.retry_budget
                    );
                    report.skipped.push(SkippedTarget {
                        id: target.id.clone(),
                        reason: SkipReason::NoRoom,
                    });
                }
            }
        }

        // Fill the remaining cells with random letters
        let letters: Vec<char> = cells
            .into_iter()
            .map(|ch| match ch {
                Some(ch) => ch,
                None => self.alphabet[self.rng.random_range(0..self.alphabet.len())],
            })
            .collect();
        let grid: Grid = Grid::from_letters(self.size, letters);

        report.duration = start.elapsed().as_secs_f32();
        debug!(
            "Placed {} of {} words  Attempts = {}  Duration = {}",
            placements.len(),
            targets.len(),
            report.attempts,
            report.duration
        );
        if log_enabled!(Level::Debug) {
            for row in grid.rows() {
                debug!("    {row}");
            }
        }

        GeneratedGrid {
            grid,
            placements,
            report,
        }
    }

    /// Try to write the word in the grid and return the cells it uses.
    ///
    /// Return None when the retry budget is exhausted. In that case, the grid is unchanged.
    fn place_word(
        &mut self,
        cells: &mut [Option<char>],
        mut word: Vec<char>,
        attempts: &mut usize,
    ) -> Option<Vec<Cell>> {
        // The word is not always reversed, even when reversal is allowed
        if self.config.allow_reverse && self.rng.random_bool(0.5) {
            word.reverse();
        }

        let num_directions: usize = Direction::count(self.config.allow_diagonal);

        for _ in 0..self.config.retry_budget {
            *attempts += 1;

            let Some(direction) = Direction::from_repr(self.rng.random_range(0..num_directions))
            else {
                continue;
            };
            let anchor: Cell = Cell::new(
                self.rng.random_range(0..self.size),
                self.rng.random_range(0..self.size),
            );

            if let Some(path) = self.fits(cells, anchor, direction, &word) {
                for (cell, ch) in path.iter().zip(&word) {
                    cells[cell.row * self.size + cell.col] = Some(*ch);
                }
                return Some(path);
            }
        }
        None
    }

    /// Return the cells that the word would use from the anchor cell in the given direction, or
    /// None if the word goes outside the grid or conflicts with a letter already in place.
    fn fits(
        &self,
        cells: &[Option<char>],
        anchor: Cell,
        direction: Direction,
        word: &[char],
    ) -> Option<Vec<Cell>> {
        let mut path: Vec<Cell> = Vec::with_capacity(word.len());

        for (i, ch) in word.iter().enumerate() {
            let cell: Cell = anchor.step(direction, i, self.size)?;
            match cells[cell.row * self.size + cell.col] {
                Some(existing) if existing != *ch => return None,
                _ => path.push(cell),
            }
        }
        Some(path)
    }
}
