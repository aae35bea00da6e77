/*
difficulty.rs

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

//! Difficulty levels and the generation parameters they imply.

use clap::ValueEnum;
use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use std::fmt;
use strum_macros::FromRepr;

use crate::generator::random_grid::PuzzleConfig;
use crate::generator::target::Target;

/// Puzzle difficulty level.
#[derive(
    Serialize,
    Deserialize,
    Debug,
    Copy,
    Clone,
    PartialOrd,
    PartialEq,
    Eq,
    Hash,
    ValueEnum,
    FromRepr,
    Default,
)]
#[repr(i32)]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "Easy"),
            Difficulty::Medium => write!(f, "Medium"),
            Difficulty::Hard => write!(f, "Hard"),
        }
    }
}

impl Difficulty {
    /// Return the generation parameters for the difficulty level.
    pub fn config(&self) -> PuzzleConfig {
        let (size, allow_diagonal, allow_reverse) = match self {
            Difficulty::Easy => (8, false, false),
            Difficulty::Medium => (10, true, false),
            Difficulty::Hard => (12, true, true),
        };
        PuzzleConfig {
            size,
            allow_diagonal,
            allow_reverse,
            ..Default::default()
        }
    }

    /// Return the number of words to hide in the grid.
    pub fn word_count(&self) -> usize {
        match self {
            Difficulty::Easy => 6,
            Difficulty::Medium => 8,
            Difficulty::Hard => 10,
        }
    }

    /// Randomly choose the targets for a puzzle, up to `count` targets.
    /// Targets with words longer than `size` letters are not eligible.
    pub fn select_targets<R: Rng>(
        targets: &[Target],
        count: usize,
        size: usize,
        rng: &mut R,
    ) -> Vec<Target> {
        let mut eligible: Vec<Target> = targets
            .iter()
            .filter(|t| {
                t.primary_word()
                    .is_some_and(|w| !w.is_empty() && w.chars().count() <= size)
            })
            .cloned()
            .collect();
        eligible.shuffle(rng);
        eligible.truncate(count);
        eligible
    }
}
