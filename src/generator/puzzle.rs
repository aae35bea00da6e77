/*
puzzle.rs

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

//! Puzzle representation: the grid, the targets, and where the generator placed them.

use serde::{Deserialize, Serialize};

use super::grid::Grid;
use super::random_grid::{GeneratedGrid, GenerationReport, Placements, PuzzleConfig, RandomGrid};
use super::target::Target;

/// Immutable input of a game.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct Puzzle {
    /// Letter grid.
    pub grid: Grid,

    /// Words to find, in the order used for matching.
    pub targets: Vec<Target>,

    /// Cells of the placed words, used to reveal the solution.
    /// Empty for authored grids.
    pub placements: Placements,

    /// Generation statistics. Empty for authored grids.
    pub report: GenerationReport,
}

impl Puzzle {
    /// Generate a random grid for the given targets.
    pub fn generate(targets: Vec<Target>, config: &PuzzleConfig) -> Self {
        let GeneratedGrid {
            grid,
            placements,
            report,
        } = RandomGrid::new(config).generate(&targets);

        Self {
            grid,
            targets,
            placements,
            report,
        }
    }

    /// Create a puzzle from an authored grid.
    ///
    /// The grid is used as is. Because the location of the words is unknown, the solution
    /// cannot be revealed.
    pub fn authored(grid: Grid, targets: Vec<Target>) -> Self {
        Self {
            grid,
            targets,
            placements: Placements::new(),
            report: GenerationReport::default(),
        }
    }

    /// Whether the solution can be revealed.
    pub fn can_reveal(&self) -> bool {
        !self.placements.is_empty()
    }

    /// Return the targets that are present in the grid, as far as the generator knows.
    /// For authored grids, all the targets are returned.
    pub fn findable_targets(&self) -> Vec<&Target> {
        self.targets
            .iter()
            .filter(|t| !self.report.is_skipped(&t.id))
            .collect()
    }
}
