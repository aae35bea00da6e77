/*
selection.rs

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

//! Manage the player's selection.
//!
//! The module stores the pending first pick and the words that the player found so far, with
//! the cells used for each of them.

use std::collections::{HashMap, HashSet};

use crate::generator::cell::Cell;

/// Selection state of a game.
#[derive(Debug, Clone, Default)]
pub struct Selection {
    /// First cell of the selection, waiting for the second pick.
    start: Option<Cell>,

    /// Cells of the found words, indexed by target ID.
    found: HashMap<String, Vec<Cell>>,

    /// Union of the cells of the found words.
    /// Instead of going through all the paths in [`Selection::found`], this
    /// [`std::collections::HashSet`] speeds up the lookup.
    locked: HashSet<Cell>,
}

impl Selection {
    /// Create a [`Selection`] object.
    pub fn new() -> Self {
        Self {
            start: None,
            found: HashMap::new(),
            locked: HashSet::new(),
        }
    }

    /// Reset the object.
    pub fn clear(&mut self) {
        self.start = None;
        self.found.clear();
        self.locked.clear();
    }

    /// Return the pending first cell of the selection.
    pub fn start(&self) -> Option<Cell> {
        self.start
    }

    /// Change the pending first cell of the selection.
    pub fn set_start(&mut self, cell: Option<Cell>) {
        self.start = cell;
    }

    /// Record a found word.
    pub fn add_found(&mut self, target_id: &str, cells: Vec<Cell>) {
        self.locked.extend(cells.iter().copied());
        self.found.insert(target_id.to_string(), cells);
    }

    /// Replace all the found words. The pending selection is dropped.
    pub fn replace_found(&mut self, found: HashMap<String, Vec<Cell>>) {
        self.start = None;
        self.locked = found.values().flatten().copied().collect();
        self.found = found;
    }

    /// Whether the given target has been found.
    pub fn is_found(&self, target_id: &str) -> bool {
        self.found.contains_key(target_id)
    }

    /// Return the cells of the found words, indexed by target ID.
    pub fn found(&self) -> &HashMap<String, Vec<Cell>> {
        &self.found
    }

    /// Return the number of found words.
    pub fn len(&self) -> usize {
        self.found.len()
    }

    /// Whether no word has been found yet.
    pub fn is_empty(&self) -> bool {
        self.found.is_empty()
    }

    /// Whether the cell belongs to a found word. A cell can belong to several words.
    pub fn is_locked(&self, cell: Cell) -> bool {
        self.locked.contains(&cell)
    }

    /// Return the cells that belong to at least one found word.
    pub fn locked_cells(&self) -> &HashSet<Cell> {
        &self.locked
    }
}
