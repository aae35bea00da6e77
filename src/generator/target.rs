/*
target.rs

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

//! Words to find in the grid.

use serde::{Deserialize, Serialize};

use crate::normalize::normalize;

/// A word the player must locate in the grid.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Target {
    /// Unique identifier of the target in the puzzle.
    pub id: String,

    /// Acceptable spellings. The first spelling is the one written in the grid.
    pub words: Vec<String>,

    /// Text displayed in the list of words to find. Not used for matching.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    /// Meaning or translation of the word. Not used for matching.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meaning: Option<String>,
}

impl Target {
    /// Create a [`Target`] object with a single spelling.
    pub fn new(id: &str, word: &str) -> Self {
        Self {
            id: id.to_string(),
            words: vec![word.to_string()],
            label: None,
            meaning: None,
        }
    }

    /// Create a [`Target`] object with several acceptable spellings.
    pub fn with_spellings(id: &str, words: &[&str]) -> Self {
        Self {
            id: id.to_string(),
            words: words.iter().map(|w| w.to_string()).collect(),
            label: None,
            meaning: None,
        }
    }

    /// Return the normalized word that the generator writes in the grid, or None if the target
    /// has no spelling.
    pub fn primary_word(&self) -> Option<String> {
        self.words.first().map(|w| normalize(w))
    }

    /// Return the normalized acceptable spellings. Spellings that are empty after normalization
    /// are dropped.
    pub fn spellings(&self) -> Vec<String> {
        self.words
            .iter()
            .map(|w| normalize(w))
            .filter(|w| !w.is_empty())
            .collect()
    }

    /// Return the text to display for the target: the label, or the first spelling.
    pub fn display_label(&self) -> &str {
        match (&self.label, self.words.first()) {
            (Some(label), _) => label,
            (None, Some(word)) => word,
            (None, None) => &self.id,
        }
    }
}
