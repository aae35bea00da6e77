/*
lib.rs

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

//! Word search puzzle engine.
//!
//! The [`generator`] module builds a letter grid that hides a list of target words.
//! The [`game`] module processes the player's picks and reports the found words.
//! The host (a user interface or the `wordhunt` command) displays the grid, keeps scores, and
//! saves progress.

pub mod config;
pub mod difficulty;
pub mod game;
pub mod generator;
pub mod normalize;
pub mod selection;
