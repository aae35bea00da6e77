/*
game.rs

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

//! Manage the status of a game in progress.
//!
//! The player selects a word with two picks: the first letter and the last letter (or the
//! other way around when reversal is allowed).
//! The letters between the two cells are compared with the words that are not found yet.
//!
//! A [`Game`] object is bound to one [`Puzzle`].
//! Providing another puzzle with [`Game::set_puzzle`] resets the whole state.
//!
//! The game does not keep scores. It queues [`GameEvent`] objects that the host retrieves with
//! [`Game::take_events`] to update the display and the scoreboard.

use log::debug;
use std::collections::{HashMap, HashSet};
use std::time::Instant;

use crate::generator::cell::{Cell, straight_line};
use crate::generator::grid::Grid;
use crate::generator::puzzle::Puzzle;
use crate::generator::random_grid::PuzzleConfig;
use crate::generator::target::Target;
use crate::normalize::{normalize, reversed};
use crate::selection::Selection;

/// Outcome of a pick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionResult {
    /// The cell is the first cell of a new selection.
    AwaitingSecondPick,

    /// The pending selection has been cancelled, by picking the same cell twice or by picking
    /// a cell outside the grid.
    Cleared,

    /// The two cells are not on a straight line. The second cell starts a new selection.
    RejectedNotStraightLine { new_start: Cell },

    /// The selected letters do not match any word left to find.
    NoMatch,

    /// The selected letters match the given target.
    Matched { target_id: String, cells: Vec<Cell> },
}

/// Notifications for the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// A word has been found.
    Progress { found: usize, total: usize },

    /// All the words have been found.
    /// `scoring` is false when the player revealed the solution before the end of the game.
    Completed { scoring: bool },

    /// The selection does not match any word.
    Wrong,

    /// The player revealed the solution. This is not a win.
    Revealed { found: usize, total: usize },
}

/// Manage the status of the game in progress.
#[derive(Debug)]
pub struct Game {
    /// Puzzle details.
    puzzle: Puzzle,

    /// Whether words can be selected along the diagonals.
    allow_diagonal: bool,

    /// Whether words can be selected from their last letter.
    allow_reverse: bool,

    /// Pending pick and found words.
    selection: Selection,

    /// Events not yet retrieved by the host.
    events: Vec<GameEvent>,

    /// Whether the player revealed the solution. In this case the game is not added to the
    /// score board.
    pub user_has_cheated: bool,

    /// Whether all the words have been found.
    pub solved: bool,

    /// Time when the game started. Used to compute game duration.
    start_time: Instant,
}

impl Game {
    /// Create a [`Game`] object for the given puzzle.
    pub fn new(puzzle: Puzzle, allow_diagonal: bool, allow_reverse: bool) -> Self {
        debug!(
            "New game: {} targets on a {1}x{1} grid",
            puzzle.targets.len(),
            puzzle.grid.size()
        );
        Self {
            puzzle,
            allow_diagonal,
            allow_reverse,
            selection: Selection::new(),
            events: Vec::new(),
            user_has_cheated: false,
            solved: false,
            start_time: Instant::now(),
        }
    }

    /// Generate a puzzle and create a [`Game`] object that follows the same rules.
    pub fn generate(targets: Vec<Target>, config: &PuzzleConfig) -> Self {
        Self::new(
            Puzzle::generate(targets, config),
            config.allow_diagonal,
            config.allow_reverse,
        )
    }

    /// Provide another [`Puzzle`] object. The selection, the found words, and the pending
    /// events of the previous puzzle are discarded.
    pub fn set_puzzle(&mut self, puzzle: Puzzle) {
        *self = Self::new(puzzle, self.allow_diagonal, self.allow_reverse);
    }

    /// Restart the game with the same puzzle.
    pub fn reset(&mut self) {
        self.selection.clear();
        self.events.clear();
        self.user_has_cheated = false;
        self.solved = false;
        self.start_time = Instant::now();
    }

    /// Return the puzzle being played.
    pub fn puzzle(&self) -> &Puzzle {
        &self.puzzle
    }

    /// Return the letter grid.
    pub fn grid(&self) -> &Grid {
        &self.puzzle.grid
    }

    /// Return the words to find.
    pub fn targets(&self) -> &[Target] {
        &self.puzzle.targets
    }

    /// Return the words that the player has not found yet, in the target order.
    pub fn unfound_targets(&self) -> Vec<&Target> {
        self.puzzle
            .targets
            .iter()
            .filter(|t| !self.selection.is_found(&t.id))
            .collect()
    }

    pub fn allow_diagonal(&self) -> bool {
        self.allow_diagonal
    }

    pub fn allow_reverse(&self) -> bool {
        self.allow_reverse
    }

    /// Return the first cell of the pending selection.
    pub fn pending_start(&self) -> Option<Cell> {
        self.selection.start()
    }

    /// Return the number of words to find.
    pub fn total(&self) -> usize {
        self.puzzle.targets.len()
    }

    /// Return the number of words found.
    pub fn found_count(&self) -> usize {
        self.selection.len()
    }

    /// Whether the given target has been found.
    pub fn is_found(&self, target_id: &str) -> bool {
        self.selection.is_found(target_id)
    }

    /// Return the cells of the found words, indexed by target ID.
    pub fn found(&self) -> &HashMap<String, Vec<Cell>> {
        self.selection.found()
    }

    /// Whether the cell belongs to a found word.
    pub fn is_locked(&self, cell: Cell) -> bool {
        self.selection.is_locked(cell)
    }

    /// Return the cells that belong to the found words.
    pub fn locked_cells(&self) -> &HashSet<Cell> {
        self.selection.locked_cells()
    }

    /// Return and clear the pending events.
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Process a cell that the player picked.
    pub fn pick(&mut self, cell: Cell) -> SelectionResult {
        if !cell.is_inside(self.puzzle.grid.size()) {
            debug!("Pick {cell} outside the grid: selection cleared");
            self.selection.set_start(None);
            return SelectionResult::Cleared;
        }

        let Some(start) = self.selection.start() else {
            self.selection.set_start(Some(cell));
            return SelectionResult::AwaitingSecondPick;
        };

        if start == cell {
            self.selection.set_start(None);
            return SelectionResult::Cleared;
        }

        let Some(path) = straight_line(start, cell, self.allow_diagonal) else {
            debug!("{start} and {cell} are not on a line: new selection from {cell}");
            self.selection.set_start(Some(cell));
            return SelectionResult::RejectedNotStraightLine { new_start: cell };
        };
        self.selection.set_start(None);

        let word: String = normalize(&self.puzzle.grid.letters_along(&path));
        let Some(target_id) = self.match_word(&word) else {
            debug!("No match for {word} from {start} to {cell}");
            self.events.push(GameEvent::Wrong);
            return SelectionResult::NoMatch;
        };

        debug!("Found {target_id} ({word}) from {start} to {cell}");
        self.selection.add_found(&target_id, path.clone());

        let found: usize = self.found_count();
        let total: usize = self.total();
        self.events.push(GameEvent::Progress { found, total });
        if found == total {
            self.solved = true;
            self.events.push(GameEvent::Completed {
                scoring: !self.user_has_cheated,
            });
        }

        SelectionResult::Matched {
            target_id,
            cells: path,
        }
    }

    /// Return the ID of the first target, not found yet, that has a spelling matching the
    /// given normalized word.
    fn match_word(&self, word: &str) -> Option<String> {
        self.puzzle
            .targets
            .iter()
            .filter(|t| !self.selection.is_found(&t.id))
            .find(|t| {
                t.spellings().iter().any(|spelling| {
                    spelling == word || (self.allow_reverse && reversed(spelling) == word)
                })
            })
            .map(|t| t.id.clone())
    }

    /// Reveal the solution: the found words are replaced by the words placed by the generator.
    ///
    /// Revealing is a hint, not a win: the game is flagged as cheated and no
    /// [`GameEvent::Completed`] event is emitted.
    /// Return None, and leave the game untouched, when the puzzle is already solved or when the
    /// location of the words is unknown (authored grids).
    pub fn reveal(&mut self) -> Option<&HashMap<String, Vec<Cell>>> {
        if self.solved {
            debug!("Puzzle already solved: nothing to reveal");
            return None;
        }
        if !self.puzzle.can_reveal() {
            debug!("No placements for this puzzle: nothing to reveal");
            return None;
        }
        self.selection.replace_found(self.puzzle.placements.clone());
        self.user_has_cheated = true;
        debug!(
            "Solution revealed: {} of {} words",
            self.found_count(),
            self.total()
        );
        self.events.push(GameEvent::Revealed {
            found: self.found_count(),
            total: self.total(),
        });
        Some(self.selection.found())
    }

    /// Return the game duration in hours, minutes, and seconds
    pub fn get_duration_hms(&self) -> (u64, u64, u64) {
        let duration: u64 = self.start_time.elapsed().as_secs();
        (
            duration / 3600,
            (duration % 3600) / 60,
            (duration % 3600) % 60,
        )
    }
}

#[cfg(test)]
mod test {
    use super::*;

    // CAT on the first row, DOG on the fourth row, COW on the diagonal from the top left corner
    const GRID: &str = "CATQZ\nQOQQZ\nQQWQZ\nDOGQZ\nQQQQZ";

    fn authored_game(targets: Vec<Target>, allow_diagonal: bool, allow_reverse: bool) -> Game {
        let grid: Grid = GRID.parse().unwrap();
        Game::new(
            Puzzle::authored(grid, targets),
            allow_diagonal,
            allow_reverse,
        )
    }

    fn animals() -> Vec<Target> {
        vec![
            Target::new("cat", "cat"),
            Target::new("dog", "dog"),
            Target::new("cow", "cow"),
        ]
    }

    // Same grid, with the placements of CAT and DOG known
    fn placed_game() -> Game {
        let puzzle = Puzzle {
            grid: GRID.parse().unwrap(),
            targets: vec![Target::new("cat", "cat"), Target::new("dog", "dog")],
            placements: HashMap::from([
                (
                    "cat".to_string(),
                    vec![Cell::new(0, 0), Cell::new(0, 1), Cell::new(0, 2)],
                ),
                (
                    "dog".to_string(),
                    vec![Cell::new(3, 0), Cell::new(3, 1), Cell::new(3, 2)],
                ),
            ]),
            report: Default::default(),
        };
        Game::new(puzzle, false, false)
    }

    fn select(game: &mut Game, start: Cell, end: Cell) -> SelectionResult {
        assert_eq!(game.pick(start), SelectionResult::AwaitingSecondPick);
        game.pick(end)
    }

    #[test]
    fn single_word_puzzle() {
        let config = PuzzleConfig {
            size: 8,
            allow_diagonal: false,
            allow_reverse: true,
            seed: Some(2025),
            ..Default::default()
        };

        for forward in [true, false] {
            let mut game = Game::generate(vec![Target::new("t1", "CAT")], &config);
            let path = game.puzzle().placements["t1"].clone();
            let read = game.grid().letters_along(&path);
            assert!(read == "CAT" || read == "TAC");
            assert!(path.iter().all(|c| c.row == path[0].row) || path.iter().all(|c| c.col == path[0].col));

            let (start, end) = if forward {
                (path[0], path[2])
            } else {
                (path[2], path[0])
            };
            assert!(matches!(
                select(&mut game, start, end),
                SelectionResult::Matched { target_id, .. } if target_id == "t1"
            ));
            assert_eq!(
                game.take_events(),
                vec![
                    GameEvent::Progress { found: 1, total: 1 },
                    GameEvent::Completed { scoring: true },
                ]
            );
            assert!(game.solved);
        }
    }

    #[test]
    fn not_a_straight_line() {
        let mut game = authored_game(animals(), false, true);

        assert_eq!(
            select(&mut game, Cell::new(0, 0), Cell::new(1, 2)),
            SelectionResult::RejectedNotStraightLine {
                new_start: Cell::new(1, 2)
            }
        );
        assert_eq!(game.pending_start(), Some(Cell::new(1, 2)));
        assert!(game.found().is_empty());
        assert!(game.take_events().is_empty());

        // The rejected pick is the start of the next selection
        assert_eq!(game.pick(Cell::new(1, 4)), SelectionResult::NoMatch);
    }

    #[test]
    fn diagonal_policy() {
        let mut game = authored_game(animals(), false, false);
        assert_eq!(
            select(&mut game, Cell::new(0, 0), Cell::new(2, 2)),
            SelectionResult::RejectedNotStraightLine {
                new_start: Cell::new(2, 2)
            }
        );

        let mut game = authored_game(animals(), true, false);
        assert_eq!(
            select(&mut game, Cell::new(0, 0), Cell::new(2, 2)),
            SelectionResult::Matched {
                target_id: "cow".to_string(),
                cells: vec![Cell::new(0, 0), Cell::new(1, 1), Cell::new(2, 2)]
            }
        );
    }

    #[test]
    fn reverse_policy() {
        let mut game = authored_game(animals(), false, false);
        assert_eq!(
            select(&mut game, Cell::new(0, 2), Cell::new(0, 0)),
            SelectionResult::NoMatch
        );
        assert_eq!(game.take_events(), vec![GameEvent::Wrong]);
        assert_eq!(game.pending_start(), None);

        let mut game = authored_game(animals(), false, true);
        assert_eq!(
            select(&mut game, Cell::new(0, 2), Cell::new(0, 0)),
            SelectionResult::Matched {
                target_id: "cat".to_string(),
                cells: vec![Cell::new(0, 2), Cell::new(0, 1), Cell::new(0, 0)]
            }
        );
    }

    #[test]
    fn both_directions_match_the_same_target() {
        for (start, end) in [
            (Cell::new(3, 0), Cell::new(3, 2)),
            (Cell::new(3, 2), Cell::new(3, 0)),
        ] {
            let mut game = authored_game(animals(), true, true);
            assert!(matches!(
                select(&mut game, start, end),
                SelectionResult::Matched { target_id, .. } if target_id == "dog"
            ));
        }
    }

    #[test]
    fn same_cell_twice_cancels() {
        let mut game = authored_game(animals(), true, true);

        assert_eq!(
            select(&mut game, Cell::new(2, 2), Cell::new(2, 2)),
            SelectionResult::Cleared
        );
        assert_eq!(game.pending_start(), None);
        assert!(game.take_events().is_empty());
    }

    #[test]
    fn pick_outside_the_grid() {
        let mut game = authored_game(animals(), true, true);

        game.pick(Cell::new(0, 0));
        assert_eq!(game.pick(Cell::new(0, 9)), SelectionResult::Cleared);
        assert_eq!(game.pending_start(), None);
    }

    #[test]
    fn found_word_is_not_matched_again() {
        let mut game = authored_game(animals(), false, true);

        select(&mut game, Cell::new(0, 0), Cell::new(0, 2));
        game.take_events();
        let found = game.found().clone();

        assert_eq!(
            select(&mut game, Cell::new(0, 2), Cell::new(0, 0)),
            SelectionResult::NoMatch
        );
        assert_eq!(game.found(), &found);
        assert_eq!(game.take_events(), vec![GameEvent::Wrong]);
    }

    #[test]
    fn duplicate_spellings_go_to_the_first_unfound_target() {
        let targets = vec![Target::new("a1", "CAT"), Target::new("a2", "cat")];
        let mut game = authored_game(targets, false, false);

        assert!(matches!(
            select(&mut game, Cell::new(0, 0), Cell::new(0, 2)),
            SelectionResult::Matched { target_id, .. } if target_id == "a1"
        ));
        assert!(matches!(
            select(&mut game, Cell::new(0, 0), Cell::new(0, 2)),
            SelectionResult::Matched { target_id, .. } if target_id == "a2"
        ));
        assert!(game.solved);
    }

    #[test]
    fn alternate_spellings() {
        let targets = vec![Target::with_spellings("pet", &["feline", "c-a-t"])];
        let mut game = authored_game(targets, false, false);

        assert!(matches!(
            select(&mut game, Cell::new(0, 0), Cell::new(0, 2)),
            SelectionResult::Matched { target_id, .. } if target_id == "pet"
        ));
    }

    #[test]
    fn completion_is_emitted_once_in_any_order() {
        let mut game = authored_game(animals(), true, true);

        select(&mut game, Cell::new(3, 2), Cell::new(3, 0));
        select(&mut game, Cell::new(2, 2), Cell::new(0, 0));
        assert!(!game.solved);
        select(&mut game, Cell::new(0, 0), Cell::new(0, 2));
        select(&mut game, Cell::new(0, 0), Cell::new(0, 2));

        let events = game.take_events();
        assert_eq!(
            events
                .iter()
                .filter(|e| matches!(e, GameEvent::Completed { .. }))
                .count(),
            1
        );
        assert_eq!(
            events,
            vec![
                GameEvent::Progress { found: 1, total: 3 },
                GameEvent::Progress { found: 2, total: 3 },
                GameEvent::Progress { found: 3, total: 3 },
                GameEvent::Completed { scoring: true },
                GameEvent::Wrong,
            ]
        );
        assert!(game.solved);
        assert!(!game.user_has_cheated);
    }

    #[test]
    fn overlapping_words_share_cells() {
        let mut game = authored_game(animals(), true, true);

        select(&mut game, Cell::new(0, 0), Cell::new(0, 2));
        select(&mut game, Cell::new(0, 0), Cell::new(2, 2));

        assert_eq!(game.locked_cells().len(), 5);
        assert!(game.is_locked(Cell::new(0, 0)));
    }

    #[test]
    fn reveal_replaces_found_words_with_placements() {
        let config = PuzzleConfig {
            size: 10,
            allow_diagonal: true,
            allow_reverse: true,
            seed: Some(7),
            ..Default::default()
        };
        let mut game = Game::generate(
            vec![
                Target::new("t1", "cat"),
                Target::new("t2", "dog"),
                Target::new("t3", "owl"),
            ],
            &config,
        );
        let placements = game.puzzle().placements.clone();
        assert_eq!(placements.len(), 3);

        for id in ["t1", "t2"] {
            let path = &placements[id];
            select(&mut game, path[0], path[path.len() - 1]);
        }
        assert_eq!(game.found_count(), 2);
        game.take_events();

        game.pick(Cell::new(0, 0));
        let revealed = game.reveal().unwrap().clone();

        assert_eq!(revealed, placements);
        assert_eq!(game.found(), &placements);
        assert_eq!(game.pending_start(), None);
        assert!(game.user_has_cheated);
        assert!(!game.solved);
        assert_eq!(
            game.take_events(),
            vec![GameEvent::Revealed { found: 3, total: 3 }]
        );
    }

    #[test]
    fn completion_after_reveal_does_not_score() {
        let mut game = placed_game();
        game.puzzle.placements.remove("dog");

        assert_eq!(game.reveal().map(|found| found.len()), Some(1));
        assert_eq!(
            select(&mut game, Cell::new(3, 0), Cell::new(3, 2)),
            SelectionResult::Matched {
                target_id: "dog".to_string(),
                cells: vec![Cell::new(3, 0), Cell::new(3, 1), Cell::new(3, 2)],
            }
        );
        assert!(game.solved);
        assert_eq!(
            game.take_events(),
            vec![
                GameEvent::Revealed { found: 1, total: 2 },
                GameEvent::Progress { found: 2, total: 2 },
                GameEvent::Completed { scoring: false },
            ]
        );
    }

    #[test]
    fn reveal_keeps_progress_on_authored_grids() {
        let mut game = authored_game(animals(), true, true);

        select(&mut game, Cell::new(0, 0), Cell::new(0, 2));
        game.pick(Cell::new(3, 0));
        game.take_events();

        assert!(!game.puzzle().can_reveal());
        assert_eq!(game.reveal(), None);
        assert_eq!(game.found_count(), 1);
        assert!(game.is_locked(Cell::new(0, 1)));
        assert_eq!(game.pending_start(), Some(Cell::new(3, 0)));
        assert!(!game.user_has_cheated);

        assert_eq!(game.pick(Cell::new(3, 0)), SelectionResult::Cleared);
        assert_eq!(
            select(&mut game, Cell::new(0, 0), Cell::new(0, 2)),
            SelectionResult::NoMatch
        );
        assert_eq!(game.found_count(), 1);
        assert_eq!(game.take_events(), vec![GameEvent::Wrong]);
    }

    #[test]
    fn reveal_after_solving_does_nothing() {
        let mut game = placed_game();

        select(&mut game, Cell::new(0, 0), Cell::new(0, 2));
        select(&mut game, Cell::new(3, 0), Cell::new(3, 2));
        assert!(game.solved);
        game.take_events();

        assert_eq!(game.reveal(), None);
        assert!(!game.user_has_cheated);
        assert!(game.take_events().is_empty());
        assert_eq!(game.found_count(), 2);
    }

    #[test]
    fn new_puzzle_resets_the_state() {
        let mut game = placed_game();

        select(&mut game, Cell::new(0, 0), Cell::new(0, 2));
        game.reveal();
        assert!(game.user_has_cheated);
        game.pick(Cell::new(4, 4));

        game.set_puzzle(Puzzle::authored(
            "AB\nCD".parse().unwrap(),
            vec![Target::new("ab", "ab")],
        ));

        assert_eq!(game.pending_start(), None);
        assert!(game.found().is_empty());
        assert!(game.locked_cells().is_empty());
        assert!(game.take_events().is_empty());
        assert!(!game.user_has_cheated);
        assert!(!game.allow_diagonal() && !game.allow_reverse());
        assert_eq!(game.total(), 1);
    }

    #[test]
    fn reset_keeps_the_puzzle() {
        let mut game = authored_game(animals(), true, true);

        select(&mut game, Cell::new(0, 0), Cell::new(0, 2));
        game.reset();

        assert_eq!(game.found_count(), 0);
        assert_eq!(game.unfound_targets().len(), 3);
        assert_eq!(game.grid().size(), 5);
    }

    #[test]
    fn degenerate_puzzles() {
        let mut game = authored_game(Vec::new(), true, true);
        assert_eq!(
            select(&mut game, Cell::new(0, 0), Cell::new(0, 2)),
            SelectionResult::NoMatch
        );
        assert!(!game.solved);

        let mut game = Game::new(
            Puzzle::authored(Grid::default(), animals()),
            true,
            true,
        );
        assert_eq!(game.pick(Cell::new(0, 0)), SelectionResult::Cleared);
        assert_eq!(game.pending_start(), None);
    }
}
