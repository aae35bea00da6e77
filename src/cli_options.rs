/*
cli_options.rs

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

//! Process command-line options.
//!
//! In command-line mode, Wordhunt generates a grid for a list of words and prints it, either as
//! text or as JSON. With `--play`, the player selects words by typing the coordinates of the
//! first and last letters.
//!
//! # Examples
//!
//! Generate a grid for three words, with a fixed seed:
//!
//! ```text
//! $ wordhunt --seed 12 -f easy cat dog owl
//! ```
//!
//! Print the puzzle, with the location of the words, in JSON format:
//!
//! ```text
//! $ wordhunt --json -t animals.json
//! ```
//!
//! Play with an authored grid:
//!
//! ```text
//! $ wordhunt --play -g grid.txt -t animals.json
//! ```

use clap::Parser;
use log::{debug, info, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::env;
use std::error::Error;
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use wordhunt::config::COPYRIGHT_NOTICE;
use wordhunt::difficulty::Difficulty;
use wordhunt::game::{Game, GameEvent, SelectionResult};
use wordhunt::generator::cell::Cell;
use wordhunt::generator::grid::Grid;
use wordhunt::generator::puzzle::Puzzle;
use wordhunt::generator::random_grid::PuzzleConfig;
use wordhunt::generator::target::Target;

/// Words used when none are provided on the command line.
const SAMPLE_WORDS: [&str; 12] = [
    "cat", "dog", "horse", "rabbit", "mouse", "goat", "sheep", "duck", "owl", "fox", "bear",
    "tiger",
];

/// Build and play word search puzzles.
#[derive(Parser)]
#[command(about, long_about = None, version, long_version = COPYRIGHT_NOTICE)]
struct Args {
    /// Words to hide in the grid
    words: Vec<String>,

    /// JSON file with the list of targets to hide in the grid
    #[arg(short, long, conflicts_with = "words")]
    targets: Option<PathBuf>,

    /// Text file with an authored grid, one row per line
    #[arg(short, long)]
    grid: Option<PathBuf>,

    /// Difficulty level for the puzzle
    #[arg(value_enum, short = 'f', long, default_value_t = Difficulty::Medium)]
    difficulty: Difficulty,

    /// Grid size, instead of the size for the difficulty level
    #[arg(short, long)]
    size: Option<usize>,

    /// Maximum number of words, instead of the number for the difficulty level
    #[arg(short = 'n', long)]
    count: Option<usize>,

    /// Allow words along the diagonals
    #[arg(long, default_value_t = false, overrides_with = "no_diagonal")]
    diagonal: bool,

    /// Forbid words along the diagonals
    #[arg(long, default_value_t = false, overrides_with = "diagonal")]
    no_diagonal: bool,

    /// Allow words written backward
    #[arg(long, default_value_t = false, overrides_with = "no_reverse")]
    reverse: bool,

    /// Forbid words written backward
    #[arg(long, default_value_t = false, overrides_with = "reverse")]
    no_reverse: bool,

    /// Letters used to fill the grid
    #[arg(short, long)]
    alphabet: Option<String>,

    /// Seed for the random generator
    #[arg(long)]
    seed: Option<u64>,

    /// Print the puzzle in JSON format
    #[arg(short, long, default_value_t = false, conflicts_with = "play")]
    json: bool,

    /// Play the puzzle in the terminal
    #[arg(short, long, default_value_t = false)]
    play: bool,

    /// Print some statistics after generating the grid
    #[arg(long, default_value_t = false)]
    summary: bool,

    /// Enable debug messages
    #[arg(short, long, default_value_t = false)]
    debug: bool,
}

/// Read the targets from a JSON file.
fn load_targets(path: &Path) -> Result<Vec<Target>, Box<dyn Error>> {
    let file = fs::File::open(path)?;
    let targets: Vec<Target> = serde_json::from_reader(io::BufReader::new(file))?;
    Ok(targets)
}

/// Read an authored grid from a text file.
fn load_grid(path: &Path) -> Result<Grid, Box<dyn Error>> {
    let text: String = fs::read_to_string(path)?;
    Ok(text.parse()?)
}

/// Build the generation parameters from the difficulty level and the options.
fn build_config(args: &Args) -> PuzzleConfig {
    let mut config: PuzzleConfig = args.difficulty.config();

    if let Some(size) = args.size {
        config.size = size;
    }
    if args.diagonal || args.no_diagonal {
        config.allow_diagonal = args.diagonal;
    }
    if args.reverse || args.no_reverse {
        config.allow_reverse = args.reverse;
    }
    if let Some(alphabet) = &args.alphabet {
        config.alphabet = alphabet.clone();
    }
    config.seed = args.seed;
    config
}

/// Build the puzzle from the options.
fn build_puzzle(args: &Args, config: &PuzzleConfig) -> Result<Puzzle, Box<dyn Error>> {
    let mut targets: Vec<Target> = match &args.targets {
        Some(path) => load_targets(path)?,
        None => {
            let words: Vec<String> = if args.words.is_empty() {
                SAMPLE_WORDS.iter().map(|w| w.to_string()).collect()
            } else {
                args.words.clone()
            };
            words
                .iter()
                .enumerate()
                .map(|(i, w)| Target::new(&format!("w{}", i + 1), w))
                .collect()
        }
    };

    if let Some(path) = &args.grid {
        let grid: Grid = load_grid(path)?;
        info!("Authored grid of size {}", grid.size());
        return Ok(Puzzle::authored(grid, targets));
    }

    let count: usize = args.count.unwrap_or(args.difficulty.word_count());
    if targets.len() > count {
        let mut rng: StdRng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_rng(&mut rand::rng()),
        };
        targets = Difficulty::select_targets(&targets, count, config.clamped_size(), &mut rng);
        debug!("Selected {} targets", targets.len());
    }
    Ok(Puzzle::generate(targets, config))
}

/// Print the grid with the row and column numbers.
/// The letters of the found words are printed in lowercase, and the pending pick is marked
/// with `>`.
fn print_grid(game: &Game) {
    let grid: &Grid = game.grid();

    print!("    ");
    for col in 0..grid.size() {
        print!("{col:>3}");
    }
    println!();
    for row in 0..grid.size() {
        print!("{row:>3} ");
        for col in 0..grid.size() {
            let cell: Cell = Cell::new(row, col);
            let Some(letter) = grid.letter(cell) else {
                continue;
            };
            let letter: String = if game.is_locked(cell) {
                letter.to_lowercase().collect()
            } else {
                letter.to_string()
            };
            if game.pending_start() == Some(cell) {
                print!(" >{letter}");
            } else {
                print!("  {letter}");
            }
        }
        println!();
    }
}

/// Print the list of words, found and not found.
fn print_targets(game: &Game) {
    for target in game.targets() {
        let mark: &str = if game.is_found(&target.id) { "x" } else { " " };
        match &target.meaning {
            Some(meaning) => println!("  [{mark}] {} ({meaning})", target.display_label()),
            None => println!("  [{mark}] {}", target.display_label()),
        }
    }
}

/// Parse a pick typed by the player: "row col", "row,col", or "row:col".
fn parse_pick(line: &str) -> Option<Cell> {
    let normalized: String = line.trim().replace([' ', ','], ":");
    let mut parts = normalized.split(':').filter(|p| !p.is_empty());
    let row: usize = parts.next()?.parse().ok()?;
    let col: usize = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some(Cell::new(row, col))
}

/// Print the events queued by the game. Return true when the game is over.
fn report_events(game: &mut Game) -> bool {
    let mut over: bool = false;

    for event in game.take_events() {
        match event {
            GameEvent::Progress { found, total } => println!("Found {found}/{total}"),
            GameEvent::Wrong => println!("No match"),
            GameEvent::Revealed { found, total } => {
                println!("Solution revealed ({found} of {total} words)");
                over = true;
            }
            GameEvent::Completed { scoring: true } => {
                let (h, m, s) = game.get_duration_hms();
                println!("All the words found in {h:02}:{m:02}:{s:02}");
                over = true;
            }
            GameEvent::Completed { scoring: false } => {
                println!("All the words found (not scored)");
                over = true;
            }
        }
    }
    over
}

/// Interactive game loop.
fn play(mut game: Game) -> io::Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print_grid(&game);
        print_targets(&game);
        print!("pick (row col), reveal, or quit> ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            return Ok(());
        };
        let line: String = line?;

        match line.trim() {
            "" => continue,
            "q" | "quit" => return Ok(()),
            "reveal" => {
                if game.reveal().is_none() {
                    println!("The solution is unknown for this grid");
                    continue;
                }
            }
            input => match parse_pick(input) {
                Some(cell) => match game.pick(cell) {
                    SelectionResult::RejectedNotStraightLine { new_start } => {
                        println!("Not a line: new selection from {new_start}");
                    }
                    result => debug!("{result:?}"),
                },
                None => {
                    println!("Cannot understand {input:?}");
                    continue;
                }
            },
        }

        if report_events(&mut game) {
            print_grid(&game);
            print_targets(&game);
            return Ok(());
        }
    }
}

/// Print the generation statistics.
fn print_summary(puzzle: &Puzzle) {
    println!(
        "
             size = {}
            words = {}
   findable words = {}
     placed words = {}
    skipped words = {}
         attempts = {}
             time = {}s",
        puzzle.grid.size(),
        puzzle.targets.len(),
        puzzle.findable_targets().len(),
        puzzle.placements.len(),
        puzzle.report.skipped.len(),
        puzzle.report.attempts,
        puzzle.report.duration
    );
}

/// Parse and process command-line options. Return the exit code.
pub fn parse() -> u8 {
    let args: Args = Args::parse();

    if args.debug {
        unsafe {
            env::set_var("RUST_LOG", "debug");
        }
    }
    env_logger::init();

    let config: PuzzleConfig = build_config(&args);
    let puzzle: Puzzle = match build_puzzle(&args, &config) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("Error: {e}");
            return 1;
        }
    };

    for skipped in &puzzle.report.skipped {
        warn!("{} is not in the grid: {:?}", skipped.id, skipped.reason);
    }

    if args.json {
        match serde_json::to_string_pretty(&puzzle) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("Error: {e}");
                return 1;
            }
        }
    } else if !args.play {
        print!("{}", puzzle.grid);
        println!();
        for target in &puzzle.targets {
            println!("{}", target.display_label());
        }
    }

    if args.summary {
        print_summary(&puzzle);
    }

    if args.play {
        let game: Game = Game::new(puzzle, config.allow_diagonal, config.allow_reverse);
        if let Err(e) = play(game) {
            eprintln!("Error: {e}");
            return 1;
        }
    }
    0
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn picks() {
        assert_eq!(parse_pick("3 4"), Some(Cell::new(3, 4)));
        assert_eq!(parse_pick(" 3,4 "), Some(Cell::new(3, 4)));
        assert_eq!(parse_pick("3:4"), Some(Cell::new(3, 4)));
        assert_eq!(parse_pick("3  4"), Some(Cell::new(3, 4)));
        assert_eq!(parse_pick("3"), None);
        assert_eq!(parse_pick("3 4 5"), None);
        assert_eq!(parse_pick("a b"), None);
    }

    #[test]
    fn options_override_the_difficulty() {
        let args = Args::parse_from([
            "wordhunt", "-f", "easy", "--size", "14", "--reverse", "--seed", "4", "cat",
        ]);
        let config = build_config(&args);

        assert_eq!(config.size, 14);
        assert!(!config.allow_diagonal);
        assert!(config.allow_reverse);
        assert_eq!(config.seed, Some(4));
    }

    #[test]
    fn options_turn_off_the_difficulty_rules() {
        let args = Args::parse_from(["wordhunt", "-f", "hard", "--no-diagonal", "cat"]);
        let config = build_config(&args);
        assert!(!config.allow_diagonal);
        assert!(config.allow_reverse);

        let args = Args::parse_from(["wordhunt", "-f", "hard", "--no-reverse", "--reverse"]);
        assert!(build_config(&args).allow_reverse);

        let args = Args::parse_from(["wordhunt", "-f", "medium", "--reverse", "--no-reverse"]);
        let config = build_config(&args);
        assert!(config.allow_diagonal);
        assert!(!config.allow_reverse);
    }

    #[test]
    fn summary_applies_to_play_mode() {
        let args = Args::parse_from(["wordhunt", "--play", "--summary", "--seed", "4", "cat"]);
        assert!(args.play && args.summary);
        let puzzle = build_puzzle(&args, &build_config(&args)).unwrap();
        assert_eq!(puzzle.findable_targets().len(), 1);
    }

    #[test]
    fn words_from_the_command_line() {
        let args = Args::parse_from(["wordhunt", "--seed", "4", "cat", "dog"]);
        let puzzle = build_puzzle(&args, &build_config(&args)).unwrap();

        assert_eq!(puzzle.targets.len(), 2);
        assert_eq!(puzzle.targets[1], Target::new("w2", "dog"));
    }

    #[test]
    fn sample_words_are_limited_by_difficulty() {
        let args = Args::parse_from(["wordhunt", "-f", "easy", "--seed", "4"]);
        let puzzle = build_puzzle(&args, &build_config(&args)).unwrap();

        assert_eq!(puzzle.targets.len(), Difficulty::Easy.word_count());
    }
}
