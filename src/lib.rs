//! # Shisen-Sho Solver Library
//!
//! This library provides the board-logic engine for the Shisen-Sho tile-matching
//! puzzle: a grid of paired tiles where two equal tiles may be removed when a path
//! of at most three straight segments joins them without crossing another tile.
//!
//! It is used by three binaries:
//! - `human_player`: Allows interactive gameplay via the command line.
//! - `ai_solver`: Reads a board from a text file and prints a clearing sequence.
//! - `generation_evaluator`: Measures how many attempts playable-board generation takes.
//!
//! ## Modules
//! - `engine`: The symbol catalog, tiles, positions, the `Board` type, board
//!   generation and the pure mutators (`remove_pair`, `is_cleared`, `shuffle_remaining`).
//! - `connect`: The connectivity oracle (`Board::can_connect`).
//! - `moves`: Move discovery (`Board::find_any_move`, `Board::find_all_moves`).
//! - `solver`: The memoized solvability oracle and generate-until-solvable loop.
//! - `game`: Session state with score, move counter, hints, shuffles and undo.
//! - `config`: TOML-backed game configuration.
//! - `utils`: Parsing boards from text.
//! - `error`: Error types for the engine, parsing and configuration.
//! - `logging`: Opt-in diagnostic output used by the binaries' `--verbose` flag.

pub mod config;
pub mod connect;
pub mod engine;
pub mod error;
pub mod game;
pub mod logging;
pub mod moves;
pub mod solver;
pub mod utils;
