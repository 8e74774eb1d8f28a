#![warn(missing_docs)]
//! A sudoku puzzle engine
//!
//! ## Overview
//!
//! The crate builds playable 9x9 sudokus and referees playing them. A
//! randomized backtracking search fills an empty grid, a carver then blanks
//! cells while the solver keeps confirming the rest still admits a
//! completion, until only the difficulty's clue count remains. The same
//! solver doubles as the deterministic [`Grid::solve`].
//!
//! Everything randomized exists in two flavors: a plain method using the
//! thread-local generator, and a `*_with` twin taking any [`rand::Rng`],
//! which makes runs reproducible from a seed.
//!
//! ## Example
//!
//! ```
//! use sudoku_engine::{Difficulty, Grid};
//!
//! let solution = Grid::generate_filled().unwrap();
//! let puzzle = solution.carve_puzzle(Difficulty::Normal).unwrap();
//!
//! assert_eq!(puzzle.n_clues(), 32);
//! assert!(puzzle.solution().is_some());
//!
//! println!("{}", puzzle);
//! println!("{}", puzzle.to_str_line());
//! ```
//!
//! For a full sitting, [`PuzzlePool`] stocks puzzles up front and [`Game`]
//! tracks one play session:
//!
//! ```
//! use sudoku_engine::{Difficulty, Game, PuzzleRecord};
//!
//! let record = PuzzleRecord::generate(Difficulty::Easy).unwrap();
//! let mut game = Game::new(record);
//!
//! let cell = sudoku_engine::Cell::new(0);
//! if !game.is_given(cell) {
//!     let revealed = game.hint(cell);
//!     assert!(revealed.is_some());
//! }
//! ```
mod board;
mod consts;
mod difficulty;
pub mod errors;
mod game;
mod generator;
mod pool;
mod solver;

pub use crate::board::{Cell, Digit, DigitSet, Grid};
pub use crate::difficulty::Difficulty;
pub use crate::errors::Error;
pub use crate::game::{Game, Placement, ENTRY_POINTS, UNIT_BONUS_POINTS};
pub use crate::pool::{PuzzlePool, PuzzleRecord};
