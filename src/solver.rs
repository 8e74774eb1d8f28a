//! Backtracking search over partially filled grids.
//!
//! The solver is a plain chronological backtracker: it walks the empty cells
//! in row-major order, tries candidate digits against the row/column/box
//! constraints and unwinds on dead ends. No candidate propagation, no
//! heuristics. Deliberately so, because the same search doubles as the
//! full-board generator when the candidate order is shuffled, and as the
//! feasibility oracle during carving.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::board::Grid;
use crate::consts::{N_CELLS, N_DIGITS};

/// How a search node orders the nine candidate digits before trying them.
///
/// This is the only difference between deterministic solving and random
/// board generation.
pub(crate) trait CandidateOrder {
    fn arrange(&mut self, digits: &mut [u8; N_DIGITS]);
}

/// Natural `1..=9` order. Keeps `solve` deterministic.
pub(crate) struct Ascending;

impl CandidateOrder for Ascending {
    fn arrange(&mut self, _: &mut [u8; N_DIGITS]) {}
}

/// A fresh shuffle at every empty cell, so completions of the same grid
/// differ from run to run.
pub(crate) struct Shuffled<'a, R: Rng>(pub(crate) &'a mut R);

impl<R: Rng> CandidateOrder for Shuffled<'_, R> {
    fn arrange(&mut self, digits: &mut [u8; N_DIGITS]) {
        digits.shuffle(self.0);
    }
}

// Scans the full row, column and box of the target cell, the target itself
// included. A cell already holding `num` therefore conflicts with it.
pub(crate) fn is_valid_placement(grid: &Grid, cell: usize, num: u8) -> bool {
    let (row, col) = (cell / 9, cell % 9);
    for i in 0..9 {
        if grid.0[row * 9 + i] == num || grid.0[i * 9 + col] == num {
            return false;
        }
    }
    let (band, stack) = (row / 3 * 3, col / 3 * 3);
    for r in band..band + 3 {
        for c in stack..stack + 3 {
            if grid.0[r * 9 + c] == num {
                return false;
            }
        }
    }
    true
}

/// Completes `grid` in place if possible. On failure the grid is restored to
/// its state before the call.
pub(crate) fn fill(grid: &mut Grid, order: &mut impl CandidateOrder) -> bool {
    fill_from(grid, 0, order)
}

pub(crate) fn solve(grid: &mut Grid) -> bool {
    fill(grid, &mut Ascending)
}

// Every cell before `first_unchecked` is known to be filled, so the scan for
// the next empty cell can skip them.
fn fill_from(grid: &mut Grid, first_unchecked: usize, order: &mut impl CandidateOrder) -> bool {
    let cell = match (first_unchecked..N_CELLS).find(|&cell| grid.0[cell] == 0) {
        Some(cell) => cell,
        None => return true,
    };

    let mut digits = [1, 2, 3, 4, 5, 6, 7, 8, 9];
    order.arrange(&mut digits);

    for &num in &digits {
        if is_valid_placement(grid, cell, num) {
            grid.0[cell] = num;
            if fill_from(grid, cell + 1, order) {
                return true;
            }
            grid.0[cell] = 0;
        }
    }

    false
}
