//! Random board generation and puzzle carving.
//!
//! Generation is done via randomized solving of an empty grid: the ordinary
//! backtracking solver runs with a shuffled candidate order, so the first
//! completion it stumbles into is a uniform-feeling random board. Carving
//! then blanks random cells one by one, keeping every intermediate puzzle
//! solvable, until only the requested clues remain.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::board::Grid;
use crate::consts::N_CELLS;
use crate::difficulty::Difficulty;
use crate::errors::Error;
use crate::solver::{fill, solve, Shuffled};

/// Retry budget shared by generation and carving. A fresh random seed per
/// round makes repeated failure vanishingly unlikely on valid inputs.
pub(crate) const MAX_ATTEMPTS: usize = 10;

pub(crate) fn generate_filled<R: Rng>(rng: &mut R) -> Result<Grid, Error> {
    for _ in 0..MAX_ATTEMPTS {
        let mut grid = Grid::empty();
        // the duplicate sweep is a safety net, the search can't produce clashes
        if fill(&mut grid, &mut Shuffled(rng)) && grid.has_no_duplicates() {
            return Ok(grid);
        }
    }
    Err(Error::GenerationFailure)
}

pub(crate) fn carve<R: Rng>(
    solution: &Grid,
    difficulty: Difficulty,
    rng: &mut R,
) -> Result<Grid, Error> {
    let n_clues = usize::from(difficulty.clue_count());
    let mut cells: Vec<usize> = (0..N_CELLS).collect();

    for _ in 0..MAX_ATTEMPTS {
        let mut puzzle = *solution;
        let mut to_remove = N_CELLS - n_clues;
        cells.shuffle(rng);

        for &cell in &cells {
            if to_remove == 0 {
                break;
            }
            let backup = puzzle.0[cell];
            puzzle.0[cell] = 0;

            // feasibility oracle on a scratch copy, roll back if the
            // remaining clues no longer admit a completion
            let mut probe = puzzle;
            if solve(&mut probe) {
                to_remove -= 1;
            } else {
                puzzle.0[cell] = backup;
            }
        }

        let mut probe = puzzle;
        if to_remove == 0 && solve(&mut probe) {
            return Ok(puzzle);
        }
    }
    Err(Error::CarveFailure)
}
