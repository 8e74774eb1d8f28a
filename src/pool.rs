//! Ready-made puzzle pools, grouped by difficulty.
//!
//! Generating and carving a puzzle takes a moment, so interactive callers
//! usually stock up in advance and hand out puzzles instantly. A
//! [`PuzzlePool`] holds a batch per difficulty tier and can be topped up one
//! puzzle at a time.

use rand::Rng;
use strum::IntoEnumIterator;

use crate::board::Grid;
use crate::difficulty::Difficulty;
use crate::errors::Error;

/// A carved puzzle bundled with the solution it came from.
///
/// Records are immutable snapshots straight out of the generation pipeline.
/// Play happens elsewhere, on a separate board (see [`Game`](crate::Game)),
/// so the givens and the answer key stay pristine for the whole session.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PuzzleRecord {
    puzzle: Grid,
    solution: Grid,
    difficulty: Difficulty,
}

impl PuzzleRecord {
    /// Generates a fresh board and carves it down to `difficulty`.
    pub fn generate(difficulty: Difficulty) -> Result<PuzzleRecord, Error> {
        Self::generate_with(difficulty, &mut rand::thread_rng())
    }

    /// Like [`generate`](Self::generate), but draws randomness from `rng`.
    pub fn generate_with<R: Rng>(difficulty: Difficulty, rng: &mut R) -> Result<PuzzleRecord, Error> {
        let solution = Grid::generate_filled_with(rng)?;
        let puzzle = solution.carve_puzzle_with(difficulty, rng)?;
        Ok(PuzzleRecord {
            puzzle,
            solution,
            difficulty,
        })
    }

    #[cfg(test)]
    pub(crate) fn from_parts(puzzle: Grid, solution: Grid, difficulty: Difficulty) -> PuzzleRecord {
        PuzzleRecord {
            puzzle,
            solution,
            difficulty,
        }
    }

    /// The carved puzzle. Filled cells are the givens.
    pub fn puzzle(&self) -> &Grid {
        &self.puzzle
    }

    /// The solved grid the puzzle was carved from.
    pub fn solution(&self) -> &Grid {
        &self.solution
    }

    /// The tier the puzzle was carved for.
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }
}

/// Pre-generated puzzles for every difficulty tier.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PuzzlePool {
    pools: [Vec<PuzzleRecord>; 3],
}

impl PuzzlePool {
    /// How many puzzles per tier [`build`](Self::build) stocks up.
    pub const DEFAULT_POOL_SIZE: usize = 5;

    /// Creates a pool with no puzzles in it.
    pub fn new() -> PuzzlePool {
        PuzzlePool::default()
    }

    /// Generates [`DEFAULT_POOL_SIZE`](Self::DEFAULT_POOL_SIZE) puzzles for
    /// every tier.
    pub fn build() -> Result<PuzzlePool, Error> {
        Self::build_with(Self::DEFAULT_POOL_SIZE, &mut rand::thread_rng())
    }

    /// Generates `per_tier` puzzles for every tier, drawing randomness from `rng`.
    pub fn build_with<R: Rng>(per_tier: usize, rng: &mut R) -> Result<PuzzlePool, Error> {
        let mut pool = PuzzlePool::new();
        for difficulty in Difficulty::iter() {
            for _ in 0..per_tier {
                pool.extend_tier_with(difficulty, rng)?;
            }
        }
        Ok(pool)
    }

    /// Generates one more puzzle for `difficulty`, stores and returns it.
    pub fn extend_tier(&mut self, difficulty: Difficulty) -> Result<PuzzleRecord, Error> {
        self.extend_tier_with(difficulty, &mut rand::thread_rng())
    }

    /// Like [`extend_tier`](Self::extend_tier), but draws randomness from `rng`.
    pub fn extend_tier_with<R: Rng>(
        &mut self,
        difficulty: Difficulty,
        rng: &mut R,
    ) -> Result<PuzzleRecord, Error> {
        let record = PuzzleRecord::generate_with(difficulty, rng)?;
        self.pools[difficulty.as_index()].push(record);
        Ok(record)
    }

    /// All stored puzzles of one tier, in generation order.
    pub fn tier(&self, difficulty: Difficulty) -> &[PuzzleRecord] {
        &self.pools[difficulty.as_index()]
    }

    /// Total number of stored puzzles across all tiers.
    pub fn len(&self) -> usize {
        self.pools.iter().map(Vec::len).sum()
    }

    /// Returns whether the pool holds no puzzles at all.
    pub fn is_empty(&self) -> bool {
        self.pools.iter().all(|pool| pool.is_empty())
    }
}
