use std::fmt;
use std::str::FromStr;

use rand::Rng;

use crate::board::{Cell, Digit, DigitSet};
use crate::consts::N_CELLS;
use crate::difficulty::Difficulty;
use crate::errors::{Error, FromBytesError, LineParseError};
use crate::{generator, solver};

/// The main structure exposing all the functionality of the library.
///
/// A `Grid` is a 9x9 sudoku board stored as 81 bytes in row-major order,
/// where `0` marks an empty cell and `1..=9` a digit. Nothing else about the
/// contents is guaranteed; a grid may be empty, partially filled, solved or
/// even contradictory. The generation and carving methods only ever produce
/// conflict-free grids.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct Grid(pub(crate) [u8; N_CELLS]);

impl Grid {
    /// Creates a grid of 81 empty cells.
    pub fn empty() -> Grid {
        Grid([0; N_CELLS])
    }

    /// Creates a grid from an array of cell values in row-major order,
    /// `0` marking empty cells.
    pub fn from_bytes(bytes: [u8; N_CELLS]) -> Result<Grid, FromBytesError> {
        match bytes.iter().all(|&num| num <= 9) {
            true => Ok(Grid(bytes)),
            false => Err(FromBytesError(())),
        }
    }

    /// Returns the cell values in row-major order, `0` marking empty cells.
    pub fn to_bytes(self) -> [u8; N_CELLS] {
        self.0
    }

    /// Returns the digit in `cell`, if any.
    pub fn get(&self, cell: Cell) -> Option<Digit> {
        Digit::new_checked(self.0[cell.as_index()])
    }

    /// Sets or clears `cell`.
    pub fn set(&mut self, cell: Cell, digit: Option<Digit>) {
        self.0[cell.as_index()] = digit.map_or(0, Digit::get);
    }

    /// Number of filled cells.
    pub fn n_clues(&self) -> u8 {
        self.0.iter().filter(|&&num| num != 0).count() as u8
    }

    /// Returns whether every cell is filled.
    pub fn is_filled(&self) -> bool {
        self.0.iter().all(|&num| num != 0)
    }

    /// Returns whether `digit` could be placed in `cell` without a direct
    /// conflict, i.e. whether the digit already occurs somewhere in the
    /// cell's row, column or box.
    ///
    /// The scan covers all 27 peers including the target cell itself, so a
    /// cell that already holds `digit` reports `false`. Empty cells never
    /// conflict. No look-ahead happens here; a placement can be valid and
    /// still lead into an unsolvable position.
    pub fn is_valid_placement(&self, cell: Cell, digit: Digit) -> bool {
        solver::is_valid_placement(self, cell.as_index(), digit.get())
    }

    /// Tries to complete the grid in place via depth-first search, visiting
    /// empty cells in row-major order and trying candidates in ascending
    /// order. Returns whether a completion was found.
    ///
    /// On success the grid is fully filled. On failure it is left exactly as
    /// it was, every tentative placement having been backtracked. `false` is
    /// the normal answer for contradictory inputs, not an error.
    ///
    /// Pre-existing conflicts between filled cells are not detected; only
    /// newly placed digits are checked. Use [`has_no_duplicates`](Self::has_no_duplicates)
    /// to vet untrusted grids first.
    pub fn solve(&mut self) -> bool {
        solver::solve(self)
    }

    /// Returns a solved copy of the grid, if it is solvable. The grid itself
    /// is not touched.
    pub fn solution(&self) -> Option<Grid> {
        let mut solution = *self;
        match solution.solve() {
            true => Some(solution),
            false => None,
        }
    }

    /// Generates a random, fully solved grid.
    ///
    /// Candidate digits are reshuffled at every empty cell during the search,
    /// so repeated calls produce different grids. Fails with
    /// [`Error::GenerationFailure`] if no valid grid is found within the
    /// attempt budget, which does not happen in practice.
    pub fn generate_filled() -> Result<Grid, Error> {
        generator::generate_filled(&mut rand::thread_rng())
    }

    /// Like [`generate_filled`](Self::generate_filled), but draws randomness
    /// from `rng`. A seeded generator reproduces the same grid.
    pub fn generate_filled_with<R: Rng>(rng: &mut R) -> Result<Grid, Error> {
        generator::generate_filled(rng)
    }

    /// Carves a puzzle out of this solved grid by blanking cells in random
    /// order until only the difficulty's clue count remains, keeping the
    /// puzzle solvable the whole way through.
    ///
    /// Every removal is vetted by the solver on a scratch copy; removals that
    /// would make the puzzle unsolvable are rolled back. Fails with
    /// [`Error::CarveFailure`] if the clue target cannot be reached with a
    /// solvable puzzle within the attempt budget, as happens when the input
    /// grid is not actually a valid solution.
    ///
    /// Solvability is the only criterion. Carved puzzles may have more than
    /// one completion, especially at low clue counts.
    pub fn carve_puzzle(&self, difficulty: Difficulty) -> Result<Grid, Error> {
        generator::carve(self, difficulty, &mut rand::thread_rng())
    }

    /// Like [`carve_puzzle`](Self::carve_puzzle), but draws randomness from `rng`.
    pub fn carve_puzzle_with<R: Rng>(&self, difficulty: Difficulty, rng: &mut R) -> Result<Grid, Error> {
        generator::carve(self, difficulty, rng)
    }

    /// Returns whether no row, column or box contains the same digit twice.
    /// Empty cells are ignored, so a sparse puzzle passes.
    pub fn has_no_duplicates(&self) -> bool {
        let rows = (0..9).all(|row| no_repeats((0..9).map(|col| self.0[row * 9 + col])));
        let cols = (0..9).all(|col| no_repeats((0..9).map(|row| self.0[row * 9 + col])));
        let blocks = (0..9).all(|block| {
            let origin = block / 3 * 27 + block % 3 * 3;
            no_repeats((0..9).map(|i| self.0[origin + i / 3 * 9 + i % 3]))
        });
        rows && cols && blocks
    }

    /// Returns whether the grid is completely and correctly solved, i.e.
    /// every cell is filled and every row, column and box holds each digit
    /// exactly once.
    pub fn is_solved_grid(&self) -> bool {
        self.is_filled() && self.has_no_duplicates()
    }

    /// Reads a grid from a string of 81 cell characters in row-major order.
    /// Digits stand for themselves, `'0'`, `'.'` and `'_'` for empty cells.
    ///
    /// ```
    /// use sudoku_engine::Grid;
    ///
    /// let line = "..3.2.6..9..3.5..1..18.64....81.29..7.......8..67.82....26.95..8..2.3..9..5.1.3..";
    /// let grid = Grid::from_str_line(line).unwrap();
    /// assert_eq!(grid.n_clues(), 32);
    /// ```
    pub fn from_str_line(s: &str) -> Result<Grid, LineParseError> {
        let mut grid = [0; N_CELLS];
        let mut n_cells = 0;
        for ch in s.chars() {
            let num = match ch {
                '1'..='9' => ch as u8 - b'0',
                '0' | '.' | '_' => 0,
                _ => return Err(LineParseError::InvalidEntry { cell: n_cells as u8, ch }),
            };
            if n_cells == N_CELLS {
                return Err(LineParseError::TooManyCells);
            }
            grid[n_cells] = num;
            n_cells += 1;
        }
        if n_cells < N_CELLS {
            return Err(LineParseError::NotEnoughCells(n_cells as u8));
        }
        Ok(Grid(grid))
    }

    /// Writes the grid as a line of 81 characters, `'.'` marking empty cells.
    pub fn to_str_line(&self) -> String {
        self.0
            .iter()
            .map(|&num| match num {
                0 => '.',
                num => (b'0' + num) as char,
            })
            .collect()
    }
}

// row/col/box sweep helper, empty cells never count as repeats
fn no_repeats(values: impl Iterator<Item = u8>) -> bool {
    let mut seen = DigitSet::NONE;
    for num in values {
        if let Some(digit) = Digit::new_checked(num) {
            if seen.contains(digit) {
                return false;
            }
            seen.insert(digit);
        }
    }
    true
}

impl FromStr for Grid {
    type Err = LineParseError;

    fn from_str(s: &str) -> Result<Grid, LineParseError> {
        Grid::from_str_line(s)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, &num) in self.0.iter().enumerate() {
            match (idx / 9, idx % 9) {
                (0, 0) => (),
                (3, 0) | (6, 0) => f.write_str("\n\n")?, // separate bands
                (_, 0) => f.write_str("\n")?,
                (_, 3) | (_, 6) => f.write_str(" ")?, // separate stacks
                _ => (),
            }
            match num {
                0 => f.write_str("_")?,
                num => write!(f, "{}", num)?,
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Grid({})", self.to_str_line())
    }
}

// Serde can't derive on an 81 element array. Human-readable formats get the
// line form, binary formats the raw cell bytes.
#[cfg(feature = "serde")]
mod serde_impls {
    use std::fmt;

    use serde::de::{self, SeqAccess, Visitor};
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use super::{Grid, N_CELLS};

    impl Serialize for Grid {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            if serializer.is_human_readable() {
                serializer.serialize_str(&self.to_str_line())
            } else {
                serializer.serialize_bytes(&self.0)
            }
        }
    }

    impl<'de> Deserialize<'de> for Grid {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Grid, D::Error> {
            if deserializer.is_human_readable() {
                deserializer.deserialize_str(LineVisitor)
            } else {
                deserializer.deserialize_bytes(ByteVisitor)
            }
        }
    }

    struct LineVisitor;

    impl<'de> Visitor<'de> for LineVisitor {
        type Value = Grid;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a line of 81 cell characters")
        }

        fn visit_str<E: de::Error>(self, line: &str) -> Result<Grid, E> {
            Grid::from_str_line(line).map_err(de::Error::custom)
        }
    }

    struct ByteVisitor;

    impl<'de> Visitor<'de> for ByteVisitor {
        type Value = Grid;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("81 cell values")
        }

        fn visit_bytes<E: de::Error>(self, bytes: &[u8]) -> Result<Grid, E> {
            let bytes: [u8; N_CELLS] = bytes
                .try_into()
                .map_err(|_| E::invalid_length(bytes.len(), &self))?;
            Grid::from_bytes(bytes).map_err(de::Error::custom)
        }

        fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Grid, A::Error> {
            let mut bytes = [0; N_CELLS];
            for (cell, num) in bytes.iter_mut().enumerate() {
                *num = seq
                    .next_element()?
                    .ok_or_else(|| de::Error::invalid_length(cell, &self))?;
            }
            Grid::from_bytes(bytes).map_err(de::Error::custom)
        }
    }
}
