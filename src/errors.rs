//! Errors reported by generation, carving and parsing.

#[cfg(doc)]
use crate::Grid;

use crate::generator::MAX_ATTEMPTS;

/// Error for the randomized generation pipeline.
///
/// Both generation and carving retry a bounded number of times before giving
/// up. An unsolvable but well-formed grid is not an error anywhere in this
/// crate; the solver reports it as an ordinary `false`.
#[derive(Copy, Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum Error {
    /// No valid full grid came out of the randomized search within the
    /// attempt budget.
    #[error("full board generation failed {} times in a row", MAX_ATTEMPTS)]
    GenerationFailure,
    /// Carving never reached the difficulty's clue count with a solvable
    /// puzzle within the attempt budget. The usual cause is an input grid
    /// that is not actually a valid solution.
    #[error("puzzle carving failed {} times in a row", MAX_ATTEMPTS)]
    CarveFailure,
}

/// Error for [`Grid::from_bytes`]
#[derive(Debug, thiserror::Error)]
#[error("byte array contains entries >9")]
pub struct FromBytesError(pub(crate) ());

/// Error for [`Grid::from_str_line`]
#[derive(Copy, Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum LineParseError {
    /// Accepted cell characters are `1..=9` for digits and `0`, `.` or `_`
    /// for empty cells.
    #[error("cell {cell} contains invalid character '{ch}'")]
    InvalidEntry {
        /// Cell number of the invalid entry, counted in row-major order.
        cell: u8,
        /// The offending character.
        ch: char,
    },
    /// Line contains less than 81 cells.
    #[error("line contains {0} cells instead of 81")]
    NotEnoughCells(u8),
    /// Line contains more than 81 cells.
    #[error("line contains more than 81 cells")]
    TooManyCells,
}
