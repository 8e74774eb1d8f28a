//! Size constants of the 9x9 board.

pub(crate) const N_DIGITS: usize = 9;
pub(crate) const N_CELLS: usize = 81;
