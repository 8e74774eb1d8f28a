//! Types for cells, digits and other things on a sudoku board
mod cell;
mod digit;
mod digit_set;
mod grid;

#[rustfmt::skip]
pub use self::{
    grid::Grid,
    cell::Cell,
    digit::Digit,
    digit_set::DigitSet,
};
