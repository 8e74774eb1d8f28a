use crate::consts::N_CELLS;

/// A cell position on the board, numbered `0..=80` in row-major order.
#[derive(Copy, Clone, Eq, PartialEq, PartialOrd, Ord, Debug, Hash)]
pub struct Cell(u8);

impl Cell {
    /// Constructs a new `Cell`.
    ///
    /// # Panic
    /// Panics, if `index` is not in the range of `0..81`.
    pub fn new(index: u8) -> Self {
        Self::new_checked(index).unwrap()
    }

    /// Constructs a new `Cell`. Returns `None`, if `index` is not in the range of `0..81`.
    pub fn new_checked(index: u8) -> Option<Self> {
        if index as usize >= N_CELLS {
            return None;
        }
        Some(Cell(index))
    }

    /// Constructs the cell at `row`, `col`.
    ///
    /// # Panic
    /// Panics, if `row` or `col` is not in the range of `0..9`.
    pub fn from_row_col(row: u8, col: u8) -> Self {
        assert!(row < 9 && col < 9);
        Cell(row * 9 + col)
    }

    /// Returns an iterator over all 81 cells in row-major order.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..N_CELLS as u8).map(Cell)
    }

    /// Returns the cell number contained within.
    pub fn get(self) -> u8 {
        self.0
    }

    /// Returns the cell number as a `usize` for indexing.
    pub fn as_index(self) -> usize {
        self.0 as usize
    }

    /// Row index from `0..=8`, topmost row is `0`.
    #[inline]
    pub fn row(self) -> u8 {
        self.0 / 9
    }

    /// Column index from `0..=8`, leftmost column is `0`.
    #[inline]
    pub fn col(self) -> u8 {
        self.0 % 9
    }

    /// Box index from `0..=8`, numbered left to right, top to bottom.
    #[inline]
    pub fn block(self) -> u8 {
        self.row() / 3 * 3 + self.col() / 3
    }
}
