use std::num::NonZeroU8;

/// A digit from `1..=9`, the only values a filled cell can hold.
///
/// Empty cells are represented as `Option<Digit>` (or `0` in the raw byte
/// forms), never as a digit of their own.
#[derive(Copy, Clone, Eq, PartialEq, PartialOrd, Ord, Debug, Hash)]
pub struct Digit(NonZeroU8);

impl Digit {
    /// Constructs a new `Digit`.
    ///
    /// # Panic
    /// Panics, if `digit` is not in the range of `1..=9`.
    pub fn new(digit: u8) -> Self {
        Self::new_checked(digit).unwrap()
    }

    /// Constructs a new `Digit`. Returns `None`, if `digit` is not in the range of `1..=9`.
    pub fn new_checked(digit: u8) -> Option<Self> {
        match digit {
            1..=9 => NonZeroU8::new(digit).map(Digit),
            _ => None,
        }
    }

    /// Returns an iterator over all nine digits in ascending order.
    pub fn all() -> impl Iterator<Item = Self> {
        (1..=9).map(Digit::new)
    }

    /// Returns the digit contained within.
    pub fn get(self) -> u8 {
        self.0.get()
    }

    /// Returns the digit as a `usize` offset by `-1`, so numbering starts from `0`.
    pub fn as_index(self) -> usize {
        self.get() as usize - 1
    }
}
