use std::fmt;

use crate::board::Digit;

/// A set of digits, stored as a bitmask in the low 9 bits of a `u16`.
///
/// Backs pencil marks and the duplicate sweeps over rows, columns and boxes.
#[derive(Copy, Clone, Eq, PartialEq, Default, Hash)]
pub struct DigitSet(u16);

impl DigitSet {
    /// The empty set.
    pub const NONE: DigitSet = DigitSet(0);

    /// The set of all nine digits.
    pub const ALL: DigitSet = DigitSet(0o777);

    /// Returns whether `digit` is in the set.
    pub fn contains(self, digit: Digit) -> bool {
        self.0 & Self::bit(digit) != 0
    }

    /// Adds `digit` to the set.
    pub fn insert(&mut self, digit: Digit) {
        self.0 |= Self::bit(digit);
    }

    /// Removes `digit` from the set.
    pub fn remove(&mut self, digit: Digit) {
        self.0 &= !Self::bit(digit);
    }

    /// Removes all digits.
    pub fn clear(&mut self) {
        self.0 = 0;
    }

    /// Number of digits in the set.
    pub fn len(self) -> u8 {
        self.0.count_ones() as u8
    }

    /// Returns whether the set contains no digits.
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns an iterator over the contained digits in ascending order.
    pub fn iter(self) -> impl Iterator<Item = Digit> {
        Digit::all().filter(move |&digit| self.contains(digit))
    }

    fn bit(digit: Digit) -> u16 {
        1 << digit.as_index()
    }
}

impl FromIterator<Digit> for DigitSet {
    fn from_iter<I: IntoIterator<Item = Digit>>(iter: I) -> Self {
        let mut set = DigitSet::NONE;
        for digit in iter {
            set.insert(digit);
        }
        set
    }
}

impl fmt::Debug for DigitSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter().map(Digit::get)).finish()
    }
}
