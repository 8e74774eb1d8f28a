//! Difficulty tiers and their clue counts.

use strum_macros::{Display, EnumIter, EnumString};

/// Difficulty tier of a carved puzzle, ordered easiest to hardest.
///
/// A tier is nothing more than the number of clues the carver leaves
/// standing; fewer clues make for a harder puzzle. String conversions in
/// both directions use the lowercase tier name, so `"easy".parse()` and
/// `Difficulty::Easy.to_string()` round-trip.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Display, EnumIter, EnumString)]
#[strum(serialize_all = "lowercase")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Difficulty {
    /// 40 clues remain.
    Easy,
    /// 32 clues remain.
    Normal,
    /// 25 clues remain.
    Hard,
}

impl Difficulty {
    /// Number of filled cells a puzzle of this tier keeps out of 81.
    pub fn clue_count(self) -> u8 {
        match self {
            Difficulty::Easy => 40,
            Difficulty::Normal => 32,
            Difficulty::Hard => 25,
        }
    }

    /// Tier number starting from `0`, for indexing.
    pub(crate) fn as_index(self) -> usize {
        self as usize
    }
}
