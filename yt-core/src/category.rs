//! Category space of the scoring table.
//!
//! Twelve scoreable categories, in table order:
//! - idx 0..=5  : upper section (ones..sixes)
//! - idx 6..=11 : chance, four of a kind, full house, small/large straight, yacht
//!
//! The upper bonus is a derived row and is not a `Category`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const NUM_CATS: usize = 12;

/// Number of upper-section categories (ones..sixes).
pub const NUM_UPPER: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Category {
    Ones,
    Twos,
    Threes,
    Fours,
    Fives,
    Sixes,
    Chance,
    FourOfAKind,
    FullHouse,
    SmallStraight,
    LargeStraight,
    Yacht,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown category: {0}")]
pub struct UnknownCategory(pub String);

impl Category {
    pub const ALL: [Category; NUM_CATS] = [
        Category::Ones,
        Category::Twos,
        Category::Threes,
        Category::Fours,
        Category::Fives,
        Category::Sixes,
        Category::Chance,
        Category::FourOfAKind,
        Category::FullHouse,
        Category::SmallStraight,
        Category::LargeStraight,
        Category::Yacht,
    ];

    /// Table index (0..NUM_CATS).
    pub fn index(self) -> usize {
        self as usize
    }

    /// Inverse of [`Category::index`].
    pub fn from_index(idx: usize) -> Option<Category> {
        Category::ALL.get(idx).copied()
    }

    pub fn is_upper(self) -> bool {
        self.index() < NUM_UPPER
    }

    /// Face counted by an upper category (ones -> 1, ..., sixes -> 6).
    pub fn upper_face(self) -> Option<u8> {
        if self.is_upper() {
            Some(self.index() as u8 + 1)
        } else {
            None
        }
    }

    /// Stable name used by the score table cells and the CLI.
    pub fn name(self) -> &'static str {
        match self {
            Category::Ones => "ones",
            Category::Twos => "twos",
            Category::Threes => "threes",
            Category::Fours => "fours",
            Category::Fives => "fives",
            Category::Sixes => "sixes",
            Category::Chance => "chance",
            Category::FourOfAKind => "fourOfAKind",
            Category::FullHouse => "fullHouse",
            Category::SmallStraight => "smallStraight",
            Category::LargeStraight => "largeStraight",
            Category::Yacht => "yacht",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = UnknownCategory;

    /// Accepts the table name case-insensitively, with or without `_`/`-` separators
    /// (`fullHouse`, `full_house`, `full-house`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted: String = s
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .collect::<String>()
            .to_ascii_lowercase();
        Category::ALL
            .iter()
            .copied()
            .find(|c| c.name().to_ascii_lowercase() == wanted)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}
