//! Scoring table: twelve committable categories plus the derived upper bonus.

use thiserror::Error;

use crate::category::{Category, NUM_CATS};
use crate::config::Rules;
use crate::die::NUM_DICE;
use crate::scoring::{score_for, scores_for_held, ScorePreview};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ScoreError {
    #[error("category {category} is already committed")]
    AlreadyCommitted { category: Category },
    #[error("roll still in progress: {at_rest} of 5 dice at rest")]
    IncompleteRoll { at_rest: usize },
}

/// One row of the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Entry {
    pub committed: bool,
    /// Frozen score, `Some` iff committed.
    pub score: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreBoard {
    entries: [Entry; NUM_CATS],
    bonus: u32,
    bonus_threshold: u32,
    bonus_points: u32,
}

impl Default for ScoreBoard {
    fn default() -> Self {
        Self::new(&Rules::default())
    }
}

impl ScoreBoard {
    pub fn new(rules: &Rules) -> Self {
        Self {
            entries: [Entry::default(); NUM_CATS],
            bonus: 0,
            bonus_threshold: rules.bonus_threshold,
            bonus_points: rules.bonus_points,
        }
    }

    pub fn entry(&self, category: Category) -> Entry {
        self.entries[category.index()]
    }

    pub fn is_committed(&self, category: Category) -> bool {
        self.entries[category.index()].committed
    }

    pub fn score(&self, category: Category) -> Option<u32> {
        self.entries[category.index()].score
    }

    /// Categories still open, in table order.
    pub fn open_categories(&self) -> impl Iterator<Item = Category> + '_ {
        Category::ALL
            .iter()
            .copied()
            .filter(move |&c| !self.is_committed(c))
    }

    pub fn is_complete(&self) -> bool {
        self.entries.iter().all(|e| e.committed)
    }

    /// What each category would award for `held` if chosen now.
    ///
    /// Committed categories report their frozen score.
    pub fn preview_scores(&self, held: &[u8]) -> ScorePreview {
        let mut preview = scores_for_held(held);
        for (slot, entry) in preview.0.iter_mut().zip(self.entries.iter()) {
            if let Some(frozen) = entry.score {
                *slot = frozen;
            }
        }
        preview
    }

    /// Freeze `category` at its would-score for `held`.
    ///
    /// `at_rest` is the number of dice that are either held or settled; a commit needs
    /// all five. Returns the frozen score. On error nothing changes.
    pub fn commit(
        &mut self,
        category: Category,
        held: &[u8],
        at_rest: usize,
    ) -> Result<u32, ScoreError> {
        if self.is_committed(category) {
            return Err(ScoreError::AlreadyCommitted { category });
        }
        if at_rest < NUM_DICE {
            return Err(ScoreError::IncompleteRoll { at_rest });
        }

        let score = score_for(category, held);
        self.entries[category.index()] = Entry {
            committed: true,
            score: Some(score),
        };
        if category.is_upper() {
            self.recompute_bonus();
        }
        Ok(score)
    }

    /// Sum of committed ones..sixes.
    pub fn upper_total(&self) -> u32 {
        Category::ALL
            .iter()
            .filter(|c| c.is_upper())
            .filter_map(|&c| self.score(c))
            .sum()
    }

    pub fn bonus(&self) -> u32 {
        self.bonus
    }

    fn recompute_bonus(&mut self) {
        self.bonus = if self.upper_total() >= self.bonus_threshold {
            self.bonus_points
        } else {
            0
        };
    }

    /// Committed scores plus bonus.
    pub fn total_score(&self) -> u32 {
        self.entries.iter().filter_map(|e| e.score).sum::<u32>() + self.bonus
    }
}
