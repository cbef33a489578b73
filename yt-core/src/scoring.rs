//! Would-score computation for a multiset of held dice.
//!
//! Every category maps to one pure function in [`SCORERS`]; all of them only look at
//! face counts, so results never depend on dice order.

use crate::category::{Category, NUM_CATS};

pub const FULL_HOUSE_SCORE: u32 = 25;
pub const SMALL_STRAIGHT_SCORE: u32 = 30;
pub const LARGE_STRAIGHT_SCORE: u32 = 40;
pub const YACHT_SCORE: u32 = 50;

/// Face counts of the held dice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Hand {
    counts: [u8; 6],
    len: usize,
    sum: u32,
}

impl Hand {
    /// Build a hand from held face values (0..=5 values, each 1..=6).
    ///
    /// Values outside 1..=6 are not faces and are skipped.
    pub fn new(values: &[u8]) -> Self {
        let mut hand = Hand::default();
        for &v in values {
            debug_assert!((1..=6).contains(&v), "face out of range: {}", v);
            if let Some(c) = hand.counts.get_mut((v as usize).wrapping_sub(1)) {
                *c += 1;
                hand.len += 1;
                hand.sum += v as u32;
            }
        }
        hand
    }

    pub fn count(&self, face: u8) -> u8 {
        self.counts
            .get((face as usize).wrapping_sub(1))
            .copied()
            .unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn sum(&self) -> u32 {
        self.sum
    }

    fn has_group(&self, size: u8) -> bool {
        self.counts.iter().any(|&c| c == size)
    }

    /// True if faces `start..start+len` are all present.
    fn has_run(&self, start: usize, len: usize) -> bool {
        self.counts[start..start + len].iter().all(|&c| c > 0)
    }
}

type Scorer = fn(&Hand) -> u32;

/// Scoring function per category, in [`Category::ALL`] order.
pub static SCORERS: [Scorer; NUM_CATS] = [
    ones,
    twos,
    threes,
    fours,
    fives,
    sixes,
    chance,
    four_of_a_kind,
    full_house,
    small_straight,
    large_straight,
    yacht,
];

fn upper(h: &Hand, face: u8) -> u32 {
    h.count(face) as u32 * face as u32
}

fn ones(h: &Hand) -> u32 {
    upper(h, 1)
}

fn twos(h: &Hand) -> u32 {
    upper(h, 2)
}

fn threes(h: &Hand) -> u32 {
    upper(h, 3)
}

fn fours(h: &Hand) -> u32 {
    upper(h, 4)
}

fn fives(h: &Hand) -> u32 {
    upper(h, 5)
}

fn sixes(h: &Hand) -> u32 {
    upper(h, 6)
}

fn chance(h: &Hand) -> u32 {
    h.sum()
}

fn four_of_a_kind(h: &Hand) -> u32 {
    if h.counts.iter().any(|&c| c >= 4) {
        h.sum()
    } else {
        0
    }
}

// Needs a distinct pair, so five of a kind does not count.
fn full_house(h: &Hand) -> u32 {
    if h.has_group(3) && h.has_group(2) {
        FULL_HOUSE_SCORE
    } else {
        0
    }
}

fn small_straight(h: &Hand) -> u32 {
    if (0..=2).any(|start| h.has_run(start, 4)) {
        SMALL_STRAIGHT_SCORE
    } else {
        0
    }
}

fn large_straight(h: &Hand) -> u32 {
    if (0..=1).any(|start| h.has_run(start, 5)) {
        LARGE_STRAIGHT_SCORE
    } else {
        0
    }
}

fn yacht(h: &Hand) -> u32 {
    if h.len() >= 5 && h.counts.iter().any(|&c| c as usize == h.len()) {
        YACHT_SCORE
    } else {
        0
    }
}

/// Raw would-score of `category` for the held values.
pub fn score_for(category: Category, held: &[u8]) -> u32 {
    SCORERS[category.index()](&Hand::new(held))
}

/// Raw would-scores for every category.
pub fn scores_for_held(held: &[u8]) -> ScorePreview {
    let hand = Hand::new(held);
    let mut out = [0u32; NUM_CATS];
    for (slot, scorer) in out.iter_mut().zip(SCORERS.iter()) {
        *slot = scorer(&hand);
    }
    ScorePreview(out)
}

/// Category -> would-score mapping handed to the display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScorePreview(pub(crate) [u32; NUM_CATS]);

impl ScorePreview {
    pub fn get(&self, category: Category) -> u32 {
        self.0[category.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (Category, u32)> + '_ {
        Category::ALL.iter().map(move |&c| (c, self.get(c)))
    }

    pub fn as_array(&self) -> &[u32; NUM_CATS] {
        &self.0
    }
}
