//! Automatic players.
//!
//! A strategy looks at the dice after every resolved roll and answers with the dice
//! it wants held plus whether to roll again or score.

use yt_core::{Category, DieId, GameSession, ScoreBoard, NUM_DICE, NUM_UPPER};

/// What a strategy sees once a roll has resolved.
#[derive(Debug, Clone, Copy)]
pub struct TurnView<'a> {
    pub faces: [Option<u8>; NUM_DICE],
    pub held: [bool; NUM_DICE],
    pub rolls_left: u8,
    pub board: &'a ScoreBoard,
}

impl<'a> TurnView<'a> {
    pub fn from_session(session: &'a GameSession) -> Self {
        Self {
            faces: std::array::from_fn(|i| session.dice[i].face_value()),
            held: std::array::from_fn(|i| session.dice[i].is_held()),
            rolls_left: session.round.rolls_left(),
            board: &session.board,
        }
    }

    /// Resolved faces of all dice, held or not.
    pub fn values(&self) -> Vec<u8> {
        self.faces.iter().flatten().copied().collect()
    }

    /// Best open category if every die were held, ties to the earlier row.
    pub fn best_open(&self) -> Option<(Category, u32)> {
        let preview = self.board.preview_scores(&self.values());
        let mut best: Option<(Category, u32)> = None;
        for cat in self.board.open_categories() {
            let s = preview.get(cat);
            if best.map_or(true, |(_, b)| s > b) {
                best = Some((cat, s));
            }
        }
        best
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Roll,
    Commit(Category),
}

/// Desired hold set and next action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Plan {
    pub hold: [bool; NUM_DICE],
    pub action: Action,
}

pub trait Strategy {
    /// `None` only when no category is open.
    fn plan(&mut self, view: &TurnView<'_>) -> Option<Plan>;
}

/// Keep the most common face; score as soon as the best open category pays at
/// least `commit_at`, or when out of rolls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Greedy {
    pub commit_at: u32,
}

impl Default for Greedy {
    fn default() -> Self {
        Self { commit_at: 25 }
    }
}

impl Greedy {
    /// Face to collect: highest count, then the face whose upper row is still open,
    /// then the higher face.
    fn target_face(view: &TurnView<'_>) -> Option<u8> {
        let mut counts = [0u8; NUM_UPPER];
        for v in view.values() {
            if (1..=6).contains(&v) {
                counts[(v - 1) as usize] += 1;
            }
        }
        (1..=6u8)
            .filter(|&f| counts[(f - 1) as usize] > 0)
            .max_by_key(|&f| {
                let open = Category::from_index((f - 1) as usize)
                    .map_or(false, |c| !view.board.is_committed(c));
                (counts[(f - 1) as usize], open, f)
            })
    }
}

impl Strategy for Greedy {
    fn plan(&mut self, view: &TurnView<'_>) -> Option<Plan> {
        let (best, score) = view.best_open()?;
        if view.rolls_left == 0 || score >= self.commit_at {
            return Some(Plan {
                hold: std::array::from_fn(|i| view.faces[i].is_some()),
                action: Action::Commit(best),
            });
        }
        let target = Self::target_face(view);
        Some(Plan {
            hold: std::array::from_fn(|i| target.is_some() && view.faces[i] == target),
            action: Action::Roll,
        })
    }
}

/// Dice whose hold state must flip to reach `plan`, releases first.
pub fn toggles_for(view: &TurnView<'_>, plan: &Plan) -> Vec<DieId> {
    let release = (0..NUM_DICE).filter(|&i| view.held[i] && !plan.hold[i]);
    let hold = (0..NUM_DICE).filter(|&i| !view.held[i] && plan.hold[i]);
    release.chain(hold).map(|i| i as DieId).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use yt_core::Rules;

    fn view<'a>(faces: [u8; NUM_DICE], rolls_left: u8, board: &'a ScoreBoard) -> TurnView<'a> {
        TurnView {
            faces: faces.map(Some),
            held: [false; NUM_DICE],
            rolls_left,
            board,
        }
    }

    #[test]
    fn keeps_the_most_common_face() {
        let board = ScoreBoard::new(&Rules::default());
        let v = view([2, 6, 2, 3, 2], 2, &board);
        let plan = Greedy::default().plan(&v).unwrap();
        assert_eq!(plan.action, Action::Roll);
        assert_eq!(plan.hold, [true, false, true, false, true]);
    }

    #[test]
    fn prefers_an_open_upper_row_on_ties() {
        let mut board = ScoreBoard::new(&Rules::default());
        board.commit(Category::Fives, &[5, 5, 5, 1, 1], 5).unwrap();
        let v = view([5, 5, 3, 3, 1], 2, &board);
        let plan = Greedy::default().plan(&v).unwrap();
        assert_eq!(plan.hold, [false, false, true, true, false]);
    }

    #[test]
    fn commits_a_full_house_immediately() {
        let board = ScoreBoard::new(&Rules::default());
        let v = view([5, 5, 5, 2, 2], 2, &board);
        let plan = Greedy::default().plan(&v).unwrap();
        assert_eq!(plan.action, Action::Commit(Category::FullHouse));
        assert_eq!(plan.hold, [true; NUM_DICE]);
    }

    #[test]
    fn out_of_rolls_takes_best_open_category() {
        let board = ScoreBoard::new(&Rules::default());
        let v = view([1, 1, 2, 4, 6], 0, &board);
        let plan = Greedy::default().plan(&v).unwrap();
        // chance = 14 beats sixes = 6.
        assert_eq!(plan.action, Action::Commit(Category::Chance));
    }

    #[test]
    fn toggles_release_before_hold() {
        let board = ScoreBoard::new(&Rules::default());
        let mut v = view([4, 4, 1, 2, 3], 2, &board);
        v.held = [false, false, true, false, false];
        let plan = Plan {
            hold: [true, true, false, false, false],
            action: Action::Roll,
        };
        assert_eq!(toggles_for(&v, &plan), vec![2, 0, 1]);
    }

    #[test]
    fn no_open_category_means_no_plan() {
        let mut board = ScoreBoard::new(&Rules::default());
        for cat in Category::ALL {
            board.commit(cat, &[1, 2, 3, 4, 6], 5).unwrap();
        }
        let v = view([1, 1, 1, 1, 1], 0, &board);
        assert_eq!(Greedy::default().plan(&v), None);
    }
}
