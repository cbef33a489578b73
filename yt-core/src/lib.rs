//! yt-core: Yacht dice rules, scoring, turn state machine, and configuration.

pub mod category;
pub mod collab;
pub mod config;
pub mod controller;
pub mod die;
pub mod round;
pub mod scoreboard;
pub mod scoring;

pub use category::{Category, UnknownCategory, NUM_CATS, NUM_UPPER};
pub use collab::{cup_drop_position, holder_slot, Display, NullDisplay, Physics, CUP_ORIGIN};
pub use config::{ChanceKind, ConfigError, GameConfig, Rules, SimConfig};
pub use controller::{GameError, GameSession, Phase, TickOutcome, TurnController};
pub use die::{Die, DieId, NUM_DICE};
pub use round::{RollCommand, RoundError, RoundState};
pub use scoreboard::{Entry, ScoreBoard, ScoreError};
pub use scoring::{score_for, scores_for_held, Hand, ScorePreview};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_is_nonempty() {
        assert!(!VERSION.is_empty());
    }
}

#[cfg(test)]
mod scoring_tests;
