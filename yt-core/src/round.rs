//! Roll and turn bookkeeping.
//!
//! `round` counts rolls taken in the current turn (0..=max_rolls) and `turn` counts
//! committed turns (0..=max_turns). The game is finished once `turn == max_turns`.

use thiserror::Error;

use crate::config::Rules;
use crate::die::DieId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RoundError {
    #[error("roll not allowed (round {round}, turn {turn}, rolling={rolling})")]
    RollNotAllowed { round: u8, turn: u8, rolling: bool },
    #[error("turn incomplete: live dice are still moving")]
    TurnIncomplete,
    #[error("game is over")]
    GameFinished,
}

/// Dice the physics side must throw for one roll.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RollCommand {
    /// Roll number within the turn, starting at 1.
    pub round: u8,
    /// Live (non-held) dice: apply a random impulse and clear their settle flag.
    pub dice: Vec<DieId>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundState {
    turn: u8,
    round: u8,
    rolling: bool,
    max_rolls: u8,
    max_turns: u8,
}

impl Default for RoundState {
    fn default() -> Self {
        Self::new(&Rules::default())
    }
}

impl RoundState {
    pub fn new(rules: &Rules) -> Self {
        Self {
            turn: 0,
            round: 0,
            rolling: false,
            max_rolls: rules.max_rolls,
            max_turns: rules.max_turns,
        }
    }

    pub fn turn(&self) -> u8 {
        self.turn
    }

    pub fn round(&self) -> u8 {
        self.round
    }

    pub fn is_rolling(&self) -> bool {
        self.rolling
    }

    pub fn max_rolls(&self) -> u8 {
        self.max_rolls
    }

    pub fn max_turns(&self) -> u8 {
        self.max_turns
    }

    pub fn is_finished(&self) -> bool {
        self.turn >= self.max_turns
    }

    pub fn rolls_left(&self) -> u8 {
        self.max_rolls.saturating_sub(self.round)
    }

    pub fn can_roll(&self) -> bool {
        self.round < self.max_rolls && !self.is_finished() && !self.rolling
    }

    /// Start a roll of the given live dice.
    pub fn request_roll(
        &mut self,
        live: impl IntoIterator<Item = DieId>,
    ) -> Result<RollCommand, RoundError> {
        if !self.can_roll() {
            return Err(RoundError::RollNotAllowed {
                round: self.round,
                turn: self.turn,
                rolling: self.rolling,
            });
        }
        self.round += 1;
        self.rolling = true;
        Ok(RollCommand {
            round: self.round,
            dice: live.into_iter().collect(),
        })
    }

    /// Every live die of the current roll is at rest.
    pub fn finish_roll(&mut self) {
        self.rolling = false;
    }

    /// Check whether the turn could be committed now, without changing anything.
    pub fn check_commit(&self, all_live_settled: bool) -> Result<(), RoundError> {
        if self.is_finished() {
            return Err(RoundError::GameFinished);
        }
        if !all_live_settled {
            return Err(RoundError::TurnIncomplete);
        }
        Ok(())
    }

    /// Close the current turn. Returns the new turn count.
    pub fn commit_turn(&mut self, all_live_settled: bool) -> Result<u8, RoundError> {
        self.check_commit(all_live_settled)?;
        self.turn += 1;
        self.round = 0;
        self.rolling = false;
        Ok(self.turn)
    }
}
