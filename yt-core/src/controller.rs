//! Turn controller: the single writer of dice, round and score state.
//!
//! Events come in as method calls (`request_roll`, `toggle_hold`, `commit_category`)
//! plus one `tick` per simulation step while a roll is in flight. Every method checks
//! its preconditions before touching state, so a rejected call leaves the session
//! exactly as it was.

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::category::Category;
use crate::collab::{cup_drop_position, holder_slot, Display, Physics};
use crate::config::GameConfig;
use crate::die::{new_dice, Die, DieId, NUM_DICE};
use crate::round::{RollCommand, RoundError, RoundState};
use crate::scoreboard::{ScoreBoard, ScoreError};
use crate::scoring::ScorePreview;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameError {
    #[error(transparent)]
    Round(#[from] RoundError),
    #[error(transparent)]
    Score(#[from] ScoreError),
    #[error("unknown die id {id}")]
    InvalidDie { id: DieId },
    #[error("die {id} has not settled")]
    DieNotSettled { id: DieId },
    #[error("dice can only be selected after a roll")]
    SelectionClosed,
}

/// Where the current turn stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Start of a turn; nothing rolled yet.
    Idle,
    /// Live dice are moving.
    Rolling,
    /// Every live die is at rest; hold, roll again, or commit.
    AwaitingSelection,
    /// A category was just committed; the next roll starts a new turn.
    TurnComplete,
    GameOver,
}

/// Result of one settle poll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// No roll in flight.
    Idle,
    /// `pending` live dice are still moving.
    Settling { pending: usize },
    /// The roll just resolved.
    Settled,
}

/// Everything that lives for one game.
#[derive(Debug, Clone, PartialEq)]
pub struct GameSession {
    pub dice: [Die; NUM_DICE],
    pub board: ScoreBoard,
    pub round: RoundState,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(&GameConfig::default())
    }
}

impl GameSession {
    pub fn new(cfg: &GameConfig) -> Self {
        Self {
            dice: new_dice(),
            board: ScoreBoard::new(&cfg.rules),
            round: RoundState::new(&cfg.rules),
        }
    }

    pub fn die(&self, id: DieId) -> Option<&Die> {
        self.dice.get(id as usize)
    }

    pub fn live_dice(&self) -> impl Iterator<Item = &Die> + '_ {
        self.dice.iter().filter(|d| d.is_live())
    }

    pub fn all_live_settled(&self) -> bool {
        self.live_dice().all(|d| d.is_settled())
    }

    /// Dice that are held or settled.
    pub fn dice_at_rest(&self) -> usize {
        self.dice
            .iter()
            .filter(|d| d.is_held() || d.is_settled())
            .count()
    }
}

pub struct TurnController<P, D> {
    session: GameSession,
    physics: P,
    display: D,
    phase: Phase,
    /// Held dice in the order they were picked; index = holder slot.
    hold_order: Vec<DieId>,
    roll_ticks: u32,
    settle_timeout_ticks: Option<u32>,
}

impl<P: Physics, D: Display> TurnController<P, D> {
    pub fn new(cfg: &GameConfig, physics: P, display: D) -> Self {
        Self::with_session(GameSession::new(cfg), cfg.settle_timeout_ticks, physics, display)
    }

    /// Drive an existing session, e.g. one restored mid-game in tests.
    pub fn with_session(
        session: GameSession,
        settle_timeout_ticks: Option<u32>,
        physics: P,
        display: D,
    ) -> Self {
        let hold_order = session
            .dice
            .iter()
            .filter(|d| d.is_held())
            .map(Die::id)
            .collect();
        let phase = if session.round.is_finished() {
            Phase::GameOver
        } else if session.round.is_rolling() {
            Phase::Rolling
        } else if session.round.round() > 0 {
            Phase::AwaitingSelection
        } else {
            Phase::Idle
        };
        Self {
            session,
            physics,
            display,
            phase,
            hold_order,
            roll_ticks: 0,
            settle_timeout_ticks,
        }
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn into_session(self) -> GameSession {
        self.session
    }

    pub fn physics(&self) -> &P {
        &self.physics
    }

    /// The render loop steps the physics world through this before each `tick`.
    pub fn physics_mut(&mut self) -> &mut P {
        &mut self.physics
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn current_state(&self) -> Phase {
        self.phase
    }

    /// Held face values in pick order.
    pub fn held_values(&self) -> Vec<u8> {
        self.hold_order
            .iter()
            .filter_map(|&id| self.session.die(id).and_then(Die::face_value))
            .collect()
    }

    pub fn preview_scores(&self) -> ScorePreview {
        self.session.board.preview_scores(&self.held_values())
    }

    pub fn total_score(&self) -> u32 {
        self.session.board.total_score()
    }

    /// Put live dice back into the cup after a commit. Returns `false` (and does
    /// nothing) unless the turn is complete or not yet started.
    pub fn begin_turn(&mut self) -> bool {
        if !matches!(self.phase, Phase::TurnComplete | Phase::Idle) {
            return false;
        }
        for die in self.session.dice.iter().filter(|d| d.is_live()) {
            self.physics.set_position(die.id(), cup_drop_position(die.id()));
            self.physics.set_velocity_zero(die.id());
        }
        self.phase = Phase::Idle;
        self.display
            .show_counters(self.session.round.turn(), self.session.round.round());
        true
    }

    /// Throw every live die.
    pub fn request_roll(&mut self) -> Result<RollCommand, GameError> {
        let live: Vec<DieId> = self.session.live_dice().map(Die::id).collect();
        let cmd = self.session.round.request_roll(live).map_err(|e| {
            debug!(error = %e, "roll rejected");
            e
        })?;

        if self.phase == Phase::TurnComplete {
            self.begin_turn();
        }
        for &id in &cmd.dice {
            self.session.dice[id as usize].begin_roll();
            self.physics.apply_random_impulse(id);
        }
        self.phase = Phase::Rolling;
        self.roll_ticks = 0;
        debug!(
            turn = self.session.round.turn(),
            round = cmd.round,
            dice = cmd.dice.len(),
            "roll started"
        );
        self.display
            .show_counters(self.session.round.turn(), self.session.round.round());

        if cmd.dice.is_empty() {
            self.finish_roll();
        }
        Ok(cmd)
    }

    /// Poll physics once. Call every simulation step.
    pub fn tick(&mut self) -> TickOutcome {
        if self.phase != Phase::Rolling {
            return TickOutcome::Idle;
        }
        self.roll_ticks += 1;

        for die in self.session.dice.iter_mut() {
            if die.is_held() || die.is_settled() {
                continue;
            }
            let id = die.id();
            if !self.physics.is_settled(id) {
                continue;
            }
            let face = self.physics.resolved_face(id);
            if !(1..=6).contains(&face) {
                warn!(die = id, face, "physics reported an invalid face; still waiting");
                continue;
            }
            die.mark_settled(face);
            debug!(die = id, face, "die settled");
        }

        if let Some(limit) = self.settle_timeout_ticks {
            if self.roll_ticks >= limit && !self.session.all_live_settled() {
                self.force_settle();
            }
        }

        if self.session.all_live_settled() {
            self.finish_roll();
            return TickOutcome::Settled;
        }
        let pending = self
            .session
            .live_dice()
            .filter(|d| !d.is_settled())
            .count();
        TickOutcome::Settling { pending }
    }

    // A die wedged against a wall never sleeps; stop it and read whatever is up.
    fn force_settle(&mut self) {
        for die in self.session.dice.iter_mut() {
            if die.is_held() || die.is_settled() {
                continue;
            }
            let id = die.id();
            self.physics.set_velocity_zero(id);
            let face = self.physics.resolved_face(id).clamp(1, 6);
            die.mark_settled(face);
            warn!(die = id, face, ticks = self.roll_ticks, "settle timeout; forced face");
        }
    }

    fn finish_roll(&mut self) {
        self.session.round.finish_roll();
        self.phase = Phase::AwaitingSelection;
        let faces: Vec<Option<u8>> = self.session.dice.iter().map(Die::face_value).collect();
        debug!(?faces, ticks = self.roll_ticks, "roll resolved");
        let previews = self.preview_scores();
        self.display.show_previews(&previews);
    }

    /// Hold a settled live die, or release a held one. Returns whether the die is
    /// held afterwards.
    pub fn toggle_hold(&mut self, id: DieId) -> Result<bool, GameError> {
        let die = self
            .session
            .die(id)
            .ok_or(GameError::InvalidDie { id })?;
        let was_held = die.is_held();
        let resolved = die.is_settled() && die.face_value().is_some();
        if !matches!(self.phase, Phase::Rolling | Phase::AwaitingSelection) {
            debug!(die = id, phase = ?self.phase, "toggle rejected");
            return Err(GameError::SelectionClosed);
        }

        let now_held = if was_held {
            self.release(id);
            false
        } else {
            if !resolved {
                return Err(GameError::DieNotSettled { id });
            }
            let current = self.physics.position(id);
            self.session.dice[id as usize].hold(current);
            self.hold_order.push(id);
            let slot = self.hold_order.len() - 1;
            self.physics.set_position(id, holder_slot(slot));
            self.physics.set_velocity_zero(id);
            true
        };

        debug!(die = id, held = now_held, held_values = ?self.held_values(), "toggled die");
        let previews = self.preview_scores();
        self.display.show_previews(&previews);
        Ok(now_held)
    }

    fn release(&mut self, id: DieId) {
        if let Some(home) = self.session.dice[id as usize].release() {
            self.physics.set_position(id, home);
        }
        self.physics.set_velocity_zero(id);
        self.hold_order.retain(|&h| h != id);

        // Close the gap in the holder.
        for (slot, &held) in self.hold_order.iter().enumerate() {
            self.physics.set_position(held, holder_slot(slot));
            self.physics.set_velocity_zero(held);
        }
    }

    /// Score the held dice in `category` and close the turn.
    pub fn commit_category(&mut self, category: Category) -> Result<u32, GameError> {
        if self.session.board.is_committed(category) {
            debug!(%category, "commit rejected: already committed");
            return Err(ScoreError::AlreadyCommitted { category }.into());
        }
        let settled = self.phase == Phase::AwaitingSelection && self.session.all_live_settled();
        self.session.round.check_commit(settled).map_err(|e| {
            debug!(%category, error = %e, "commit rejected");
            e
        })?;

        let held = self.held_values();
        let score = self
            .session
            .board
            .commit(category, &held, self.session.dice_at_rest())?;
        let turn = self.session.round.commit_turn(settled)?;

        // Holds never carry over: every turn starts with five live dice.
        for id in std::mem::take(&mut self.hold_order) {
            if let Some(home) = self.session.dice[id as usize].release() {
                self.physics.set_position(id, home);
            }
        }
        for die in self.session.dice.iter_mut() {
            die.reset_for_new_turn();
        }

        let total = self.total_score();
        info!(%category, score, ?held, turn, total, "category committed");
        self.display.show_total(total);
        self.display
            .show_counters(self.session.round.turn(), self.session.round.round());
        let previews = self.preview_scores();
        self.display.show_previews(&previews);

        if self.session.round.is_finished() {
            self.phase = Phase::GameOver;
            info!(final_score = total, "game over");
            self.display.game_over(total);
        } else {
            self.phase = Phase::TurnComplete;
        }
        Ok(score)
    }
}
