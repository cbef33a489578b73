use thiserror::Error;
use tracing::{debug, info};
use yt_core::{
    Category, Display, GameConfig, GameError, NullDisplay, Phase, TickOutcome, TurnController,
};
use yt_sim::SimPhysics;

use crate::strategy::{toggles_for, Action, Greedy, Strategy, TurnView};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameTaskError {
    #[error(transparent)]
    Game(#[from] GameError),
    #[error("no open category left to score")]
    NoOpenCategory,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepStatus {
    Progress,
    /// Dice are still tumbling.
    Settling,
    Terminal,
}

#[derive(Debug)]
pub struct StepResult {
    pub status: StepStatus,
    pub work_done: u32,
    /// Present only when a category was scored during this step.
    pub committed: Option<CommittedTurn>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommittedTurn {
    pub game_id: u64,
    pub turn: u8,
    pub category: Category,
    pub score: u32,
    pub total: u32,
}

/// Mix the base seed with the game id so every game in a batch plays different dice.
pub fn game_seed(base: u64, game_id: u64) -> u64 {
    base ^ game_id.wrapping_mul(0x9E37_79B9_7F4A_7C15)
}

/// One headless game: simulated dice, an automatic player, and the turn controller.
pub struct GameTask<S = Greedy, D = NullDisplay> {
    pub game_id: u64,
    controller: TurnController<SimPhysics, D>,
    strategy: S,
    sim_ticks: u64,
}

impl GameTask<Greedy, NullDisplay> {
    pub fn greedy(game_id: u64, cfg: &GameConfig) -> Self {
        Self::new(game_id, cfg, Greedy::default(), NullDisplay)
    }
}

impl<S: Strategy, D: Display> GameTask<S, D> {
    pub fn new(game_id: u64, cfg: &GameConfig, strategy: S, display: D) -> Self {
        let mut sim = cfg.sim.clone();
        sim.seed = game_seed(cfg.sim.seed, game_id);
        let physics = SimPhysics::new(&sim);
        Self {
            game_id,
            controller: TurnController::new(cfg, physics, display),
            strategy,
            sim_ticks: 0,
        }
    }

    pub fn controller(&self) -> &TurnController<SimPhysics, D> {
        &self.controller
    }

    pub fn is_terminal(&self) -> bool {
        self.controller.current_state() == Phase::GameOver
    }

    pub fn final_score(&self) -> Option<u32> {
        self.is_terminal().then(|| self.controller.total_score())
    }

    /// Physics steps taken so far.
    pub fn sim_ticks(&self) -> u64 {
        self.sim_ticks
    }

    /// Step this game forward by up to `max_work` small operations.
    ///
    /// One operation is a roll request, one physics step plus settle poll, or one
    /// decision (holds plus roll or commit). Returns early once a category is scored
    /// so callers see every commit.
    pub fn step(&mut self, max_work: u32) -> Result<StepResult, GameTaskError> {
        let mut work_done = 0u32;
        let mut status = StepStatus::Progress;
        while work_done < max_work {
            let phase = self.controller.current_state();
            if phase == Phase::GameOver {
                status = StepStatus::Terminal;
                break;
            }
            work_done += 1;
            match phase {
                Phase::Idle | Phase::TurnComplete => {
                    self.controller.request_roll()?;
                }
                Phase::Rolling => {
                    self.controller.physics_mut().step();
                    self.sim_ticks += 1;
                    status = match self.controller.tick() {
                        TickOutcome::Settling { .. } => StepStatus::Settling,
                        TickOutcome::Settled | TickOutcome::Idle => StepStatus::Progress,
                    };
                }
                Phase::AwaitingSelection => {
                    if let Some(committed) = self.decide()? {
                        let status = if self.is_terminal() {
                            StepStatus::Terminal
                        } else {
                            StepStatus::Progress
                        };
                        return Ok(StepResult {
                            status,
                            work_done,
                            committed: Some(committed),
                        });
                    }
                    status = StepStatus::Progress;
                }
                Phase::GameOver => break,
            }
        }
        Ok(StepResult {
            status,
            work_done,
            committed: None,
        })
    }

    fn decide(&mut self) -> Result<Option<CommittedTurn>, GameTaskError> {
        let (plan, toggles) = {
            let view = TurnView::from_session(self.controller.session());
            let plan = self
                .strategy
                .plan(&view)
                .ok_or(GameTaskError::NoOpenCategory)?;
            let toggles = toggles_for(&view, &plan);
            (plan, toggles)
        };
        for id in toggles {
            self.controller.toggle_hold(id)?;
        }
        match plan.action {
            Action::Roll => {
                debug!(game = self.game_id, held = ?self.controller.held_values(), "rolling again");
                self.controller.request_roll()?;
                Ok(None)
            }
            Action::Commit(category) => {
                let turn = self.controller.session().round.turn();
                let score = self.controller.commit_category(category)?;
                let total = self.controller.total_score();
                if self.is_terminal() {
                    info!(game = self.game_id, total, ticks = self.sim_ticks, "game finished");
                }
                Ok(Some(CommittedTurn {
                    game_id: self.game_id,
                    turn,
                    category,
                    score,
                    total,
                }))
            }
        }
    }

    /// Play to the end.
    pub fn run_to_end(&mut self) -> Result<u32, GameTaskError> {
        loop {
            let r = self.step(u32::MAX)?;
            if r.status == StepStatus::Terminal {
                return Ok(self.controller.total_score());
            }
        }
    }
}
