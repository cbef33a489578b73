//! Headless game runner: automatic players stepping simulated games.

pub mod game_task;
pub mod scheduler;
pub mod strategy;

pub use game_task::{game_seed, CommittedTurn, GameTask, GameTaskError, StepResult, StepStatus};
pub use scheduler::{Scheduler, SchedulerStats};
pub use strategy::{toggles_for, Action, Greedy, Plan, Strategy, TurnView};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");


#[cfg(test)]
mod runtime_tests;
