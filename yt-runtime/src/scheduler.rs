use tracing::warn;
use yt_core::Display;

use crate::game_task::{CommittedTurn, GameTask, GameTaskError, StepStatus};
use crate::strategy::Strategy;

#[derive(Debug, Default, Clone)]
pub struct SchedulerStats {
    pub ticks: u64,
    pub steps: u64,
    pub settling: u64,
    pub commits: u64,
    pub terminal: u64,
    pub failed: u64,
}

pub struct Scheduler<S, D> {
    tasks: Vec<GameTask<S, D>>,
    /// Per task: finished or failed, never stepped again.
    done: Vec<bool>,
    errors: Vec<Option<GameTaskError>>,
    steps_per_tick: u32,
    stats: SchedulerStats,
}

impl<S: Strategy, D: Display> Scheduler<S, D> {
    pub fn new(tasks: Vec<GameTask<S, D>>, steps_per_tick: u32) -> Self {
        let n = tasks.len();
        Self {
            tasks,
            done: vec![false; n],
            errors: vec![None; n],
            steps_per_tick: steps_per_tick.max(1),
            stats: SchedulerStats::default(),
        }
    }

    pub fn stats(&self) -> &SchedulerStats {
        &self.stats
    }

    pub fn tasks(&self) -> &[GameTask<S, D>] {
        &self.tasks
    }

    pub fn errors(&self) -> &[Option<GameTaskError>] {
        &self.errors
    }

    pub fn all_done(&self) -> bool {
        self.done.iter().all(|&d| d)
    }

    /// Run one scheduler tick: round-robin over unfinished tasks, giving each up to
    /// `steps_per_tick`. Returns the categories scored during the tick.
    pub fn tick(&mut self) -> Vec<CommittedTurn> {
        self.stats.ticks += 1;
        let mut committed = Vec::new();
        for (i, t) in self.tasks.iter_mut().enumerate() {
            if self.done[i] {
                continue;
            }
            match t.step(self.steps_per_tick) {
                Ok(sr) => {
                    if let Some(c) = sr.committed {
                        self.stats.commits += 1;
                        committed.push(c);
                    }
                    match sr.status {
                        StepStatus::Progress => self.stats.steps += 1,
                        StepStatus::Settling => self.stats.settling += 1,
                        StepStatus::Terminal => {
                            self.stats.terminal += 1;
                            self.done[i] = true;
                        }
                    }
                }
                Err(e) => {
                    warn!(game = t.game_id, error = %e, "game task failed");
                    self.stats.failed += 1;
                    self.errors[i] = Some(e);
                    self.done[i] = true;
                }
            }
        }
        committed
    }

    /// Tick until every task is done or `max_ticks` pass. Returns ticks run.
    pub fn run(&mut self, max_ticks: u64) -> u64 {
        let mut n = 0;
        while n < max_ticks && !self.all_done() {
            self.tick();
            n += 1;
        }
        n
    }

    /// Final score per task; `None` for unfinished or failed games.
    pub fn final_scores(&self) -> Vec<Option<u32>> {
        self.tasks.iter().map(GameTask::final_score).collect()
    }
}
