use yt_core::{Category, ChanceKind, Display, GameConfig, ScorePreview, NUM_CATS};

use crate::{GameTask, Greedy, Scheduler, StepStatus};

fn deterministic_cfg(seed: u64) -> GameConfig {
    let mut cfg = GameConfig::default();
    cfg.sim.chance = ChanceKind::Deterministic;
    cfg.sim.seed = seed;
    cfg
}

#[derive(Default)]
struct CountingDisplay {
    previews: usize,
    totals: Vec<u32>,
    game_over: Option<u32>,
}

impl Display for &mut CountingDisplay {
    fn show_previews(&mut self, _previews: &ScorePreview) {
        self.previews += 1;
    }
    fn show_total(&mut self, total: u32) {
        self.totals.push(total);
    }
    fn game_over(&mut self, final_score: u32) {
        self.game_over = Some(final_score);
    }
}

#[test]
fn scheduler_finishes_many_games() {
    let cfg = deterministic_cfg(123);
    let tasks: Vec<_> = (0..8u64).map(|i| GameTask::greedy(i, &cfg)).collect();
    let mut sched = Scheduler::new(tasks, 16);
    let ticks = sched.run(100_000);
    assert!(sched.all_done());
    assert!(ticks < 100_000);

    let st = sched.stats();
    assert_eq!(st.terminal, 8);
    assert_eq!(st.failed, 0);
    assert_eq!(st.commits, 8 * NUM_CATS as u64);

    for (task, score) in sched.tasks().iter().zip(sched.final_scores()) {
        let score = score.expect("finished game has a score");
        assert_eq!(score, task.controller().session().board.total_score());
        assert!(task.controller().session().board.is_complete());
        assert!(score <= 375);
    }
}

#[test]
fn deterministic_games_replay_identically() {
    let play = |seed| {
        let cfg = deterministic_cfg(seed);
        let tasks: Vec<_> = (0..4u64).map(|i| GameTask::greedy(i, &cfg)).collect();
        let mut sched = Scheduler::new(tasks, 7);
        sched.run(100_000);
        sched.final_scores()
    };
    assert_eq!(play(99), play(99));
}

#[test]
fn rng_mode_games_complete() {
    let mut cfg = GameConfig::default();
    cfg.sim.chance = ChanceKind::Rng;
    cfg.sim.seed = 5;
    for id in 0..3 {
        let mut t = GameTask::greedy(id, &cfg);
        let total = t.run_to_end().unwrap();
        assert_eq!(t.final_score(), Some(total));
        assert!(t.sim_ticks() > 0);
    }
}

#[test]
fn every_commit_is_reported_once_per_category() {
    let cfg = deterministic_cfg(7);
    let mut t = GameTask::greedy(0, &cfg);
    let mut seen = Vec::new();
    loop {
        let r = t.step(64).unwrap();
        if let Some(c) = r.committed {
            assert_eq!(c.game_id, 0);
            assert_eq!(c.turn as usize, seen.len());
            seen.push(c.category);
        }
        if r.status == StepStatus::Terminal {
            break;
        }
    }
    assert_eq!(seen.len(), NUM_CATS);
    for cat in Category::ALL {
        assert!(seen.contains(&cat), "{} never scored", cat);
    }
}

#[test]
fn display_sees_every_commit_and_game_over() {
    let cfg = deterministic_cfg(31);
    let mut display = CountingDisplay::default();
    let total = {
        let mut t = GameTask::new(0, &cfg, Greedy::default(), &mut display);
        t.run_to_end().unwrap()
    };
    assert_eq!(display.totals.len(), NUM_CATS);
    assert_eq!(display.totals.last().copied(), Some(total));
    assert_eq!(display.game_over, Some(total));
    assert!(display.previews >= NUM_CATS);
}

#[test]
fn terminal_task_does_no_more_work() {
    let cfg = deterministic_cfg(2);
    let mut t = GameTask::greedy(3, &cfg);
    t.run_to_end().unwrap();
    let r = t.step(10).unwrap();
    assert_eq!(r.status, StepStatus::Terminal);
    assert_eq!(r.work_done, 0);
}
