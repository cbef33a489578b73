//! Where simulated dice land and how long they tumble.
//!
//! Two modes, as in the config:
//! - `Rng`: one seeded ChaCha stream; outcomes depend on throw order.
//! - `Deterministic`: outcomes keyed by (seed, die, throw), independent of the order
//!   in which dice are thrown or how many other dice were thrown before.

use rand::Rng;
use rand_chacha::ChaCha8Rng;
use rand_core::SeedableRng;
use yt_core::{ChanceKind, DieId, SimConfig};

/// Structural key of one throw of one die.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThrowKey {
    pub seed: u64,
    pub die: DieId,
    /// How many times this die was thrown before (0 for its first throw).
    pub throw_idx: u32,
}

/// Outcome of one throw.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Throw {
    pub face: u8,
    pub settle_ticks: u32,
    /// Spin about the vertical axis at rest, in radians.
    pub yaw: f32,
}

/// SplitMix64 step (fast, deterministic).
fn splitmix64_next(state: &mut u64) -> u64 {
    *state = state.wrapping_add(0x9E3779B97F4A7C15);
    let mut z = *state;
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58476D1CE4E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D049BB133111EB);
    z ^ (z >> 31)
}

fn mix_seed(key: ThrowKey) -> u64 {
    let mut x = key.seed;
    x ^= (key.die as u64).wrapping_mul(0xD6E8FEB86659FD93);
    x ^= (key.throw_idx as u64).wrapping_mul(0xA5A35625E4F7C1AD);
    let mut s = x;
    splitmix64_next(&mut s)
}

/// Deterministic outcome for `key`.
pub fn keyed_throw(key: ThrowKey, min_ticks: u32, max_ticks: u32) -> Throw {
    let mut state = mix_seed(key);
    let face = (splitmix64_next(&mut state) % 6) as u8 + 1;
    let span = max_ticks.saturating_sub(min_ticks) as u64 + 1;
    let settle_ticks = min_ticks + (splitmix64_next(&mut state) % span) as u32;
    // Top 24 bits -> [0, 1).
    let unit = (splitmix64_next(&mut state) >> 40) as f32 / (1u64 << 24) as f32;
    Throw {
        face,
        settle_ticks,
        yaw: unit * std::f32::consts::TAU,
    }
}

pub enum ChanceMode {
    Deterministic { seed: u64 },
    Rng { rng: Box<ChaCha8Rng> },
}

impl ChanceMode {
    pub fn from_config(cfg: &SimConfig) -> Self {
        match cfg.chance {
            ChanceKind::Deterministic => ChanceMode::Deterministic { seed: cfg.seed },
            ChanceKind::Rng => ChanceMode::Rng {
                rng: Box::new(ChaCha8Rng::seed_from_u64(cfg.seed)),
            },
        }
    }

    pub fn throw(&mut self, die: DieId, throw_idx: u32, min_ticks: u32, max_ticks: u32) -> Throw {
        match self {
            ChanceMode::Deterministic { seed } => keyed_throw(
                ThrowKey {
                    seed: *seed,
                    die,
                    throw_idx,
                },
                min_ticks,
                max_ticks,
            ),
            ChanceMode::Rng { rng } => Throw {
                face: rng.gen_range(1..=6),
                settle_ticks: rng.gen_range(min_ticks..=max_ticks.max(min_ticks)),
                yaw: rng.gen_range(0.0..std::f32::consts::TAU),
            },
        }
    }
}
