//! Kinematic stand-in for the rigid-body world.
//!
//! A thrown die flies off with a random velocity, spins, and comes to rest after the
//! number of ticks its throw drew, snapping to an orientation that shows the drawn
//! face. Good enough to drive the turn controller headless; no collisions.

use glam::{Quat, Vec3};
use yt_core::{cup_drop_position, DieId, Physics, SimConfig, NUM_DICE};

use crate::chance::ChanceMode;
use crate::face::{face_up, orientation_for};

/// Fixed simulation step, seconds.
pub const DT: f32 = 1.0 / 60.0;

const GRAVITY: f32 = -15.0;
const LINEAR_DAMPING: f32 = 0.9;
const FLOOR_Y: f32 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq)]
struct SimDie {
    position: Vec3,
    velocity: Vec3,
    orientation: Quat,
    spin: Quat,
    /// Ticks until rest; 0 = at rest.
    ticks_left: u32,
    rest_orientation: Quat,
    throws: u32,
}

pub struct SimPhysics {
    dice: [SimDie; NUM_DICE],
    chance: ChanceMode,
    min_settle_ticks: u32,
    max_settle_ticks: u32,
    ticks: u64,
}

impl SimPhysics {
    pub fn new(cfg: &SimConfig) -> Self {
        let dice = std::array::from_fn(|i| {
            let at_rest = orientation_for(1, 0.0);
            SimDie {
                position: cup_drop_position(i as DieId),
                velocity: Vec3::ZERO,
                orientation: at_rest,
                spin: Quat::IDENTITY,
                ticks_left: 0,
                rest_orientation: at_rest,
                throws: 0,
            }
        });
        Self {
            dice,
            chance: ChanceMode::from_config(cfg),
            min_settle_ticks: cfg.min_settle_ticks,
            max_settle_ticks: cfg.max_settle_ticks,
            ticks: 0,
        }
    }

    /// Ticks stepped so far.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn orientation(&self, id: DieId) -> Option<Quat> {
        self.dice.get(id as usize).map(|d| d.orientation)
    }

    /// Advance every moving die by one step.
    pub fn step(&mut self) {
        self.ticks += 1;
        for d in self.dice.iter_mut().filter(|d| d.ticks_left > 0) {
            d.ticks_left -= 1;
            if d.ticks_left == 0 {
                d.velocity = Vec3::ZERO;
                d.orientation = d.rest_orientation;
                d.position.y = FLOOR_Y;
                continue;
            }
            d.velocity.y += GRAVITY * DT;
            d.velocity *= 1.0 - LINEAR_DAMPING * DT;
            d.position += d.velocity * DT;
            if d.position.y < FLOOR_Y {
                d.position.y = FLOOR_Y;
                d.velocity.y = -d.velocity.y * 0.5;
            }
            d.orientation = (d.spin * d.orientation).normalize();
        }
    }
}

impl Physics for SimPhysics {
    fn apply_random_impulse(&mut self, id: DieId) {
        let Some(d) = self.dice.get_mut(id as usize) else {
            return;
        };
        let throw = self
            .chance
            .throw(id, d.throws, self.min_settle_ticks, self.max_settle_ticks);
        d.throws += 1;
        d.rest_orientation = orientation_for(throw.face, throw.yaw);

        // Direction and spin rate derive from the yaw so both chance modes stay
        // reproducible without extra draws.
        let (sin, cos) = throw.yaw.sin_cos();
        d.velocity = Vec3::new(cos * 8.0, 4.0, sin * 8.0);
        d.spin = Quat::from_axis_angle(Vec3::new(sin, 0.3, cos).normalize(), 0.35);
        // A zero-tick throw still has to be seen moving for one step.
        d.ticks_left = throw.settle_ticks.max(1);
    }

    fn is_settled(&self, id: DieId) -> bool {
        self.dice
            .get(id as usize)
            .map_or(true, |d| d.ticks_left == 0)
    }

    fn resolved_face(&self, id: DieId) -> u8 {
        self.dice
            .get(id as usize)
            .map_or(1, |d| face_up(d.orientation))
    }

    fn position(&self, id: DieId) -> Vec3 {
        self.dice
            .get(id as usize)
            .map_or(Vec3::ZERO, |d| d.position)
    }

    fn set_position(&mut self, id: DieId, position: Vec3) {
        if let Some(d) = self.dice.get_mut(id as usize) {
            d.position = position;
        }
    }

    fn set_velocity_zero(&mut self, id: DieId) {
        if let Some(d) = self.dice.get_mut(id as usize) {
            d.velocity = Vec3::ZERO;
            d.spin = Quat::IDENTITY;
            d.ticks_left = 0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yt_core::ChanceKind;

    fn sim(min: u32, max: u32) -> SimPhysics {
        SimPhysics::new(&SimConfig {
            min_settle_ticks: min,
            max_settle_ticks: max,
            chance: ChanceKind::Deterministic,
            seed: 11,
        })
    }

    #[test]
    fn dice_start_at_rest_in_the_cup() {
        let p = sim(20, 90);
        for id in 0..NUM_DICE as DieId {
            assert!(p.is_settled(id));
            assert_eq!(p.position(id), cup_drop_position(id));
            assert_eq!(p.resolved_face(id), 1);
        }
    }

    #[test]
    fn thrown_die_settles_on_its_drawn_face() {
        let mut p = sim(5, 5);
        p.apply_random_impulse(2);
        assert!(!p.is_settled(2));
        let start = p.position(2);
        for _ in 0..4 {
            p.step();
            assert!(!p.is_settled(2));
        }
        assert_ne!(p.position(2), start);
        p.step();
        assert!(p.is_settled(2));

        let expected = crate::chance::keyed_throw(
            crate::chance::ThrowKey {
                seed: 11,
                die: 2,
                throw_idx: 0,
            },
            5,
            5,
        );
        assert_eq!(p.resolved_face(2), expected.face);
    }

    #[test]
    fn untouched_dice_stay_put() {
        let mut p = sim(3, 3);
        p.apply_random_impulse(0);
        for _ in 0..10 {
            p.step();
        }
        assert_eq!(p.position(4), cup_drop_position(4));
        assert_eq!(p.ticks(), 10);
    }

    #[test]
    fn stopping_a_die_settles_it_immediately() {
        let mut p = sim(50, 50);
        p.apply_random_impulse(1);
        p.step();
        p.set_velocity_zero(1);
        assert!(p.is_settled(1));
        assert!((1..=6).contains(&p.resolved_face(1)));
    }

    #[test]
    fn unknown_die_is_ignored() {
        let mut p = sim(1, 1);
        p.apply_random_impulse(9);
        p.set_position(9, Vec3::ONE);
        assert!(p.is_settled(9));
    }
}
