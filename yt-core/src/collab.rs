//! Boundary to the physics engine and the display.
//!
//! The core never steps a simulation, hit-tests, or draws. It asks the physics side
//! for settle state and resolved faces, tells it where held dice go, and pushes
//! score/counter updates to the display.

use glam::Vec3;

use crate::die::DieId;
use crate::scoring::ScorePreview;

/// Rigid-body side of the dice.
///
/// The face-direction table is owned by the implementor; `resolved_face` returns the
/// value (1..=6) of the face currently pointing up.
pub trait Physics {
    fn apply_random_impulse(&mut self, id: DieId);
    fn is_settled(&self, id: DieId) -> bool;
    fn resolved_face(&self, id: DieId) -> u8;
    fn position(&self, id: DieId) -> Vec3;
    fn set_position(&mut self, id: DieId, position: Vec3);
    fn set_velocity_zero(&mut self, id: DieId);
}

/// Score table and counters on screen. Every method defaults to a no-op.
pub trait Display {
    fn show_previews(&mut self, _previews: &ScorePreview) {}
    fn show_counters(&mut self, _turn: u8, _round: u8) {}
    fn show_total(&mut self, _total: u32) {}
    fn game_over(&mut self, _final_score: u32) {}
}

/// Display that drops every update.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullDisplay;

impl Display for NullDisplay {}

/// Where dice drop from at the start of a turn.
pub const CUP_ORIGIN: Vec3 = Vec3::new(0.0, 40.0, 0.0);

/// Drop position inside the cup; dice are stacked two units apart.
pub fn cup_drop_position(id: DieId) -> Vec3 {
    CUP_ORIGIN + Vec3::new(0.0, 2.0 * id as f32, 0.0)
}

/// Resting place of the `slot`-th held die in the holder tray.
pub fn holder_slot(slot: usize) -> Vec3 {
    Vec3::new(-15.0 + 5.0 * slot as f32, 0.001, -20.0)
}
