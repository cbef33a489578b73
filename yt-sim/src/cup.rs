//! Cup pour animation as a pure function of time.
//!
//! The render loop samples `CupMotion::pose(t)` once per frame; nothing here touches
//! turn or score state.
//!
//! Timeline (milliseconds):
//! - `0..pour_ms`: lift, slide back along +X and tilt about Z with cosine easing,
//! - then `hold_ms` at full tilt while the dice pour out,
//! - then `return_ms` easing back to the rest pose.

use glam::{Quat, Vec3};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub position: Vec3,
    pub rotation: Quat,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CupMotion {
    pub rest: Pose,
    pub pour_ms: f32,
    pub hold_ms: f32,
    pub return_ms: f32,
    pub lift: f32,
    pub slide: f32,
    /// Full tilt about Z, radians (negative tips the mouth toward -X).
    pub max_tilt: f32,
}

impl CupMotion {
    pub fn new(rest_position: Vec3) -> Self {
        Self {
            rest: Pose {
                position: rest_position,
                rotation: Quat::from_rotation_y(std::f32::consts::PI),
            },
            pour_ms: 4000.0,
            hold_ms: 2000.0,
            return_ms: 1000.0,
            lift: 2.5,
            slide: 15.0,
            max_tilt: -1.37,
        }
    }

    pub fn duration_ms(&self) -> f32 {
        self.pour_ms + self.hold_ms + self.return_ms
    }

    pub fn is_done(&self, t_ms: f32) -> bool {
        t_ms >= self.duration_ms()
    }

    fn poured(&self, ease: f32) -> Pose {
        Pose {
            position: self.rest.position + Vec3::new(self.slide * ease, self.lift * ease, 0.0),
            rotation: self.rest.rotation * Quat::from_rotation_z(self.max_tilt * ease),
        }
    }

    /// Cup pose `t_ms` after the pour started. Clamped to the rest pose outside the
    /// timeline.
    pub fn pose(&self, t_ms: f32) -> Pose {
        if t_ms <= 0.0 || self.is_done(t_ms) {
            return self.rest;
        }
        if t_ms < self.pour_ms {
            return self.poured(ease_in_out(t_ms / self.pour_ms));
        }
        let full = self.poured(1.0);
        let back_start = self.pour_ms + self.hold_ms;
        if t_ms < back_start {
            return full;
        }
        let e = ease_in_out((t_ms - back_start) / self.return_ms);
        Pose {
            position: full.position.lerp(self.rest.position, e),
            rotation: full.rotation.slerp(self.rest.rotation, e),
        }
    }
}

/// Cosine ease-in-out on `[0, 1]`.
pub fn ease_in_out(p: f32) -> f32 {
    let p = p.clamp(0.0, 1.0);
    -((std::f32::consts::PI * p).cos() - 1.0) / 2.0
}
