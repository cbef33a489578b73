//! Logical state of one physical die.

use glam::Vec3;

pub const NUM_DICE: usize = 5;

/// Stable die identity for a session (0..NUM_DICE).
pub type DieId = u8;

#[derive(Debug, Clone, PartialEq)]
pub struct Die {
    id: DieId,
    face_value: Option<u8>,
    is_held: bool,
    is_settled: bool,
    /// Where the die was resting before it was moved into the holder.
    home_position: Option<Vec3>,
}

impl Die {
    pub fn new(id: DieId) -> Self {
        Self {
            id,
            face_value: None,
            is_held: false,
            is_settled: false,
            home_position: None,
        }
    }

    pub fn id(&self) -> DieId {
        self.id
    }

    /// Resolved face (1..=6), `None` while the die is unresolved.
    pub fn face_value(&self) -> Option<u8> {
        self.face_value
    }

    pub fn is_held(&self) -> bool {
        self.is_held
    }

    pub fn is_settled(&self) -> bool {
        self.is_settled
    }

    pub fn is_live(&self) -> bool {
        !self.is_held
    }

    pub fn home_position(&self) -> Option<Vec3> {
        self.home_position
    }

    /// Hold the die; `current` becomes its home unless one is already recorded.
    ///
    /// Returns `false` if the die was already held.
    pub fn hold(&mut self, current: Vec3) -> bool {
        if self.is_held {
            return false;
        }
        self.is_held = true;
        if self.home_position.is_none() {
            self.home_position = Some(current);
        }
        true
    }

    /// Release the die, returning the home position it must be restored to.
    ///
    /// The caller forwards the position to the physics side; `None` means the die was
    /// not held.
    pub fn release(&mut self) -> Option<Vec3> {
        if !self.is_held {
            return None;
        }
        self.is_held = false;
        self.home_position.take()
    }

    /// Record the face physics reported at rest. Held dice keep their value.
    ///
    /// Returns `false` when ignored.
    pub fn mark_settled(&mut self, value: u8) -> bool {
        if self.is_held {
            return false;
        }
        self.is_settled = true;
        self.face_value = Some(value);
        true
    }

    /// The die has been thrown: it is moving and its face is unknown again.
    pub fn begin_roll(&mut self) {
        if self.is_held {
            return;
        }
        self.is_settled = false;
        self.face_value = None;
    }

    pub fn reset_for_new_turn(&mut self) {
        if self.is_held {
            return;
        }
        self.is_settled = false;
        self.face_value = None;
        self.home_position = None;
    }
}

/// Five fresh dice with ids 0..NUM_DICE.
pub fn new_dice() -> [Die; NUM_DICE] {
    std::array::from_fn(|i| Die::new(i as DieId))
}
