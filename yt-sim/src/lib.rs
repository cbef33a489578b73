//! yt-sim: headless dice physics, face reading and cup animation.

pub mod chance;
pub mod cup;
pub mod face;
pub mod physics;

pub use chance::{keyed_throw, ChanceMode, Throw, ThrowKey};
pub use cup::{ease_in_out, CupMotion, Pose};
pub use face::{face_up, orientation_for, FACE_TABLE};
pub use physics::{SimPhysics, DT};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
