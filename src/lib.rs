//! Sky Hopper - an endless vertical platformer simulation core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (avatar physics, platform field, scroll, collisions)
//! - `tuning`: Injectable gameplay constants
//! - `scoreboard`: Final-score list with pluggable storage
//!
//! Rendering, input capture and the wall-clock loop are external collaborators:
//! they feed a direction into the session, call [`sim::GameplaySession::tick`]
//! at a fixed nominal rate, and draw the returned snapshot.

pub mod scoreboard;
pub mod sim;
pub mod tuning;

pub use scoreboard::{ScoreStore, Scoreboard};
pub use tuning::Tuning;

/// Loop constants for scheduler collaborators
pub mod consts {
    /// Nominal simulation rate the tuning defaults are balanced for
    pub const NOMINAL_FPS: f32 = 60.0;
    /// Maximum catch-up steps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
}
