//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only; the caller owns the cadence
//! - Seeded RNG only, threaded through every generation decision
//! - No rendering, input or storage dependencies

pub mod collision;
pub mod difficulty;
pub mod field;
pub mod scroll;
pub mod state;
pub mod tick;

pub use collision::{resolve, BounceOutcome};
pub use difficulty::Difficulty;
pub use field::{choose_kind, sample_gap, PlatformField};
pub use state::{
    Avatar, Direction, Facing, Patrol, Platform, PlatformKind, Snapshot, TerminalState,
};
pub use tick::GameplaySession;
