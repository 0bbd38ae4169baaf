//! Simulation state and core value types
//!
//! All state the session mutates per tick lives here. Types are plain data
//! with serde derives so a run can be captured and replayed.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::tuning::Tuning;

/// Horizontal steering input, applied on the next tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Direction {
    Left,
    #[default]
    Idle,
    Right,
}

impl Direction {
    /// Signed unit factor for horizontal integration
    #[inline]
    pub fn as_f32(self) -> f32 {
        match self {
            Direction::Left => -1.0,
            Direction::Idle => 0.0,
            Direction::Right => 1.0,
        }
    }
}

/// Which way the avatar sprite points; sticky across idle stretches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Facing {
    Left,
    #[default]
    Right,
}

/// The player's avatar
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Avatar {
    pub pos: Vec2,
    /// Vertical velocity; positive is downward (screen coordinates)
    pub vel_y: f32,
    pub direction: Direction,
    pub facing: Facing,
    /// Cumulative upward scroll, monotonically non-decreasing
    pub distance: f32,
}

impl Avatar {
    pub fn new(spawn: Vec2) -> Self {
        Self {
            pos: spawn,
            vel_y: 0.0,
            direction: Direction::Idle,
            facing: Facing::Right,
            distance: 0.0,
        }
    }

    /// Update steering; facing only follows non-idle input
    pub fn set_direction(&mut self, direction: Direction) {
        self.direction = direction;
        match direction {
            Direction::Left => self.facing = Facing::Left,
            Direction::Right => self.facing = Facing::Right,
            Direction::Idle => {}
        }
    }

    /// Toroidal wrap of x into [-margin, width + margin)
    pub fn wrap_x(&mut self, width: f32, margin: f32) {
        let span = width + 2.0 * margin;
        self.pos.x = -margin + (self.pos.x + margin).rem_euclid(span);
    }
}

/// Platform behavior categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PlatformKind {
    /// Static, safe (green)
    #[default]
    Common,
    /// Patrols horizontally (blue)
    Moving,
    /// Vanishes on first bounce (white)
    Fragile,
}

/// Patrol heading for Moving platforms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Patrol {
    Left,
    #[default]
    Right,
}

impl Patrol {
    #[inline]
    pub fn as_f32(self) -> f32 {
        match self {
            Patrol::Left => -1.0,
            Patrol::Right => 1.0,
        }
    }

    #[inline]
    pub fn flipped(self) -> Self {
        match self {
            Patrol::Left => Patrol::Right,
            Patrol::Right => Patrol::Left,
        }
    }
}

/// A platform entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Platform {
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
    pub kind: PlatformKind,
    /// Patrol speed in units per tick; only meaningful for Moving
    pub speed: f32,
    pub patrol: Patrol,
}

/// Run outcome; once non-Playing the session stops simulating
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TerminalState {
    #[default]
    Playing,
    Won,
    Lost,
}

impl TerminalState {
    #[inline]
    pub fn is_over(self) -> bool {
        self != TerminalState::Playing
    }
}

/// Per-tick render snapshot consumed by a renderer collaborator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub avatar_pos: Vec2,
    pub avatar_facing: Facing,
    pub platforms: Vec<Platform>,
    pub scrolled_distance: f32,
    pub finish_line_y: f32,
    pub terminal: TerminalState,
}

impl Snapshot {
    /// Score reported to the scoreboard collaborator on Won/Lost
    pub fn final_score(&self) -> Option<u64> {
        self.terminal
            .is_over()
            .then_some(self.scrolled_distance.max(0.0) as u64)
    }
}

/// Spawn a platform of the given kind, rolling patrol speed for Moving ones
pub fn spawn_platform(
    tuning: &Tuning,
    pos: Vec2,
    kind: PlatformKind,
    rng: &mut impl rand::Rng,
) -> Platform {
    let speed = if kind == PlatformKind::Moving {
        rng.random_range(tuning.patrol_speed_min..tuning.patrol_speed_max)
    } else {
        0.0
    };
    Platform {
        pos,
        width: tuning.platform_width,
        height: tuning.platform_height,
        kind,
        speed,
        patrol: Patrol::Right,
    }
}
