//! Gameplay session and the per-tick state machine
//!
//! One [`GameplaySession`] owns the avatar, the platform field, the finish
//! line and the terminal state, plus the seeded RNG every generation decision
//! draws from. A tick advances the world by one fixed time slice:
//!
//! 1. refresh difficulty from the scrolled distance
//! 2. integrate avatar physics and wrap x
//! 3. win check, then loss check (both before scrolling)
//! 4. scroll the world to keep the avatar above the midline
//! 5. resolve collisions
//! 6. field maintenance: patrol, recycle, replenish
//!
//! Won and Lost are absorbing: a terminal tick mutates nothing and re-reports
//! the same snapshot.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::collision;
use super::difficulty::Difficulty;
use super::field::PlatformField;
use super::scroll;
use super::state::{Avatar, Direction, Snapshot, TerminalState};
use crate::tuning::Tuning;

/// One run of the game, from spawn to Won or Lost
#[derive(Debug, Clone)]
pub struct GameplaySession {
    pub tuning: Tuning,
    /// Run seed for reproducibility
    pub seed: u64,
    pub avatar: Avatar,
    pub field: PlatformField,
    pub finish_line_y: f32,
    pub terminal: TerminalState,
    rng: Pcg32,
}

impl GameplaySession {
    pub fn new(tuning: Tuning, seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let avatar = Avatar::new(tuning.spawn_position);
        let field = PlatformField::populate(&tuning, avatar.pos, &mut rng);
        log::info!(
            "session start: seed {} with {} platforms",
            seed,
            field.len()
        );

        Self {
            finish_line_y: tuning.finish_line_start,
            tuning,
            seed,
            avatar,
            field,
            terminal: TerminalState::Playing,
            rng,
        }
    }

    /// Steering input from the input collaborator; applied on the next tick
    pub fn set_direction(&mut self, direction: Direction) {
        self.avatar.set_direction(direction);
    }

    /// Final score for the scoreboard collaborator, once the run is over
    pub fn final_score(&self) -> Option<u64> {
        self.terminal
            .is_over()
            .then_some(self.avatar.distance.max(0.0) as u64)
    }

    /// Advance the simulation by one frame at the given nominal rate
    pub fn tick(&mut self, fps: f32) -> Snapshot {
        if self.terminal.is_over() {
            return self.snapshot();
        }

        let difficulty = Difficulty::compute(&self.tuning, self.avatar.distance);

        // Physics integration
        self.avatar.vel_y += self.tuning.gravity;
        self.avatar.pos.y += self.avatar.vel_y / fps;
        self.avatar.pos.x += self.avatar.direction.as_f32() * self.tuning.move_speed / fps;
        self.avatar
            .wrap_x(self.tuning.canvas_width, self.tuning.wrap_margin);

        if self.avatar.distance >= self.tuning.win_distance {
            self.terminal = TerminalState::Won;
            log::info!("run won at distance {:.0}", self.avatar.distance);
            return self.snapshot();
        }
        if self.avatar.pos.y > self.tuning.canvas_height {
            self.terminal = TerminalState::Lost;
            log::info!("run lost at distance {:.0}", self.avatar.distance);
            return self.snapshot();
        }

        scroll::apply(
            &mut self.avatar,
            &mut self.field,
            &mut self.finish_line_y,
            self.tuning.canvas_height,
        );

        collision::resolve(&mut self.avatar, &mut self.field, &self.tuning);

        self.field.advance_moving(self.tuning.canvas_width);
        self.field.recycle_offscreen(
            &self.tuning,
            &difficulty,
            self.avatar.distance,
            &mut self.rng,
        );
        self.field
            .replenish(&self.tuning, &difficulty, self.avatar.distance, &mut self.rng);

        self.snapshot()
    }

    /// Current render snapshot
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            avatar_pos: self.avatar.pos,
            avatar_facing: self.avatar.facing,
            platforms: self.field.platforms().to_vec(),
            scrolled_distance: self.avatar.distance,
            finish_line_y: self.finish_line_y,
            terminal: self.terminal,
        }
    }
}
