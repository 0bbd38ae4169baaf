//! Data-driven game balance
//!
//! Every gameplay constant lives in one injectable struct so tests can run the
//! simulation at different scales. `Default` is the shipping balance.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Kind-selection weights for one difficulty tier.
///
/// Common takes whatever probability mass is left over, so
/// `moving + fragile` must stay <= 1.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct KindWeights {
    pub moving: f32,
    pub fragile: f32,
}

/// Complete gameplay tuning
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tuning {
    // === World ===
    pub canvas_width: f32,
    pub canvas_height: f32,
    /// Horizontal overshoot allowed past either canvas edge before wrapping
    pub wrap_margin: f32,
    /// Scrolled distance that wins the run
    pub win_distance: f32,
    /// Finish-line y at session start (purely visual marker)
    pub finish_line_start: f32,

    // === Avatar physics ===
    /// Vertical velocity added per tick (not per second)
    pub gravity: f32,
    /// Upward velocity applied on bounce
    pub jump_force: f32,
    /// Horizontal speed in units per second
    pub move_speed: f32,
    pub spawn_position: Vec2,

    // === Platforms ===
    pub platform_width: f32,
    pub platform_height: f32,
    /// Patrol speed range for Moving platforms, sampled once at creation
    pub patrol_speed_min: f32,
    pub patrol_speed_max: f32,

    // === Difficulty curve ===
    pub min_gap_start: f32,
    pub max_gap_start: f32,
    /// How far min_gap rises over the full ramp
    pub min_gap_rise: f32,
    /// Hand-tuned ceiling: the largest gap the jump arc can still clear
    pub max_feasible_gap: f32,
    /// Guaranteed sampling window between min and max gap
    pub gap_spread: f32,
    pub min_platforms_start: u32,
    pub min_platforms_floor: u32,

    // === Kind tiers ===
    pub mid_tier_distance: f32,
    pub hard_tier_distance: f32,
    pub easy_weights: KindWeights,
    pub mid_weights: KindWeights,
    pub hard_weights: KindWeights,

    // === Generation ===
    /// Attempt budget for non-overlapping placement; the last candidate is
    /// accepted when the budget runs out
    pub placement_attempts: u32,
    /// Reachability clearance around the avatar's jump, both axes
    pub jump_footprint: f32,
    /// Initial field is seeded from this far below the canvas bottom...
    pub field_seed_below: f32,
    /// ...up to this y above the canvas top
    pub field_seed_top: f32,

    // === Collision band ===
    /// Horizontal slack on the left platform edge
    pub side_tolerance: f32,
    /// Vertical slack above the platform top
    pub top_tolerance: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            canvas_width: 600.0,
            canvas_height: 800.0,
            wrap_margin: 30.0,
            win_distance: 15000.0,
            finish_line_start: -14650.0,

            gravity: 20.0,
            jump_force: 900.0,
            move_speed: 400.0,
            spawn_position: Vec2::new(300.0, 700.0),

            platform_width: 100.0,
            platform_height: 20.0,
            patrol_speed_min: 1.0,
            patrol_speed_max: 2.0,

            min_gap_start: 80.0,
            max_gap_start: 120.0,
            min_gap_rise: 100.0,
            max_feasible_gap: 325.0,
            gap_spread: 20.0,
            min_platforms_start: 7,
            min_platforms_floor: 4,

            mid_tier_distance: 2500.0,
            hard_tier_distance: 7500.0,
            easy_weights: KindWeights {
                moving: 0.3,
                fragile: 0.2,
            },
            mid_weights: KindWeights {
                moving: 0.4,
                fragile: 0.35,
            },
            hard_weights: KindWeights {
                moving: 0.5,
                fragile: 0.5,
            },

            placement_attempts: 20,
            jump_footprint: 80.0,
            field_seed_below: 200.0,
            field_seed_top: -2000.0,

            side_tolerance: 30.0,
            top_tolerance: 2.0,
        }
    }
}

impl Tuning {
    /// Kind weights for the tier the given distance falls in
    pub fn weights_at(&self, distance: f32) -> KindWeights {
        if distance >= self.hard_tier_distance {
            self.hard_weights
        } else if distance >= self.mid_tier_distance {
            self.mid_weights
        } else {
            self.easy_weights
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_weights_sum_below_one() {
        let t = Tuning::default();
        for w in [t.easy_weights, t.mid_weights, t.hard_weights] {
            assert!(w.moving + w.fragile <= 1.0 + f32::EPSILON);
        }
    }

    #[test]
    fn test_tier_lookup() {
        let t = Tuning::default();
        assert_eq!(t.weights_at(0.0).moving, t.easy_weights.moving);
        assert_eq!(t.weights_at(2500.0).moving, t.mid_weights.moving);
        assert_eq!(t.weights_at(7499.9).fragile, t.mid_weights.fragile);
        assert_eq!(t.weights_at(7500.0).moving, t.hard_weights.moving);
        assert_eq!(t.weights_at(20000.0).fragile, t.hard_weights.fragile);
    }
}
