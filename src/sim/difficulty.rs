//! Distance-based difficulty curve
//!
//! Pure function of cumulative scrolled distance; recomputed every tick, never
//! persisted. Gaps widen and the platform floor drops as the run progresses.

use crate::tuning::Tuning;

/// Current generation targets
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Difficulty {
    /// Smallest vertical gap to sample
    pub min_gap: f32,
    /// Largest vertical gap to sample (exclusive)
    pub max_gap: f32,
    /// Field is replenished up to this many platforms
    pub min_platforms: u32,
}

impl Difficulty {
    /// Normalized progress through the ramp, saturating at the win distance
    pub fn ratio(tuning: &Tuning, distance: f32) -> f32 {
        (distance / tuning.win_distance).clamp(0.0, 1.0)
    }

    pub fn compute(tuning: &Tuning, distance: f32) -> Self {
        let ratio = Self::ratio(tuning, distance);

        let mut min_gap = tuning.min_gap_start + tuning.min_gap_rise * ratio;
        let max_gap =
            tuning.max_gap_start + (tuning.max_feasible_gap - tuning.max_gap_start) * ratio;
        // Keep a sampling window open between the bounds
        if min_gap > max_gap - tuning.gap_spread {
            min_gap = max_gap - tuning.gap_spread;
        }

        let drop = tuning.min_platforms_start - tuning.min_platforms_floor;
        let min_platforms = tuning.min_platforms_start - (drop as f32 * ratio).floor() as u32;

        Self {
            min_gap,
            max_gap,
            min_platforms,
        }
    }
}
