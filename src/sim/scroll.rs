//! World scroll
//!
//! Whenever the avatar climbs above the canvas midline, the whole world is
//! shifted down by the overshoot and the avatar is pinned back to the
//! midline. The accumulated shift is the run's score distance.

use super::field::PlatformField;
use super::state::Avatar;

/// Apply the scroll transform for one tick; returns the shift applied
pub fn apply(
    avatar: &mut Avatar,
    field: &mut PlatformField,
    finish_line_y: &mut f32,
    canvas_height: f32,
) -> f32 {
    let midline = canvas_height / 2.0;
    if avatar.pos.y >= midline {
        return 0.0;
    }

    let delta = midline - avatar.pos.y;
    avatar.pos.y = midline;
    field.shift_y(delta);
    *finish_line_y += delta;
    avatar.distance += delta;
    delta
}
