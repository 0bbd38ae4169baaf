//! Avatar/platform collision resolution
//!
//! A platform is hit only while the avatar is falling and its position sits
//! inside the platform's hit band: x within [left - side_tolerance, right],
//! y within [top - top_tolerance, bottom]. The first platform in field order
//! that matches wins and the scan stops; a Fragile platform is removed by the
//! same bounce that triggers it.

use super::field::PlatformField;
use super::state::{Avatar, Platform, PlatformKind};
use crate::tuning::Tuning;

/// Result of a collision pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BounceOutcome {
    pub bounced: bool,
    pub removed_fragile: bool,
}

/// Check whether the avatar overlaps a platform's hit band
#[inline]
fn hits(avatar: &Avatar, platform: &Platform, tuning: &Tuning) -> bool {
    avatar.pos.x >= platform.pos.x - tuning.side_tolerance
        && avatar.pos.x <= platform.pos.x + platform.width
        && avatar.pos.y >= platform.pos.y - tuning.top_tolerance
        && avatar.pos.y <= platform.pos.y + platform.height
}

/// Resolve collisions for one tick: bounce off the first matching platform
/// while falling, removing it when Fragile.
pub fn resolve(avatar: &mut Avatar, field: &mut PlatformField, tuning: &Tuning) -> BounceOutcome {
    if avatar.vel_y <= 0.0 {
        return BounceOutcome::default();
    }

    let Some(index) = field
        .platforms()
        .iter()
        .position(|p| hits(avatar, p, tuning))
    else {
        return BounceOutcome::default();
    };

    avatar.vel_y = -tuning.jump_force;
    let removed_fragile = field.platforms()[index].kind == PlatformKind::Fragile;
    if removed_fragile {
        field.remove(index);
    }

    BounceOutcome {
        bounced: true,
        removed_fragile,
    }
}
