//! Platform field: generation, placement, recycling, replenishment
//!
//! The field owns the live platform set. Platforms that scroll below the
//! visible band are repositioned above the highest current platform with a
//! freshly rolled kind, so the set is recycled rather than churned; the
//! replenishment pass then tops the field up to the difficulty floor.

use glam::Vec2;
use rand::Rng;

use super::difficulty::Difficulty;
use super::state::{spawn_platform, Platform, PlatformKind};
use crate::tuning::Tuning;

/// The live platform set, owned exclusively by the session
#[derive(Debug, Clone)]
pub struct PlatformField {
    pub(crate) platforms: Vec<Platform>,
}

impl PlatformField {
    /// Build the initial field: one platform per sampled gap from just below
    /// the canvas bottom up to the seed ceiling, plus a guaranteed Common
    /// foothold directly beneath the spawn position.
    pub fn populate(tuning: &Tuning, spawn: Vec2, rng: &mut impl Rng) -> Self {
        let mut field = Self {
            platforms: Vec::new(),
        };
        let difficulty = Difficulty::compute(tuning, 0.0);

        let mut last_y = tuning.canvas_height + tuning.field_seed_below;
        while last_y > tuning.field_seed_top {
            last_y -= sample_gap(&difficulty, rng);
            let mut platform = field.generate_at(tuning, &difficulty, 0.0, last_y, rng);
            // The very first platform is a safe foothold no matter the roll
            if field.platforms.is_empty() {
                platform.kind = PlatformKind::Common;
                platform.speed = 0.0;
            }
            field.platforms.push(platform);
        }

        let foothold = Vec2::new(
            spawn.x - tuning.platform_width / 2.0,
            spawn.y + tuning.platform_height * 2.0,
        );
        field
            .platforms
            .push(spawn_platform(tuning, foothold, PlatformKind::Common, rng));

        field
    }

    pub fn platforms(&self) -> &[Platform] {
        &self.platforms
    }

    pub fn len(&self) -> usize {
        self.platforms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.platforms.is_empty()
    }

    /// y of the highest (lowest-y) platform
    pub fn top_y(&self) -> Option<f32> {
        self.platforms
            .iter()
            .map(|p| p.pos.y)
            .min_by(|a, b| a.total_cmp(b))
    }

    /// Shift every platform vertically (world scroll)
    pub fn shift_y(&mut self, delta: f32) {
        for p in &mut self.platforms {
            p.pos.y += delta;
        }
    }

    /// Remove and return the platform at `index`
    pub fn remove(&mut self, index: usize) -> Platform {
        self.platforms.remove(index)
    }

    /// Roll a new platform one gap above `reference_y`
    pub fn generate_at(
        &self,
        tuning: &Tuning,
        difficulty: &Difficulty,
        distance: f32,
        y: f32,
        rng: &mut impl Rng,
    ) -> Platform {
        let x = self.place_non_overlapping(tuning, y, None, rng);
        let kind = choose_kind(tuning, distance, rng);
        spawn_platform(tuning, Vec2::new(x, y), kind, rng)
    }

    /// Find an x for a platform at `y` that keeps it reachable: candidates
    /// closer than the jump footprint to a vertically-nearby platform are
    /// rejected. When the attempt budget runs out the last candidate is
    /// accepted anyway; it may overlap, but never strands the player.
    pub fn place_non_overlapping(
        &self,
        tuning: &Tuning,
        y: f32,
        exclude: Option<usize>,
        rng: &mut impl Rng,
    ) -> f32 {
        let reach = tuning.jump_footprint;
        let mut x = 0.0;
        for _ in 0..tuning.placement_attempts {
            x = rng.random_range(0.0..tuning.canvas_width - tuning.platform_width);
            let blocked = self.platforms.iter().enumerate().any(|(i, p)| {
                Some(i) != exclude && (p.pos.y - y).abs() < reach && (p.pos.x - x).abs() < reach
            });
            if !blocked {
                return x;
            }
        }
        x
    }

    /// Advance Moving platforms one patrol step, bouncing off canvas edges
    pub fn advance_moving(&mut self, canvas_width: f32) {
        for p in &mut self.platforms {
            if p.kind != PlatformKind::Moving {
                continue;
            }
            p.pos.x += p.speed * p.patrol.as_f32();
            if p.pos.x < 0.0 {
                p.pos.x = 0.0;
                p.patrol = p.patrol.flipped();
            } else if p.pos.x + p.width > canvas_width {
                p.pos.x = canvas_width - p.width;
                p.patrol = p.patrol.flipped();
            }
        }
    }

    /// Reposition platforms that scrolled past the canvas bottom above the
    /// highest remaining platform, re-rolling kind, speed and patrol.
    pub fn recycle_offscreen(
        &mut self,
        tuning: &Tuning,
        difficulty: &Difficulty,
        distance: f32,
        rng: &mut impl Rng,
    ) {
        for i in 0..self.platforms.len() {
            if self.platforms[i].pos.y <= tuning.canvas_height {
                continue;
            }
            // A lone platform has no others to reference; reuse its prior y
            let reference = self
                .platforms
                .iter()
                .enumerate()
                .filter(|&(j, _)| j != i)
                .map(|(_, p)| p.pos.y)
                .fold(f32::INFINITY, f32::min);
            let reference = if reference.is_finite() {
                reference
            } else {
                self.platforms[i].pos.y
            };

            let y = reference - sample_gap(difficulty, rng);
            let x = self.place_non_overlapping(tuning, y, Some(i), rng);
            let kind = choose_kind(tuning, distance, rng);
            self.platforms[i] = spawn_platform(tuning, Vec2::new(x, y), kind, rng);
        }
    }

    /// Top the field back up to the difficulty floor, stacking new platforms
    /// above the current highest one.
    pub fn replenish(
        &mut self,
        tuning: &Tuning,
        difficulty: &Difficulty,
        distance: f32,
        rng: &mut impl Rng,
    ) {
        while (self.platforms.len() as u32) < difficulty.min_platforms {
            let reference = self
                .top_y()
                .unwrap_or(tuning.canvas_height + tuning.field_seed_below);
            let y = reference - sample_gap(difficulty, rng);
            let platform = self.generate_at(tuning, difficulty, distance, y, rng);
            self.platforms.push(platform);
        }
    }
}

/// Sample a vertical gap from the current difficulty window
#[inline]
pub fn sample_gap(difficulty: &Difficulty, rng: &mut impl Rng) -> f32 {
    rng.random_range(difficulty.min_gap..difficulty.max_gap)
}

/// Tiered kind selection: Moving and Fragile rates grow with distance and
/// Common absorbs the remainder (dropping to zero in the hard tier).
pub fn choose_kind(tuning: &Tuning, distance: f32, rng: &mut impl Rng) -> PlatformKind {
    let weights = tuning.weights_at(distance);
    let roll: f32 = rng.random();
    if roll < weights.moving {
        PlatformKind::Moving
    } else if roll < weights.moving + weights.fragile {
        PlatformKind::Fragile
    } else {
        PlatformKind::Common
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::Patrol;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn rng() -> Pcg32 {
        Pcg32::seed_from_u64(7)
    }

    #[test]
    fn test_populate_covers_seed_band() {
        let t = Tuning::default();
        let mut rng = rng();
        let field = PlatformField::populate(&t, t.spawn_position, &mut rng);

        // 2800 units of band at gaps under 120 gives well over the floor
        assert!(field.len() > 20);
        for p in field.platforms() {
            assert!(p.pos.x >= 0.0);
            assert!(p.pos.x <= t.canvas_width - t.platform_width);
        }
    }

    #[test]
    fn test_populate_first_platform_is_common() {
        let t = Tuning::default();
        for seed in 0..20 {
            let mut rng = Pcg32::seed_from_u64(seed);
            let field = PlatformField::populate(&t, t.spawn_position, &mut rng);
            assert_eq!(field.platforms()[0].kind, PlatformKind::Common);
        }
    }

    #[test]
    fn test_populate_places_foothold_beneath_spawn() {
        let t = Tuning::default();
        let mut rng = rng();
        let field = PlatformField::populate(&t, t.spawn_position, &mut rng);

        let foothold = field.platforms().last().unwrap();
        assert_eq!(foothold.kind, PlatformKind::Common);
        assert_eq!(foothold.pos.x, t.spawn_position.x - 50.0);
        assert_eq!(foothold.pos.y, t.spawn_position.y + 40.0);
    }

    #[test]
    fn test_choose_kind_hard_tier_never_common() {
        let t = Tuning::default();
        let mut rng = rng();
        for _ in 0..200 {
            let kind = choose_kind(&t, 8000.0, &mut rng);
            assert_ne!(kind, PlatformKind::Common);
        }
    }

    #[test]
    fn test_choose_kind_easy_tier_covers_all_kinds() {
        let t = Tuning::default();
        let mut rng = rng();
        let mut seen = [false; 3];
        for _ in 0..500 {
            match choose_kind(&t, 0.0, &mut rng) {
                PlatformKind::Common => seen[0] = true,
                PlatformKind::Moving => seen[1] = true,
                PlatformKind::Fragile => seen[2] = true,
            }
        }
        assert_eq!(seen, [true, true, true]);
    }

    #[test]
    fn test_moving_platforms_roll_speed_in_range() {
        let t = Tuning::default();
        let mut rng = rng();
        let field = PlatformField::populate(&t, t.spawn_position, &mut rng);
        for p in field.platforms() {
            match p.kind {
                PlatformKind::Moving => {
                    assert!(p.speed >= t.patrol_speed_min && p.speed < t.patrol_speed_max)
                }
                _ => assert_eq!(p.speed, 0.0),
            }
        }
    }

    #[test]
    fn test_placement_fallback_accepts_last_candidate() {
        let t = Tuning::default();
        let mut rng = rng();
        // Wall off the whole row so every attempt is rejected
        let mut field = PlatformField {
            platforms: Vec::new(),
        };
        let mut x = 0.0;
        while x < t.canvas_width {
            field.platforms.push(spawn_platform(
                &t,
                Vec2::new(x, 100.0),
                PlatformKind::Common,
                &mut rng,
            ));
            x += 40.0;
        }

        let placed = field.place_non_overlapping(&t, 100.0, None, &mut rng);
        assert!(placed >= 0.0);
        assert!(placed < t.canvas_width - t.platform_width);
    }

    #[test]
    fn test_advance_moving_clamps_and_flips_left() {
        let t = Tuning::default();
        let mut field = PlatformField {
            platforms: vec![Platform {
                pos: Vec2::new(0.5, 100.0),
                width: t.platform_width,
                height: t.platform_height,
                kind: PlatformKind::Moving,
                speed: 1.5,
                patrol: Patrol::Left,
            }],
        };
        field.advance_moving(t.canvas_width);

        let p = &field.platforms()[0];
        assert_eq!(p.pos.x, 0.0);
        assert_eq!(p.patrol, Patrol::Right);
    }

    #[test]
    fn test_advance_moving_clamps_and_flips_right() {
        let t = Tuning::default();
        let mut field = PlatformField {
            platforms: vec![Platform {
                pos: Vec2::new(499.5, 100.0),
                width: t.platform_width,
                height: t.platform_height,
                kind: PlatformKind::Moving,
                speed: 1.5,
                patrol: Patrol::Right,
            }],
        };
        field.advance_moving(t.canvas_width);

        let p = &field.platforms()[0];
        assert_eq!(p.pos.x, t.canvas_width - t.platform_width);
        assert_eq!(p.patrol, Patrol::Left);
    }

    #[test]
    fn test_recycle_moves_offscreen_platform_above_field() {
        let t = Tuning::default();
        let mut rng = rng();
        let difficulty = Difficulty::compute(&t, 0.0);
        let mut field = PlatformField {
            platforms: vec![
                spawn_platform(&t, Vec2::new(10.0, 300.0), PlatformKind::Common, &mut rng),
                spawn_platform(&t, Vec2::new(200.0, 150.0), PlatformKind::Common, &mut rng),
                spawn_platform(&t, Vec2::new(400.0, 900.0), PlatformKind::Common, &mut rng),
            ],
        };

        field.recycle_offscreen(&t, &difficulty, 0.0, &mut rng);

        assert_eq!(field.len(), 3);
        let recycled = &field.platforms()[2];
        // Repositioned one gap above the highest other platform (y = 150)
        assert!(recycled.pos.y <= 150.0 - difficulty.min_gap);
        assert!(recycled.pos.y > 150.0 - difficulty.max_gap);
    }

    #[test]
    fn test_recycle_lone_platform_uses_own_y() {
        let t = Tuning::default();
        let mut rng = rng();
        let difficulty = Difficulty::compute(&t, 0.0);
        let mut field = PlatformField {
            platforms: vec![spawn_platform(
                &t,
                Vec2::new(10.0, 850.0),
                PlatformKind::Common,
                &mut rng,
            )],
        };

        field.recycle_offscreen(&t, &difficulty, 0.0, &mut rng);

        let p = &field.platforms()[0];
        assert!(p.pos.y <= 850.0 - difficulty.min_gap);
        assert!(p.pos.y > 850.0 - difficulty.max_gap);
    }

    #[test]
    fn test_replenish_reaches_difficulty_floor() {
        let t = Tuning::default();
        let mut rng = rng();
        let difficulty = Difficulty::compute(&t, 0.0);
        let mut field = PlatformField {
            platforms: vec![spawn_platform(
                &t,
                Vec2::new(10.0, 400.0),
                PlatformKind::Common,
                &mut rng,
            )],
        };

        field.replenish(&t, &difficulty, 0.0, &mut rng);

        assert_eq!(field.len() as u32, difficulty.min_platforms);
        // Each addition stacks above the previous minimum
        let top = field.top_y().unwrap();
        assert!(top < 400.0);
    }
}
