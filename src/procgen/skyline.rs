//! Skyline generator: turns a seeded RNG into a set of building plans.
//!
//! Every random draw the scene ever makes happens here, at generation time.
//! The plans are plain data, so the whole skyline is reproducible from one
//! seed and testable without a renderer. Spawning them into meshes is
//! `render::skyline_spawner`'s job.

use bevy::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use smallvec::SmallVec;
use std::f32::consts::TAU;

pub struct SkylinePlugin;

impl Plugin for SkylinePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SkylineConfig>()
            .init_resource::<SkylinePlans>()
            .add_systems(Startup, generate_plans);
    }
}

/// Smallest dimension any derived sub-volume may have. Keeps shrink factors
/// and fractional sizing from ever emitting a degenerate cuboid.
pub const MIN_DIM: f32 = 0.05;

/// Numeric ranges and probabilities for skyline generation.
#[derive(Resource)]
pub struct SkylineConfig {
    /// How many buildings to place around the ring.
    pub count: usize,
    /// Seed for all generation draws.
    pub seed: u64,
    /// Footprint width/depth range.
    pub footprint_min: f32,
    pub footprint_max: f32,
    /// Main volume height range.
    pub height_min: f32,
    pub height_max: f32,
    /// Probability of the gilded facade variant (the rest are slate).
    pub gilded_probability: f32,
    /// Probability of a symmetric wing pair on wide buildings.
    pub wing_probability: f32,
    /// A building narrower than this never grows wings.
    pub wing_min_width: f32,
    /// Probability of a tiered crown on tall buildings.
    pub tier_probability: f32,
    /// A building shorter than this never grows tiers.
    pub tier_min_height: f32,
    /// Per-tier footprint shrink factor range (relative to the volume below).
    pub tier_shrink_min: f32,
    pub tier_shrink_max: f32,
    /// Probability that the last tier carries an antenna.
    pub antenna_probability: f32,
    /// Placement ring radius range.
    pub ring_min: f32,
    pub ring_max: f32,
    /// Construction start delay range is [0, delay_max] seconds.
    pub delay_max: f32,
    /// Construction speed range, in progress units per second.
    pub speed_min: f32,
    pub speed_max: f32,
}

impl Default for SkylineConfig {
    fn default() -> Self {
        Self {
            count: 40,
            seed: 42,
            footprint_min: 0.6,
            footprint_max: 1.8,
            height_min: 1.0,
            height_max: 5.5,
            gilded_probability: 0.4,
            wing_probability: 0.5,
            wing_min_width: 1.2,
            tier_probability: 0.7,
            tier_min_height: 2.0,
            tier_shrink_min: 0.6,
            tier_shrink_max: 0.8,
            antenna_probability: 0.5,
            ring_min: 1.3,
            ring_max: 6.3,
            delay_max: 3.0,
            speed_min: 0.3,
            speed_max: 0.8,
        }
    }
}

/// Facade variant, chosen per building by a weighted coin flip.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Facade {
    /// Dark blue-grey tower, matte.
    Slate,
    /// Warm gold-tinted glass with lit windows.
    Gilded,
}

/// A symmetric pair of side volumes flush against the main block.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WingPair {
    /// Size of one wing (width, height, depth).
    pub size: Vec3,
    /// Lateral offset of each wing center from the building center; wings
    /// sit at +offset and -offset so they touch the main block's faces.
    pub offset: f32,
}

/// One crown tier. `base_y` is measured from the building's ground plane,
/// so each tier's base rests exactly on the top of the volume below it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tier {
    pub footprint: Vec2,
    pub height: f32,
    pub base_y: f32,
}

/// Thin mast on top of the last tier.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Antenna {
    pub height: f32,
    pub base_y: f32,
}

/// Everything needed to spawn and animate one building. Immutable once
/// generated; the only per-building state that changes after this is the
/// build progress on the spawned entity.
#[derive(Clone, Debug, PartialEq)]
pub struct BuildingPlan {
    /// Main volume footprint (width, depth).
    pub footprint: Vec2,
    /// Main volume height.
    pub height: f32,
    pub facade: Facade,
    /// Index into the facade palette for this variant.
    pub shade: usize,
    pub wings: Option<WingPair>,
    pub tiers: SmallVec<[Tier; 3]>,
    pub antenna: Option<Antenna>,
    /// Polar placement around the scene origin.
    pub angle: f32,
    pub radius: f32,
    /// Whole-building rotation around its own vertical axis.
    pub yaw: f32,
    /// Seconds before this building starts rising.
    pub delay: f32,
    /// Build progress gained per second once rising.
    pub speed: f32,
}

impl BuildingPlan {
    /// Ground-contact point in world space (before the skyline turntable).
    pub fn position(&self) -> Vec3 {
        Vec3::new(
            self.angle.cos() * self.radius,
            0.0,
            self.angle.sin() * self.radius,
        )
    }

    /// Height of the whole massing including tiers and antenna.
    pub fn total_height(&self) -> f32 {
        let crown = self
            .tiers
            .last()
            .map(|t| t.base_y + t.height)
            .unwrap_or(self.height);
        crown + self.antenna.map(|a| a.height).unwrap_or(0.0)
    }
}

/// Plans produced once at startup and consumed by the spawner.
#[derive(Resource, Default)]
pub struct SkylinePlans {
    pub buildings: Vec<BuildingPlan>,
    pub generated: bool,
}

fn generate_plans(mut plans: ResMut<SkylinePlans>, config: Res<SkylineConfig>) {
    let mut rng = StdRng::seed_from_u64(config.seed);
    plans.buildings = generate_skyline(&config, &mut rng);
    plans.generated = true;

    let tiered = plans.buildings.iter().filter(|b| !b.tiers.is_empty()).count();
    let winged = plans.buildings.iter().filter(|b| b.wings.is_some()).count();
    info!(
        "Generated skyline: {} buildings ({} tiered, {} winged, seed {})",
        plans.buildings.len(),
        tiered,
        winged,
        config.seed
    );
}

/// Generate the full set of building plans from an injected RNG.
pub fn generate_skyline(config: &SkylineConfig, rng: &mut StdRng) -> Vec<BuildingPlan> {
    (0..config.count).map(|_| plan_building(config, rng)).collect()
}

fn plan_building(config: &SkylineConfig, rng: &mut StdRng) -> BuildingPlan {
    let footprint = Vec2::new(
        rng.gen_range(config.footprint_min..config.footprint_max),
        rng.gen_range(config.footprint_min..config.footprint_max),
    );
    let height = rng.gen_range(config.height_min..config.height_max);

    let facade = if rng.gen::<f32>() < config.gilded_probability {
        Facade::Gilded
    } else {
        Facade::Slate
    };
    let shade = rng.gen_range(0..3);

    // Narrow buildings never roll for wings.
    let wings = if footprint.x > config.wing_min_width && rng.gen::<f32>() < config.wing_probability
    {
        Some(plan_wings(footprint, height, rng))
    } else {
        None
    };

    let tiers = if height > config.tier_min_height && rng.gen::<f32>() < config.tier_probability {
        plan_tiers(footprint, height, config, rng)
    } else {
        SmallVec::new()
    };

    // Only a tiered crown carries an antenna; it rests on the last tier.
    let antenna = match tiers.last() {
        Some(top) if rng.gen::<f32>() < config.antenna_probability => Some(Antenna {
            height: rng.gen_range(0.3..0.9),
            base_y: top.base_y + top.height,
        }),
        _ => None,
    };

    BuildingPlan {
        footprint,
        height,
        facade,
        shade,
        wings,
        tiers,
        antenna,
        angle: rng.gen_range(0.0..TAU),
        radius: rng.gen_range(config.ring_min..config.ring_max),
        yaw: rng.gen_range(0.0..TAU),
        delay: rng.gen_range(0.0..config.delay_max),
        speed: rng.gen_range(config.speed_min..config.speed_max),
    }
}

fn plan_wings(footprint: Vec2, height: f32, rng: &mut StdRng) -> WingPair {
    let size = Vec3::new(
        (footprint.x * rng.gen_range(0.3..0.5)).max(MIN_DIM),
        (height * rng.gen_range(0.35..0.65)).max(MIN_DIM),
        (footprint.y * rng.gen_range(0.55..0.85)).max(MIN_DIM),
    );
    WingPair {
        size,
        offset: (footprint.x + size.x) / 2.0,
    }
}

fn plan_tiers(
    footprint: Vec2,
    height: f32,
    config: &SkylineConfig,
    rng: &mut StdRng,
) -> SmallVec<[Tier; 3]> {
    let count = rng.gen_range(1..=3);
    let mut tiers = SmallVec::new();

    let mut below = footprint;
    let mut tier_height = height;
    let mut base_y = height;
    for _ in 0..count {
        let shrink = rng.gen_range(config.tier_shrink_min..config.tier_shrink_max);
        let tier = Tier {
            footprint: (below * shrink).max(Vec2::splat(MIN_DIM)),
            height: (tier_height * rng.gen_range(0.3..0.5)).max(MIN_DIM),
            base_y,
        };
        below = tier.footprint;
        tier_height = tier.height;
        base_y += tier.height;
        tiers.push(tier);
    }
    tiers
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skyline(seed: u64) -> Vec<BuildingPlan> {
        let config = SkylineConfig::default();
        let mut rng = StdRng::seed_from_u64(seed);
        generate_skyline(&config, &mut rng)
    }

    #[test]
    fn generates_exactly_requested_count() {
        let config = SkylineConfig::default();
        assert_eq!(config.count, 40);
        assert_eq!(skyline(7).len(), 40);
    }

    #[test]
    fn dimensions_and_placement_stay_in_range() {
        for plan in skyline(99) {
            assert!(plan.footprint.x >= 0.6 && plan.footprint.x <= 1.8);
            assert!(plan.footprint.y >= 0.6 && plan.footprint.y <= 1.8);
            assert!(plan.height >= 1.0 && plan.height <= 5.5);
            assert!(plan.radius >= 1.3 && plan.radius <= 6.3);
            assert!(plan.angle >= 0.0 && plan.angle < TAU);
            assert!(plan.total_height().is_finite());
            assert!(plan.position().is_finite());
        }
    }

    #[test]
    fn schedules_stay_in_range() {
        for plan in skyline(3) {
            assert!(plan.delay >= 0.0 && plan.delay <= 3.0);
            assert!(plan.speed >= 0.3 && plan.speed <= 0.8);
        }
    }

    #[test]
    fn tier_footprints_strictly_shrink() {
        for plan in skyline(11) {
            let mut previous = plan.footprint;
            for tier in &plan.tiers {
                assert!(tier.footprint.x < previous.x);
                assert!(tier.footprint.y < previous.y);
                assert!(tier.footprint.x >= MIN_DIM && tier.footprint.y >= MIN_DIM);
                previous = tier.footprint;
            }
        }
    }

    #[test]
    fn tiers_stack_base_on_top() {
        for plan in skyline(23) {
            let mut expected_base = plan.height;
            for tier in &plan.tiers {
                assert!((tier.base_y - expected_base).abs() < 1e-5);
                expected_base = tier.base_y + tier.height;
            }
            if let Some(antenna) = plan.antenna {
                assert!((antenna.base_y - expected_base).abs() < 1e-5);
            }
        }
    }

    #[test]
    fn gates_hold_for_wings_tiers_antennas() {
        let mut saw_wings = false;
        let mut saw_tiers = false;
        let mut saw_plain = false;
        for plan in skyline(5) {
            if plan.wings.is_some() {
                saw_wings = true;
                assert!(plan.footprint.x > 1.2);
            }
            if !plan.tiers.is_empty() {
                saw_tiers = true;
                assert!(plan.height > 2.0);
                assert!(plan.tiers.len() <= 3);
            }
            if plan.antenna.is_some() {
                assert!(!plan.tiers.is_empty());
            }
            if plan.wings.is_none() && plan.tiers.is_empty() {
                saw_plain = true;
            }
        }
        // 40 draws at these probabilities should produce every combination.
        assert!(saw_wings && saw_tiers && saw_plain);
    }

    #[test]
    fn wings_sit_flush_against_main_block() {
        for plan in skyline(31) {
            if let Some(wings) = plan.wings {
                let expected = (plan.footprint.x + wings.size.x) / 2.0;
                assert!((wings.offset - expected).abs() < 1e-5);
                assert!(wings.size.min_element() >= MIN_DIM);
            }
        }
    }

    #[test]
    fn same_seed_reproduces_the_skyline() {
        assert_eq!(skyline(1234), skyline(1234));
    }

    #[test]
    fn different_seeds_diverge() {
        assert_ne!(skyline(1), skyline(2));
    }
}
