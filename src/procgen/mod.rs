//! Procedural generation systems.
//!
//! - Seeded skyline plans: massing, wings, tiered crowns, antennas
//! - Polar placement around the scene origin
//! - Per-building construction schedules

use bevy::prelude::*;

pub mod skyline;

pub struct ProcgenPlugin;

impl Plugin for ProcgenPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(skyline::SkylinePlugin);
    }
}
