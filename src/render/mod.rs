//! Rendering systems: skyline spawning, construction animation, and the
//! ambient scene dressing around it.

use bevy::prelude::*;

pub mod accents;
pub mod construction;
pub mod crane;
pub mod ground;
pub mod lighting;
pub mod particles;
pub mod skyline_spawner;

pub struct RenderPlugin;

impl Plugin for RenderPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(lighting::LightingPlugin)
            .add_plugins(ground::GroundPlugin)
            .add_plugins(skyline_spawner::SkylineSpawnerPlugin)
            .add_plugins(construction::ConstructionPlugin)
            .add_plugins(crane::CranePlugin)
            .add_plugins(particles::ParticleHaloPlugin)
            .add_plugins(accents::AccentPlugin);
    }
}
