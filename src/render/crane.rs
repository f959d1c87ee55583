//! Tower crane beside the tallest building.
//!
//! One rig spawns once the skyline is up: base slab, mast overtopping the
//! tallest roof, and a jib pivot carrying the arm, counterweight, and a
//! hanging cable. The pivot slews slowly the whole time buildings are
//! rising, and the rig leaves when the last one tops out. Parented under
//! [`SkylineRoot`] so it turns with the city.

use bevy::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::f32::consts::TAU;

use crate::procgen::skyline::SkylinePlans;
use crate::render::construction::Construction;
use crate::render::skyline_spawner::{SkylineRoot, SkylineSpawned};

pub struct CranePlugin;

impl Plugin for CranePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CraneConfig>()
            .init_resource::<CraneSpawned>()
            .add_systems(
                Update,
                (spawn_crane.run_if(should_rig_crane), slew_jib, dismiss_crane),
            );
    }
}

fn should_rig_crane(skyline: Res<SkylineSpawned>, spawned: Res<CraneSpawned>) -> bool {
    skyline.0 && !spawned.0
}

#[derive(Resource, Default)]
pub struct CraneSpawned(pub bool);

/// Configuration for the crane rig.
#[derive(Resource)]
pub struct CraneConfig {
    /// Seed for the jib's starting bearing.
    pub seed: u64,
    /// Jib rotation rate in radians per second.
    pub slew_rate: f32,
    /// Clearance between the tallest roof and the mast top.
    pub mast_margin: f32,
    /// Jib arm length.
    pub jib_length: f32,
}

impl Default for CraneConfig {
    fn default() -> Self {
        Self {
            seed: 16180,
            slew_rate: 0.1,
            mast_margin: 0.6,
            jib_length: 1.4,
        }
    }
}

/// Root of the crane hierarchy.
#[derive(Component)]
pub struct CraneRig;

/// Rotating joint at the mast top; the jib hangs off this.
#[derive(Component)]
pub struct JibPivot;

fn spawn_crane(
    mut commands: Commands,
    plans: Res<SkylinePlans>,
    config: Res<CraneConfig>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    roots: Query<Entity, With<SkylineRoot>>,
    mut spawned: ResMut<CraneSpawned>,
) {
    let Ok(root) = roots.get_single() else {
        return;
    };
    let Some(tallest) = plans
        .buildings
        .iter()
        .max_by(|a, b| a.total_height().total_cmp(&b.total_height()))
    else {
        spawned.0 = true;
        return;
    };

    let rig_material = materials.add(StandardMaterial {
        base_color: Color::srgb(0.85, 0.64, 0.15),
        perceptual_roughness: 0.6,
        metallic: 0.3,
        ..default()
    });
    let cable_material = materials.add(StandardMaterial {
        base_color: Color::srgb(0.12, 0.12, 0.14),
        unlit: true,
        ..default()
    });

    let mast_height = tallest.total_height() + config.mast_margin;
    let base_mesh = meshes.add(Cuboid::new(0.35, 0.12, 0.35));
    let mast_mesh = meshes.add(Cuboid::new(0.09, mast_height, 0.09));
    let jib_mesh = meshes.add(Cuboid::new(config.jib_length, 0.05, 0.05));
    let counter_mesh = meshes.add(Cuboid::new(0.3, 0.1, 0.1));
    let cable_drop = mast_height * 0.45;
    let cable_mesh = meshes.add(Cuboid::new(0.012, cable_drop, 0.012));

    let mut rng = StdRng::seed_from_u64(config.seed);
    let start_yaw = rng.gen_range(0.0..TAU);

    // Station the rig just outside the tallest building's footprint.
    let station = tallest.position();
    let position = station + station.normalize() * 1.2;

    let crane = commands
        .spawn((
            Transform::from_translation(position),
            Visibility::default(),
            CraneRig,
        ))
        .with_children(|parent| {
            parent.spawn((
                Mesh3d(base_mesh),
                MeshMaterial3d(rig_material.clone()),
                Transform::from_xyz(0.0, 0.06, 0.0),
            ));
            parent.spawn((
                Mesh3d(mast_mesh),
                MeshMaterial3d(rig_material.clone()),
                Transform::from_xyz(0.0, mast_height / 2.0, 0.0),
            ));
            parent
                .spawn((
                    Transform::from_xyz(0.0, mast_height, 0.0)
                        .with_rotation(Quat::from_rotation_y(start_yaw)),
                    Visibility::default(),
                    JibPivot,
                ))
                .with_children(|pivot| {
                    pivot.spawn((
                        Mesh3d(jib_mesh),
                        MeshMaterial3d(rig_material.clone()),
                        Transform::from_xyz(config.jib_length / 2.0, 0.0, 0.0),
                    ));
                    pivot.spawn((
                        Mesh3d(counter_mesh),
                        MeshMaterial3d(rig_material.clone()),
                        Transform::from_xyz(-0.25, 0.0, 0.0),
                    ));
                    pivot.spawn((
                        Mesh3d(cable_mesh),
                        MeshMaterial3d(cable_material),
                        Transform::from_xyz(config.jib_length * 0.8, -cable_drop / 2.0, 0.0),
                    ));
                });
        })
        .id();

    commands.entity(root).add_child(crane);
    spawned.0 = true;

    info!(
        "Crane rigged beside the {:.1}-unit tower",
        tallest.total_height()
    );
}

fn slew_jib(
    time: Res<Time>,
    config: Res<CraneConfig>,
    mut pivots: Query<&mut Transform, With<JibPivot>>,
) {
    for mut transform in &mut pivots {
        transform.rotate_y(config.slew_rate * time.delta_secs());
    }
}

/// Tear the rig down once every building has topped out.
fn dismiss_crane(
    mut commands: Commands,
    sites: Query<&Construction>,
    cranes: Query<Entity, With<CraneRig>>,
) {
    if cranes.is_empty() {
        return;
    }
    if sites.is_empty() || sites.iter().any(|site| !site.complete()) {
        return;
    }

    for crane in &cranes {
        commands.entity(crane).despawn_recursive();
    }
    info!("Skyline topped out; crane dismissed");
}
