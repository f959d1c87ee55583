//! Spawns the planned skyline as a turntable of building hierarchies.
//!
//! Each plan becomes one root entity whose children hold the actual meshes:
//! main volume, wings, crown tiers, antenna. Children are seated so the
//! group's origin is its ground contact, which lets the construction
//! animator grow a building by scaling the root's Y alone. All building
//! roots hang off a single [`SkylineRoot`] that turns slowly and leans with
//! the pointer.

use bevy::prelude::*;

use crate::camera::PointerState;
use crate::procgen::skyline::{BuildingPlan, Facade, SkylinePlans};
use crate::render::construction::{Construction, SCALE_FLOOR};

pub struct SkylineSpawnerPlugin;

impl Plugin for SkylineSpawnerPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SkylineSpawned>().add_systems(
            Update,
            (spawn_skyline.run_if(should_spawn_skyline), turn_skyline),
        );
    }
}

fn should_spawn_skyline(plans: Res<SkylinePlans>, spawned: Res<SkylineSpawned>) -> bool {
    plans.generated && !spawned.0
}

#[derive(Resource, Default)]
pub struct SkylineSpawned(pub bool);

/// Turntable rate in radians per second. Kept slightly off the halo's drift
/// rate so the two layers visibly separate.
const TURNTABLE_RATE: f32 = 0.05;

const ANTENNA_RADIUS: f32 = 0.02;

/// Root of one spawned building. Scaling this entity's Y runs the whole
/// hierarchy up out of the ground.
#[derive(Component)]
pub struct Building {
    pub index: usize,
    pub facade: Facade,
}

/// Parent of every building; the turntable.
#[derive(Component)]
pub struct SkylineRoot;

fn spawn_skyline(
    mut commands: Commands,
    plans: Res<SkylinePlans>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut spawned: ResMut<SkylineSpawned>,
) {
    info!("Spawning {} buildings...", plans.buildings.len());

    // Facade palettes: three shades per variant, picked by the plan.
    let slate_facades = [
        Color::srgb(0.16, 0.18, 0.22),
        Color::srgb(0.13, 0.15, 0.19),
        Color::srgb(0.19, 0.21, 0.26),
    ];
    let gilded_facades = [
        Color::srgb(0.45, 0.36, 0.2),
        Color::srgb(0.5, 0.4, 0.22),
        Color::srgb(0.42, 0.33, 0.18),
    ];

    let antenna_material = materials.add(StandardMaterial {
        base_color: Color::srgb(0.25, 0.26, 0.3),
        perceptual_roughness: 0.4,
        metallic: 0.8,
        ..default()
    });
    // Unit-height mast, stretched per antenna.
    let antenna_mesh = meshes.add(Cylinder::new(ANTENNA_RADIUS, 1.0));

    let root = commands
        .spawn((Transform::IDENTITY, Visibility::default(), SkylineRoot))
        .id();

    for (index, plan) in plans.buildings.iter().enumerate() {
        let material = match plan.facade {
            Facade::Slate => materials.add(StandardMaterial {
                base_color: slate_facades[plan.shade % slate_facades.len()],
                perceptual_roughness: 0.85,
                metallic: 0.1,
                ..default()
            }),
            Facade::Gilded => materials.add(StandardMaterial {
                base_color: gilded_facades[plan.shade % gilded_facades.len()],
                emissive: LinearRgba::new(0.22, 0.15, 0.05, 1.0),
                perceptual_roughness: 0.3,
                metallic: 0.4,
                ..default()
            }),
        };

        let building = spawn_building(
            &mut commands,
            &mut meshes,
            material,
            &antenna_mesh,
            &antenna_material,
            index,
            plan,
        );
        commands.entity(root).add_child(building);
    }

    spawned.0 = true;
    info!("Skyline spawned");
}

/// Spawn one building hierarchy, returned for parenting under the turntable.
///
/// The root sits at the plan's ground point with its Y scale at the pending
/// floor; children are offset upward so every volume keeps its base attached
/// while the root scales.
fn spawn_building(
    commands: &mut Commands,
    meshes: &mut ResMut<Assets<Mesh>>,
    material: Handle<StandardMaterial>,
    antenna_mesh: &Handle<Mesh>,
    antenna_material: &Handle<StandardMaterial>,
    index: usize,
    plan: &BuildingPlan,
) -> Entity {
    commands
        .spawn((
            Transform {
                translation: plan.position(),
                rotation: Quat::from_rotation_y(plan.yaw),
                scale: Vec3::new(1.0, SCALE_FLOOR, 1.0),
            },
            Visibility::default(),
            Building {
                index,
                facade: plan.facade,
            },
            Construction::new(plan.delay, plan.speed),
        ))
        .with_children(|parent| {
            // Main volume, seated on the ground plane.
            let main_mesh = meshes.add(Cuboid::new(plan.footprint.x, plan.height, plan.footprint.y));
            parent.spawn((
                Mesh3d(main_mesh),
                MeshMaterial3d(material.clone()),
                Transform::from_xyz(0.0, plan.height / 2.0, 0.0),
            ));

            // Wings flank the main block symmetrically, also ground-seated.
            if let Some(wings) = plan.wings {
                let wing_mesh = meshes.add(Cuboid::new(wings.size.x, wings.size.y, wings.size.z));
                for side in [-1.0, 1.0] {
                    parent.spawn((
                        Mesh3d(wing_mesh.clone()),
                        MeshMaterial3d(material.clone()),
                        Transform::from_xyz(side * wings.offset, wings.size.y / 2.0, 0.0),
                    ));
                }
            }

            for tier in &plan.tiers {
                let tier_mesh =
                    meshes.add(Cuboid::new(tier.footprint.x, tier.height, tier.footprint.y));
                parent.spawn((
                    Mesh3d(tier_mesh),
                    MeshMaterial3d(material.clone()),
                    Transform::from_xyz(0.0, tier.base_y + tier.height / 2.0, 0.0),
                ));
            }

            if let Some(antenna) = plan.antenna {
                parent.spawn((
                    Mesh3d(antenna_mesh.clone()),
                    MeshMaterial3d(antenna_material.clone()),
                    Transform::from_xyz(0.0, antenna.base_y + antenna.height / 2.0, 0.0)
                        .with_scale(Vec3::new(1.0, antenna.height, 1.0)),
                ));
            }
        })
        .id()
}

fn turn_skyline(
    time: Res<Time>,
    pointer: Res<PointerState>,
    mut roots: Query<&mut Transform, With<SkylineRoot>>,
) {
    let yaw = time.elapsed_secs() * TURNTABLE_RATE + pointer.smoothed.x;
    for mut transform in &mut roots {
        transform.rotation = Quat::from_rotation_y(yaw);
    }
}
