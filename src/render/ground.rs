//! Ground disc the skyline stands on.

use bevy::prelude::*;

pub struct GroundPlugin;

impl Plugin for GroundPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_ground);
    }
}

/// Marker for the ground disc.
#[derive(Component)]
pub struct Ground;

fn setup_ground(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let disc = meshes.add(Cylinder::new(8.0, 0.08));
    let material = materials.add(StandardMaterial {
        base_color: Color::srgb(0.05, 0.06, 0.09),
        perceptual_roughness: 0.7,
        metallic: 0.2,
        ..default()
    });

    // Sunk so the top face is the building ground plane. Stays out of the
    // turntable hierarchy; a spinning disc only shimmers at the rim.
    commands.spawn((
        Mesh3d(disc),
        MeshMaterial3d(material),
        Transform::from_xyz(0.0, -0.04, 0.0),
        Ground,
    ));
}
