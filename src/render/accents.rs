//! Floating wireframe set pieces framing the skyline.
//!
//! Three gold wire shapes (icosphere, torus, octahedron) hang around the
//! city at fixed stations and tumble at their own rates. Their fill is fully
//! transparent; only the wireframe pass draws them.

use bevy::pbr::wireframe::{Wireframe, WireframeColor, WireframePlugin};
use bevy::prelude::*;

use crate::render::particles::octahedron_mesh;

pub struct AccentPlugin;

impl Plugin for AccentPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(WireframePlugin)
            .add_systems(Startup, spawn_accents)
            .add_systems(Update, spin_accents);
    }
}

const ACCENT_GOLD: Color = Color::srgb(0.831, 0.659, 0.325);

/// Spin rates in radians per second around each axis. Rotation is set
/// absolutely from elapsed time, so tumbling never drifts with frame rate.
#[derive(Component)]
pub struct AccentShape {
    pub spin: Vec3,
}

fn spawn_accents(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let hidden_fill = materials.add(StandardMaterial {
        base_color: Color::NONE,
        alpha_mode: AlphaMode::Blend,
        unlit: true,
        ..default()
    });

    // Mesh, station, spin rates.
    let shapes: [(Handle<Mesh>, Vec3, Vec3); 3] = [
        (
            meshes.add(Sphere::new(1.3).mesh().ico(1).unwrap()),
            Vec3::new(2.8, -0.3, -2.0),
            Vec3::new(0.3, 0.5, 0.0),
        ),
        (
            meshes.add(Torus {
                minor_radius: 0.22,
                major_radius: 0.7,
            }),
            Vec3::new(-3.0, 0.5, -3.0),
            Vec3::new(0.4, -0.25, 0.0),
        ),
        (
            meshes.add(octahedron_mesh(0.9)),
            Vec3::new(-0.5, 2.0, -2.5),
            Vec3::new(-0.35, 0.0, 0.3),
        ),
    ];

    for (mesh, station, spin) in shapes {
        commands.spawn((
            Mesh3d(mesh),
            MeshMaterial3d(hidden_fill.clone()),
            Transform::from_translation(station),
            Wireframe,
            WireframeColor {
                color: ACCENT_GOLD,
            },
            AccentShape { spin },
        ));
    }

    info!("Accents setup: 3 wireframe set pieces");
}

fn spin_accents(time: Res<Time>, mut accents: Query<(&mut Transform, &AccentShape)>) {
    let t = time.elapsed_secs();
    for (mut transform, accent) in &mut accents {
        transform.rotation = Quat::from_euler(
            EulerRot::XYZ,
            accent.spin.x * t,
            accent.spin.y * t,
            accent.spin.z * t,
        );
    }
}
