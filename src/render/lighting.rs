//! Static twilight lighting for the hero scene.
//!
//! No day cycle here: one warm key light with shadows, a cool ambient fill,
//! and a gold point light floating over the skyline core so gilded facades
//! catch a glint as the turntable brings them around.

use bevy::prelude::*;

pub struct LightingPlugin;

impl Plugin for LightingPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(ClearColor(NIGHT_SKY))
            .add_systems(Startup, setup_lighting);
    }
}

/// Deep blue-black backdrop behind the halo.
const NIGHT_SKY: Color = Color::srgb(0.039, 0.055, 0.078);

fn setup_lighting(mut commands: Commands) {
    // Dim cool ambient so slate facades keep their shape in shadow.
    commands.insert_resource(AmbientLight {
        color: Color::srgb(0.6, 0.7, 0.9),
        brightness: 80.0,
    });

    // Warm key light from high over the camera's right shoulder.
    commands.spawn((
        DirectionalLight {
            illuminance: 8000.0,
            color: Color::srgb(1.0, 0.92, 0.8),
            shadows_enabled: true,
            ..default()
        },
        Transform::from_rotation(Quat::from_euler(EulerRot::XYZ, -0.9, 0.6, 0.0)),
    ));

    // Gold practical above the ring of towers.
    commands.spawn((
        PointLight {
            color: Color::srgb(0.83, 0.66, 0.33),
            intensity: 600_000.0,
            range: 20.0,
            shadows_enabled: false,
            ..default()
        },
        Transform::from_xyz(0.0, 6.0, 2.0),
    ));

    info!("Lighting setup: twilight key, ambient fill, gold practical");
}
