//! Cityrise - animated skyline hero scene.
//!
//! A seeded cityscape assembles itself building by building while a particle
//! halo drifts around it and the camera trails the pointer.

use bevy::prelude::*;

use cityrise::{camera, procgen, render, ui};

fn main() {
    // Force Vulkan backend on Windows (DX12 causes crashes on some systems)
    #[cfg(target_os = "windows")]
    std::env::set_var("WGPU_BACKEND", "vulkan");
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Cityrise".into(),
                resolution: (1280., 720.).into(),
                ..default()
            }),
            ..default()
        }))
        // Core plugins
        .add_plugins(camera::CameraPlugin)
        .add_plugins(render::RenderPlugin)
        // Procedural generation
        .add_plugins(procgen::ProcgenPlugin)
        // Overlay
        .add_plugins(ui::UiPlugin)
        .run();
}
