//! On-screen overlay for the build-out.

use bevy::prelude::*;

pub mod progress;

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(progress::ProgressHudPlugin);
    }
}
