//! Bottom-left readout of skyline construction progress.
//!
//! Shows mean build progress and the topped-out count while towers are
//! rising, then removes itself when the last one finishes.

use bevy::prelude::*;

use crate::render::construction::Construction;

pub struct ProgressHudPlugin;

impl Plugin for ProgressHudPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_progress_hud)
            .add_systems(Update, update_progress_hud);
    }
}

#[derive(Component)]
struct ProgressHudRoot;

#[derive(Component)]
struct ProgressReadout;

// Colors
const HUD_BG: Color = Color::srgba(0.02, 0.03, 0.05, 0.85);
const LABEL_COLOR: Color = Color::srgb(0.55, 0.6, 0.7);
const READOUT_COLOR: Color = Color::srgb(0.83, 0.66, 0.33);

fn setup_progress_hud(mut commands: Commands) {
    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(16.0),
                bottom: Val::Px(14.0),
                padding: UiRect::axes(Val::Px(12.0), Val::Px(6.0)),
                flex_direction: FlexDirection::Row,
                align_items: AlignItems::Center,
                column_gap: Val::Px(10.0),
                ..default()
            },
            BackgroundColor(HUD_BG),
            ProgressHudRoot,
        ))
        .with_children(|hud| {
            hud.spawn((
                Text::new("RAISING SKYLINE"),
                TextFont {
                    font_size: 12.0,
                    ..default()
                },
                TextColor(LABEL_COLOR),
            ));
            hud.spawn((
                Text::new("0%  0/0 topped out"),
                TextFont {
                    font_size: 14.0,
                    ..default()
                },
                TextColor(READOUT_COLOR),
                ProgressReadout,
            ));
        });
}

fn update_progress_hud(
    mut commands: Commands,
    sites: Query<&Construction>,
    roots: Query<Entity, With<ProgressHudRoot>>,
    mut readouts: Query<&mut Text, With<ProgressReadout>>,
) {
    let Ok(root) = roots.get_single() else {
        return;
    };
    if sites.is_empty() {
        return;
    }

    let total = sites.iter().count();
    let complete = sites.iter().filter(|site| site.complete()).count();

    if complete == total {
        commands.entity(root).despawn_recursive();
        info!("Construction complete: {} buildings", total);
        return;
    }

    let mean: f32 = sites.iter().map(|site| site.progress).sum::<f32>() / total as f32;
    for mut text in &mut readouts {
        **text = format!("{:.0}%  {}/{} topped out", mean * 100.0, complete, total);
    }
}
