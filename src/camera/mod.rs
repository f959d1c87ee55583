//! Hero camera: a fixed-depth viewpoint that sways on slow sinusoids and
//! leans toward the pointer with a low-pass lag.
//!
//! The pointer never moves the camera directly. Cursor motion only retargets
//! [`PointerState`], and every frame the smoothed value closes a fraction of
//! the remaining gap, so the view trails the mouse by a beat. The same
//! smoothed value drives the skyline turntable and the particle halo.

use bevy::prelude::*;
use bevy::window::{CursorMoved, PrimaryWindow};

pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PointerState>()
            .add_systems(Startup, setup_camera)
            .add_systems(Update, (track_pointer, drive_camera).chain());
    }
}

/// Fraction of the pointer gap still open after one frame at the reference
/// rate. Smaller values snap harder.
const FOLLOW_RETAIN: f32 = 0.96;
/// Frame rate the follow constant is tuned against.
const REFERENCE_HZ: f32 = 60.0;
/// Camera depth in front of the skyline.
const CAMERA_DISTANCE: f32 = 6.0;

/// Pointer influence in scene units. `target` tracks the cursor directly;
/// `smoothed` trails it and is what the camera, turntable, and halo read.
#[derive(Resource, Default)]
pub struct PointerState {
    pub target: Vec2,
    pub smoothed: Vec2,
}

/// Marker for the single hero camera.
#[derive(Component)]
pub struct HeroCamera;

/// Per-frame blend factor for pointer smoothing. Normalized against the
/// reference rate so the lag feels identical at any frame rate: two 120 Hz
/// frames compound to the same catch-up as one 60 Hz frame.
pub fn follow_alpha(dt: f32) -> f32 {
    1.0 - FOLLOW_RETAIN.powf(dt * REFERENCE_HZ)
}

/// Move `current` toward `target` by the given blend factor.
pub fn smooth_toward(current: Vec2, target: Vec2, alpha: f32) -> Vec2 {
    current + (target - current) * alpha
}

/// Map a cursor position to its pointer influence target. The whole window
/// spans only 0.4 x 0.3 scene units, centered on the window midpoint, so the
/// effect stays a lean rather than a pan.
pub fn pointer_target(cursor: Vec2, window_size: Vec2) -> Vec2 {
    Vec2::new(
        (cursor.x / window_size.x - 0.5) * 0.4,
        (cursor.y / window_size.y - 0.5) * 0.3,
    )
}

/// Camera position at time `t` under the given smoothed pointer influence.
/// Two slow sinusoids at different rates give the idle drift; the pointer
/// shifts the viewpoint on top of it. Depth never changes.
pub fn camera_position(t: f32, pointer: Vec2) -> Vec3 {
    Vec3::new(
        (t * 0.15).sin() * 0.3 + pointer.x * 0.5,
        (t * 0.12).cos() * 0.2 - pointer.y * 0.5,
        CAMERA_DISTANCE,
    )
}

fn setup_camera(mut commands: Commands) {
    commands.spawn((
        Camera3d::default(),
        Projection::Perspective(PerspectiveProjection {
            fov: 60.0_f32.to_radians(),
            near: 0.1,
            far: 1000.0,
            ..default()
        }),
        Transform::from_xyz(0.0, 0.0, CAMERA_DISTANCE).looking_at(Vec3::ZERO, Vec3::Y),
        HeroCamera,
    ));
}

fn track_pointer(
    mut cursor_events: EventReader<CursorMoved>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut pointer: ResMut<PointerState>,
) {
    let Ok(window) = windows.get_single() else {
        return;
    };
    let size = Vec2::new(window.width(), window.height());

    for event in cursor_events.read() {
        pointer.target = pointer_target(event.position, size);
    }
}

fn drive_camera(
    time: Res<Time>,
    mut pointer: ResMut<PointerState>,
    mut cameras: Query<&mut Transform, With<HeroCamera>>,
) {
    let alpha = follow_alpha(time.delta_secs());
    pointer.smoothed = smooth_toward(pointer.smoothed, pointer.target, alpha);

    let t = time.elapsed_secs();
    for mut transform in &mut cameras {
        transform.translation = camera_position(t, pointer.smoothed);
        transform.look_at(Vec3::ZERO, Vec3::Y);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn follow_alpha_matches_reference_rate() {
        // One 60 Hz frame closes 4% of the gap.
        assert!((follow_alpha(1.0 / 60.0) - 0.04).abs() < 1e-5);
    }

    #[test]
    fn follow_alpha_compounds_across_frame_rates() {
        // Two 120 Hz frames cover the same ground as one 60 Hz frame.
        let one = follow_alpha(1.0 / 60.0);
        let half = follow_alpha(1.0 / 120.0);
        let compounded = 1.0 - (1.0 - half) * (1.0 - half);
        assert!((compounded - one).abs() < 1e-5);
    }

    #[test]
    fn smoothing_converges_geometrically() {
        let target = Vec2::new(0.2, -0.15);
        let mut current = Vec2::ZERO;
        for _ in 0..120 {
            current = smooth_toward(current, target, follow_alpha(1.0 / 60.0));
        }
        // Two seconds of frames leaves under 1% of the gap.
        assert!((current - target).length() < 0.01 * target.length());
    }

    #[test]
    fn smoothing_never_overshoots() {
        let target = Vec2::new(-0.1, 0.12);
        let mut current = Vec2::new(0.2, -0.15);
        let mut distance = (current - target).length();
        for _ in 0..240 {
            current = smooth_toward(current, target, follow_alpha(1.0 / 60.0));
            let next = (current - target).length();
            assert!(next <= distance);
            distance = next;
        }
    }

    #[test]
    fn pointer_target_maps_window_extents() {
        let size = Vec2::new(1280.0, 720.0);
        assert_eq!(pointer_target(size / 2.0, size), Vec2::ZERO);

        let top_left = pointer_target(Vec2::ZERO, size);
        assert!((top_left - Vec2::new(-0.2, -0.15)).length() < 1e-6);

        let bottom_right = pointer_target(size, size);
        assert!((bottom_right - Vec2::new(0.2, 0.15)).length() < 1e-6);
    }

    #[test]
    fn sway_stays_inside_its_envelope() {
        for i in 0..500 {
            let t = i as f32 * 0.137;
            let position = camera_position(t, Vec2::ZERO);
            assert!(position.x.abs() <= 0.3 + 1e-6);
            assert!(position.y.abs() <= 0.2 + 1e-6);
            assert_eq!(position.z, CAMERA_DISTANCE);
        }
    }

    #[test]
    fn pointer_shifts_the_viewpoint_at_half_weight() {
        let still = camera_position(0.0, Vec2::ZERO);
        let leaned = camera_position(0.0, Vec2::new(0.2, 0.15));
        assert!((leaned.x - still.x - 0.1).abs() < 1e-6);
        assert!((still.y - leaned.y - 0.075).abs() < 1e-6);
        assert_eq!(leaned.z, CAMERA_DISTANCE);
    }
}
