//! Construction animation for the rising skyline.
//!
//! Each spawned building carries a schedule (delay, speed) from its plan.
//! Once its delay has passed, progress accrues linearly at its speed and the
//! building's vertical scale follows an exponential ease-out, so towers shoot
//! up fast and settle softly into their final height.

use bevy::prelude::*;

use crate::render::skyline_spawner::Building;

pub struct ConstructionPlugin;

impl Plugin for ConstructionPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, advance_construction);
    }
}

/// Vertical scale is clamped to this so a pending building never degenerates
/// to zero thickness.
pub const SCALE_FLOOR: f32 = 0.001;

/// Per-building construction state. The schedule comes from the plan; the
/// clock starts on the frame the building is spawned.
#[derive(Component)]
pub struct Construction {
    /// Build progress from 0.0 (not started) to 1.0 (topped out).
    pub progress: f32,
    /// Seconds since this building was spawned.
    pub elapsed: f32,
    /// Seconds to wait before progress starts accruing.
    pub delay: f32,
    /// Progress gained per second once past the delay.
    pub speed: f32,
}

impl Construction {
    pub fn new(delay: f32, speed: f32) -> Self {
        Self {
            progress: 0.0,
            elapsed: 0.0,
            delay,
            speed,
        }
    }

    pub fn complete(&self) -> bool {
        self.progress >= 1.0
    }
}

/// Advance `progress` by one frame of `dt`, given the building's clock.
///
/// The frame that straddles the delay boundary only counts the portion of
/// `dt` that falls after the delay, so accrued progress is exactly
/// `speed * (elapsed - delay)` regardless of frame phase.
pub fn advance_progress(progress: f32, elapsed: f32, dt: f32, delay: f32, speed: f32) -> f32 {
    if progress >= 1.0 || elapsed <= delay {
        return progress;
    }
    let dt_effective = dt.min(elapsed - delay);
    (progress + speed * dt_effective).min(1.0)
}

/// Exponential ease-out: fast start, soft landing. Maps 0 to 0 and
/// saturates to exactly 1.0 at full progress.
pub fn ease_out_expo(progress: f32) -> f32 {
    if progress >= 1.0 {
        1.0
    } else {
        1.0 - 2f32.powf(-10.0 * progress)
    }
}

/// Vertical scale for a building at the given progress.
pub fn build_scale(progress: f32) -> f32 {
    ease_out_expo(progress).max(SCALE_FLOOR)
}

fn advance_construction(
    time: Res<Time>,
    mut sites: Query<(&mut Construction, &mut Transform, &Building)>,
) {
    let dt = time.delta_secs();
    for (mut site, mut transform, building) in &mut sites {
        if site.complete() {
            continue;
        }

        site.elapsed += dt;
        site.progress = advance_progress(site.progress, site.elapsed, dt, site.delay, site.speed);
        transform.scale.y = build_scale(site.progress);

        if site.complete() {
            info!(
                "Building {} topped out after {:.1}s",
                building.index, site.elapsed
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Step a schedule the way the frame system does: accumulate the clock,
    /// then advance progress.
    fn run_schedule(delay: f32, speed: f32, dt: f32, steps: usize) -> Construction {
        let mut site = Construction::new(delay, speed);
        for _ in 0..steps {
            site.elapsed += dt;
            site.progress =
                advance_progress(site.progress, site.elapsed, dt, site.delay, site.speed);
        }
        site
    }

    #[test]
    fn progress_waits_out_the_delay() {
        let site = run_schedule(1.0, 0.5, 0.25, 4);
        assert_eq!(site.elapsed, 1.0);
        assert_eq!(site.progress, 0.0);
    }

    #[test]
    fn progress_tops_out_exactly_on_schedule() {
        // delay 1.0s at 0.5/s should finish at the 3.0s mark, and dt = 0.25
        // lands every value on an exact binary fraction.
        let site = run_schedule(1.0, 0.5, 0.25, 11);
        assert_eq!(site.elapsed, 2.75);
        assert_eq!(site.progress, 0.875);
        assert!(!site.complete());

        let site = run_schedule(1.0, 0.5, 0.25, 12);
        assert_eq!(site.elapsed, 3.0);
        assert_eq!(site.progress, 1.0);
        assert!(site.complete());
    }

    #[test]
    fn straddling_frame_counts_only_time_past_the_delay() {
        // One 0.25s frame crossing a 0.125s delay accrues 0.125s of build.
        let site = run_schedule(0.125, 1.0, 0.25, 1);
        assert_eq!(site.progress, 0.125);
    }

    #[test]
    fn progress_is_monotonic_and_capped() {
        let mut site = Construction::new(0.5, 0.7);
        let mut previous = site.progress;
        for _ in 0..600 {
            site.elapsed += 1.0 / 60.0;
            site.progress =
                advance_progress(site.progress, site.elapsed, 1.0 / 60.0, site.delay, site.speed);
            assert!(site.progress >= previous);
            assert!(site.progress <= 1.0);
            previous = site.progress;
        }
        assert_eq!(site.progress, 1.0);
    }

    #[test]
    fn complete_building_stays_complete() {
        let before = run_schedule(0.0, 0.5, 0.25, 8);
        assert_eq!(before.progress, 1.0);
        let after = run_schedule(0.0, 0.5, 0.25, 40);
        assert_eq!(after.progress, 1.0);
    }

    #[test]
    fn easing_spans_zero_to_one() {
        assert_eq!(ease_out_expo(0.0), 0.0);
        assert_eq!(ease_out_expo(1.0), 1.0);
    }

    #[test]
    fn easing_is_strictly_increasing() {
        let mut previous = ease_out_expo(0.0);
        for i in 1..=100 {
            let value = ease_out_expo(i as f32 / 100.0);
            assert!(value > previous, "easing flat at step {i}");
            previous = value;
        }
    }

    #[test]
    fn easing_front_loads_growth() {
        // Half the schedule should deliver well over half the height.
        assert!(ease_out_expo(0.5) > 0.9);
    }

    #[test]
    fn scale_never_collapses_below_floor() {
        assert_eq!(build_scale(0.0), SCALE_FLOOR);
        assert!(build_scale(1.0) == 1.0);
        for i in 0..=100 {
            assert!(build_scale(i as f32 / 100.0) >= SCALE_FLOOR);
        }
    }
}
