//! Cityrise - an animated skyline hero scene.
//!
//! A procedurally generated cityscape assembles itself building by building:
//! randomized massing with wings, tiered crowns, and antennas, each rising
//! from the ground on its own delayed schedule with an exponential ease-out.
//! A particle halo and a few spinning wireframe accents frame the skyline,
//! and the camera lags the pointer while swaying on idle sinusoids.

pub mod camera;
pub mod procgen;
pub mod render;
pub mod ui;
