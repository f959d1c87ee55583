//! Particle halo - a drifting shell of sparkles around the skyline.
//!
//! Sparkles are tiny unlit octahedra scattered through a spherical shell,
//! tinted along a gold-to-blue blend. They never move individually; the
//! whole halo rotates slowly and leans with the smoothed pointer.

use bevy::prelude::*;
use bevy::render::mesh::{Indices, PrimitiveTopology};
use bevy::render::render_asset::RenderAssetUsages;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::f32::consts::TAU;

use crate::camera::PointerState;

pub struct ParticleHaloPlugin;

impl Plugin for ParticleHaloPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<HaloConfig>()
            .add_systems(Startup, setup_halo)
            .add_systems(Update, drift_halo);
    }
}

/// Configuration for the sparkle halo.
#[derive(Resource)]
pub struct HaloConfig {
    /// Number of sparkles to scatter.
    pub count: usize,
    /// Seed for sparkle placement and tinting.
    pub seed: u64,
    /// Shell radius range around the origin.
    pub shell_min: f32,
    pub shell_max: f32,
    /// Sparkle scale range.
    pub sparkle_min: f32,
    pub sparkle_max: f32,
    /// How many shared materials quantize the gold-to-blue blend.
    pub material_steps: usize,
}

impl Default for HaloConfig {
    fn default() -> Self {
        Self {
            count: 1500,
            seed: 27182,
            shell_min: 3.0,
            shell_max: 12.0,
            sparkle_min: 0.015,
            sparkle_max: 0.045,
            material_steps: 8,
        }
    }
}

/// Parent of every sparkle; drifts and leans as one body.
#[derive(Component)]
pub struct ParticleHalo;

const HALO_GOLD: Srgba = Srgba::new(0.831, 0.659, 0.325, 1.0);
const HALO_BLUE: Srgba = Srgba::new(0.29, 0.565, 0.643, 1.0);

/// How far toward blue a sparkle sits. The draw is folded so both ends land
/// on gold and only the middle reaches full blue, keeping gold dominant.
pub fn blue_fraction(mix: f32) -> f32 {
    1.0 - (2.0 * mix - 1.0).abs()
}

/// Blend the halo endpoints component-wise in sRGB.
pub fn halo_color(fraction: f32) -> Color {
    let t = fraction.clamp(0.0, 1.0);
    Color::srgb(
        HALO_GOLD.red + (HALO_BLUE.red - HALO_GOLD.red) * t,
        HALO_GOLD.green + (HALO_BLUE.green - HALO_GOLD.green) * t,
        HALO_GOLD.blue + (HALO_BLUE.blue - HALO_GOLD.blue) * t,
    )
}

/// Random point in the shell: free azimuth, polar angle from an acos of a
/// symmetric draw so directions distribute uniformly over the sphere.
fn shell_point(rng: &mut StdRng, shell_min: f32, shell_max: f32) -> Vec3 {
    let theta = rng.gen_range(0.0..TAU);
    let phi = rng.gen_range(-1.0_f32..1.0).acos();
    let radius = rng.gen_range(shell_min..shell_max);

    Vec3::new(
        phi.sin() * theta.cos(),
        phi.cos(),
        phi.sin() * theta.sin(),
    ) * radius
}

fn setup_halo(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    config: Res<HaloConfig>,
) {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let sparkle_mesh = meshes.add(octahedron_mesh(1.0));

    // Shared palette over the blend; sparkles pick the nearest step instead
    // of allocating a material apiece.
    let palette: Vec<Handle<StandardMaterial>> = (0..config.material_steps)
        .map(|step| {
            let fraction = step as f32 / (config.material_steps - 1) as f32;
            materials.add(StandardMaterial {
                base_color: halo_color(fraction).with_alpha(0.75),
                alpha_mode: AlphaMode::Blend,
                unlit: true,
                ..default()
            })
        })
        .collect();

    let halo_parent = commands
        .spawn((Transform::IDENTITY, Visibility::default(), ParticleHalo))
        .id();

    for _ in 0..config.count {
        let position = shell_point(&mut rng, config.shell_min, config.shell_max);
        let size = rng.gen_range(config.sparkle_min..config.sparkle_max);
        let fraction = blue_fraction(rng.gen::<f32>());
        let step = (fraction * (config.material_steps - 1) as f32).round() as usize;

        let sparkle = commands
            .spawn((
                Mesh3d(sparkle_mesh.clone()),
                MeshMaterial3d(palette[step].clone()),
                Transform::from_translation(position).with_scale(Vec3::splat(size)),
            ))
            .id();

        commands.entity(halo_parent).add_child(sparkle);
    }

    info!(
        "Halo setup: {} sparkles in a {:.0}-{:.0} shell",
        config.count, config.shell_min, config.shell_max
    );
}

fn drift_halo(
    time: Res<Time>,
    pointer: Res<PointerState>,
    mut halos: Query<&mut Transform, With<ParticleHalo>>,
) {
    let t = time.elapsed_secs();
    let yaw = t * 0.04 + pointer.smoothed.x;
    let pitch = t * 0.02 + pointer.smoothed.y;

    for mut transform in &mut halos {
        transform.rotation = Quat::from_euler(EulerRot::YXZ, yaw, pitch, 0.0);
    }
}

/// Octahedron mesh: six vertices, eight faces. Shared by the halo sparkles
/// and the floating accent shapes.
pub(crate) fn octahedron_mesh(radius: f32) -> Mesh {
    let vertices: Vec<[f32; 3]> = vec![
        [0.0, radius, 0.0],
        [radius, 0.0, 0.0],
        [0.0, 0.0, radius],
        [-radius, 0.0, 0.0],
        [0.0, 0.0, -radius],
        [0.0, -radius, 0.0],
    ];

    // Four faces around the top vertex, four around the bottom.
    let indices = vec![
        0, 1, 2, 0, 2, 3, 0, 3, 4, 0, 4, 1, 5, 2, 1, 5, 3, 2, 5, 4, 3, 5, 1, 4,
    ];

    let normals: Vec<[f32; 3]> = vertices
        .iter()
        .map(|v| {
            let len: f32 = (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt();
            [v[0] / len, v[1] / len, v[2] / len]
        })
        .collect();

    let uvs: Vec<[f32; 2]> = vertices.iter().map(|_| [0.5, 0.5]).collect();

    Mesh::new(
        PrimitiveTopology::TriangleList,
        RenderAssetUsages::RENDER_WORLD,
    )
    .with_inserted_attribute(Mesh::ATTRIBUTE_POSITION, vertices)
    .with_inserted_attribute(Mesh::ATTRIBUTE_NORMAL, normals)
    .with_inserted_attribute(Mesh::ATTRIBUTE_UV_0, uvs)
    .with_inserted_indices(Indices::U32(indices))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blue_fraction_folds_the_draw() {
        assert_eq!(blue_fraction(0.0), 0.0);
        assert_eq!(blue_fraction(1.0), 0.0);
        assert_eq!(blue_fraction(0.5), 1.0);
        assert!((blue_fraction(0.25) - blue_fraction(0.75)).abs() < 1e-6);
    }

    #[test]
    fn halo_color_spans_gold_to_blue() {
        let gold = halo_color(0.0).to_srgba();
        assert!((gold.red - HALO_GOLD.red).abs() < 1e-6);
        assert!((gold.blue - HALO_GOLD.blue).abs() < 1e-6);

        let blue = halo_color(1.0).to_srgba();
        assert!((blue.red - HALO_BLUE.red).abs() < 1e-6);
        assert!((blue.blue - HALO_BLUE.blue).abs() < 1e-6);
    }

    #[test]
    fn shell_points_stay_inside_the_shell() {
        let mut rng = StdRng::seed_from_u64(9);
        for _ in 0..1000 {
            let radius = shell_point(&mut rng, 3.0, 12.0).length();
            assert!(radius >= 3.0 - 1e-3);
            assert!(radius <= 12.0 + 1e-3);
        }
    }

    #[test]
    fn octahedron_mesh_has_eight_faces() {
        let mesh = octahedron_mesh(0.9);
        assert_eq!(mesh.count_vertices(), 6);
        let indices = mesh.indices().expect("indexed mesh");
        assert_eq!(indices.len(), 24);
    }
}
