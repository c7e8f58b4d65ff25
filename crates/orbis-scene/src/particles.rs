//! Background star cloud rotated as one rigid group.
//!
//! Positions are drawn once at construction and never touched again; the only
//! per-frame state is a single shared rotation applied to both the X and Y axes.

use glam::{EulerRot, Mat4, Quat, Vec3};
use orbis_texture::{SpriteTexture, Texture, generate_sprite_texture};
use rand::Rng;

use crate::body::wrap_angle;
use crate::error::SceneError;
use crate::material::Material;

/// Number of particles in the field.
pub const PARTICLE_COUNT: usize = 1000;
/// Half-extent of the cube particles are scattered in.
pub const PARTICLE_EXTENT: f32 = 25.0;
/// Rotation about both X and Y in radians per tick.
pub const PARTICLE_RATE: f64 = 0.0005;

/// A fixed point cloud with one transform.
#[derive(Clone, Debug)]
pub struct ParticleField {
    positions: Vec<[f32; 3]>,
    sprite: SpriteTexture,
    rotation: f64,
}

impl ParticleField {
    /// Scatter [`PARTICLE_COUNT`] points uniformly in
    /// `[-PARTICLE_EXTENT, PARTICLE_EXTENT)` on each axis and build the sprite.
    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Result<Self, SceneError> {
        let mut positions: Vec<[f32; 3]> = Vec::new();
        positions.try_reserve_exact(PARTICLE_COUNT)?;
        positions.extend((0..PARTICLE_COUNT).map(|_| {
            [
                rng.random_range(-PARTICLE_EXTENT..PARTICLE_EXTENT),
                rng.random_range(-PARTICLE_EXTENT..PARTICLE_EXTENT),
                rng.random_range(-PARTICLE_EXTENT..PARTICLE_EXTENT),
            ]
        }));
        let sprite = generate_sprite_texture()?;

        Ok(Self {
            positions,
            sprite,
            rotation: 0.0,
        })
    }

    /// Rotate the whole cloud by `PARTICLE_RATE * dt_ticks` on X and Y.
    pub fn advance(&mut self, dt_ticks: f64) {
        self.rotation += PARTICLE_RATE * dt_ticks;
    }

    /// Local-space positions.
    pub fn positions(&self) -> &[[f32; 3]] {
        &self.positions
    }

    /// Positions as a flat `xyzxyz...` buffer, three floats per particle.
    pub fn positions_flat(&self) -> &[f32] {
        bytemuck::cast_slice(&self.positions)
    }

    /// Number of particles.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Whether the field has no particles.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Accumulated `(x, y)` rotation in radians. Both axes always match.
    pub fn orientation(&self) -> (f64, f64) {
        (self.rotation, self.rotation)
    }

    /// Point sprite bound to the material.
    pub fn sprite(&self) -> &Texture {
        self.sprite.texture()
    }

    /// Shading for the point cloud.
    pub fn material(&self) -> Material {
        Material::PARTICLES
    }

    /// Group transform: XYZ Euler rotation with equal X and Y angles.
    pub fn transform(&self) -> Mat4 {
        let angle = wrap_angle(self.rotation);
        Mat4::from_quat(Quat::from_euler(EulerRot::XYZ, angle, angle, 0.0))
    }

    /// Positions after applying the group transform.
    pub fn world_positions(&self) -> impl Iterator<Item = Vec3> + '_ {
        let transform = self.transform();
        self.positions
            .iter()
            .map(move |p| transform.transform_point3(Vec3::from_array(*p)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn field(seed: u64) -> ParticleField {
        ParticleField::generate(&mut ChaCha8Rng::seed_from_u64(seed)).unwrap()
    }

    #[test]
    fn test_particle_count() {
        let f = field(42);
        assert_eq!(f.len(), 1000);
        assert_eq!(f.positions_flat().len(), 3000);
    }

    #[test]
    fn test_positions_within_bounds() {
        let f = field(42);
        for (i, p) in f.positions().iter().enumerate() {
            for &c in p {
                assert!(
                    (-25.0..=25.0).contains(&c),
                    "particle {i} coordinate {c} out of bounds"
                );
            }
        }
    }

    #[test]
    fn test_positions_fill_all_octants() {
        let f = field(42);
        let mut octants = [0u32; 8];
        for p in f.positions() {
            let o = ((p[0] >= 0.0) as usize)
                | (((p[1] >= 0.0) as usize) << 1)
                | (((p[2] >= 0.0) as usize) << 2);
            octants[o] += 1;
        }
        for (i, &count) in octants.iter().enumerate() {
            assert!(
                (60..=200).contains(&count),
                "octant {i} has {count} particles, expected roughly 125"
            );
        }
    }

    #[test]
    fn test_advance_only_changes_rotation() {
        let mut f = field(7);
        let before = f.positions().to_vec();
        for _ in 0..250 {
            f.advance(1.0);
        }
        assert_eq!(f.positions(), before.as_slice());
        let (x, y) = f.orientation();
        assert_eq!(x, y);
        assert!((x - 0.125).abs() < 1e-12);
    }

    #[test]
    fn test_single_tick_rotation() {
        let mut f = field(1);
        f.advance(1.0);
        assert_eq!(f.orientation(), (0.0005, 0.0005));
    }

    #[test]
    fn test_world_positions_preserve_distance() {
        let mut f = field(3);
        f.advance(900.0);
        for (local, world) in f.positions().iter().zip(f.world_positions()) {
            let l = Vec3::from_array(*local).length();
            assert!((l - world.length()).abs() < 1e-3);
        }
    }

    #[test]
    fn test_same_seed_same_cloud() {
        assert_eq!(field(5).positions(), field(5).positions());
        assert_ne!(field(5).positions(), field(6).positions());
    }

    #[test]
    fn test_sprite_is_bound() {
        let f = field(9);
        assert_eq!(f.sprite().width(), 64);
        assert_eq!(f.material().alpha_test, 0.2);
    }
}
