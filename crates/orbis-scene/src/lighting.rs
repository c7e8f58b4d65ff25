//! Static scene lighting: one ambient term and two point lights.

use glam::Vec3;

/// Uniform light applied to every surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AmbientLight {
    /// Linear RGB color.
    pub color: Vec3,
    /// Scalar multiplier.
    pub intensity: f32,
}

/// Omnidirectional light at a fixed position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointLight {
    /// World-space position.
    pub position: Vec3,
    /// Linear RGB color.
    pub color: Vec3,
    /// Scalar multiplier.
    pub intensity: f32,
}

/// The full light rig. Configuration only; nothing here changes per frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Lighting {
    /// Fill light.
    pub ambient: AmbientLight,
    /// Key light above and in front, fill light below and behind.
    pub points: [PointLight; 2],
}

impl Lighting {
    /// Dim white ambient, a white key light, and a violet rim light.
    pub const DEFAULT: Self = Self {
        ambient: AmbientLight {
            color: Vec3::ONE,
            intensity: 0.3,
        },
        points: [
            PointLight {
                position: Vec3::new(10.0, 10.0, 10.0),
                color: Vec3::ONE,
                intensity: 1.0,
            },
            PointLight {
                position: Vec3::new(-10.0, -10.0, -10.0),
                color: Vec3::new(107.0 / 255.0, 70.0 / 255.0, 193.0 / 255.0),
                intensity: 0.5,
            },
        ],
    };
}

impl Default for Lighting {
    fn default() -> Self {
        Self::DEFAULT
    }
}
