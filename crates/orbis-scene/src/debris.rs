//! Small rocks scattered around the planet, each spinning in place.

use glam::{EulerRot, Mat4, Quat, Vec3};

use crate::body::wrap_angle;
use crate::material::Material;

/// Radians per tick about X for a speed factor of 1.
pub const DEBRIS_RATE_X: f64 = 0.01;
/// Radians per tick about Y for a speed factor of 1.
pub const DEBRIS_RATE_Y: f64 = 0.015;

/// Number of debris bodies.
pub const DEBRIS_COUNT: usize = 5;

/// Placement of one debris body: `(position, radius, speed)`.
pub const DEBRIS_LAYOUT: [([f32; 3], f32, f64); DEBRIS_COUNT] = [
    ([5.0, 2.0, -3.0], 0.20, 1.0),
    ([-4.0, -1.0, 4.0], 0.15, 1.5),
    ([3.0, -3.0, 2.0], 0.25, 0.8),
    ([-6.0, 1.0, -2.0], 0.18, 1.2),
    ([2.0, 4.0, -4.0], 0.22, 0.9),
];

/// A rock with a fixed position and radius whose X and Y rotations
/// accumulate independently.
#[derive(Clone, Debug, PartialEq)]
pub struct DebrisBody {
    position: Vec3,
    radius: f32,
    speed: f64,
    rotation_x: f64,
    rotation_y: f64,
}

impl DebrisBody {
    /// A body at rest orientation.
    pub fn new(position: Vec3, radius: f32, speed: f64) -> Self {
        Self {
            position,
            radius,
            speed,
            rotation_x: 0.0,
            rotation_y: 0.0,
        }
    }

    fn advance(&mut self, dt_ticks: f64) {
        self.rotation_x += self.speed * DEBRIS_RATE_X * dt_ticks;
        self.rotation_y += self.speed * DEBRIS_RATE_Y * dt_ticks;
    }

    /// Fixed center.
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Fixed radius.
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Spin multiplier.
    pub fn speed(&self) -> f64 {
        self.speed
    }

    /// Accumulated `(x, y)` rotation in radians, not wrapped.
    pub fn orientation(&self) -> (f64, f64) {
        (self.rotation_x, self.rotation_y)
    }

    /// Model matrix: XYZ Euler rotation followed by translation.
    pub fn transform(&self) -> Mat4 {
        let rotation = Quat::from_euler(
            EulerRot::XYZ,
            wrap_angle(self.rotation_x),
            wrap_angle(self.rotation_y),
            0.0,
        );
        Mat4::from_rotation_translation(rotation, self.position)
    }
}

/// The fixed set of debris bodies, iterated in construction order.
#[derive(Clone, Debug)]
pub struct DebrisField {
    bodies: [DebrisBody; DEBRIS_COUNT],
}

impl DebrisField {
    /// Tessellation used for every debris sphere.
    pub const SEGMENTS: u32 = 8;

    /// Build the five bodies of [`DEBRIS_LAYOUT`].
    pub fn new() -> Self {
        let bodies = DEBRIS_LAYOUT.map(|(position, radius, speed)| {
            DebrisBody::new(Vec3::from_array(position), radius, speed)
        });
        Self { bodies }
    }

    /// Spin every body by its own speed factor.
    pub fn advance(&mut self, dt_ticks: f64) {
        for body in &mut self.bodies {
            body.advance(dt_ticks);
        }
    }

    /// Bodies in construction order.
    pub fn bodies(&self) -> &[DebrisBody] {
        &self.bodies
    }

    /// Number of bodies.
    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    /// Whether the field has no bodies.
    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Shading shared by all debris.
    pub fn material(&self) -> Material {
        Material::DEBRIS
    }
}

impl Default for DebrisField {
    fn default() -> Self {
        Self::new()
    }
}
