//! The central planet: textured surface sphere plus atmosphere and glow shells
//! sharing one center.

use glam::Mat4;
use orbis_texture::{SurfaceTexture, Texture};

use crate::material::Material;

/// Surface sphere radius.
pub const BODY_RADIUS: f32 = 2.0;
/// Surface spin about +Y in radians per tick.
pub const BODY_RATE: f64 = 0.005;
/// Atmosphere shell radius.
pub const ATMOSPHERE_RADIUS: f32 = 2.1;
/// Atmosphere spin about +Y in radians per tick.
pub const ATMOSPHERE_RATE: f64 = 0.003;
/// Glow shell radius. The glow never spins.
pub const GLOW_RADIUS: f32 = 2.3;

/// Which layer of the body a shell is.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShellKind {
    /// The textured planet sphere.
    Surface,
    /// Translucent atmosphere.
    Atmosphere,
    /// Translucent halo.
    Glow,
}

/// A sphere spinning about +Y at a fixed rate.
#[derive(Clone, Debug)]
pub struct Shell {
    kind: ShellKind,
    radius: f32,
    segments: u32,
    rate: f64,
    orientation: f64,
    material: Material,
}

impl Shell {
    fn new(kind: ShellKind, radius: f32, segments: u32, rate: f64, material: Material) -> Self {
        Self {
            kind,
            radius,
            segments,
            rate,
            orientation: 0.0,
            material,
        }
    }

    fn advance(&mut self, dt_ticks: f64) {
        self.orientation += self.rate * dt_ticks;
    }

    /// Layer this shell represents.
    pub fn kind(&self) -> ShellKind {
        self.kind
    }

    /// Sphere radius.
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Accumulated rotation about +Y in radians, not wrapped.
    pub fn orientation(&self) -> f64 {
        self.orientation
    }

    /// Spin rate in radians per tick.
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Model matrix. The angle is reduced modulo 2π before narrowing to `f32`.
    pub fn transform(&self) -> Mat4 {
        Mat4::from_rotation_y(wrap_angle(self.orientation))
    }
}

/// What the renderer consumes for one shell.
#[derive(Clone, Copy, Debug)]
pub struct ShellState<'a> {
    /// Layer.
    pub kind: ShellKind,
    /// Sphere radius.
    pub radius: f32,
    /// Width and height segment count for tessellation.
    pub segments: u32,
    /// Accumulated rotation about +Y in radians.
    pub orientation: f64,
    /// Model matrix.
    pub transform: Mat4,
    /// Shading parameters.
    pub material: Material,
    /// Bound surface map, if any.
    pub texture: Option<&'a Texture>,
}

/// Planet surface, atmosphere, and glow.
#[derive(Clone, Debug)]
pub struct CelestialBody {
    surface: SurfaceTexture,
    body: Shell,
    atmosphere: Shell,
    glow: Shell,
}

impl CelestialBody {
    /// Wrap the given surface map around a new body with all angles at zero.
    pub fn new(surface: SurfaceTexture) -> Self {
        Self {
            surface,
            body: Shell::new(ShellKind::Surface, BODY_RADIUS, 64, BODY_RATE, Material::BODY),
            atmosphere: Shell::new(
                ShellKind::Atmosphere,
                ATMOSPHERE_RADIUS,
                32,
                ATMOSPHERE_RATE,
                Material::ATMOSPHERE,
            ),
            glow: Shell::new(ShellKind::Glow, GLOW_RADIUS, 32, 0.0, Material::GLOW),
        }
    }

    /// Spin the surface and atmosphere by `rate * dt_ticks`. The glow is static.
    pub fn advance(&mut self, dt_ticks: f64) {
        self.body.advance(dt_ticks);
        self.atmosphere.advance(dt_ticks);
    }

    /// The surface sphere.
    pub fn body(&self) -> &Shell {
        &self.body
    }

    /// The atmosphere shell.
    pub fn atmosphere(&self) -> &Shell {
        &self.atmosphere
    }

    /// The glow shell.
    pub fn glow(&self) -> &Shell {
        &self.glow
    }

    /// The surface map and its crater layout.
    pub fn surface(&self) -> &SurfaceTexture {
        &self.surface
    }

    /// Per-shell render state, innermost first.
    pub fn render_state(&self) -> [ShellState<'_>; 3] {
        [
            self.shell_state(&self.body, Some(self.surface.texture())),
            self.shell_state(&self.atmosphere, None),
            self.shell_state(&self.glow, None),
        ]
    }

    fn shell_state<'a>(&self, shell: &Shell, texture: Option<&'a Texture>) -> ShellState<'a> {
        ShellState {
            kind: shell.kind,
            radius: shell.radius,
            segments: shell.segments,
            orientation: shell.orientation,
            transform: shell.transform(),
            material: shell.material,
            texture,
        }
    }
}

/// Reduce an unbounded angle into `[0, 2π)` and narrow it for matrix math.
pub(crate) fn wrap_angle(angle: f64) -> f32 {
    angle.rem_euclid(std::f64::consts::TAU) as f32
}
