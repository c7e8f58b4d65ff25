//! Cratered planet surface: a diagonal four-stop gradient with randomly
//! stamped discs on top.

use rand::Rng;

use crate::bitmap::{Sampling, Texture};
use crate::error::TextureError;
use crate::gradient::{ColorStop, Gradient, LinearGradient, fill_disc, rgb};

/// Surface bitmap width in pixels.
pub const SURFACE_WIDTH: u32 = 512;
/// Surface bitmap height in pixels.
pub const SURFACE_HEIGHT: u32 = 256;
/// Number of craters stamped onto every surface.
pub const CRATER_COUNT: usize = 20;
/// Smallest crater radius (inclusive).
pub const CRATER_RADIUS_MIN: f32 = 5.0;
/// Largest crater radius (exclusive).
pub const CRATER_RADIUS_MAX: f32 = 20.0;
/// Fill color shared by all craters.
pub const CRATER_COLOR: [f32; 4] = rgb(0x2d3748);

const SURFACE_STOPS: [ColorStop; 4] = [
    ColorStop::new(0.0, rgb(0x1a1a2e)),
    ColorStop::new(0.3, rgb(0x16213e)),
    ColorStop::new(0.6, rgb(0x0f3460)),
    ColorStop::new(1.0, rgb(0x6b46c1)),
];

/// One stamped disc.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Crater {
    /// Center in pixel coordinates.
    pub center: [f32; 2],
    /// Radius in pixels, in `[CRATER_RADIUS_MIN, CRATER_RADIUS_MAX)`.
    pub radius: f32,
}

/// The equirectangular surface map wrapped around the celestial body.
#[derive(Clone, Debug)]
pub struct SurfaceTexture {
    texture: Texture,
    craters: Vec<Crater>,
}

impl SurfaceTexture {
    /// The painted bitmap.
    pub fn texture(&self) -> &Texture {
        &self.texture
    }

    /// Craters in the order they were stamped.
    pub fn craters(&self) -> &[Crater] {
        &self.craters
    }
}

/// Diagonal from the top-left corner to the bottom-right corner.
fn surface_gradient() -> LinearGradient {
    LinearGradient {
        start: [0.0, 0.0],
        end: [SURFACE_WIDTH as f32, SURFACE_HEIGHT as f32],
        gradient: Gradient::new(&SURFACE_STOPS),
    }
}

/// Paint the surface gradient and stamp [`CRATER_COUNT`] craters drawn from `rng`.
///
/// Crater centers are uniform over the bitmap extents and radii uniform in
/// `[CRATER_RADIUS_MIN, CRATER_RADIUS_MAX)`. The same generator state always
/// yields the same surface.
pub fn generate_surface_texture<R: Rng + ?Sized>(
    rng: &mut R,
) -> Result<SurfaceTexture, TextureError> {
    let mut texture = Texture::filled(SURFACE_WIDTH, SURFACE_HEIGHT, [0, 0, 0, 0])?
        .with_sampling(Sampling::MIPMAPPED);

    surface_gradient().fill(&mut texture);

    let craters: Vec<Crater> = (0..CRATER_COUNT)
        .map(|_| Crater {
            center: [
                rng.random_range(0.0..SURFACE_WIDTH as f32),
                rng.random_range(0.0..SURFACE_HEIGHT as f32),
            ],
            radius: rng.random_range(CRATER_RADIUS_MIN..CRATER_RADIUS_MAX),
        })
        .collect();

    for crater in &craters {
        fill_disc(&mut texture, crater.center, crater.radius, CRATER_COLOR);
    }

    tracing::debug!(
        "Generated {}x{} surface texture with {} craters",
        SURFACE_WIDTH,
        SURFACE_HEIGHT,
        craters.len()
    );

    Ok(SurfaceTexture { texture, craters })
}
