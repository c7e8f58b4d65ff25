//! Soft round point sprite for the particle field.

use crate::bitmap::{Sampling, Texture};
use crate::error::TextureError;
use crate::gradient::{ColorStop, Gradient, RadialGradient, rgba};

/// Sprite width and height in pixels.
pub const SPRITE_SIZE: u32 = 64;

const SPRITE_STOPS: [ColorStop; 3] = [
    ColorStop::new(0.0, rgba(0xffffff, 1.0)),
    ColorStop::new(0.4, rgba(0xffffff, 0.8)),
    ColorStop::new(1.0, rgba(0xffffff, 0.0)),
];

/// White radial falloff, opaque at the center and transparent at the rim.
#[derive(Clone, Debug)]
pub struct SpriteTexture {
    texture: Texture,
}

impl SpriteTexture {
    /// The painted bitmap.
    pub fn texture(&self) -> &Texture {
        &self.texture
    }
}

/// Clear a [`SPRITE_SIZE`] square and fill its inscribed disc with the
/// white-to-transparent radial gradient. Sampled linearly without mips.
pub fn generate_sprite_texture() -> Result<SpriteTexture, TextureError> {
    let mut texture =
        Texture::filled(SPRITE_SIZE, SPRITE_SIZE, [0, 0, 0, 0])?.with_sampling(Sampling::LINEAR);

    let half = SPRITE_SIZE as f32 / 2.0;
    RadialGradient {
        center: [half, half],
        radius: half,
        gradient: Gradient::new(&SPRITE_STOPS),
    }
    .fill_disc(&mut texture);

    Ok(SpriteTexture { texture })
}
