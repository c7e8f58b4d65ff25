//! Procedural bitmap synthesis: gradient painters, disc stamping, and the two
//! textures the scene samples (the cratered planet surface and the soft
//! particle sprite).

mod bitmap;
mod error;
pub mod gradient;
mod sprite;
mod surface;

pub use bitmap::{FilterMode, Sampling, Texture};
pub use error::TextureError;
pub use gradient::{ColorStop, Gradient, LinearGradient, RadialGradient, rgb, rgba};
pub use sprite::{SPRITE_SIZE, SpriteTexture, generate_sprite_texture};
pub use surface::{
    CRATER_COLOR, CRATER_COUNT, CRATER_RADIUS_MAX, CRATER_RADIUS_MIN, Crater, SURFACE_HEIGHT,
    SURFACE_WIDTH, SurfaceTexture, generate_surface_texture,
};
