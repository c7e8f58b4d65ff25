//! Surface descriptions handed to the renderer with each primitive.

use orbis_texture::rgb;

/// Which faces of a closed mesh are rasterized.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    /// Outward-facing triangles only.
    Front,
    /// Inward-facing triangles only, used for halo shells.
    Back,
}

/// Framebuffer blend equation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Blending {
    /// Standard alpha blending.
    Normal,
    /// Source color added onto the destination.
    Additive,
}

/// Lighting model.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Shading {
    /// Metallic-roughness PBR.
    Standard {
        /// Microfacet roughness in `[0, 1]`.
        roughness: f32,
        /// Metalness in `[0, 1]`.
        metalness: f32,
    },
    /// Unlit flat color.
    Basic,
    /// Screen-facing point sprites.
    Points {
        /// Sprite size in world units.
        size: f32,
        /// Shrink sprites with distance from the camera.
        size_attenuation: bool,
    },
}

/// Everything the renderer needs to shade a primitive, minus the bound texture.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Material {
    /// Lighting model.
    pub shading: Shading,
    /// Base color, straight-alpha RGBA in `[0, 1]`.
    pub color: [f32; 4],
    /// Overall opacity; only honored when `transparent` is set.
    pub opacity: f32,
    /// Sort into the transparent pass.
    pub transparent: bool,
    /// Faces to draw.
    pub side: Side,
    /// Blend equation.
    pub blending: Blending,
    /// Fragments with alpha below this are discarded. Zero disables the test.
    pub alpha_test: f32,
    /// Write to the depth buffer.
    pub depth_write: bool,
}

impl Material {
    const OPAQUE: Self = Self {
        shading: Shading::Standard {
            roughness: 1.0,
            metalness: 0.0,
        },
        color: rgb(0xffffff),
        opacity: 1.0,
        transparent: false,
        side: Side::Front,
        blending: Blending::Normal,
        alpha_test: 0.0,
        depth_write: true,
    };

    /// Textured planet surface.
    pub const BODY: Self = Self {
        shading: Shading::Standard {
            roughness: 0.8,
            metalness: 0.2,
        },
        ..Self::OPAQUE
    };

    /// Violet atmosphere shell seen from inside.
    pub const ATMOSPHERE: Self = Self {
        color: rgb(0x6b46c1),
        opacity: 0.2,
        transparent: true,
        side: Side::Back,
        ..Self::OPAQUE
    };

    /// Unlit pink glow halo.
    pub const GLOW: Self = Self {
        shading: Shading::Basic,
        color: rgb(0xff1493),
        opacity: 0.1,
        transparent: true,
        side: Side::Back,
        ..Self::OPAQUE
    };

    /// Rough grey debris.
    pub const DEBRIS: Self = Self {
        shading: Shading::Standard {
            roughness: 0.9,
            metalness: 0.0,
        },
        color: rgb(0x4a5568),
        ..Self::OPAQUE
    };

    /// Additive soft star sprites.
    pub const PARTICLES: Self = Self {
        shading: Shading::Points {
            size: 0.15,
            size_attenuation: true,
        },
        opacity: 0.9,
        transparent: true,
        blending: Blending::Additive,
        alpha_test: 0.2,
        depth_write: false,
        ..Self::OPAQUE
    };
}
