//! Renderer-facing description of one frame.
//!
//! A frame borrows textures and particle positions from the scene, so the host
//! can upload them without copying and the scene cannot be advanced while a
//! frame is alive.

use glam::{Mat4, Vec3};
use orbis_texture::Texture;

use crate::body::ShellKind;
use crate::camera::{CameraRig, FAR, NEAR};
use crate::debris::DEBRIS_COUNT;
use crate::lighting::Lighting;
use crate::material::Material;

/// Primitives in every frame: three body shells, each debris body, the particle cloud.
pub const FRAME_PRIMITIVES: usize = 3 + DEBRIS_COUNT + 1;

/// Which scene entity a primitive was built from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PrimitiveKind {
    /// One of the planet's shells.
    Body(ShellKind),
    /// Debris body by construction index.
    Debris(usize),
    /// The particle cloud.
    Particles,
}

/// Shape to rasterize.
#[derive(Clone, Copy, Debug)]
pub enum Geometry<'a> {
    /// UV sphere centered at the local origin.
    Sphere {
        /// Sphere radius.
        radius: f32,
        /// Width and height segments.
        segments: u32,
    },
    /// Point list in local space.
    Points {
        /// One `[x, y, z]` per point.
        positions: &'a [[f32; 3]],
    },
}

/// A shaded primitive with its model transform and bound texture.
#[derive(Clone, Copy, Debug)]
pub struct Primitive<'a> {
    /// Source entity.
    pub kind: PrimitiveKind,
    /// Shape.
    pub geometry: Geometry<'a>,
    /// Local-to-world matrix.
    pub transform: Mat4,
    /// Shading parameters.
    pub material: Material,
    /// Color map or point sprite.
    pub texture: Option<&'a Texture>,
}

/// Camera matrices for the frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraView {
    /// Eye position.
    pub position: Vec3,
    /// World-to-view matrix.
    pub view: Mat4,
    /// View-to-clip matrix.
    pub projection: Mat4,
    /// Vertical field of view in radians.
    pub fov_y: f32,
    /// Width / height.
    pub aspect_ratio: f32,
    /// Near clip distance.
    pub near: f32,
    /// Far clip distance.
    pub far: f32,
}

impl CameraView {
    pub(crate) fn from_rig(rig: &CameraRig) -> Self {
        Self {
            position: rig.position(),
            view: rig.view_matrix(),
            projection: rig.projection_matrix(),
            fov_y: rig.fov_y(),
            aspect_ratio: rig.aspect_ratio(),
            near: NEAR,
            far: FAR,
        }
    }
}

/// Everything the host renderer needs to draw one frame.
#[derive(Clone, Debug)]
pub struct RenderableFrame<'a> {
    /// Number of effective ticks applied before this frame.
    pub index: u64,
    /// Camera matrices.
    pub camera: CameraView,
    /// Static lights.
    pub lighting: Lighting,
    /// Primitives in construction order: body shells, debris, particles.
    /// Use [`RenderableFrame::draw_order`] to submit them.
    pub primitives: [Primitive<'a>; FRAME_PRIMITIVES],
}

impl<'a> RenderableFrame<'a> {
    /// First primitive built from `kind`.
    pub fn find(&self, kind: PrimitiveKind) -> Option<&Primitive<'a>> {
        self.primitives.iter().find(|p| p.kind == kind)
    }

    /// Opaque primitives followed by transparent ones, preserving relative order.
    pub fn draw_order(&self) -> impl Iterator<Item = &Primitive<'a>> {
        let opaque = self.primitives.iter().filter(|p| !p.material.transparent);
        let transparent = self.primitives.iter().filter(|p| p.material.transparent);
        opaque.chain(transparent)
    }
}
