//! Real-time procedural planet scene.
//!
//! A rotating textured planet with atmosphere and glow shells, a handful of
//! spinning debris bodies, a rigid star cloud, and an auto-rotating orbit
//! camera. The host drives it with [`Scene::tick`] once per displayed frame and
//! draws the returned [`RenderableFrame`]; nothing here rasterizes or does I/O
//! after construction.

pub mod body;
pub mod camera;
pub mod debris;
mod error;
mod frame;
pub mod lighting;
mod material;
pub mod particles;
mod scene;
mod viewport;

pub use body::{CelestialBody, Shell, ShellKind, ShellState};
pub use camera::CameraRig;
pub use debris::{DebrisBody, DebrisField};
pub use error::{Control, SceneError};
pub use frame::{
    CameraView, FRAME_PRIMITIVES, Geometry, Primitive, PrimitiveKind, RenderableFrame,
};
pub use lighting::{AmbientLight, Lighting, PointLight};
pub use material::{Blending, Material, Shading, Side};
pub use particles::ParticleField;
pub use scene::{Scene, create_scene, create_scene_seeded};
pub use viewport::Viewport;
