//! Scene construction and control error types.

use orbis_texture::TextureError;

/// Camera controls that the rig refuses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Control {
    /// Dolly toward or away from the target.
    Zoom,
    /// Translate the target.
    Pan,
}

impl std::fmt::Display for Control {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Control::Zoom => f.write_str("zoom"),
            Control::Pan => f.write_str("pan"),
        }
    }
}

/// Errors surfaced by the scene.
#[derive(Debug, thiserror::Error)]
pub enum SceneError {
    /// The viewport has a zero dimension.
    #[error("invalid viewport {width}x{height}: both dimensions must be positive")]
    InvalidViewport {
        /// Requested width.
        width: u32,
        /// Requested height.
        height: u32,
    },

    /// A procedural texture could not be generated.
    #[error("texture generation failed: {0}")]
    Texture(#[from] TextureError),

    /// The particle position buffer could not be reserved.
    #[error("failed to allocate particle buffer: {0}")]
    Allocation(#[from] std::collections::TryReserveError),

    /// The camera rig does not allow this control.
    #[error("camera {0} is disabled")]
    ControlDisabled(Control),
}
