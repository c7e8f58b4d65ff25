//! Texture generation error types.

/// Errors that can occur while synthesizing or exporting a texture.
#[derive(Debug, thiserror::Error)]
pub enum TextureError {
    /// The pixel buffer could not be reserved.
    #[error("failed to allocate {width}x{height} bitmap: {source}")]
    Allocation {
        /// Requested width in pixels.
        width: u32,
        /// Requested height in pixels.
        height: u32,
        /// Underlying reservation failure.
        #[source]
        source: std::collections::TryReserveError,
    },

    /// Encoding or writing the image file failed.
    #[error("failed to export texture: {0}")]
    Export(#[from] image::ImageError),
}
