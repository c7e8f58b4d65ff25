//! RGBA8 bitmap storage with straight-alpha compositing and export helpers.

use std::path::Path;

use crate::error::TextureError;

/// Texel filter applied by the renderer when sampling a texture.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FilterMode {
    /// Bilinear filtering on the base level only.
    Linear,
    /// Bilinear filtering blended across mip levels.
    LinearMipmapLinear,
}

/// Sampling hints handed to the renderer alongside the pixel data.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Sampling {
    /// Minification filter.
    pub min_filter: FilterMode,
    /// Magnification filter.
    pub mag_filter: FilterMode,
    /// Whether the renderer should build a mip chain on upload.
    pub generate_mipmaps: bool,
}

impl Sampling {
    /// Trilinear sampling with a generated mip chain.
    pub const MIPMAPPED: Self = Self {
        min_filter: FilterMode::LinearMipmapLinear,
        mag_filter: FilterMode::Linear,
        generate_mipmaps: true,
    };

    /// Plain bilinear sampling, no mips.
    pub const LINEAR: Self = Self {
        min_filter: FilterMode::Linear,
        mag_filter: FilterMode::Linear,
        generate_mipmaps: false,
    };
}

impl Default for Sampling {
    fn default() -> Self {
        Self::MIPMAPPED
    }
}

/// An immutable-after-construction RGBA8 bitmap, row-major, origin top-left.
#[derive(Clone, Debug, PartialEq)]
pub struct Texture {
    width: u32,
    height: u32,
    pixels: Vec<[u8; 4]>,
    sampling: Sampling,
}

impl Texture {
    /// Allocate a bitmap filled with a single color.
    ///
    /// The buffer is reserved fallibly so an allocation failure surfaces as
    /// [`TextureError::Allocation`] instead of aborting.
    pub fn filled(width: u32, height: u32, color: [u8; 4]) -> Result<Self, TextureError> {
        let len = width as usize * height as usize;
        let mut pixels = Vec::new();
        pixels
            .try_reserve_exact(len)
            .map_err(|source| TextureError::Allocation {
                width,
                height,
                source,
            })?;
        pixels.resize(len, color);
        Ok(Self {
            width,
            height,
            pixels,
            sampling: Sampling::default(),
        })
    }

    /// Replace the sampling hints.
    pub fn with_sampling(mut self, sampling: Sampling) -> Self {
        self.sampling = sampling;
        self
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Sampling hints for the renderer.
    pub fn sampling(&self) -> Sampling {
        self.sampling
    }

    /// All pixels, row-major.
    pub fn pixels(&self) -> &[[u8; 4]] {
        &self.pixels
    }

    /// Pixel at `(x, y)`, or `None` when out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels.get(self.index(x, y)).copied()
    }

    /// Tightly packed RGBA8 bytes suitable for GPU upload.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    /// Copy into an [`image::RgbaImage`].
    pub fn to_image(&self) -> image::RgbaImage {
        image::RgbaImage::from_fn(self.width, self.height, |x, y| {
            image::Rgba(self.pixels[self.index(x, y)])
        })
    }

    /// Encode the bitmap as a PNG file.
    pub fn save_png(&self, path: &Path) -> Result<(), TextureError> {
        self.to_image()
            .save_with_format(path, image::ImageFormat::Png)?;
        tracing::debug!(
            "Exported {}x{} texture to {}",
            self.width,
            self.height,
            path.display()
        );
        Ok(())
    }

    /// Composite `src` (straight alpha, components in `[0, 1]`) over the pixel
    /// at `(x, y)` with the given coverage. Out-of-bounds writes are ignored.
    pub(crate) fn blend(&mut self, x: u32, y: u32, src: [f32; 4], coverage: f32) {
        if x >= self.width || y >= self.height {
            return;
        }
        let idx = self.index(x, y);
        self.pixels[idx] = source_over(self.pixels[idx], src, coverage);
    }

    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }
}

/// Porter-Duff source-over in straight alpha.
fn source_over(dst: [u8; 4], src: [f32; 4], coverage: f32) -> [u8; 4] {
    let sa = (src[3] * coverage).clamp(0.0, 1.0);
    let da = f32::from(dst[3]) / 255.0;
    let out_a = sa + da * (1.0 - sa);
    if out_a <= f32::EPSILON {
        return [0, 0, 0, 0];
    }
    let mut out = [0u8; 4];
    for c in 0..3 {
        let s = src[c].clamp(0.0, 1.0);
        let d = f32::from(dst[c]) / 255.0;
        let v = (s * sa + d * da * (1.0 - sa)) / out_a;
        out[c] = to_u8(v);
    }
    out[3] = to_u8(out_a);
    out
}

fn to_u8(v: f32) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}
