use crate::error::SceneError;

/// Size of the host's render region in physical pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Viewport {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Viewport {
    /// Create a viewport, rejecting zero-sized dimensions.
    pub fn new(width: u32, height: u32) -> Result<Self, SceneError> {
        if width == 0 || height == 0 {
            return Err(SceneError::InvalidViewport { width, height });
        }
        Ok(Self { width, height })
    }

    /// Width divided by height.
    pub fn aspect_ratio(&self) -> f32 {
        self.width as f32 / self.height as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_dimensions_rejected() {
        assert!(matches!(
            Viewport::new(0, 720),
            Err(SceneError::InvalidViewport { width: 0, height: 720 })
        ));
        assert!(Viewport::new(1280, 0).is_err());
    }

    #[test]
    fn test_aspect_ratio() {
        let vp = Viewport::new(1920, 1080).unwrap();
        assert!((vp.aspect_ratio() - 16.0 / 9.0).abs() < 1e-6);
    }
}
