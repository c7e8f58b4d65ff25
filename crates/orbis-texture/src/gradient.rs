//! Color stops and the two gradient shapes used by the generators.
//!
//! Colors are straight-alpha RGBA with components in `[0, 1]`. Interpolation
//! happens component-wise in sRGB space between the two neighboring stops.

use crate::bitmap::Texture;

/// Opaque color from a `0xRRGGBB` literal.
pub const fn rgb(hex: u32) -> [f32; 4] {
    rgba(hex, 1.0)
}

/// Color from a `0xRRGGBB` literal plus an alpha in `[0, 1]`.
pub const fn rgba(hex: u32, alpha: f32) -> [f32; 4] {
    [
        ((hex >> 16) & 0xff) as f32 / 255.0,
        ((hex >> 8) & 0xff) as f32 / 255.0,
        (hex & 0xff) as f32 / 255.0,
        alpha,
    ]
}

/// A color pinned at a normalized offset along a gradient.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorStop {
    /// Position along the gradient in `[0, 1]`.
    pub offset: f32,
    /// Color at this position.
    pub color: [f32; 4],
}

impl ColorStop {
    /// Create a stop.
    pub const fn new(offset: f32, color: [f32; 4]) -> Self {
        Self { offset, color }
    }
}

/// An ordered list of color stops.
#[derive(Clone, Debug, PartialEq)]
pub struct Gradient {
    stops: Vec<ColorStop>,
}

impl Gradient {
    /// Build a gradient. Stops are sorted by offset; an empty list samples as
    /// transparent black.
    pub fn new(stops: &[ColorStop]) -> Self {
        let mut stops = stops.to_vec();
        stops.sort_by(|a, b| a.offset.total_cmp(&b.offset));
        Self { stops }
    }

    /// The stops in offset order.
    pub fn stops(&self) -> &[ColorStop] {
        &self.stops
    }

    /// Color at `t`. Values outside the first/last stop clamp to the end colors.
    pub fn sample(&self, t: f32) -> [f32; 4] {
        let (Some(first), Some(last)) = (self.stops.first(), self.stops.last()) else {
            return [0.0; 4];
        };
        if t <= first.offset {
            return first.color;
        }
        if t >= last.offset {
            return last.color;
        }
        for pair in self.stops.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            if t <= b.offset {
                let span = b.offset - a.offset;
                let f = if span > 0.0 { (t - a.offset) / span } else { 1.0 };
                return lerp4(a.color, b.color, f);
            }
        }
        last.color
    }
}

/// A gradient projected onto the segment from `start` to `end`.
#[derive(Clone, Debug)]
pub struct LinearGradient {
    /// Start point in pixel coordinates.
    pub start: [f32; 2],
    /// End point in pixel coordinates.
    pub end: [f32; 2],
    /// Colors along the segment.
    pub gradient: Gradient,
}

impl LinearGradient {
    /// Normalized position of a point projected onto the gradient axis.
    pub fn position(&self, point: [f32; 2]) -> f32 {
        let dx = self.end[0] - self.start[0];
        let dy = self.end[1] - self.start[1];
        let len_sq = dx * dx + dy * dy;
        if len_sq <= f32::EPSILON {
            return 0.0;
        }
        ((point[0] - self.start[0]) * dx + (point[1] - self.start[1]) * dy) / len_sq
    }

    /// Fill every pixel of the texture, sampling at pixel centers.
    pub fn fill(&self, texture: &mut Texture) {
        for y in 0..texture.height() {
            for x in 0..texture.width() {
                let t = self.position([x as f32 + 0.5, y as f32 + 0.5]);
                texture.blend(x, y, self.gradient.sample(t), 1.0);
            }
        }
    }
}

/// A gradient running outward from `center` to `radius`.
#[derive(Clone, Debug)]
pub struct RadialGradient {
    /// Center in pixel coordinates.
    pub center: [f32; 2],
    /// Radius at which the last stop is reached.
    pub radius: f32,
    /// Colors from center to rim.
    pub gradient: Gradient,
}

impl RadialGradient {
    /// Normalized distance of a point from the center.
    pub fn position(&self, point: [f32; 2]) -> f32 {
        if self.radius <= 0.0 {
            return 1.0;
        }
        distance(point, self.center) / self.radius
    }

    /// Fill the disc of `radius` around `center`; pixels outside the disc
    /// are left untouched.
    pub fn fill_disc(&self, texture: &mut Texture) {
        for_each_covered(texture, self.center, self.radius, |texture, x, y, coverage| {
            let t = self.position([x as f32 + 0.5, y as f32 + 0.5]);
            texture.blend(x, y, self.gradient.sample(t), coverage);
        });
    }
}

/// Stamp a solid, anti-aliased disc.
pub fn fill_disc(texture: &mut Texture, center: [f32; 2], radius: f32, color: [f32; 4]) {
    for_each_covered(texture, center, radius, |texture, x, y, coverage| {
        texture.blend(x, y, color, coverage);
    });
}

/// Visit every pixel touched by the disc, with an approximate coverage in
/// `(0, 1]` derived from the pixel-center distance to the rim.
fn for_each_covered(
    texture: &mut Texture,
    center: [f32; 2],
    radius: f32,
    mut visit: impl FnMut(&mut Texture, u32, u32, f32),
) {
    if radius <= 0.0 || texture.width() == 0 || texture.height() == 0 {
        return;
    }
    let max_x = texture.width() as f32 - 1.0;
    let max_y = texture.height() as f32 - 1.0;
    let x0 = (center[0] - radius - 1.0).floor().clamp(0.0, max_x) as u32;
    let x1 = (center[0] + radius + 1.0).ceil().clamp(0.0, max_x) as u32;
    let y0 = (center[1] - radius - 1.0).floor().clamp(0.0, max_y) as u32;
    let y1 = (center[1] + radius + 1.0).ceil().clamp(0.0, max_y) as u32;

    for y in y0..=y1 {
        for x in x0..=x1 {
            let d = distance([x as f32 + 0.5, y as f32 + 0.5], center);
            let coverage = (radius - d + 0.5).clamp(0.0, 1.0);
            if coverage > 0.0 {
                visit(texture, x, y, coverage);
            }
        }
    }
}

fn distance(a: [f32; 2], b: [f32; 2]) -> f32 {
    let dx = a[0] - b[0];
    let dy = a[1] - b[1];
    (dx * dx + dy * dy).sqrt()
}

fn lerp4(a: [f32; 4], b: [f32; 4], t: f32) -> [f32; 4] {
    std::array::from_fn(|i| a[i] + (b[i] - a[i]) * t)
}
