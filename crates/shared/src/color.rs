use serde::{Deserialize, Serialize};
use validator::Validate;

/// Linear RGBA colour with every channel in `[0, 1]`.
#[derive(Validate, Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq)]
pub struct Rgba {
    #[validate(range(min = 0.0, max = 1.0))]
    pub r: f32,
    #[validate(range(min = 0.0, max = 1.0))]
    pub g: f32,
    #[validate(range(min = 0.0, max = 1.0))]
    pub b: f32,
    #[validate(range(min = 0.0, max = 1.0))]
    pub a: f32,
}

impl Rgba {
    pub const TRANSPARENT: Rgba = Rgba::new(0.0, 0.0, 0.0, 0.0);
    pub const WHITE: Rgba = Rgba::new(1.0, 1.0, 1.0, 1.0);

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Interpolates towards `target`. `t` is clamped to `[0, 1]`.
    pub fn lerp(self, target: Rgba, t: f32) -> Rgba {
        let t = t.clamp(0.0, 1.0);
        Rgba {
            r: self.r + (target.r - self.r) * t,
            g: self.g + (target.g - self.g) * t,
            b: self.b + (target.b - self.b) * t,
            a: self.a + (target.a - self.a) * t,
        }
    }

    /// Scales the colour channels, leaving alpha untouched.
    pub fn scale_rgb(self, factor: f32) -> Rgba {
        Rgba {
            r: (self.r * factor).clamp(0.0, 1.0),
            g: (self.g * factor).clamp(0.0, 1.0),
            b: (self.b * factor).clamp(0.0, 1.0),
            a: self.a,
        }
    }

    /// Channel-wise mean of `colors` with an opaque alpha.
    ///
    /// Returns [`Rgba::TRANSPARENT`] for an empty input.
    pub fn average_opaque<I>(colors: I) -> Rgba
    where
        I: IntoIterator<Item = Rgba>,
    {
        let mut sum = Rgba::TRANSPARENT;
        let mut count = 0usize;
        for color in colors {
            sum.r += color.r;
            sum.g += color.g;
            sum.b += color.b;
            count += 1;
        }

        if count == 0 {
            return Rgba::TRANSPARENT;
        }

        let n = count as f32;
        Rgba::new(sum.r / n, sum.g / n, sum.b / n, 1.0)
    }
}
