use crate::math::clamp;

use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign, Mul, MulAssign};

/// Unclamped RGB in linear light. Channels may leave `[0, 1]` until saturated.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LinearColor {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl LinearColor {
    pub const fn new(r: f32, g: f32, b: f32) -> LinearColor {
        LinearColor { r, g, b }
    }
    pub const ZERO: LinearColor = LinearColor::new(0.0, 0.0, 0.0);
    pub const WHITE: LinearColor = LinearColor::new(1.0, 1.0, 1.0);
}

impl LinearColor {
    /// Clamps every channel into `[0, 1]` in place and returns `self` for chaining.
    pub fn saturate(&mut self) -> &mut Self {
        self.r = clamp(self.r, 0.0, 1.0);
        self.g = clamp(self.g, 0.0, 1.0);
        self.b = clamp(self.b, 0.0, 1.0);
        self
    }

    pub fn saturated(mut self) -> Self {
        self.saturate();
        self
    }

    /// Rec. 709 relative luminance.
    pub fn luminance(&self) -> f32 {
        0.2126 * self.r + 0.7152 * self.g + 0.0722 * self.b
    }

    pub fn is_finite(&self) -> bool {
        self.r.is_finite() && self.g.is_finite() && self.b.is_finite()
    }
}

// component-wise filtering, i.e. light through an albedo
impl Mul for LinearColor {
    type Output = Self;
    fn mul(self, other: LinearColor) -> Self {
        LinearColor::new(self.r * other.r, self.g * other.g, self.b * other.b)
    }
}

impl MulAssign for LinearColor {
    fn mul_assign(&mut self, other: LinearColor) {
        self.r *= other.r;
        self.g *= other.g;
        self.b *= other.b;
    }
}

impl Mul<f32> for LinearColor {
    type Output = LinearColor;
    fn mul(self, other: f32) -> LinearColor {
        LinearColor::new(self.r * other, self.g * other, self.b * other)
    }
}

impl Mul<LinearColor> for f32 {
    type Output = LinearColor;
    fn mul(self, other: LinearColor) -> LinearColor {
        other * self
    }
}

impl Add for LinearColor {
    type Output = LinearColor;
    fn add(self, other: LinearColor) -> LinearColor {
        LinearColor::new(self.r + other.r, self.g + other.g, self.b + other.b)
    }
}

impl AddAssign for LinearColor {
    fn add_assign(&mut self, other: LinearColor) {
        self.r += other.r;
        self.g += other.g;
        self.b += other.b;
    }
}

impl From<f32> for LinearColor {
    fn from(s: f32) -> LinearColor {
        LinearColor::new(s, s, s)
    }
}

impl From<[f32; 3]> for LinearColor {
    fn from(other: [f32; 3]) -> LinearColor {
        LinearColor::new(other[0], other[1], other[2])
    }
}
