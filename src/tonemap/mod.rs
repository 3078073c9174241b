use crate::math::{to_display, DisplayColor, LinearColor};

use serde::Deserialize;

mod clamp;
mod reinhard;

pub use clamp::Clamp;
pub use reinhard::Reinhard;

/// Written out in place of any pixel that went non-finite. Mauve, universal sign of danger.
pub const MAUVE: LinearColor = LinearColor::new(0.58, 0.37, 1.0);

// floor applied to luminance before taking logs
pub(crate) const LUMINANCE_DELTA: f32 = 0.001;

// reference https://64.github.io/tonemapping/
// and Reinhard '02 https://www.cs.utah.edu/docs/techreports/2002/pdf/UUCS-02-001.pdf

pub trait Tonemapper: Send + Sync {
    /// Gathers whatever image statistics the operator needs from a set of samples.
    fn initialize(&mut self, colors: &[LinearColor]);
    // should tonemap a color from hdr to ldr
    fn map(&self, color: LinearColor) -> LinearColor;
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LuminanceStats {
    pub min: f32,
    pub max: f32,
    pub average: f32,
    /// Geometric mean of `LUMINANCE_DELTA + lum`.
    pub log_average: f32,
    pub samples: usize,
}

impl LuminanceStats {
    /// Non-finite luminances are skipped and negative ones count as black.
    /// Returns `None` if nothing usable remains.
    pub fn gather(colors: &[LinearColor]) -> Option<Self> {
        let mut max = 0.0f32;
        let mut min = f32::INFINITY;
        let mut total = 0.0f64;
        let mut sum_of_log = 0.0f64;
        let mut samples = 0usize;

        for color in colors {
            let lum = color.luminance();
            if !lum.is_finite() {
                continue;
            }
            // negative light would take the log of a negative number
            let lum = lum.max(0.0);
            samples += 1;
            total += lum as f64;
            sum_of_log += (LUMINANCE_DELTA as f64 + lum as f64).ln();
            max = max.max(lum);
            min = min.min(lum);
        }

        if samples == 0 {
            return None;
        }

        Some(LuminanceStats {
            min,
            max,
            average: (total / samples as f64) as f32,
            log_average: (sum_of_log / samples as f64).exp() as f32,
            samples,
        })
    }

    /// Orders of magnitude between the brightest and darkest sample.
    pub fn dynamic_range(&self) -> f32 {
        // avoid taking log(0) == NEG_INFINITY
        self.max.max(LUMINANCE_DELTA).log10() - self.min.max(LUMINANCE_DELTA).log10()
    }
}

#[allow(non_camel_case_types)]
#[derive(Deserialize, Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Converter {
    Linear,
    #[default]
    sRGB,
}

impl Converter {
    pub fn transfer_function(&self, color: LinearColor) -> LinearColor {
        match self {
            Converter::Linear => color,
            Converter::sRGB => LinearColor::new(
                srgb_oetf(color.r),
                srgb_oetf(color.g),
                srgb_oetf(color.b),
            ),
        }
    }

    /// Full display path for one color: tonemap, transfer, saturate, quantize.
    pub fn encode(&self, tonemapper: &dyn Tonemapper, color: LinearColor) -> DisplayColor {
        // saturating would silently hide a NaN, so both sides of the tonemapper are checked
        let mapped = if color.is_finite() {
            tonemapper.map(color)
        } else {
            MAUVE
        };
        let mapped = if mapped.is_finite() { mapped } else { MAUVE };
        to_display(*self.transfer_function(mapped).saturate())
    }
}

// https://en.wikipedia.org/wiki/SRGB#Transfer_function_(%22gamma%22)
fn srgb_oetf(x: f32) -> f32 {
    if x < 0.0031308 {
        323.0 / 25.0 * x
    } else {
        (211.0 * x.powf(5.0 / 12.0) - 11.0) / 200.0
    }
}
