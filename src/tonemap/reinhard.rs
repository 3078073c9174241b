use crate::math::LinearColor;

use tracing::{info, warn};

use super::{LuminanceStats, Tonemapper};

/// Reinhard '02 global operator, optionally with a burn-out white point.
///
/// `l = key_value * x / l_w`, then `l * (1 + l / white_point^2) / (1 + l)`.
/// Without a white point this is the plain `l / (1 + l)` curve.
#[derive(Clone, Debug)]
pub struct Reinhard {
    key_value: f32,
    white_point: Option<f32>,
    luminance_only: bool,
    silenced: bool,
    // log average luminance, set by initialize
    l_w: Option<f32>,
}

impl Reinhard {
    pub fn new(
        key_value: f32,
        white_point: Option<f32>,
        luminance_only: bool,
        silenced: bool,
    ) -> Self {
        Self {
            key_value,
            white_point,
            luminance_only,
            silenced,
            l_w: None,
        }
    }

    pub fn log_average_luminance(&self) -> Option<f32> {
        self.l_w
    }

    fn curve(&self, x: f32) -> f32 {
        // negative light is mapped to black, otherwise 1 + l can hit zero. NaN passes through.
        let x = if x < 0.0 { 0.0 } else { x };
        let l = self.key_value * x / self.l_w.unwrap_or(1.0);
        let mul = self.white_point.map_or(0.0, |w| w.powi(2).recip());
        let one_l_lm2 = mul * l + 1.0;
        l * one_l_lm2 / (1.0 + l)
    }
}

impl Tonemapper for Reinhard {
    fn initialize(&mut self, colors: &[LinearColor]) {
        let Some(stats) = LuminanceStats::gather(colors) else {
            if !self.silenced {
                warn!("no usable samples, keeping log average luminance at {:?}", self.l_w);
            }
            return;
        };
        if !self.silenced {
            info!(
                "computed tonemapping: avg luminance {}, l_w = {}",
                stats.average, stats.log_average
            );
            info!("dynamic range is {}", stats.dynamic_range());
        }
        self.l_w = Some(stats.log_average);
    }

    fn map(&self, color: LinearColor) -> LinearColor {
        if self.luminance_only {
            let lum = color.luminance();
            if lum <= 0.0 {
                return LinearColor::ZERO;
            }
            color * (self.curve(lum) / lum)
        } else {
            LinearColor::new(
                self.curve(color.r),
                self.curve(color.g),
                self.curve(color.b),
            )
        }
    }
}
