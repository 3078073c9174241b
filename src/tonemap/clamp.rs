use crate::math::LinearColor;

use tracing::{info, warn};

use super::{LuminanceStats, Tonemapper};

/// Scales by `10^exposure`, then saturates.
///
/// High exposure implies low light levels, thus necessitating a boost.
/// Conversely, low exposure implies high light levels, requiring a downscaling.
#[derive(Clone, Debug)]
pub struct Clamp {
    exposure: f32,
    silenced: bool,
}

impl Clamp {
    pub fn new(exposure: f32, silenced: bool) -> Self {
        Self { exposure, silenced }
    }

    pub fn exposure(&self) -> f32 {
        self.exposure
    }
}

impl Tonemapper for Clamp {
    fn initialize(&mut self, colors: &[LinearColor]) {
        if self.silenced {
            return;
        }
        let Some(stats) = LuminanceStats::gather(colors) else {
            warn!("no usable samples to gather luminance statistics from");
            return;
        };
        info!("dynamic range is {}", stats.dynamic_range());
        info!(
            "luminance min {}, max {}, average {} over {} samples",
            stats.min, stats.max, stats.average, stats.samples
        );
        let clipped = colors
            .iter()
            .filter(|c| c.luminance() * 10f32.powf(self.exposure) > 1.0)
            .count();
        if clipped > 0 {
            info!("{} samples will clip at exposure {}", clipped, self.exposure);
        }
    }

    fn map(&self, color: LinearColor) -> LinearColor {
        (color * 10f32.powf(self.exposure)).saturated()
    }
}
