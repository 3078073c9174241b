use anyhow::{ensure, Result};
use serde::Deserialize;
use tracing::info;

use crate::tonemap::{Clamp, Reinhard, Tonemapper};

#[derive(Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(tag = "type")]
pub enum TonemapSettings {
    // clamp all colors to 0 to 1, multiplying by 10^exposure beforehand (exposure defaults to 0, not changing anything)
    Clamp {
        exposure: Option<f32>,
        #[serde(default)]
        silenced: bool,
    },
    Reinhard {
        key_value: f32,
        white_point: Option<f32>,
        #[serde(default)]
        luminance_only: bool,
        #[serde(default)]
        silenced: bool,
    },
}

impl Default for TonemapSettings {
    fn default() -> Self {
        TonemapSettings::Clamp {
            exposure: None,
            silenced: false,
        }
    }
}

pub fn parse_tonemapper(settings: TonemapSettings) -> Result<Box<dyn Tonemapper>> {
    let tonemapper: Box<dyn Tonemapper> = match settings {
        TonemapSettings::Clamp { exposure, silenced } => {
            let exposure = exposure.unwrap_or(0.0);
            ensure!(exposure.is_finite(), "clamp exposure must be finite, got {}", exposure);
            info!("constructing clamp tonemapper, exposure {}", exposure);
            Box::new(Clamp::new(exposure, silenced))
        }
        TonemapSettings::Reinhard {
            key_value,
            white_point,
            luminance_only,
            silenced,
        } => {
            ensure!(
                key_value.is_finite() && key_value > 0.0,
                "reinhard key_value must be positive, got {}",
                key_value
            );
            if let Some(white_point) = white_point {
                ensure!(
                    white_point.is_finite() && white_point > 0.0,
                    "reinhard white_point must be positive, got {}",
                    white_point
                );
            }
            info!(
                "constructing reinhard tonemapper, key value {}, white point {:?}, luminance only: {}",
                key_value, white_point, luminance_only
            );
            Box::new(Reinhard::new(key_value, white_point, luminance_only, silenced))
        }
    };
    Ok(tonemapper)
}
