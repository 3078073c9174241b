use crate::math::LinearColor;
use crate::tonemap::Converter;

use anyhow::{ensure, Result};
use serde::Deserialize;

use super::tonemap::TonemapSettings;

pub type ColorData = [f32; 3];

/// One light contribution; `weight` defaults to 1.
#[derive(Deserialize, Copy, Clone, Debug, PartialEq)]
pub struct ContributionData {
    pub color: ColorData,
    pub weight: Option<f32>,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct SwatchData {
    pub name: String,
    pub contributions: Vec<ContributionData>,
}

impl SwatchData {
    /// Sum of the weighted contributions, left unclamped. Colors and weights
    /// must be finite and non-negative.
    pub fn resolve(&self) -> Result<LinearColor> {
        let mut total = LinearColor::ZERO;
        for (i, contribution) in self.contributions.iter().enumerate() {
            let weight = contribution.weight.unwrap_or(1.0);
            ensure!(
                weight.is_finite() && weight >= 0.0,
                "swatch {:?} contribution {} has invalid weight {}",
                self.name,
                i,
                weight
            );
            ensure!(
                contribution.color.iter().all(|c| c.is_finite() && *c >= 0.0),
                "swatch {:?} contribution {} has invalid color {:?}",
                self.name,
                i,
                contribution.color
            );
            total += LinearColor::from(contribution.color) * weight;
        }
        Ok(total)
    }
}

#[derive(Deserialize, Clone, Debug)]
pub struct TOMLConfig {
    #[serde(default)]
    pub converter: Converter,
    #[serde(default)]
    pub tonemap_settings: TonemapSettings,
    #[serde(default)]
    pub swatches: Vec<SwatchData>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Swatch {
    pub name: String,
    pub color: LinearColor,
}

#[derive(Clone, Debug)]
pub struct Config {
    pub converter: Converter,
    pub tonemap_settings: TonemapSettings,
    pub swatches: Vec<Swatch>,
}

impl TryFrom<TOMLConfig> for Config {
    type Error = anyhow::Error;
    fn try_from(data: TOMLConfig) -> Result<Self> {
        let swatches = data
            .swatches
            .iter()
            .map(|swatch| -> Result<Swatch> {
                Ok(Swatch {
                    name: swatch.name.clone(),
                    color: swatch.resolve()?,
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Config {
            converter: data.converter,
            tonemap_settings: data.tonemap_settings,
            swatches,
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_swatch_resolve() {
        let swatch = SwatchData {
            name: "key and fill".to_string(),
            contributions: vec![
                ContributionData {
                    color: [1.0, 0.5, 0.25],
                    weight: None,
                },
                ContributionData {
                    color: [0.0, 1.0, 2.0],
                    weight: Some(0.5),
                },
            ],
        };
        assert_eq!(swatch.resolve().unwrap(), LinearColor::new(1.0, 1.0, 1.25));

        let empty = SwatchData {
            name: "empty".to_string(),
            contributions: vec![],
        };
        assert_eq!(empty.resolve().unwrap(), LinearColor::ZERO);
    }

    #[test]
    fn test_swatch_rejects_negative_light() {
        let negative_weight = SwatchData {
            name: "subtractive".to_string(),
            contributions: vec![ContributionData {
                color: [0.5, 0.5, 0.5],
                weight: Some(-1.0),
            }],
        };
        let err = negative_weight.resolve().err().unwrap();
        assert!(err.to_string().contains("subtractive"));
        assert!(err.to_string().contains("weight"));

        let negative_color = SwatchData {
            name: "dark".to_string(),
            contributions: vec![ContributionData {
                color: [-0.5, 0.0, 0.0],
                weight: None,
            }],
        };
        assert!(negative_color.resolve().is_err());
    }
}
