pub mod config;
pub mod tonemap;

pub use config::{Config, Swatch, TOMLConfig};
pub use tonemap::{parse_tonemapper, TonemapSettings};

use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{error, info};

pub fn parse_config(input: &str) -> Result<Config> {
    let data: TOMLConfig = toml::from_str(input)
        .inspect_err(|e| error!("encountered error when parsing config: {}", e))
        .context("parsing config")?;
    Config::try_from(data)
}

pub fn get_settings(filepath: impl AsRef<Path>) -> Result<Config> {
    let filepath = filepath.as_ref();
    info!("loading file at {}", filepath.display());
    let mut input = String::new();
    let read_count = File::open(filepath)
        .and_then(|mut f| f.read_to_string(&mut input))
        .with_context(|| format!("reading {}", filepath.display()))?;
    info!("done: {} bytes", read_count);

    parse_config(&input).with_context(|| format!("loading {}", filepath.display()))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::math::{DisplayColor, LinearColor};
    use crate::tonemap::Converter;

    const CONFIG: &str = r#"
converter = "Linear"

[tonemap_settings]
type = "Reinhard"
key_value = 0.18
white_point = 4.0

[[swatches]]
name = "sunlit"
contributions = [
    { color = [1.0, 0.9, 0.7], weight = 3.0 },
    { color = [0.1, 0.2, 0.4] },
]

[[swatches]]
name = "shadow"
contributions = [{ color = [0.02, 0.03, 0.05] }]
"#;

    #[test]
    fn test_parse_config() {
        let config = parse_config(CONFIG).unwrap();
        assert_eq!(config.converter, Converter::Linear);
        assert_eq!(
            config.tonemap_settings,
            TonemapSettings::Reinhard {
                key_value: 0.18,
                white_point: Some(4.0),
                luminance_only: false,
                silenced: false,
            }
        );
        assert_eq!(config.swatches.len(), 2);
        assert_eq!(config.swatches[0].name, "sunlit");
        let sunlit = config.swatches[0].color;
        assert!((sunlit.r - 3.1).abs() < 1e-5);
        assert!((sunlit.g - 2.9).abs() < 1e-5);
        assert!((sunlit.b - 2.5).abs() < 1e-5);
    }

    #[test]
    fn test_defaults() {
        let config = parse_config("").unwrap();
        assert_eq!(config.converter, Converter::sRGB);
        assert_eq!(config.tonemap_settings, TonemapSettings::default());
        assert!(config.swatches.is_empty());
    }

    #[test]
    fn test_pipeline_from_config() {
        let config = parse_config(
            r#"
converter = "Linear"
[tonemap_settings]
type = "Clamp"
[[swatches]]
name = "orange"
contributions = [{ color = [1.0, 0.5, 0.0] }]
"#,
        )
        .unwrap();
        let mut tonemapper = parse_tonemapper(config.tonemap_settings).unwrap();
        let colors: Vec<LinearColor> = config.swatches.iter().map(|s| s.color).collect();
        tonemapper.initialize(&colors);
        assert_eq!(
            config.converter.encode(tonemapper.as_ref(), colors[0]),
            DisplayColor::new(255, 127, 0)
        );
    }

    #[test]
    fn test_parse_errors() {
        assert!(parse_config("converter = \"AdobeRGB\"").is_err());
        assert!(parse_config("[tonemap_settings]\ntype = \"Reinhard\"").is_err());
        assert!(parse_config("[[swatches]]\nname = \"x\"\ncontributions = [{ color = [1.0] }]").is_err());
        let negative = "[[swatches]]\nname = \"x\"\ncontributions = [{ color = [1.0, 1.0, 1.0], weight = -1.0 }]";
        assert!(parse_config(negative).is_err());

        let err = get_settings("definitely/not/here.toml").err().unwrap();
        assert!(format!("{:#}", err).contains("definitely/not/here.toml"));
    }
}
