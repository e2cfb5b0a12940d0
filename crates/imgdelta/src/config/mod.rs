pub mod render;
pub mod resolve;

use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

pub use self::render::{Layout, RenderConfig};
pub use self::resolve::{CliOverrides, ResolvedRunConfig};

pub(crate) const CONFIG_FILE: &str = "imgdelta.toml";

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub render: RenderConfig,
}

impl Config {
    /// Validate semantic constraints that serde cannot express.
    fn validate(&self) -> Result<()> {
        validate_font_size(self.render.font_size())
            .map_err(|e| anyhow::anyhow!("render.{e}"))?;
        validate_spacing("gap", self.render.gap())
            .map_err(|e| anyhow::anyhow!("render.{e}"))?;
        validate_spacing("margin", self.render.margin())
            .map_err(|e| anyhow::anyhow!("render.{e}"))?;
        Ok(())
    }
}

pub fn validate_font_size(v: f32) -> Result<f32, String> {
    if !v.is_finite() || v <= 0.0 {
        return Err(format!("font_size must be a positive number, got {v}"));
    }
    Ok(v)
}

/// Largest accepted `gap` / `margin`, in pixels.
pub const MAX_SPACING: u32 = 10_000;

pub fn validate_spacing(name: &str, v: u32) -> Result<u32, String> {
    if v > MAX_SPACING {
        return Err(format!("{name} must be at most {MAX_SPACING} pixels, got {v}"));
    }
    Ok(v)
}

/// Read and validate a config file.
pub fn load(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    parse(&content).with_context(|| format!("Failed to parse {}", path.display()))
}

/// Load `explicit` if given (must exist), else the default file when present.
pub fn load_or_default(explicit: Option<&Path>) -> Result<Config> {
    match explicit {
        Some(path) => {
            if !path.is_file() {
                bail!("Config file {} does not exist", path.display());
            }
            load(path)
        }
        None => {
            let path = Path::new(CONFIG_FILE);
            if path.is_file() {
                load(path)
            } else {
                Ok(Config::default())
            }
        }
    }
}

fn parse(content: &str) -> Result<Config> {
    let config: Config = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_is_all_defaults() {
        let c = parse("").unwrap();
        assert!(c.render.font.is_none());
        assert_eq!(c.render.layout(), Layout::Horizontal);
    }

    #[test]
    fn render_section_parsed() {
        let c = parse(
            r#"
            [render]
            font = "fonts/arial.ttf"
            font_size = 18.5
            layout = "vertical"
            gap = 20
            "#,
        )
        .unwrap();
        assert_eq!(
            c.render.font.as_deref().and_then(|p| p.to_str()),
            Some("fonts/arial.ttf")
        );
        assert_eq!(c.render.font_size(), 18.5);
        assert_eq!(c.render.layout(), Layout::Vertical);
        assert_eq!(c.render.gap(), 20);
        assert_eq!(c.render.margin(), 80);
    }

    #[test]
    fn non_positive_font_size_rejected() {
        let err = parse("[render]\nfont_size = 0.0\n").unwrap_err();
        assert!(format!("{err:#}").contains("render.font_size must be a positive number"));
    }

    #[test]
    fn oversized_spacing_rejected() {
        let err = parse("[render]\ngap = 4000000000\n").unwrap_err();
        assert!(format!("{err:#}").contains("render.gap must be at most 10000 pixels"));
        let err = parse("[render]\nmargin = 10001\n").unwrap_err();
        assert!(format!("{err:#}").contains("render.margin"));
        assert!(parse("[render]\ngap = 10000\nmargin = 0\n").is_ok());
    }

    #[test]
    fn unknown_section_rejected() {
        assert!(parse("[capture]\nparallel = 4\n").is_err());
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let err = load_or_default(Some(Path::new("/no/such/imgdelta.toml"))).unwrap_err();
        assert!(err.to_string().contains("does not exist"));
    }
}
