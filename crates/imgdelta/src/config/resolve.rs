use std::path::{Path, PathBuf};

use anyhow::Result;

use super::render::RenderConfig;
use super::{load_or_default, validate_font_size, validate_spacing};

/// Values extracted from the CLI that participate in the merge.
pub struct CliOverrides {
    pub config: Option<PathBuf>,
    pub render: RenderConfig,
}

/// Fully resolved config after CLI > env > file > defaults merge.
pub struct ResolvedRunConfig {
    pub render: RenderConfig,
}

impl ResolvedRunConfig {
    pub fn new(cli: CliOverrides) -> Result<Self> {
        let env_font = std::env::var_os("IMGDELTA_FONT").map(PathBuf::from);
        Self::resolve(cli, env_font)
    }

    fn resolve(cli: CliOverrides, env_font: Option<PathBuf>) -> Result<Self> {
        // 1. File layer
        let file_config = load_or_default(cli.config.as_deref())?;
        let mut render = file_config.render;

        // 2. Env layer
        if env_font.is_some() {
            render.font = env_font;
        }

        // 3. CLI overlay
        render.merge(&cli.render);
        validate_font_size(render.font_size()).map_err(|e| anyhow::anyhow!("{e}"))?;
        validate_spacing("gap", render.gap()).map_err(|e| anyhow::anyhow!("{e}"))?;
        validate_spacing("margin", render.margin()).map_err(|e| anyhow::anyhow!("{e}"))?;

        Ok(Self { render })
    }

    pub fn font(&self) -> Option<&Path> {
        self.render.font.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Layout;

    fn write_config(dir: &Path, body: &str) -> PathBuf {
        let path = dir.join("custom.toml");
        std::fs::write(&path, body).unwrap();
        path
    }

    #[test]
    fn cli_beats_env_beats_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(
            dir.path(),
            "[render]\nfont = \"file.ttf\"\nlayout = \"vertical\"\ngap = 5\n",
        );

        let resolved = ResolvedRunConfig::resolve(
            CliOverrides {
                config: Some(path.clone()),
                render: RenderConfig::default(),
            },
            Some(PathBuf::from("env.ttf")),
        )
        .unwrap();
        assert_eq!(resolved.font(), Some(Path::new("env.ttf")));
        assert_eq!(resolved.render.layout(), Layout::Vertical);

        let resolved = ResolvedRunConfig::resolve(
            CliOverrides {
                config: Some(path),
                render: RenderConfig {
                    font: Some(PathBuf::from("cli.ttf")),
                    gap: Some(7),
                    ..Default::default()
                },
            },
            Some(PathBuf::from("env.ttf")),
        )
        .unwrap();
        assert_eq!(resolved.font(), Some(Path::new("cli.ttf")));
        assert_eq!(resolved.render.gap(), 7);
    }

    #[test]
    fn cli_font_size_validated() {
        let err = ResolvedRunConfig::resolve(
            CliOverrides {
                config: None,
                render: RenderConfig {
                    font_size: Some(-1.0),
                    ..Default::default()
                },
            },
            None,
        )
        .err()
        .unwrap();
        assert!(err.to_string().contains("font_size"));
    }

    #[test]
    fn cli_gap_bounded() {
        let err = ResolvedRunConfig::resolve(
            CliOverrides {
                config: None,
                render: RenderConfig {
                    gap: Some(u32::MAX / 2),
                    ..Default::default()
                },
            },
            None,
        )
        .err()
        .unwrap();
        assert!(err.to_string().contains("gap must be at most"));
    }
}
