use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Layout {
    #[default]
    Horizontal,
    Vertical,
}

/// Configuration for the composite renderer.
///
/// Every field is `Option`: `None` means "use default".
/// Serves both TOML deserialization (`[render]`) and CLI argument parsing.
#[derive(Clone, Debug, Default, clap::Args, Serialize, Deserialize)]
pub struct RenderConfig {
    /// TrueType/OpenType font used for panel labels
    #[arg(long)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font: Option<PathBuf>,

    /// Label size in pixels
    #[arg(long)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f32>,

    /// Place panels side by side or stacked
    #[arg(long, value_enum)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout: Option<Layout>,

    /// Spacing between panels in pixels
    #[arg(long)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gap: Option<u32>,

    /// Height of the label band above panels (horizontal layout)
    #[arg(long)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub margin: Option<u32>,
}

impl RenderConfig {
    /// Overlay non-None fields from `other` onto self.
    pub fn merge(&mut self, other: &RenderConfig) {
        if other.font.is_some() {
            self.font = other.font.clone();
        }
        if other.font_size.is_some() {
            self.font_size = other.font_size;
        }
        if other.layout.is_some() {
            self.layout = other.layout;
        }
        if other.gap.is_some() {
            self.gap = other.gap;
        }
        if other.margin.is_some() {
            self.margin = other.margin;
        }
    }

    pub fn font_size(&self) -> f32 {
        self.font_size.unwrap_or(14.0)
    }

    pub fn layout(&self) -> Layout {
        self.layout.unwrap_or_default()
    }

    pub fn gap(&self) -> u32 {
        self.gap.unwrap_or(100)
    }

    pub fn margin(&self) -> u32 {
        self.margin.unwrap_or(80)
    }
}
