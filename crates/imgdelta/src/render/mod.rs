//! Side-by-side composite of both inputs and their difference mask.

use std::path::{Path, PathBuf};

use ab_glyph::{FontVec, PxScale};
use image::{Rgb, RgbImage, imageops};
use imageproc::drawing::draw_text_mut;

use crate::config::{Layout, RenderConfig};
use crate::error::DiffError;

const LABEL_COLOR: Rgb<u8> = Rgb([255, 255, 255]);
/// Label inset from the panel edge, and from the top in horizontal layout.
const LABEL_INSET: u32 = 10;

/// One image in the composite plus the text drawn next to it.
pub struct Panel {
    pub label: String,
    pub image: RgbImage,
}

impl Panel {
    /// Label a panel with the file name of `path`.
    pub fn from_path(path: &Path, image: RgbImage) -> Self {
        let label = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Self { label, image }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub image: (u32, u32),
    pub label: (u32, u32),
}

#[derive(Debug, PartialEq, Eq)]
pub struct Plan {
    pub width: u32,
    pub height: u32,
    pub placements: Vec<Placement>,
}

/// Compute canvas size and panel/label positions for panels of `sizes`.
///
/// Sums saturate instead of wrapping; `gap` and `margin` are bounded by
/// config validation.
pub fn plan(sizes: &[(u32, u32)], settings: &RenderConfig) -> Plan {
    let gap = settings.gap();
    let max_w = sizes.iter().map(|s| s.0).max().unwrap_or(0);
    let max_h = sizes.iter().map(|s| s.1).max().unwrap_or(0);
    let mut placements = Vec::with_capacity(sizes.len());

    match settings.layout() {
        Layout::Horizontal => {
            let margin = settings.margin();
            let mut x: u32 = 0;
            for &(w, _) in sizes {
                placements.push(Placement {
                    image: (x, margin),
                    label: (x.saturating_add(LABEL_INSET), LABEL_INSET),
                });
                x = x.saturating_add(w).saturating_add(gap);
            }
            // Panels start below the label band, so the canvas must reach
            // past `margin + max_h` whatever the gap.
            let height = max_h
                .saturating_add(gap.saturating_mul(2))
                .max(margin.saturating_add(max_h).saturating_add(gap));
            Plan {
                width: x,
                height,
                placements,
            }
        }
        Layout::Vertical => {
            let mut y: u32 = 0;
            for &(_, h) in sizes {
                let image = (0, y);
                y = y.saturating_add(h).saturating_add(gap);
                placements.push(Placement {
                    image,
                    label: (LABEL_INSET, y.saturating_sub(settings.margin())),
                });
            }
            Plan {
                width: max_w,
                height: y,
                placements,
            }
        }
    }
}

/// Read a TrueType/OpenType font for labels.
pub fn load_font(path: &Path) -> Result<FontVec, DiffError> {
    let font_err = |reason: String| DiffError::Font {
        path: path.to_path_buf(),
        reason,
    };
    let bytes = std::fs::read(path).map_err(|e| font_err(e.to_string()))?;
    FontVec::try_from_vec(bytes).map_err(|e| font_err(e.to_string()))
}

/// Lay out `panels` on a black canvas and label them.
///
/// The last panel's label is suffixed with the diff percentage. Without a
/// font the panels are placed but no text is drawn.
pub fn composite(
    panels: &[Panel],
    percentage: f64,
    settings: &RenderConfig,
    font: Option<&FontVec>,
) -> RgbImage {
    let sizes: Vec<(u32, u32)> = panels.iter().map(|p| p.image.dimensions()).collect();
    let plan = plan(&sizes, settings);
    let mut canvas = RgbImage::new(plan.width, plan.height);
    let scale = PxScale::from(settings.font_size());

    for (idx, (panel, placement)) in panels.iter().zip(&plan.placements).enumerate() {
        let (x, y) = placement.image;
        imageops::replace(&mut canvas, &panel.image, x as i64, y as i64);

        let Some(font) = font else { continue };
        let label = if idx == panels.len() - 1 {
            format!("{} (Diff = {percentage:.2}%)", panel.label)
        } else {
            panel.label.clone()
        };
        let (lx, ly) = placement.label;
        draw_text_mut(
            &mut canvas,
            LABEL_COLOR,
            lx as i32,
            ly as i32,
            scale,
            font,
            &label,
        );
    }

    canvas
}

/// Encode the composite; the format follows the path extension.
pub fn save_composite(image: &RgbImage, path: &Path) -> Result<PathBuf, DiffError> {
    image.save(path).map_err(|source| DiffError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(path.to_path_buf())
}
