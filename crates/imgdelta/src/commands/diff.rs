use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use image::{DynamicImage, RgbImage, RgbaImage};
use tracing::{debug, error, info, warn};

use crate::cli::Cli;
use crate::compare::{self, DiffEvent, DiffReport, EventLevel};
use crate::config::ResolvedRunConfig;
use crate::render::{self, Panel};
use crate::report::{OutputFormat, json, terminal};

const DEFAULT_MASK_LABEL: &str = "difference.png";

/// `imgdelta` — compare, report, optionally render a composite.
/// Returns exit code: 0 = compared, 1 = missing/unreadable input, 2 = size mismatch.
pub fn diff(cli: &Cli, config: &ResolvedRunConfig) -> Result<i32> {
    let loaded = compare::load_image(&cli.input_image1_file).and_then(|left| {
        let right = compare::load_image(&cli.input_image2_file)?;
        let report = compare::diff_images(&left, &right, cli.delta_image_file.as_deref())?;
        Ok((left, right, report))
    });
    let (left, right, report) = match loaded {
        Ok(loaded) => loaded,
        Err(e) => {
            error!("{e}");
            return Ok(e.exit_code());
        }
    };

    log_events(&report.events);
    info!(
        "Percentage difference between the two images: {:.0}%",
        report.percentage
    );

    let composite_path = match &cli.output_image_file {
        Some(out) => {
            let panels = build_panels(cli, &report, left, right);
            write_composite(config, &report, panels, out)
        }
        None => None,
    };

    match cli.format {
        OutputFormat::Text => {
            terminal::print_report(&report);
            if let Some(path) = &composite_path {
                terminal::print_saved("composite", path);
            }
        }
        OutputFormat::Json => {
            let body = json::to_string(&report, composite_path)
                .context("Failed to serialize report")?;
            println!("{body}");
        }
    }

    Ok(0)
}

fn log_events(events: &[DiffEvent]) {
    for event in events {
        match event.level() {
            EventLevel::Debug => debug!("{event}"),
            EventLevel::Error => error!("{event}"),
        }
    }
}

/// Render and save the composite. Failures are logged, never fatal.
fn write_composite(
    config: &ResolvedRunConfig,
    report: &DiffReport,
    panels: Vec<Panel>,
    out: &Path,
) -> Option<PathBuf> {
    let font = match config.font() {
        Some(path) => match render::load_font(path) {
            Ok(font) => Some(font),
            Err(e) => {
                warn!("{e}; composite labels skipped");
                None
            }
        },
        None => {
            warn!("No font configured (--font or IMGDELTA_FONT); composite labels skipped");
            None
        }
    };

    let image = render::composite(&panels, report.percentage, &config.render, font.as_ref());
    match render::save_composite(&image, out) {
        Ok(path) => {
            info!("The output file has been saved to {}", path.display());
            Some(path)
        }
        Err(e) => {
            error!("Failed to save output file {}: {e}", out.display());
            None
        }
    }
}

/// Both inputs followed by the mask, reusing the already decoded buffers.
fn build_panels(
    cli: &Cli,
    report: &DiffReport,
    left: RgbaImage,
    right: RgbaImage,
) -> Vec<Panel> {
    let (w, h) = left.dimensions();
    let mut panels = Vec::with_capacity(3);
    let inputs = [
        (&cli.input_image1_file, left),
        (&cli.input_image2_file, right),
    ];
    for (path, image) in inputs {
        let rgb = DynamicImage::ImageRgba8(image).to_rgb8();
        panels.push(Panel::from_path(path, rgb));
    }

    // Identical inputs produce no mask; show an all-black frame instead.
    let mask = match &report.mask {
        Some(mask) => mask.to_rgb(),
        None => RgbImage::new(w, h),
    };
    let mask_panel = match &report.mask_path {
        Some(path) => Panel::from_path(path, mask),
        None => Panel {
            label: cli
                .delta_image_file
                .as_deref()
                .and_then(Path::file_name)
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| DEFAULT_MASK_LABEL.to_string()),
            image: mask,
        },
    };
    panels.push(mask_panel);
    panels
}
