use std::path::Path;

use crate::compare::{BoundingBox, DiffReport};

/// Percentage with two decimals, as printed and as drawn on composites.
pub fn format_percentage(p: f64) -> String {
    format!("{p:.2}%")
}

fn format_bbox(b: &BoundingBox) -> String {
    format!(
        "{}x{} at ({}, {})",
        b.width(),
        b.height(),
        b.left,
        b.top
    )
}

/// One-line human summary of a comparison.
pub fn summary_line(report: &DiffReport) -> String {
    match &report.bbox {
        None => format!(
            "\x1b[32mSAME\x1b[0m  {}  ({} pixels)",
            format_percentage(report.percentage),
            report.total_pixels
        ),
        Some(bbox) => format!(
            "\x1b[31mDIFF\x1b[0m  {}  ({} of {} pixels, region {})",
            format_percentage(report.percentage),
            report.diff_pixels,
            report.total_pixels,
            format_bbox(bbox)
        ),
    }
}

pub fn print_report(report: &DiffReport) {
    println!("{}", summary_line(report));
    if let Some(path) = &report.mask_path {
        print_saved("mask", path);
    }
}

pub fn print_saved(what: &str, path: &Path) {
    println!("  \x1b[2m{what} saved to {}\x1b[0m", path.display());
}
