use std::path::PathBuf;

use serde::Serialize;

use crate::compare::{BoundingBox, DiffReport};

/// Serializable view of a `DiffReport`, without image buffers.
#[derive(Debug, Serialize)]
pub struct JsonReport {
    pub percentage: f64,
    pub diff_pixels: u64,
    pub total_pixels: u64,
    pub identical: bool,
    pub bbox: Option<BoundingBox>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mask_path: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub composite_path: Option<PathBuf>,
}

impl JsonReport {
    pub fn new(report: &DiffReport, composite_path: Option<PathBuf>) -> Self {
        Self {
            percentage: report.percentage,
            diff_pixels: report.diff_pixels,
            total_pixels: report.total_pixels,
            identical: report.is_identical(),
            bbox: report.bbox,
            mask_path: report.mask_path.clone(),
            composite_path,
        }
    }
}

pub fn to_string(
    report: &DiffReport,
    composite_path: Option<PathBuf>,
) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&JsonReport::new(report, composite_path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_summary_fields() {
        let report = DiffReport {
            percentage: 25.0,
            diff_pixels: 25,
            total_pixels: 100,
            bbox: Some(BoundingBox {
                left: 0,
                top: 0,
                right: 10,
                bottom: 3,
            }),
            mask: None,
            mask_path: Some(PathBuf::from("delta.png")),
            events: Vec::new(),
        };
        let value: serde_json::Value =
            serde_json::from_str(&to_string(&report, None).unwrap()).unwrap();
        assert_eq!(value["percentage"], 25.0);
        assert_eq!(value["identical"], false);
        assert_eq!(value["bbox"]["bottom"], 3);
        assert_eq!(value["mask_path"], "delta.png");
        assert!(value.get("composite_path").is_none());
    }
}
