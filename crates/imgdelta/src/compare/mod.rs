pub mod mask;

use std::fmt;
use std::path::{Path, PathBuf};

use image::{ImageReader, RgbaImage};

pub use self::mask::{BoundingBox, DifferenceMask};
use crate::error::DiffError;

/// Something worth reporting that happened during a comparison.
///
/// The differ never logs on its own; callers decide where these go.
#[derive(Debug)]
pub enum DiffEvent {
    Measured {
        width: u32,
        height: u32,
        total_pixels: u64,
        diff_pixels: u64,
    },
    MaskSaved {
        path: PathBuf,
    },
    MaskWriteFailed(DiffError),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EventLevel {
    Debug,
    Error,
}

impl DiffEvent {
    pub fn level(&self) -> EventLevel {
        match self {
            Self::Measured { .. } | Self::MaskSaved { .. } => EventLevel::Debug,
            Self::MaskWriteFailed(_) => EventLevel::Error,
        }
    }
}

impl fmt::Display for DiffEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Measured {
                width,
                height,
                total_pixels,
                diff_pixels,
            } => write!(
                f,
                "Image Width: {width}, Image Height: {height}, \
                 Total Pixels: {total_pixels}, Total Non-Black Pixels: {diff_pixels}"
            ),
            Self::MaskSaved { path } => write!(f, "Difference mask saved to {}", path.display()),
            Self::MaskWriteFailed(e) => write!(f, "Failed to save difference mask: {e}"),
        }
    }
}

pub struct DiffReport {
    /// Share of differing pixels over the full frame, 0.0 to 100.0.
    pub percentage: f64,
    /// Non-black mask pixels inside the bounding box.
    pub diff_pixels: u64,
    /// Always `width * height` of the inputs, never the bbox area.
    pub total_pixels: u64,
    pub bbox: Option<BoundingBox>,
    /// Present only when the images differ.
    pub mask: Option<DifferenceMask>,
    /// Where the mask was persisted, if it was.
    pub mask_path: Option<PathBuf>,
    pub events: Vec<DiffEvent>,
}

impl DiffReport {
    pub fn is_identical(&self) -> bool {
        self.bbox.is_none()
    }
}

/// Compare two decoded images of identical dimensions.
///
/// The count is taken inside the bounding box of the mask while the
/// denominator is the full frame.
pub fn compute_difference(left: &RgbaImage, right: &RgbaImage) -> Result<DiffReport, DiffError> {
    if left.dimensions() != right.dimensions() {
        return Err(DiffError::SizeMismatch {
            left_w: left.width(),
            left_h: left.height(),
            right_w: right.width(),
            right_h: right.height(),
        });
    }

    let (width, height) = left.dimensions();
    let total_pixels = (width as u64) * (height as u64);
    let mask = DifferenceMask::between(left, right);

    let Some(bbox) = mask.bounding_box() else {
        return Ok(DiffReport {
            percentage: 0.0,
            diff_pixels: 0,
            total_pixels,
            bbox: None,
            mask: None,
            mask_path: None,
            events: Vec::new(),
        });
    };

    let diff_pixels = mask.count_non_black(&bbox);
    let percentage = diff_pixels as f64 / total_pixels as f64 * 100.0;

    Ok(DiffReport {
        percentage,
        diff_pixels,
        total_pixels,
        bbox: Some(bbox),
        mask: Some(mask),
        mask_path: None,
        events: vec![DiffEvent::Measured {
            width,
            height,
            total_pixels,
            diff_pixels,
        }],
    })
}

/// Decode an image file into 8-bit RGBA.
pub fn load_image(path: &Path) -> Result<RgbaImage, DiffError> {
    if !path.is_file() {
        return Err(DiffError::Missing {
            path: path.to_path_buf(),
        });
    }
    let decode_err = |source| DiffError::Decode {
        path: path.to_path_buf(),
        source,
    };
    let img = ImageReader::open(path)
        .map_err(|e| decode_err(image::ImageError::IoError(e)))?
        .with_guessed_format()
        .map_err(|e| decode_err(image::ImageError::IoError(e)))?
        .decode()
        .map_err(decode_err)?;
    Ok(img.to_rgba8())
}

/// Persist the mask as RGB; the format follows the path extension.
pub fn save_mask(mask: &DifferenceMask, path: &Path) -> Result<(), DiffError> {
    mask.to_rgb().save(path).map_err(|source| DiffError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Load both files, compare them and optionally persist the mask.
///
/// A failed mask write is recorded on the report; the percentage stays valid.
pub fn diff_files(
    left: &Path,
    right: &Path,
    mask_out: Option<&Path>,
) -> Result<DiffReport, DiffError> {
    let left_img = load_image(left)?;
    let right_img = load_image(right)?;
    diff_images(&left_img, &right_img, mask_out)
}

/// Compare decoded images and optionally persist the mask.
pub fn diff_images(
    left: &RgbaImage,
    right: &RgbaImage,
    mask_out: Option<&Path>,
) -> Result<DiffReport, DiffError> {
    let mut report = compute_difference(left, right)?;

    if let (Some(path), Some(mask)) = (mask_out, report.mask.as_ref()) {
        match save_mask(mask, path) {
            Ok(()) => {
                report.mask_path = Some(path.to_path_buf());
                report.events.push(DiffEvent::MaskSaved {
                    path: path.to_path_buf(),
                });
            }
            Err(e) => report.events.push(DiffEvent::MaskWriteFailed(e)),
        }
    }

    Ok(report)
}
