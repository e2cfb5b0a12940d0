use image::{Rgba, RgbImage, RgbaImage};
use serde::Serialize;

/// Smallest axis-aligned rectangle enclosing every non-zero mask pixel.
/// `right` and `bottom` are exclusive, like a crop box.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct BoundingBox {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

impl BoundingBox {
    pub fn width(&self) -> u32 {
        self.right - self.left
    }

    pub fn height(&self) -> u32 {
        self.bottom - self.top
    }

    pub fn area(&self) -> u64 {
        self.width() as u64 * self.height() as u64
    }
}

/// Per-channel absolute difference of two equally sized images.
#[derive(Clone, Debug)]
pub struct DifferenceMask(RgbaImage);

impl DifferenceMask {
    /// Callers must check dimensions first; `left` decides the frame.
    pub(crate) fn between(left: &RgbaImage, right: &RgbaImage) -> Self {
        let (w, h) = left.dimensions();
        let mut mask = RgbaImage::new(w, h);
        for (x, y, out) in mask.enumerate_pixels_mut() {
            let Rgba(a) = *left.get_pixel(x, y);
            let Rgba(b) = *right.get_pixel(x, y);
            *out = Rgba([
                a[0].abs_diff(b[0]),
                a[1].abs_diff(b[1]),
                a[2].abs_diff(b[2]),
                a[3].abs_diff(b[3]),
            ]);
        }
        Self(mask)
    }

    pub fn width(&self) -> u32 {
        self.0.width()
    }

    pub fn height(&self) -> u32 {
        self.0.height()
    }

    pub fn as_rgba(&self) -> &RgbaImage {
        &self.0
    }

    /// The mask with its alpha channel discarded, as it is persisted.
    pub fn to_rgb(&self) -> RgbImage {
        let (w, h) = self.0.dimensions();
        RgbImage::from_fn(w, h, |x, y| {
            let Rgba([r, g, b, _]) = *self.0.get_pixel(x, y);
            image::Rgb([r, g, b])
        })
    }

    /// `None` when every channel of every pixel is zero.
    pub fn bounding_box(&self) -> Option<BoundingBox> {
        let mut found = false;
        let (mut left, mut top) = (u32::MAX, u32::MAX);
        let (mut right, mut bottom) = (0, 0);

        for (x, y, px) in self.0.enumerate_pixels() {
            if px.0.iter().all(|&c| c == 0) {
                continue;
            }
            found = true;
            left = left.min(x);
            top = top.min(y);
            right = right.max(x + 1);
            bottom = bottom.max(y + 1);
        }

        found.then_some(BoundingBox {
            left,
            top,
            right,
            bottom,
        })
    }

    /// Count pixels inside `bbox` whose colour channels are not all zero.
    ///
    /// Alpha takes no part in the test: an alpha-only change widens the
    /// bounding box but is not counted.
    pub fn count_non_black(&self, bbox: &BoundingBox) -> u64 {
        let mut count = 0;
        for y in bbox.top..bbox.bottom {
            for x in bbox.left..bbox.right {
                let Rgba([r, g, b, _]) = *self.0.get_pixel(x, y);
                if r != 0 || g != 0 || b != 0 {
                    count += 1;
                }
            }
        }
        count
    }
}
