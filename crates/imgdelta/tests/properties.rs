use image::{Rgba, RgbaImage};
use imgdelta::compute_difference;
use proptest::prelude::*;

/// Small RGBA image of the given size filled from a pixel stream.
fn image_strategy(w: u32, h: u32) -> impl Strategy<Value = RgbaImage> {
    prop::collection::vec(any::<[u8; 4]>(), (w * h) as usize).prop_map(move |px| {
        RgbaImage::from_fn(w, h, |x, y| Rgba(px[(y * w + x) as usize]))
    })
}

fn pair_strategy() -> impl Strategy<Value = (RgbaImage, RgbaImage)> {
    (1u32..12, 1u32..12).prop_flat_map(|(w, h)| (image_strategy(w, h), image_strategy(w, h)))
}

proptest! {
    #[test]
    fn self_comparison_is_zero(img in image_strategy(7, 5)) {
        let r = compute_difference(&img, &img).unwrap();
        prop_assert_eq!(r.percentage, 0.0);
        prop_assert!(r.bbox.is_none());
    }

    #[test]
    fn symmetric((a, b) in pair_strategy()) {
        let ab = compute_difference(&a, &b).unwrap();
        let ba = compute_difference(&b, &a).unwrap();
        prop_assert_eq!(ab.percentage, ba.percentage);
        prop_assert_eq!(ab.bbox, ba.bbox);
    }

    #[test]
    fn bounded_and_deterministic((a, b) in pair_strategy()) {
        let first = compute_difference(&a, &b).unwrap();
        let second = compute_difference(&a, &b).unwrap();
        prop_assert!((0.0..=100.0).contains(&first.percentage));
        prop_assert_eq!(first.percentage, second.percentage);
        prop_assert_eq!(first.diff_pixels, second.diff_pixels);
    }

    #[test]
    fn mismatched_sizes_never_score(w in 1u32..10, h in 1u32..10, extra in 1u32..4) {
        let a = RgbaImage::new(w, h);
        let b = RgbaImage::new(w + extra, h);
        prop_assert!(compute_difference(&a, &b).is_err());
    }
}
