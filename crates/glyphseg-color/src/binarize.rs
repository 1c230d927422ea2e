//! Two-level classification of raster regions
//!
//! Each output pixel is classified independently of every other, so the
//! loops here are free to run in any order or be chunked across
//! threads; this implementation keeps the plain row-major pass.

use crate::rule::RuleSet;
use glyphseg_core::pixel::{OPAQUE_BLACK, OPAQUE_WHITE, rgb_average};
use glyphseg_core::{Raster, Rect};

/// Binarize a raster region against a rule set.
///
/// The output is sized to the clamped region: fully opaque white where
/// the pixel matches any rule, fully opaque black elsewhere. With no
/// active rule the result is uniformly black.
pub fn binarize(src: &Raster, rules: &RuleSet, region: Rect) -> Raster {
    classify_region(src, region, |argb| rules.matches(argb))
}

/// Binarize a raster region by RGB-average threshold.
///
/// A pixel matches when the average of its color channels lies in
/// `[low, high]`, both bounds inclusive. This is the slider-driven
/// alternative to rule matching for grayscale-ish sources.
pub fn binarize_by_rgb_avg(src: &Raster, low: u8, high: u8, region: Rect) -> Raster {
    classify_region(src, region, |argb| {
        let avg = rgb_average(argb);
        avg >= low && avg <= high
    })
}

fn classify_region(src: &Raster, region: Rect, matches: impl Fn(u32) -> bool) -> Raster {
    let (x, y, w, h) = region.clamped_span(src.width(), src.height());

    let mut pixels = Vec::with_capacity((w as usize) * (h as usize));
    for row_y in y..y + h {
        let start = (row_y * src.width() + x) as usize;
        let row = &src.pixels()[start..start + w as usize];
        pixels.extend(row.iter().map(|&argb| {
            if matches(argb) {
                OPAQUE_WHITE
            } else {
                OPAQUE_BLACK
            }
        }));
    }
    // Cannot fail: the clamped span is at least 1x1 and pixels has
    // exactly w * h entries
    Raster::from_pixels(w, h, pixels).expect("clamped span yields a valid raster")
}
