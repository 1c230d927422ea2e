//! Sub-raster extraction
//!
//! Cropping is an exact value-preserving copy of the pixel buffer
//! region, one bulk slice copy per row. It is never implemented as a
//! rendered/composited draw: compositing can silently alter pixel
//! values at image-type boundaries.

use crate::raster::Raster;
use crate::rect::Rect;

impl Raster {
    /// Extract a rectangular sub-raster.
    ///
    /// The rectangle is clamped per [`Rect::clamped_span`], so the
    /// result is always at least 1x1 and the operation never fails,
    /// no matter how far out of range the rectangle is.
    ///
    /// # Examples
    ///
    /// ```
    /// use glyphseg_core::{Raster, Rect};
    ///
    /// let raster = Raster::new(100, 80).unwrap();
    /// let glyph = raster.crop(Rect::new(10, 20, 30, 50));
    /// assert_eq!(glyph.width(), 20);
    /// assert_eq!(glyph.height(), 30);
    /// ```
    pub fn crop(&self, rect: Rect) -> Raster {
        let (x, y, w, h) = rect.clamped_span(self.width(), self.height());

        let mut pixels = Vec::with_capacity((w as usize) * (h as usize));
        for row_y in y..y + h {
            let start = (row_y * self.width() + x) as usize;
            pixels.extend_from_slice(&self.pixels()[start..start + w as usize]);
        }
        Raster::from_raw(w, h, pixels)
    }

    /// Extract one sub-raster per rectangle, in order.
    ///
    /// Used to materialize a batch of glyphs from segmentation output.
    pub fn crop_all(&self, rects: &[Rect]) -> Vec<Raster> {
        rects.iter().map(|&rect| self.crop(rect)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pixel::compose_rgb;

    /// 2D gradient raster so every pixel value is position-unique.
    fn gradient(w: u32, h: u32) -> Raster {
        let pixels = (0..h)
            .flat_map(|y| (0..w).map(move |x| compose_rgb(x as u8, y as u8, 7)))
            .collect();
        Raster::from_pixels(w, h, pixels).unwrap()
    }

    #[test]
    fn test_crop_basic() {
        let src = gradient(20, 20);
        let out = src.crop(Rect::new(5, 5, 15, 15));
        assert_eq!(out.width(), 10);
        assert_eq!(out.height(), 10);
        for y in 0..10 {
            for x in 0..10 {
                assert_eq!(out.pixel(x, y), src.pixel(x + 5, y + 5));
            }
        }
    }

    #[test]
    fn test_crop_full_is_identity() {
        let src = gradient(16, 9);
        let out = src.crop(Rect::new(0, 0, 16, 9));
        assert_eq!(out.width(), src.width());
        assert_eq!(out.height(), src.height());
        assert_eq!(out.pixels(), src.pixels());
    }

    #[test]
    fn test_crop_clamps_overhang() {
        let src = gradient(20, 20);
        // Extends past the right and bottom edges
        let out = src.crop(Rect::new(15, 18, 40, 40));
        assert_eq!(out.width(), 5);
        assert_eq!(out.height(), 2);
        for y in 0..2 {
            for x in 0..5 {
                assert_eq!(out.pixel(x, y), src.pixel(x + 15, y + 18));
            }
        }
    }

    #[test]
    fn test_crop_fully_outside_never_fails() {
        let src = gradient(20, 20);
        let out = src.crop(Rect::new(100, 100, 200, 200));
        assert_eq!(out.width(), 1);
        assert_eq!(out.height(), 1);
        assert_eq!(out.pixel(0, 0), src.pixel(19, 19));
    }

    #[test]
    fn test_crop_all_matches_single_crops() {
        let src = gradient(30, 30);
        let rects = [
            Rect::new(0, 0, 10, 10),
            Rect::new(12, 0, 22, 10),
            Rect::new(-5, 25, 8, 99),
        ];
        let outs = src.crop_all(&rects);
        assert_eq!(outs.len(), rects.len());
        for (out, &rect) in outs.iter().zip(rects.iter()) {
            let single = src.crop(rect);
            assert_eq!(out.pixels(), single.pixels());
        }
    }
}
