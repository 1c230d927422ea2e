//! Rect - Rectangular regions in raster pixel space
//!
//! Rectangles are half-open on the right and bottom edges: a component
//! whose rightmost matching pixel is at `max_x` has `right = max_x + 1`.
//! The constructor normalizes, so `left <= right` and `top <= bottom`
//! always hold.

/// A rectangle in raster pixel space, half-open on right/bottom.
///
/// A simple `Copy` type since it is small and frequently copied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    /// Left x coordinate (inclusive)
    pub left: i32,
    /// Top y coordinate (inclusive)
    pub top: i32,
    /// Right x coordinate (exclusive)
    pub right: i32,
    /// Bottom y coordinate (exclusive)
    pub bottom: i32,
}

impl Rect {
    /// Create a normalized rectangle from two corner coordinates.
    ///
    /// The edges are reordered if needed, so any pair of opposite
    /// corners produces the same rectangle.
    pub fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left: left.min(right),
            top: top.min(bottom),
            right: left.max(right),
            bottom: top.max(bottom),
        }
    }

    /// Get the width in pixels.
    #[inline]
    pub fn width(&self) -> i32 {
        self.right - self.left
    }

    /// Get the height in pixels.
    #[inline]
    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }

    /// Check if the rectangle covers zero pixels.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.left == self.right || self.top == self.bottom
    }

    /// Check if a point is inside the rectangle.
    #[inline]
    pub fn contains_point(&self, x: i32, y: i32) -> bool {
        x >= self.left && x < self.right && y >= self.top && y < self.bottom
    }

    /// Clamp the rectangle to a raster of the given dimensions.
    ///
    /// Returns `(x, y, w, h)` where the origin is clamped into
    /// `[0, dim - 1]` and the span into `[1, remaining]`, so the result
    /// is always at least 1x1 regardless of how far out of range the
    /// rectangle is. This is the shared leniency rule for crop and
    /// binarization; it never fails.
    ///
    /// `width` and `height` must both be at least 1, which raster
    /// construction guarantees.
    pub fn clamped_span(&self, width: u32, height: u32) -> (u32, u32, u32, u32) {
        let x = self.left.clamp(0, width as i32 - 1) as u32;
        let y = self.top.clamp(0, height as i32 - 1) as u32;
        let w = self.width().clamp(1, (width - x) as i32) as u32;
        let h = self.height().clamp(1, (height - y) as i32) as u32;
        (x, y, w, h)
    }
}
