//! Grid lattice generation
//!
//! Produces the rectangles of a regular grid for fixed-cell bitmap
//! fonts, where flood-fill segmentation would glue adjacent glyphs
//! together. Generation is pure arithmetic over the grid spec; it never
//! consults pixel data, so cells may extend past the raster edge and
//! are clamped later by the crop.

use glyphseg_core::Rect;

/// A regular grid of equally sized cells.
///
/// All fields are signed: a negative origin or gap is meaningful (cells
/// that start off-raster, or overlapping columns) and resolves at crop
/// time like any other rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridSpec {
    /// Left edge of the first cell
    pub origin_x: i32,
    /// Top edge of the first cell
    pub origin_y: i32,
    /// Cell width; a non-positive value makes the grid empty
    pub cell_w: i32,
    /// Cell height; a non-positive value makes the grid empty
    pub cell_h: i32,
    /// Horizontal spacing between adjacent columns
    pub col_gap: i32,
    /// Vertical spacing between adjacent rows
    pub row_gap: i32,
    /// Number of columns
    pub col_count: u32,
    /// Number of rows
    pub row_count: u32,
}

/// Generate the cell rectangles of a grid in row-major order.
///
/// The cell at column `c`, row `r` has its left edge at
/// `origin_x + c * (cell_w + col_gap)` and its top edge at
/// `origin_y + r * (cell_h + row_gap)`; every cell is `cell_w` by
/// `cell_h`. A grid spec with non-positive cell dimensions or zero counts
/// yields no cells rather than an error.
pub fn generate_grid(spec: &GridSpec) -> Vec<Rect> {
    if spec.cell_w <= 0 || spec.cell_h <= 0 {
        return Vec::new();
    }

    let mut cells = Vec::with_capacity((spec.col_count as usize) * (spec.row_count as usize));
    for r in 0..spec.row_count as i32 {
        let top = spec.origin_y + r * (spec.cell_h + spec.row_gap);
        for c in 0..spec.col_count as i32 {
            let left = spec.origin_x + c * (spec.cell_w + spec.col_gap);
            cells.push(Rect::new(left, top, left + spec.cell_w, top + spec.cell_h));
        }
    }
    cells
}
