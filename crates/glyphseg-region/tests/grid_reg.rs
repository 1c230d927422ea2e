//! Regression test for grid generation feeding the clamped crop.

use glyphseg_core::{Raster, Rect};
use glyphseg_region::{GridSpec, generate_grid};

/// Raster where each pixel encodes its own coordinates, so crops can be
/// checked for exact placement.
fn coordinate_raster(w: u32, h: u32) -> Raster {
    let pixels = (0..h)
        .flat_map(|y| (0..w).map(move |x| (y << 16) | x))
        .collect();
    Raster::from_pixels(w, h, pixels).unwrap()
}

#[test]
fn grid_reg() {
    // A 4x2 character grid of 8x12 cells with 1px column spacing
    let src = coordinate_raster(64, 32);
    let spec = GridSpec {
        origin_x: 2,
        origin_y: 3,
        cell_w: 8,
        cell_h: 12,
        col_gap: 1,
        row_gap: 2,
        col_count: 4,
        row_count: 2,
    };

    let cells = generate_grid(&spec);
    assert_eq!(cells.len(), 8);
    assert_eq!(cells[0], Rect::new(2, 3, 10, 15));
    assert_eq!(cells[3], Rect::new(29, 3, 37, 15));
    assert_eq!(cells[4], Rect::new(2, 17, 10, 29));

    let crops = src.crop_all(&cells);
    assert_eq!(crops.len(), 8);
    for (cell, crop) in cells.iter().zip(&crops) {
        assert_eq!(crop.width(), 8);
        assert_eq!(crop.height(), 12);
        // Top-left pixel of each crop encodes the cell origin
        let expected = ((cell.top as u32) << 16) | cell.left as u32;
        assert_eq!(crop.pixel(0, 0), Some(expected));
    }
}

#[test]
fn grid_cells_past_raster_edge_clamp() {
    // The last column of this grid hangs past the right edge; the crop
    // clamps it instead of failing
    let src = coordinate_raster(20, 10);
    let cells = generate_grid(&GridSpec {
        origin_x: 0,
        origin_y: 0,
        cell_w: 8,
        cell_h: 10,
        col_gap: 0,
        row_gap: 0,
        col_count: 3,
        row_count: 1,
    });
    assert_eq!(cells[2], Rect::new(16, 0, 24, 10));

    let crops = src.crop_all(&cells);
    assert_eq!(crops[2].width(), 4);
    assert_eq!(crops[2].height(), 10);
    assert_eq!(crops[2].pixel(0, 0), Some(16));
}
