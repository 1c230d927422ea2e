//! Error types for glyphseg-core
//!
//! Only construction of rasters can fail. Every operation over an
//! already-constructed raster is total: out-of-range rectangles clamp,
//! degenerate parameters produce empty results.

use thiserror::Error;

/// glyphseg error type
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid raster dimensions
    #[error("invalid raster dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// Pixel buffer length does not match the declared dimensions
    #[error("pixel buffer has {len} entries, expected {width}x{height} = {expected}")]
    PixelCountMismatch {
        width: u32,
        height: u32,
        len: usize,
        expected: usize,
    },
}

/// Result type for glyphseg operations
pub type Result<T> = std::result::Result<T, Error>;
