//! glyphseg-region - Region discovery over rasters
//!
//! Two ways of turning a raster into candidate glyph rectangles:
//!
//! - **Flood-fill segmentation** ([`segment`]): bounding boxes of the
//!   8-connected components of rule-matching pixels, for
//!   proportional-width fonts and free-form UI regions
//! - **Grid generation** ([`grid`]): a regular cell lattice from a
//!   [`GridSpec`], for fixed-cell bitmap fonts
//!
//! Both produce [`Rect`](glyphseg_core::Rect) lists that feed directly
//! into [`Raster::crop_all`](glyphseg_core::Raster::crop_all).

pub mod grid;
pub mod segment;

// Re-export core types
pub use glyphseg_core;

pub use grid::{GridSpec, generate_grid};
pub use segment::{SegmentOptions, segment};
