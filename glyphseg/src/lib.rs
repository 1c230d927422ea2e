//! Glyphseg - Bitmap-glyph extraction from screenshots
//!
//! An algorithmic raster engine for pulling bitmap-font glyphs and UI
//! regions out of screenshots:
//!
//! - Fuzzy color-rule matching and binarization into two-level rasters
//! - 8-connected flood-fill segmentation into glyph bounding boxes
//! - Regular grid generation for fixed-cell bitmap fonts
//! - Pixel-exact clamped cropping of the discovered regions
//!
//! Pixel decode/encode is out of scope: callers hand in ARGB word
//! buffers and get rasters back.
//!
//! # Example
//!
//! ```
//! use glyphseg::color::{ColorRule, RuleSet, binarize};
//! use glyphseg::region::{SegmentOptions, segment};
//! use glyphseg::{Raster, Rect};
//!
//! let screenshot = Raster::new(320, 200).unwrap();
//! let rules = RuleSet::compile(&[ColorRule::new("3FA0C8", "101010")]);
//!
//! let full = Rect::new(0, 0, 320, 200);
//! let binary = binarize(&screenshot, &rules, full);
//! let regions = segment(&binary, &RuleSet::match_white(), &SegmentOptions::default());
//! let glyphs = binary.crop_all(&regions);
//! assert!(glyphs.is_empty());
//! ```

// Re-export core types (primary data structures used everywhere)
pub use glyphseg_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use glyphseg_color as color;
pub use glyphseg_region as region;
