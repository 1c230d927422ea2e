//! glyphseg-core - Data structures for the glyphseg raster engine
//!
//! This crate provides the value types the rest of the engine operates
//! on:
//!
//! - [`Raster`] / [`RasterMut`] - row-major 32-bit ARGB pixel container
//!   (immutable / mutable)
//! - [`Rect`] - half-open rectangles in raster pixel space
//! - [`pixel`] - ARGB channel helpers and the binarization constants
//! - [`Generation`] / [`GenerationCounter`] - last-request-wins tokens
//!   for callers that recompute on a background worker
//!
//! Cropping ([`Raster::crop`], [`Raster::crop_all`]) lives here too,
//! since it touches nothing but the pixel buffer.
//!
//! # Error policy
//!
//! Only raster construction can fail. Every operation over a
//! constructed raster is total: out-of-range rectangles clamp and
//! degenerate parameters produce empty results, so nothing in the
//! interactive loop above this crate ever has to handle a panic.

mod crop;
pub mod error;
mod generation;
pub mod pixel;
mod raster;
mod rect;

pub use error::{Error, Result};
pub use generation::{Generation, GenerationCounter};
pub use raster::{Raster, RasterMut};
pub use rect::Rect;
