//! Raster - The pixel container
//!
//! A `Raster` is a row-major buffer of 32-bit ARGB pixels with a width
//! and height. Pixel index for `(x, y)` is `y * width + x`.
//!
//! # Ownership model
//!
//! `Raster` uses `Arc` for efficient cloning (shared ownership), which
//! is also how a background computation snapshots its input: cloning is
//! an `Arc` bump and the data behind it never changes. To write pixels,
//! convert to [`RasterMut`] via [`Raster::try_into_mut`] or
//! [`Raster::to_mut`], then convert back with `Into<Raster>`.

use crate::error::{Error, Result};
use std::sync::Arc;

/// Internal raster data
#[derive(Debug)]
struct RasterData {
    /// Width in pixels
    width: u32,
    /// Height in pixels
    height: u32,
    /// Row-major 32-bit ARGB pixels, `height * width` entries
    pixels: Vec<u32>,
}

/// Immutable ARGB raster
///
/// Rasters are immutable once produced; every engine operation returns
/// a new raster rather than mutating in place.
///
/// # Examples
///
/// ```
/// use glyphseg_core::Raster;
///
/// let raster = Raster::new(640, 480).unwrap();
/// assert_eq!(raster.width(), 640);
/// assert_eq!(raster.height(), 480);
/// ```
#[derive(Debug, Clone)]
pub struct Raster {
    inner: Arc<RasterData>,
}

impl Raster {
    /// Create a new raster with all pixels zero (transparent black).
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Ok(RasterMut::new(width, height)?.into())
    }

    /// Create a raster from an existing row-major ARGB buffer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0, or
    /// [`Error::PixelCountMismatch`] if the buffer length is not
    /// `width * height`.
    pub fn from_pixels(width: u32, height: u32, pixels: Vec<u32>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        let expected = (width as usize) * (height as usize);
        if pixels.len() != expected {
            return Err(Error::PixelCountMismatch {
                width,
                height,
                len: pixels.len(),
                expected,
            });
        }
        Ok(Raster {
            inner: Arc::new(RasterData {
                width,
                height,
                pixels,
            }),
        })
    }

    /// Construct without validation; dimensions must already be checked.
    pub(crate) fn from_raw(width: u32, height: u32, pixels: Vec<u32>) -> Self {
        debug_assert_eq!(pixels.len(), (width as usize) * (height as usize));
        Raster {
            inner: Arc::new(RasterData {
                width,
                height,
                pixels,
            }),
        }
    }

    /// Get the raster width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the raster height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Get the full pixel buffer.
    #[inline]
    pub fn pixels(&self) -> &[u32] {
        &self.inner.pixels
    }

    /// Get the pixel at `(x, y)`, or `None` if out of bounds.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> Option<u32> {
        if x >= self.inner.width || y >= self.inner.height {
            return None;
        }
        Some(self.inner.pixels[(y * self.inner.width + x) as usize])
    }

    /// Get a single row of pixels.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row(&self, y: u32) -> &[u32] {
        let start = (y * self.inner.width) as usize;
        &self.inner.pixels[start..start + self.inner.width as usize]
    }

    /// Try to get mutable access to the pixel data.
    ///
    /// Succeeds only if there is exactly one reference to the data.
    pub fn try_into_mut(self) -> std::result::Result<RasterMut, Self> {
        match Arc::try_unwrap(self.inner) {
            Ok(data) => Ok(RasterMut { inner: data }),
            Err(arc) => Err(Raster { inner: arc }),
        }
    }

    /// Create a mutable copy of this raster.
    ///
    /// Always copies the pixel buffer, leaving the original untouched.
    pub fn to_mut(&self) -> RasterMut {
        RasterMut {
            inner: RasterData {
                width: self.inner.width,
                height: self.inner.height,
                pixels: self.inner.pixels.clone(),
            },
        }
    }
}

/// Mutable raster
///
/// Allows writing pixel data with exclusive access enforced at compile
/// time. Convert back to an immutable [`Raster`] using `Into<Raster>`.
#[derive(Debug)]
pub struct RasterMut {
    inner: RasterData,
}

impl RasterMut {
    /// Create a new mutable raster with all pixels zero.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        Ok(RasterMut {
            inner: RasterData {
                width,
                height,
                pixels: vec![0; (width as usize) * (height as usize)],
            },
        })
    }

    /// Get the raster width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the raster height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Get the full pixel buffer.
    #[inline]
    pub fn pixels(&self) -> &[u32] {
        &self.inner.pixels
    }

    /// Get mutable access to the full pixel buffer.
    #[inline]
    pub fn pixels_mut(&mut self) -> &mut [u32] {
        &mut self.inner.pixels
    }

    /// Get mutable access to a single row of pixels.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row_mut(&mut self, y: u32) -> &mut [u32] {
        let start = (y * self.inner.width) as usize;
        &mut self.inner.pixels[start..start + self.inner.width as usize]
    }

    /// Set the pixel at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if the position is out of bounds.
    #[inline]
    pub fn set_pixel(&mut self, x: u32, y: u32, argb: u32) {
        assert!(
            x < self.inner.width && y < self.inner.height,
            "pixel ({x}, {y}) out of bounds for {}x{} raster",
            self.inner.width,
            self.inner.height
        );
        self.inner.pixels[(y * self.inner.width + x) as usize] = argb;
    }

    /// Fill every pixel with the same value.
    pub fn fill(&mut self, argb: u32) {
        self.inner.pixels.fill(argb);
    }
}

impl From<RasterMut> for Raster {
    fn from(raster_mut: RasterMut) -> Self {
        Raster {
            inner: Arc::new(raster_mut.inner),
        }
    }
}
