//! ARGB pixel helpers
//!
//! Rasters store pixels as 32-bit ARGB words: alpha in the top byte,
//! then red, green, blue. These helpers extract and compose channels.

/// Fully opaque white, the "match" output of binarization.
pub const OPAQUE_WHITE: u32 = 0xFFFF_FFFF;

/// Fully opaque black, the "no match" output of binarization.
pub const OPAQUE_BLACK: u32 = 0xFF00_0000;

/// Extract the alpha channel.
#[inline]
pub fn alpha(argb: u32) -> u8 {
    (argb >> 24) as u8
}

/// Extract the red channel.
#[inline]
pub fn red(argb: u32) -> u8 {
    (argb >> 16) as u8
}

/// Extract the green channel.
#[inline]
pub fn green(argb: u32) -> u8 {
    (argb >> 8) as u8
}

/// Extract the blue channel.
#[inline]
pub fn blue(argb: u32) -> u8 {
    argb as u8
}

/// Compose an ARGB pixel from individual channels.
#[inline]
pub fn compose_argb(a: u8, r: u8, g: u8, b: u8) -> u32 {
    ((a as u32) << 24) | ((r as u32) << 16) | ((g as u32) << 8) | (b as u32)
}

/// Compose a fully opaque pixel from RGB channels.
#[inline]
pub fn compose_rgb(r: u8, g: u8, b: u8) -> u32 {
    compose_argb(0xFF, r, g, b)
}

/// Average of the three color channels, rounded down.
///
/// Alpha is ignored; `(r + g + b) / 3` over the full 0-255 range.
#[inline]
pub fn rgb_average(argb: u32) -> u8 {
    let sum = red(argb) as u16 + green(argb) as u16 + blue(argb) as u16;
    (sum / 3) as u8
}
