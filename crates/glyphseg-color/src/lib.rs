//! glyphseg-color - Color-rule matching and binarization
//!
//! This crate turns the interactive layer's color rules into per-pixel
//! predicates and two-level rasters:
//!
//! - **Rules** ([`rule`]): [`ColorRule`] value type and the compiled
//!   [`RuleSet`] evaluator
//! - **Binarization** ([`binarize`]): rule-based and RGB-average
//!   threshold classification into opaque white/black
//!
//! Nothing here returns an error: malformed rule literals degrade to a
//! never-matching rule, empty rule sets match nothing, and out-of-range
//! regions clamp. The interactive loop above must never be interrupted
//! by bad rule data.

pub mod binarize;
pub mod rule;

// Re-export core types
pub use glyphseg_core;

pub use binarize::{binarize, binarize_by_rgb_avg};
pub use rule::{ColorRule, RuleSet};
