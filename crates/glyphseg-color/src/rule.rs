//! Color rules and their compiled evaluator
//!
//! A [`ColorRule`] carries the target color and per-channel tolerance
//! as hex literals exactly as the interactive layer supplies them (a
//! color pick plus the active bias). Rules are compiled into a
//! [`RuleSet`] once per computation; per-pixel evaluation never
//! re-parses hex. Compiling is also the snapshot point: a `RuleSet`
//! holds its own copy of the rule data, so the caller is free to keep
//! editing rules while a computation runs.

use glyphseg_core::pixel;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_RULE_ID: AtomicU64 = AtomicU64::new(1);

/// A fuzzy color-match rule: target color, per-channel tolerance, and
/// an enabled flag.
///
/// `target_hex` and `bias_hex` are 6-digit RGB hex literals, with an
/// optional `#` prefix. The bias gives three independent per-channel
/// deltas: `"101010"` allows each of R, G, B to differ from the target
/// by up to `0x10`. The engine never mutates rules; tolerance edits and
/// enable/disable are the caller's business.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorRule {
    /// Unique ID so the caller can edit or remove the rule in a list
    pub id: u64,
    /// Target color, e.g. `"3FA0C8"`
    pub target_hex: String,
    /// Per-channel tolerance, e.g. `"101010"`
    pub bias_hex: String,
    /// Disabled rules are skipped by [`RuleSet::compile`]
    pub enabled: bool,
}

impl ColorRule {
    /// Create an enabled rule with a fresh ID.
    pub fn new(target_hex: impl Into<String>, bias_hex: impl Into<String>) -> Self {
        Self {
            id: NEXT_RULE_ID.fetch_add(1, Ordering::Relaxed),
            target_hex: target_hex.into(),
            bias_hex: bias_hex.into(),
            enabled: true,
        }
    }

    /// The synthetic rule for re-segmenting an already-binarized
    /// raster: exact white, zero tolerance.
    pub fn match_white() -> Self {
        Self::new("FFFFFF", "000000")
    }
}

/// Parse a 6-digit RGB hex literal into channels.
///
/// Accepts an optional leading `#`. Anything else is malformed.
fn parse_hex_channels(literal: &str) -> Option<[u8; 3]> {
    let digits = literal.strip_prefix('#').unwrap_or(literal);
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let value = u32::from_str_radix(digits, 16).ok()?;
    Some([(value >> 16) as u8, (value >> 8) as u8, value as u8])
}

/// One rule with its hex literals resolved to channel values.
#[derive(Debug, Clone, Copy)]
struct CompiledRule {
    target: [u8; 3],
    tolerance: [u8; 3],
}

impl CompiledRule {
    /// Resolve a rule's literals.
    ///
    /// A malformed literal must not interrupt evaluation: the rule
    /// degrades to zero tolerance around black, the defined safety
    /// fallback.
    fn from_rule(rule: &ColorRule) -> Self {
        match (
            parse_hex_channels(&rule.target_hex),
            parse_hex_channels(&rule.bias_hex),
        ) {
            (Some(target), Some(tolerance)) => Self { target, tolerance },
            _ => Self {
                target: [0; 3],
                tolerance: [0; 3],
            },
        }
    }

    #[inline]
    fn matches(&self, r: u8, g: u8, b: u8) -> bool {
        r.abs_diff(self.target[0]) <= self.tolerance[0]
            && g.abs_diff(self.target[1]) <= self.tolerance[1]
            && b.abs_diff(self.target[2]) <= self.tolerance[2]
    }
}

/// A compiled snapshot of the enabled rules of a rule list.
///
/// Matching is the logical OR across the compiled rules; an empty set
/// matches nothing. Evaluation is pure and deterministic.
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    rules: Vec<CompiledRule>,
}

impl RuleSet {
    /// Compile the enabled rules of a list.
    pub fn compile(rules: &[ColorRule]) -> Self {
        Self {
            rules: rules
                .iter()
                .filter(|rule| rule.enabled)
                .map(CompiledRule::from_rule)
                .collect(),
        }
    }

    /// The single-rule set for an already-binarized raster.
    pub fn match_white() -> Self {
        Self::compile(&[ColorRule::match_white()])
    }

    /// Check whether no rule is active.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Match a pixel against every rule; alpha is ignored.
    #[inline]
    pub fn matches(&self, argb: u32) -> bool {
        let r = pixel::red(argb);
        let g = pixel::green(argb);
        let b = pixel::blue(argb);
        self.rules.iter().any(|rule| rule.matches(r, g, b))
    }
}
