//! Generation tokens for last-request-wins recomputation
//!
//! The engine itself is pure and stateless, but its typical caller runs
//! segmentation and binarization on a background worker while inputs
//! keep changing. Only one result is authoritative per input
//! generation: a worker calls [`GenerationCounter::begin`] when it
//! snapshots its inputs, computes, and publishes only if
//! [`GenerationCounter::is_current`] still holds. A newer `begin`
//! supersedes every in-flight computation; superseded results are
//! discarded, not interrupted.

use std::sync::atomic::{AtomicU64, Ordering};

/// Token identifying one recomputation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Generation(u64);

/// Process-wide or per-workspace counter handing out [`Generation`]s.
#[derive(Debug, Default)]
pub struct GenerationCounter {
    current: AtomicU64,
}

impl GenerationCounter {
    /// Create a counter with no generation started.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new generation, superseding all earlier ones.
    pub fn begin(&self) -> Generation {
        Generation(self.current.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Check whether a generation is still the latest.
    ///
    /// A worker holding a stale token must discard its result.
    pub fn is_current(&self, generation: Generation) -> bool {
        self.current.load(Ordering::SeqCst) == generation.0
    }
}
