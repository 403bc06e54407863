//! Durable-store availability tracking.
//!
//! Each facade owns one `HealthState`. The latch starts AVAILABLE and flips
//! to DEGRADED on the first durable failure; nothing flips it back for the
//! life of the process. Recovery would require reconciling mirror writes
//! against the store, which this layer deliberately does not do.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// One-way availability latch for a durable store.
///
/// Clones share the latch, so a handle taken before bootstrap keeps
/// reporting that facade's health afterwards. Safe to read from any task.
#[derive(Debug, Clone, Default)]
pub struct HealthState {
    degraded: Arc<AtomicBool>,
}

impl HealthState {
    /// Creates a latch reporting the store as available.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a latch already tripped to DEGRADED.
    #[must_use]
    pub fn degraded() -> Self {
        let state = Self::new();
        state.mark_degraded();
        state
    }

    /// Whether the durable store should still be attempted.
    pub fn is_available(&self) -> bool {
        !self.degraded.load(Ordering::SeqCst)
    }

    /// Trips the latch. Returns `true` only for the call that performed the
    /// transition, so the caller can log it exactly once; later calls are
    /// no-ops.
    pub fn mark_degraded(&self) -> bool {
        !self.degraded.swap(true, Ordering::SeqCst)
    }
}
