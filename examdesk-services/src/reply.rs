//! Canned-reply selection seam.

use rand::Rng;

/// Chooses which canned reply answers a chat message.
///
/// Kept as a trait so tests can pin the sequence; the picker has no part
/// in health-state logic.
pub trait ReplyPicker: Send + Sync {
    /// Returns an index in `0..len`. Callers guarantee `len >= 1`.
    fn pick(&self, len: usize) -> usize;
}

/// Uniform random selection from the thread-local RNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRngPicker;

impl ReplyPicker for ThreadRngPicker {
    fn pick(&self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len)
    }
}
