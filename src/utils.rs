//! Utility functions

use std::sync::atomic::{AtomicU64, Ordering};

/// Generate unique ID
///
/// Ids are distinct for the lifetime of the process and never reused.
pub fn next_id() -> u64 {
    static COUNTER: AtomicU64 = AtomicU64::new(1);
    COUNTER.fetch_add(1, Ordering::Relaxed)
}
