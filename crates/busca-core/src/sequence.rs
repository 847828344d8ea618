//! Ordering guard for overlapping searches.
//!
//! Every dispatch takes a ticket from a monotonically increasing counter. A
//! result may only be applied if its ticket is newer than every ticket applied
//! before it, so a slow response can never overwrite a newer one.

use std::sync::atomic::{AtomicU64, Ordering};

/// Issues tickets and tracks the newest one applied
#[derive(Debug, Default)]
pub struct SequenceGuard {
    issued: AtomicU64,
    applied: AtomicU64,
}

impl SequenceGuard {
    pub const fn new() -> Self {
        Self {
            issued: AtomicU64::new(0),
            applied: AtomicU64::new(0),
        }
    }

    /// Take the next ticket. The first ticket is `1`.
    pub fn next_ticket(&self) -> u64 {
        self.issued.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Try to mark `ticket` as applied.
    ///
    /// Returns `false` when an equal or newer ticket was already applied, in
    /// which case the caller must discard its result.
    pub fn try_apply(&self, ticket: u64) -> bool {
        self.applied.fetch_max(ticket, Ordering::SeqCst) < ticket
    }

    /// Newest ticket applied so far (`0` before the first apply).
    pub fn last_applied(&self) -> u64 {
        self.applied.load(Ordering::SeqCst)
    }
}
