//! View leases.
//!
//! # Responsibilities
//! - Track how many views borrow a manager (Constructed views)
//! - Log the Constructed → Released transition
//! - Release exactly once, on every exit path (RAII)

use std::sync::atomic::{AtomicUsize, Ordering};

/// Counts the live views derived from one manager.
#[derive(Debug, Default)]
pub struct LeaseCounter {
    live: AtomicUsize,
}

impl LeaseCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new view of the given kind.
    pub fn acquire(&self, kind: &'static str) -> ViewLease<'_> {
        let live = self.live.fetch_add(1, Ordering::AcqRel) + 1;
        tracing::debug!(view = kind, live, "{} constructed", kind);
        ViewLease {
            counter: self,
            kind,
        }
    }

    /// Number of views currently in the Constructed state.
    pub fn live(&self) -> usize {
        self.live.load(Ordering::Acquire)
    }
}

/// A RAII guard that keeps one view registered with its manager.
///
/// Leases are neither `Clone` nor `Copy`; the owning view is released when
/// the lease drops.
#[derive(Debug)]
pub struct ViewLease<'a> {
    counter: &'a LeaseCounter,
    kind: &'static str,
}

impl ViewLease<'_> {
    pub fn kind(&self) -> &'static str {
        self.kind
    }
}

impl Drop for ViewLease<'_> {
    fn drop(&mut self) {
        let live = self.counter.live.fetch_sub(1, Ordering::AcqRel) - 1;
        tracing::debug!(view = self.kind, live, "{} released", self.kind);
    }
}
