//! Shared document storage.
//!
//! Readers take an `Arc` snapshot and walk it without locking. Writers clone
//! the current document, edit the clone and publish it with a
//! compare-and-swap, so a failed edit never becomes visible.

use std::sync::Arc;

use arc_swap::ArcSwap;

use crate::config::schema::AppDocument;
use crate::error::CfgResult;

#[derive(Debug)]
pub struct DocumentStore {
    current: ArcSwap<AppDocument>,
}

impl DocumentStore {
    pub fn new(document: AppDocument) -> Self {
        Self {
            current: ArcSwap::from_pointee(document),
        }
    }

    /// Consistent view of the whole document.
    pub fn snapshot(&self) -> Arc<AppDocument> {
        self.current.load_full()
    }

    /// Apply `edit` to a private copy and publish it.
    ///
    /// If `edit` fails nothing is published. A concurrent writer causes the
    /// edit to be replayed on the newer document.
    pub fn update<F>(&self, mut edit: F) -> CfgResult<()>
    where
        F: FnMut(&mut AppDocument) -> CfgResult<()>,
    {
        loop {
            let current = self.current.load_full();
            let mut next = AppDocument::clone(&current);
            edit(&mut next)?;

            let prev = self.current.compare_and_swap(&current, Arc::new(next));
            if Arc::ptr_eq(&*prev, &current) {
                return Ok(());
            }
            tracing::debug!("Document changed during update, retrying");
        }
    }
}
