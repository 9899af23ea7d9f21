//! In-memory schedule store for testing and single-process deployments

use std::sync::{Arc, RwLock};

use async_trait::async_trait;

use crate::traits::ScheduleStore;
use crate::types::{FeeResult, ScheduleRevision};

/// In-memory schedule store.
///
/// Holds at most one published revision behind an `RwLock`. Publishing swaps
/// in a new `Arc` wholesale, so a reader that already fetched the revision
/// keeps a complete snapshot of the old schedule while subsequent reads see
/// the new one. Clones share the same underlying slot.
#[derive(Debug, Clone, Default)]
pub struct MemoryScheduleStore {
    current: Arc<RwLock<Option<Arc<ScheduleRevision>>>>,
}

impl MemoryScheduleStore {
    /// Create a new store with no published schedule
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop the published schedule (useful for testing)
    pub fn clear(&self) {
        *self.current.write().unwrap() = None;
    }
}

#[async_trait]
impl ScheduleStore for MemoryScheduleStore {
    async fn publish(&self, revision: ScheduleRevision) -> FeeResult<()> {
        *self.current.write().unwrap() = Some(Arc::new(revision));
        Ok(())
    }

    async fn current(&self) -> FeeResult<Option<Arc<ScheduleRevision>>> {
        Ok(self.current.read().unwrap().clone())
    }
}
