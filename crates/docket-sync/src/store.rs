//! Two-slot snapshot store
//!
//! Holds the latest snapshot and the immediately preceding one - exactly one
//! generation of history, as an explicit pair rather than closure state, so
//! update order is unambiguous and testable without any rendering concern.

use crate::detect::detect_transitions;
use crate::error::SyncError;
use crate::service::RecordsService;
use docket_record::{Snapshot, TransitionEvent};
use parking_lot::RwLock;
use std::sync::Arc;

#[derive(Debug, Default)]
struct SnapshotPair {
    previous: Snapshot,
    current: Snapshot,
}

/// Owner of the (previous, current) snapshot pair
///
/// All writes go through [`RequestStore::refresh`]; the pair is shifted and
/// the new snapshot diffed under one write-lock acquisition, so detection
/// never observes a half-updated pair.
pub struct RequestStore {
    service: Arc<dyn RecordsService>,
    snapshots: RwLock<SnapshotPair>,
}

impl RequestStore {
    /// Create a store with both slots empty
    #[must_use]
    pub fn new(service: Arc<dyn RecordsService>) -> Self {
        Self {
            service,
            snapshots: RwLock::new(SnapshotPair::default()),
        }
    }

    /// Fetch one new snapshot and diff it against the previous one
    ///
    /// On success the pair shifts current→previous, the fetch result becomes
    /// current, and the detected transitions are returned. On failure both
    /// slots are left untouched; the regular poll cadence is the only retry.
    ///
    /// # Errors
    /// `SyncError::FetchFailed` when the records service call fails.
    pub async fn refresh(&self) -> Result<Vec<TransitionEvent>, SyncError> {
        let fetched = self
            .service
            .fetch_records()
            .await
            .map_err(SyncError::FetchFailed)?;
        let snapshot = Snapshot::new(fetched);

        let mut pair = self.snapshots.write();
        pair.previous = std::mem::replace(&mut pair.current, snapshot);
        let events = detect_transitions(&pair.previous, &pair.current);
        drop(pair);

        if !events.is_empty() {
            tracing::debug!(transitions = events.len(), "snapshot refresh detected changes");
        }
        Ok(events)
    }

    /// Latest snapshot
    #[inline]
    #[must_use]
    pub fn current(&self) -> Snapshot {
        self.snapshots.read().current.clone()
    }

    /// Immediately preceding snapshot
    #[inline]
    #[must_use]
    pub fn previous(&self) -> Snapshot {
        self.snapshots.read().previous.clone()
    }
}
