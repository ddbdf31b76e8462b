//! Transition events detected between consecutive snapshots

use crate::record::{RecordId, RequestRecord};
use crate::status::RequestStatus;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use ulid::Ulid;

/// Unique transition-event identifier (ULID for sortability)
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct EventId(pub Ulid);

impl EventId {
    /// Generate a new event ID
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self(Ulid::new())
    }
}

impl Default for EventId {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for EventId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A detected status change on a record present in both compared snapshots
///
/// Immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransitionEvent {
    /// Unique event id
    pub event_id: EventId,
    /// Record that changed status
    pub record_id: RecordId,
    /// Status in the previous snapshot
    pub from_status: RequestStatus,
    /// Status in the current snapshot
    pub to_status: RequestStatus,
    /// Detection time
    pub occurred_at: DateTime<Utc>,
    /// Human-readable summary
    pub message: String,
}

impl TransitionEvent {
    /// Build an event for a record whose status moved off `from_status`
    #[must_use]
    pub fn new(record: &RequestRecord, from_status: RequestStatus) -> Self {
        Self {
            event_id: EventId::new(),
            record_id: record.id,
            from_status,
            to_status: record.status,
            occurred_at: Utc::now(),
            message: format!("{} is now {}", record.label, record.status),
        }
    }
}
