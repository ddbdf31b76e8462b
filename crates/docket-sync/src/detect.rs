//! Snapshot diffing
//!
//! Pure comparison of two consecutive snapshots. Only status changes on
//! records present in both snapshots are notable: newly created records have
//! no baseline and deleted records have no current state, so neither emits
//! an event.

use docket_record::{Snapshot, TransitionEvent};

/// Detect per-record status transitions between two snapshots
///
/// Emits nothing when `previous` is empty (first poll, no baseline) or
/// `current` is empty. Events follow current-snapshot order, which keeps
/// notification ordering deterministic within one detection call.
#[must_use]
pub fn detect_transitions(previous: &Snapshot, current: &Snapshot) -> Vec<TransitionEvent> {
    if previous.is_empty() || current.is_empty() {
        return Vec::new();
    }

    let mut events = Vec::new();
    for record in current.iter() {
        if let Some(old) = previous.get(record.id) {
            if old.status != record.status {
                events.push(TransitionEvent::new(record, old.status));
            }
        }
    }
    events
}
