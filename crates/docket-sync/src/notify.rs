//! Notification log
//!
//! Append-only within a session, newest first. Entries are only ever mutated
//! in bulk: mark-all-read and clear-all. There is no per-entry delete or
//! per-entry mark-read.

use docket_record::{Notification, TransitionEvent};

/// Read/unread-tracked log of status-change notifications
#[derive(Debug, Clone, Default)]
pub struct NotificationLog {
    entries: Vec<Notification>,
    cap: Option<usize>,
}

impl NotificationLog {
    /// Unbounded log
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Log bounded to `cap` entries; the oldest fall off on ingest
    #[inline]
    #[must_use]
    pub fn bounded(cap: usize) -> Self {
        Self {
            entries: Vec::new(),
            cap: Some(cap),
        }
    }

    /// Prepend one unread notification per event, ahead of existing entries
    ///
    /// Event order is preserved within the new block, keeping the log in
    /// newest-first order across cycles.
    pub fn ingest(&mut self, events: &[TransitionEvent]) {
        if events.is_empty() {
            return;
        }
        let mut fresh: Vec<Notification> = events.iter().map(Notification::from_event).collect();
        fresh.append(&mut self.entries);
        self.entries = fresh;
        if let Some(cap) = self.cap {
            self.entries.truncate(cap);
        }
    }

    /// Mark every entry read; idempotent
    pub fn mark_all_read(&mut self) {
        for entry in &mut self.entries {
            entry.read = true;
        }
    }

    /// Remove every entry; idempotent
    pub fn clear_all(&mut self) {
        self.entries.clear();
    }

    /// Number of unread entries (drives the badge)
    #[inline]
    #[must_use]
    pub fn unread_count(&self) -> usize {
        self.entries.iter().filter(|n| !n.read).count()
    }

    /// Entries, newest first
    #[inline]
    #[must_use]
    pub fn entries(&self) -> &[Notification] {
        &self.entries
    }

    /// Total number of entries
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the log is empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
