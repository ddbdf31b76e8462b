//! Deletion intents
//!
//! Transient confirmation state between a delete request and its
//! confirmation or cancellation. Never persisted.

use crate::record::{RecordId, RequestRecord};

/// What the pending deletion covers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeleteMode {
    /// One record
    Single,
    /// Every history record (Rejected/Released bucket)
    All,
}

/// A pending user request to delete one or all history records
#[derive(Debug, Clone, PartialEq)]
pub struct DeletionIntent {
    /// Single-record or bulk-history deletion
    pub mode: DeleteMode,
    /// The record in question for single deletes
    pub target: Option<RequestRecord>,
}

impl DeletionIntent {
    /// Intent to delete one record
    #[inline]
    #[must_use]
    pub fn single(record: RequestRecord) -> Self {
        Self {
            mode: DeleteMode::Single,
            target: Some(record),
        }
    }

    /// Intent to clear the entire history bucket
    #[inline]
    #[must_use]
    pub fn all() -> Self {
        Self {
            mode: DeleteMode::All,
            target: None,
        }
    }

    /// Target record id for single deletes
    #[inline]
    #[must_use]
    pub fn target_id(&self) -> Option<RecordId> {
        self.target.as_ref().map(|r| r.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::status::RequestStatus;
    use chrono::Utc;

    #[test]
    fn intent_single_carries_target() {
        let record = RequestRecord::new(
            RecordId(7),
            "Form 137",
            RequestStatus::Rejected,
            Utc::now(),
        );
        let intent = DeletionIntent::single(record);

        assert_eq!(intent.mode, DeleteMode::Single);
        assert_eq!(intent.target_id(), Some(RecordId(7)));
    }

    #[test]
    fn intent_all_has_no_target() {
        let intent = DeletionIntent::all();
        assert_eq!(intent.mode, DeleteMode::All);
        assert_eq!(intent.target_id(), None);
    }
}
