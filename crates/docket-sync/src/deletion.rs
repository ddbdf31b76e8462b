//! Deletion workflow state machine
//!
//! Two states: `Idle` and `AwaitingConfirmation`. Requesting a deletion
//! while another is pending replaces the pending intent; there is no queue.
//! Execution of a confirmed deletion lives in the dashboard, which owns the
//! records service and the alert sink.

use docket_record::{DeletionIntent, RequestRecord};

/// Where the workflow currently stands
#[derive(Debug, Clone, Default, PartialEq)]
pub enum DeletionState {
    /// No deletion pending
    #[default]
    Idle,
    /// A deletion awaits user confirmation
    AwaitingConfirmation(DeletionIntent),
}

/// Confirm/execute state machine for destructive deletes
#[derive(Debug, Clone, Default)]
pub struct DeletionWorkflow {
    state: DeletionState,
}

impl DeletionWorkflow {
    /// Workflow starting at `Idle`
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state
    #[inline]
    #[must_use]
    pub fn state(&self) -> &DeletionState {
        &self.state
    }

    /// The pending intent, if any
    #[inline]
    #[must_use]
    pub fn pending(&self) -> Option<&DeletionIntent> {
        match &self.state {
            DeletionState::Idle => None,
            DeletionState::AwaitingConfirmation(intent) => Some(intent),
        }
    }

    /// Whether a confirmation is pending
    #[inline]
    #[must_use]
    pub fn is_awaiting(&self) -> bool {
        matches!(self.state, DeletionState::AwaitingConfirmation(_))
    }

    /// Request deletion of one record; replaces any pending intent
    pub fn request_single(&mut self, record: RequestRecord) {
        self.state = DeletionState::AwaitingConfirmation(DeletionIntent::single(record));
    }

    /// Request deletion of the entire history bucket; replaces any pending
    /// intent
    pub fn request_all(&mut self) {
        self.state = DeletionState::AwaitingConfirmation(DeletionIntent::all());
    }

    /// Abandon the pending intent without side effects
    pub fn cancel(&mut self) {
        self.state = DeletionState::Idle;
    }

    /// Take the pending intent for execution, returning to `Idle`
    ///
    /// The state drops back to `Idle` before the delete call runs, so the
    /// user is never stuck in a confirmation state whatever the outcome.
    pub fn take_pending(&mut self) -> Option<DeletionIntent> {
        match std::mem::take(&mut self.state) {
            DeletionState::Idle => None,
            DeletionState::AwaitingConfirmation(intent) => Some(intent),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use docket_record::{DeleteMode, RecordId, RequestStatus};

    fn record(id: u64) -> RequestRecord {
        RequestRecord::new(
            RecordId(id),
            format!("request {id}"),
            RequestStatus::Rejected,
            Utc::now(),
        )
    }

    #[test]
    fn workflow_starts_idle() {
        let workflow = DeletionWorkflow::new();
        assert_eq!(*workflow.state(), DeletionState::Idle);
        assert!(!workflow.is_awaiting());
    }

    #[test]
    fn request_single_awaits_confirmation() {
        let mut workflow = DeletionWorkflow::new();
        workflow.request_single(record(7));

        let intent = workflow.pending().unwrap();
        assert_eq!(intent.mode, DeleteMode::Single);
        assert_eq!(intent.target_id(), Some(RecordId(7)));
    }

    #[test]
    fn new_request_replaces_pending_intent() {
        let mut workflow = DeletionWorkflow::new();
        workflow.request_single(record(7));
        workflow.request_all();

        let intent = workflow.pending().unwrap();
        assert_eq!(intent.mode, DeleteMode::All);
        assert_eq!(intent.target_id(), None);
    }

    #[test]
    fn cancel_returns_to_idle() {
        let mut workflow = DeletionWorkflow::new();
        workflow.request_all();
        workflow.cancel();

        assert_eq!(*workflow.state(), DeletionState::Idle);
        assert!(workflow.take_pending().is_none());
    }

    #[test]
    fn take_pending_clears_state() {
        let mut workflow = DeletionWorkflow::new();
        workflow.request_single(record(3));

        let intent = workflow.take_pending().unwrap();
        assert_eq!(intent.target_id(), Some(RecordId(3)));
        assert_eq!(*workflow.state(), DeletionState::Idle);
        assert!(workflow.take_pending().is_none());
    }
}
