//! Dashboard facade
//!
//! The single entry point collaborators (rendering, modals) talk to. Owns
//! the snapshot store, notification log, deletion workflow, active-bucket
//! selection and profile state, and wires one refresh cycle together:
//! fetch → install → detect → ingest → alert.

use crate::config::SyncConfig;
use crate::deletion::{DeletionState, DeletionWorkflow};
use crate::error::SyncError;
use crate::notify::NotificationLog;
use crate::profile::{decode_token_claims, ProfileState};
use crate::project::{counts_by_bucket, filter_by_bucket, BucketCounts};
use crate::service::{Alert, AlertSink, ProfileSource, RecordsService};
use crate::store::RequestStore;
use docket_record::{
    Bucket, DeleteMode, DeletionIntent, Notification, RequestRecord, Snapshot,
};
use parking_lot::Mutex;
use std::sync::Arc;

/// The request dashboard engine
///
/// Cheap to share behind an [`Arc`]; every operation takes `&self`.
pub struct Dashboard {
    config: SyncConfig,
    store: RequestStore,
    service: Arc<dyn RecordsService>,
    profile_source: Arc<dyn ProfileSource>,
    alerts: Arc<dyn AlertSink>,
    notifications: Mutex<NotificationLog>,
    deletion: Mutex<DeletionWorkflow>,
    active_bucket: Mutex<Bucket>,
    profile: Mutex<ProfileState>,
    /// Serializes refresh cycles: one cycle's ingestion always completes
    /// before the next cycle's detection starts.
    refresh_gate: tokio::sync::Mutex<()>,
}

impl Dashboard {
    /// Wire up a dashboard from its collaborators
    #[must_use]
    pub fn new(
        config: SyncConfig,
        service: Arc<dyn RecordsService>,
        profile_source: Arc<dyn ProfileSource>,
        alerts: Arc<dyn AlertSink>,
    ) -> Self {
        let notifications = match config.max_notifications {
            Some(cap) => NotificationLog::bounded(cap),
            None => NotificationLog::new(),
        };
        Self {
            store: RequestStore::new(Arc::clone(&service)),
            service,
            profile_source,
            alerts,
            notifications: Mutex::new(notifications),
            deletion: Mutex::new(DeletionWorkflow::new()),
            active_bucket: Mutex::new(Bucket::Pending),
            profile: Mutex::new(ProfileState::placeholder()),
            refresh_gate: tokio::sync::Mutex::new(()),
            config,
        }
    }

    /// Engine configuration
    #[inline]
    #[must_use]
    pub fn config(&self) -> &SyncConfig {
        &self.config
    }

    /// Run one full refresh cycle
    ///
    /// Fetches a snapshot, installs it, ingests detected transitions into
    /// the notification log and surfaces one alert per transition. Usable by
    /// the polling loop and directly after external mutations (request
    /// created, payment uploaded).
    ///
    /// # Errors
    /// `SyncError::FetchFailed` when the fetch fails; the snapshot pair and
    /// the notification log are left untouched.
    pub async fn refresh(&self) -> Result<(), SyncError> {
        let _cycle = self.refresh_gate.lock().await;

        let events = self.store.refresh().await?;
        if events.is_empty() {
            return Ok(());
        }

        self.notifications.lock().ingest(&events);
        for event in &events {
            self.alerts
                .notify(Alert::success(format!("Request updated: {}", event.to_status)));
        }
        tracing::info!(transitions = events.len(), "ingested status-change notifications");
        Ok(())
    }

    // --- snapshot & projection ---

    /// Latest snapshot
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        self.store.current()
    }

    /// Per-bucket counts over the latest snapshot
    #[must_use]
    pub fn counts(&self) -> BucketCounts {
        counts_by_bucket(&self.store.current())
    }

    /// Currently selected bucket
    #[inline]
    #[must_use]
    pub fn active_bucket(&self) -> Bucket {
        *self.active_bucket.lock()
    }

    /// Select the bucket the view shows
    pub fn set_active_bucket(&self, bucket: Bucket) {
        *self.active_bucket.lock() = bucket;
    }

    /// Records of the active bucket, in snapshot order
    #[must_use]
    pub fn visible_records(&self) -> Vec<RequestRecord> {
        filter_by_bucket(&self.store.current(), self.active_bucket())
    }

    // --- notifications ---

    /// Notification entries, newest first
    #[must_use]
    pub fn notifications(&self) -> Vec<Notification> {
        self.notifications.lock().entries().to_vec()
    }

    /// Unread notification count
    #[must_use]
    pub fn unread_count(&self) -> usize {
        self.notifications.lock().unread_count()
    }

    /// Mark every notification read
    pub fn mark_all_read(&self) {
        self.notifications.lock().mark_all_read();
    }

    /// Drop every notification
    pub fn clear_notifications(&self) {
        self.notifications.lock().clear_all();
    }

    // --- deletion workflow ---

    /// Ask for confirmation to delete one record
    pub fn request_delete(&self, record: RequestRecord) {
        self.deletion.lock().request_single(record);
    }

    /// Ask for confirmation to clear the entire history bucket
    pub fn request_delete_all(&self) {
        self.deletion.lock().request_all();
    }

    /// Abandon the pending deletion without side effects
    pub fn cancel_delete(&self) {
        self.deletion.lock().cancel();
    }

    /// Current deletion-workflow state
    #[must_use]
    pub fn deletion_state(&self) -> DeletionState {
        self.deletion.lock().state().clone()
    }

    /// Execute the pending deletion
    ///
    /// The intent is taken first, so the workflow is back at `Idle` whatever
    /// happens. On success a notice is surfaced and an immediate refresh is
    /// requested; on failure only the failure notice is surfaced and the
    /// snapshot stays as it was. A call with nothing pending is a no-op.
    ///
    /// # Errors
    /// `SyncError::DeleteFailed` when the delete call fails.
    pub async fn confirm_delete(&self) -> Result<(), SyncError> {
        let Some(intent) = self.deletion.lock().take_pending() else {
            return Ok(());
        };

        let result = match intent.mode {
            DeleteMode::Single => match intent.target_id() {
                Some(id) => self.service.delete_record(id).await,
                None => {
                    debug_assert!(false, "single deletion intent without target");
                    return Ok(());
                }
            },
            DeleteMode::All => self.service.delete_history().await,
        };

        match result {
            Ok(()) => {
                self.alerts.notify(Alert::success(success_text(&intent)));
                if let Err(error) = self.refresh().await {
                    tracing::warn!(%error, "refresh after delete failed");
                }
                Ok(())
            }
            Err(error) => {
                tracing::warn!(%error, mode = ?intent.mode, "delete failed");
                self.alerts
                    .notify(Alert::failure("Failed to delete. Please try again."));
                Err(SyncError::DeleteFailed(error))
            }
        }
    }

    // --- profile ---

    /// Load the user profile, falling back to local token claims
    ///
    /// On fetch failure the name fields are recovered from the auth token's
    /// claims when possible; `program` keeps its last-known value. The
    /// `loading` flag clears whatever the outcome.
    ///
    /// # Errors
    /// `SyncError::DecodeFailed` when both the fetch and the token fallback
    /// fail; the placeholder state is retained.
    pub async fn load_profile(&self) -> Result<(), SyncError> {
        match self.profile_source.fetch_profile().await {
            Ok(profile) => {
                let mut state = self.profile.lock();
                state.profile = profile;
                state.loading = false;
                Ok(())
            }
            Err(error) => {
                tracing::warn!(%error, "profile fetch failed, trying token fallback");
                let fallback = self
                    .profile_source
                    .access_token()
                    .ok_or_else(|| {
                        SyncError::DecodeFailed("no access token available".to_owned())
                    })
                    .and_then(|token| decode_token_claims(&token));

                let mut state = self.profile.lock();
                state.loading = false;
                match fallback {
                    Ok(claims) => {
                        state.profile.full_name = claims.username.clone();
                        state.profile.student_id = claims.username;
                        Ok(())
                    }
                    Err(decode_error) => {
                        tracing::warn!(error = %decode_error, "token fallback failed");
                        Err(decode_error)
                    }
                }
            }
        }
    }

    /// Current profile state
    #[must_use]
    pub fn profile(&self) -> ProfileState {
        self.profile.lock().clone()
    }
}

fn success_text(intent: &DeletionIntent) -> &'static str {
    match intent.mode {
        DeleteMode::Single => "Record deleted successfully",
        DeleteMode::All => "History cleared successfully",
    }
}
