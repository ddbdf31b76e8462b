//! Testing utilities for the Docket workspace
//!
//! Shared fixtures: an in-memory records service with failure injection, a
//! recording alert sink, and a static profile source.

#![allow(missing_docs)]

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use docket_record::{RecordId, RequestRecord, RequestStatus, UserProfile};
use docket_sync::{Alert, AlertSink, ProfileSource, RecordsService, ServiceError};
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::sync::Arc;

/// Build a record with a fixed creation time, so snapshots compare cleanly.
pub fn record(id: u64, label: &str, status: RequestStatus) -> RequestRecord {
    let created_at = Utc.with_ymd_and_hms(2025, 11, 3, 8, 30, 0).unwrap();
    RequestRecord::new(RecordId(id), label, status, created_at)
}

/// In-memory records service.
///
/// Fetches walk through queued frames, then serve the live record set; the
/// delete operations mutate the live set the way the real service would.
/// `fail_next_fetch` / `fail_next_delete` inject one-shot failures.
#[derive(Default)]
pub struct FakeRecordsService {
    frames: Mutex<VecDeque<Vec<RequestRecord>>>,
    live: Mutex<Vec<RequestRecord>>,
    fail_next_fetch: Mutex<Option<ServiceError>>,
    fail_next_delete: Mutex<Option<ServiceError>>,
    fetch_count: Mutex<usize>,
    deleted: Mutex<Vec<RecordId>>,
    history_cleared: Mutex<usize>,
}

impl FakeRecordsService {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Start with one live record set and no queued frames.
    pub fn with_records(records: Vec<RequestRecord>) -> Arc<Self> {
        let service = Self::default();
        *service.live.lock() = records;
        Arc::new(service)
    }

    /// Queue a frame; each fetch consumes one before falling back to the
    /// live set.
    pub fn push_frame(&self, records: Vec<RequestRecord>) {
        self.frames.lock().push_back(records);
    }

    pub fn fail_next_fetch(&self, message: &str) {
        *self.fail_next_fetch.lock() = Some(ServiceError::new(message));
    }

    pub fn fail_next_delete(&self, message: &str) {
        *self.fail_next_delete.lock() = Some(ServiceError::new(message));
    }

    pub fn fetch_count(&self) -> usize {
        *self.fetch_count.lock()
    }

    /// Ids passed to `delete_record`, in call order.
    pub fn deleted_ids(&self) -> Vec<RecordId> {
        self.deleted.lock().clone()
    }

    /// Number of `delete_history` calls that went through.
    pub fn history_cleared_count(&self) -> usize {
        *self.history_cleared.lock()
    }
}

#[async_trait]
impl RecordsService for FakeRecordsService {
    async fn fetch_records(&self) -> Result<Vec<RequestRecord>, ServiceError> {
        if let Some(error) = self.fail_next_fetch.lock().take() {
            return Err(error);
        }
        *self.fetch_count.lock() += 1;
        if let Some(frame) = self.frames.lock().pop_front() {
            *self.live.lock() = frame;
        }
        Ok(self.live.lock().clone())
    }

    async fn delete_record(&self, id: RecordId) -> Result<(), ServiceError> {
        if let Some(error) = self.fail_next_delete.lock().take() {
            return Err(error);
        }
        self.live.lock().retain(|r| r.id != id);
        self.deleted.lock().push(id);
        Ok(())
    }

    async fn delete_history(&self) -> Result<(), ServiceError> {
        if let Some(error) = self.fail_next_delete.lock().take() {
            return Err(error);
        }
        self.live.lock().retain(|r| !r.status.is_history());
        *self.history_cleared.lock() += 1;
        Ok(())
    }
}

/// Alert sink that records every notice for assertions.
#[derive(Default)]
pub struct RecordingAlertSink {
    alerts: Mutex<Vec<Alert>>,
}

impl RecordingAlertSink {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn alerts(&self) -> Vec<Alert> {
        self.alerts.lock().clone()
    }

    pub fn is_empty(&self) -> bool {
        self.alerts.lock().is_empty()
    }
}

impl AlertSink for RecordingAlertSink {
    fn notify(&self, alert: Alert) {
        self.alerts.lock().push(alert);
    }
}

/// Profile source with a fixed outcome and an optional stored token.
pub struct StaticProfileSource {
    profile: Option<UserProfile>,
    token: Option<String>,
}

impl StaticProfileSource {
    /// Always serves `profile`.
    pub fn serving(profile: UserProfile) -> Arc<Self> {
        Arc::new(Self {
            profile: Some(profile),
            token: None,
        })
    }

    /// Fetch always fails; `token` is what the fallback finds locally.
    pub fn failing(token: Option<&str>) -> Arc<Self> {
        Arc::new(Self {
            profile: None,
            token: token.map(str::to_owned),
        })
    }
}

#[async_trait]
impl ProfileSource for StaticProfileSource {
    async fn fetch_profile(&self) -> Result<UserProfile, ServiceError> {
        self.profile
            .clone()
            .ok_or_else(|| ServiceError::new("profile endpoint unavailable"))
    }

    fn access_token(&self) -> Option<String> {
        self.token.clone()
    }
}

/// A profile used across tests.
pub fn sample_profile() -> UserProfile {
    UserProfile {
        full_name: "Juana Dela Cruz".to_owned(),
        program: "BS Computer Science".to_owned(),
        student_id: "2021-00123".to_owned(),
    }
}
