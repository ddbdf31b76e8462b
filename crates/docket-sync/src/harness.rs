//! Scripted end-to-end harness
//!
//! Drives a full dashboard session against an in-memory records service:
//! scripted snapshot frames, notification lifecycle, bulk deletion, and a
//! short live-polling phase. Used by the `docket-sync simulate` binary and
//! handy for eyeballing the engine under `RUST_LOG=debug`.

use crate::config::SyncConfig;
use crate::dashboard::Dashboard;
use crate::service::{Alert, AlertKind, AlertSink, ProfileSource, RecordsService, ServiceError};
use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use docket_record::{Bucket, RecordId, RequestRecord, RequestStatus, UserProfile};
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Duration;

/// Harness configuration
#[derive(Debug, Clone)]
pub struct SimulatorConfig {
    /// Poll period for the live-polling phase, in milliseconds
    pub poll_interval_ms: u64,
    /// Whether to run the live-polling phase at all
    pub live_polling: bool,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: 200,
            live_polling: true,
        }
    }
}

/// Counters collected over one simulated session
#[derive(Debug, Clone, Default)]
pub struct SimulatorStats {
    /// Fetches the in-memory service answered (scripted + live)
    pub polls: usize,
    /// Notifications logged across the session
    pub notifications_logged: usize,
    /// Alerts posted on the transient surface
    pub alerts_posted: usize,
    /// History records removed by the bulk delete
    pub history_deleted: usize,
}

/// Final report from one simulated session
#[derive(Debug, Clone)]
pub struct SimulatorReport {
    /// Configuration the session ran with
    pub config: SimulatorConfig,
    /// Collected counters
    pub stats: SimulatorStats,
    /// Expectation failures, empty when the session behaved
    pub failures: Vec<String>,
}

impl SimulatorReport {
    /// Whether the session met every expectation
    #[must_use]
    pub fn passed(&self) -> bool {
        self.failures.is_empty()
    }

    /// Human-readable report text
    #[must_use]
    pub fn generate_text(&self) -> String {
        let mut report = String::new();
        report.push_str("=== Docket Simulator Report ===\n\n");
        report.push_str(&format!("Polls: {}\n", self.stats.polls));
        report.push_str(&format!(
            "Notifications Logged: {}\n",
            self.stats.notifications_logged
        ));
        report.push_str(&format!("Alerts Posted: {}\n", self.stats.alerts_posted));
        report.push_str(&format!(
            "History Records Deleted: {}\n",
            self.stats.history_deleted
        ));
        report.push_str(&format!("Failures: {}\n", self.failures.len()));

        if !self.failures.is_empty() {
            report.push_str("\n=== Failures ===\n");
            for (i, failure) in self.failures.iter().enumerate() {
                report.push_str(&format!("{}. {failure}\n", i + 1));
            }
        }
        report
    }
}

struct ScriptedRecords {
    frames: Mutex<VecDeque<Vec<RequestRecord>>>,
    live: Mutex<Vec<RequestRecord>>,
    fetches: Mutex<usize>,
}

impl ScriptedRecords {
    fn new(frames: Vec<Vec<RequestRecord>>) -> Arc<Self> {
        Arc::new(Self {
            frames: Mutex::new(frames.into()),
            live: Mutex::new(Vec::new()),
            fetches: Mutex::new(0),
        })
    }

    fn push_frame(&self, frame: Vec<RequestRecord>) {
        self.frames.lock().push_back(frame);
    }

    fn fetch_count(&self) -> usize {
        *self.fetches.lock()
    }
}

#[async_trait]
impl RecordsService for ScriptedRecords {
    async fn fetch_records(&self) -> Result<Vec<RequestRecord>, ServiceError> {
        *self.fetches.lock() += 1;
        if let Some(frame) = self.frames.lock().pop_front() {
            *self.live.lock() = frame;
        }
        Ok(self.live.lock().clone())
    }

    async fn delete_record(&self, id: RecordId) -> Result<(), ServiceError> {
        self.live.lock().retain(|r| r.id != id);
        Ok(())
    }

    async fn delete_history(&self) -> Result<(), ServiceError> {
        self.live.lock().retain(|r| !r.status.is_history());
        Ok(())
    }
}

struct ScriptedProfile;

#[async_trait]
impl ProfileSource for ScriptedProfile {
    async fn fetch_profile(&self) -> Result<UserProfile, ServiceError> {
        Ok(UserProfile {
            full_name: "Juana Dela Cruz".to_owned(),
            program: "BS Computer Science".to_owned(),
            student_id: "2021-00123".to_owned(),
        })
    }

    fn access_token(&self) -> Option<String> {
        None
    }
}

#[derive(Default)]
struct CountingAlerts {
    posted: Mutex<Vec<Alert>>,
}

impl AlertSink for CountingAlerts {
    fn notify(&self, alert: Alert) {
        tracing::info!(kind = ?alert.kind, text = %alert.text, "alert");
        self.posted.lock().push(alert);
    }
}

fn scripted_frames() -> Vec<Vec<RequestRecord>> {
    let created_at = Utc.with_ymd_and_hms(2025, 11, 3, 8, 30, 0).unwrap();
    let transcript =
        |status| RequestRecord::new(RecordId(1), "Transcript of Records", status, created_at);
    let diploma = |status| RequestRecord::new(RecordId(2), "Diploma", status, created_at);

    vec![
        vec![
            transcript(RequestStatus::Pending),
            diploma(RequestStatus::Pending),
        ],
        // Staff assess both: one fee, one straight to confirmation.
        vec![
            transcript(RequestStatus::ToPay).with_cost(120.0),
            diploma(RequestStatus::Confirmed),
        ],
        vec![
            transcript(RequestStatus::ToPay)
                .with_cost(120.0)
                .with_payment_proof("uploads/proof-1.png"),
            diploma(RequestStatus::Released),
        ],
    ]
}

/// Run one scripted dashboard session
pub async fn run_simulator(config: SimulatorConfig) -> SimulatorReport {
    let records = ScriptedRecords::new(scripted_frames());
    let alerts = Arc::new(CountingAlerts::default());
    let dashboard = Arc::new(Dashboard::new(
        SyncConfig::new().with_poll_interval(Duration::from_millis(config.poll_interval_ms)),
        Arc::clone(&records) as Arc<dyn RecordsService>,
        Arc::new(ScriptedProfile),
        Arc::clone(&alerts) as Arc<dyn AlertSink>,
    ));

    let mut stats = SimulatorStats::default();
    let mut failures = Vec::new();

    if dashboard.load_profile().await.is_err() {
        failures.push("profile load failed".to_owned());
    }

    // Scripted phase: one refresh per frame. Frame 0 is the baseline; the
    // two later frames carry three status changes between them.
    for _ in 0..3 {
        if let Err(error) = dashboard.refresh().await {
            failures.push(format!("scripted refresh failed: {error}"));
        }
    }

    let expected_transitions = 3;
    if dashboard.unread_count() != expected_transitions {
        failures.push(format!(
            "expected {expected_transitions} unread notifications, found {}",
            dashboard.unread_count()
        ));
    }

    dashboard.mark_all_read();
    if dashboard.unread_count() != 0 {
        failures.push("mark_all_read left unread notifications".to_owned());
    }

    // Deletion phase: clear the history bucket (the released diploma).
    dashboard.set_active_bucket(Bucket::Rejected);
    let history_before = dashboard.visible_records().len();
    dashboard.request_delete_all();
    if dashboard.confirm_delete().await.is_err() {
        failures.push("bulk delete failed".to_owned());
    }
    let history_after = dashboard.visible_records().len();
    stats.history_deleted = history_before.saturating_sub(history_after);
    if history_after != 0 {
        failures.push(format!("history not cleared: {history_after} records left"));
    }

    // Live phase: a late status change picked up by the background loop.
    if config.live_polling {
        let created_at = Utc.with_ymd_and_hms(2025, 11, 3, 8, 30, 0).unwrap();
        records.push_frame(vec![RequestRecord::new(
            RecordId(1),
            "Transcript of Records",
            RequestStatus::Confirmed,
            created_at,
        )]);

        let unread_before = dashboard.unread_count();
        let poller = Arc::clone(&dashboard).start_polling();
        tokio::time::sleep(Duration::from_millis(config.poll_interval_ms * 3)).await;
        poller.stop().await;

        if dashboard.unread_count() <= unread_before {
            failures.push("live polling detected no transition".to_owned());
        }
    }

    stats.polls = records.fetch_count();
    stats.notifications_logged = dashboard.notifications().len();
    stats.alerts_posted = alerts.posted.lock().len();
    let failure_alerts = alerts
        .posted
        .lock()
        .iter()
        .filter(|a| a.kind == AlertKind::Failure)
        .count();
    if failure_alerts != 0 {
        failures.push(format!("{failure_alerts} failure alerts posted"));
    }

    SimulatorReport {
        config,
        stats,
        failures,
    }
}
