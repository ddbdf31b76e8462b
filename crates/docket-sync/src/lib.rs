//! Docket Sync - polling-driven request synchronization engine
//!
//! The engine behind a document-request dashboard:
//! - Polls a records service on a fixed interval into a two-slot snapshot
//!   store
//! - Diffs consecutive snapshots to detect per-record status transitions
//! - Derives read/unread notifications from those transitions
//! - Projects the record set into display buckets
//! - Runs a confirm/execute deletion workflow for history records
//!
//! # Example
//!
//! ```rust,ignore
//! use docket_sync::{Dashboard, SyncConfig};
//! use std::sync::Arc;
//!
//! # async fn example(records: Arc<dyn docket_sync::RecordsService>,
//! #                  profile: Arc<dyn docket_sync::ProfileSource>,
//! #                  alerts: Arc<dyn docket_sync::AlertSink>) {
//! let dashboard = Arc::new(Dashboard::new(SyncConfig::new(), records, profile, alerts));
//! dashboard.load_profile().await.ok();
//!
//! let poller = Arc::clone(&dashboard).start_polling();
//! // ... the view reads counts, visible records and notifications ...
//! poller.stop().await;
//! # }
//! ```

#![warn(unreachable_pub)]

// Core modules
pub mod config;
pub mod dashboard;
pub mod deletion;
pub mod detect;
pub mod error;
pub mod harness;
pub mod notify;
pub mod poller;
pub mod profile;
pub mod project;
pub mod service;
pub mod store;

// Re-exports for convenience
pub use config::{SyncConfig, DEFAULT_POLL_INTERVAL_MS};
pub use dashboard::Dashboard;
pub use deletion::{DeletionState, DeletionWorkflow};
pub use detect::detect_transitions;
pub use error::SyncError;
pub use notify::NotificationLog;
pub use poller::PollerHandle;
pub use profile::{decode_token_claims, ProfileState};
pub use project::{counts_by_bucket, filter_by_bucket, BucketCounts};
pub use service::{Alert, AlertKind, AlertSink, ProfileSource, RecordsService, ServiceError};
pub use store::RequestStore;

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for working with the sync engine
    pub use crate::{
        Alert, AlertKind, AlertSink, BucketCounts, Dashboard, DeletionState, NotificationLog,
        PollerHandle, ProfileSource, ProfileState, RecordsService, ServiceError, SyncConfig,
        SyncError,
    };
    pub use docket_record::{
        Bucket, DeleteMode, DeletionIntent, Notification, RecordId, RequestRecord, RequestStatus,
        Snapshot, TransitionEvent,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
