//! Collaborator seams
//!
//! The transport, authentication storage, and toast surface live outside this
//! engine. They are consumed through the traits here:
//! - [`RecordsService`]: the records endpoint family (fetch, single delete,
//!   bulk history delete)
//! - [`ProfileSource`]: the profile endpoint plus the locally stored auth
//!   token for the fallback path
//! - [`AlertSink`]: fire-and-forget one-line notices, distinct from the
//!   persistent in-session [`NotificationLog`](crate::NotificationLog)

use async_trait::async_trait;
use docket_record::{RecordId, RequestRecord, UserProfile};
use std::fmt::{self, Display, Formatter};

/// Error returned by a collaborator at the service boundary
#[derive(Debug, Clone, thiserror::Error)]
#[error("{message}")]
pub struct ServiceError {
    message: String,
}

impl ServiceError {
    /// Create a boundary error from any displayable cause
    #[inline]
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// The records endpoint family for the authenticated user
#[async_trait]
pub trait RecordsService: Send + Sync {
    /// Fetch the current ordered list of request records
    async fn fetch_records(&self) -> Result<Vec<RequestRecord>, ServiceError>;

    /// Delete one record by id
    async fn delete_record(&self, id: RecordId) -> Result<(), ServiceError>;

    /// Delete every history record (statuses Rejected/Released)
    async fn delete_history(&self) -> Result<(), ServiceError>;
}

/// The profile endpoint and its local token fallback
#[async_trait]
pub trait ProfileSource: Send + Sync {
    /// Fetch the current user's profile
    async fn fetch_profile(&self) -> Result<UserProfile, ServiceError>;

    /// The locally stored auth token, if any
    ///
    /// Consulted only when `fetch_profile` fails, to decode display fields
    /// from the token claims.
    fn access_token(&self) -> Option<String>;
}

/// Severity of a transient notice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlertKind {
    /// Something worked
    Success,
    /// Something failed and the user should know
    Failure,
}

/// A one-line transient notice
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    /// Severity
    pub kind: AlertKind,
    /// Message text
    pub text: String,
}

impl Alert {
    /// Success notice
    #[inline]
    #[must_use]
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: AlertKind::Success,
            text: text.into(),
        }
    }

    /// Failure notice
    #[inline]
    #[must_use]
    pub fn failure(text: impl Into<String>) -> Self {
        Self {
            kind: AlertKind::Failure,
            text: text.into(),
        }
    }
}

impl Display for Alert {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Fire-and-forget notice channel
pub trait AlertSink: Send + Sync {
    /// Surface one notice; must not block
    fn notify(&self, alert: Alert);
}
