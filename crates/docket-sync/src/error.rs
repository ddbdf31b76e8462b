//! Error types for the sync engine
//!
//! Service failures are never fatal here: a fetch failure keeps the previous
//! snapshot pair, a delete failure clears the pending intent and alerts the
//! user, a token-decode failure leaves the profile placeholder in place.

use crate::service::ServiceError;

/// Engine error taxonomy
#[derive(Debug, thiserror::Error)]
pub enum SyncError {
    /// Records or profile poll failed; previous state is retained and the
    /// next poll tick retries automatically
    #[error("records fetch failed: {0}")]
    FetchFailed(#[source] ServiceError),

    /// Delete execution failed; surfaced via the alert sink
    #[error("delete failed: {0}")]
    DeleteFailed(#[source] ServiceError),

    /// The fallback auth token could not be parsed
    #[error("auth token decode failed: {0}")]
    DecodeFailed(String),
}

impl SyncError {
    /// Whether the regular poll cadence retries this failure on its own
    #[inline]
    #[must_use]
    pub fn is_retried_by_polling(&self) -> bool {
        matches!(self, Self::FetchFailed(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = SyncError::FetchFailed(ServiceError::new("timeout"));
        assert_eq!(err.to_string(), "records fetch failed: timeout");
    }

    #[test]
    fn error_retry_classification() {
        assert!(SyncError::FetchFailed(ServiceError::new("x")).is_retried_by_polling());
        assert!(!SyncError::DeleteFailed(ServiceError::new("x")).is_retried_by_polling());
        assert!(!SyncError::DecodeFailed("bad".to_owned()).is_retried_by_polling());
    }
}
