//! Request lifecycle statuses
//!
//! The status vocabulary is closed on the server side; anything the service
//! sends outside of it deserializes to [`RequestStatus::Unknown`] so a newer
//! server cannot crash an older client.

use crate::bucket::Bucket;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

/// Lifecycle status of a document request
///
/// Wire names match the records service payload (`request_status` field);
/// note the space in `"To Pay"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RequestStatus {
    /// Awaiting staff review
    Pending,
    /// Approved, awaiting payment
    #[serde(rename = "To Pay")]
    ToPay,
    /// Payment confirmed, document ready to claim
    Confirmed,
    /// Request rejected
    Rejected,
    /// Document released to the requester
    Released,
    /// Any wire value outside the closed vocabulary
    #[serde(other)]
    Unknown,
}

impl RequestStatus {
    /// Wire name of this status
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestStatus::Pending => "Pending",
            RequestStatus::ToPay => "To Pay",
            RequestStatus::Confirmed => "Confirmed",
            RequestStatus::Rejected => "Rejected",
            RequestStatus::Released => "Released",
            RequestStatus::Unknown => "Unknown",
        }
    }

    /// Display bucket this status maps to
    ///
    /// `Rejected` and `Released` share the history bucket. [`RequestStatus::Unknown`]
    /// maps to no bucket and is excluded from every view.
    #[inline]
    #[must_use]
    pub fn bucket(&self) -> Option<Bucket> {
        match self {
            RequestStatus::Pending => Some(Bucket::Pending),
            RequestStatus::ToPay => Some(Bucket::ToPay),
            RequestStatus::Confirmed => Some(Bucket::Completed),
            RequestStatus::Rejected | RequestStatus::Released => Some(Bucket::Rejected),
            RequestStatus::Unknown => None,
        }
    }

    /// Check if this status counts as deletable history
    #[inline]
    #[must_use]
    pub fn is_history(&self) -> bool {
        matches!(self, RequestStatus::Rejected | RequestStatus::Released)
    }
}

impl Display for RequestStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
