//! Display buckets derived from request status
//!
//! Buckets are a projection, never stored. The heading shown for a bucket is
//! a pure lookup so the label inversion (see [`Bucket::display_label`]) stays
//! in exactly one place.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

/// One of the four display groupings for request records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Bucket {
    /// Requests awaiting review
    Pending,
    /// Requests awaiting payment
    ToPay,
    /// Confirmed requests ready to claim
    Completed,
    /// History: rejected and released requests
    Rejected,
}

impl Bucket {
    /// All buckets, in sidebar order
    pub const ALL: [Bucket; 4] = [
        Bucket::Pending,
        Bucket::ToPay,
        Bucket::Completed,
        Bucket::Rejected,
    ];

    /// Bucket key name
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Bucket::Pending => "Pending",
            Bucket::ToPay => "ToPay",
            Bucket::Completed => "Completed",
            Bucket::Rejected => "Rejected",
        }
    }

    /// Heading shown to the user for this bucket
    ///
    /// The `Completed` bucket is shown as "To Claim" and the `Rejected`
    /// bucket as "Completed Tasks". This inversion is an intentional product
    /// decision carried over from the shipped dashboard, not a naming bug.
    #[inline]
    #[must_use]
    pub fn display_label(&self) -> &'static str {
        match self {
            Bucket::Pending => "Pending",
            Bucket::ToPay => "To Pay",
            Bucket::Completed => "To Claim",
            Bucket::Rejected => "Completed Tasks",
        }
    }
}

impl Display for Bucket {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bucket_label_inversion() {
        assert_eq!(Bucket::Pending.display_label(), "Pending");
        assert_eq!(Bucket::ToPay.display_label(), "To Pay");
        assert_eq!(Bucket::Completed.display_label(), "To Claim");
        assert_eq!(Bucket::Rejected.display_label(), "Completed Tasks");
    }

    #[test]
    fn bucket_all_is_exhaustive() {
        assert_eq!(Bucket::ALL.len(), 4);
        for bucket in Bucket::ALL {
            assert!(!bucket.as_str().is_empty());
        }
    }
}
