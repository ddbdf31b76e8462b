//! Status projection
//!
//! Pure functions over the current snapshot only; the previous snapshot is
//! never consulted here. Records whose status maps to no bucket are excluded
//! from every view.

use docket_record::{Bucket, RequestRecord, Snapshot};
use serde::{Deserialize, Serialize};

/// Per-bucket record counts for the sidebar badges
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BucketCounts {
    /// Records awaiting review
    pub pending: usize,
    /// Records awaiting payment
    pub to_pay: usize,
    /// Confirmed records ready to claim
    pub completed: usize,
    /// History records (rejected and released)
    pub rejected: usize,
}

impl BucketCounts {
    /// Count for one bucket
    #[inline]
    #[must_use]
    pub fn get(&self, bucket: Bucket) -> usize {
        match bucket {
            Bucket::Pending => self.pending,
            Bucket::ToPay => self.to_pay,
            Bucket::Completed => self.completed,
            Bucket::Rejected => self.rejected,
        }
    }

    /// Sum over all four buckets
    #[inline]
    #[must_use]
    pub fn total(&self) -> usize {
        self.pending + self.to_pay + self.completed + self.rejected
    }
}

/// Partition a snapshot into per-bucket counts
#[must_use]
pub fn counts_by_bucket(snapshot: &Snapshot) -> BucketCounts {
    let mut counts = BucketCounts::default();
    for record in snapshot.iter() {
        match record.status.bucket() {
            Some(Bucket::Pending) => counts.pending += 1,
            Some(Bucket::ToPay) => counts.to_pay += 1,
            Some(Bucket::Completed) => counts.completed += 1,
            Some(Bucket::Rejected) => counts.rejected += 1,
            None => {}
        }
    }
    counts
}

/// Records belonging to one bucket, preserving snapshot order
#[must_use]
pub fn filter_by_bucket(snapshot: &Snapshot, bucket: Bucket) -> Vec<RequestRecord> {
    snapshot
        .iter()
        .filter(|record| record.status.bucket() == Some(bucket))
        .cloned()
        .collect()
}
