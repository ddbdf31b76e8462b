//! Snapshots: the full record set as of one poll

use crate::record::{RecordId, RequestRecord};
use serde::{Deserialize, Serialize};

/// Ordered set of request records at one poll instant
///
/// Record ids are unique within a snapshot. Duplicates are a service defect:
/// debug builds assert, release builds keep the records and id lookups return
/// the first match.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    records: Vec<RequestRecord>,
}

impl Snapshot {
    /// Create a snapshot from fetched records, preserving service order
    #[must_use]
    pub fn new(records: Vec<RequestRecord>) -> Self {
        debug_assert!(
            {
                let mut ids: Vec<RecordId> = records.iter().map(|r| r.id).collect();
                ids.sort_unstable();
                ids.windows(2).all(|w| w[0] != w[1])
            },
            "duplicate record ids in snapshot"
        );
        Self { records }
    }

    /// Empty snapshot (state before the first poll)
    #[inline]
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Number of records
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the snapshot holds no records
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Look up a record by id (first match)
    #[inline]
    #[must_use]
    pub fn get(&self, id: RecordId) -> Option<&RequestRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Records in service order
    #[inline]
    #[must_use]
    pub fn records(&self) -> &[RequestRecord] {
        &self.records
    }

    /// Iterate records in service order
    pub fn iter(&self) -> impl Iterator<Item = &RequestRecord> {
        self.records.iter()
    }
}

impl From<Vec<RequestRecord>> for Snapshot {
    fn from(records: Vec<RequestRecord>) -> Self {
        Self::new(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::status::RequestStatus;
    use chrono::Utc;

    fn record(id: u64, status: RequestStatus) -> RequestRecord {
        RequestRecord::new(RecordId(id), format!("request {id}"), status, Utc::now())
    }

    #[test]
    fn snapshot_lookup_by_id() {
        let snapshot = Snapshot::new(vec![
            record(1, RequestStatus::Pending),
            record(2, RequestStatus::ToPay),
        ]);

        assert_eq!(snapshot.len(), 2);
        assert_eq!(
            snapshot.get(RecordId(2)).map(|r| r.status),
            Some(RequestStatus::ToPay)
        );
        assert!(snapshot.get(RecordId(9)).is_none());
    }

    #[test]
    fn snapshot_preserves_service_order() {
        let snapshot = Snapshot::new(vec![
            record(3, RequestStatus::Pending),
            record(1, RequestStatus::Pending),
            record(2, RequestStatus::Pending),
        ]);

        let ids: Vec<u64> = snapshot.iter().map(|r| r.id.0).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn snapshot_empty() {
        let snapshot = Snapshot::empty();
        assert!(snapshot.is_empty());
        assert_eq!(snapshot.len(), 0);
    }
}
