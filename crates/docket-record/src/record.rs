//! Request records as delivered by the records service

use crate::status::RequestStatus;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

/// Server-assigned record identifier, unique and stable across polls
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct RecordId(pub u64);

impl Display for RecordId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for RecordId {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

/// One document request, immutable within a snapshot
///
/// Field renames follow the records service payload. `id` is required; a
/// payload without it fails deserialization and the whole poll is treated as
/// a fetch failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestRecord {
    /// Unique, stable identifier
    pub id: RecordId,
    /// Request description
    #[serde(rename = "request")]
    pub label: String,
    /// Current lifecycle status
    #[serde(rename = "request_status")]
    pub status: RequestStatus,
    /// When the request was created
    pub created_at: DateTime<Utc>,
    /// Scheduled claim date, once assigned
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub claim_date: Option<NaiveDate>,
    /// Processing fee, once assessed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost: Option<f64>,
    /// Reference to an uploaded payment proof
    #[serde(default, rename = "payment_proof_url", skip_serializing_if = "Option::is_none")]
    pub payment_proof: Option<String>,
}

impl RequestRecord {
    /// Create a record with the required fields
    #[inline]
    #[must_use]
    pub fn new(
        id: RecordId,
        label: impl Into<String>,
        status: RequestStatus,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            label: label.into(),
            status,
            created_at,
            claim_date: None,
            cost: None,
            payment_proof: None,
        }
    }

    /// With a claim date
    #[inline]
    #[must_use]
    pub fn with_claim_date(mut self, date: NaiveDate) -> Self {
        self.claim_date = Some(date);
        self
    }

    /// With an assessed cost
    #[inline]
    #[must_use]
    pub fn with_cost(mut self, cost: f64) -> Self {
        self.cost = Some(cost);
        self
    }

    /// With an uploaded payment proof reference
    #[inline]
    #[must_use]
    pub fn with_payment_proof(mut self, proof: impl Into<String>) -> Self {
        self.payment_proof = Some(proof.into());
        self
    }

    /// Whether a payment proof has been uploaded
    ///
    /// Drives the "Verifying Payment" indicator on `ToPay` records.
    #[inline]
    #[must_use]
    pub fn has_payment_proof(&self) -> bool {
        self.payment_proof.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_deserializes_service_payload() {
        let json = r#"{
            "id": 42,
            "request": "Transcript of Records",
            "request_status": "To Pay",
            "created_at": "2025-11-03T08:30:00Z",
            "cost": 150.0,
            "payment_proof_url": "uploads/proof-42.png"
        }"#;

        let record: RequestRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.id, RecordId(42));
        assert_eq!(record.label, "Transcript of Records");
        assert_eq!(record.status, RequestStatus::ToPay);
        assert_eq!(record.cost, Some(150.0));
        assert!(record.has_payment_proof());
        assert_eq!(record.claim_date, None);
    }

    #[test]
    fn record_optional_fields_default() {
        let json = r#"{
            "id": 7,
            "request": "Good Moral Certificate",
            "request_status": "Pending",
            "created_at": "2025-11-03T08:30:00Z"
        }"#;

        let record: RequestRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.cost, None);
        assert!(!record.has_payment_proof());
    }

    #[test]
    fn record_missing_id_is_rejected() {
        let json = r#"{
            "request": "Diploma",
            "request_status": "Pending",
            "created_at": "2025-11-03T08:30:00Z"
        }"#;

        assert!(serde_json::from_str::<RequestRecord>(json).is_err());
    }
}
