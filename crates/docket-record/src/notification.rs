//! In-session notifications derived from transition events

use crate::event::TransitionEvent;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use ulid::Ulid;

/// Title used for every status-change notification
pub const STATUS_UPDATED_TITLE: &str = "Status Updated";

/// Unique notification identifier
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct NotificationId(pub Ulid);

impl NotificationId {
    /// Generate a new notification ID
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self(Ulid::new())
    }
}

impl Default for NotificationId {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for NotificationId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One entry in the notification log
///
/// Created one-to-one from a transition event. Only the `read` flag is ever
/// mutated, and only by bulk mark-read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    /// Unique notification id
    pub id: NotificationId,
    /// Short heading
    pub title: String,
    /// Event summary
    pub message: String,
    /// When the underlying transition was detected
    pub occurred_at: DateTime<Utc>,
    /// Whether the user has seen this entry
    pub read: bool,
}

impl Notification {
    /// Build the unread notification for a transition event
    #[must_use]
    pub fn from_event(event: &TransitionEvent) -> Self {
        Self {
            id: NotificationId::new(),
            title: STATUS_UPDATED_TITLE.to_owned(),
            message: event.message.clone(),
            occurred_at: event.occurred_at,
            read: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{RecordId, RequestRecord};
    use crate::status::RequestStatus;

    #[test]
    fn notification_from_event_starts_unread() {
        let record = RequestRecord::new(
            RecordId(1),
            "Diploma",
            RequestStatus::Rejected,
            Utc::now(),
        );
        let event = TransitionEvent::new(&record, RequestStatus::Pending);
        let notification = Notification::from_event(&event);

        assert!(!notification.read);
        assert_eq!(notification.title, STATUS_UPDATED_TITLE);
        assert_eq!(notification.message, "Diploma is now Rejected");
        assert_eq!(notification.occurred_at, event.occurred_at);
    }
}
