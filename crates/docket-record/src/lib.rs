//! Docket Record Model
//!
//! Leaf data-model crate for the document-request dashboard engine:
//!
//! - [`RequestRecord`]: one document request as served by the records service
//! - [`RequestStatus`]: closed status vocabulary with an `Unknown` catch-all
//! - [`Snapshot`]: the full record set as of one poll
//! - [`Bucket`]: display groupings derived from status, with the
//!   label-inversion lookup
//! - [`TransitionEvent`] / [`Notification`]: the detection and notification
//!   types
//! - [`UserProfile`] / [`TokenClaims`]: profile data and its token fallback
//! - [`DeletionIntent`]: transient delete-confirmation state

#![warn(unreachable_pub)]

// Core modules
mod bucket;
mod event;
mod intent;
mod notification;
mod profile;
mod record;
mod snapshot;
mod status;

// Re-exports
pub use bucket::Bucket;
pub use event::{EventId, TransitionEvent};
pub use intent::{DeleteMode, DeletionIntent};
pub use notification::{Notification, NotificationId, STATUS_UPDATED_TITLE};
pub use profile::{TokenClaims, UserProfile};
pub use record::{RecordId, RequestRecord};
pub use snapshot::Snapshot;
pub use status::RequestStatus;
