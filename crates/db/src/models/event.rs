//! Admin-managed community event model and DTOs.

use serde::{Deserialize, Serialize};
use sprout_core::access::Owned;
use sprout_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A row from the `events` table.
///
/// `owner_id` records the admin who created the event and is `NULL` once
/// that account is removed. Ownership grants no rights over events.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Event {
    pub id: DbId,
    pub owner_id: Option<DbId>,
    pub title: String,
    pub description: String,
    pub location: Option<String>,
    pub starts_at: Timestamp,
    pub ends_at: Option<Timestamp>,
    pub is_ended: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Owned for Event {
    fn owner_id(&self) -> Option<DbId> {
        self.owner_id
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateEvent {
    pub title: String,
    pub description: String,
    pub location: Option<String>,
    pub starts_at: Timestamp,
    pub ends_at: Option<Timestamp>,
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateEvent {
    pub title: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub starts_at: Option<Timestamp>,
    pub ends_at: Option<Timestamp>,
    pub is_ended: Option<bool>,
}
