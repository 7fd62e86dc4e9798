//! Diary entry model and DTOs.

use serde::{Deserialize, Serialize};
use sprout_core::access::Owned;
use sprout_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A row from the `diaries` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Diary {
    pub id: DbId,
    pub owner_id: DbId,
    pub plant_id: Option<DbId>,
    pub title: String,
    pub content: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Owned for Diary {
    fn owner_id(&self) -> Option<DbId> {
        Some(self.owner_id)
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateDiary {
    pub plant_id: Option<DbId>,
    pub title: String,
    pub content: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateDiary {
    pub plant_id: Option<DbId>,
    pub title: Option<String>,
    pub content: Option<String>,
}
