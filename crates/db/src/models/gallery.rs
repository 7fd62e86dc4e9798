//! Photo gallery model and DTOs.

use serde::{Deserialize, Serialize};
use sprout_core::access::Owned;
use sprout_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A row from the `galleries` table.
///
/// `image_paths` holds storage keys produced by
/// `sprout_core::uploads::gallery_image_key`, never client file names.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Gallery {
    pub id: DbId,
    pub owner_id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub image_paths: Vec<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Owned for Gallery {
    fn owner_id(&self) -> Option<DbId> {
        Some(self.owner_id)
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateGallery {
    pub title: String,
    pub description: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateGallery {
    pub title: Option<String>,
    pub description: Option<String>,
}

/// Request body for attaching an uploaded image to a gallery.
#[derive(Debug, Deserialize)]
pub struct AddGalleryImage {
    pub file_name: String,
}
