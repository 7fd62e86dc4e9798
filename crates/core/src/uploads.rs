//! Storage keys for uploaded gallery images.
//!
//! The API never stores client-supplied file names. It keeps only the
//! lowercased extension and generates a key of the form
//! `galleries/{owner_id}/{uuid}.{ext}`.

use uuid::Uuid;

use crate::error::CoreError;
use crate::types::DbId;

/// Image extensions accepted for gallery uploads.
pub const ALLOWED_IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "webp", "gif"];

/// Top-level prefix for gallery image keys.
pub const GALLERY_PREFIX: &str = "galleries";

/// Extract and validate the image extension of `file_name`, lowercased.
pub fn image_extension(file_name: &str) -> Result<String, CoreError> {
    let ext = file_name
        .rsplit_once('.')
        .map(|(stem, ext)| (stem.trim(), ext.to_ascii_lowercase()))
        .filter(|(stem, _)| !stem.is_empty())
        .map(|(_, ext)| ext)
        .ok_or_else(|| {
            CoreError::Validation(format!("File name '{file_name}' has no extension"))
        })?;

    if ALLOWED_IMAGE_EXTENSIONS.contains(&ext.as_str()) {
        Ok(ext)
    } else {
        Err(CoreError::Validation(format!(
            "Unsupported image type '.{ext}'. Must be one of: {}",
            ALLOWED_IMAGE_EXTENSIONS.join(", ")
        )))
    }
}

/// Build a fresh storage key for an image uploaded by `owner_id`.
pub fn gallery_image_key(owner_id: DbId, file_name: &str) -> Result<String, CoreError> {
    let ext = image_extension(file_name)?;
    Ok(format!("{GALLERY_PREFIX}/{owner_id}/{}.{ext}", Uuid::new_v4()))
}
