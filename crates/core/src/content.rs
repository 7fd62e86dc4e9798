//! Validation for user-authored content: diaries, galleries, articles,
//! events, and profile fields.

use crate::error::CoreError;
use crate::types::Timestamp;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Maximum length of any content title.
pub const MAX_TITLE_LENGTH: usize = 200;

/// Maximum length of a diary entry, article body, or event description.
pub const MAX_BODY_LENGTH: usize = 20_000;

/// Maximum length of a gallery description.
pub const MAX_DESCRIPTION_LENGTH: usize = 2_000;

/// Maximum number of images a single gallery may hold.
pub const MAX_GALLERY_IMAGES: usize = 50;

pub const MIN_USERNAME_LENGTH: usize = 3;
pub const MAX_USERNAME_LENGTH: usize = 32;
pub const MAX_DISPLAY_NAME_LENGTH: usize = 64;
pub const MAX_BIO_LENGTH: usize = 500;

// ---------------------------------------------------------------------------
// Content
// ---------------------------------------------------------------------------

pub fn validate_title(title: &str) -> Result<(), CoreError> {
    let len = title.trim().chars().count();
    if len == 0 {
        return Err(CoreError::Validation("Title cannot be empty".into()));
    }
    if len > MAX_TITLE_LENGTH {
        return Err(CoreError::Validation(format!(
            "Title exceeds maximum length of {MAX_TITLE_LENGTH} characters"
        )));
    }
    Ok(())
}

pub fn validate_body(body: &str) -> Result<(), CoreError> {
    if body.trim().is_empty() {
        return Err(CoreError::Validation("Content cannot be empty".into()));
    }
    if body.chars().count() > MAX_BODY_LENGTH {
        return Err(CoreError::Validation(format!(
            "Content exceeds maximum length of {MAX_BODY_LENGTH} characters"
        )));
    }
    Ok(())
}

pub fn validate_description(description: &str) -> Result<(), CoreError> {
    if description.chars().count() > MAX_DESCRIPTION_LENGTH {
        return Err(CoreError::Validation(format!(
            "Description exceeds maximum length of {MAX_DESCRIPTION_LENGTH} characters"
        )));
    }
    Ok(())
}

/// An event may not end before it starts.
pub fn validate_event_window(
    starts_at: Timestamp,
    ends_at: Option<Timestamp>,
) -> Result<(), CoreError> {
    match ends_at {
        Some(end) if end < starts_at => Err(CoreError::Validation(
            "Event end time cannot be before its start time".into(),
        )),
        _ => Ok(()),
    }
}

// ---------------------------------------------------------------------------
// Profiles
// ---------------------------------------------------------------------------

/// Usernames are 3-32 ASCII letters, digits, `_` or `-`.
pub fn validate_username(username: &str) -> Result<(), CoreError> {
    let len = username.len();
    if !(MIN_USERNAME_LENGTH..=MAX_USERNAME_LENGTH).contains(&len) {
        return Err(CoreError::Validation(format!(
            "Username must be between {MIN_USERNAME_LENGTH} and {MAX_USERNAME_LENGTH} characters"
        )));
    }
    if !username
        .bytes()
        .all(|b| b.is_ascii_alphanumeric() || b == b'_' || b == b'-')
    {
        return Err(CoreError::Validation(
            "Username may only contain letters, digits, '_' and '-'".into(),
        ));
    }
    Ok(())
}

/// Minimal shape check; deliverability is not verified.
pub fn validate_email(email: &str) -> Result<(), CoreError> {
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && domain.contains('.') => Ok(()),
        _ => Err(CoreError::Validation(format!(
            "Invalid email address '{email}'"
        ))),
    }
}

pub fn validate_display_name(name: &str) -> Result<(), CoreError> {
    if name.chars().count() > MAX_DISPLAY_NAME_LENGTH {
        return Err(CoreError::Validation(format!(
            "Display name exceeds maximum length of {MAX_DISPLAY_NAME_LENGTH} characters"
        )));
    }
    Ok(())
}

pub fn validate_bio(bio: &str) -> Result<(), CoreError> {
    if bio.chars().count() > MAX_BIO_LENGTH {
        return Err(CoreError::Validation(format!(
            "Bio exceeds maximum length of {MAX_BIO_LENGTH} characters"
        )));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
