//! Plant categories and field validation.

use crate::care::{validate_interval, validate_last_date};
use crate::error::CoreError;
use crate::types::Timestamp;

/// Maximum length of a plant name in characters.
pub const MAX_PLANT_NAME_LENGTH: usize = 100;

/// Maximum length of free-form plant notes.
pub const MAX_PLANT_NOTES_LENGTH: usize = 2_000;

pub const CATEGORY_VEGETABLE: &str = "vegetable";
pub const CATEGORY_FRUIT: &str = "fruit";
pub const CATEGORY_HERB: &str = "herb";
pub const CATEGORY_FLOWER: &str = "flower";
pub const CATEGORY_SUCCULENT: &str = "succulent";
pub const CATEGORY_HOUSEPLANT: &str = "houseplant";
pub const CATEGORY_TREE: &str = "tree";
pub const CATEGORY_OTHER: &str = "other";

/// All valid plant categories. Must match `ck_plants_category`.
pub const VALID_CATEGORIES: &[&str] = &[
    CATEGORY_VEGETABLE,
    CATEGORY_FRUIT,
    CATEGORY_HERB,
    CATEGORY_FLOWER,
    CATEGORY_SUCCULENT,
    CATEGORY_HOUSEPLANT,
    CATEGORY_TREE,
    CATEGORY_OTHER,
];

pub fn validate_category(category: &str) -> Result<(), CoreError> {
    if VALID_CATEGORIES.contains(&category) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid category '{category}'. Must be one of: {}",
            VALID_CATEGORIES.join(", ")
        )))
    }
}

pub fn validate_plant_name(name: &str) -> Result<(), CoreError> {
    let len = name.trim().chars().count();
    if len == 0 {
        return Err(CoreError::Validation("Plant name cannot be empty".into()));
    }
    if len > MAX_PLANT_NAME_LENGTH {
        return Err(CoreError::Validation(format!(
            "Plant name exceeds maximum length of {MAX_PLANT_NAME_LENGTH} characters"
        )));
    }
    Ok(())
}

pub fn validate_plant_notes(notes: &str) -> Result<(), CoreError> {
    if notes.chars().count() > MAX_PLANT_NOTES_LENGTH {
        return Err(CoreError::Validation(format!(
            "Plant notes exceed maximum length of {MAX_PLANT_NOTES_LENGTH} characters"
        )));
    }
    Ok(())
}

/// Fields of a plant form submission, all optional so the same check serves
/// create and partial update.
#[derive(Debug, Default, Clone, Copy)]
pub struct PlantFields<'a> {
    pub name: Option<&'a str>,
    pub category: Option<&'a str>,
    pub notes: Option<&'a str>,
    pub watering_interval_days: Option<i32>,
    pub nutrient_interval_days: Option<i32>,
    pub last_watered_at: Option<Timestamp>,
    pub last_fed_at: Option<Timestamp>,
}

/// Validate every present field of a plant form against `now`.
pub fn validate_plant_fields(fields: &PlantFields<'_>, now: Timestamp) -> Result<(), CoreError> {
    if let Some(name) = fields.name {
        validate_plant_name(name)?;
    }
    if let Some(category) = fields.category {
        validate_category(category)?;
    }
    if let Some(notes) = fields.notes {
        validate_plant_notes(notes)?;
    }
    if let Some(days) = fields.watering_interval_days {
        validate_interval(days)?;
    }
    if let Some(days) = fields.nutrient_interval_days {
        validate_interval(days)?;
    }
    if let Some(at) = fields.last_watered_at {
        validate_last_date(at, now)?;
    }
    if let Some(at) = fields.last_fed_at {
        validate_last_date(at, now)?;
    }
    Ok(())
}
