//! Plant model and DTOs.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sprout_core::access::Owned;
use sprout_core::care::{plant_care, CareError, PlantCare};
use sprout_core::plants::PlantFields;
use sprout_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A row from the `plants` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Plant {
    pub id: DbId,
    pub owner_id: DbId,
    pub name: String,
    pub category: String,
    pub acquired_on: NaiveDate,
    pub watering_interval_days: i32,
    pub nutrient_interval_days: i32,
    pub last_watered_at: Option<Timestamp>,
    pub last_fed_at: Option<Timestamp>,
    pub notes: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Plant {
    /// Derive the watering and nutrient due status as of `now`.
    pub fn care(&self, now: Timestamp) -> Result<PlantCare, CareError> {
        plant_care(
            self.last_watered_at,
            self.watering_interval_days,
            self.last_fed_at,
            self.nutrient_interval_days,
            now,
        )
    }
}

impl Owned for Plant {
    fn owner_id(&self) -> Option<DbId> {
        Some(self.owner_id)
    }
}

/// DTO for creating a plant. The owner comes from the session.
#[derive(Debug, Deserialize)]
pub struct CreatePlant {
    pub name: String,
    pub category: String,
    /// Defaults to today when omitted.
    pub acquired_on: Option<NaiveDate>,
    pub watering_interval_days: i32,
    pub nutrient_interval_days: i32,
    pub last_watered_at: Option<Timestamp>,
    pub last_fed_at: Option<Timestamp>,
    pub notes: Option<String>,
}

impl CreatePlant {
    pub fn fields(&self) -> PlantFields<'_> {
        PlantFields {
            name: Some(&self.name),
            category: Some(&self.category),
            notes: self.notes.as_deref(),
            watering_interval_days: Some(self.watering_interval_days),
            nutrient_interval_days: Some(self.nutrient_interval_days),
            last_watered_at: self.last_watered_at,
            last_fed_at: self.last_fed_at,
        }
    }
}

/// DTO for updating a plant. All fields are optional.
///
/// Also used by the water/feed actions, which set only one of the
/// `last_*_at` fields.
#[derive(Debug, Default, Deserialize)]
pub struct UpdatePlant {
    pub name: Option<String>,
    pub category: Option<String>,
    pub acquired_on: Option<NaiveDate>,
    pub watering_interval_days: Option<i32>,
    pub nutrient_interval_days: Option<i32>,
    pub last_watered_at: Option<Timestamp>,
    pub last_fed_at: Option<Timestamp>,
    pub notes: Option<String>,
}

impl UpdatePlant {
    pub fn fields(&self) -> PlantFields<'_> {
        PlantFields {
            name: self.name.as_deref(),
            category: self.category.as_deref(),
            notes: self.notes.as_deref(),
            watering_interval_days: self.watering_interval_days,
            nutrient_interval_days: self.nutrient_interval_days,
            last_watered_at: self.last_watered_at,
            last_fed_at: self.last_fed_at,
        }
    }
}
