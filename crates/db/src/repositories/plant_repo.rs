//! Repository for the `plants` table.

use sprout_core::pagination::{clamp_limit, clamp_offset};
use sprout_core::types::DbId;
use sqlx::PgPool;

use crate::models::plant::{CreatePlant, Plant, UpdatePlant};

const COLUMNS: &str = "id, owner_id, name, category, acquired_on, watering_interval_days, \
    nutrient_interval_days, last_watered_at, last_fed_at, notes, created_at, updated_at";

/// Provides CRUD operations for plants.
pub struct PlantRepo;

impl PlantRepo {
    /// Create a plant owned by `owner_id`, returning the created row.
    pub async fn create(
        pool: &PgPool,
        owner_id: DbId,
        input: &CreatePlant,
    ) -> Result<Plant, sqlx::Error> {
        let query = format!(
            "INSERT INTO plants
                (owner_id, name, category, acquired_on, watering_interval_days,
                 nutrient_interval_days, last_watered_at, last_fed_at, notes)
             VALUES ($1, $2, $3, COALESCE($4, CURRENT_DATE), $5, $6, $7, $8, $9)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Plant>(&query)
            .bind(owner_id)
            .bind(input.name.trim())
            .bind(&input.category)
            .bind(input.acquired_on)
            .bind(input.watering_interval_days)
            .bind(input.nutrient_interval_days)
            .bind(input.last_watered_at)
            .bind(input.last_fed_at)
            .bind(&input.notes)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Plant>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM plants WHERE id = $1");
        sqlx::query_as::<_, Plant>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List plants, newest first, optionally filtered by owner.
    pub async fn list(
        pool: &PgPool,
        owner_id: Option<DbId>,
        limit: Option<i64>,
        offset: Option<i64>,
    ) -> Result<Vec<Plant>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM plants
             WHERE ($1::BIGINT IS NULL OR owner_id = $1)
             ORDER BY created_at DESC, id DESC
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, Plant>(&query)
            .bind(owner_id)
            .bind(clamp_limit(limit))
            .bind(clamp_offset(offset))
            .fetch_all(pool)
            .await
    }

    /// All plants of one owner, by name. Used for the due-care view.
    pub async fn list_all_for_owner(
        pool: &PgPool,
        owner_id: DbId,
    ) -> Result<Vec<Plant>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM plants WHERE owner_id = $1 ORDER BY name ASC");
        sqlx::query_as::<_, Plant>(&query)
            .bind(owner_id)
            .fetch_all(pool)
            .await
    }

    /// Update a plant by ID, returning the updated row.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdatePlant,
    ) -> Result<Option<Plant>, sqlx::Error> {
        let query = format!(
            "UPDATE plants SET
                name = COALESCE($2, name),
                category = COALESCE($3, category),
                acquired_on = COALESCE($4, acquired_on),
                watering_interval_days = COALESCE($5, watering_interval_days),
                nutrient_interval_days = COALESCE($6, nutrient_interval_days),
                last_watered_at = COALESCE($7, last_watered_at),
                last_fed_at = COALESCE($8, last_fed_at),
                notes = COALESCE($9, notes)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Plant>(&query)
            .bind(id)
            .bind(input.name.as_deref().map(str::trim))
            .bind(&input.category)
            .bind(input.acquired_on)
            .bind(input.watering_interval_days)
            .bind(input.nutrient_interval_days)
            .bind(input.last_watered_at)
            .bind(input.last_fed_at)
            .bind(&input.notes)
            .fetch_optional(pool)
            .await
    }

    /// Delete a plant. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM plants WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
