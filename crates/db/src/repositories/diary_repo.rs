//! Repository for the `diaries` table.

use sprout_core::pagination::{clamp_limit, clamp_offset};
use sprout_core::types::DbId;
use sqlx::PgPool;

use crate::models::diary::{CreateDiary, Diary, UpdateDiary};

const COLUMNS: &str = "id, owner_id, plant_id, title, content, created_at, updated_at";

/// Provides CRUD operations for diary entries.
pub struct DiaryRepo;

impl DiaryRepo {
    pub async fn create(
        pool: &PgPool,
        owner_id: DbId,
        input: &CreateDiary,
    ) -> Result<Diary, sqlx::Error> {
        let query = format!(
            "INSERT INTO diaries (owner_id, plant_id, title, content)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Diary>(&query)
            .bind(owner_id)
            .bind(input.plant_id)
            .bind(input.title.trim())
            .bind(&input.content)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Diary>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM diaries WHERE id = $1");
        sqlx::query_as::<_, Diary>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List entries, newest first, optionally filtered by owner and plant.
    pub async fn list(
        pool: &PgPool,
        owner_id: Option<DbId>,
        plant_id: Option<DbId>,
        limit: Option<i64>,
        offset: Option<i64>,
    ) -> Result<Vec<Diary>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM diaries
             WHERE ($1::BIGINT IS NULL OR owner_id = $1)
               AND ($2::BIGINT IS NULL OR plant_id = $2)
             ORDER BY created_at DESC, id DESC
             LIMIT $3 OFFSET $4"
        );
        sqlx::query_as::<_, Diary>(&query)
            .bind(owner_id)
            .bind(plant_id)
            .bind(clamp_limit(limit))
            .bind(clamp_offset(offset))
            .fetch_all(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateDiary,
    ) -> Result<Option<Diary>, sqlx::Error> {
        let query = format!(
            "UPDATE diaries SET
                plant_id = COALESCE($2, plant_id),
                title = COALESCE($3, title),
                content = COALESCE($4, content)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Diary>(&query)
            .bind(id)
            .bind(input.plant_id)
            .bind(input.title.as_deref().map(str::trim))
            .bind(&input.content)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM diaries WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
