//! Repository for the `galleries` table.

use sprout_core::pagination::{clamp_limit, clamp_offset};
use sprout_core::types::DbId;
use sqlx::PgPool;

use crate::models::gallery::{CreateGallery, Gallery, UpdateGallery};

const COLUMNS: &str = "id, owner_id, title, description, image_paths, created_at, updated_at";

/// Provides CRUD operations for photo galleries.
pub struct GalleryRepo;

impl GalleryRepo {
    pub async fn create(
        pool: &PgPool,
        owner_id: DbId,
        input: &CreateGallery,
    ) -> Result<Gallery, sqlx::Error> {
        let query = format!(
            "INSERT INTO galleries (owner_id, title, description)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Gallery>(&query)
            .bind(owner_id)
            .bind(input.title.trim())
            .bind(&input.description)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Gallery>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM galleries WHERE id = $1");
        sqlx::query_as::<_, Gallery>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(
        pool: &PgPool,
        owner_id: Option<DbId>,
        limit: Option<i64>,
        offset: Option<i64>,
    ) -> Result<Vec<Gallery>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM galleries
             WHERE ($1::BIGINT IS NULL OR owner_id = $1)
             ORDER BY created_at DESC, id DESC
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, Gallery>(&query)
            .bind(owner_id)
            .bind(clamp_limit(limit))
            .bind(clamp_offset(offset))
            .fetch_all(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateGallery,
    ) -> Result<Option<Gallery>, sqlx::Error> {
        let query = format!(
            "UPDATE galleries SET
                title = COALESCE($2, title),
                description = COALESCE($3, description)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Gallery>(&query)
            .bind(id)
            .bind(input.title.as_deref().map(str::trim))
            .bind(&input.description)
            .fetch_optional(pool)
            .await
    }

    /// Append one storage key unless the gallery already holds `max_images`.
    ///
    /// The cap is part of the statement, so concurrent appends cannot push
    /// the list past it. `None` means the gallery is missing or full.
    pub async fn append_image(
        pool: &PgPool,
        id: DbId,
        image_path: &str,
        max_images: i32,
    ) -> Result<Option<Gallery>, sqlx::Error> {
        let query = format!(
            "UPDATE galleries SET image_paths = array_append(image_paths, $2)
             WHERE id = $1 AND cardinality(image_paths) < $3
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Gallery>(&query)
            .bind(id)
            .bind(image_path)
            .bind(max_images)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM galleries WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
