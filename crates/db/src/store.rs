//! Uniform CRUD seam over the per-table repositories.
//!
//! The API's action layer runs the same find → authorize → mutate flow for
//! every owned resource type. It is written against [`EntityStore`] rather
//! than a concrete repository so that flow can be exercised with an
//! in-memory store in tests. [`PgStore`] adapts each zero-sized repo.

use std::future::Future;
use std::marker::PhantomData;

use sprout_core::access::Owned;
use sprout_core::types::DbId;
use sqlx::PgPool;

use crate::models::article::{Article, CreateArticle, UpdateArticle};
use crate::models::diary::{CreateDiary, Diary, UpdateDiary};
use crate::models::event::{CreateEvent, Event, UpdateEvent};
use crate::models::gallery::{CreateGallery, Gallery, UpdateGallery};
use crate::models::plant::{CreatePlant, Plant, UpdatePlant};
use crate::repositories::{ArticleRepo, DiaryRepo, EventRepo, GalleryRepo, PlantRepo};

/// Keyed CRUD over one resource type.
///
/// All operations fail with `sqlx::Error` on constraint violations or lost
/// connectivity. `update` returns `None` and `delete` returns `false` when
/// the row has vanished since it was looked up.
pub trait EntityStore: Send + Sync {
    type Entity: Owned + Send;
    type Create: Send + Sync;
    type Update: Send + Sync;

    /// Entity name used in not-found errors and logs.
    const ENTITY: &'static str;

    fn find_by_id(
        &self,
        id: DbId,
    ) -> impl Future<Output = Result<Option<Self::Entity>, sqlx::Error>> + Send;

    fn create(
        &self,
        owner_id: DbId,
        input: &Self::Create,
    ) -> impl Future<Output = Result<Self::Entity, sqlx::Error>> + Send;

    fn update(
        &self,
        id: DbId,
        input: &Self::Update,
    ) -> impl Future<Output = Result<Option<Self::Entity>, sqlx::Error>> + Send;

    fn delete(&self, id: DbId) -> impl Future<Output = Result<bool, sqlx::Error>> + Send;
}

/// PostgreSQL-backed [`EntityStore`] delegating to repository `R`.
pub struct PgStore<R> {
    pool: PgPool,
    _repo: PhantomData<fn() -> R>,
}

impl<R> PgStore<R> {
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            _repo: PhantomData,
        }
    }
}

macro_rules! impl_pg_store {
    ($repo:ident, $entity:ty, $create:ty, $update:ty, $name:literal) => {
        impl EntityStore for PgStore<$repo> {
            type Entity = $entity;
            type Create = $create;
            type Update = $update;

            const ENTITY: &'static str = $name;

            async fn find_by_id(&self, id: DbId) -> Result<Option<$entity>, sqlx::Error> {
                $repo::find_by_id(&self.pool, id).await
            }

            async fn create(&self, owner_id: DbId, input: &$create) -> Result<$entity, sqlx::Error> {
                $repo::create(&self.pool, owner_id, input).await
            }

            async fn update(
                &self,
                id: DbId,
                input: &$update,
            ) -> Result<Option<$entity>, sqlx::Error> {
                $repo::update(&self.pool, id, input).await
            }

            async fn delete(&self, id: DbId) -> Result<bool, sqlx::Error> {
                $repo::delete(&self.pool, id).await
            }
        }
    };
}

impl_pg_store!(PlantRepo, Plant, CreatePlant, UpdatePlant, "Plant");
impl_pg_store!(DiaryRepo, Diary, CreateDiary, UpdateDiary, "Diary");
impl_pg_store!(GalleryRepo, Gallery, CreateGallery, UpdateGallery, "Gallery");
impl_pg_store!(ArticleRepo, Article, CreateArticle, UpdateArticle, "Article");
impl_pg_store!(EventRepo, Event, CreateEvent, UpdateEvent, "Event");
