//! Guarded mutations: the find → authorize → execute flow shared by every
//! owned resource.
//!
//! ```text
//! Idle -> Authorizing -> Denied                      (404 masked, or 403)
//!                     -> Permitted -> Executing -> Committed
//!                                              -> Failed (store error, 500)
//! ```
//!
//! A missing resource ends in `NotFound` before the gate runs. A denied
//! actor never reaches the store mutation. Store errors are not retried;
//! they propagate as [`AppError::Database`] and are logged when rendered.

use sprout_core::access::{can_mutate, Actor, DenialSurface, Policy};
use sprout_core::error::CoreError;
use sprout_core::types::DbId;
use sprout_db::store::EntityStore;

use crate::error::{AppError, AppResult};

/// Policy plus the way a denial under it is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Guard {
    pub policy: Policy,
    pub surface: DenialSurface,
}

/// Plants: only the owner, denials look like 404.
pub const OWNER_ONLY: Guard = Guard {
    policy: Policy::Owner,
    surface: DenialSurface::MaskAsNotFound,
};

/// Diaries, galleries, articles: owner or a moderating admin, denials look like 404.
pub const OWNER_OR_ADMIN: Guard = Guard {
    policy: Policy::OwnerOrAdmin,
    surface: DenialSurface::MaskAsNotFound,
};

/// Events: admins only, denials are an explicit 403.
pub const ADMIN_ONLY: Guard = Guard {
    policy: Policy::Admin,
    surface: DenialSurface::Forbidden,
};

fn denial(entity: &'static str, id: DbId, surface: DenialSurface) -> AppError {
    match surface {
        DenialSurface::MaskAsNotFound => AppError::not_found(entity, id),
        DenialSurface::Forbidden => AppError::Core(CoreError::Forbidden(format!(
            "Only administrators may modify {entity} records"
        ))),
    }
}

/// Look up `id` and check that `actor` may mutate it under `guard`.
///
/// Returns the loaded entity so callers can validate against current state
/// before executing their mutation.
pub async fn authorize<S: EntityStore>(
    store: &S,
    actor: Option<&Actor>,
    id: DbId,
    guard: Guard,
) -> AppResult<S::Entity> {
    let entity = store
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found(S::ENTITY, id))?;

    if !can_mutate(actor, &entity, guard.policy) {
        tracing::warn!(
            actor_id = actor.map(|a| a.id),
            entity = S::ENTITY,
            id,
            policy = ?guard.policy,
            "Mutation denied"
        );
        return Err(denial(S::ENTITY, id, guard.surface));
    }

    Ok(entity)
}

/// Authorize, then apply `input` as a partial update.
pub async fn update<S: EntityStore>(
    store: &S,
    actor: Option<&Actor>,
    id: DbId,
    input: &S::Update,
    guard: Guard,
) -> AppResult<S::Entity> {
    authorize(store, actor, id, guard).await?;

    // The row may have been deleted between lookup and write.
    store
        .update(id, input)
        .await?
        .ok_or_else(|| AppError::not_found(S::ENTITY, id))
}

/// Authorize, then delete.
pub async fn delete<S: EntityStore>(
    store: &S,
    actor: Option<&Actor>,
    id: DbId,
    guard: Guard,
) -> AppResult<()> {
    authorize(store, actor, id, guard).await?;

    if !store.delete(id).await? {
        return Err(AppError::not_found(S::ENTITY, id));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
