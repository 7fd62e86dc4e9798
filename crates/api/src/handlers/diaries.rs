//! Handlers for `/diaries`.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::Response;
use axum::Json;
use serde::Deserialize;
use sprout_core::content::{validate_body, validate_title};
use sprout_core::error::CoreError;
use sprout_core::types::DbId;
use sprout_db::models::diary::{CreateDiary, Diary, UpdateDiary};
use sprout_db::repositories::{DiaryRepo, PlantRepo};
use sprout_db::store::EntityStore;

use crate::actions::{self, OWNER_OR_ADMIN};
use crate::error::{AppError, AppResult};
use crate::handlers::created;
use crate::middleware::auth::{AuthUser, CurrentActor};
use crate::response::DataResponse;
use crate::state::AppState;

/// Query parameters for `GET /diaries`.
#[derive(Debug, Deserialize)]
pub struct DiaryListParams {
    pub owner_id: Option<DbId>,
    pub plant_id: Option<DbId>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// A diary may only be linked to a plant owned by the diary's author.
async fn check_plant_link(state: &AppState, author_id: DbId, plant_id: DbId) -> AppResult<()> {
    let linked = PlantRepo::find_by_id(&state.pool, plant_id).await?;
    match linked {
        Some(plant) if plant.owner_id == author_id => Ok(()),
        _ => Err(AppError::Core(CoreError::Validation(format!(
            "Plant {plant_id} does not exist or belongs to another user"
        )))),
    }
}

/// GET /api/v1/diaries?owner_id=&plant_id=&limit=&offset=
pub async fn list_diaries(
    State(state): State<AppState>,
    Query(params): Query<DiaryListParams>,
) -> AppResult<Json<DataResponse<Vec<Diary>>>> {
    let diaries = DiaryRepo::list(
        &state.pool,
        params.owner_id,
        params.plant_id,
        params.limit,
        params.offset,
    )
    .await?;
    Ok(Json(DataResponse::ok(diaries)))
}

/// POST /api/v1/diaries
pub async fn create_diary(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(input): Json<CreateDiary>,
) -> AppResult<Response> {
    validate_title(&input.title)?;
    validate_body(&input.content)?;
    if let Some(plant_id) = input.plant_id {
        check_plant_link(&state, auth.user_id, plant_id).await?;
    }

    let diary = state
        .store::<DiaryRepo>()
        .create(auth.user_id, &input)
        .await?;

    tracing::info!(user_id = auth.user_id, diary_id = diary.id, "Diary entry created");
    Ok(created("diaries", diary.id, diary))
}

/// GET /api/v1/diaries/{id}
pub async fn get_diary(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Diary>>> {
    let diary = DiaryRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found("Diary", id))?;
    Ok(Json(DataResponse::ok(diary)))
}

/// PUT /api/v1/diaries/{id}
///
/// A moderating admin may edit another user's entry; a plant link is then
/// checked against the entry's author, not the admin.
pub async fn update_diary(
    State(state): State<AppState>,
    actor: CurrentActor,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateDiary>,
) -> AppResult<Json<DataResponse<Diary>>> {
    if let Some(ref title) = input.title {
        validate_title(title)?;
    }
    if let Some(ref content) = input.content {
        validate_body(content)?;
    }

    let store = state.store::<DiaryRepo>();
    let current = actions::authorize(&store, actor.as_ref(), id, OWNER_OR_ADMIN).await?;
    if let Some(plant_id) = input.plant_id {
        check_plant_link(&state, current.owner_id, plant_id).await?;
    }

    let diary = store
        .update(id, &input)
        .await?
        .ok_or_else(|| AppError::not_found("Diary", id))?;

    tracing::info!(user_id = ?actor.0.map(|a| a.id), diary_id = id, "Diary entry updated");
    Ok(Json(DataResponse::ok(diary)))
}

/// DELETE /api/v1/diaries/{id}
pub async fn delete_diary(
    State(state): State<AppState>,
    actor: CurrentActor,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    actions::delete(&state.store::<DiaryRepo>(), actor.as_ref(), id, OWNER_OR_ADMIN).await?;
    tracing::info!(user_id = ?actor.0.map(|a| a.id), diary_id = id, "Diary entry deleted");
    Ok(StatusCode::NO_CONTENT)
}
