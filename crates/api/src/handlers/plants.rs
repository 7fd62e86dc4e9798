//! Handlers for `/plants`, including the care actions.
//!
//! Every plant returned by these endpoints carries its computed watering
//! and nutrient status under `care`, evaluated at request time.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::Response;
use axum::Json;
use chrono::Utc;
use serde::Serialize;
use sprout_core::care::{CareTrack, PlantCare};
use sprout_core::error::CoreError;
use sprout_core::plants::validate_plant_fields;
use sprout_core::types::{DbId, Timestamp};
use sprout_db::models::plant::{CreatePlant, Plant, UpdatePlant};
use sprout_db::repositories::PlantRepo;
use sprout_db::store::EntityStore;

use crate::actions::{self, OWNER_ONLY};
use crate::error::{AppError, AppResult};
use crate::handlers::created;
use crate::middleware::auth::{AuthUser, CurrentActor};
use crate::query::ListParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// A plant with its derived care status.
#[derive(Debug, Serialize)]
pub struct PlantWithCare {
    #[serde(flatten)]
    pub plant: Plant,
    pub care: PlantCare,
}

impl PlantWithCare {
    /// Stored rows already passed form validation, so a care error here
    /// means the row was changed outside the API (or the clock moved back).
    fn at(plant: Plant, now: Timestamp) -> AppResult<Self> {
        let care = plant.care(now).map_err(|e| {
            tracing::error!(plant_id = plant.id, error = %e, "Stored plant has invalid care data");
            AppError::Core(CoreError::Internal(format!(
                "Plant {} has invalid care data",
                plant.id
            )))
        })?;
        Ok(Self { plant, care })
    }
}

fn with_care_all(plants: Vec<Plant>, now: Timestamp) -> AppResult<Vec<PlantWithCare>> {
    plants
        .into_iter()
        .map(|p| PlantWithCare::at(p, now))
        .collect()
}

/// GET /api/v1/plants?owner_id=&limit=&offset=
pub async fn list_plants(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<Json<DataResponse<Vec<PlantWithCare>>>> {
    let plants = PlantRepo::list(&state.pool, params.owner_id, params.limit, params.offset).await?;
    Ok(Json(DataResponse::ok(with_care_all(plants, Utc::now())?)))
}

/// GET /api/v1/plants/due
///
/// The caller's plants with at least one care track due now.
pub async fn list_due(
    State(state): State<AppState>,
    auth: AuthUser,
) -> AppResult<Json<DataResponse<Vec<PlantWithCare>>>> {
    let plants = PlantRepo::list_all_for_owner(&state.pool, auth.user_id).await?;
    let due = with_care_all(plants, Utc::now())?
        .into_iter()
        .filter(|p| p.care.any_due())
        .collect();
    Ok(Json(DataResponse::ok(due)))
}

/// POST /api/v1/plants
pub async fn create_plant(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(input): Json<CreatePlant>,
) -> AppResult<Response> {
    let now = Utc::now();
    validate_plant_fields(&input.fields(), now)?;

    let plant = state
        .store::<PlantRepo>()
        .create(auth.user_id, &input)
        .await?;

    tracing::info!(
        user_id = auth.user_id,
        plant_id = plant.id,
        category = %plant.category,
        "Plant created"
    );

    let id = plant.id;
    Ok(created("plants", id, PlantWithCare::at(plant, Utc::now())?))
}

/// GET /api/v1/plants/{id}
pub async fn get_plant(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<PlantWithCare>>> {
    let plant = PlantRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found("Plant", id))?;
    Ok(Json(DataResponse::ok(PlantWithCare::at(plant, Utc::now())?)))
}

/// PUT /api/v1/plants/{id}
pub async fn update_plant(
    State(state): State<AppState>,
    actor: CurrentActor,
    Path(id): Path<DbId>,
    Json(input): Json<UpdatePlant>,
) -> AppResult<Json<DataResponse<PlantWithCare>>> {
    let now = Utc::now();
    validate_plant_fields(&input.fields(), now)?;

    let plant = actions::update(
        &state.store::<PlantRepo>(),
        actor.as_ref(),
        id,
        &input,
        OWNER_ONLY,
    )
    .await?;

    tracing::info!(user_id = ?actor.0.map(|a| a.id), plant_id = id, "Plant updated");
    // A concurrent care action may have stored a later date than `now`.
    Ok(Json(DataResponse::ok(PlantWithCare::at(plant, Utc::now())?)))
}

/// DELETE /api/v1/plants/{id}
pub async fn delete_plant(
    State(state): State<AppState>,
    actor: CurrentActor,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    actions::delete(&state.store::<PlantRepo>(), actor.as_ref(), id, OWNER_ONLY).await?;
    tracing::info!(user_id = ?actor.0.map(|a| a.id), plant_id = id, "Plant deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/plants/{id}/water
pub async fn water_plant(
    State(state): State<AppState>,
    actor: CurrentActor,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<PlantWithCare>>> {
    mark_done(&state, actor, id, CareTrack::Watering).await
}

/// POST /api/v1/plants/{id}/feed
pub async fn feed_plant(
    State(state): State<AppState>,
    actor: CurrentActor,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<PlantWithCare>>> {
    mark_done(&state, actor, id, CareTrack::Nutrient).await
}

/// Reset one care track's last date to now. The interval is left unchanged.
async fn mark_done(
    state: &AppState,
    actor: CurrentActor,
    id: DbId,
    track: CareTrack,
) -> AppResult<Json<DataResponse<PlantWithCare>>> {
    let now = Utc::now();
    let input = match track {
        CareTrack::Watering => UpdatePlant {
            last_watered_at: Some(now),
            ..Default::default()
        },
        CareTrack::Nutrient => UpdatePlant {
            last_fed_at: Some(now),
            ..Default::default()
        },
    };

    let plant = actions::update(
        &state.store::<PlantRepo>(),
        actor.as_ref(),
        id,
        &input,
        OWNER_ONLY,
    )
    .await?;

    tracing::info!(
        user_id = ?actor.0.map(|a| a.id),
        plant_id = id,
        track = track.label(),
        "Plant care recorded"
    );
    // The returned row may carry the other track's date from a concurrent
    // request, so evaluate it after the write rather than at `now`.
    Ok(Json(DataResponse::ok(PlantWithCare::at(plant, Utc::now())?)))
}
