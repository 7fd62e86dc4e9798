//! Handlers for `/events`.
//!
//! Events are public to read and managed by admins only. Unlike owned
//! content, a denied mutation here is reported as 403.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::Response;
use axum::Json;
use serde::Deserialize;
use sprout_core::content::{validate_body, validate_event_window, validate_title};
use sprout_core::types::DbId;
use sprout_db::models::event::{CreateEvent, Event, UpdateEvent};
use sprout_db::repositories::EventRepo;
use sprout_db::store::EntityStore;

use crate::actions::{self, ADMIN_ONLY};
use crate::error::{AppError, AppResult};
use crate::handlers::created;
use crate::middleware::auth::CurrentActor;
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

/// Query parameters for `GET /events`.
#[derive(Debug, Deserialize)]
pub struct EventListParams {
    /// Include events already marked as ended (default: false).
    pub include_ended: Option<bool>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// GET /api/v1/events?include_ended=&limit=&offset=
pub async fn list_events(
    State(state): State<AppState>,
    Query(params): Query<EventListParams>,
) -> AppResult<Json<DataResponse<Vec<Event>>>> {
    let events = EventRepo::list(
        &state.pool,
        params.include_ended.unwrap_or(false),
        params.limit,
        params.offset,
    )
    .await?;
    Ok(Json(DataResponse::ok(events)))
}

/// POST /api/v1/events
pub async fn create_event(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Json(input): Json<CreateEvent>,
) -> AppResult<Response> {
    validate_title(&input.title)?;
    validate_body(&input.description)?;
    validate_event_window(input.starts_at, input.ends_at)?;

    let event = state
        .store::<EventRepo>()
        .create(admin.user_id, &input)
        .await?;

    tracing::info!(admin_id = admin.user_id, event_id = event.id, "Event created");
    Ok(created("events", event.id, event))
}

/// GET /api/v1/events/{id}
pub async fn get_event(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Event>>> {
    let event = EventRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found("Event", id))?;
    Ok(Json(DataResponse::ok(event)))
}

/// PUT /api/v1/events/{id}
///
/// The time window is validated against the merged result, so moving only
/// `starts_at` past the stored `ends_at` is rejected.
pub async fn update_event(
    State(state): State<AppState>,
    actor: CurrentActor,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateEvent>,
) -> AppResult<Json<DataResponse<Event>>> {
    if let Some(ref title) = input.title {
        validate_title(title)?;
    }
    if let Some(ref description) = input.description {
        validate_body(description)?;
    }

    let store = state.store::<EventRepo>();
    let current = actions::authorize(&store, actor.as_ref(), id, ADMIN_ONLY).await?;
    validate_event_window(
        input.starts_at.unwrap_or(current.starts_at),
        input.ends_at.or(current.ends_at),
    )?;

    let event = store
        .update(id, &input)
        .await?
        .ok_or_else(|| AppError::not_found("Event", id))?;

    tracing::info!(admin_id = ?actor.0.map(|a| a.id), event_id = id, "Event updated");
    Ok(Json(DataResponse::ok(event)))
}

/// PATCH /api/v1/events/{id}/ended
///
/// Flip the event's ended flag. Permitted for any admin regardless of who
/// created the event.
pub async fn toggle_ended(
    State(state): State<AppState>,
    actor: CurrentActor,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Event>>> {
    actions::authorize(&state.store::<EventRepo>(), actor.as_ref(), id, ADMIN_ONLY).await?;

    let event = EventRepo::toggle_ended(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found("Event", id))?;

    tracing::info!(
        admin_id = ?actor.0.map(|a| a.id),
        event_id = id,
        is_ended = event.is_ended,
        "Event ended flag toggled"
    );
    Ok(Json(DataResponse::ok(event)))
}

/// DELETE /api/v1/events/{id}
pub async fn delete_event(
    State(state): State<AppState>,
    actor: CurrentActor,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    actions::delete(&state.store::<EventRepo>(), actor.as_ref(), id, ADMIN_ONLY).await?;
    tracing::info!(admin_id = ?actor.0.map(|a| a.id), event_id = id, "Event deleted");
    Ok(StatusCode::NO_CONTENT)
}
