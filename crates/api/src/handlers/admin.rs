//! Handlers for the `/admin` resource (account moderation).
//!
//! All handlers require the `admin` role via [`RequireAdmin`].

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use sprout_core::types::DbId;
use sprout_db::models::user::UserResponse;
use sprout_db::repositories::{SessionRepo, UserRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::query::PaginationParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for `PATCH /admin/users/{id}/active`.
#[derive(Debug, Deserialize)]
pub struct SetActiveRequest {
    pub is_active: bool,
}

/// GET /api/v1/admin/users
pub async fn list_users(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Query(params): Query<PaginationParams>,
) -> AppResult<Json<DataResponse<Vec<UserResponse>>>> {
    let users = UserRepo::list(&state.pool, params.limit, params.offset).await?;
    Ok(Json(DataResponse::ok(
        users.into_iter().map(UserResponse::from).collect(),
    )))
}

/// PATCH /api/v1/admin/users/{id}/active
///
/// Deactivate or reactivate an account. Deactivation also revokes every
/// refresh session of that user. Admins cannot deactivate themselves.
pub async fn set_active(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<SetActiveRequest>,
) -> AppResult<StatusCode> {
    if id == admin.user_id && !input.is_active {
        return Err(AppError::BadRequest(
            "Cannot deactivate your own account".into(),
        ));
    }

    if !UserRepo::set_active(&state.pool, id, input.is_active).await? {
        return Err(AppError::not_found("User", id));
    }

    if !input.is_active {
        SessionRepo::revoke_all_for_user(&state.pool, id).await?;
    }

    tracing::info!(
        admin_id = admin.user_id,
        user_id = id,
        is_active = input.is_active,
        "User activation changed"
    );

    Ok(StatusCode::NO_CONTENT)
}
