//! Handlers for `/users` (public profiles and editing one's own).

use axum::extract::{Path, State};
use axum::Json;
use sprout_core::content::{validate_bio, validate_display_name};
use sprout_core::types::DbId;
use sprout_db::models::user::{PublicProfile, UpdateProfile, UserResponse};
use sprout_db::repositories::UserRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/users/{id}
pub async fn get_profile(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<PublicProfile>>> {
    let user = UserRepo::find_by_id(&state.pool, id)
        .await?
        .filter(|u| u.is_active)
        .ok_or_else(|| AppError::not_found("User", id))?;
    Ok(Json(DataResponse::ok(user.into())))
}

/// PUT /api/v1/users/me
///
/// Edit the caller's display name and bio. The target is always the
/// session's own account, so no ownership lookup is needed.
pub async fn update_me(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(input): Json<UpdateProfile>,
) -> AppResult<Json<DataResponse<UserResponse>>> {
    if let Some(ref name) = input.display_name {
        validate_display_name(name)?;
    }
    if let Some(ref bio) = input.bio {
        validate_bio(bio)?;
    }

    let user = UserRepo::update_profile(&state.pool, auth.user_id, &input)
        .await?
        .ok_or_else(|| AppError::not_found("User", auth.user_id))?;

    tracing::info!(user_id = user.id, "Profile updated");
    Ok(Json(DataResponse::ok(user.into())))
}
