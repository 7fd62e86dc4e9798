//! Route definitions for `/admin` (admin role required on every route).

use axum::routing::{get, patch};
use axum::Router;

use crate::handlers::admin;
use crate::state::AppState;

/// ```text
/// GET   /users               -> list_users (?limit, offset)
/// PATCH /users/{id}/active   -> set_active
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/users", get(admin::list_users))
        .route("/users/{id}/active", patch(admin::set_active))
}
