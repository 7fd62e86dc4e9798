//! Route definitions for `/users`.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::users;
use crate::state::AppState;

/// ```text
/// PUT  /me    -> update_me (requires auth)
/// GET  /{id}  -> get_profile
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/me", put(users::update_me))
        .route("/{id}", get(users::get_profile))
}
