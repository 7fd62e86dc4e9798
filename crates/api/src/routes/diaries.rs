//! Route definitions for `/diaries`.

use axum::routing::get;
use axum::Router;

use crate::handlers::diaries;
use crate::state::AppState;

/// ```text
/// GET    /       -> list_diaries (?owner_id, plant_id, limit, offset)
/// POST   /       -> create_diary
/// GET    /{id}   -> get_diary
/// PUT    /{id}   -> update_diary
/// DELETE /{id}   -> delete_diary
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(diaries::list_diaries).post(diaries::create_diary))
        .route(
            "/{id}",
            get(diaries::get_diary)
                .put(diaries::update_diary)
                .delete(diaries::delete_diary),
        )
}
