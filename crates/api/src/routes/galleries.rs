//! Route definitions for `/galleries`.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::galleries;
use crate::state::AppState;

/// ```text
/// GET    /              -> list_galleries (?owner_id, limit, offset)
/// POST   /              -> create_gallery
/// GET    /{id}          -> get_gallery
/// PUT    /{id}          -> update_gallery
/// DELETE /{id}          -> delete_gallery
/// POST   /{id}/images   -> add_image
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(galleries::list_galleries).post(galleries::create_gallery),
        )
        .route(
            "/{id}",
            get(galleries::get_gallery)
                .put(galleries::update_gallery)
                .delete(galleries::delete_gallery),
        )
        .route("/{id}/images", post(galleries::add_image))
}
