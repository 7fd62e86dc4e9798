//! Route definitions for `/events`.

use axum::routing::{get, patch};
use axum::Router;

use crate::handlers::events;
use crate::state::AppState;

/// Routes mounted at `/events`. Reads are public; writes are admin only.
///
/// ```text
/// GET    /             -> list_events (?include_ended, limit, offset)
/// POST   /             -> create_event
/// GET    /{id}         -> get_event
/// PUT    /{id}         -> update_event
/// DELETE /{id}         -> delete_event
/// PATCH  /{id}/ended   -> toggle_ended
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(events::list_events).post(events::create_event))
        .route(
            "/{id}",
            get(events::get_event)
                .put(events::update_event)
                .delete(events::delete_event),
        )
        .route("/{id}/ended", patch(events::toggle_ended))
}
