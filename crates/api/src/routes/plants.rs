//! Route definitions for `/plants`.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::plants;
use crate::state::AppState;

/// Routes mounted at `/plants`.
///
/// ```text
/// GET    /             -> list_plants (?owner_id, limit, offset)
/// POST   /             -> create_plant
/// GET    /due          -> list_due (requires auth)
/// GET    /{id}         -> get_plant
/// PUT    /{id}         -> update_plant
/// DELETE /{id}         -> delete_plant
/// POST   /{id}/water   -> water_plant
/// POST   /{id}/feed    -> feed_plant
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(plants::list_plants).post(plants::create_plant))
        .route("/due", get(plants::list_due))
        .route(
            "/{id}",
            get(plants::get_plant)
                .put(plants::update_plant)
                .delete(plants::delete_plant),
        )
        .route("/{id}/water", post(plants::water_plant))
        .route("/{id}/feed", post(plants::feed_plant))
}
