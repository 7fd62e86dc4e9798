pub mod admin;
pub mod articles;
pub mod auth;
pub mod diaries;
pub mod events;
pub mod galleries;
pub mod health;
pub mod plants;
pub mod users;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/register                                   register (public)
/// /auth/login                                      login (public)
/// /auth/refresh                                    refresh (public)
/// /auth/logout                                     logout (requires auth)
/// /auth/me                                         current account (requires auth)
///
/// /users/{id}                                      public profile
/// /users/me                                        edit own profile (PUT)
///
/// /admin/users                                     list (admin only)
/// /admin/users/{id}/active                         activate / deactivate (PATCH)
///
/// /plants                                          list, create
/// /plants/due                                      caller's plants needing care
/// /plants/{id}                                     get, update, delete (owner)
/// /plants/{id}/water                               mark watered (POST, owner)
/// /plants/{id}/feed                                mark fed (POST, owner)
///
/// /diaries                                         list, create
/// /diaries/{id}                                    get, update, delete (owner or admin)
///
/// /galleries                                       list, create
/// /galleries/{id}                                  get, update, delete (owner or admin)
/// /galleries/{id}/images                           attach image (POST, owner or admin)
///
/// /articles                                        list, create
/// /articles/{id}                                   get, update, delete (owner or admin)
///
/// /events                                          list (public), create (admin)
/// /events/{id}                                     get (public), update, delete (admin)
/// /events/{id}/ended                               toggle ended flag (PATCH, admin)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Authentication routes.
        .nest("/auth", auth::router())
        // Profiles.
        .nest("/users", users::router())
        // Account moderation.
        .nest("/admin", admin::router())
        // Plants and care actions.
        .nest("/plants", plants::router())
        // User-authored content.
        .nest("/diaries", diaries::router())
        .nest("/galleries", galleries::router())
        .nest("/articles", articles::router())
        // Admin-managed community events.
        .nest("/events", events::router())
}
