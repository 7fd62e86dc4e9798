//! JWT-based session extractors for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use sprout_core::access::Actor;
use sprout_core::error::CoreError;
use sprout_core::roles::Role;
use sprout_core::types::DbId;

use crate::auth::jwt::validate_token;
use crate::error::AppError;
use crate::state::AppState;

/// Authenticated user extracted from a Bearer token in the `Authorization` header.
///
/// Rejects with 401 when the header is missing or the token is invalid.
/// Use it for operations that need an identity to act as, such as creating
/// a resource the caller will own.
#[derive(Debug, Clone, Copy)]
pub struct AuthUser {
    pub user_id: DbId,
    pub role: Role,
}

impl AuthUser {
    pub fn actor(&self) -> Actor {
        Actor::new(self.user_id, self.role)
    }
}

/// The acting user of a request, if any.
///
/// A missing `Authorization` header yields `CurrentActor(None)` so the
/// authorization gate can deny anonymous callers uniformly. A header that
/// is present but malformed or expired is still rejected with 401.
#[derive(Debug, Clone, Copy)]
pub struct CurrentActor(pub Option<Actor>);

impl CurrentActor {
    pub fn as_ref(&self) -> Option<&Actor> {
        self.0.as_ref()
    }
}

fn unauthorized(msg: &str) -> AppError {
    AppError::Core(CoreError::Unauthorized(msg.into()))
}

/// Decode the actor from the request, distinguishing "no header" from "bad token".
fn actor_from_parts(parts: &Parts, state: &AppState) -> Result<Option<Actor>, AppError> {
    let Some(header) = parts.headers.get(AUTHORIZATION) else {
        return Ok(None);
    };

    let token = header
        .to_str()
        .ok()
        .and_then(|v| v.strip_prefix("Bearer "))
        .ok_or_else(|| unauthorized("Invalid Authorization format. Expected: Bearer <token>"))?;

    let claims = validate_token(token, &state.config.jwt)
        .map_err(|_| unauthorized("Invalid or expired token"))?;

    Ok(Some(claims.actor()))
}

impl FromRequestParts<AppState> for CurrentActor {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(CurrentActor(actor_from_parts(parts, state)?))
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let actor = actor_from_parts(parts, state)?
            .ok_or_else(|| unauthorized("Missing Authorization header"))?;
        Ok(AuthUser {
            user_id: actor.id,
            role: actor.role,
        })
    }
}
