//! Request handlers, one submodule per resource.
//!
//! Reads go straight to the repositories in `sprout_db`. Mutations of an
//! existing resource go through [`crate::actions`] so every one of them is
//! looked up and authorized the same way before the store is touched.

pub mod admin;
pub mod articles;
pub mod auth;
pub mod diaries;
pub mod events;
pub mod galleries;
pub mod plants;
pub mod users;

use axum::http::header::LOCATION;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use sprout_core::types::DbId;

use crate::response::DataResponse;

/// Mount point of the versioned API; used to build `Location` headers.
pub const API_PREFIX: &str = "/api/v1";

/// `201 Created` with a `Location` header naming the new resource's detail URL.
pub(crate) fn created<T: Serialize>(collection: &str, id: DbId, data: T) -> Response {
    let location = format!("{API_PREFIX}/{collection}/{id}");
    (
        StatusCode::CREATED,
        [(LOCATION, location)],
        Json(DataResponse::ok(data)),
    )
        .into_response()
}
