//! Shared query parameter types for API handlers.

use serde::Deserialize;
use sprout_core::types::DbId;

/// Pagination plus optional owner filter (`?owner_id=&limit=&offset=`).
///
/// Values are clamped in the repository layer via
/// `sprout_core::pagination::{clamp_limit, clamp_offset}`.
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    pub owner_id: Option<DbId>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// Generic pagination parameters (`?limit=&offset=`).
#[derive(Debug, Default, Deserialize)]
pub struct PaginationParams {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}
