use std::sync::Arc;

use sprout_db::store::PgStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
/// It holds no per-user data: the acting user travels with each request.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: sprout_db::DbPool,
    /// Server configuration (JWT settings are read by the auth extractors).
    pub config: Arc<ServerConfig>,
}

impl AppState {
    /// An [`EntityStore`](sprout_db::store::EntityStore) over repository `R`,
    /// sharing this state's pool.
    pub fn store<R>(&self) -> PgStore<R> {
        PgStore::new(self.pool.clone())
    }
}
