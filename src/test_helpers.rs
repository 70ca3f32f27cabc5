use std::sync::Arc;

use axum::Router;
use sea_orm::{DatabaseBackend, DatabaseConnection, MockDatabase};

use crate::{config::AppConfig, routes::app, state::AppState};

pub fn test_state(db: DatabaseConnection) -> Arc<AppState> {
    AppState::new(AppConfig::default(), db)
}

/// Full application over `db`, layered exactly like the binary.
pub fn test_app(db: DatabaseConnection) -> Router {
    app(test_state(db))
}

/// [`test_app`] over a mock database with no queued results; any query fails.
pub fn test_router() -> Router {
    test_app(MockDatabase::new(DatabaseBackend::Postgres).into_connection())
}
