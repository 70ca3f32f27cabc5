use std::sync::Arc;

use axum::Router;

use crate::state::AppState;

use super::{connection, generate};

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .merge(generate::router(state.clone()))
        .merge(connection::router(state))
}
