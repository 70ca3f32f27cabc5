use std::sync::Arc;

use axum::{Router, extract::State, routing::get};

use crate::{
    db::connection::ConnectionStatus,
    response::{ApiResult, JsonApiResponse},
    services::ServiceContext,
    state::AppState,
};

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/connection", get(check_connection))
        .with_state(state)
}

async fn check_connection(State(state): State<Arc<AppState>>) -> ApiResult<ConnectionStatus> {
    let services = ServiceContext::from_state(state.as_ref());
    JsonApiResponse::ok(services.check_connection().await?)
}
