use std::sync::Arc;

use axum::{Router, middleware};
use tower_http::trace::TraceLayer;

use crate::{
    middleware::{catch_panic_layer, json_error_middleware},
    state::AppState,
};

use super::{api, views};

pub const API_PREFIX: &str = "/api/v1";

/// Generator API under [`API_PREFIX`] plus the form page and its assets.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .nest(API_PREFIX, api::router(state.clone()))
        .merge(views::router(state))
}

/// [`router`] wrapped in the error normalization, panic and trace layers the
/// server runs with.
pub fn app(state: Arc<AppState>) -> Router {
    router(state)
        .layer(middleware::from_fn(json_error_middleware))
        .layer(catch_panic_layer())
        .layer(TraceLayer::new_for_http())
}
