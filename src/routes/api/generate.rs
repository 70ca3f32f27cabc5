use std::sync::Arc;

use axum::{Json, Router, extract::State, routing::post};
use serde::Deserialize;

use crate::{
    error::AppError,
    response::{ApiResult, JsonApiResponse},
    services::{
        ServiceContext,
        generator_service::{GenerationOutput, GenerationRequest},
    },
    state::AppState,
};

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GenerateBody {
    pub table_name: Option<String>,
    pub namespace: Option<String>,
    #[serde(rename = "ignoreLastSChar")]
    pub ignore_last_s_char: Option<bool>,
}

impl From<GenerateBody> for GenerationRequest {
    fn from(body: GenerateBody) -> Self {
        Self {
            table_name: body.table_name,
            namespace: body.namespace,
            trim_trailing_char: body.ignore_last_s_char.unwrap_or(false),
        }
    }
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/generate", post(generate))
        .route("/generate/bundle", post(generate_bundle))
        .with_state(state)
}

async fn generate(
    State(state): State<Arc<AppState>>,
    Json(body): Json<GenerateBody>,
) -> ApiResult<GenerationOutput> {
    let services = ServiceContext::from_state(state.as_ref());
    let output = services.generator().generate(&body.into()).await?;
    JsonApiResponse::ok(output)
}

/// Same as `/generate`, answered with the six sources as one plain-text file.
async fn generate_bundle(
    State(state): State<Arc<AppState>>,
    Json(body): Json<GenerateBody>,
) -> Result<String, AppError> {
    let services = ServiceContext::from_state(state.as_ref());
    let output = services.generator().generate(&body.into()).await?;
    Ok(output.generated_code.bundle())
}
