use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::{
    db::{
        connection::{self, ConnectionStatus},
        schema::SchemaProvider,
    },
    error::AppError,
    services::generator_service::GeneratorService,
    state::AppState,
};

#[derive(Clone)]
pub struct ServiceContext {
    db: DatabaseConnection,
    schema_provider: Arc<dyn SchemaProvider>,
}

impl ServiceContext {
    pub fn new(db: &DatabaseConnection, schema_provider: Arc<dyn SchemaProvider>) -> Self {
        Self {
            db: db.clone(),
            schema_provider,
        }
    }

    pub fn from_state(state: &AppState) -> Self {
        Self::new(&state.db, Arc::clone(&state.schema_provider))
    }

    pub fn generator(&self) -> GeneratorService {
        GeneratorService::new(Arc::clone(&self.schema_provider))
    }

    pub async fn check_connection(&self) -> Result<ConnectionStatus, AppError> {
        connection::ping(&self.db).await.map_err(|err| {
            tracing::error!(error = %err, "database connection check failed");
            AppError::unexpected(err)
        })
    }
}
