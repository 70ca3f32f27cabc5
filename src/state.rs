use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::{
    config::AppConfig,
    db::schema::{PostgresSchemaProvider, SchemaProvider},
};

#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub db: DatabaseConnection,
    pub schema_provider: Arc<dyn SchemaProvider>,
}

impl AppState {
    pub fn new(config: AppConfig, db: DatabaseConnection) -> Arc<Self> {
        let schema_provider = Arc::new(PostgresSchemaProvider::new(&db));
        Self::with_provider(config, db, schema_provider)
    }

    pub fn with_provider(
        config: AppConfig,
        db: DatabaseConnection,
        schema_provider: Arc<dyn SchemaProvider>,
    ) -> Arc<Self> {
        Arc::new(Self {
            config,
            db,
            schema_provider,
        })
    }
}
