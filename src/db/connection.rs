use std::time::Duration;

use sea_orm::{
    ConnectOptions, Database, DatabaseConnection, DbBackend, DbErr, FromQueryResult, Statement,
};
use serde::Serialize;
use tracing::info;

use crate::config::DatabaseConfig;

const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);
const PING_SQL: &str = "SELECT NOW()::text AS now";

pub async fn connect(cfg: &DatabaseConfig) -> anyhow::Result<DatabaseConnection> {
    let mut options = ConnectOptions::new(cfg.url.clone());
    options
        .max_connections(cfg.max_connections)
        .min_connections(cfg.min_idle)
        .connect_timeout(CONNECT_TIMEOUT)
        .sqlx_logging(false);

    let db = Database::connect(options).await?;
    info!(
        max_connections = cfg.max_connections,
        min_idle = cfg.min_idle,
        "database pool ready"
    );
    Ok(db)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConnectionStatus {
    pub success: bool,
    pub timestamp: String,
}

#[derive(Debug, FromQueryResult)]
struct NowRow {
    now: String,
}

/// Round-trips `SELECT NOW()` through the pool.
pub async fn ping(db: &DatabaseConnection) -> Result<ConnectionStatus, DbErr> {
    let row = NowRow::find_by_statement(Statement::from_string(
        DbBackend::Postgres,
        PING_SQL,
    ))
    .one(db)
    .await?
    .ok_or_else(|| DbErr::RecordNotFound("SELECT NOW() returned no row".to_string()))?;

    Ok(ConnectionStatus {
        success: true,
        timestamp: row.now,
    })
}
