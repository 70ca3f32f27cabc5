use async_trait::async_trait;
use sea_orm::DbErr;
use thiserror::Error;

use super::{TableRef, TableSchema};

#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("failed to read columns of {table}: {source}")]
    Columns {
        table: String,
        #[source]
        source: DbErr,
    },
    #[error("failed to read primary key of {table}: {source}")]
    PrimaryKey {
        table: String,
        #[source]
        source: DbErr,
    },
}

pub type SchemaResult<T> = Result<T, SchemaError>;

/// Source of table metadata for code generation.
///
/// A table that does not exist is not an error: implementations return a
/// schema with no columns and no primary key.
#[async_trait]
pub trait SchemaProvider: Send + Sync {
    async fn table_schema(&self, table: &TableRef) -> SchemaResult<TableSchema>;
}
