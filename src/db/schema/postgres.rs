use async_trait::async_trait;
use sea_orm::{DatabaseConnection, DbBackend, FromQueryResult, Statement};
use tracing::debug;

use super::{
    ColumnDescriptor, TableRef, TableSchema,
    provider::{SchemaError, SchemaProvider, SchemaResult},
};

// information_schema exposes domain types (sql_identifier, yes_or_no, ...);
// cast them so the driver decodes plain text and int4.
pub(crate) const COLUMNS_SQL: &str = r#"
SELECT
    column_name::text AS column_name,
    data_type::text AS data_type,
    character_maximum_length::int4 AS character_maximum_length,
    (is_nullable::text = 'YES') AS is_nullable,
    column_default::text AS column_default,
    udt_name::text AS udt_name
FROM information_schema.columns
WHERE table_name = $1
  AND table_schema = $2
ORDER BY ordinal_position"#;

pub(crate) const PRIMARY_KEY_SQL: &str = r#"
SELECT
    c.column_name::text AS column_name
FROM information_schema.table_constraints tc
JOIN information_schema.constraint_column_usage AS ccu
    USING (constraint_schema, constraint_name)
JOIN information_schema.columns AS c
    ON c.table_schema = tc.constraint_schema
    AND tc.table_name = c.table_name
    AND ccu.column_name = c.column_name
WHERE tc.constraint_type = 'PRIMARY KEY'
  AND tc.table_name = $1
  AND tc.table_schema = $2"#;

#[derive(Debug, FromQueryResult)]
struct PrimaryKeyRow {
    column_name: String,
}

/// Reads table metadata from `information_schema` over the shared pool.
#[derive(Clone)]
pub struct PostgresSchemaProvider {
    db: DatabaseConnection,
}

impl PostgresSchemaProvider {
    pub fn new(db: &DatabaseConnection) -> Self {
        Self { db: db.clone() }
    }

    fn statement(sql: &str, table: &TableRef) -> Statement {
        Statement::from_sql_and_values(
            DbBackend::Postgres,
            sql,
            [table.table.clone().into(), table.schema.clone().into()],
        )
    }
}

#[async_trait]
impl SchemaProvider for PostgresSchemaProvider {
    async fn table_schema(&self, table: &TableRef) -> SchemaResult<TableSchema> {
        debug!(schema = %table.schema, table = %table.table, "reading table metadata");

        let columns = ColumnDescriptor::find_by_statement(Self::statement(COLUMNS_SQL, table))
            .all(&self.db)
            .await
            .map_err(|source| SchemaError::Columns {
                table: table.logical_name.clone(),
                source,
            })?;

        let primary_keys = PrimaryKeyRow::find_by_statement(Self::statement(PRIMARY_KEY_SQL, table))
            .all(&self.db)
            .await
            .map_err(|source| SchemaError::PrimaryKey {
                table: table.logical_name.clone(),
                source,
            })?
            .into_iter()
            .map(|row| row.column_name)
            .collect();

        Ok(TableSchema::new(
            table.logical_name.clone(),
            columns,
            primary_keys,
        ))
    }
}
