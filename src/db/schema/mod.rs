mod model;
mod postgres;
mod provider;

pub use model::{ColumnDescriptor, DEFAULT_SCHEMA, TableRef, TableSchema};
pub use postgres::PostgresSchemaProvider;
pub use provider::{SchemaError, SchemaProvider, SchemaResult};
