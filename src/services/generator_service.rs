use std::sync::Arc;

use serde::Serialize;
use tracing::{info, warn};

use crate::{
    codegen::{self, GeneratedCode, GenerationInput, derive_class_base_name},
    db::schema::{SchemaProvider, TableRef, TableSchema},
    error::AppError,
    logging::GENERATOR_TARGET,
};

/// What the user asked for, before validation.
#[derive(Debug, Clone, Default)]
pub struct GenerationRequest {
    pub table_name: Option<String>,
    pub namespace: Option<String>,
    pub trim_trailing_char: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationOutput {
    pub schema: TableSchema,
    pub generated_code: GeneratedCode,
}

#[derive(Clone)]
pub struct GeneratorService {
    schema_provider: Arc<dyn SchemaProvider>,
}

impl GeneratorService {
    pub fn new(schema_provider: Arc<dyn SchemaProvider>) -> Self {
        Self { schema_provider }
    }

    /// Looks up the table and renders all six sources.
    ///
    /// Required fields are checked before the schema provider is touched.
    pub async fn generate(&self, request: &GenerationRequest) -> Result<GenerationOutput, AppError> {
        let table_name = required(request.table_name.as_deref(), "Table name is required")?;
        let namespace = required(request.namespace.as_deref(), "Namespace is required")?;

        let schema = self
            .schema_provider
            .table_schema(&TableRef::parse(table_name))
            .await?;
        if schema.columns.is_empty() {
            warn!(
                target: GENERATOR_TARGET,
                table = %schema.table_name,
                "table has no columns; generating empty sources"
            );
        }

        let class_name = derive_class_base_name(&schema.table_name, request.trim_trailing_char);
        let generated_code = codegen::generate_all(&GenerationInput {
            class_name: &class_name,
            table_name: &schema.table_name,
            namespace,
            columns: &schema.columns,
            primary_keys: &schema.primary_keys,
        })?;

        info!(
            target: GENERATOR_TARGET,
            table = %schema.table_name,
            class = %class_name,
            columns = schema.columns.len(),
            "generated sources"
        );

        Ok(GenerationOutput {
            schema,
            generated_code,
        })
    }
}

fn required<'a>(value: Option<&'a str>, message: &'static str) -> Result<&'a str, AppError> {
    match value.map(str::trim) {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(AppError::bad_request(message)),
    }
}
