use askama::Template;

use crate::codegen::{input::GenerationInput, naming::to_pascal_case};

#[derive(Template)]
#[template(path = "csharp/repository.cs.txt", escape = "none")]
struct RepositoryTemplate<'a> {
    namespace: &'a str,
    class_name: &'a str,
    table_name: &'a str,
    interface_name: String,
    key_type: String,
    key_column: &'a str,
    key_property: String,
    insert_columns: String,
    insert_parameters: String,
    update_assignments: String,
    returning_key: bool,
}

/// Dapper repository over an injected `IUnitOfWork`.
///
/// `AddAsync` returns the generated key through `RETURNING` only when the key
/// column is sequence-backed; otherwise it reports `1`.
pub fn render(input: &GenerationInput<'_>) -> askama::Result<String> {
    let key_column = input.key_column_name();
    let properties = input.properties();

    let insert_columns = properties
        .iter()
        .map(|property| property.column.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    let insert_parameters = properties
        .iter()
        .map(|property| format!("@{}", property.name))
        .collect::<Vec<_>>()
        .join(", ");
    let update_assignments = properties
        .iter()
        .filter(|property| !property.primary_key)
        .map(|property| format!("{} = @{}", property.column, property.name))
        .collect::<Vec<_>>()
        .join(", ");

    RepositoryTemplate {
        namespace: input.namespace,
        class_name: input.class_name,
        table_name: input.table_name,
        interface_name: input.repository_interface(),
        key_type: input.key_type(),
        key_column,
        key_property: to_pascal_case(key_column),
        insert_columns,
        insert_parameters,
        update_assignments,
        returning_key: input.key_is_auto_increment(),
    }
    .render()
    .map(super::terminate)
}
