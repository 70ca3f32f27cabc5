use askama::Template;

use crate::codegen::input::GenerationInput;

#[derive(Template)]
#[template(path = "csharp/handlers.cs.txt", escape = "none")]
struct HandlersTemplate<'a> {
    namespace: &'a str,
    class_name: &'a str,
    interface_name: String,
    arguments: String,
}

/// MediatR handlers for the three commands and two queries. Create and
/// Update rebuild the entity through its `Create` factory, one request
/// field per column.
pub fn render(input: &GenerationInput<'_>) -> askama::Result<String> {
    let arguments = input
        .properties()
        .iter()
        .map(|property| format!("request.{}", property.name))
        .collect::<Vec<_>>()
        .join(", ");

    HandlersTemplate {
        namespace: input.namespace,
        class_name: input.class_name,
        interface_name: input.repository_interface(),
        arguments,
    }
    .render()
    .map(super::terminate)
}
