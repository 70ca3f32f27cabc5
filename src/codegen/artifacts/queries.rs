use askama::Template;

use crate::codegen::input::GenerationInput;

#[derive(Template)]
#[template(path = "csharp/queries.cs.txt", escape = "none")]
struct QueriesTemplate<'a> {
    namespace: &'a str,
    class_name: &'a str,
    key_type: String,
}

pub fn render(input: &GenerationInput<'_>) -> askama::Result<String> {
    QueriesTemplate {
        namespace: input.namespace,
        class_name: input.class_name,
        key_type: input.key_type(),
    }
    .render()
    .map(super::terminate)
}
