use askama::Template;

use crate::codegen::input::GenerationInput;

#[derive(Template)]
#[template(path = "csharp/repository_interface.cs.txt", escape = "none")]
struct RepositoryInterfaceTemplate<'a> {
    namespace: &'a str,
    class_name: &'a str,
    interface_name: String,
    key_type: String,
}

pub fn render(input: &GenerationInput<'_>) -> askama::Result<String> {
    RepositoryInterfaceTemplate {
        namespace: input.namespace,
        class_name: input.class_name,
        interface_name: input.repository_interface(),
        key_type: input.key_type(),
    }
    .render()
    .map(super::terminate)
}
