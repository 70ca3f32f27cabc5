use askama::Template;

use crate::codegen::input::{GenerationInput, Property};

#[derive(Template)]
#[template(path = "csharp/entity.cs.txt", escape = "none")]
struct EntityTemplate<'a> {
    namespace: &'a str,
    class_name: &'a str,
    properties: Vec<Property>,
    parameters: String,
}

/// Entity class with private setters, a private constructor and a static
/// `Create` factory taking one parameter per column.
pub fn render(input: &GenerationInput<'_>) -> askama::Result<String> {
    let properties = input.properties();
    let parameters = properties
        .iter()
        .map(|property| format!("{} {}", property.ty, property.parameter))
        .collect::<Vec<_>>()
        .join(", ");

    EntityTemplate {
        namespace: input.namespace,
        class_name: input.class_name,
        properties,
        parameters,
    }
    .render()
    .map(super::terminate)
}

#[cfg(test)]
mod tests {
    use super::render;
    use crate::codegen::input::{GenerationInput, fixtures};

    #[test]
    fn declares_one_property_per_column() {
        let columns = fixtures::users_columns();
        let keys = fixtures::keys(&["id"]);
        let code = render(&GenerationInput {
            class_name: "User",
            table_name: "users",
            namespace: "Acme.Services",
            columns: &columns,
            primary_keys: &keys,
        })
        .expect("entity should render");

        assert!(code.contains("namespace Acme.Services.Entities"));
        assert!(code.contains("public class User"));
        assert!(code.contains("public int Id { get; private set; }"));
        assert!(code.contains("public string Name { get; private set; }"));
        assert!(code.contains("/// Id property (Primary Key)"));
        assert!(code.contains("/// Name property\n"));
        assert!(code.contains("private User() { }"));
        assert!(code.contains("public static User Create(int id, string name)"));
        assert!(code.contains("Id = id,"));
        assert!(code.contains("Name = name,"));
    }

    #[test]
    fn factory_parameters_are_camel_cased() {
        let columns = fixtures::orders_columns();
        let keys = fixtures::keys(&["id"]);
        let code = render(&GenerationInput {
            class_name: "Order",
            table_name: "public.orders",
            namespace: "Acme.Services",
            columns: &columns,
            primary_keys: &keys,
        })
        .expect("entity should render");

        assert!(code.contains("Create(int id, int customerId, decimal? total)"));
        assert!(code.contains("CustomerId = customerId,"));
        assert!(code.contains("public decimal? Total { get; private set; }"));
    }

    #[test]
    fn empty_table_still_renders_a_class() {
        let code = render(&GenerationInput {
            class_name: "Ghost",
            table_name: "ghosts",
            namespace: "Acme",
            columns: &[],
            primary_keys: &[],
        })
        .expect("entity should render");

        assert!(code.contains("public class Ghost"));
        assert!(code.contains("public static Ghost Create()"));
    }
}
