use askama::Template;

use crate::codegen::input::{GenerationInput, Property};

#[derive(Template)]
#[template(path = "csharp/commands.cs.txt", escape = "none")]
struct CommandsTemplate<'a> {
    namespace: &'a str,
    class_name: &'a str,
    properties: Vec<Property>,
    key_type: String,
}

pub fn render(input: &GenerationInput<'_>) -> askama::Result<String> {
    CommandsTemplate {
        namespace: input.namespace,
        class_name: input.class_name,
        properties: input.properties(),
        key_type: input.key_type(),
    }
    .render()
    .map(super::terminate)
}

#[cfg(test)]
mod tests {
    use super::render;
    use crate::codegen::input::{GenerationInput, fixtures};

    #[test]
    fn emits_create_update_and_delete_commands() {
        let columns = fixtures::orders_columns();
        let keys = fixtures::keys(&["id"]);
        let code = render(&GenerationInput {
            class_name: "Order",
            table_name: "public.orders",
            namespace: "Acme.Services",
            columns: &columns,
            primary_keys: &keys,
        })
        .expect("commands should render");

        assert!(code.contains("namespace Acme.Services.CQRS.Commands"));
        assert!(code.contains("public class CreateOrderCommand : IRequest<int>"));
        assert!(code.contains("public class UpdateOrderCommand : IRequest<bool>"));
        assert!(code.contains("public class DeleteOrderCommand : IRequest<bool>"));
        assert_eq!(code.matches("public decimal? Total { get; set; }").count(), 2);
        assert_eq!(code.matches("public int CustomerId { get; set; }").count(), 2);
        assert_eq!(code.matches("public int Id { get; set; }").count(), 3);
    }

    #[test]
    fn payload_properties_follow_column_order() {
        let columns = fixtures::orders_columns();
        let keys = fixtures::keys(&["id"]);
        let code = render(&GenerationInput {
            class_name: "Order",
            table_name: "orders",
            namespace: "Acme",
            columns: &columns,
            primary_keys: &keys,
        })
        .expect("commands should render");

        assert!(code.contains(
            "    {\n        public int Id { get; set; }\n        public int CustomerId { get; set; }\n        public decimal? Total { get; set; }\n    }"
        ));
    }
}
