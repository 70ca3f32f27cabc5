//! C# source generation from table metadata.
//!
//! Every generator is a pure function of [`GenerationInput`]: the same input
//! always renders byte-identical text, and no generator depends on another.

pub mod artifacts;
pub mod input;
pub mod naming;
pub mod type_map;

use serde::Serialize;

pub use input::{GenerationInput, Property};
pub use naming::{derive_class_base_name, to_camel_case, to_pascal_case};
pub use type_map::map_type;

/// The six generated sources.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedCode {
    pub entity: String,
    pub interface: String,
    pub repository: String,
    pub commands: String,
    pub queries: String,
    pub handlers: String,
}

impl GeneratedCode {
    /// All six sources in one text, each under a `//` header line.
    pub fn bundle(&self) -> String {
        self.sections()
            .iter()
            .map(|(title, code)| format!("// {title}\n{code}"))
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    fn sections(&self) -> [(&'static str, &str); 6] {
        [
            ("Entity Class", self.entity.as_str()),
            ("Repository Interface", self.interface.as_str()),
            ("Repository Implementation", self.repository.as_str()),
            ("Commands", self.commands.as_str()),
            ("Queries", self.queries.as_str()),
            ("Handlers", self.handlers.as_str()),
        ]
    }
}

pub fn generate_all(input: &GenerationInput<'_>) -> askama::Result<GeneratedCode> {
    Ok(GeneratedCode {
        entity: artifacts::entity::render(input)?,
        interface: artifacts::repository_interface::render(input)?,
        repository: artifacts::repository::render(input)?,
        commands: artifacts::commands::render(input)?,
        queries: artifacts::queries::render(input)?,
        handlers: artifacts::handlers::render(input)?,
    })
}

#[cfg(test)]
mod tests {
    use super::{GenerationInput, generate_all};
    use crate::{codegen::input::fixtures, db::schema::ColumnDescriptor};

    fn generate(columns: &[ColumnDescriptor], keys: &[String]) -> super::GeneratedCode {
        generate_all(&GenerationInput {
            class_name: "Order",
            table_name: "public.orders",
            namespace: "Acme.Services",
            columns,
            primary_keys: keys,
        })
        .expect("generation should succeed")
    }

    #[test]
    fn output_is_deterministic() {
        let columns = fixtures::orders_columns();
        let keys = fixtures::keys(&["id"]);

        assert_eq!(generate(&columns, &keys), generate(&columns, &keys));
    }

    #[test]
    fn permuting_columns_permutes_every_artifact_alike() {
        let columns = fixtures::orders_columns();
        let mut reversed = columns.clone();
        reversed.reverse();
        let keys = fixtures::keys(&["id"]);

        let forward = generate(&columns, &keys);
        let backward = generate(&reversed, &keys);

        assert!(forward.entity.contains("Create(int id, int customerId, decimal? total)"));
        assert!(backward.entity.contains("Create(decimal? total, int customerId, int id)"));
        assert!(backward.repository.contains("INSERT INTO public.orders (total, customer_id, id)"));
        assert!(backward.repository.contains("VALUES (@Total, @CustomerId, @Id)"));
        assert!(backward.handlers.contains("Order.Create(request.Total, request.CustomerId, request.Id)"));

        let total = backward.commands.find("decimal? Total").expect("total property");
        let id = backward.commands.find("int Id").expect("id property");
        assert!(total < id);
    }

    #[test]
    fn bundle_concatenates_sections_in_order() {
        let columns = fixtures::users_columns();
        let keys = fixtures::keys(&["id"]);
        let code = generate(&columns, &keys);
        let bundle = code.bundle();

        assert!(bundle.starts_with("// Entity Class\n"));
        assert!(bundle.contains(&format!("// Entity Class\n{}\n\n// Repository Interface\n", code.entity)));
        let headers = [
            "// Entity Class",
            "// Repository Interface",
            "// Repository Implementation",
            "// Commands",
            "// Queries",
            "// Handlers",
        ];
        let positions: Vec<usize> = headers
            .iter()
            .map(|header| bundle.find(header).expect("header present"))
            .collect();
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
        assert!(bundle.ends_with(&code.handlers));
    }

    #[test]
    fn empty_schema_degrades_to_empty_lists() {
        let code = generate(&[], &[]);

        assert!(code.repository.contains("INSERT INTO public.orders ()"));
        assert!(code.entity.contains("public static Order Create()"));
        assert!(code.handlers.contains("Order.Create()"));
    }
}
