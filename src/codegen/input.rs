use crate::db::schema::ColumnDescriptor;

use super::{
    naming::{to_camel_case, to_pascal_case},
    type_map::map_type,
};

/// Primary key type used when no column of the table is a primary key.
pub const DEFAULT_KEY_TYPE: &str = "int";
/// Primary key column used in SQL when no column of the table is a primary key.
pub const DEFAULT_KEY_COLUMN: &str = "id";
/// Substring of a column default that marks a sequence-backed key.
pub const AUTO_INCREMENT_MARKER: &str = "nextval";

/// Everything a generator needs, already normalized by the caller.
#[derive(Debug, Clone, Copy)]
pub struct GenerationInput<'a> {
    /// Class base name shared by every artifact (`Order`).
    pub class_name: &'a str,
    /// Table name as written in generated SQL (`public.orders`).
    pub table_name: &'a str,
    pub namespace: &'a str,
    pub columns: &'a [ColumnDescriptor],
    pub primary_keys: &'a [String],
}

/// A column seen from the C# side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    pub column: String,
    pub name: String,
    pub parameter: String,
    pub ty: String,
    pub primary_key: bool,
}

impl<'a> GenerationInput<'a> {
    pub fn is_primary_key(&self, column: &ColumnDescriptor) -> bool {
        self.primary_keys.contains(&column.column_name)
    }

    /// First column, in column order, listed in the primary key.
    ///
    /// Composite keys are reduced to that column.
    pub fn key_column(&self) -> Option<&'a ColumnDescriptor> {
        self.columns.iter().find(|column| self.is_primary_key(column))
    }

    pub fn key_type(&self) -> String {
        self.key_column()
            .map(|column| map_type(&column.data_type, column.is_nullable))
            .unwrap_or_else(|| DEFAULT_KEY_TYPE.to_string())
    }

    pub fn key_column_name(&self) -> &'a str {
        self.key_column()
            .map(|column| column.column_name.as_str())
            .unwrap_or(DEFAULT_KEY_COLUMN)
    }

    pub fn key_is_auto_increment(&self) -> bool {
        self.key_column()
            .and_then(|column| column.column_default.as_deref())
            .is_some_and(|default| default.contains(AUTO_INCREMENT_MARKER))
    }

    pub fn properties(&self) -> Vec<Property> {
        self.columns
            .iter()
            .map(|column| Property {
                column: column.column_name.clone(),
                name: to_pascal_case(&column.column_name),
                parameter: to_camel_case(&column.column_name),
                ty: map_type(&column.data_type, column.is_nullable),
                primary_key: self.is_primary_key(column),
            })
            .collect()
    }

    pub fn repository_interface(&self) -> String {
        format!("I{}Repository", self.class_name)
    }
}


#[cfg(test)]
mod tests {
    use super::{GenerationInput, fixtures};
    use crate::db::schema::ColumnDescriptor;

    fn input<'a>(columns: &'a [ColumnDescriptor], keys: &'a [String]) -> GenerationInput<'a> {
        GenerationInput {
            class_name: "Order",
            table_name: "public.orders",
            namespace: "Acme.Services",
            columns,
            primary_keys: keys,
        }
    }

    #[test]
    fn resolves_key_from_first_matching_column() {
        let columns = fixtures::orders_columns();
        let keys = fixtures::keys(&["customer_id", "id"]);
        let input = input(&columns, &keys);

        assert_eq!(input.key_column_name(), "id");
        assert_eq!(input.key_type(), "int");
        assert!(input.key_is_auto_increment());
    }

    #[test]
    fn falls_back_when_no_key_matches() {
        let columns = fixtures::orders_columns();
        let keys = fixtures::keys(&["missing"]);
        let input = input(&columns, &keys);

        assert!(input.key_column().is_none());
        assert_eq!(input.key_column_name(), "id");
        assert_eq!(input.key_type(), "int");
        assert!(!input.key_is_auto_increment());
    }

    #[test]
    fn key_type_follows_the_column_type() {
        let columns = vec![ColumnDescriptor::new("code", "uuid", false)];
        let keys = fixtures::keys(&["code"]);

        assert_eq!(input(&columns, &keys).key_type(), "Guid");
    }

    #[test]
    fn properties_keep_column_order() {
        let columns = fixtures::orders_columns();
        let keys = fixtures::keys(&["id"]);
        let properties = input(&columns, &keys).properties();

        let rendered: Vec<(&str, &str, &str)> = properties
            .iter()
            .map(|p| (p.name.as_str(), p.parameter.as_str(), p.ty.as_str()))
            .collect();
        assert_eq!(
            rendered,
            [
                ("Id", "id", "int"),
                ("CustomerId", "customerId", "int"),
                ("Total", "total", "decimal?"),
            ]
        );
        assert!(properties[0].primary_key);
        assert!(!properties[1].primary_key);
    }
}
