use sea_orm::FromQueryResult;
use serde::{Deserialize, Serialize};

pub const DEFAULT_SCHEMA: &str = "public";

/// One row of `information_schema.columns`, in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromQueryResult)]
pub struct ColumnDescriptor {
    pub column_name: String,
    pub data_type: String,
    pub character_maximum_length: Option<i32>,
    pub is_nullable: bool,
    pub column_default: Option<String>,
    pub udt_name: String,
}

impl ColumnDescriptor {
    pub fn new(column_name: impl Into<String>, data_type: impl Into<String>, is_nullable: bool) -> Self {
        let data_type = data_type.into();
        Self {
            column_name: column_name.into(),
            udt_name: data_type.clone(),
            data_type,
            character_maximum_length: None,
            is_nullable,
            column_default: None,
        }
    }

    pub fn with_default(mut self, column_default: impl Into<String>) -> Self {
        self.column_default = Some(column_default.into());
        self
    }
}

/// Columns and primary key of a single table, as reported by the database.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TableSchema {
    pub success: bool,
    pub table_name: String,
    pub columns: Vec<ColumnDescriptor>,
    pub primary_keys: Vec<String>,
}

impl TableSchema {
    pub fn new(
        table_name: impl Into<String>,
        columns: Vec<ColumnDescriptor>,
        primary_keys: Vec<String>,
    ) -> Self {
        Self {
            success: true,
            table_name: table_name.into(),
            columns,
            primary_keys,
        }
    }
}

/// A user-supplied table name split into schema and table parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRef {
    pub logical_name: String,
    pub schema: String,
    pub table: String,
}

impl TableRef {
    /// `sales.orders` → schema `sales`, table `orders`; an unqualified name
    /// lives in `public`. Only the first `.` separates.
    pub fn parse(logical_name: &str) -> Self {
        let (schema, table) = match logical_name.split_once('.') {
            Some((schema, table)) => (schema.to_string(), table.to_string()),
            None => (DEFAULT_SCHEMA.to_string(), logical_name.to_string()),
        };
        Self {
            logical_name: logical_name.to_string(),
            schema,
            table,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::TableRef;

    #[test]
    fn unqualified_names_default_to_public() {
        let table = TableRef::parse("orders");
        assert_eq!(table.schema, "public");
        assert_eq!(table.table, "orders");
        assert_eq!(table.logical_name, "orders");
    }

    #[test]
    fn qualified_names_split_on_first_period() {
        let table = TableRef::parse("sales.orders");
        assert_eq!(table.schema, "sales");
        assert_eq!(table.table, "orders");

        let nested = TableRef::parse("a.b.c");
        assert_eq!(nested.schema, "a");
        assert_eq!(nested.table, "b.c");
    }
}
