//! PostgreSQL → C# type mapping.

/// C# type used for any PostgreSQL type the table does not know about.
pub const FALLBACK_TYPE: &str = "object";

const ARRAY_MARKER: &str = "[]";

/// Resolves a PostgreSQL `data_type` to the C# type used for properties and
/// parameters.
///
/// The lookup ignores ASCII case and surrounding whitespace, so the
/// upper-case `ARRAY` that `information_schema` reports for array columns
/// resolves to `Array` instead of falling back. Unknown types resolve to
/// [`FALLBACK_TYPE`]. Nullable columns get the `?` suffix unless the resolved
/// type is already a reference type (`string`, `Array`, or any `T[]`).
pub fn map_type(source_type: &str, is_nullable: bool) -> String {
    if let Some(base) = source_type.strip_suffix(ARRAY_MARKER) {
        let element = lookup(base).unwrap_or(FALLBACK_TYPE);
        return format!("{element}{ARRAY_MARKER}");
    }

    let mapped = lookup(source_type).unwrap_or(FALLBACK_TYPE);
    if is_nullable && !is_reference_type(mapped) {
        format!("{mapped}?")
    } else {
        mapped.to_string()
    }
}

fn is_reference_type(csharp_type: &str) -> bool {
    matches!(csharp_type, "string" | "Array") || csharp_type.ends_with(ARRAY_MARKER)
}

fn lookup(source_type: &str) -> Option<&'static str> {
    let mapped = match source_type.trim().to_ascii_lowercase().as_str() {
        "integer" => "int",
        "bigint" => "long",
        "smallint" => "short",
        "numeric" => "decimal",
        "real" => "float",
        "double precision" => "double",
        "boolean" => "bool",
        "character varying" | "varchar" | "character" | "char" | "text" => "string",
        "json" | "jsonb" => "string",
        "date" | "timestamp" | "timestamp without time zone" => "DateTime",
        "timestamp with time zone" | "time with time zone" => "DateTimeOffset",
        "time" | "time without time zone" | "interval" => "TimeSpan",
        "uuid" => "Guid",
        "bytea" => "byte[]",
        "bit" => "bool",
        "bit varying" => "BitArray",
        "money" => "decimal",
        "point" => "NpgsqlPoint",
        "line" => "NpgsqlLine",
        "lseg" => "NpgsqlLSeg",
        "box" => "NpgsqlBox",
        "path" => "NpgsqlPath",
        "polygon" => "NpgsqlPolygon",
        "circle" => "NpgsqlCircle",
        "cidr" => "IPNetwork",
        "inet" => "IPAddress",
        "macaddr" => "PhysicalAddress",
        "tsquery" => "NpgsqlTsQuery",
        "tsvector" => "NpgsqlTsVector",
        "xml" => "XmlDocument",
        "array" => "Array",
        _ => return None,
    };
    Some(mapped)
}

#[cfg(test)]
mod tests {
    use super::{FALLBACK_TYPE, map_type};

    #[test]
    fn maps_scalar_types() {
        assert_eq!(map_type("integer", false), "int");
        assert_eq!(map_type("bigint", false), "long");
        assert_eq!(map_type("numeric", false), "decimal");
        assert_eq!(map_type("timestamp with time zone", false), "DateTimeOffset");
        assert_eq!(map_type("uuid", false), "Guid");
        assert_eq!(map_type("inet", false), "IPAddress");
    }

    #[test]
    fn nullable_value_types_become_optional() {
        assert_eq!(map_type("integer", true), "int?");
        assert_eq!(map_type("numeric", true), "decimal?");
        assert_eq!(map_type("uuid", true), "Guid?");
    }

    #[test]
    fn nullable_reference_types_stay_as_is() {
        assert_eq!(map_type("character varying", true), "string");
        assert_eq!(map_type("jsonb", true), "string");
        assert_eq!(map_type("bytea", true), "byte[]");
        assert_eq!(map_type("ARRAY", true), "Array");
    }

    #[test]
    fn unknown_types_fall_back_to_object() {
        assert_eq!(map_type("hstore", false), FALLBACK_TYPE);
        assert_eq!(map_type("hstore", true), "object?");
        assert_eq!(map_type("", false), FALLBACK_TYPE);
    }

    #[test]
    fn array_types_wrap_the_element_type() {
        assert_eq!(map_type("integer[]", false), "int[]");
        assert_eq!(map_type("text[]", true), "string[]");
        assert_eq!(map_type("integer[]", true), "int[]");
        assert_eq!(map_type("hstore[]", false), "object[]");
    }

    #[test]
    fn lookup_ignores_case() {
        assert_eq!(map_type("INTEGER", false), "int");
        assert_eq!(map_type("Character Varying", false), "string");
    }

    #[test]
    fn every_known_type_maps_to_a_non_empty_name() {
        let known = [
            "integer", "bigint", "smallint", "numeric", "real", "double precision", "boolean",
            "character varying", "varchar", "character", "char", "text", "json", "jsonb", "date",
            "timestamp", "timestamp with time zone", "timestamp without time zone", "time",
            "time with time zone", "time without time zone", "uuid", "bytea", "bit",
            "bit varying", "money", "interval", "point", "line", "lseg", "box", "path",
            "polygon", "circle", "cidr", "inet", "macaddr", "tsquery", "tsvector", "xml", "array",
        ];
        for source in known {
            for nullable in [false, true] {
                let mapped = map_type(source, nullable);
                assert!(!mapped.is_empty());
                assert!(!mapped.starts_with(FALLBACK_TYPE), "{source} fell back");
                assert_eq!(mapped, map_type(source, nullable));
            }
        }
    }
}
