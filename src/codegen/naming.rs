/// Converts a snake_case identifier to PascalCase.
///
/// Each `_`-separated fragment keeps its first character upper-cased and the
/// rest lower-cased, so `USER_id` becomes `UserId`. Empty fragments vanish.
pub fn to_pascal_case(identifier: &str) -> String {
    identifier.split('_').map(capitalize).collect()
}

/// PascalCase with the first character lowered: `customer_id` → `customerId`.
pub fn to_camel_case(identifier: &str) -> String {
    let pascal = to_pascal_case(identifier);
    let mut chars = pascal.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Derives the class base name shared by every generated artifact.
///
/// The schema qualifier (everything up to the first `.`) is dropped. With
/// `trim_trailing_char` the last character is removed whatever it is, so the
/// caller decides whether the table name really ends in a plural `s`.
pub fn derive_class_base_name(logical_table_name: &str, trim_trailing_char: bool) -> String {
    let mut base = match logical_table_name.split_once('.') {
        Some((_, table)) => table.to_string(),
        None => logical_table_name.to_string(),
    };
    if trim_trailing_char {
        base.pop();
    }
    to_pascal_case(&base)
}

fn capitalize(fragment: &str) -> String {
    let mut chars = fragment.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
