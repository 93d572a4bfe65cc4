//! SQL identifier quoting utilities
//!
//! Catalog-sourced names flow into dynamically built COPY statements; quoting
//! keeps mixed-case and keyword-colliding identifiers valid.

/// Quote a SQL identifier.
///
/// Wraps the identifier in double quotes and escapes any embedded double
/// quotes by doubling them, following the SQL standard.
///
/// # Examples
/// ```
/// use pgc_core::sql_utils::quote_ident;
/// assert_eq!(quote_ident("orders"), r#""orders""#);
/// assert_eq!(quote_ident(r#"my"table"#), r#""my""table""#);
/// ```
pub fn quote_ident(ident: &str) -> String {
    format!("\"{}\"", ident.replace('"', "\"\""))
}

/// Quote a potentially schema-qualified name (e.g. `schema.table`).
///
/// Splits on `.` and individually quotes each component.
///
/// # Examples
/// ```
/// use pgc_core::sql_utils::quote_qualified;
/// assert_eq!(quote_qualified("orders"), r#""orders""#);
/// assert_eq!(quote_qualified("staging.orders"), r#""staging"."orders""#);
/// ```
pub fn quote_qualified(name: &str) -> String {
    name.split('.')
        .map(quote_ident)
        .collect::<Vec<_>>()
        .join(".")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_ident_simple() {
        assert_eq!(quote_ident("orders"), r#""orders""#);
    }

    #[test]
    fn test_quote_ident_mixed_case() {
        assert_eq!(quote_ident("Orders"), r#""Orders""#);
    }

    #[test]
    fn test_quote_ident_with_embedded_quotes() {
        assert_eq!(quote_ident(r#"my"table"#), r#""my""table""#);
    }

    #[test]
    fn test_quote_qualified_simple() {
        assert_eq!(quote_qualified("orders"), r#""orders""#);
    }

    #[test]
    fn test_quote_qualified_two_parts() {
        assert_eq!(quote_qualified("staging.orders"), r#""staging"."orders""#);
    }
}
