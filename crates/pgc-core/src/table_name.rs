//! Strongly-typed table name wrapper.

use crate::newtype_string::define_newtype_string;

define_newtype_string! {
    /// A catalog-qualified table identifier.
    ///
    /// Treated as an opaque unique string; equality is case-sensitive,
    /// matching exactly what the catalog returned. Prevents accidental
    /// mixing of table names with trigger names or other string types.
    pub struct TableName;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_name_creation() {
        let name = TableName::new("orders");
        assert_eq!(name.as_str(), "orders");
    }

    #[test]
    fn test_table_name_try_new_empty() {
        assert!(TableName::try_new("").is_none());
        assert!(TableName::try_new("orders").is_some());
    }

    #[test]
    fn test_table_name_display() {
        let name = TableName::new("orders");
        assert_eq!(format!("{}", name), "orders");
    }

    #[test]
    fn test_table_name_case_sensitive() {
        assert_ne!(TableName::new("Orders"), TableName::new("orders"));
    }

    #[test]
    fn test_table_name_deref() {
        let name = TableName::new("stg_orders");
        assert_eq!(&*name, "stg_orders");
        // Can call str methods via Deref
        assert!(name.starts_with("stg_"));
    }

    #[test]
    fn test_table_name_equality() {
        let name = TableName::new("orders");
        assert_eq!(name, "orders");
        assert_eq!(name, "orders".to_string());
    }

    #[test]
    fn test_table_name_into_inner() {
        let name = TableName::new("orders");
        assert_eq!(name.into_inner(), "orders");
    }

    #[test]
    fn test_table_name_ord_is_lexicographic() {
        let mut names = vec![
            TableName::new("products"),
            TableName::new("categories"),
            TableName::new("customers"),
        ];
        names.sort();
        assert_eq!(names, vec!["categories", "customers", "products"]);
    }

    #[test]
    fn test_table_name_hash() {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(TableName::new("a"));
        set.insert(TableName::new("b"));
        set.insert(TableName::new("a")); // duplicate
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_table_name_borrow() {
        use std::collections::HashMap;
        let mut map: HashMap<TableName, i32> = HashMap::new();
        map.insert(TableName::new("orders"), 1);
        // Can look up by &str thanks to Borrow<str>
        assert_eq!(map.get("orders"), Some(&1));
    }

    #[test]
    fn test_table_name_serde_roundtrip() {
        let name = TableName::new("orders");
        let json = serde_json::to_string(&name).unwrap();
        assert_eq!(json, r#""orders""#);
        let deserialized: TableName = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, name);
    }

    #[test]
    fn test_table_name_deserialize_rejects_empty() {
        let result: Result<TableName, _> = serde_json::from_str(r#""""#);
        assert!(result.is_err());
    }
}
