use super::*;
use crate::mock::MockDatabase;

fn t(name: &str) -> TableName {
    TableName::new(name)
}

fn resolver(db: MockDatabase) -> DependencyResolver {
    DependencyResolver::new(Arc::new(db))
}

#[tokio::test]
async fn test_resolve_excludes_start() {
    let db = MockDatabase::new().with_foreign_key("orders", "customers");

    let plan = resolver(db).resolve(&t("orders")).await.unwrap();
    assert_eq!(plan.start, "orders");
    assert!(!plan.tables.contains(&t("orders")));
    assert_eq!(plan.tables, vec![t("customers")]);
}

#[tokio::test]
async fn test_resolve_without_foreign_keys_is_empty() {
    let db = MockDatabase::new();

    let plan = resolver(db).resolve(&t("standalone")).await.unwrap();
    assert!(plan.is_empty());
    assert!(plan.tables.is_empty());
}

#[tokio::test]
async fn test_resolve_sorts_lexicographically() {
    // Discovery order is customers, products, categories; the plan is
    // sorted by name regardless.
    let db = MockDatabase::new()
        .with_foreign_key("orders", "customers")
        .with_foreign_key("orders", "products")
        .with_foreign_key("products", "categories");

    let plan = resolver(db).resolve(&t("orders")).await.unwrap();
    assert_eq!(
        plan.tables,
        vec![t("categories"), t("customers"), t("products")]
    );
}

#[tokio::test]
async fn test_resolve_is_ancestor_only() {
    // invoices references orders; resolving orders must not pull it in
    let db = MockDatabase::new()
        .with_foreign_key("orders", "customers")
        .with_foreign_key("invoices", "orders");

    let plan = resolver(db).resolve(&t("orders")).await.unwrap();
    assert_eq!(plan.tables, vec![t("customers")]);
}

#[tokio::test]
async fn test_resolve_terminates_on_self_cycle() {
    let db = MockDatabase::new()
        .with_foreign_key("employees", "employees")
        .with_foreign_key("employees", "departments");

    let plan = resolver(db).resolve(&t("employees")).await.unwrap();
    assert_eq!(plan.tables, vec![t("departments")]);
}

#[tokio::test]
async fn test_resolve_terminates_on_cycle_through_start() {
    let db = MockDatabase::new()
        .with_foreign_key("a", "b")
        .with_foreign_key("b", "a");

    let plan = resolver(db).resolve(&t("a")).await.unwrap();
    assert_eq!(plan.tables, vec![t("b")]);
    assert!(plan.graph.has_cycle());
}

#[tokio::test]
async fn test_resolve_deduplicates_diamond() {
    let db = MockDatabase::new()
        .with_foreign_key("orders", "billing")
        .with_foreign_key("orders", "shipping")
        .with_foreign_key("billing", "addresses")
        .with_foreign_key("shipping", "addresses");

    let plan = resolver(db).resolve(&t("orders")).await.unwrap();
    assert_eq!(
        plan.tables,
        vec![t("addresses"), t("billing"), t("shipping")]
    );
}

#[tokio::test]
async fn test_resolve_is_idempotent() {
    let db = Arc::new(
        MockDatabase::new()
            .with_foreign_key("orders", "customers")
            .with_foreign_key("orders", "products")
            .with_foreign_key("products", "categories"),
    );
    let resolver = DependencyResolver::new(db);

    let first = resolver.resolve(&t("orders")).await.unwrap();
    let second = resolver.resolve(&t("orders")).await.unwrap();
    assert_eq!(first.tables, second.tables);
}

#[tokio::test]
async fn test_copy_order_appends_start_last() {
    let db = MockDatabase::new().with_foreign_key("orders", "customers");

    let plan = resolver(db).resolve(&t("orders")).await.unwrap();
    assert_eq!(plan.copy_order(), vec![t("customers"), t("orders")]);
}

#[tokio::test]
async fn test_plan_graph_exposes_direct_references() {
    let db = MockDatabase::new()
        .with_foreign_key("orders", "products")
        .with_foreign_key("orders", "customers")
        .with_foreign_key("products", "categories");

    let plan = resolver(db).resolve(&t("orders")).await.unwrap();
    assert_eq!(
        plan.graph.direct_references(&t("orders")),
        vec![t("customers"), t("products")]
    );
    assert_eq!(
        plan.graph.direct_references(&t("products")),
        vec![t("categories")]
    );
}
