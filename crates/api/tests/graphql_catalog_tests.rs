//! End-to-end catalog tests executed directly against the schema.
//!
//! These need a Postgres database; point TEST_DATABASE_URL at one and run
//! with `cargo test -- --ignored --test-threads=1`.

mod common;

use async_graphql::Variables;
use common::{execute_graphql, setup_test_db, test_schema};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde_json::json;

use api::gql::domains::categories::validation::slugify;
use infra::repos::{categories, NewCategory};

fn unique(prefix: &str) -> String {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("clock before epoch")
        .as_nanos();
    format!("{prefix} {nanos}")
}

async fn create_category(db: &sqlx::PgPool, name: &str, parent_id: Option<i32>) -> i32 {
    let row = categories::insert(
        db,
        NewCategory {
            name: name.to_owned(),
            slug: slugify(name),
            description: String::new(),
            parent_id,
        },
    )
    .await
    .expect("Failed to create category");
    row.id
}

async fn create_product_type(db: &sqlx::PgPool, name: &str) -> i32 {
    sqlx::query_scalar("INSERT INTO product_types (name) VALUES ($1) RETURNING id")
        .bind(name)
        .fetch_one(db)
        .await
        .expect("Failed to create product type")
}

async fn create_product(
    db: &sqlx::PgPool,
    type_id: i32,
    category_id: i32,
    name: &str,
    price: Decimal,
) -> i32 {
    sqlx::query_scalar(
        "INSERT INTO products (product_type_id, category_id, name, slug, price)
         VALUES ($1, $2, $3, $4, $5) RETURNING id",
    )
    .bind(type_id)
    .bind(category_id)
    .bind(name)
    .bind(slugify(name))
    .bind(price)
    .fetch_one(db)
    .await
    .expect("Failed to create product")
}

async fn create_attribute(db: &sqlx::PgPool, name: &str) -> i32 {
    sqlx::query_scalar("INSERT INTO product_attributes (name, slug) VALUES ($1, $2) RETURNING id")
        .bind(name)
        .bind(slugify(name))
        .fetch_one(db)
        .await
        .expect("Failed to create attribute")
}

async fn create_attribute_value(db: &sqlx::PgPool, attribute_id: i32, slug: &str) -> i32 {
    sqlx::query_scalar(
        "INSERT INTO attribute_values (attribute_id, name, slug) VALUES ($1, $2, $3) RETURNING id",
    )
    .bind(attribute_id)
    .bind(slug)
    .bind(slug)
    .fetch_one(db)
    .await
    .expect("Failed to create attribute value")
}

async fn link_type_attribute(db: &sqlx::PgPool, type_id: i32, attribute_id: i32) {
    sqlx::query("INSERT INTO product_type_attributes (product_type_id, attribute_id) VALUES ($1, $2)")
        .bind(type_id)
        .bind(attribute_id)
        .execute(db)
        .await
        .expect("Failed to link attribute to product type");
}

async fn link_product_value(db: &sqlx::PgPool, product_id: i32, value_id: i32) {
    sqlx::query(
        "INSERT INTO product_attribute_values (product_id, attribute_value_id) VALUES ($1, $2)",
    )
    .bind(product_id)
    .bind(value_id)
    .execute(db)
    .await
    .expect("Failed to link value to product");
}

async fn category_count(db: &sqlx::PgPool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM categories")
        .fetch_one(db)
        .await
        .expect("Failed to count categories")
}

const CATEGORY_MUTATION_FIELDS: &str = r#"
    category {
        pk
        name
        slug
        description
        parent {
            pk
        }
    }
    errors {
        field
        message
    }
"#;

#[tokio::test]
#[ignore = "requires a Postgres test database (TEST_DATABASE_URL)"]
async fn category_query_returns_entity_and_counts() {
    let state = setup_test_db().await;
    let schema = test_schema(state.clone());

    let name = unique("Query category");
    let pk = create_category(&state.db, &name, None).await;

    let query = r#"
        query($pk: Int!) {
            category(pk: $pk) {
                pk
                name
                productsCount
                children {
                    pk
                }
            }
        }
    "#;
    let resp = execute_graphql(
        &schema,
        query,
        Some(Variables::from_json(json!({ "pk": pk }))),
    )
    .await;

    assert!(resp.errors.is_empty(), "{:?}", resp.errors);
    let data = resp.data.into_json().unwrap();
    let category = &data["category"];
    assert_eq!(category["pk"].as_i64().unwrap() as i32, pk);
    assert_eq!(category["name"], json!(name));
    assert_eq!(category["productsCount"], json!(0));
    assert_eq!(category["children"], json!([]));
}

#[tokio::test]
#[ignore = "requires a Postgres test database (TEST_DATABASE_URL)"]
async fn unknown_category_resolves_to_null() {
    let state = setup_test_db().await;
    let schema = test_schema(state);

    let resp = execute_graphql(&schema, "query { category(pk: -1) { pk name } }", None).await;

    assert!(resp.errors.is_empty(), "{:?}", resp.errors);
    let data = resp.data.into_json().unwrap();
    assert!(data["category"].is_null());
}

#[tokio::test]
#[ignore = "requires a Postgres test database (TEST_DATABASE_URL)"]
async fn categories_lists_direct_children_only() {
    let state = setup_test_db().await;
    let schema = test_schema(state.clone());

    let root = create_category(&state.db, &unique("Root"), None).await;
    let child = create_category(&state.db, &unique("Child"), Some(root)).await;
    let grandchild = create_category(&state.db, &unique("Grandchild"), Some(child)).await;

    let resp = execute_graphql(
        &schema,
        "query($parent: Int) { categories(parent: $parent) { pk } }",
        Some(Variables::from_json(json!({ "parent": root }))),
    )
    .await;

    assert!(resp.errors.is_empty(), "{:?}", resp.errors);
    let data = resp.data.into_json().unwrap();
    let pks: Vec<i64> = data["categories"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["pk"].as_i64().unwrap())
        .collect();
    assert_eq!(pks, vec![child as i64]);
    assert!(!pks.contains(&(grandchild as i64)));
}

#[tokio::test]
#[ignore = "requires a Postgres test database (TEST_DATABASE_URL)"]
async fn categories_without_parent_selects_roots() {
    let state = setup_test_db().await;
    let schema = test_schema(state.clone());

    let root = create_category(&state.db, &unique("Another root"), None).await;
    let child = create_category(&state.db, &unique("Nested"), Some(root)).await;

    let resp = execute_graphql(&schema, "query { categories(limit: 200) { pk } }", None).await;

    assert!(resp.errors.is_empty(), "{:?}", resp.errors);
    let data = resp.data.into_json().unwrap();
    let pks: Vec<i64> = data["categories"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["pk"].as_i64().unwrap())
        .collect();
    assert!(pks.contains(&(root as i64)));
    assert!(!pks.contains(&(child as i64)));
}

#[tokio::test]
#[ignore = "requires a Postgres test database (TEST_DATABASE_URL)"]
async fn category_create_mutation_persists_root_and_subcategory() {
    let state = setup_test_db().await;
    let schema = test_schema(state.clone());

    let name = unique("Created category");
    let mutation = format!(
        r#"
        mutation($name: String, $description: String, $parent: Int) {{
            categoryCreate(data: {{name: $name, description: $description, parent: $parent}}) {{
                {CATEGORY_MUTATION_FIELDS}
            }}
        }}
        "#
    );

    let resp = execute_graphql(
        &schema,
        &mutation,
        Some(Variables::from_json(
            json!({ "name": name, "description": "Test description" }),
        )),
    )
    .await;
    assert!(resp.errors.is_empty(), "{:?}", resp.errors);
    let data = resp.data.into_json().unwrap();
    let payload = &data["categoryCreate"];
    assert_eq!(payload["errors"], json!([]));
    assert_eq!(payload["category"]["name"], json!(name));
    assert_eq!(payload["category"]["description"], json!("Test description"));
    assert!(payload["category"]["parent"].is_null());

    // Subcategory under the one just created.
    let parent_pk = payload["category"]["pk"].as_i64().unwrap();
    let resp = execute_graphql(
        &schema,
        &mutation,
        Some(Variables::from_json(
            json!({ "name": unique("Subcategory"), "parent": parent_pk }),
        )),
    )
    .await;
    assert!(resp.errors.is_empty(), "{:?}", resp.errors);
    let data = resp.data.into_json().unwrap();
    let payload = &data["categoryCreate"];
    assert_eq!(payload["errors"], json!([]));
    assert_eq!(payload["category"]["parent"]["pk"].as_i64().unwrap(), parent_pk);
}

#[tokio::test]
#[ignore = "requires a Postgres test database (TEST_DATABASE_URL)"]
async fn category_create_with_empty_name_writes_nothing() {
    let state = setup_test_db().await;
    let schema = test_schema(state.clone());

    let before = category_count(&state.db).await;

    let mutation = format!(
        r#"
        mutation {{
            categoryCreate(data: {{name: ""}}) {{
                {CATEGORY_MUTATION_FIELDS}
            }}
        }}
        "#
    );
    let resp = execute_graphql(&schema, &mutation, None).await;

    assert!(resp.errors.is_empty(), "{:?}", resp.errors);
    let data = resp.data.into_json().unwrap();
    let payload = &data["categoryCreate"];
    assert!(payload["category"].is_null());
    assert_eq!(payload["errors"][0]["field"], json!("name"));

    assert_eq!(category_count(&state.db).await, before);
}

#[tokio::test]
#[ignore = "requires a Postgres test database (TEST_DATABASE_URL)"]
async fn category_create_with_unknown_parent_reports_field_error() {
    let state = setup_test_db().await;
    let schema = test_schema(state);

    let mutation = format!(
        r#"
        mutation($name: String, $parent: Int) {{
            categoryCreate(data: {{name: $name, parent: $parent}}) {{
                {CATEGORY_MUTATION_FIELDS}
            }}
        }}
        "#
    );
    let resp = execute_graphql(
        &schema,
        &mutation,
        Some(Variables::from_json(
            json!({ "name": unique("Orphan"), "parent": -1 }),
        )),
    )
    .await;

    assert!(resp.errors.is_empty(), "{:?}", resp.errors);
    let data = resp.data.into_json().unwrap();
    let payload = &data["categoryCreate"];
    assert!(payload["category"].is_null());
    assert_eq!(payload["errors"][0]["field"], json!("parent"));
}

#[tokio::test]
#[ignore = "requires a Postgres test database (TEST_DATABASE_URL)"]
async fn category_update_applies_partial_changes() {
    let state = setup_test_db().await;
    let schema = test_schema(state.clone());

    let pk = create_category(&state.db, &unique("Before update"), None).await;

    let mutation = format!(
        r#"
        mutation($pk: Int!, $name: String, $description: String) {{
            categoryUpdate(pk: $pk, data: {{name: $name, description: $description}}) {{
                {CATEGORY_MUTATION_FIELDS}
            }}
        }}
        "#
    );
    let name = unique("Updated Name");
    let resp = execute_graphql(
        &schema,
        &mutation,
        Some(Variables::from_json(
            json!({ "pk": pk, "name": name, "description": "Updated description" }),
        )),
    )
    .await;

    assert!(resp.errors.is_empty(), "{:?}", resp.errors);
    let data = resp.data.into_json().unwrap();
    let payload = &data["categoryUpdate"];
    assert_eq!(payload["errors"], json!([]));
    assert_eq!(payload["category"]["pk"].as_i64().unwrap() as i32, pk);
    assert_eq!(payload["category"]["name"], json!(name));
    assert_eq!(payload["category"]["slug"], json!(slugify(&name)));
    assert_eq!(
        payload["category"]["description"],
        json!("Updated description")
    );
}

#[tokio::test]
#[ignore = "requires a Postgres test database (TEST_DATABASE_URL)"]
async fn category_update_of_missing_row_reports_not_found() {
    let state = setup_test_db().await;
    let schema = test_schema(state);

    let mutation = format!(
        r#"
        mutation {{
            categoryUpdate(pk: -1, data: {{name: "Ghost"}}) {{
                {CATEGORY_MUTATION_FIELDS}
            }}
        }}
        "#
    );
    let resp = execute_graphql(&schema, &mutation, None).await;

    assert!(resp.errors.is_empty(), "{:?}", resp.errors);
    let data = resp.data.into_json().unwrap();
    let payload = &data["categoryUpdate"];
    assert!(payload["category"].is_null());
    assert_eq!(payload["errors"][0]["message"], json!("Category not found."));
}

#[tokio::test]
#[ignore = "requires a Postgres test database (TEST_DATABASE_URL)"]
async fn category_delete_echoes_name_with_null_pk() {
    let state = setup_test_db().await;
    let schema = test_schema(state.clone());

    let name = unique("Doomed category");
    let pk = create_category(&state.db, &name, None).await;

    let mutation = format!(
        r#"
        mutation($pk: Int!) {{
            categoryDelete(pk: $pk) {{
                {CATEGORY_MUTATION_FIELDS}
            }}
        }}
        "#
    );
    let resp = execute_graphql(
        &schema,
        &mutation,
        Some(Variables::from_json(json!({ "pk": pk }))),
    )
    .await;

    assert!(resp.errors.is_empty(), "{:?}", resp.errors);
    let data = resp.data.into_json().unwrap();
    let payload = &data["categoryDelete"];
    assert_eq!(payload["errors"], json!([]));
    // Null pk plus the last-known name signals a successful delete.
    assert!(payload["category"]["pk"].is_null());
    assert_eq!(payload["category"]["name"], json!(name));

    // Deleting the same pk again is a not-found error, not a crash.
    let resp = execute_graphql(
        &schema,
        &mutation,
        Some(Variables::from_json(json!({ "pk": pk }))),
    )
    .await;
    assert!(resp.errors.is_empty(), "{:?}", resp.errors);
    let data = resp.data.into_json().unwrap();
    let payload = &data["categoryDelete"];
    assert!(payload["category"].is_null());
    assert_eq!(payload["errors"][0]["message"], json!("Category not found."));
}

#[tokio::test]
#[ignore = "requires a Postgres test database (TEST_DATABASE_URL)"]
async fn category_delete_with_products_is_rejected() {
    let state = setup_test_db().await;
    let schema = test_schema(state.clone());

    let category = create_category(&state.db, &unique("Stocked category"), None).await;
    let type_id = create_product_type(&state.db, &unique("Type")).await;
    create_product(
        &state.db,
        type_id,
        category,
        &unique("Blocking product"),
        dec!(10),
    )
    .await;

    let mutation = format!(
        r#"
        mutation($pk: Int!) {{
            categoryDelete(pk: $pk) {{
                {CATEGORY_MUTATION_FIELDS}
            }}
        }}
        "#
    );
    let resp = execute_graphql(
        &schema,
        &mutation,
        Some(Variables::from_json(json!({ "pk": category }))),
    )
    .await;

    assert!(resp.errors.is_empty(), "{:?}", resp.errors);
    let data = resp.data.into_json().unwrap();
    let payload = &data["categoryDelete"];
    assert!(payload["category"].is_null());
    assert!(payload["errors"][0]["message"]
        .as_str()
        .unwrap()
        .contains("Cannot delete"));

    // The row survived.
    assert!(categories::get_by_id(&state.db, category)
        .await
        .unwrap()
        .is_some());
}

#[tokio::test]
#[ignore = "requires a Postgres test database (TEST_DATABASE_URL)"]
async fn product_filter_requires_every_attribute_pair() {
    let state = setup_test_db().await;
    let schema = test_schema(state.clone());

    let category = create_category(&state.db, &unique("Filtered category"), None).await;
    let type_id = create_product_type(&state.db, &unique("Shirt")).await;

    let color_name = unique("Color");
    let size_name = unique("Size");
    let color = create_attribute(&state.db, &color_name).await;
    let size = create_attribute(&state.db, &size_name).await;
    let red = create_attribute_value(&state.db, color, "red").await;
    let xl = create_attribute_value(&state.db, size, "xl").await;
    link_type_attribute(&state.db, type_id, color).await;
    link_type_attribute(&state.db, type_id, size).await;

    let both_name = unique("Red XL shirt");
    let both = create_product(&state.db, type_id, category, &both_name, dec!(20)).await;
    link_product_value(&state.db, both, red).await;
    link_product_value(&state.db, both, xl).await;

    let red_only = create_product(
        &state.db,
        type_id,
        category,
        &unique("Red shirt"),
        dec!(18),
    )
    .await;
    link_product_value(&state.db, red_only, red).await;

    let query = r#"
        query($pk: Int!, $attributes: [String!]) {
            category(pk: $pk) {
                products(attributes: $attributes) {
                    pk
                    name
                }
            }
        }
    "#;

    // Both pairs: only the product holding both values qualifies.
    let resp = execute_graphql(
        &schema,
        query,
        Some(Variables::from_json(json!({
            "pk": category,
            "attributes": [format!("{color_name}:red"), format!("{size_name}:xl")],
        }))),
    )
    .await;
    assert!(resp.errors.is_empty(), "{:?}", resp.errors);
    let data = resp.data.into_json().unwrap();
    let products = data["category"]["products"].as_array().unwrap().clone();
    assert_eq!(products.len(), 1);
    assert_eq!(products[0]["name"], json!(both_name));

    // A single pair matches both products.
    let resp = execute_graphql(
        &schema,
        query,
        Some(Variables::from_json(json!({
            "pk": category,
            "attributes": [format!("{color_name}:red")],
        }))),
    )
    .await;
    assert!(resp.errors.is_empty(), "{:?}", resp.errors);
    let data = resp.data.into_json().unwrap();
    assert_eq!(data["category"]["products"].as_array().unwrap().len(), 2);

    // An unknown value matches nothing.
    let resp = execute_graphql(
        &schema,
        query,
        Some(Variables::from_json(json!({
            "pk": category,
            "attributes": [format!("{color_name}:chartreuse")],
        }))),
    )
    .await;
    assert!(resp.errors.is_empty(), "{:?}", resp.errors);
    let data = resp.data.into_json().unwrap();
    assert_eq!(data["category"]["products"], json!([]));
}

#[tokio::test]
#[ignore = "requires a Postgres test database (TEST_DATABASE_URL)"]
async fn malformed_attribute_filter_is_a_request_error() {
    let state = setup_test_db().await;
    let schema = test_schema(state.clone());

    let category = create_category(&state.db, &unique("Bad filter"), None).await;

    let resp = execute_graphql(
        &schema,
        r#"query($pk: Int!) { category(pk: $pk) { products(attributes: ["nocolon"]) { pk } } }"#,
        Some(Variables::from_json(json!({ "pk": category }))),
    )
    .await;

    assert!(!resp.errors.is_empty());
}

#[tokio::test]
#[ignore = "requires a Postgres test database (TEST_DATABASE_URL)"]
async fn product_availability_reports_price_range() {
    let state = setup_test_db().await;
    let schema = test_schema(state.clone());

    let category = create_category(&state.db, &unique("Priced category"), None).await;
    let type_id = create_product_type(&state.db, &unique("Mug")).await;
    let product = create_product(
        &state.db,
        type_id,
        category,
        &unique("Branded mug"),
        dec!(12.50),
    )
    .await;
    sqlx::query(
        "INSERT INTO product_variants (product_id, sku, name, stock_quantity) VALUES ($1, $2, '', 4)",
    )
    .bind(product)
    .bind(unique("SKU"))
    .execute(&state.db)
    .await
    .unwrap();

    let query = r#"
        query($pk: Int!) {
            category(pk: $pk) {
                products {
                    availability {
                        available
                        priceRange {
                            minPrice { gross net currency }
                        }
                    }
                }
            }
        }
    "#;
    let resp = execute_graphql(
        &schema,
        query,
        Some(Variables::from_json(json!({ "pk": category }))),
    )
    .await;

    assert!(resp.errors.is_empty(), "{:?}", resp.errors);
    let data = resp.data.into_json().unwrap();
    let availability = &data["category"]["products"][0]["availability"];
    assert_eq!(availability["available"], json!(true));
    let min_price = &availability["priceRange"]["minPrice"];
    assert_eq!(min_price["gross"], json!("12.50"));
    assert_eq!(min_price["currency"], json!("USD"));
}

#[tokio::test]
#[ignore = "requires a Postgres test database (TEST_DATABASE_URL)"]
async fn attributes_query_lists_values_and_scopes_by_category() {
    let state = setup_test_db().await;
    let schema = test_schema(state.clone());

    let category = create_category(&state.db, &unique("Scoped category"), None).await;
    let type_id = create_product_type(&state.db, &unique("Scoped type")).await;
    let attribute_name = unique("Material");
    let attribute = create_attribute(&state.db, &attribute_name).await;
    create_attribute_value(&state.db, attribute, "wool").await;
    create_attribute_value(&state.db, attribute, "cotton").await;
    link_type_attribute(&state.db, type_id, attribute).await;
    create_product(
        &state.db,
        type_id,
        category,
        &unique("Scoped product"),
        dec!(30),
    )
    .await;

    let unrelated = create_attribute(&state.db, &unique("Unrelated")).await;

    let resp = execute_graphql(
        &schema,
        r#"
        query($categoryPk: Int) {
            attributes(categoryPk: $categoryPk) {
                pk
                name
                values { slug }
            }
        }
        "#,
        Some(Variables::from_json(json!({ "categoryPk": category }))),
    )
    .await;

    assert!(resp.errors.is_empty(), "{:?}", resp.errors);
    let data = resp.data.into_json().unwrap();
    let attributes = data["attributes"].as_array().unwrap();
    let pks: Vec<i64> = attributes
        .iter()
        .map(|a| a["pk"].as_i64().unwrap())
        .collect();
    assert_eq!(pks, vec![attribute as i64]);
    assert!(!pks.contains(&(unrelated as i64)));

    let slugs: Vec<&str> = attributes[0]["values"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v["slug"].as_str().unwrap())
        .collect();
    assert_eq!(slugs, vec!["wool", "cotton"]);
}

#[tokio::test]
#[ignore = "requires a Postgres test database (TEST_DATABASE_URL)"]
async fn shipping_rate_falls_back_to_default_rows() {
    let state = setup_test_db().await;
    let schema = test_schema(state.clone());

    sqlx::query("DELETE FROM shipping_method_countries")
        .execute(&state.db)
        .await
        .unwrap();

    let cheap: i32 =
        sqlx::query_scalar("INSERT INTO shipping_methods (name) VALUES ($1) RETURNING id")
            .bind(unique("Post"))
            .fetch_one(&state.db)
            .await
            .unwrap();
    let pricey: i32 =
        sqlx::query_scalar("INSERT INTO shipping_methods (name) VALUES ($1) RETURNING id")
            .bind(unique("Courier"))
            .fetch_one(&state.db)
            .await
            .unwrap();

    let insert_rate = "INSERT INTO shipping_method_countries (shipping_method_id, country_code, price) VALUES ($1, $2, $3)";
    sqlx::query(insert_rate)
        .bind(cheap)
        .bind("")
        .bind(dec!(5))
        .execute(&state.db)
        .await
        .unwrap();
    sqlx::query(insert_rate)
        .bind(pricey)
        .bind("")
        .bind(dec!(12))
        .execute(&state.db)
        .await
        .unwrap();
    sqlx::query(insert_rate)
        .bind(pricey)
        .bind("PL")
        .bind(dec!(7))
        .execute(&state.db)
        .await
        .unwrap();

    let query = r#"
        query($countryCode: String!) {
            shippingPriceRange(countryCode: $countryCode) {
                minPrice { gross }
                maxPrice { gross }
            }
        }
    "#;

    // Country-specific rows win when present.
    let resp = execute_graphql(
        &schema,
        query,
        Some(Variables::from_json(json!({ "countryCode": "PL" }))),
    )
    .await;
    assert!(resp.errors.is_empty(), "{:?}", resp.errors);
    let data = resp.data.into_json().unwrap();
    assert_eq!(data["shippingPriceRange"]["minPrice"]["gross"], json!("7.00"));
    assert_eq!(data["shippingPriceRange"]["maxPrice"]["gross"], json!("7.00"));

    // No rows for the country: fall back to the default set.
    let resp = execute_graphql(
        &schema,
        query,
        Some(Variables::from_json(json!({ "countryCode": "XX" }))),
    )
    .await;
    assert!(resp.errors.is_empty(), "{:?}", resp.errors);
    let data = resp.data.into_json().unwrap();
    assert_eq!(data["shippingPriceRange"]["minPrice"]["gross"], json!("5.00"));
    assert_eq!(data["shippingPriceRange"]["maxPrice"]["gross"], json!("12.00"));

    // No rows at all: shipping is simply unavailable.
    sqlx::query("DELETE FROM shipping_method_countries")
        .execute(&state.db)
        .await
        .unwrap();
    let resp = execute_graphql(
        &schema,
        query,
        Some(Variables::from_json(json!({ "countryCode": "XX" }))),
    )
    .await;
    assert!(resp.errors.is_empty(), "{:?}", resp.errors);
    let data = resp.data.into_json().unwrap();
    assert!(data["shippingPriceRange"].is_null());
}
