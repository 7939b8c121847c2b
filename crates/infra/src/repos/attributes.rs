use sqlx::{PgExecutor, Result as SqlxResult};

use crate::models::ProductAttributeRow;

pub async fn list_all<'e>(executor: impl PgExecutor<'e>) -> SqlxResult<Vec<ProductAttributeRow>> {
    sqlx::query_as::<_, ProductAttributeRow>(
        r#"
        SELECT id, name, slug
        FROM product_attributes
        ORDER BY name ASC
        "#,
    )
    .fetch_all(executor)
    .await
}

/// Attributes declared by the product types of products in a category.
pub async fn list_for_category<'e>(
    executor: impl PgExecutor<'e>,
    category_id: i32,
) -> SqlxResult<Vec<ProductAttributeRow>> {
    sqlx::query_as::<_, ProductAttributeRow>(
        r#"
        SELECT DISTINCT a.id, a.name, a.slug
        FROM product_attributes a
        JOIN product_type_attributes pta ON pta.attribute_id = a.id
        JOIN products p ON p.product_type_id = pta.product_type_id
        WHERE p.category_id = $1
        ORDER BY a.name ASC
        "#,
    )
    .bind(category_id)
    .fetch_all(executor)
    .await
}

/// Resolve an ("attribute name", "value slug") pair to the value's id.
/// Returns None when either half does not exist.
pub async fn resolve_value_id<'e>(
    executor: impl PgExecutor<'e>,
    attribute_name: &str,
    value_slug: &str,
) -> SqlxResult<Option<i32>> {
    sqlx::query_scalar::<_, i32>(
        r#"
        SELECT av.id
        FROM attribute_values av
        JOIN product_attributes a ON a.id = av.attribute_id
        WHERE a.name = $1 AND av.slug = $2
        "#,
    )
    .bind(attribute_name)
    .bind(value_slug)
    .fetch_optional(executor)
    .await
}
