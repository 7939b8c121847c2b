use sqlx::{PgExecutor, Result as SqlxResult};

use crate::models::ProductRow;
use crate::pagination::LimitOffset;

pub async fn get_by_id<'e>(
    executor: impl PgExecutor<'e>,
    id: i32,
) -> SqlxResult<Option<ProductRow>> {
    sqlx::query_as::<_, ProductRow>(
        r#"
        SELECT id, product_type_id, category_id, name, slug, description,
               price, is_published, created_at, updated_at
        FROM products
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(executor)
    .await
}

pub async fn list_by_category<'e>(
    executor: impl PgExecutor<'e>,
    category_id: i32,
    page: LimitOffset,
) -> SqlxResult<Vec<ProductRow>> {
    sqlx::query_as::<_, ProductRow>(
        r#"
        SELECT id, product_type_id, category_id, name, slug, description,
               price, is_published, created_at, updated_at
        FROM products
        WHERE category_id = $1
        ORDER BY name ASC
        LIMIT $2 OFFSET $3
        "#,
    )
    .bind(category_id)
    .bind(page.limit)
    .bind(page.offset)
    .fetch_all(executor)
    .await
}

/// Products in a category holding ALL of the given attribute values.
/// The HAVING clause enforces the conjunction: a product qualifies only when
/// it is joined to every distinct requested value id.
pub async fn list_by_category_with_values<'e>(
    executor: impl PgExecutor<'e>,
    category_id: i32,
    attribute_value_ids: &[i32],
    page: LimitOffset,
) -> SqlxResult<Vec<ProductRow>> {
    sqlx::query_as::<_, ProductRow>(
        r#"
        SELECT p.id, p.product_type_id, p.category_id, p.name, p.slug, p.description,
               p.price, p.is_published, p.created_at, p.updated_at
        FROM products p
        JOIN product_attribute_values pav ON pav.product_id = p.id
        WHERE p.category_id = $1
          AND pav.attribute_value_id = ANY($2::int[])
        GROUP BY p.id
        HAVING COUNT(DISTINCT pav.attribute_value_id) = $3
        ORDER BY p.name ASC
        LIMIT $4 OFFSET $5
        "#,
    )
    .bind(category_id)
    .bind(attribute_value_ids)
    .bind(attribute_value_ids.len() as i64)
    .bind(page.limit)
    .bind(page.offset)
    .fetch_all(executor)
    .await
}

pub async fn count_by_category<'e>(
    executor: impl PgExecutor<'e>,
    category_id: i32,
) -> SqlxResult<i64> {
    sqlx::query_scalar::<_, i64>(
        r#"
        SELECT COUNT(*) FROM products WHERE category_id = $1
        "#,
    )
    .bind(category_id)
    .fetch_one(executor)
    .await
}
