use sqlx::{PgExecutor, Result as SqlxResult};

use crate::models::CategoryRow;
use crate::pagination::LimitOffset;

#[derive(Debug, Clone)]
pub struct NewCategory {
    pub name: String,
    pub slug: String,
    pub description: String,
    pub parent_id: Option<i32>,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateCategory {
    pub name: Option<String>,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub parent_id: Option<i32>,
}

pub async fn get_by_id<'e>(
    executor: impl PgExecutor<'e>,
    id: i32,
) -> SqlxResult<Option<CategoryRow>> {
    sqlx::query_as::<_, CategoryRow>(
        r#"
        SELECT id, name, slug, description, parent_id, created_at, updated_at
        FROM categories
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(executor)
    .await
}

/// Root categories when `parent_id` is None, direct children otherwise.
/// Grandchildren are never included; traversal is one level per query.
pub async fn list_by_parent<'e>(
    executor: impl PgExecutor<'e>,
    parent_id: Option<i32>,
    page: LimitOffset,
) -> SqlxResult<Vec<CategoryRow>> {
    sqlx::query_as::<_, CategoryRow>(
        r#"
        SELECT id, name, slug, description, parent_id, created_at, updated_at
        FROM categories
        WHERE ($1::int IS NULL AND parent_id IS NULL) OR parent_id = $1
        ORDER BY name ASC
        LIMIT $2 OFFSET $3
        "#,
    )
    .bind(parent_id)
    .bind(page.limit)
    .bind(page.offset)
    .fetch_all(executor)
    .await
}

pub async fn insert<'e>(
    executor: impl PgExecutor<'e>,
    data: NewCategory,
) -> SqlxResult<CategoryRow> {
    sqlx::query_as::<_, CategoryRow>(
        r#"
        INSERT INTO categories (name, slug, description, parent_id)
        VALUES ($1, $2, $3, $4)
        RETURNING id, name, slug, description, parent_id, created_at, updated_at
        "#,
    )
    .bind(data.name)
    .bind(data.slug)
    .bind(data.description)
    .bind(data.parent_id)
    .fetch_one(executor)
    .await
}

/// Partial update using the COALESCE pattern; absent fields keep their value.
pub async fn update<'e>(
    executor: impl PgExecutor<'e>,
    id: i32,
    data: UpdateCategory,
) -> SqlxResult<Option<CategoryRow>> {
    sqlx::query_as::<_, CategoryRow>(
        r#"
        UPDATE categories
        SET name        = COALESCE($2, name),
            slug        = COALESCE($3, slug),
            description = COALESCE($4, description),
            parent_id   = COALESCE($5, parent_id),
            updated_at  = NOW()
        WHERE id = $1
        RETURNING id, name, slug, description, parent_id, created_at, updated_at
        "#,
    )
    .bind(id)
    .bind(data.name)
    .bind(data.slug)
    .bind(data.description)
    .bind(data.parent_id)
    .fetch_optional(executor)
    .await
}

/// Delete and return the removed row so callers can echo its last-known
/// fields. Fails with a foreign-key violation while products or child
/// categories still reference it.
pub async fn delete<'e>(
    executor: impl PgExecutor<'e>,
    id: i32,
) -> SqlxResult<Option<CategoryRow>> {
    sqlx::query_as::<_, CategoryRow>(
        r#"
        DELETE FROM categories
        WHERE id = $1
        RETURNING id, name, slug, description, parent_id, created_at, updated_at
        "#,
    )
    .bind(id)
    .fetch_optional(executor)
    .await
}
