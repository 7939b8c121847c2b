use async_graphql::dataloader::Loader;
use infra::{
    db::Db,
    models::{AttributeValueRow, CategoryRow, ProductImageRow, ProductVariantRow},
};
use std::{collections::HashMap, future::Future, sync::Arc};

#[derive(Clone)]
pub struct CategoryLoader {
    pool: Db,
}

impl CategoryLoader {
    pub fn new(pool: Db) -> Self {
        Self { pool }
    }
}

impl Loader<i32> for CategoryLoader {
    type Value = CategoryRow;
    type Error = Arc<sqlx::Error>;

    fn load(
        &self,
        keys: &[i32],
    ) -> impl Future<Output = std::result::Result<HashMap<i32, Self::Value>, Self::Error>> + Send
    {
        let pool = self.pool.clone();
        let ids: Vec<i32> = keys.to_vec();

        async move {
            if ids.is_empty() {
                return Ok(HashMap::new());
            }

            let rows: Vec<CategoryRow> = sqlx::query_as::<_, CategoryRow>(
                r#"
                SELECT id, name, slug, description, parent_id, created_at, updated_at
                FROM categories
                WHERE id = ANY($1::int[])
                "#,
            )
            .bind(&ids)
            .fetch_all(&pool)
            .await
            .map_err(Arc::new)?;

            Ok(rows.into_iter().map(|r| (r.id, r)).collect())
        }
    }
}

// ProductVariantsLoader - batch load every variant of a set of products
#[derive(Clone)]
pub struct ProductVariantsLoader {
    pool: Db,
}

impl ProductVariantsLoader {
    pub fn new(pool: Db) -> Self {
        Self { pool }
    }
}

impl Loader<i32> for ProductVariantsLoader {
    type Value = Vec<ProductVariantRow>;
    type Error = Arc<sqlx::Error>;

    fn load(
        &self,
        keys: &[i32],
    ) -> impl Future<Output = std::result::Result<HashMap<i32, Self::Value>, Self::Error>> + Send
    {
        let pool = self.pool.clone();
        let ids: Vec<i32> = keys.to_vec();

        async move {
            if ids.is_empty() {
                return Ok(HashMap::new());
            }

            let rows: Vec<ProductVariantRow> = sqlx::query_as::<_, ProductVariantRow>(
                r#"
                SELECT id, product_id, sku, name, price_override, stock_quantity
                FROM product_variants
                WHERE product_id = ANY($1::int[])
                ORDER BY id ASC
                "#,
            )
            .bind(&ids)
            .fetch_all(&pool)
            .await
            .map_err(Arc::new)?;

            let mut grouped: HashMap<i32, Vec<ProductVariantRow>> = HashMap::new();
            for row in rows {
                grouped.entry(row.product_id).or_default().push(row);
            }
            Ok(grouped)
        }
    }
}

// ProductImagesLoader - batch load product images, sort order preserved
#[derive(Clone)]
pub struct ProductImagesLoader {
    pool: Db,
}

impl ProductImagesLoader {
    pub fn new(pool: Db) -> Self {
        Self { pool }
    }
}

impl Loader<i32> for ProductImagesLoader {
    type Value = Vec<ProductImageRow>;
    type Error = Arc<sqlx::Error>;

    fn load(
        &self,
        keys: &[i32],
    ) -> impl Future<Output = std::result::Result<HashMap<i32, Self::Value>, Self::Error>> + Send
    {
        let pool = self.pool.clone();
        let ids: Vec<i32> = keys.to_vec();

        async move {
            if ids.is_empty() {
                return Ok(HashMap::new());
            }

            let rows: Vec<ProductImageRow> = sqlx::query_as::<_, ProductImageRow>(
                r#"
                SELECT id, product_id, url, alt, sort_order
                FROM product_images
                WHERE product_id = ANY($1::int[])
                ORDER BY sort_order ASC, id ASC
                "#,
            )
            .bind(&ids)
            .fetch_all(&pool)
            .await
            .map_err(Arc::new)?;

            let mut grouped: HashMap<i32, Vec<ProductImageRow>> = HashMap::new();
            for row in rows {
                grouped.entry(row.product_id).or_default().push(row);
            }
            Ok(grouped)
        }
    }
}

// AttributeValuesLoader - batch load the value set of each attribute
#[derive(Clone)]
pub struct AttributeValuesLoader {
    pool: Db,
}

impl AttributeValuesLoader {
    pub fn new(pool: Db) -> Self {
        Self { pool }
    }
}

impl Loader<i32> for AttributeValuesLoader {
    type Value = Vec<AttributeValueRow>;
    type Error = Arc<sqlx::Error>;

    fn load(
        &self,
        keys: &[i32],
    ) -> impl Future<Output = std::result::Result<HashMap<i32, Self::Value>, Self::Error>> + Send
    {
        let pool = self.pool.clone();
        let ids: Vec<i32> = keys.to_vec();

        async move {
            if ids.is_empty() {
                return Ok(HashMap::new());
            }

            let rows: Vec<AttributeValueRow> = sqlx::query_as::<_, AttributeValueRow>(
                r#"
                SELECT id, attribute_id, name, slug
                FROM attribute_values
                WHERE attribute_id = ANY($1::int[])
                ORDER BY id ASC
                "#,
            )
            .bind(&ids)
            .fetch_all(&pool)
            .await
            .map_err(Arc::new)?;

            let mut grouped: HashMap<i32, Vec<AttributeValueRow>> = HashMap::new();
            for row in rows {
                grouped.entry(row.attribute_id).or_default().push(row);
            }
            Ok(grouped)
        }
    }
}
