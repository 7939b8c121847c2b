use std::str::FromStr;

use sqlx::{PgExecutor, Result as SqlxResult};

use crate::models::SaleRow;

#[derive(Debug, Clone, Copy, PartialEq, sqlx::Type, serde::Serialize, serde::Deserialize)]
#[sqlx(type_name = "sale_type", rename_all = "snake_case")]
pub enum SaleType {
    Fixed,
    Percentage,
}

impl SaleType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SaleType::Fixed => "fixed",
            SaleType::Percentage => "percentage",
        }
    }
}

impl FromStr for SaleType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fixed" => Ok(SaleType::Fixed),
            "percentage" => Ok(SaleType::Percentage),
            _ => Err(format!("Unknown sale type: {}", s)),
        }
    }
}

/// Sales targeting a product directly or through its category.
pub async fn list_for_product<'e>(
    executor: impl PgExecutor<'e>,
    product_id: i32,
    category_id: i32,
) -> SqlxResult<Vec<SaleRow>> {
    sqlx::query_as::<_, SaleRow>(
        r#"
        SELECT DISTINCT s.id, s.name, s.type, s.value
        FROM sales s
        LEFT JOIN sale_products sp ON sp.sale_id = s.id
        LEFT JOIN sale_categories sc ON sc.sale_id = s.id
        WHERE sp.product_id = $1 OR sc.category_id = $2
        "#,
    )
    .bind(product_id)
    .bind(category_id)
    .fetch_all(executor)
    .await
}
