use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::repos::sales::SaleType;

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct CategoryRow {
    pub id: i32,
    pub name: String,
    pub slug: String,
    pub description: String,
    pub parent_id: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct ProductRow {
    pub id: i32,
    pub product_type_id: i32,
    pub category_id: i32,
    pub name: String,
    pub slug: String,
    pub description: String,
    pub price: Decimal,
    pub is_published: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct ProductVariantRow {
    pub id: i32,
    pub product_id: i32,
    pub sku: String,
    pub name: String,
    pub price_override: Option<Decimal>,
    pub stock_quantity: i32,
}

impl ProductVariantRow {
    /// Effective gross price: the variant override, or the product base price.
    pub fn price_or(&self, product_price: Decimal) -> Decimal {
        self.price_override.unwrap_or(product_price)
    }
}

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct ProductImageRow {
    pub id: i32,
    pub product_id: i32,
    pub url: String,
    pub alt: String,
    pub sort_order: i32,
}

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct ProductAttributeRow {
    pub id: i32,
    pub name: String,
    pub slug: String,
}

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct AttributeValueRow {
    pub id: i32,
    pub attribute_id: i32,
    pub name: String,
    pub slug: String,
}

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct ShippingMethodCountryRow {
    pub id: i32,
    pub shipping_method_id: i32,
    pub country_code: String,
    pub price: Decimal,
}

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct SaleRow {
    pub id: i32,
    pub name: String,
    #[sqlx(rename = "type")]
    pub sale_type: SaleType,
    pub value: Decimal,
}
