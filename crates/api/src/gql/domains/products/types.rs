use async_graphql::dataloader::DataLoader;
use async_graphql::{ComplexObject, Context, Error, Result, SimpleObject};
use rust_decimal::Decimal;

use crate::gql::common::types::{PriceRange, TaxedMoney};
use crate::gql::domains::categories::types::Category;
use crate::gql::error::GqlError;
use crate::gql::loaders::{CategoryLoader, ProductImagesLoader, ProductVariantsLoader};
use crate::state::AppState;
use infra::models::{ProductImageRow, ProductRow, ProductVariantRow};
use infra::repos::sales;

use super::service;

#[derive(SimpleObject, Clone)]
#[graphql(complex)]
pub struct Product {
    pub pk: i32,
    pub name: String,
    pub slug: String,
    pub description: String,
    pub is_published: bool,
    #[graphql(skip)]
    pub category_id: i32,
    #[graphql(skip)]
    pub base_price: Decimal,
}

impl From<ProductRow> for Product {
    fn from(row: ProductRow) -> Self {
        Self {
            pk: row.id,
            name: row.name,
            slug: row.slug,
            description: row.description,
            is_published: row.is_published,
            category_id: row.category_id,
            base_price: row.price,
        }
    }
}

#[ComplexObject]
impl Product {
    /// Storefront path of the product detail page.
    async fn url(&self) -> String {
        format!("/products/{}-{}/", self.slug, self.pk)
    }

    async fn thumbnail_url(&self, ctx: &Context<'_>) -> Result<Option<String>> {
        let loader = ctx.data::<DataLoader<ProductImagesLoader>>()?;
        let images = loader
            .load_one(self.pk)
            .await
            .map_err(|e| Error::new(e.to_string()))?
            .unwrap_or_default();
        Ok(images.into_iter().next().map(|img| img.url))
    }

    async fn images(&self, ctx: &Context<'_>) -> Result<Vec<ProductImage>> {
        let loader = ctx.data::<DataLoader<ProductImagesLoader>>()?;
        let rows = loader
            .load_one(self.pk)
            .await
            .map_err(|e| Error::new(e.to_string()))?
            .unwrap_or_default();
        Ok(rows.into_iter().map(ProductImage::from).collect())
    }

    async fn variants(&self, ctx: &Context<'_>) -> Result<Vec<ProductVariant>> {
        let loader = ctx.data::<DataLoader<ProductVariantsLoader>>()?;
        let rows = loader
            .load_one(self.pk)
            .await
            .map_err(|e| Error::new(e.to_string()))?
            .unwrap_or_default();
        Ok(rows.into_iter().map(ProductVariant::from).collect())
    }

    async fn category(&self, ctx: &Context<'_>) -> Result<Option<Category>> {
        let loader = ctx.data::<DataLoader<CategoryLoader>>()?;
        let row = loader
            .load_one(self.category_id)
            .await
            .map_err(|e| Error::new(e.to_string()))?;
        Ok(row.map(Category::from))
    }

    /// Base price before variant overrides or sales.
    async fn price(&self, ctx: &Context<'_>) -> Result<TaxedMoney> {
        let state = ctx.data::<AppState>()?;
        Ok(TaxedMoney::from_gross(self.base_price, state.currency()))
    }

    /// Stock- and sale-aware availability across the product's variants.
    async fn availability(&self, ctx: &Context<'_>) -> Result<ProductAvailability> {
        let state = ctx.data::<AppState>()?;
        let loader = ctx.data::<DataLoader<ProductVariantsLoader>>()?;

        let variants = loader
            .load_one(self.pk)
            .await
            .map_err(|e| Error::new(e.to_string()))?
            .unwrap_or_default();
        let sales = sales::list_for_product(&state.db, self.pk, self.category_id)
            .await
            .map_err(GqlError::from)?;

        Ok(service::availability(
            self.base_price,
            self.is_published,
            &variants,
            &sales,
            state.currency(),
        ))
    }
}

#[derive(SimpleObject, Clone)]
pub struct ProductVariant {
    pub pk: i32,
    pub sku: String,
    pub name: String,
    pub stock_quantity: i32,
}

impl From<ProductVariantRow> for ProductVariant {
    fn from(row: ProductVariantRow) -> Self {
        Self {
            pk: row.id,
            sku: row.sku,
            name: row.name,
            stock_quantity: row.stock_quantity,
        }
    }
}

#[derive(SimpleObject, Clone)]
pub struct ProductImage {
    pub url: String,
    pub alt: String,
}

impl From<ProductImageRow> for ProductImage {
    fn from(row: ProductImageRow) -> Self {
        Self {
            url: row.url,
            alt: row.alt,
        }
    }
}

#[derive(SimpleObject, Clone, Debug, PartialEq)]
pub struct ProductAvailability {
    pub available: bool,
    pub price_range: PriceRange,
    pub price_range_undiscounted: PriceRange,
    /// Difference between the undiscounted and discounted minimum, when a
    /// sale actually lowers the price.
    pub discount: Option<TaxedMoney>,
}
