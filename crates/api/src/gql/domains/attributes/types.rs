use async_graphql::dataloader::DataLoader;
use async_graphql::{ComplexObject, Context, Error, Result, SimpleObject};

use crate::gql::loaders::AttributeValuesLoader;
use infra::models::{AttributeValueRow, ProductAttributeRow};

#[derive(SimpleObject, Clone)]
#[graphql(complex)]
pub struct ProductAttribute {
    pub pk: i32,
    pub name: String,
    pub slug: String,
}

impl From<ProductAttributeRow> for ProductAttribute {
    fn from(row: ProductAttributeRow) -> Self {
        Self {
            pk: row.id,
            name: row.name,
            slug: row.slug,
        }
    }
}

#[ComplexObject]
impl ProductAttribute {
    /// The attribute's possible values; set semantics, order carries no meaning.
    async fn values(&self, ctx: &Context<'_>) -> Result<Vec<AttributeValue>> {
        let loader = ctx.data::<DataLoader<AttributeValuesLoader>>()?;
        let rows = loader
            .load_one(self.pk)
            .await
            .map_err(|e| Error::new(e.to_string()))?
            .unwrap_or_default();
        Ok(rows.into_iter().map(AttributeValue::from).collect())
    }
}

#[derive(SimpleObject, Clone)]
pub struct AttributeValue {
    pub pk: i32,
    pub name: String,
    pub slug: String,
}

impl From<AttributeValueRow> for AttributeValue {
    fn from(row: AttributeValueRow) -> Self {
        Self {
            pk: row.id,
            name: row.name,
            slug: row.slug,
        }
    }
}
