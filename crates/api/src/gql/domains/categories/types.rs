use std::collections::HashSet;

use async_graphql::dataloader::DataLoader;
use async_graphql::{ComplexObject, Context, Error, InputObject, Result, SimpleObject};

use crate::gql::common::types::FieldError;
use crate::gql::domains::products::{service as product_service, types::Product};
use crate::gql::error::GqlError;
use crate::gql::loaders::CategoryLoader;
use crate::state::AppState;
use infra::models::CategoryRow;
use infra::pagination::LimitOffset;
use infra::repos::{attributes, categories, products};

#[derive(SimpleObject, Clone)]
#[graphql(complex)]
pub struct Category {
    /// Null only on the snapshot returned by categoryDelete; clients treat
    /// a null pk with a non-null name as "deleted successfully".
    pub pk: Option<i32>,
    pub name: String,
    pub slug: String,
    pub description: String,
    #[graphql(skip)]
    pub parent_id: Option<i32>,
}

impl From<CategoryRow> for Category {
    fn from(row: CategoryRow) -> Self {
        Self {
            pk: Some(row.id),
            name: row.name,
            slug: row.slug,
            description: row.description,
            parent_id: row.parent_id,
        }
    }
}

impl Category {
    /// Snapshot of a removed row: last-known fields, identifier gone.
    pub fn deleted(row: CategoryRow) -> Self {
        Self {
            pk: None,
            name: row.name,
            slug: row.slug,
            description: row.description,
            parent_id: row.parent_id,
        }
    }
}

#[ComplexObject]
impl Category {
    async fn parent(&self, ctx: &Context<'_>) -> Result<Option<Category>> {
        let Some(parent_id) = self.parent_id else {
            return Ok(None);
        };
        let loader = ctx.data::<DataLoader<CategoryLoader>>()?;
        let row = loader
            .load_one(parent_id)
            .await
            .map_err(|e| Error::new(e.to_string()))?;
        Ok(row.map(Category::from))
    }

    /// Direct children only, never transitive descendants.
    async fn children(&self, ctx: &Context<'_>) -> Result<Vec<Category>> {
        let Some(pk) = self.pk else {
            return Ok(Vec::new());
        };
        let state = ctx.data::<AppState>()?;
        let rows = categories::list_by_parent(&state.db, Some(pk), LimitOffset::default())
            .await
            .map_err(GqlError::from)?;
        Ok(rows.into_iter().map(Category::from).collect())
    }

    /// Products in this category, optionally narrowed to those holding every
    /// requested "attributeName:valueSlug" pair.
    async fn products(
        &self,
        ctx: &Context<'_>,
        attributes: Option<Vec<String>>,
    ) -> Result<Vec<Product>> {
        let Some(pk) = self.pk else {
            return Ok(Vec::new());
        };
        let state = ctx.data::<AppState>()?;
        let page = LimitOffset::default();

        let rows = match attributes {
            Some(tokens) if !tokens.is_empty() => {
                let pairs =
                    product_service::parse_attribute_tokens(&tokens).map_err(Error::new)?;

                let mut value_ids = HashSet::new();
                for (attribute_name, value_slug) in &pairs {
                    match attributes::resolve_value_id(&state.db, attribute_name, value_slug)
                        .await
                        .map_err(GqlError::from)?
                    {
                        Some(id) => {
                            value_ids.insert(id);
                        }
                        // Unknown attribute or value: nothing can hold the pair.
                        None => return Ok(Vec::new()),
                    }
                }

                let value_ids: Vec<i32> = value_ids.into_iter().collect();
                products::list_by_category_with_values(&state.db, pk, &value_ids, page)
                    .await
                    .map_err(GqlError::from)?
            }
            _ => products::list_by_category(&state.db, pk, page)
                .await
                .map_err(GqlError::from)?,
        };

        Ok(rows.into_iter().map(Product::from).collect())
    }

    async fn products_count(&self, ctx: &Context<'_>) -> Result<i64> {
        let Some(pk) = self.pk else {
            return Ok(0);
        };
        let state = ctx.data::<AppState>()?;
        let count = products::count_by_category(&state.db, pk)
            .await
            .map_err(GqlError::from)?;
        Ok(count)
    }
}

#[derive(InputObject, Clone, Debug)]
pub struct CategoryInput {
    pub name: Option<String>,
    pub description: Option<String>,
    pub parent: Option<i32>,
}

/// Shared payload of the category mutations: the entity on success, the
/// accumulated field errors otherwise. Never both.
#[derive(SimpleObject)]
pub struct CategoryPayload {
    pub category: Option<Category>,
    pub errors: Vec<FieldError>,
}

impl CategoryPayload {
    pub fn ok(category: Category) -> Self {
        Self {
            category: Some(category),
            errors: Vec::new(),
        }
    }

    pub fn failed(errors: Vec<FieldError>) -> Self {
        Self {
            category: None,
            errors,
        }
    }
}
