use async_graphql::{Context, Object, Result};

use crate::gql::error::GqlError;
use crate::state::AppState;
use infra::repos::attributes;

use super::types::ProductAttribute;

#[derive(Default)]
pub struct AttributeQuery;

#[Object]
impl AttributeQuery {
    /// All product attributes, or only those applicable to products within
    /// the given category's product types.
    async fn attributes(
        &self,
        ctx: &Context<'_>,
        category_pk: Option<i32>,
    ) -> Result<Vec<ProductAttribute>> {
        let state = ctx.data::<AppState>()?;

        let rows = match category_pk {
            Some(pk) => attributes::list_for_category(&state.db, pk)
                .await
                .map_err(GqlError::from)?,
            None => attributes::list_all(&state.db)
                .await
                .map_err(GqlError::from)?,
        };

        Ok(rows.into_iter().map(ProductAttribute::from).collect())
    }
}
