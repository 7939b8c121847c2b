use async_graphql::{Context, Object, Result};

use crate::gql::common::types::PriceRange;
use crate::gql::error::ResultExt;
use crate::state::AppState;
use infra::repos::shipping;

use super::service;

#[derive(Default)]
pub struct ShippingQuery;

#[Object]
impl ShippingQuery {
    /// Cheapest/costliest shipping rate for a destination. Falls back to the
    /// default (empty country code) rows when nothing matches the country;
    /// null when no rate applies at all.
    async fn shipping_price_range(
        &self,
        ctx: &Context<'_>,
        country_code: String,
    ) -> Result<Option<PriceRange>> {
        let state = ctx.data::<AppState>()?;

        let mut rows = shipping::list_for_country(&state.db, &country_code)
            .await
            .gql_err("Database operation failed")?;
        if rows.is_empty() {
            rows = shipping::list_for_country(&state.db, "")
                .await
                .gql_err("Database operation failed")?;
        }

        Ok(service::rate_range(&rows, state.currency()))
    }
}
