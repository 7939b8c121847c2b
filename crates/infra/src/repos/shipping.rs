use sqlx::{PgExecutor, Result as SqlxResult};

use crate::models::ShippingMethodCountryRow;

/// Price rows scoped to one country code. The empty string selects the
/// default/fallback rows.
pub async fn list_for_country<'e>(
    executor: impl PgExecutor<'e>,
    country_code: &str,
) -> SqlxResult<Vec<ShippingMethodCountryRow>> {
    sqlx::query_as::<_, ShippingMethodCountryRow>(
        r#"
        SELECT id, shipping_method_id, country_code, price
        FROM shipping_method_countries
        WHERE country_code = $1
        ORDER BY price ASC
        "#,
    )
    .bind(country_code)
    .fetch_all(executor)
    .await
}
