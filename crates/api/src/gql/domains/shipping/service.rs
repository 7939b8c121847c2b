use crate::gql::common::types::{PriceRange, TaxedMoney};
use infra::models::ShippingMethodCountryRow;

/// Min/max price over a set of rate rows. Rows are compared by amount only;
/// which method carries the extreme is irrelevant. None when no rate exists.
pub fn rate_range(rows: &[ShippingMethodCountryRow], currency: &str) -> Option<PriceRange> {
    let min = rows.iter().map(|r| r.price).min()?;
    let max = rows.iter().map(|r| r.price).max()?;

    Some(PriceRange {
        min_price: TaxedMoney::from_gross(min, currency),
        max_price: TaxedMoney::from_gross(max, currency),
    })
}
