use rust_decimal::Decimal;

use crate::gql::common::types::{PriceRange, TaxedMoney};
use crate::pricing::{self, DiscountError, DiscountResult, Money};
use infra::models::{ProductVariantRow, SaleRow};
use infra::repos::sales::SaleType;

use super::types::ProductAvailability;

/// Parse "attributeName:valueSlug" filter tokens into pairs.
/// A token without both halves is a malformed identifier and rejected.
pub fn parse_attribute_tokens(tokens: &[String]) -> Result<Vec<(String, String)>, String> {
    let mut pairs = Vec::with_capacity(tokens.len());
    for token in tokens {
        match token.split_once(':') {
            Some((attribute, value))
                if !attribute.trim().is_empty() && !value.trim().is_empty() =>
            {
                pairs.push((attribute.trim().to_owned(), value.trim().to_owned()));
            }
            _ => {
                return Err(format!(
                    "Invalid attribute filter {:?}; expected \"attributeName:valueSlug\"",
                    token
                ));
            }
        }
    }
    Ok(pairs)
}

/// Run one sale through the discount calculator.
pub fn apply_sale(sale: &SaleRow, base: &Money) -> Result<DiscountResult, DiscountError> {
    match sale.sale_type {
        SaleType::Fixed => pricing::apply_fixed(
            base,
            &Money::new(sale.value, base.currency.clone()),
            Some(&sale.name),
        ),
        SaleType::Percentage => pricing::apply_percentage(base, sale.value, Some(&sale.name)),
    }
}

/// Cheapest valid outcome of the applicable sales; sales the calculator
/// rejects for this base (e.g. a fixed amount exceeding it) are skipped.
/// Without any applicable sale the base price stands.
pub fn sale_price(base: &Money, sales: &[SaleRow]) -> Money {
    sales
        .iter()
        .filter_map(|sale| apply_sale(sale, base).ok())
        .map(|result| result.amount.amount)
        .min()
        .map(|amount| Money::new(amount, base.currency.clone()))
        .unwrap_or_else(|| base.clone())
}

/// Availability of a product: stock across variants, discounted and
/// undiscounted price ranges. A product with no variants is priced by its
/// base price but cannot be purchased.
pub fn availability(
    base_price: Decimal,
    is_published: bool,
    variants: &[ProductVariantRow],
    sales: &[SaleRow],
    currency: &str,
) -> ProductAvailability {
    let gross_prices: Vec<Decimal> = if variants.is_empty() {
        vec![base_price]
    } else {
        variants.iter().map(|v| v.price_or(base_price)).collect()
    };

    // gross_prices is never empty; the fallbacks are unreachable.
    let undiscounted_min = gross_prices.iter().copied().min().unwrap_or(base_price);
    let undiscounted_max = gross_prices.iter().copied().max().unwrap_or(base_price);

    let discounted: Vec<Decimal> = gross_prices
        .iter()
        .map(|amount| sale_price(&Money::new(*amount, currency), sales).amount)
        .collect();
    let discounted_min = discounted.iter().copied().min().unwrap_or(base_price);
    let discounted_max = discounted.iter().copied().max().unwrap_or(base_price);

    let available = is_published && variants.iter().any(|v| v.stock_quantity > 0);

    let discount = (discounted_min < undiscounted_min)
        .then(|| TaxedMoney::from_gross(undiscounted_min - discounted_min, currency));

    ProductAvailability {
        available,
        price_range: PriceRange {
            min_price: TaxedMoney::from_gross(discounted_min, currency),
            max_price: TaxedMoney::from_gross(discounted_max, currency),
        },
        price_range_undiscounted: PriceRange {
            min_price: TaxedMoney::from_gross(undiscounted_min, currency),
            max_price: TaxedMoney::from_gross(undiscounted_max, currency),
        },
        discount,
    }
}
