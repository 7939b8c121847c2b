use async_graphql::SimpleObject;
use rust_decimal::Decimal;

/// Monetary amount as served to clients. Taxes are out of scope, so the net
/// amount always equals the gross one.
#[derive(SimpleObject, Clone, Debug, PartialEq)]
pub struct TaxedMoney {
    pub currency: String,
    pub gross: Decimal,
    pub net: Decimal,
}

impl TaxedMoney {
    pub fn from_gross(amount: Decimal, currency: &str) -> Self {
        Self {
            currency: currency.to_owned(),
            gross: amount,
            net: amount,
        }
    }
}

/// Cheapest/costliest pair describing a set of prices.
#[derive(SimpleObject, Clone, Debug, PartialEq)]
pub struct PriceRange {
    pub min_price: TaxedMoney,
    pub max_price: TaxedMoney,
}

/// A validation failure scoped to one input field. Mutations collect these
/// instead of aborting; `field` is null for errors about the operation as a
/// whole (e.g. the target row not existing).
#[derive(SimpleObject, Clone, Debug, PartialEq)]
pub struct FieldError {
    pub field: Option<String>,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: Some(field.into()),
            message: message.into(),
        }
    }

    pub fn global(message: impl Into<String>) -> Self {
        Self {
            field: None,
            message: message.into(),
        }
    }
}
