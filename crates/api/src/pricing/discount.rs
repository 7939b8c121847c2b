use rust_decimal::Decimal;
use thiserror::Error;

use super::money::Money;

#[derive(Debug, Error, PartialEq)]
pub enum DiscountError {
    #[error("invalid discount amount: {0}")]
    InvalidAmount(String),

    #[error("discount percentage must be between 0 and 100, got {0}")]
    InvalidPercentage(Decimal),
}

/// Outcome of applying a discount: the reduced amount plus the display name
/// of whatever produced it. Constructed per calculation, never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct DiscountResult {
    pub amount: Money,
    pub name: Option<String>,
}

/// Subtract a fixed amount from `base`.
///
/// Rejects (rather than clamps) a reduction that is negative, exceeds the
/// base, or is denominated in a different currency. A price must never
/// invert sign through a discount.
pub fn apply_fixed(
    base: &Money,
    amount: &Money,
    name: Option<&str>,
) -> Result<DiscountResult, DiscountError> {
    if amount.currency != base.currency {
        return Err(DiscountError::InvalidAmount(format!(
            "currency mismatch: {} vs {}",
            amount.currency, base.currency
        )));
    }
    if amount.amount < Decimal::ZERO || amount.amount > base.amount {
        return Err(DiscountError::InvalidAmount(format!(
            "{} cannot be subtracted from {}",
            amount, base
        )));
    }

    Ok(DiscountResult {
        amount: Money::new(base.amount - amount.amount, base.currency.clone()),
        name: name.map(str::to_owned),
    })
}

/// Subtract `percentage` percent of `base` from itself.
/// The percentage is a fraction of 100 in [0, 100]; the reduction is rounded
/// to two decimal places before subtraction.
pub fn apply_percentage(
    base: &Money,
    percentage: Decimal,
    name: Option<&str>,
) -> Result<DiscountResult, DiscountError> {
    if percentage < Decimal::ZERO || percentage > Decimal::ONE_HUNDRED {
        return Err(DiscountError::InvalidPercentage(percentage));
    }

    let reduction = (base.amount * percentage / Decimal::ONE_HUNDRED).round_dp(2);

    Ok(DiscountResult {
        amount: Money::new(base.amount - reduction, base.currency.clone()),
        name: name.map(str::to_owned),
    })
}
