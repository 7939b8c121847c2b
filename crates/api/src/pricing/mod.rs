pub mod discount;
pub mod money;

pub use discount::{apply_fixed, apply_percentage, DiscountError, DiscountResult};
pub use money::Money;
