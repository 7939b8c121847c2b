pub mod attributes;
pub mod categories;
pub mod products;
pub mod sales;
pub mod shipping;

pub use categories::{NewCategory, UpdateCategory};
pub use sales::SaleType;
