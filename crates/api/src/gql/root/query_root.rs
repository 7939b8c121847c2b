use async_graphql::MergedObject;

use crate::gql::domains::attributes::AttributeQuery;
use crate::gql::domains::categories::CategoryQuery;
use crate::gql::domains::shipping::ShippingQuery;

#[derive(MergedObject, Default)]
pub struct QueryRoot(AttributeQuery, CategoryQuery, ShippingQuery);
