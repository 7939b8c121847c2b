use async_graphql::MergedObject;

use crate::gql::domains::categories::CategoryMutation;

#[derive(MergedObject, Default)]
pub struct MutationRoot(CategoryMutation);
