use std::env;

use async_graphql::dataloader::DataLoader;
use async_graphql::{EmptySubscription, Schema};

use super::loaders::{
    AttributeValuesLoader, CategoryLoader, ProductImagesLoader, ProductVariantsLoader,
};
use super::{MutationRoot, QueryRoot};
use crate::state::AppState;

pub type CatalogSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Build the GraphQL schema and inject shared state (AppState) into the context.
pub fn build_schema(state: AppState) -> CatalogSchema {
    let category_loader = DataLoader::new(CategoryLoader::new(state.db.clone()), tokio::spawn);
    let variants_loader =
        DataLoader::new(ProductVariantsLoader::new(state.db.clone()), tokio::spawn);
    let images_loader = DataLoader::new(ProductImagesLoader::new(state.db.clone()), tokio::spawn);
    let values_loader = DataLoader::new(AttributeValuesLoader::new(state.db.clone()), tokio::spawn);

    let introspection_enabled = env::var("GQL_INTROSPECTION")
        .map(|v| v == "true")
        .unwrap_or(false);

    let mut builder = Schema::build(
        QueryRoot::default(),
        MutationRoot::default(),
        EmptySubscription,
    )
    .data(state) // AppState is Clone; available in resolvers via ctx.data::<AppState>()
    .data(category_loader)
    .data(variants_loader)
    .data(images_loader)
    .data(values_loader)
    .limit_depth(15)
    .limit_complexity(200);

    if !introspection_enabled {
        builder = builder.disable_introspection();
    }

    builder.finish()
}
