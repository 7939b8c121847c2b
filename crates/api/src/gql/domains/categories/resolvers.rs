use async_graphql::{Context, Object, Result};

use crate::gql::common::types::FieldError;
use crate::gql::error::GqlError;
use crate::state::AppState;
use infra::db::is_foreign_key_violation;
use infra::pagination::LimitOffset;
use infra::repos::categories;
use infra::repos::{NewCategory, UpdateCategory};

use super::types::{Category, CategoryInput, CategoryPayload};
use super::validation;

const NOT_FOUND: &str = "Category not found.";

#[derive(Default)]
pub struct CategoryQuery;

#[Object]
impl CategoryQuery {
    /// Get a single category by primary key.
    async fn category(&self, ctx: &Context<'_>, pk: i32) -> Result<Option<Category>> {
        let state = ctx.data::<AppState>()?;
        let row = categories::get_by_id(&state.db, pk)
            .await
            .map_err(GqlError::from)?;
        Ok(row.map(Category::from))
    }

    /// Root categories, or the direct children of `parent` when given.
    async fn categories(
        &self,
        ctx: &Context<'_>,
        parent: Option<i32>,
        limit: Option<i64>,
        offset: Option<i64>,
    ) -> Result<Vec<Category>> {
        let state = ctx.data::<AppState>()?;
        let page = LimitOffset::clamped(limit, offset);
        let rows = categories::list_by_parent(&state.db, parent, page)
            .await
            .map_err(GqlError::from)?;
        Ok(rows.into_iter().map(Category::from).collect())
    }
}

#[derive(Default)]
pub struct CategoryMutation;

#[Object]
impl CategoryMutation {
    /// Create a category. Validation failures come back as field errors in
    /// the payload and leave the table untouched.
    async fn category_create(
        &self,
        ctx: &Context<'_>,
        data: CategoryInput,
    ) -> Result<CategoryPayload> {
        let state = ctx.data::<AppState>()?;
        let mut errors = validation::validate(&data, true);

        let mut tx = state.db.begin().await.map_err(GqlError::from)?;

        if let Some(parent_pk) = data.parent {
            if categories::get_by_id(&mut *tx, parent_pk)
                .await
                .map_err(GqlError::from)?
                .is_none()
            {
                errors.push(FieldError::new("parent", "Parent category does not exist."));
            }
        }

        if !errors.is_empty() {
            // Dropping the transaction rolls it back; nothing was written.
            return Ok(CategoryPayload::failed(errors));
        }

        let name = data.name.as_deref().map(str::trim).unwrap_or_default();
        let row = categories::insert(
            &mut *tx,
            NewCategory {
                name: name.to_owned(),
                slug: validation::slugify(name),
                description: data.description.unwrap_or_default(),
                parent_id: data.parent,
            },
        )
        .await
        .map_err(GqlError::from)?;

        tx.commit().await.map_err(GqlError::from)?;

        Ok(CategoryPayload::ok(row.into()))
    }

    /// Partial update: absent input fields keep their stored value; a name
    /// change re-derives the slug.
    async fn category_update(
        &self,
        ctx: &Context<'_>,
        pk: i32,
        data: CategoryInput,
    ) -> Result<CategoryPayload> {
        let state = ctx.data::<AppState>()?;
        let mut errors = validation::validate(&data, false);

        if data.parent == Some(pk) {
            errors.push(FieldError::new(
                "parent",
                "A category may not be its own parent.",
            ));
        }

        let mut tx = state.db.begin().await.map_err(GqlError::from)?;

        if categories::get_by_id(&mut *tx, pk)
            .await
            .map_err(GqlError::from)?
            .is_none()
        {
            return Ok(CategoryPayload::failed(vec![FieldError::global(NOT_FOUND)]));
        }

        if let Some(parent_pk) = data.parent {
            if parent_pk != pk
                && categories::get_by_id(&mut *tx, parent_pk)
                    .await
                    .map_err(GqlError::from)?
                    .is_none()
            {
                errors.push(FieldError::new("parent", "Parent category does not exist."));
            }
        }

        if !errors.is_empty() {
            return Ok(CategoryPayload::failed(errors));
        }

        let name = data.name.as_deref().map(str::trim).map(str::to_owned);
        let slug = name.as_deref().map(validation::slugify);
        let updated = categories::update(
            &mut *tx,
            pk,
            UpdateCategory {
                name,
                slug,
                description: data.description,
                parent_id: data.parent,
            },
        )
        .await
        .map_err(GqlError::from)?;

        tx.commit().await.map_err(GqlError::from)?;

        match updated {
            Some(row) => Ok(CategoryPayload::ok(row.into())),
            None => Ok(CategoryPayload::failed(vec![FieldError::global(NOT_FOUND)])),
        }
    }

    /// Remove a category. The payload echoes the snapshot with a null pk and
    /// the last-known name; a second delete of the same pk reports not-found.
    async fn category_delete(&self, ctx: &Context<'_>, pk: i32) -> Result<CategoryPayload> {
        let state = ctx.data::<AppState>()?;

        let mut tx = state.db.begin().await.map_err(GqlError::from)?;

        let deleted = match categories::delete(&mut *tx, pk).await {
            Ok(row) => row,
            Err(e) if is_foreign_key_violation(&e) => {
                return Ok(CategoryPayload::failed(vec![FieldError::global(
                    "Cannot delete a category that still has products or subcategories.",
                )]));
            }
            Err(e) => return Err(GqlError::from(e).into()),
        };

        let Some(row) = deleted else {
            return Ok(CategoryPayload::failed(vec![FieldError::global(NOT_FOUND)]));
        };

        tx.commit().await.map_err(GqlError::from)?;

        Ok(CategoryPayload::ok(Category::deleted(row)))
    }
}
