//! Recipe domain service.
//!
//! Implements the recipe driving ports over a [`RecipeRepository`]. The
//! service holds no state of its own: name uniqueness and existence are
//! re-checked against the store on every call, and store failures propagate
//! without retries.
//!
//! Uniqueness is check-then-act. Two concurrent creates for the same name can
//! both pass the lookup; the store's unique constraint is the authoritative
//! guard and its rejection is reported exactly like the pre-check.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;
use tracing::{debug, info};

use crate::domain::ports::{RecipeCommand, RecipeQuery, RecipeRepository, RecipeRepositoryError};
use crate::domain::{Error, Recipe, RecipeDraft, RecipeFilter, RecipeName};

fn already_exists(name: &str) -> Error {
    Error::conflict(format!(
        "Recipe not created already receipe exists for {name}"
    ))
    .with_details(json!({
        "name": name,
        "code": "recipe_exists",
    }))
}

fn not_found(name: &str) -> Error {
    Error::not_found(format!(
        "Recipe not updated since no receipe found for {name}"
    ))
    .with_details(json!({
        "name": name,
        "code": "recipe_not_found",
    }))
}

fn map_repository_error(error: RecipeRepositoryError) -> Error {
    match error {
        RecipeRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("recipe repository unavailable: {message}"))
        }
        RecipeRepositoryError::Query { message } => {
            Error::internal(format!("recipe repository error: {message}"))
        }
        RecipeRepositoryError::DuplicateName { name } => already_exists(&name),
        RecipeRepositoryError::Missing { name } => not_found(&name),
    }
}

/// Recipe service implementing [`RecipeCommand`] and [`RecipeQuery`].
#[derive(Clone)]
pub struct RecipeService<R> {
    recipe_repo: Arc<R>,
}

impl<R> RecipeService<R> {
    /// Create a new service over the given store.
    pub fn new(recipe_repo: Arc<R>) -> Self {
        Self { recipe_repo }
    }
}

impl<R> RecipeService<R>
where
    R: RecipeRepository,
{
    async fn find_by_name(&self, name: &RecipeName) -> Result<Option<Recipe>, Error> {
        self.recipe_repo
            .find_by_name(name)
            .await
            .map_err(map_repository_error)
    }
}

#[async_trait]
impl<R> RecipeCommand for RecipeService<R>
where
    R: RecipeRepository,
{
    async fn create(&self, candidate: RecipeDraft) -> Result<Recipe, Error> {
        if self.find_by_name(&candidate.name).await?.is_some() {
            debug!(name = %candidate.name, "recipe name already taken");
            return Err(already_exists(candidate.name.as_ref()));
        }

        let recipe = self
            .recipe_repo
            .insert(&candidate)
            .await
            .map_err(map_repository_error)?;
        info!(name = %recipe.name(), id = %recipe.id(), "recipe created");
        Ok(recipe)
    }

    async fn update(&self, name: &RecipeName, replacement: RecipeDraft) -> Result<Recipe, Error> {
        let existing = self
            .find_by_name(name)
            .await?
            .ok_or_else(|| not_found(name.as_ref()))?;

        let recipe = self
            .recipe_repo
            .save(&existing.with_content(replacement))
            .await
            .map_err(map_repository_error)?;
        info!(name = %recipe.name(), id = %recipe.id(), "recipe updated");
        Ok(recipe)
    }

    async fn delete(&self, name: &RecipeName) -> Result<(), Error> {
        if self.find_by_name(name).await?.is_none() {
            debug!(%name, "delete requested for unknown recipe");
            return Ok(());
        }

        self.recipe_repo
            .delete_by_name(name)
            .await
            .map_err(map_repository_error)?;
        info!(%name, "recipe deleted");
        Ok(())
    }
}

#[async_trait]
impl<R> RecipeQuery for RecipeService<R>
where
    R: RecipeRepository,
{
    async fn list(&self) -> Result<Vec<Recipe>, Error> {
        self.recipe_repo
            .find_all()
            .await
            .map_err(map_repository_error)
    }

    async fn filter(&self, criteria: &RecipeFilter) -> Result<Vec<Recipe>, Error> {
        let scanned = self.list().await?;
        let total = scanned.len();
        let matched = criteria.apply(scanned);
        debug!(total, matched = matched.len(), "recipes filtered");
        Ok(matched)
    }
}

#[cfg(test)]
#[path = "recipe_service_tests.rs"]
mod tests;
