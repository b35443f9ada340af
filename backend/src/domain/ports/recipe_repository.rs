//! Port for recipe persistence.
//!
//! The store is keyed by [`RecipeId`](crate::domain::RecipeId) and is also
//! queryable by [`RecipeName`].
//! Adapters are expected to enforce name uniqueness themselves and report a
//! violation as [`RecipeRepositoryError::DuplicateName`]; the service-level
//! existence check is only a fast path in front of that guard.

use async_trait::async_trait;

use crate::domain::{Recipe, RecipeDraft, RecipeName};

use super::define_port_error;

define_port_error! {
    /// Errors raised by recipe repository adapters.
    pub enum RecipeRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "recipe repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "recipe repository query failed: {message}",
        /// The store's unique-name constraint rejected the write.
        DuplicateName { name: String } =>
            "recipe named {name} already stored",
        /// The record targeted by an overwrite no longer exists.
        Missing { name: String } =>
            "recipe named {name} is no longer stored",
    }
}

/// Port for storing and scanning recipes.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RecipeRepository: Send + Sync {
    /// Fetch the recipe stored under `name`, if any.
    async fn find_by_name(
        &self,
        name: &RecipeName,
    ) -> Result<Option<Recipe>, RecipeRepositoryError>;

    /// Return every stored recipe in store order.
    async fn find_all(&self) -> Result<Vec<Recipe>, RecipeRepositoryError>;

    /// Persist a new recipe; the store assigns its id.
    async fn insert(&self, draft: &RecipeDraft) -> Result<Recipe, RecipeRepositoryError>;

    /// Overwrite the stored record with the same id.
    async fn save(&self, recipe: &Recipe) -> Result<Recipe, RecipeRepositoryError>;

    /// Remove the recipe stored under `name`. Absent names are not an error.
    async fn delete_by_name(&self, name: &RecipeName) -> Result<(), RecipeRepositoryError>;
}
