//! Driving port for recipe mutations.

use async_trait::async_trait;

use crate::domain::{Error, Recipe, RecipeDraft, RecipeId, RecipeName};

/// Use-cases that change the stored recipe set.
#[async_trait]
pub trait RecipeCommand: Send + Sync {
    /// Store `candidate` unless its name is already taken.
    async fn create(&self, candidate: RecipeDraft) -> Result<Recipe, Error>;

    /// Overwrite the mutable fields of the recipe stored under `name`.
    async fn update(&self, name: &RecipeName, replacement: RecipeDraft) -> Result<Recipe, Error>;

    /// Remove the recipe stored under `name`, if any.
    async fn delete(&self, name: &RecipeName) -> Result<(), Error>;
}

/// Inert command port for adapter tests that do not touch storage.
///
/// `create` echoes the candidate with a fresh id, `update` always reports the
/// recipe as missing and `delete` succeeds.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureRecipeCommand;

#[async_trait]
impl RecipeCommand for FixtureRecipeCommand {
    async fn create(&self, candidate: RecipeDraft) -> Result<Recipe, Error> {
        Ok(Recipe::from_draft(RecipeId::random(), candidate))
    }

    async fn update(&self, name: &RecipeName, _replacement: RecipeDraft) -> Result<Recipe, Error> {
        Err(Error::not_found(format!("no recipe named {name}")))
    }

    async fn delete(&self, _name: &RecipeName) -> Result<(), Error> {
        Ok(())
    }
}
