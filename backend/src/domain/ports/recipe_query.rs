//! Driving port for recipe reads.

use async_trait::async_trait;

use crate::domain::{Error, Recipe, RecipeFilter};

/// Read-only use-cases over the stored recipe set.
#[async_trait]
pub trait RecipeQuery: Send + Sync {
    /// Every stored recipe, in store order.
    async fn list(&self) -> Result<Vec<Recipe>, Error>;

    /// Recipes matching all supplied criteria, in store order.
    async fn filter(&self, criteria: &RecipeFilter) -> Result<Vec<Recipe>, Error>;
}

/// Query port over an empty store.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureRecipeQuery;

#[async_trait]
impl RecipeQuery for FixtureRecipeQuery {
    async fn list(&self) -> Result<Vec<Recipe>, Error> {
        Ok(Vec::new())
    }

    async fn filter(&self, _criteria: &RecipeFilter) -> Result<Vec<Recipe>, Error> {
        Ok(Vec::new())
    }
}
