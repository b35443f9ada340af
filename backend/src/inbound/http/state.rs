//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{FixtureRecipeCommand, FixtureRecipeQuery, RecipeCommand, RecipeQuery};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub recipes: Arc<dyn RecipeCommand>,
    pub recipes_query: Arc<dyn RecipeQuery>,
}

impl HttpState {
    /// Construct state from the recipe command and query ports.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use recipe_backend::domain::RecipeService;
    /// use recipe_backend::inbound::http::state::HttpState;
    /// use recipe_backend::outbound::memory::InMemoryRecipeRepository;
    ///
    /// let service = Arc::new(RecipeService::new(Arc::new(InMemoryRecipeRepository::new())));
    /// let state = HttpState::new(service.clone(), service);
    /// let _query = state.recipes_query.clone();
    /// ```
    pub fn new(recipes: Arc<dyn RecipeCommand>, recipes_query: Arc<dyn RecipeQuery>) -> Self {
        Self {
            recipes,
            recipes_query,
        }
    }
}

impl Default for HttpState {
    /// Inert state backed by the fixture ports.
    fn default() -> Self {
        Self::new(Arc::new(FixtureRecipeCommand), Arc::new(FixtureRecipeQuery))
    }
}
