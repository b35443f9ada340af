//! Builders for the HTTP state's recipe ports.

use std::sync::Arc;

use actix_web::web;
use tracing::{info, warn};

use recipe_backend::domain::RecipeService;
use recipe_backend::domain::ports::{RecipeCommand, RecipeQuery, RecipeRepository};
use recipe_backend::inbound::http::state::HttpState;
use recipe_backend::outbound::memory::InMemoryRecipeRepository;
use recipe_backend::outbound::persistence::DieselRecipeRepository;

use super::ServerConfig;

/// Wrap a repository in a `RecipeService` serving both recipe ports.
fn service_ports<R>(repo: R) -> (Arc<dyn RecipeCommand>, Arc<dyn RecipeQuery>)
where
    R: RecipeRepository + 'static,
{
    let service = Arc::new(RecipeService::new(Arc::new(repo)));
    (service.clone(), service)
}

/// Build the HTTP state, using PostgreSQL when a pool is configured and the
/// in-memory store otherwise.
pub(super) fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    let (recipes, recipes_query) = match &config.db_pool {
        Some(pool) => {
            info!("recipes persisted in PostgreSQL");
            service_ports(DieselRecipeRepository::new(pool.clone()))
        }
        None => {
            warn!("no database configured; recipes are kept in memory");
            service_ports(InMemoryRecipeRepository::new())
        }
    };
    web::Data::new(HttpState::new(recipes, recipes_query))
}
