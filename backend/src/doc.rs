//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every recipe endpoint, the health checks, and the
//! error schema wrappers from the inbound layer. Swagger UI serves it in debug
//! builds and `cargo run --bin openapi-dump` exports it for external tooling.

use utoipa::OpenApi;

use crate::inbound::http::recipes::{RecipeRequest, RecipeResponse};
use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Recipe backend API",
        description = "Create, update, delete, list, and filter recipes by name, category, ingredients, servings, and instructions."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::recipes::create_recipe,
        crate::inbound::http::recipes::list_recipes,
        crate::inbound::http::recipes::filter_recipes,
        crate::inbound::http::recipes::update_recipe,
        crate::inbound::http::recipes::delete_recipe,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(RecipeRequest, RecipeResponse, ErrorSchema, ErrorCodeSchema)),
    tags(
        (name = "recipes", description = "Recipe storage and search"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
