//! Recipe HTTP handlers.
//!
//! ```text
//! POST   /api/v1/recipes
//! GET    /api/v1/recipes
//! GET    /api/v1/recipes/filter
//! PUT    /api/v1/recipes/{name}
//! DELETE /api/v1/recipes/{name}
//! ```

use actix_web::{HttpResponse, delete, get, post, put, web};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::{Error, Recipe, RecipeDraft, RecipeFilter, RecipeName};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{
    FieldName, missing_field_error, name_mismatch_error, parse_category, parse_comma_list,
    parse_name, parse_servings, parse_servings_text,
};

const NAME: FieldName = FieldName::new("name");
const SERVINGS: FieldName = FieldName::new("servings");
const INGREDIENTS: FieldName = FieldName::new("ingredients");
const INSTRUCTIONS: FieldName = FieldName::new("instructions");
const CATEGORY: FieldName = FieldName::new("category");

/// Request payload for creating or replacing a recipe.
///
/// On `PUT` the `name` may be omitted; when present it must equal the name in
/// the path.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecipeRequest {
    #[schema(example = "Sambar")]
    pub name: Option<String>,
    #[schema(example = 2, minimum = 1, maximum = 2_147_483_647)]
    pub servings: Option<i64>,
    #[schema(example = json!(["Drumstick", "Tamarind", "Toor dal"]))]
    pub ingredients: Option<Vec<String>>,
    #[schema(example = "Boil the dal, add tamarind water and simmer.")]
    pub instructions: Option<String>,
    /// `VEG` or `NON_VEG`.
    #[schema(example = "VEG")]
    pub category: Option<String>,
}

/// Response payload for a stored recipe.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecipeResponse {
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    pub id: String,
    pub name: String,
    pub servings: u32,
    /// Ingredient set in lexical order.
    pub ingredients: Vec<String>,
    pub instructions: String,
    pub category: String,
}

impl From<Recipe> for RecipeResponse {
    fn from(value: Recipe) -> Self {
        Self {
            id: value.id().to_string(),
            name: value.name().to_string(),
            servings: value.servings().get(),
            ingredients: value.ingredients().iter().cloned().collect(),
            instructions: value.instructions().to_owned(),
            category: value.category().to_string(),
        }
    }
}

/// Query parameters accepted by the filter endpoint.
///
/// `include` and `exclude` are split on commas and each entry is trimmed, so
/// an ingredient stored with a comma or with surrounding whitespace cannot be
/// named here. Such recipes are still reachable through the other criteria
/// and through `GET /recipes`.
#[derive(Debug, Default, Deserialize, Serialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct FilterParams {
    /// `VEG` or `NON_VEG`.
    pub category: Option<String>,
    /// Comma-separated ingredients that must all be present.
    pub include: Option<String>,
    /// Comma-separated ingredients that must all be absent.
    pub exclude: Option<String>,
    /// Exact serving count.
    pub servings: Option<String>,
    /// Case-sensitive substring of the instructions.
    pub instruction: Option<String>,
}

fn parse_recipe_request(payload: RecipeRequest, name: RecipeName) -> Result<RecipeDraft, Error> {
    let servings = payload
        .servings
        .ok_or_else(|| missing_field_error(SERVINGS))?;
    let ingredients = payload
        .ingredients
        .ok_or_else(|| missing_field_error(INGREDIENTS))?;
    let instructions = payload
        .instructions
        .ok_or_else(|| missing_field_error(INSTRUCTIONS))?;
    let category = payload
        .category
        .ok_or_else(|| missing_field_error(CATEGORY))?;

    Ok(RecipeDraft::new(
        name,
        parse_servings(servings, SERVINGS)?,
        ingredients,
        instructions,
        parse_category(category, CATEGORY)?,
    ))
}

fn parse_create_request(mut payload: RecipeRequest) -> Result<RecipeDraft, Error> {
    let name = payload
        .name
        .take()
        .ok_or_else(|| missing_field_error(NAME))?;
    let name = parse_name(name, NAME)?;
    parse_recipe_request(payload, name)
}

fn parse_update_request(
    path_name: String,
    mut payload: RecipeRequest,
) -> Result<(RecipeName, RecipeDraft), Error> {
    let name = parse_name(path_name, NAME)?;
    if let Some(body_name) = payload.name.take() {
        let expected: &str = name.as_ref();
        if body_name != expected {
            return Err(name_mismatch_error(NAME, expected, &body_name));
        }
    }
    let draft = parse_recipe_request(payload, name.clone())?;
    Ok((name, draft))
}

fn parse_filter_params(params: FilterParams) -> Result<RecipeFilter, Error> {
    let FilterParams {
        category,
        include,
        exclude,
        servings,
        instruction,
    } = params;

    let mut filter = RecipeFilter::default()
        .with_included_ingredients(parse_comma_list(include.as_deref()))
        .with_excluded_ingredients(parse_comma_list(exclude.as_deref()));
    if let Some(raw) = category {
        filter = filter.with_category(parse_category(raw, CATEGORY)?);
    }
    if let Some(raw) = servings {
        filter = filter.with_servings(parse_servings_text(&raw, SERVINGS)?.get());
    }
    if let Some(needle) = instruction {
        filter = filter.with_instruction_containing(needle);
    }
    Ok(filter)
}

fn recipe_list(recipes: Vec<Recipe>) -> Vec<RecipeResponse> {
    recipes.into_iter().map(RecipeResponse::from).collect()
}

/// Store a new recipe.
#[utoipa::path(
    post,
    path = "/api/v1/recipes",
    request_body = RecipeRequest,
    responses(
        (status = 201, description = "Recipe stored", body = RecipeResponse),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 409, description = "A recipe with this name already exists", body = ErrorSchema),
        (status = 503, description = "Recipe store unavailable", body = ErrorSchema)
    ),
    tags = ["recipes"],
    operation_id = "createRecipe"
)]
#[post("/recipes")]
pub async fn create_recipe(
    state: web::Data<HttpState>,
    payload: web::Json<RecipeRequest>,
) -> ApiResult<HttpResponse> {
    let draft = parse_create_request(payload.into_inner())?;
    let recipe = state.recipes.create(draft).await?;
    Ok(HttpResponse::Created().json(RecipeResponse::from(recipe)))
}

/// List every stored recipe.
#[utoipa::path(
    get,
    path = "/api/v1/recipes",
    responses(
        (status = 200, description = "All recipes in store order", body = [RecipeResponse]),
        (status = 503, description = "Recipe store unavailable", body = ErrorSchema)
    ),
    tags = ["recipes"],
    operation_id = "listRecipes"
)]
#[get("/recipes")]
pub async fn list_recipes(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<RecipeResponse>>> {
    let recipes = state.recipes_query.list().await?;
    Ok(web::Json(recipe_list(recipes)))
}

/// List the recipes matching every supplied criterion.
#[utoipa::path(
    get,
    path = "/api/v1/recipes/filter",
    params(FilterParams),
    responses(
        (status = 200, description = "Matching recipes in store order", body = [RecipeResponse]),
        (status = 400, description = "Invalid filter criteria", body = ErrorSchema),
        (status = 503, description = "Recipe store unavailable", body = ErrorSchema)
    ),
    tags = ["recipes"],
    operation_id = "filterRecipes"
)]
#[get("/recipes/filter")]
pub async fn filter_recipes(
    state: web::Data<HttpState>,
    params: web::Query<FilterParams>,
) -> ApiResult<web::Json<Vec<RecipeResponse>>> {
    let filter = parse_filter_params(params.into_inner())?;
    let recipes = state.recipes_query.filter(&filter).await?;
    Ok(web::Json(recipe_list(recipes)))
}

/// Replace every field of an existing recipe except its id and name.
#[utoipa::path(
    put,
    path = "/api/v1/recipes/{name}",
    params(("name" = String, Path, description = "Exact, case-sensitive recipe name")),
    request_body = RecipeRequest,
    responses(
        (status = 200, description = "Updated recipe", body = RecipeResponse),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 404, description = "No recipe with this name", body = ErrorSchema),
        (status = 503, description = "Recipe store unavailable", body = ErrorSchema)
    ),
    tags = ["recipes"],
    operation_id = "updateRecipe"
)]
#[put("/recipes/{name}")]
pub async fn update_recipe(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<RecipeRequest>,
) -> ApiResult<web::Json<RecipeResponse>> {
    let (name, draft) = parse_update_request(path.into_inner(), payload.into_inner())?;
    let recipe = state.recipes.update(&name, draft).await?;
    Ok(web::Json(RecipeResponse::from(recipe)))
}

/// Delete a recipe by name. Deleting an unknown name succeeds.
#[utoipa::path(
    delete,
    path = "/api/v1/recipes/{name}",
    params(("name" = String, Path, description = "Exact, case-sensitive recipe name")),
    responses(
        (status = 204, description = "Recipe absent after the call"),
        (status = 400, description = "Invalid name", body = ErrorSchema),
        (status = 503, description = "Recipe store unavailable", body = ErrorSchema)
    ),
    tags = ["recipes"],
    operation_id = "deleteRecipe"
)]
#[delete("/recipes/{name}")]
pub async fn delete_recipe(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let name = parse_name(path.into_inner(), NAME)?;
    state.recipes.delete(&name).await?;
    Ok(HttpResponse::NoContent().finish())
}

/// Register every recipe handler on `cfg`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(create_recipe)
        .service(list_recipes)
        .service(filter_recipes)
        .service(update_recipe)
        .service(delete_recipe);
}

#[cfg(test)]
#[path = "recipes_tests.rs"]
mod tests;
