//! Domain primitives, services, and ports.
//!
//! Purpose: define the recipe entity, the filter criteria evaluated over the
//! stored recipe set, and the service enforcing name uniqueness and
//! existence. Nothing in here depends on HTTP or on a particular store.
//!
//! Public surface:
//! - Error / ErrorCode: transport-agnostic failure payload.
//! - Recipe, RecipeDraft and field newtypes: the recipe data model.
//! - RecipeFilter: multi-criteria filter.
//! - RecipeService: implementation of the recipe driving ports.
//! - TraceId: request correlation identifier.

pub mod error;
pub mod ports;
pub mod recipe;
pub mod recipe_filter;
pub mod recipe_service;
pub mod trace_id;

pub use self::error::{Error, ErrorCode};
pub use self::recipe::{
    Category, Ingredients, Recipe, RecipeDraft, RecipeId, RecipeName, RecipeValidationError,
    Servings,
};
pub use self::recipe_filter::RecipeFilter;
pub use self::recipe_service::RecipeService;
pub use self::trace_id::TraceId;

/// HTTP header carrying the trace identifier.
pub const TRACE_ID_HEADER: &str = "trace-id";
