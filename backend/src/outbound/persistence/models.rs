//! Internal Diesel row structs for database operations.
//!
//! These types never leave the persistence layer.

use diesel::prelude::*;
use uuid::Uuid;

use super::schema::recipes;

/// Row struct for reading from the recipes table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = recipes)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct RecipeRow {
    pub id: Uuid,
    pub name: String,
    pub servings: i32,
    pub ingredients: Vec<String>,
    pub instructions: String,
    pub category: String,
}

/// Insertable struct for new recipes; the database assigns `id`.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = recipes)]
pub(crate) struct NewRecipeRow<'a> {
    pub name: &'a str,
    pub servings: i32,
    pub ingredients: Vec<String>,
    pub instructions: &'a str,
    pub category: &'a str,
}

/// Changeset overwriting every mutable column of a recipe.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = recipes)]
pub(crate) struct RecipeContentUpdate<'a> {
    pub servings: i32,
    pub ingredients: Vec<String>,
    pub instructions: &'a str,
    pub category: &'a str,
}
