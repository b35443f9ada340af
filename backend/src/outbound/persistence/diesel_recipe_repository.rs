//! PostgreSQL-backed `RecipeRepository` implementation using Diesel ORM.
//!
//! The `recipes.name` UNIQUE constraint backs the service's uniqueness check;
//! a violation surfaces as [`RecipeRepositoryError::DuplicateName`].

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::debug;

use crate::domain::ports::{RecipeRepository, RecipeRepositoryError};
use crate::domain::{Category, Recipe, RecipeDraft, RecipeId, RecipeName, Servings};

use super::models::{NewRecipeRow, RecipeContentUpdate, RecipeRow};
use super::pool::{DbPool, PoolError};
use super::schema::recipes;

/// Diesel-backed implementation of the `RecipeRepository` port.
#[derive(Clone)]
pub struct DieselRecipeRepository {
    pool: DbPool,
}

impl DieselRecipeRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> RecipeRepositoryError {
    match error {
        PoolError::Checkout { message } | PoolError::Build { message } => {
            RecipeRepositoryError::connection(message)
        }
    }
}

/// Map Diesel errors, attributing unique violations to `name`.
fn map_diesel_error(error: diesel::result::Error, name: &str) -> RecipeRepositoryError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(
            error_type = %std::any::type_name_of_val(&error),
            "diesel operation failed"
        ),
    }

    match error {
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
            RecipeRepositoryError::duplicate_name(name)
        }
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            RecipeRepositoryError::connection("database connection error")
        }
        DieselError::NotFound => RecipeRepositoryError::query("record not found"),
        DieselError::QueryBuilderError(_) => RecipeRepositoryError::query("database query error"),
        _ => RecipeRepositoryError::query("database error"),
    }
}

fn invalid_row(id: uuid::Uuid, reason: impl std::fmt::Display) -> RecipeRepositoryError {
    RecipeRepositoryError::query(format!("stored recipe {id} is invalid: {reason}"))
}

/// Convert a database row into a domain recipe, re-validating every field.
fn row_to_recipe(row: RecipeRow) -> Result<Recipe, RecipeRepositoryError> {
    let RecipeRow {
        id,
        name,
        servings,
        ingredients,
        instructions,
        category,
    } = row;

    let name = RecipeName::new(name).map_err(|err| invalid_row(id, err))?;
    let servings = u32::try_from(servings)
        .map_err(|err| invalid_row(id, err))
        .and_then(|count| Servings::new(count).map_err(|err| invalid_row(id, err)))?;
    let category = category
        .parse::<Category>()
        .map_err(|err| invalid_row(id, err))?;

    Ok(Recipe::from_draft(
        RecipeId::from_uuid(id),
        RecipeDraft::new(name, servings, ingredients, instructions, category),
    ))
}

fn servings_for_db(servings: Servings, name: &str) -> Result<i32, RecipeRepositoryError> {
    i32::try_from(servings.get()).map_err(|_| {
        RecipeRepositoryError::query(format!("servings for {name} exceed the storable range"))
    })
}

#[async_trait]
impl RecipeRepository for DieselRecipeRepository {
    async fn find_by_name(
        &self,
        name: &RecipeName,
    ) -> Result<Option<Recipe>, RecipeRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<RecipeRow> = recipes::table
            .filter(recipes::name.eq(name.as_ref()))
            .select(RecipeRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(|err| map_diesel_error(err, name.as_ref()))?;

        row.map(row_to_recipe).transpose()
    }

    async fn find_all(&self) -> Result<Vec<Recipe>, RecipeRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<RecipeRow> = recipes::table
            .order((recipes::created_at.asc(), recipes::id.asc()))
            .select(RecipeRow::as_select())
            .load(&mut conn)
            .await
            .map_err(|err| map_diesel_error(err, ""))?;

        rows.into_iter().map(row_to_recipe).collect()
    }

    async fn insert(&self, draft: &RecipeDraft) -> Result<Recipe, RecipeRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let name = draft.name.as_ref();

        let new_row = NewRecipeRow {
            name,
            servings: servings_for_db(draft.servings, name)?,
            ingredients: draft.ingredients.iter().cloned().collect(),
            instructions: draft.instructions.as_str(),
            category: draft.category.as_str(),
        };

        let row = diesel::insert_into(recipes::table)
            .values(&new_row)
            .returning(RecipeRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(|err| map_diesel_error(err, name))?;

        row_to_recipe(row)
    }

    async fn save(&self, recipe: &Recipe) -> Result<Recipe, RecipeRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let name = recipe.name().as_ref();

        let update = RecipeContentUpdate {
            servings: servings_for_db(recipe.servings(), name)?,
            ingredients: recipe.ingredients().iter().cloned().collect(),
            instructions: recipe.instructions(),
            category: recipe.category().as_str(),
        };

        let row: Option<RecipeRow> = diesel::update(recipes::table.find(*recipe.id().as_uuid()))
            .set((&update, recipes::updated_at.eq(diesel::dsl::now)))
            .returning(RecipeRow::as_returning())
            .get_result(&mut conn)
            .await
            .optional()
            .map_err(|err| map_diesel_error(err, name))?;

        match row {
            Some(row) => row_to_recipe(row),
            None => Err(RecipeRepositoryError::missing(name)),
        }
    }

    async fn delete_by_name(&self, name: &RecipeName) -> Result<(), RecipeRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let removed = diesel::delete(recipes::table.filter(recipes::name.eq(name.as_ref())))
            .execute(&mut conn)
            .await
            .map_err(|err| map_diesel_error(err, name.as_ref()))?;
        debug!(%name, removed, "recipe rows deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use rstest::rstest;

    fn row(servings: i32, category: &str) -> RecipeRow {
        RecipeRow {
            id: uuid::Uuid::new_v4(),
            name: "Salmon Gravy".to_owned(),
            servings,
            ingredients: vec!["Salmon".to_owned(), "Tomato".to_owned()],
            instructions: "Cook in oven".to_owned(),
            category: category.to_owned(),
        }
    }

    #[rstest]
    fn pool_error_maps_to_connection_error() {
        let repo_err = map_pool_error(PoolError::checkout("connection refused"));

        assert!(matches!(repo_err, RecipeRepositoryError::Connection { .. }));
        assert!(repo_err.to_string().contains("connection refused"));
    }

    #[rstest]
    fn unique_violation_maps_to_duplicate_name() {
        let violation = diesel::result::Error::DatabaseError(
            diesel::result::DatabaseErrorKind::UniqueViolation,
            Box::new("duplicate key".to_owned()),
        );

        let repo_err = map_diesel_error(violation, "Sambar");

        assert_eq!(repo_err, RecipeRepositoryError::duplicate_name("Sambar"));
    }

    #[rstest]
    fn closed_connection_maps_to_connection_error() {
        let closed = diesel::result::Error::DatabaseError(
            diesel::result::DatabaseErrorKind::ClosedConnection,
            Box::new("server closed the connection".to_owned()),
        );

        let repo_err = map_diesel_error(closed, "Sambar");

        assert!(matches!(repo_err, RecipeRepositoryError::Connection { .. }));
    }

    #[rstest]
    fn largest_servings_fit_the_column() {
        let servings = Servings::new(Servings::MAX).expect("within range");

        assert_eq!(servings_for_db(servings, "Feast"), Ok(i32::MAX));
    }

    #[rstest]
    fn not_found_maps_to_query_error() {
        let repo_err = map_diesel_error(diesel::result::Error::NotFound, "Sambar");

        assert!(matches!(repo_err, RecipeRepositoryError::Query { .. }));
    }

    #[rstest]
    fn row_converts_to_recipe() {
        let source = row(4, "NON_VEG");
        let id = source.id;

        let recipe = row_to_recipe(source).expect("valid row");

        assert_eq!(recipe.id(), RecipeId::from_uuid(id));
        assert_eq!(recipe.name().as_ref(), "Salmon Gravy");
        assert_eq!(recipe.servings().get(), 4);
        assert_eq!(recipe.category(), Category::NonVeg);
        assert!(recipe.has_ingredient("Salmon"));
    }

    #[rstest]
    #[case(0, "VEG")]
    #[case(-1, "VEG")]
    #[case(2, "vegan")]
    fn invalid_rows_are_query_errors(#[case] servings: i32, #[case] category: &str) {
        let err = row_to_recipe(row(servings, category)).expect_err("invalid row");

        assert!(matches!(err, RecipeRepositoryError::Query { .. }));
        assert!(err.to_string().contains("is invalid"));
    }
}
