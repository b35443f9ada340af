//! Process-local recipe store.
//!
//! Used when no database is configured and throughout the test suites. Records
//! are kept in insertion order so `find_all` matches the scan order of the
//! PostgreSQL adapter.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::ports::{RecipeRepository, RecipeRepositoryError};
use crate::domain::{Recipe, RecipeDraft, RecipeId, RecipeName};

/// In-memory implementation of the `RecipeRepository` port.
///
/// Clones share the same underlying records.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRecipeRepository {
    records: Arc<RwLock<Vec<Recipe>>>,
}

impl InMemoryRecipeRepository {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored recipes.
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    /// Whether the store holds no recipes.
    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait]
impl RecipeRepository for InMemoryRecipeRepository {
    async fn find_by_name(
        &self,
        name: &RecipeName,
    ) -> Result<Option<Recipe>, RecipeRepositoryError> {
        let records = self.records.read().await;
        Ok(records.iter().find(|recipe| recipe.name() == name).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Recipe>, RecipeRepositoryError> {
        Ok(self.records.read().await.clone())
    }

    async fn insert(&self, draft: &RecipeDraft) -> Result<Recipe, RecipeRepositoryError> {
        let mut records = self.records.write().await;
        if records.iter().any(|recipe| recipe.name() == &draft.name) {
            return Err(RecipeRepositoryError::duplicate_name(draft.name.as_ref()));
        }
        let recipe = Recipe::from_draft(RecipeId::random(), draft.clone());
        records.push(recipe.clone());
        Ok(recipe)
    }

    async fn save(&self, recipe: &Recipe) -> Result<Recipe, RecipeRepositoryError> {
        let mut records = self.records.write().await;
        let slot = records
            .iter_mut()
            .find(|stored| stored.id() == recipe.id())
            .ok_or_else(|| RecipeRepositoryError::missing(recipe.name().as_ref()))?;
        *slot = recipe.clone();
        Ok(recipe.clone())
    }

    async fn delete_by_name(&self, name: &RecipeName) -> Result<(), RecipeRepositoryError> {
        self.records
            .write()
            .await
            .retain(|recipe| recipe.name() != name);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use crate::domain::{Category, Servings};
    use rstest::{fixture, rstest};

    fn name(value: &str) -> RecipeName {
        RecipeName::new(value).expect("valid name")
    }

    fn draft(value: &str, servings: u32) -> RecipeDraft {
        RecipeDraft::new(
            name(value),
            Servings::new(servings).expect("valid servings"),
            ["Tomato", "Onion"],
            "Boil",
            Category::Veg,
        )
    }

    #[fixture]
    fn repo() -> InMemoryRecipeRepository {
        InMemoryRecipeRepository::new()
    }

    #[rstest]
    #[tokio::test]
    async fn insert_assigns_id_and_is_findable(repo: InMemoryRecipeRepository) {
        let stored = repo.insert(&draft("Sambar", 2)).await.expect("insert");

        let found = repo
            .find_by_name(&name("Sambar"))
            .await
            .expect("lookup")
            .expect("present");
        assert_eq!(found, stored);
    }

    #[rstest]
    #[tokio::test]
    async fn insert_rejects_duplicate_names(repo: InMemoryRecipeRepository) {
        repo.insert(&draft("Sambar", 2)).await.expect("first insert");

        let err = repo
            .insert(&draft("Sambar", 4))
            .await
            .expect_err("duplicate");

        assert!(matches!(err, RecipeRepositoryError::DuplicateName { .. }));
        assert_eq!(repo.len().await, 1);
    }

    #[rstest]
    #[tokio::test]
    async fn lookup_is_case_sensitive(repo: InMemoryRecipeRepository) {
        repo.insert(&draft("Sambar", 2)).await.expect("insert");

        let found = repo.find_by_name(&name("sambar")).await.expect("lookup");

        assert!(found.is_none());
    }

    #[rstest]
    #[tokio::test]
    async fn find_all_preserves_insertion_order(repo: InMemoryRecipeRepository) {
        for title in ["Masala", "Sambar", "Biryani"] {
            repo.insert(&draft(title, 2)).await.expect("insert");
        }

        let names: Vec<String> = repo
            .find_all()
            .await
            .expect("scan")
            .iter()
            .map(|recipe| recipe.name().to_string())
            .collect();

        assert_eq!(names, ["Masala", "Sambar", "Biryani"]);
    }

    #[rstest]
    #[tokio::test]
    async fn save_overwrites_by_id(repo: InMemoryRecipeRepository) {
        let stored = repo.insert(&draft("Sambar", 2)).await.expect("insert");
        let updated = stored.clone().with_content(draft("Sambar", 6));

        repo.save(&updated).await.expect("save");

        let found = repo
            .find_by_name(&name("Sambar"))
            .await
            .expect("lookup")
            .expect("present");
        assert_eq!(found.id(), stored.id());
        assert_eq!(found.servings().get(), 6);
    }

    #[rstest]
    #[tokio::test]
    async fn save_of_unknown_id_is_missing(repo: InMemoryRecipeRepository) {
        let orphan = Recipe::from_draft(RecipeId::random(), draft("Sambar", 2));

        let err = repo.save(&orphan).await.expect_err("unknown id");

        assert!(matches!(err, RecipeRepositoryError::Missing { .. }));
    }

    #[rstest]
    #[tokio::test]
    async fn delete_removes_only_the_named_recipe(repo: InMemoryRecipeRepository) {
        repo.insert(&draft("Sambar", 2)).await.expect("insert");
        repo.insert(&draft("Masala", 2)).await.expect("insert");

        repo.delete_by_name(&name("Sambar")).await.expect("delete");
        repo.delete_by_name(&name("Sambar")).await.expect("repeat delete");

        let remaining = repo.find_all().await.expect("scan");
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].name().as_ref(), "Masala");
    }

    #[rstest]
    #[tokio::test]
    async fn clones_share_records(repo: InMemoryRecipeRepository) {
        let other = repo.clone();

        other.insert(&draft("Sambar", 2)).await.expect("insert");

        assert!(!repo.is_empty().await);
    }
}
