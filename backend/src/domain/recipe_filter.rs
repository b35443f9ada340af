//! Multi-criteria recipe filter.
//!
//! Every criterion is optional and the supplied ones compose with logical
//! AND. Empty ingredient lists and an empty instruction substring count as
//! "not supplied".

use super::{Category, Recipe};

/// Criteria applied to the scanned recipe set.
///
/// # Examples
/// ```
/// use recipe_backend::domain::{Category, RecipeFilter};
///
/// let filter = RecipeFilter::default()
///     .with_category(Category::Veg)
///     .with_included_ingredients(["Potato"])
///     .with_servings(4);
/// assert!(!filter.is_empty());
/// assert!(RecipeFilter::default().is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecipeFilter {
    /// Exact category match.
    pub category: Option<Category>,
    /// Every listed ingredient must be present.
    pub include_ingredients: Vec<String>,
    /// None of the listed ingredients may be present.
    pub exclude_ingredients: Vec<String>,
    /// Exact serving count.
    pub servings: Option<u32>,
    /// Case-sensitive substring of the instructions.
    pub instruction_contains: Option<String>,
}

impl RecipeFilter {
    /// Keep only recipes of `category`.
    #[must_use]
    pub fn with_category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    /// Keep only recipes containing every one of `ingredients`.
    #[must_use]
    pub fn with_included_ingredients<I, S>(mut self, ingredients: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.include_ingredients = ingredients.into_iter().map(Into::into).collect();
        self
    }

    /// Drop recipes containing any of `ingredients`.
    #[must_use]
    pub fn with_excluded_ingredients<I, S>(mut self, ingredients: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude_ingredients = ingredients.into_iter().map(Into::into).collect();
        self
    }

    /// Keep only recipes yielding exactly `servings` portions.
    #[must_use]
    pub fn with_servings(mut self, servings: u32) -> Self {
        self.servings = Some(servings);
        self
    }

    /// Keep only recipes whose instructions contain `needle` (case-sensitive).
    #[must_use]
    pub fn with_instruction_containing(mut self, needle: impl Into<String>) -> Self {
        self.instruction_contains = Some(needle.into());
        self
    }

    fn instruction_needle(&self) -> Option<&str> {
        self.instruction_contains
            .as_deref()
            .filter(|needle| !needle.is_empty())
    }

    /// True when no criterion would be applied.
    pub fn is_empty(&self) -> bool {
        self.category.is_none()
            && self.include_ingredients.is_empty()
            && self.exclude_ingredients.is_empty()
            && self.servings.is_none()
            && self.instruction_needle().is_none()
    }

    /// Evaluate every supplied criterion against `recipe`.
    pub fn matches(&self, recipe: &Recipe) -> bool {
        if self
            .category
            .is_some_and(|category| recipe.category() != category)
        {
            return false;
        }
        if self
            .servings
            .is_some_and(|servings| recipe.servings().get() != servings)
        {
            return false;
        }
        if !self
            .include_ingredients
            .iter()
            .all(|ingredient| recipe.has_ingredient(ingredient))
        {
            return false;
        }
        if self
            .exclude_ingredients
            .iter()
            .any(|ingredient| recipe.has_ingredient(ingredient))
        {
            return false;
        }
        self.instruction_needle()
            .is_none_or(|needle| recipe.instructions().contains(needle))
    }

    /// Retain the matching recipes, preserving their order.
    pub fn apply(&self, recipes: Vec<Recipe>) -> Vec<Recipe> {
        if self.is_empty() {
            return recipes;
        }
        recipes
            .into_iter()
            .filter(|recipe| self.matches(recipe))
            .collect()
    }
}
