//! Recipe data model.
//!
//! A recipe is looked up externally by its [`RecipeName`], which is unique
//! among stored recipes. The [`RecipeId`] is assigned by the store on first
//! insert and never changes afterwards.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Validation errors raised while constructing recipe fields.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecipeValidationError {
    /// Name is empty once surrounding whitespace is ignored.
    #[error("recipe name must not be empty")]
    EmptyName,
    /// Servings must be at least one.
    #[error("servings must be at least 1")]
    ZeroServings,
    /// Servings exceed [`Servings::MAX`].
    #[error("servings must be at most {max}")]
    TooManyServings {
        /// The largest accepted count.
        max: u32,
    },
    /// Category text is not one of the known categories.
    #[error("unknown recipe category: {value}")]
    UnknownCategory {
        /// The rejected input, verbatim.
        value: String,
    },
}

/// Store-assigned recipe identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecipeId(Uuid);

impl RecipeId {
    /// Wrap an identifier produced by the store.
    pub fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    /// Generate a fresh identifier for stores that allocate ids in process.
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Access the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for RecipeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Unique, case-sensitive recipe name.
///
/// The raw text is kept verbatim; only all-whitespace input is rejected.
///
/// # Examples
/// ```
/// use recipe_backend::domain::RecipeName;
///
/// let name = RecipeName::new("Sambar").expect("valid name");
/// assert_eq!(name.as_ref(), "Sambar");
/// assert!(RecipeName::new("   ").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RecipeName(String);

impl RecipeName {
    /// Validate and construct a [`RecipeName`].
    pub fn new(name: impl Into<String>) -> Result<Self, RecipeValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(RecipeValidationError::EmptyName);
        }
        Ok(Self(name))
    }
}

impl AsRef<str> for RecipeName {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for RecipeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<RecipeName> for String {
    fn from(value: RecipeName) -> Self {
        value.0
    }
}

impl TryFrom<String> for RecipeName {
    type Error = RecipeValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Number of portions a recipe yields, between 1 and [`Servings::MAX`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Servings(u32);

impl Servings {
    /// Largest count a store must be able to hold (a signed 32-bit column).
    pub const MAX: u32 = 2_147_483_647;

    /// Validate and construct a [`Servings`] count.
    pub fn new(count: u32) -> Result<Self, RecipeValidationError> {
        match count {
            0 => Err(RecipeValidationError::ZeroServings),
            n if n > Self::MAX => Err(RecipeValidationError::TooManyServings { max: Self::MAX }),
            n => Ok(Self(n)),
        }
    }

    /// Portion count as a plain integer.
    pub fn get(self) -> u32 {
        self.0
    }
}

impl From<Servings> for u32 {
    fn from(value: Servings) -> Self {
        value.0
    }
}

impl TryFrom<u32> for Servings {
    type Error = RecipeValidationError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Dietary classification of a recipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    /// Vegetarian.
    Veg,
    /// Contains meat or fish.
    NonVeg,
}

impl Category {
    /// Wire representation, e.g. `NON_VEG`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Veg => "VEG",
            Self::NonVeg => "NON_VEG",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = RecipeValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "VEG" => Ok(Self::Veg),
            "NON_VEG" => Ok(Self::NonVeg),
            other => Err(RecipeValidationError::UnknownCategory {
                value: other.to_owned(),
            }),
        }
    }
}

/// Unordered ingredient set; duplicates collapse.
pub type Ingredients = BTreeSet<String>;

/// Every recipe field except the store-assigned id.
///
/// Used as the candidate for create and as the replacement for update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeDraft {
    /// Lookup key; ignored when the draft replaces an existing recipe.
    pub name: RecipeName,
    /// Portion count.
    pub servings: Servings,
    /// Ingredient set, matched verbatim by filters.
    pub ingredients: Ingredients,
    /// Free-text preparation steps.
    pub instructions: String,
    /// Dietary category.
    pub category: Category,
}

impl RecipeDraft {
    /// Build a draft, collecting `ingredients` into a set.
    pub fn new<I, S>(
        name: RecipeName,
        servings: Servings,
        ingredients: I,
        instructions: impl Into<String>,
        category: Category,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name,
            servings,
            ingredients: ingredients.into_iter().map(Into::into).collect(),
            instructions: instructions.into(),
            category,
        }
    }
}

/// Persisted recipe.
///
/// ## Invariants
/// - `id` never changes once assigned.
/// - `name` is unique among stored recipes and is not altered by updates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recipe {
    id: RecipeId,
    name: RecipeName,
    servings: Servings,
    ingredients: Ingredients,
    instructions: String,
    category: Category,
}

impl Recipe {
    /// Attach a store-assigned id to a draft.
    pub fn from_draft(id: RecipeId, draft: RecipeDraft) -> Self {
        let RecipeDraft {
            name,
            servings,
            ingredients,
            instructions,
            category,
        } = draft;
        Self {
            id,
            name,
            servings,
            ingredients,
            instructions,
            category,
        }
    }

    /// Overwrite every mutable field with `replacement`, keeping `id` and
    /// `name`. The replacement's own name is ignored.
    ///
    /// # Examples
    /// ```
    /// use recipe_backend::domain::{Category, Recipe, RecipeDraft, RecipeId, RecipeName, Servings};
    ///
    /// let name = RecipeName::new("Sambar").expect("name");
    /// let servings = Servings::new(2).expect("servings");
    /// let original = Recipe::from_draft(
    ///     RecipeId::random(),
    ///     RecipeDraft::new(name.clone(), servings, ["Tomato"], "Boil", Category::Veg),
    /// );
    /// let replacement = RecipeDraft::new(
    ///     RecipeName::new("Other").expect("name"),
    ///     Servings::new(4).expect("servings"),
    ///     ["Drumstick"],
    ///     "Boil and serve hot",
    ///     Category::Veg,
    /// );
    /// let updated = original.clone().with_content(replacement);
    /// assert_eq!(updated.id(), original.id());
    /// assert_eq!(updated.name(), &name);
    /// assert_eq!(updated.servings().get(), 4);
    /// ```
    #[must_use]
    pub fn with_content(self, replacement: RecipeDraft) -> Self {
        Self {
            id: self.id,
            name: self.name,
            servings: replacement.servings,
            ingredients: replacement.ingredients,
            instructions: replacement.instructions,
            category: replacement.category,
        }
    }

    /// Store-assigned identifier.
    pub fn id(&self) -> RecipeId {
        self.id
    }

    /// Unique name the recipe is addressed by.
    pub fn name(&self) -> &RecipeName {
        &self.name
    }

    /// Portion count.
    pub fn servings(&self) -> Servings {
        self.servings
    }

    /// Ingredient set in sorted order.
    pub fn ingredients(&self) -> &Ingredients {
        &self.ingredients
    }

    /// Preparation steps.
    pub fn instructions(&self) -> &str {
        self.instructions.as_str()
    }

    /// Dietary category.
    pub fn category(&self) -> Category {
        self.category
    }

    /// Whether the ingredient set contains `ingredient` verbatim.
    pub fn has_ingredient(&self, ingredient: &str) -> bool {
        self.ingredients.contains(ingredient)
    }
}
