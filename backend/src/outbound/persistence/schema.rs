//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match `migrations/` exactly.

diesel::table! {
    /// Recipe documents.
    ///
    /// `name` carries a UNIQUE constraint, which is the authoritative guard
    /// against duplicate names under concurrent creates.
    recipes (id) {
        /// Primary key, generated by the database on insert.
        id -> Uuid,
        /// Unique, case-sensitive recipe name.
        name -> Text,
        /// Portion count, constrained to be at least 1.
        servings -> Int4,
        /// Ingredient set stored as a de-duplicated text array.
        ingredients -> Array<Text>,
        /// Free-text preparation steps.
        instructions -> Text,
        /// `VEG` or `NON_VEG`.
        category -> Varchar,
        /// Record creation timestamp; defines scan order.
        created_at -> Timestamptz,
        /// Last modification timestamp.
        updated_at -> Timestamptz,
    }
}
