//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Provides the Diesel-backed `RecipeRepository`, the `bb8` connection pool,
//! and the embedded schema migrations. Row structs (`models.rs`) and table
//! definitions (`schema.rs`) stay internal; only domain types cross the
//! boundary.
//!
//! # Example
//!
//! ```ignore
//! use recipe_backend::outbound::persistence::{DbPool, DieselRecipeRepository, PoolConfig};
//!
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/recipes")).await?;
//! let repo = DieselRecipeRepository::new(pool);
//! ```

mod diesel_recipe_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_recipe_repository::DieselRecipeRepository;
pub use migrations::{MigrationError, run_pending_migrations};
pub use pool::{DbPool, PoolConfig, PoolError, redact_url};
