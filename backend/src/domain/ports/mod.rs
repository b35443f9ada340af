//! Domain ports defining the edges of the hexagon.
//!
//! Driven ports (repositories) expose strongly typed errors so adapters map
//! their failures into predictable variants. Driving ports (commands and
//! queries) are what inbound adapters call, and they speak the domain
//! [`Error`](crate::domain::Error).

mod macros;
pub(crate) use macros::define_port_error;

mod recipe_command;
mod recipe_query;
mod recipe_repository;

pub use recipe_command::{FixtureRecipeCommand, RecipeCommand};
pub use recipe_query::{FixtureRecipeQuery, RecipeQuery};
#[cfg(test)]
pub use recipe_repository::MockRecipeRepository;
pub use recipe_repository::{RecipeRepository, RecipeRepositoryError};
