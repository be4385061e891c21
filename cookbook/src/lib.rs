//! An in-memory cookbook of ingredients and recipes.
//!
//! Entries are registered one at a time through [`Cookbook::register`] and recipes are flattened
//! into their base ingredients with [`Cookbook::summarize`].

pub mod entry;
pub mod errors;
pub mod flatten;
pub mod normalize;
pub mod registrar;
pub mod store;

pub use entry::{Entry, EntryKind, Ingredient, NewEntry, Recipe, RequiredItem};
pub use errors::CookbookError;
pub use flatten::{IngredientQuantity, Summary};
pub use normalize::parse_handwriting;
pub use store::{Cookbook, DEFAULT_EXPANSION_LIMIT};

pub type Result<T, E = CookbookError> = std::result::Result<T, E>;
