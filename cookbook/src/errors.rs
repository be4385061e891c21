use thiserror::Error;

/// Every way a cookbook operation can reject its input.
///
/// All of these are client errors. None of them leave the store in a different state than it was
/// before the call.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CookbookError {
    #[error("Invalid recipe name")]
    EmptyName,

    #[error("Entry name must not be blank")]
    BlankName,

    #[error("Entry name must be unique: {0}")]
    DuplicateName(String),

    #[error("Invalid cookTime")]
    InvalidCookTime,

    #[error("Duplicate required item: {0}")]
    DuplicateRequiredItem(String),

    #[error("Invalid type: {0}")]
    InvalidType(String),

    #[error("Recipe not found: {0}")]
    NotFound(String),

    #[error("Entry is not a recipe: {0}")]
    NotARecipe(String),

    #[error("Recipe contains missing ingredients: {0}")]
    MissingIngredient(String),

    #[error("Quantities overflowed while expanding {0}")]
    QuantityOverflow(String),

    #[error("Recipe {name} expanded past {limit} items, it most likely requires itself")]
    CyclicReference { name: String, limit: usize },
}
