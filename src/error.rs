use thiserror::Error;

/// Message shown to the user when a drafted ingredient line is not
/// `quantity, unit, description`.
pub const WRONG_INGREDIENT_FORMAT: &str = "Wrong ingredient format! Please use correct format!";

/// Errors that can occur while loading, scaling, bookmarking or uploading recipes
#[derive(Error, Debug)]
pub enum RecipeError {
    /// Transport failure talking to the recipe API
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The recipe API answered with a non-success status
    #[error("Request failed ({status}): {message}")]
    Status { status: u16, message: String },

    /// The configured API URL cannot take a recipe id
    #[error("Invalid API URL: {0}")]
    InvalidUrl(String),

    /// The response did not have the expected shape
    #[error("Unexpected response shape: {0}")]
    Shape(String),

    /// User-supplied draft could not be validated
    #[error("{0}")]
    Validation(String),

    /// No bookmark with the given id exists
    #[error("No bookmark with id '{0}'")]
    NotFound(String),

    /// Operation requires a current recipe but none is loaded
    #[error("No recipe is currently loaded")]
    NoRecipe,

    /// Failed to read or write the persistent store
    #[error("Storage error: {0}")]
    Storage(#[from] std::io::Error),

    /// Persisted bookmarks could not be (de)serialized
    #[error("Storage format error: {0}")]
    StorageFormat(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

pub type Result<T> = std::result::Result<T, RecipeError>;
