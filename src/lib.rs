pub mod api;
pub mod app;
pub mod bookmarks;
pub mod config;
pub mod error;
pub mod loader;
pub mod model;
pub mod search;
pub mod servings;
pub mod state;
pub mod storage;
pub mod upload;
pub mod wire;

pub use api::{HttpRecipeApi, RecipeApi};
pub use app::RecipeBook;
pub use config::AppConfig;
pub use error::{RecipeError, Result};
pub use model::{Ingredient, Recipe, SearchResultItem, SearchState};
pub use state::AppState;
pub use storage::{FileStore, KeyValueStore, MemoryStore};
pub use upload::RecipeDraft;
