//! Loading a single recipe into the state.
//!
//! The state is touched only after the response has been fully decoded, so a
//! failed load leaves the previous recipe in place. Loads are not fenced: when
//! two fetches are in flight, whichever is installed last wins.

use log::{debug, error};

use crate::api::RecipeApi;
use crate::error::Result;
use crate::model::Recipe;
use crate::state::AppState;

/// Fetch and decode a recipe without touching any state.
pub async fn fetch_recipe(api: &dyn RecipeApi, id: &str) -> Result<Recipe> {
    api.get_recipe(id).await.map_err(|e| {
        error!("Failed to load recipe {}: {}", id, e);
        e
    })
}

/// Make `recipe` the current recipe, flagging it if its id is bookmarked.
pub fn install_recipe(state: &mut AppState, mut recipe: Recipe) {
    recipe.bookmarked = state.is_bookmarked(&recipe.id);
    debug!(
        "Current recipe is now {} (bookmarked: {})",
        recipe.id, recipe.bookmarked
    );
    state.recipe = Some(recipe);
}

/// Fetch recipe `id` and install it as the current recipe.
pub async fn load_recipe(state: &mut AppState, api: &dyn RecipeApi, id: &str) -> Result<()> {
    let recipe = fetch_recipe(api, id).await?;
    install_recipe(state, recipe);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recipe(id: &str) -> Recipe {
        Recipe {
            id: id.to_string(),
            title: format!("Recipe {}", id),
            publisher: "Publisher".to_string(),
            source_url: "http://source".to_string(),
            image: "http://image".to_string(),
            servings: 4,
            cooking_time: 20,
            ingredients: Vec::new(),
            key: None,
            bookmarked: false,
        }
    }

    #[test]
    fn test_install_flags_bookmarked_recipe() {
        let mut state = AppState::new(10);
        let mut bookmark = recipe("5");
        bookmark.bookmarked = true;
        state.bookmarks.push(bookmark);

        install_recipe(&mut state, recipe("5"));
        assert!(state.recipe.as_ref().unwrap().bookmarked);
    }

    #[test]
    fn test_install_clears_stale_flag() {
        let mut state = AppState::new(10);
        let mut stale = recipe("6");
        stale.bookmarked = true;

        install_recipe(&mut state, stale);
        assert!(!state.recipe.as_ref().unwrap().bookmarked);
    }

    #[test]
    fn test_last_install_wins() {
        let mut state = AppState::new(10);
        let first = recipe("1");
        let second = recipe("2");

        // Responses resolving out of order: the later install replaces the earlier one
        install_recipe(&mut state, second);
        install_recipe(&mut state, first);
        assert_eq!(state.recipe.as_ref().unwrap().id, "1");
    }
}
