//! Bookmark collection management.
//!
//! Bookmarks are snapshots: adding a recipe stores a copy, and the current
//! recipe's `bookmarked` flag is updated explicitly by id rather than through
//! a shared reference. Every mutation rewrites the whole collection to the
//! store; a failed write is returned after the in-memory change is made.

use log::{debug, warn};

use crate::error::{RecipeError, Result};
use crate::model::Recipe;
use crate::state::AppState;
use crate::storage::{self, KeyValueStore};

fn set_current_flag(state: &mut AppState, id: &str, bookmarked: bool) {
    if let Some(current) = state.recipe.as_mut().filter(|r| r.id == id) {
        current.bookmarked = bookmarked;
    }
}

/// Bookmark a snapshot of `recipe` and persist the collection.
///
/// Re-adding an id that is already bookmarked keeps the existing snapshot.
pub fn add_bookmark(
    state: &mut AppState,
    store: &dyn KeyValueStore,
    mut recipe: Recipe,
) -> Result<()> {
    set_current_flag(state, &recipe.id, true);

    if state.is_bookmarked(&recipe.id) {
        warn!("Recipe {} is already bookmarked", recipe.id);
        return Ok(());
    }

    recipe.bookmarked = true;
    debug!("Bookmarking recipe {}", recipe.id);
    state.bookmarks.push(recipe);
    storage::persist_bookmarks(store, &state.bookmarks)
}

/// Bookmark the current recipe.
pub fn add_current_bookmark(state: &mut AppState, store: &dyn KeyValueStore) -> Result<()> {
    let recipe = state.recipe.clone().ok_or(RecipeError::NoRecipe)?;
    add_bookmark(state, store, recipe)
}

/// Remove the bookmark with `id` and persist the collection.
///
/// The current recipe is unflagged only when it is the one being removed.
/// An unknown id is reported as [`RecipeError::NotFound`] and changes nothing.
pub fn delete_bookmark(state: &mut AppState, store: &dyn KeyValueStore, id: &str) -> Result<()> {
    let index = state
        .bookmarks
        .iter()
        .position(|bookmark| bookmark.id == id)
        .ok_or_else(|| RecipeError::NotFound(id.to_string()))?;

    state.bookmarks.remove(index);
    set_current_flag(state, id, false);
    debug!("Removed bookmark {}", id);
    storage::persist_bookmarks(store, &state.bookmarks)
}

/// Bookmark the current recipe if it isn't, unbookmark it if it is.
///
/// Returns the recipe's new bookmark status.
pub fn toggle_current_bookmark(state: &mut AppState, store: &dyn KeyValueStore) -> Result<bool> {
    let current = state.recipe.as_ref().ok_or(RecipeError::NoRecipe)?;

    if current.bookmarked {
        let id = current.id.clone();
        delete_bookmark(state, store, &id)?;
        Ok(false)
    } else {
        add_current_bookmark(state, store)?;
        Ok(true)
    }
}

/// Drop every bookmark and persist the empty collection.
pub fn clear_bookmarks(state: &mut AppState, store: &dyn KeyValueStore) -> Result<()> {
    state.bookmarks.clear();
    if let Some(current) = state.recipe.as_mut() {
        current.bookmarked = false;
    }
    storage::persist_bookmarks(store, &state.bookmarks)
}
