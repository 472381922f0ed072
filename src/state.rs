//! The application state: current recipe, active search and bookmarks.
//!
//! One `AppState` is built per application instance and handed by reference
//! to the operations in [`crate::loader`], [`crate::search`],
//! [`crate::servings`], [`crate::bookmarks`] and [`crate::upload`]. None of
//! them lock; all mutation happens on the caller's task.

use log::info;

use crate::error::Result;
use crate::model::{Recipe, SearchState};
use crate::storage::{self, KeyValueStore};

#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// Recipe currently displayed, if any
    pub recipe: Option<Recipe>,
    pub search: SearchState,
    /// Bookmarked recipe snapshots in insertion order, unique by id
    pub bookmarks: Vec<Recipe>,
}

impl AppState {
    pub fn new(results_per_page: usize) -> Self {
        Self {
            recipe: None,
            search: SearchState::new(results_per_page),
            bookmarks: Vec::new(),
        }
    }

    /// Build the state with bookmarks read from `store`.
    pub fn hydrate(store: &dyn KeyValueStore, results_per_page: usize) -> Result<Self> {
        let mut state = Self::new(results_per_page);
        state.bookmarks = storage::load_bookmarks(store)?;
        info!("Hydrated {} bookmarks", state.bookmarks.len());
        Ok(state)
    }

    pub fn is_bookmarked(&self, id: &str) -> bool {
        self.bookmarks.iter().any(|bookmark| bookmark.id == id)
    }
}
