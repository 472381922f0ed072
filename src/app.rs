use std::sync::Arc;

use crate::api::{HttpRecipeApi, RecipeApi};
use crate::config::AppConfig;
use crate::error::Result;
use crate::model::SearchResultItem;
use crate::state::AppState;
use crate::storage::{FileStore, KeyValueStore};
use crate::upload::RecipeDraft;
use crate::{bookmarks, loader, search, servings, upload};

/// Application state bundled with the API and store it is driven by.
///
/// This is what a controller holds: it calls the operations below in response
/// to user actions and reads [`RecipeBook::state`] to render.
pub struct RecipeBook {
    state: AppState,
    api: Arc<dyn RecipeApi>,
    store: Arc<dyn KeyValueStore>,
}

impl RecipeBook {
    /// Create a recipe book, hydrating bookmarks from `store`.
    pub fn new(
        api: Arc<dyn RecipeApi>,
        store: Arc<dyn KeyValueStore>,
        results_per_page: usize,
    ) -> Result<Self> {
        let state = AppState::hydrate(store.as_ref(), results_per_page)?;
        Ok(Self { state, api, store })
    }

    /// HTTP API and file-backed bookmarks as described by `config`.
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let api = Arc::new(HttpRecipeApi::new(config)?);
        let store = Arc::new(FileStore::new(&config.data_dir));
        Self::new(api, store, config.results_per_page)
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub async fn load_recipe(&mut self, id: &str) -> Result<()> {
        loader::load_recipe(&mut self.state, self.api.as_ref(), id).await
    }

    pub async fn load_search_results(&mut self, query: &str) -> Result<()> {
        search::load_search_results(&mut self.state, self.api.as_ref(), query).await
    }

    pub fn set_page_and_get_results(&mut self, page: usize) -> &[SearchResultItem] {
        search::set_page_and_get_results(&mut self.state, page)
    }

    pub fn current_page_results(&mut self) -> &[SearchResultItem] {
        search::current_page_results(&mut self.state)
    }

    pub fn update_servings(&mut self, new_servings: u32) -> Result<()> {
        servings::update_servings(&mut self.state, new_servings)
    }

    pub fn add_bookmark(&mut self, recipe: crate::Recipe) -> Result<()> {
        bookmarks::add_bookmark(&mut self.state, self.store.as_ref(), recipe)
    }

    pub fn add_current_bookmark(&mut self) -> Result<()> {
        bookmarks::add_current_bookmark(&mut self.state, self.store.as_ref())
    }

    pub fn delete_bookmark(&mut self, id: &str) -> Result<()> {
        bookmarks::delete_bookmark(&mut self.state, self.store.as_ref(), id)
    }

    pub fn toggle_current_bookmark(&mut self) -> Result<bool> {
        bookmarks::toggle_current_bookmark(&mut self.state, self.store.as_ref())
    }

    pub fn clear_bookmarks(&mut self) -> Result<()> {
        bookmarks::clear_bookmarks(&mut self.state, self.store.as_ref())
    }

    pub async fn upload_recipe(&mut self, draft: &RecipeDraft) -> Result<()> {
        upload::upload_recipe(
            &mut self.state,
            self.api.as_ref(),
            self.store.as_ref(),
            draft,
        )
        .await
    }
}
