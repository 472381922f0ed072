use log::{debug, error};

use crate::api::RecipeApi;
use crate::error::Result;
use crate::model::SearchResultItem;
use crate::state::AppState;

/// Run a new search for `query` and reset the cursor to the first page.
///
/// The query is recorded before the request is made and stays recorded even
/// when the request fails; results and page are only replaced on success.
pub async fn load_search_results(
    state: &mut AppState,
    api: &dyn RecipeApi,
    query: &str,
) -> Result<()> {
    state.search.query = query.to_string();

    let results = api.search(query).await.map_err(|e| {
        error!("Search for '{}' failed: {}", query, e);
        e
    })?;

    debug!("Search for '{}' returned {} results", query, results.len());
    state.search.results = results;
    state.search.page = 1;
    Ok(())
}

/// Move the pagination cursor to `page` and return that page of results.
///
/// Pages past the end yield a short or empty slice rather than an error.
pub fn set_page_and_get_results(state: &mut AppState, page: usize) -> &[SearchResultItem] {
    state.search.page = page;
    state.search.page_window(page)
}

/// Results for the page the cursor already points at.
pub fn current_page_results(state: &mut AppState) -> &[SearchResultItem] {
    let page = state.search.page;
    set_page_and_get_results(state, page)
}
