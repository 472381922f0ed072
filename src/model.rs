use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    /// `None` when the recipe gives no amount ("salt, to taste")
    pub quantity: Option<f64>,
    #[serde(default)]
    pub unit: String,
    pub description: String,
}

/// A full recipe as displayed and as stored in the bookmark collection.
///
/// Serializes in the persisted bookmark shape (`sourceUrl`, `cookingTime`, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: String,
    pub title: String,
    pub publisher: String,
    pub source_url: String,
    pub image: String,
    pub servings: u32,
    pub cooking_time: u32,
    pub ingredients: Vec<Ingredient>,
    /// Present only on user-submitted recipes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    /// Derived from the bookmark collection; recomputed explicitly, never live.
    #[serde(default)]
    pub bookmarked: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResultItem {
    pub id: String,
    pub title: String,
    pub publisher: String,
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
}

/// Query, results and pagination cursor of the active search.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchState {
    pub query: String,
    pub page: usize,
    pub results: Vec<SearchResultItem>,
    results_per_page: usize,
}

impl SearchState {
    /// Empty search state with a fixed page size.
    ///
    /// A page size of zero is bumped to one so the page window is always defined.
    pub fn new(results_per_page: usize) -> Self {
        Self {
            query: String::new(),
            page: 1,
            results: Vec::new(),
            results_per_page: results_per_page.max(1),
        }
    }

    pub fn results_per_page(&self) -> usize {
        self.results_per_page
    }

    /// `results[(page-1)*N .. page*N]`, cut short at the end of the results.
    ///
    /// Does not touch the cursor; see [`crate::search::set_page_and_get_results`].
    pub fn page_window(&self, page: usize) -> &[SearchResultItem] {
        let len = self.results.len();
        let start = page.saturating_sub(1).saturating_mul(self.results_per_page);
        let end = page.saturating_mul(self.results_per_page);
        &self.results[start.min(len)..end.min(len)]
    }

    /// Number of pages needed to show every result.
    pub fn page_count(&self) -> usize {
        self.results.len().div_ceil(self.results_per_page)
    }

    pub fn has_prev_page(&self) -> bool {
        self.page > 1 && self.page <= self.page_count()
    }

    pub fn has_next_page(&self) -> bool {
        self.page < self.page_count()
    }
}

impl Default for SearchState {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_RESULTS_PER_PAGE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn results(n: usize) -> Vec<SearchResultItem> {
        (0..n)
            .map(|i| SearchResultItem {
                id: i.to_string(),
                title: format!("Pizza {}", i),
                publisher: "Closet Cooking".to_string(),
                image: format!("http://img/{}.jpg", i),
                key: None,
            })
            .collect()
    }

    #[test]
    fn test_page_window_last_page_is_short() {
        let mut search = SearchState::new(10);
        search.results = results(25);

        let window = search.page_window(3);
        assert_eq!(window.len(), 5);
        assert_eq!(window[0].id, "20");
        assert_eq!(window[4].id, "24");
    }

    #[test]
    fn test_page_window_past_the_end_is_empty() {
        let mut search = SearchState::new(10);
        search.results = results(25);

        assert!(search.page_window(4).is_empty());
        assert!(search.page_window(100).is_empty());
    }

    #[test]
    fn test_page_window_page_zero_is_empty() {
        let mut search = SearchState::new(10);
        search.results = results(25);

        assert!(search.page_window(0).is_empty());
    }

    #[test]
    fn test_page_count_and_navigation() {
        let mut search = SearchState::new(10);
        assert_eq!(search.page_count(), 0);
        assert!(!search.has_prev_page());
        assert!(!search.has_next_page());

        search.results = results(25);
        assert_eq!(search.page_count(), 3);
        assert!(search.has_next_page());
        assert!(!search.has_prev_page());

        search.page = 3;
        assert!(!search.has_next_page());
        assert!(search.has_prev_page());
    }

    #[test]
    fn test_zero_page_size_is_bumped() {
        let search = SearchState::new(0);
        assert_eq!(search.results_per_page(), 1);
    }

    #[test]
    fn test_recipe_bookmark_shape() {
        let json = r#"{
            "id": "5",
            "title": "Pasta",
            "publisher": "Me",
            "sourceUrl": "http://src",
            "image": "http://img",
            "servings": 4,
            "cookingTime": 30,
            "ingredients": [{"quantity": null, "unit": "", "description": "salt"}],
            "bookmarked": true
        }"#;

        let recipe: Recipe = serde_json::from_str(json).unwrap();
        assert_eq!(recipe.source_url, "http://src");
        assert_eq!(recipe.cooking_time, 30);
        assert!(recipe.bookmarked);
        assert!(recipe.key.is_none());
        assert_eq!(recipe.ingredients[0].quantity, None);

        let out = serde_json::to_value(&recipe).unwrap();
        assert_eq!(out["sourceUrl"], "http://src");
        assert!(out.get("key").is_none());
    }
}
