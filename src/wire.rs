//! Wire format of the recipe API and its mapping to the domain model.
//!
//! The API speaks snake_case (`source_url`, `image_url`, `cooking_time`) and
//! wraps every payload in a `{ "data": { ... } }` envelope.

use serde::{Deserialize, Serialize};

use crate::error::{RecipeError, Result};
use crate::model::{Ingredient, Recipe, SearchResultItem};

#[derive(Debug, Clone, Deserialize)]
pub struct RecipeRecord {
    pub id: String,
    pub title: String,
    pub publisher: String,
    pub source_url: String,
    pub image_url: String,
    pub servings: u32,
    pub cooking_time: u32,
    pub ingredients: Vec<Ingredient>,
    #[serde(default)]
    pub key: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchRecord {
    pub id: String,
    pub title: String,
    pub publisher: String,
    pub image_url: String,
    #[serde(default)]
    pub key: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Envelope<T> {
    data: T,
}

#[derive(Debug, Deserialize)]
struct RecipeData {
    recipe: RecipeRecord,
}

#[derive(Debug, Deserialize)]
struct SearchData {
    recipes: Vec<SearchRecord>,
}

/// Body of `POST {API_URL}?key=...`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UploadPayload {
    pub title: String,
    pub source_url: String,
    pub image_url: String,
    pub publisher: String,
    pub cooking_time: u32,
    pub servings: u32,
    pub ingredients: Vec<Ingredient>,
}

/// Error body returned by the API on failure, e.g. `{"status":"fail","message":"..."}`
#[derive(Debug, Deserialize)]
pub(crate) struct FailureBody {
    pub message: String,
}

// Empty keys count as absent.
fn non_empty(key: Option<String>) -> Option<String> {
    key.filter(|k| !k.is_empty())
}

impl From<RecipeRecord> for Recipe {
    fn from(record: RecipeRecord) -> Self {
        Recipe {
            id: record.id,
            title: record.title,
            publisher: record.publisher,
            source_url: record.source_url,
            image: record.image_url,
            servings: record.servings,
            cooking_time: record.cooking_time,
            ingredients: record.ingredients,
            key: non_empty(record.key),
            bookmarked: false,
        }
    }
}

impl From<SearchRecord> for SearchResultItem {
    fn from(record: SearchRecord) -> Self {
        SearchResultItem {
            id: record.id,
            title: record.title,
            publisher: record.publisher,
            image: record.image_url,
            key: non_empty(record.key),
        }
    }
}

/// Decode a `{ data: { recipe } }` response into a domain recipe (not bookmarked).
pub fn decode_recipe(body: &str) -> Result<Recipe> {
    let envelope: Envelope<RecipeData> =
        serde_json::from_str(body).map_err(|e| RecipeError::Shape(e.to_string()))?;
    Ok(envelope.data.recipe.into())
}

/// Decode a `{ data: { recipes: [...] } }` response into search results, in API order.
pub fn decode_search_results(body: &str) -> Result<Vec<SearchResultItem>> {
    let envelope: Envelope<SearchData> =
        serde_json::from_str(body).map_err(|e| RecipeError::Shape(e.to_string()))?;
    Ok(envelope
        .data
        .recipes
        .into_iter()
        .map(SearchResultItem::from)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    const RECIPE_BODY: &str = r#"{
        "status": "success",
        "data": {
            "recipe": {
                "id": "5ed6604591c37cdc054bc886",
                "title": "Spicy Chicken and Pepper Jack Pizza",
                "publisher": "My Baking Addiction",
                "source_url": "http://www.mybakingaddiction.com/spicy-chicken",
                "image_url": "http://forkify-api.herokuapp.com/images/FlatBread21of1a180.jpg",
                "servings": 4,
                "cooking_time": 45,
                "ingredients": [
                    {"quantity": 1, "unit": "", "description": "tbsp. canola or olive oil"},
                    {"quantity": null, "unit": "", "description": "Salt and pepper"}
                ]
            }
        }
    }"#;

    #[test]
    fn test_decode_recipe_renames_fields() {
        let recipe = decode_recipe(RECIPE_BODY).unwrap();

        assert_eq!(recipe.id, "5ed6604591c37cdc054bc886");
        assert_eq!(
            recipe.source_url,
            "http://www.mybakingaddiction.com/spicy-chicken"
        );
        assert_eq!(
            recipe.image,
            "http://forkify-api.herokuapp.com/images/FlatBread21of1a180.jpg"
        );
        assert_eq!(recipe.cooking_time, 45);
        assert_eq!(recipe.servings, 4);
        assert_eq!(recipe.ingredients.len(), 2);
        assert_eq!(recipe.ingredients[0].quantity, Some(1.0));
        assert_eq!(recipe.ingredients[1].quantity, None);
        assert!(recipe.key.is_none());
        assert!(!recipe.bookmarked);
    }

    #[test]
    fn test_decode_recipe_keeps_key() {
        let body = RECIPE_BODY.replace(r#""servings": 4,"#, r#""servings": 4, "key": "abc","#);
        let recipe = decode_recipe(&body).unwrap();
        assert_eq!(recipe.key.as_deref(), Some("abc"));
    }

    #[test]
    fn test_decode_recipe_drops_empty_key() {
        let body = RECIPE_BODY.replace(r#""servings": 4,"#, r#""servings": 4, "key": "","#);
        let recipe = decode_recipe(&body).unwrap();
        assert!(recipe.key.is_none());
    }

    #[test]
    fn test_decode_recipe_missing_field_is_shape_error() {
        let body = r#"{"data": {"recipe": {"id": "1", "title": "x"}}}"#;
        let result = decode_recipe(body);
        assert!(matches!(result, Err(RecipeError::Shape(_))));
    }

    #[test]
    fn test_decode_search_results() {
        let body = r#"{
            "status": "success",
            "results": 2,
            "data": {
                "recipes": [
                    {"id": "a", "title": "Pizza A", "publisher": "P", "image_url": "http://a.jpg"},
                    {"id": "b", "title": "Pizza B", "publisher": "Q", "image_url": "http://b.jpg", "key": "k"}
                ]
            }
        }"#;

        let results = decode_search_results(body).unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].id, "a");
        assert_eq!(results[0].image, "http://a.jpg");
        assert!(results[0].key.is_none());
        assert_eq!(results[1].key.as_deref(), Some("k"));
    }

    #[test]
    fn test_decode_search_results_not_json() {
        let result = decode_search_results("<html>oops</html>");
        assert!(matches!(result, Err(RecipeError::Shape(_))));
    }

    #[test]
    fn test_upload_payload_is_snake_case() {
        let payload = UploadPayload {
            title: "Soup".to_string(),
            source_url: "http://s".to_string(),
            image_url: "http://i".to_string(),
            publisher: "Me".to_string(),
            cooking_time: 20,
            servings: 2,
            ingredients: vec![Ingredient {
                quantity: None,
                unit: String::new(),
                description: "water".to_string(),
            }],
        };

        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["source_url"], "http://s");
        assert_eq!(value["image_url"], "http://i");
        assert_eq!(value["cooking_time"], 20);
        assert!(value["ingredients"][0]["quantity"].is_null());
    }
}
