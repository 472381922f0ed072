//! Submitting user-authored recipes.
//!
//! A draft is the raw form input: `title`, `sourceUrl`, `image`, `publisher`,
//! `cookingTime`, `servings` plus any number of `ingredient*` fields, each
//! holding `quantity, unit, description`.

use log::{error, info};

use crate::api::RecipeApi;
use crate::bookmarks;
use crate::error::{RecipeError, Result, WRONG_INGREDIENT_FORMAT};
use crate::loader;
use crate::model::Ingredient;
use crate::state::AppState;
use crate::storage::KeyValueStore;
use crate::wire::UploadPayload;

const INGREDIENT_PREFIX: &str = "ingredient";

/// Unvalidated form input, in the order the fields were entered.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecipeDraft {
    fields: Vec<(String, String)>,
}

impl RecipeDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `name` to `value`, replacing an earlier value in place.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(n, _)| *n == name) {
            Some((_, existing)) => *existing = value,
            None => self.fields.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for RecipeDraft {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut draft = RecipeDraft::new();
        for (name, value) in iter {
            draft.insert(name, value);
        }
        draft
    }
}

/// Parse one `quantity, unit, description` line.
fn parse_ingredient(line: &str) -> Result<Ingredient> {
    let parts: Vec<&str> = line.split(',').map(str::trim).collect();
    let [quantity, unit, description] = parts.as_slice() else {
        return Err(RecipeError::Validation(WRONG_INGREDIENT_FORMAT.to_string()));
    };

    let quantity = if quantity.is_empty() {
        None
    } else {
        match quantity.parse::<f64>() {
            Ok(q) if q.is_finite() => Some(q),
            _ => {
                return Err(RecipeError::Validation(format!(
                    "Invalid ingredient quantity: '{}'",
                    quantity
                )))
            }
        }
    };

    Ok(Ingredient {
        quantity,
        unit: unit.to_string(),
        description: description.to_string(),
    })
}

/// All non-empty `ingredient*` fields of the draft, parsed in draft order.
pub fn parse_ingredients(draft: &RecipeDraft) -> Result<Vec<Ingredient>> {
    draft
        .iter()
        .filter(|(name, value)| name.starts_with(INGREDIENT_PREFIX) && !value.is_empty())
        .map(|(_, value)| parse_ingredient(value))
        .collect()
}

fn parse_count(draft: &RecipeDraft, field: &str) -> Result<u32> {
    let raw = draft.get(field).unwrap_or_default().trim();
    raw.parse::<u32>()
        .map_err(|_| RecipeError::Validation(format!("Invalid {}: '{}'", field, raw)))
}

/// Validate the draft and build the API payload.
pub fn build_payload(draft: &RecipeDraft) -> Result<UploadPayload> {
    let ingredients = parse_ingredients(draft)?;

    let servings = parse_count(draft, "servings")?;
    if servings == 0 {
        return Err(RecipeError::Validation(
            "Servings must be greater than zero".to_string(),
        ));
    }

    let text = |field: &str| draft.get(field).unwrap_or_default().to_string();

    Ok(UploadPayload {
        title: text("title"),
        source_url: text("sourceUrl"),
        image_url: text("image"),
        publisher: text("publisher"),
        cooking_time: parse_count(draft, "cookingTime")?,
        servings,
        ingredients,
    })
}

/// Validate and submit `draft`, then make the stored recipe current and bookmark it.
///
/// Validation failures return before any request is made.
pub async fn upload_recipe(
    state: &mut AppState,
    api: &dyn RecipeApi,
    store: &dyn KeyValueStore,
    draft: &RecipeDraft,
) -> Result<()> {
    let payload = build_payload(draft)?;

    let recipe = api.upload(&payload).await.map_err(|e| {
        error!("Failed to upload recipe '{}': {}", payload.title, e);
        e
    })?;

    info!("Uploaded recipe {} ({})", recipe.id, recipe.title);
    loader::install_recipe(state, recipe.clone());
    bookmarks::add_bookmark(state, store, recipe)
}
