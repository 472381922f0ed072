use log::debug;

use crate::error::{RecipeError, Result};
use crate::state::AppState;

/// Rescale every ingredient of the current recipe to `new_servings`.
///
/// Quantities keep their ratio to the serving count. Ingredients without a
/// quantity stay without one.
pub fn update_servings(state: &mut AppState, new_servings: u32) -> Result<()> {
    if new_servings == 0 {
        return Err(RecipeError::Validation(
            "Servings must be greater than zero".to_string(),
        ));
    }

    let recipe = state.recipe.as_mut().ok_or(RecipeError::NoRecipe)?;
    let previous = f64::from(recipe.servings);
    let target = f64::from(new_servings);

    // A zero serving count carries no ratio to preserve
    if recipe.servings > 0 {
        for ingredient in &mut recipe.ingredients {
            if let Some(quantity) = ingredient.quantity.as_mut() {
                *quantity = *quantity * target / previous;
            }
        }
    }

    debug!(
        "Scaled recipe {} from {} to {} servings",
        recipe.id, recipe.servings, new_servings
    );
    recipe.servings = new_servings;
    Ok(())
}
