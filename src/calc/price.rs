//! Price calculations with unit conversion.

use crate::model::{Ingredient, Recipe};

/// Total price of a recipe: the sum of its ingredient prices.
pub fn recipe_price(recipe: &Recipe) -> f64 {
    recipe.ingredients.iter().map(ingredient_price).sum()
}

/// Total price of one ingredient.
///
/// Items priced per piece multiply directly; weight-based items treat the
/// price as per 100g and convert the quantity through the unit table.
pub fn ingredient_price(ingredient: &Ingredient) -> f64 {
    let unit = ingredient.unit.to_lowercase();

    if unit.contains("piece") || unit.contains("egg") {
        return ingredient.price_per_unit * ingredient.quantity;
    }

    let base_price = ingredient.price_per_unit / 100.0;
    base_price * ingredient.quantity * unit_multiplier(&unit)
}

/// Grams per unit for the supported measurement units.
fn unit_multiplier(unit: &str) -> f64 {
    match base_unit(unit) {
        "tablespoon" => 15.0,
        "teaspoon" => 5.0,
        "cup" => 240.0,
        // ml and units already in grams
        _ => 1.0,
    }
}

/// Base unit of a compound unit string, e.g. `tablespoon (15g)` -> `tablespoon`.
fn base_unit(unit: &str) -> &str {
    match unit.find('(') {
        Some(i) if i > 0 => unit[..i].trim(),
        _ => unit,
    }
}
