pub mod calc;
pub mod cart;
pub mod catalog;
pub mod config;
pub mod error;
pub mod filters;
pub mod model;
pub mod parser;

pub use crate::cart::ShoppingCart;
pub use crate::catalog::Catalog;
pub use crate::config::DataConfig;
pub use crate::error::LoadError;
pub use crate::model::{CalorieModifiers, Ingredient, NutritionInfo, NutritionTable, Recipe};

/// Loads an ingredient array file. Malformed records are logged and skipped;
/// a missing or empty file is an error.
pub fn load_ingredients(path: &str) -> Result<Vec<Ingredient>, LoadError> {
    let text = parser::read_file(path)?;
    Ok(parser::ingredients_from_str(&text))
}

/// Loads a recipe array file, with the same per-record resilience as
/// [`load_ingredients`].
pub fn load_recipes(path: &str) -> Result<Vec<Recipe>, LoadError> {
    let text = parser::read_file(path)?;
    Ok(parser::recipes_from_str(&text))
}

/// Loads the calorie-modifier file.
pub fn load_calorie_modifiers(path: &str) -> Result<CalorieModifiers, LoadError> {
    let text = parser::read_file(path)?;
    Ok(parser::modifiers_from_str(&text))
}

/// Loads the per-100g nutrition table.
pub fn load_nutrition_table(path: &str) -> Result<NutritionTable, LoadError> {
    let text = parser::read_file(path)?;
    Ok(parser::nutrition_from_str(&text))
}
