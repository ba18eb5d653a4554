use log::{debug, warn};

use crate::config::DataConfig;
use crate::load_nutrition_table;
use crate::model::{CalorieModifiers, NutritionInfo, NutritionTable, Recipe};

/// Computes nutrition totals for recipes and meals from a per-100g nutrient
/// table and the calorie-modifier set.
#[derive(Debug, Clone, Default)]
pub struct NutritionCalculator {
    table: NutritionTable,
    modifiers: CalorieModifiers,
}

impl NutritionCalculator {
    pub fn new(table: NutritionTable, modifiers: CalorieModifiers) -> Self {
        NutritionCalculator { table, modifiers }
    }

    /// Loads the nutrient table from the configured data file. A missing or
    /// unreadable file degrades to an empty table with a logged diagnostic.
    pub fn from_config(config: &DataConfig, modifiers: CalorieModifiers) -> Self {
        let table = match load_nutrition_table(&config.nutrition_path()) {
            Ok(table) => table,
            Err(e) => {
                warn!("Error loading nutrition data: {e}");
                NutritionTable::default()
            }
        };
        NutritionCalculator { table, modifiers }
    }

    pub fn table(&self) -> &NutritionTable {
        &self.table
    }

    /// Totals over a recipe's ingredients: quantity converted to grams,
    /// per-100g values scaled, cooking-method multiplier applied. Ingredients
    /// without a table entry contribute nothing.
    pub fn recipe_nutrition(&self, recipe: &Recipe) -> NutritionInfo {
        let mut total = NutritionInfo::default();

        for ingredient in &recipe.ingredients {
            let Some(per_100g) = self.table.lookup(&ingredient.name) else {
                debug!("No nutrition values found for ingredient: {}", ingredient.name);
                continue;
            };

            let grams = quantity_in_grams(ingredient.quantity, &ingredient.unit, &ingredient.name);
            let multiplier = self.modifiers.multiplier(
                &ingredient.name,
                &ingredient.category,
                &ingredient.cooking_method,
            );
            total = total.add(&per_100g.scale(grams / 100.0 * multiplier));
        }

        total
    }

    /// Aggregate nutrition over several recipes.
    pub fn meal_nutrition<'a, I>(&self, recipes: I) -> NutritionInfo
    where
        I: IntoIterator<Item = &'a Recipe>,
    {
        recipes
            .into_iter()
            .fold(NutritionInfo::default(), |total, recipe| {
                total.add(&self.recipe_nutrition(recipe))
            })
    }
}

/// Converts a quantity to grams based on its unit. Ingredients that expand
/// when cooked (pasta, noodles, rice, dough) count double.
fn quantity_in_grams(quantity: f64, unit: &str, name: &str) -> f64 {
    let unit = unit.to_lowercase();
    let grams = match unit.as_str() {
        "tablespoon" => quantity * 15.0,
        "teaspoon" => quantity * 5.0,
        "cup" => quantity * 240.0,
        // liquids assumed at 1 g/ml; pieces use the quantity as-is
        _ => quantity,
    };

    let name = name.to_lowercase();
    if name.contains("pasta")
        || name.contains("noodle")
        || name.contains("rice")
        || name.contains("dough")
    {
        grams * 2.0
    } else {
        grams
    }
}
