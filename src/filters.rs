//! Recipe filtering strategies.
//!
//! Each filter interprets a free-form filter value; a null-ish value
//! (empty or `All`) matches every recipe, and unparseable values also match
//! everything so no valid recipe is accidentally hidden.

use crate::calc::NutritionCalculator;
use crate::model::Recipe;

pub trait RecipeFilter {
    fn matches(&self, recipe: &Recipe, value: &str) -> bool;
}

fn matches_all(value: &str) -> bool {
    value.trim().is_empty() || value.trim().eq_ignore_ascii_case("all")
}

/// Case-insensitive cuisine match; either string containing the other counts.
pub struct CuisineFilter;

impl RecipeFilter for CuisineFilter {
    fn matches(&self, recipe: &Recipe, cuisine: &str) -> bool {
        if matches_all(cuisine) {
            return true;
        }
        let recipe_cuisine = recipe.cuisine.to_lowercase();
        let recipe_cuisine = recipe_cuisine.trim();
        let selected = cuisine.to_lowercase();
        let selected = selected.trim();
        recipe_cuisine.contains(selected) || selected.contains(recipe_cuisine)
    }
}

/// Calorie-range buckets over a recipe's computed calories.
pub struct CalorieRangeFilter<'a> {
    pub calculator: &'a NutritionCalculator,
}

impl RecipeFilter for CalorieRangeFilter<'_> {
    fn matches(&self, recipe: &Recipe, range: &str) -> bool {
        if matches_all(range) {
            return true;
        }
        let calories = self.calculator.recipe_nutrition(recipe).calories().round() as i64;
        match range {
            "0-300" => (0..=300).contains(&calories),
            "301-600" => (301..=600).contains(&calories),
            "601-900" => (601..=900).contains(&calories),
            "901+" => calories >= 901,
            _ => true,
        }
    }
}

/// Preparation-time buckets in minutes.
pub struct PrepTimeFilter;

impl RecipeFilter for PrepTimeFilter {
    fn matches(&self, recipe: &Recipe, range: &str) -> bool {
        if matches_all(range) {
            return true;
        }
        let prep_time = recipe.prep_time;
        match range {
            "0-15 min" => prep_time <= 15,
            "16-30 min" => (16..=30).contains(&prep_time),
            "31-45 min" => (31..=45).contains(&prep_time),
            "46+ min" => prep_time >= 46,
            _ => true,
        }
    }
}

/// Free-text search over name, flavor, tags, cuisine and ingredient names.
pub struct TextSearchFilter;

impl RecipeFilter for TextSearchFilter {
    fn matches(&self, recipe: &Recipe, search_text: &str) -> bool {
        let search = search_text.trim().to_lowercase();
        if search.is_empty() {
            return true;
        }

        recipe.name.to_lowercase().contains(&search)
            || recipe.flavor.to_lowercase().contains(&search)
            || recipe
                .flavor_tags
                .iter()
                .any(|tag| tag.to_lowercase().contains(&search))
            || recipe.cuisine.to_lowercase().contains(&search)
            || recipe
                .ingredients
                .iter()
                .any(|i| i.name.to_lowercase().contains(&search))
    }
}
