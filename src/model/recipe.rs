use std::fmt;
use std::fmt::Write as _;

use crate::model::Ingredient;

/// A recipe: flavor metadata, preparation time and an ingredient list.
#[derive(Debug, Clone, PartialEq)]
pub struct Recipe {
    pub name: String,
    pub flavor: String,
    pub flavor_tags: Vec<String>,
    pub cuisine: String,
    /// Preparation time in minutes.
    pub prep_time: u32,
    pub ingredients: Vec<Ingredient>,
}

impl Recipe {
    pub fn new(
        name: &str,
        flavor: &str,
        flavor_tags: Vec<String>,
        cuisine: &str,
        prep_time: u32,
        ingredients: Vec<Ingredient>,
    ) -> Self {
        Recipe {
            name: name.trim().to_string(),
            flavor: flavor.trim().to_string(),
            flavor_tags,
            cuisine: cuisine.trim().to_string(),
            prep_time,
            ingredients,
        }
    }

    /// Bulleted ingredient list for display.
    pub fn ingredients_text(&self) -> String {
        let mut out = String::new();
        for ingredient in &self.ingredients {
            let _ = writeln!(out, "- {ingredient}");
        }
        out
    }

    /// Step-by-step preparation text.
    pub fn prep_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Cuisine: {}", self.cuisine);
        let _ = writeln!(out, "Preparation Time: {} minutes\n", self.prep_time);
        let _ = writeln!(out, "Cooking Instructions:");
        let _ = writeln!(out, "1. Gather all ingredients");
        for ingredient in &self.ingredients {
            let _ = writeln!(
                out,
                "2. Prepare {} using {} method",
                ingredient.name, ingredient.cooking_method
            );
        }
        let _ = writeln!(out, "3. Combine ingredients according to recipe");
        let _ = writeln!(out, "4. Serve and enjoy!");
        out
    }
}

impl fmt::Display for Recipe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({} cuisine, {} flavor, {} min prep, {} ingredients)",
            self.name,
            self.cuisine,
            self.flavor,
            self.prep_time,
            self.ingredients.len()
        )
    }
}
