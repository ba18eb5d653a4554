use std::fmt::Write as _;

use crate::calc::price;
use crate::model::{Ingredient, Recipe};

/// A shopping cart of ingredients with computed prices.
#[derive(Debug, Clone, Default)]
pub struct ShoppingCart {
    items: Vec<Ingredient>,
}

impl ShoppingCart {
    pub fn new() -> Self {
        ShoppingCart::default()
    }

    pub fn add(&mut self, ingredient: Ingredient) {
        self.items.push(ingredient);
    }

    /// Adds every ingredient of a recipe.
    pub fn add_recipe(&mut self, recipe: &Recipe) {
        self.items.extend(recipe.ingredients.iter().cloned());
    }

    pub fn items(&self) -> &[Ingredient] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn total_price(&self) -> f64 {
        self.items.iter().map(price::ingredient_price).sum()
    }

    /// Printable receipt with a line per item and the total.
    pub fn receipt(&self) -> String {
        let mut out = String::new();
        for item in &self.items {
            let _ = writeln!(out, "{item}  ${:.2}", price::ingredient_price(item));
        }
        let _ = writeln!(out, "Total: ${:.2}", self.total_price());
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn totals_cover_all_items() {
        let mut cart = ShoppingCart::new();
        cart.add(Ingredient::new("Egg", 2.0, "egg", 70, 0.5, "dairy", ""));
        cart.add(Ingredient::new("Butter", 10.0, "g", 717, 2.0, "dairy", ""));
        assert_eq!(cart.len(), 2);
        assert!((cart.total_price() - 1.2).abs() < 1e-9);
        assert!(cart.receipt().contains("Total: $1.20"));
    }

    #[test]
    fn add_recipe_pulls_in_every_ingredient() {
        let recipe = Recipe::new(
            "Omelette",
            "savory",
            vec![],
            "french",
            10,
            vec![
                Ingredient::new("Egg", 2.0, "egg", 70, 0.5, "dairy", ""),
                Ingredient::new("Butter", 10.0, "g", 717, 2.0, "dairy", ""),
            ],
        );
        let mut cart = ShoppingCart::new();
        cart.add_recipe(&recipe);
        assert_eq!(cart.len(), 2);
        cart.clear();
        assert!(cart.is_empty());
    }
}
