use std::collections::HashMap;

use log::warn;

use crate::config::DataConfig;
use crate::model::{CalorieModifiers, Ingredient};
use crate::{load_calorie_modifiers, load_ingredients};

/// The food categories the data files are organized by.
pub const CATEGORIES: [&str; 5] = ["meat", "vegetable", "fruit", "dairy", "seasoning"];

/// The loaded ingredient catalog and calorie-modifier set.
///
/// Built once at startup and passed to whoever needs it; a data file that
/// fails to load is replaced by built-in defaults for that file with a
/// logged diagnostic, so construction itself never fails.
#[derive(Debug, Clone)]
pub struct Catalog {
    ingredients: HashMap<String, Vec<Ingredient>>,
    modifiers: CalorieModifiers,
}

impl Catalog {
    pub fn load(config: &DataConfig) -> Self {
        let modifiers = match load_calorie_modifiers(&config.modifiers_path()) {
            Ok(modifiers) => modifiers,
            Err(e) => {
                warn!("Error loading calorie modifiers: {e}; using built-in defaults");
                CalorieModifiers::builtin()
            }
        };

        let mut ingredients = HashMap::new();
        for category in CATEGORIES {
            let list = match load_ingredients(&config.category_path(category)) {
                Ok(list) => list,
                Err(e) => {
                    warn!("Error loading {category} ingredients: {e}; using built-in defaults");
                    default_ingredients(category)
                }
            };
            ingredients.insert(category.to_string(), list);
        }

        Catalog {
            ingredients,
            modifiers,
        }
    }

    /// A catalog holding only the built-in defaults, no file access.
    pub fn builtin() -> Self {
        let mut ingredients = HashMap::new();
        for category in CATEGORIES {
            ingredients.insert(category.to_string(), default_ingredients(category));
        }
        Catalog {
            ingredients,
            modifiers: CalorieModifiers::builtin(),
        }
    }

    pub fn modifiers(&self) -> &CalorieModifiers {
        &self.modifiers
    }

    pub fn by_category(&self, category: &str) -> &[Ingredient] {
        self.ingredients
            .get(&category.to_lowercase())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Case-insensitive lookup across all categories; returns a copy with
    /// quantity 1.
    pub fn by_name(&self, name: &str) -> Option<Ingredient> {
        self.by_name_with_quantity(name, 1.0)
    }

    /// Case-insensitive lookup returning a copy with the requested quantity.
    pub fn by_name_with_quantity(&self, name: &str, quantity: f64) -> Option<Ingredient> {
        let name = name.to_lowercase();
        for category in CATEGORIES {
            if let Some(list) = self.ingredients.get(category) {
                if let Some(found) = list.iter().find(|i| i.name.to_lowercase() == name) {
                    return Some(found.with_quantity(quantity));
                }
            }
        }
        None
    }

    pub fn names_in_category(&self, category: &str) -> Vec<String> {
        self.by_category(category)
            .iter()
            .map(|i| i.name.clone())
            .collect()
    }
}

/// One stock ingredient per category, used when a data file cannot be read.
fn default_ingredients(category: &str) -> Vec<Ingredient> {
    match category {
        "meat" => vec![Ingredient::new(
            "Chicken Breast",
            1.0,
            "100g",
            165,
            4.29,
            "meat",
            "Boneless, skinless chicken breast - lean protein source",
        )],
        "vegetable" => vec![Ingredient::new(
            "Broccoli",
            1.0,
            "100g",
            34,
            1.99,
            "vegetable",
            "Fresh broccoli florets - high in fiber and vitamin C",
        )],
        "fruit" => vec![Ingredient::new(
            "Apple",
            1.0,
            "100g",
            52,
            0.99,
            "fruit",
            "Fresh apple - good source of fiber and vitamin C",
        )],
        "dairy" => vec![Ingredient::new(
            "Cheddar Cheese",
            1.0,
            "100g",
            402,
            5.49,
            "dairy",
            "Aged cheddar cheese - rich in calcium and protein",
        )],
        "seasoning" => vec![Ingredient::new(
            "Salt",
            1.0,
            "tsp",
            0,
            0.05,
            "seasoning",
            "Table salt - basic flavor enhancer",
        )],
        _ => Vec::new(),
    }
}
