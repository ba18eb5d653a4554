use std::fmt;

use crate::model::CalorieModifiers;

/// A purchasable ingredient with quantity, pricing and calorie data.
///
/// Category and cooking method are normalized to lowercase on construction;
/// calorie lookups key off them.
#[derive(Debug, Clone, PartialEq)]
pub struct Ingredient {
    pub name: String,
    pub quantity: f64,
    pub unit: String,
    pub calories_per_unit: i32,
    pub price_per_unit: f64,
    pub category: String,
    pub cooking_method: String,
    pub description: String,
}

impl Ingredient {
    /// Creates an ingredient with the default `raw` cooking method.
    pub fn new(
        name: &str,
        quantity: f64,
        unit: &str,
        calories_per_unit: i32,
        price_per_unit: f64,
        category: &str,
        description: &str,
    ) -> Self {
        Self::with_cooking_method(
            name,
            quantity,
            unit,
            calories_per_unit,
            price_per_unit,
            category,
            "raw",
            description,
        )
    }

    #[allow(clippy::too_many_arguments)]
    pub fn with_cooking_method(
        name: &str,
        quantity: f64,
        unit: &str,
        calories_per_unit: i32,
        price_per_unit: f64,
        category: &str,
        cooking_method: &str,
        description: &str,
    ) -> Self {
        Ingredient {
            name: name.trim().to_string(),
            quantity,
            unit: unit.trim().to_string(),
            calories_per_unit,
            price_per_unit,
            category: category.trim().to_lowercase(),
            cooking_method: cooking_method.trim().to_lowercase(),
            description: description.to_string(),
        }
    }

    /// Copy of this ingredient with a different quantity.
    pub fn with_quantity(&self, quantity: f64) -> Self {
        Ingredient {
            quantity,
            ..self.clone()
        }
    }

    pub fn total_price(&self) -> f64 {
        self.price_per_unit * self.quantity
    }

    /// Calories per unit adjusted for the cooking method.
    pub fn modified_calories_per_unit(&self, modifiers: &CalorieModifiers) -> f64 {
        let multiplier = modifiers.multiplier(&self.name, &self.category, &self.cooking_method);
        self.calories_per_unit as f64 * multiplier
    }

    pub fn total_calories(&self, modifiers: &CalorieModifiers) -> i32 {
        (self.modified_calories_per_unit(modifiers) * self.quantity) as i32
    }
}

impl fmt::Display for Ingredient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.2} {} {} ({})",
            self.quantity, self.unit, self.name, self.cooking_method
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chicken() -> Ingredient {
        Ingredient::with_cooking_method(
            " Chicken Breast ",
            2.0,
            "100g",
            165,
            4.29,
            "Meat",
            "Grilled",
            "lean protein",
        )
    }

    #[test]
    fn normalizes_category_and_cooking_method() {
        let i = chicken();
        assert_eq!(i.name, "Chicken Breast");
        assert_eq!(i.category, "meat");
        assert_eq!(i.cooking_method, "grilled");
    }

    #[test]
    fn total_price_scales_with_quantity() {
        assert!((chicken().total_price() - 8.58).abs() < 1e-9);
    }

    #[test]
    fn display_shows_quantity_unit_name_method() {
        assert_eq!(chicken().to_string(), "2.00 100g Chicken Breast (grilled)");
    }
}
