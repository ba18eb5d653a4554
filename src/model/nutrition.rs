use std::collections::HashMap;
use std::fmt;

/// Nutritional values for an ingredient, recipe or whole meal.
///
/// Macronutrients are in grams, sodium in milligrams. Calories are always
/// derived from the macros (4 kcal/g protein and carbohydrate, 9 kcal/g fat),
/// never stored independently.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct NutritionInfo {
    protein: f64,
    fat: f64,
    carbohydrates: f64,
    fiber: f64,
    sugar: f64,
    sodium: f64,
}

impl NutritionInfo {
    pub fn new(protein: f64, fat: f64, carbohydrates: f64, fiber: f64, sugar: f64, sodium: f64) -> Self {
        NutritionInfo {
            protein,
            fat,
            carbohydrates,
            fiber,
            sugar,
            sodium,
        }
    }

    pub fn protein(&self) -> f64 {
        self.protein
    }

    pub fn fat(&self) -> f64 {
        self.fat
    }

    pub fn carbohydrates(&self) -> f64 {
        self.carbohydrates
    }

    pub fn fiber(&self) -> f64 {
        self.fiber
    }

    pub fn sugar(&self) -> f64 {
        self.sugar
    }

    pub fn sodium(&self) -> f64 {
        self.sodium
    }

    /// Total calories from the macronutrient content.
    pub fn calories(&self) -> f64 {
        self.protein * 4.0 + self.carbohydrates * 4.0 + self.fat * 9.0
    }

    /// Component-wise sum, for aggregating ingredients into a recipe or
    /// recipes into a meal.
    pub fn add(&self, other: &NutritionInfo) -> NutritionInfo {
        NutritionInfo {
            protein: self.protein + other.protein,
            fat: self.fat + other.fat,
            carbohydrates: self.carbohydrates + other.carbohydrates,
            fiber: self.fiber + other.fiber,
            sugar: self.sugar + other.sugar,
            sodium: self.sodium + other.sodium,
        }
    }

    /// All values multiplied by a factor (serving-size scaling).
    pub fn scale(&self, factor: f64) -> NutritionInfo {
        NutritionInfo {
            protein: self.protein * factor,
            fat: self.fat * factor,
            carbohydrates: self.carbohydrates * factor,
            fiber: self.fiber * factor,
            sugar: self.sugar * factor,
            sodium: self.sodium * factor,
        }
    }
}

impl fmt::Display for NutritionInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "calories={:.1}, protein={:.1}, carbs={:.1}, fat={:.1}, fiber={:.1}, sugar={:.1}, sodium={:.1}",
            self.calories(),
            self.protein,
            self.carbohydrates,
            self.fat,
            self.fiber,
            self.sugar,
            self.sodium
        )
    }
}

/// Per-100g nutrient records grouped by food category.
#[derive(Debug, Clone, Default)]
pub struct NutritionTable {
    categories: HashMap<String, HashMap<String, NutritionInfo>>,
}

impl NutritionTable {
    pub(crate) fn new(categories: HashMap<String, HashMap<String, NutritionInfo>>) -> Self {
        NutritionTable { categories }
    }

    pub fn is_empty(&self) -> bool {
        self.categories.values().all(|c| c.is_empty())
    }

    pub fn category(&self, name: &str) -> Option<&HashMap<String, NutritionInfo>> {
        self.categories.get(name)
    }

    /// Finds the record for an ingredient by fuzzy name match: the table key
    /// and the query match when either contains the other, case-insensitive.
    pub fn lookup(&self, ingredient_name: &str) -> Option<&NutritionInfo> {
        let name = ingredient_name.trim().to_lowercase();
        if name.is_empty() {
            return None;
        }
        for category in self.categories.values() {
            for (key, info) in category {
                let key = key.to_lowercase();
                if key.contains(&name) || name.contains(&key) {
                    return Some(info);
                }
            }
        }
        None
    }
}
