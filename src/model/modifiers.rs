use std::collections::HashMap;

type MethodMap = HashMap<String, f64>;

/// Calorie multipliers declared at four levels of specificity.
///
/// A lookup resolves against the most specific level that knows the
/// ingredient at all: an exact ingredient entry, then a named subcategory
/// (poultry and fish under meat, vegetable, fruit), then the food category,
/// then the global default. Within the matched level an unlisted cooking
/// method falls back to 1.0 rather than continuing down the levels.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CalorieModifiers {
    pub default: MethodMap,
    pub categories: HashMap<String, MethodMap>,
    pub subcategories: HashMap<String, MethodMap>,
    pub ingredients: HashMap<String, MethodMap>,
}

impl CalorieModifiers {
    pub fn is_empty(&self) -> bool {
        self.default.is_empty()
            && self.categories.is_empty()
            && self.subcategories.is_empty()
            && self.ingredients.is_empty()
    }

    /// Multiplier for one ingredient prepared with one cooking method.
    pub fn multiplier(&self, ingredient: &str, category: &str, method: &str) -> f64 {
        let name = ingredient.trim().to_lowercase();
        let category = category.trim().to_lowercase();
        let method = method.trim().to_lowercase();

        if let Some(methods) = self.ingredients.get(&name) {
            return methods.get(&method).copied().unwrap_or(1.0);
        }
        if let Some(sub) = subcategory_of(&category, &name) {
            if let Some(methods) = self.subcategories.get(sub) {
                return methods.get(&method).copied().unwrap_or(1.0);
            }
        }
        if let Some(methods) = self.categories.get(&category) {
            return methods.get(&method).copied().unwrap_or(1.0);
        }
        self.default.get(&method).copied().unwrap_or(1.0)
    }

    /// The built-in modifier set used when no data file is available.
    pub fn builtin() -> Self {
        let default: MethodMap = [
            ("raw", 1.0),
            ("steamed", 1.0),
            ("boiled", 1.0),
            ("grilled", 1.2),
            ("fried", 1.5),
            ("deep-fried", 2.0),
            ("baked", 1.1),
            ("roasted", 1.2),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect();

        let meat: MethodMap = [
            ("grilled", 1.3),
            ("fried", 1.7),
            ("sauteed", 1.4),
            ("roasted", 1.3),
            ("braised", 1.15),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect();

        let mut categories = HashMap::new();
        categories.insert("meat".to_string(), meat);

        CalorieModifiers {
            default,
            categories,
            ..Default::default()
        }
    }
}

/// Named subcategory an ingredient belongs to, if any.
fn subcategory_of(category: &str, name: &str) -> Option<&'static str> {
    match category {
        "meat" if name.contains("chicken") || name.contains("turkey") => Some("poultry"),
        "meat"
            if name.contains("salmon")
                || name.contains("tuna")
                || name.contains("cod")
                || name.contains("fish") =>
        {
            Some("fish")
        }
        "vegetable" => Some("vegetable"),
        "fruit" => Some("fruit"),
        _ => None,
    }
}
