//! Record builders: typed domain records from raw property and section maps.
//!
//! Builders return `Ok(None)` when a required field is absent so a malformed
//! array entry is skipped instead of aborting the file. Only numeric
//! coercion raises, and the array-level decomposition catches it per record.

use std::collections::HashMap;

use log::{debug, warn};

use crate::error::LoadError;
use crate::model::{CalorieModifiers, Ingredient, NutritionInfo, NutritionTable, Recipe};

use super::object::{parse_flat_object, unquote};
use super::reader::{classify, Document};
use super::splitter::{split_sections, split_top_level_objects};

type PropertyMap = HashMap<String, String>;
type MethodMap = HashMap<String, f64>;

fn parse_f64(field: &str, raw: &str) -> Result<f64, LoadError> {
    raw.trim().parse().map_err(|_| LoadError::InvalidNumber {
        field: field.to_string(),
        value: raw.to_string(),
    })
}

fn parse_i64(field: &str, raw: &str) -> Result<i64, LoadError> {
    raw.trim().parse().map_err(|_| LoadError::InvalidNumber {
        field: field.to_string(),
        value: raw.to_string(),
    })
}

/// Builds an ingredient from a flat property map, or `None` when a required
/// field is missing.
pub(crate) fn ingredient_from_properties(
    properties: &PropertyMap,
) -> Result<Option<Ingredient>, LoadError> {
    let (Some(name), Some(quantity), Some(unit), Some(calories), Some(price), Some(category)) = (
        properties.get("name"),
        properties.get("quantity"),
        properties.get("unit"),
        properties.get("caloriesPerUnit"),
        properties.get("pricePerUnit"),
        properties.get("category"),
    ) else {
        return Ok(None);
    };

    let quantity = parse_f64("quantity", quantity)?;
    let calories = parse_i64("caloriesPerUnit", calories)? as i32;
    let price = parse_f64("pricePerUnit", price)?;
    let description = properties
        .get("description")
        .map(|d| unquote(d))
        .unwrap_or_default();

    let ingredient = match properties.get("cookingMethod") {
        Some(method) => Ingredient::with_cooking_method(
            &unquote(name),
            quantity,
            &unquote(unit),
            calories,
            price,
            &unquote(category),
            &unquote(method),
            &description,
        ),
        None => Ingredient::new(
            &unquote(name),
            quantity,
            &unquote(unit),
            calories,
            price,
            &unquote(category),
            &description,
        ),
    };
    Ok(Some(ingredient))
}

/// Builds a recipe from a flat property map, or `None` when a required field
/// is missing. Nested ingredient members that fail to build are skipped.
pub(crate) fn recipe_from_properties(
    properties: &PropertyMap,
) -> Result<Option<Recipe>, LoadError> {
    let (Some(name), Some(flavor), Some(tags), Some(cuisine), Some(prep_time), Some(ingredients)) = (
        properties.get("name"),
        properties.get("flavor"),
        properties.get("flavorTags"),
        properties.get("cuisine"),
        properties.get("prepTime"),
        properties.get("ingredients"),
    ) else {
        return Ok(None);
    };

    let prep_time = parse_i64("prepTime", prep_time)?.max(0) as u32;
    let recipe = Recipe::new(
        &unquote(name),
        &unquote(flavor),
        parse_flavor_tags(tags),
        &unquote(cuisine),
        prep_time,
        parse_ingredient_list(ingredients),
    );
    Ok(Some(recipe))
}

/// Splits a raw `[...]` of tags on commas; tags are trimmed and de-quoted.
fn parse_flavor_tags(raw: &str) -> Vec<String> {
    let t = raw.trim();
    let Some(inner) = t.strip_prefix('[').and_then(|t| t.strip_suffix(']')) else {
        return Vec::new();
    };
    if inner.trim().is_empty() {
        return Vec::new();
    }
    inner.split(',').map(unquote).collect()
}

/// Decomposes a raw `[...]` of ingredient objects, dropping members that
/// fail to build.
fn parse_ingredient_list(raw: &str) -> Vec<Ingredient> {
    let t = raw.trim();
    let Some(inner) = t.strip_prefix('[').and_then(|t| t.strip_suffix(']')) else {
        return Vec::new();
    };

    let mut ingredients = Vec::new();
    for object in split_top_level_objects(inner) {
        match ingredient_from_properties(&parse_flat_object(&object)) {
            Ok(Some(ingredient)) => ingredients.push(ingredient),
            Ok(None) => debug!("Skipping nested ingredient with missing required fields"),
            Err(e) => warn!("Error parsing nested ingredient: {e}"),
        }
    }
    ingredients
}

/// Builds a six-field nutrient record, or `None` when any field is missing.
pub(crate) fn nutrition_info_from_properties(
    properties: &PropertyMap,
) -> Result<Option<NutritionInfo>, LoadError> {
    let (Some(protein), Some(fat), Some(carbs), Some(fiber), Some(sugar), Some(sodium)) = (
        properties.get("protein"),
        properties.get("fat"),
        properties.get("carbohydrates"),
        properties.get("fiber"),
        properties.get("sugar"),
        properties.get("sodium"),
    ) else {
        return Ok(None);
    };

    Ok(Some(NutritionInfo::new(
        parse_f64("protein", protein)?,
        parse_f64("fat", fat)?,
        parse_f64("carbohydrates", carbs)?,
        parse_f64("fiber", fiber)?,
        parse_f64("sugar", sugar)?,
        parse_f64("sodium", sodium)?,
    )))
}

/// Decomposes an ingredient-array document. One malformed record is logged
/// and dropped; the rest of the file still loads.
pub fn ingredients_from_str(text: &str) -> Vec<Ingredient> {
    let Document::Array(body) = classify(text) else {
        return Vec::new();
    };

    let mut ingredients = Vec::new();
    for object in split_top_level_objects(body) {
        match ingredient_from_properties(&parse_flat_object(&object)) {
            Ok(Some(ingredient)) => ingredients.push(ingredient),
            Ok(None) => debug!("Skipping ingredient with missing required fields"),
            Err(e) => warn!("Error parsing ingredient: {e}"),
        }
    }
    ingredients
}

/// Decomposes a recipe-array document with the same per-record resilience as
/// [`ingredients_from_str`].
pub fn recipes_from_str(text: &str) -> Vec<Recipe> {
    let Document::Array(body) = classify(text) else {
        return Vec::new();
    };

    let mut recipes = Vec::new();
    for object in split_top_level_objects(body) {
        match recipe_from_properties(&parse_flat_object(&object)) {
            Ok(Some(recipe)) => recipes.push(recipe),
            Ok(None) => debug!("Skipping recipe with missing required fields"),
            Err(e) => warn!("Error parsing recipe: {e}"),
        }
    }
    recipes
}

/// Decomposes a calorie-modifier document: scope sections at the top level,
/// then name -> (method -> multiplier) within each.
pub fn modifiers_from_str(text: &str) -> CalorieModifiers {
    let Document::Object(body) = classify(text) else {
        return CalorieModifiers::default();
    };

    let mut modifiers = CalorieModifiers::default();
    for (section, section_text) in split_sections(body) {
        match section.as_str() {
            "default" => modifiers.default = method_map(&parse_flat_object(&section_text)),
            "categories" => modifiers.categories = nested_section(&section_text),
            "subcategories" => modifiers.subcategories = nested_section(&section_text),
            "ingredients" => modifiers.ingredients = nested_section(&section_text),
            other => warn!("Ignoring unknown calorie modifier section '{other}'"),
        }
    }
    modifiers
}

fn method_map(properties: &PropertyMap) -> MethodMap {
    let mut methods = MethodMap::new();
    for (method, value) in properties {
        match value.trim().parse::<f64>() {
            Ok(multiplier) => {
                methods.insert(method.clone(), multiplier);
            }
            Err(_) => warn!("Invalid number format: {value}"),
        }
    }
    methods
}

fn nested_section(text: &str) -> HashMap<String, MethodMap> {
    let t = text.trim();
    let Some(inner) = t.strip_prefix('{').and_then(|t| t.strip_suffix('}')) else {
        return HashMap::new();
    };
    split_sections(inner)
        .into_iter()
        .map(|(name, body)| (name, method_map(&parse_flat_object(&body))))
        .collect()
}

/// Decomposes a nutrition document: category sections, then ingredient
/// sections, then a flat nutrient object per ingredient. Entries with
/// missing or malformed fields are logged and skipped.
pub fn nutrition_from_str(text: &str) -> NutritionTable {
    let Document::Object(body) = classify(text) else {
        return NutritionTable::default();
    };

    let mut categories = HashMap::new();
    for (category, category_text) in split_sections(body) {
        let t = category_text.trim();
        let Some(inner) = t.strip_prefix('{').and_then(|t| t.strip_suffix('}')) else {
            warn!("Skipping malformed nutrition category '{category}'");
            continue;
        };

        let mut records = HashMap::new();
        for (ingredient, nutrient_text) in split_sections(inner) {
            match nutrition_info_from_properties(&parse_flat_object(&nutrient_text)) {
                Ok(Some(info)) => {
                    records.insert(ingredient, info);
                }
                Ok(None) => debug!("Skipping nutrition entry '{ingredient}': missing fields"),
                Err(e) => warn!("Invalid nutrition data for '{ingredient}': {e}"),
            }
        }
        categories.insert(category, records);
    }
    NutritionTable::new(categories)
}
