use std::fs;

use tempfile::TempDir;

use mealplan::{
    load_calorie_modifiers, load_ingredients, load_nutrition_table, load_recipes, Catalog,
    DataConfig, LoadError,
};

fn write_file(dir: &TempDir, name: &str, content: &str) -> String {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path.display().to_string()
}

#[test]
fn missing_file_is_an_io_error_naming_the_path() {
    let err = load_ingredients("no/such/ingredients.json").unwrap_err();
    match err {
        LoadError::Io { ref path, .. } => assert_eq!(path, "no/such/ingredients.json"),
        other => panic!("unexpected error: {other}"),
    }
    assert!(err.to_string().contains("no/such/ingredients.json"));
}

#[test]
fn empty_file_is_a_distinct_error() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "empty.json", "");
    match load_ingredients(&path).unwrap_err() {
        LoadError::EmptyFile { path: p } => assert_eq!(p, path),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn crlf_files_load_like_lf_files() {
    let dir = TempDir::new().unwrap();
    let path = write_file(
        &dir,
        "ingredients.json",
        "[\r\n  {\"name\": \"A\", \"quantity\": 1, \"unit\": \"g\", \"caloriesPerUnit\": 10, \"pricePerUnit\": 1.0, \"category\": \"meat\"}\r\n]\r\n",
    );
    let ingredients = load_ingredients(&path).unwrap();
    assert_eq!(ingredients.len(), 1);
    assert_eq!(ingredients[0].name, "A");
}

#[test]
fn full_modifier_file_loads_and_resolves() {
    let dir = TempDir::new().unwrap();
    let path = write_file(
        &dir,
        "CalorieModifier.json",
        r#"{
          "default": {"raw": 1.0, "grilled": 1.2, "fried": 1.5},
          "categories": {
            "meat": {"grilled": 1.3, "fried": 1.7},
            "vegetable": {"steamed": 0.95}
          },
          "subcategories": {
            "poultry": {"grilled": 1.25},
            "fish": {"grilled": 1.1}
          },
          "ingredients": {
            "salmon": {"grilled": 1.2}
          }
        }"#,
    );
    let modifiers = load_calorie_modifiers(&path).unwrap();
    assert!((modifiers.multiplier("salmon", "meat", "grilled") - 1.2).abs() < 1e-9);
    assert!((modifiers.multiplier("chicken thigh", "meat", "grilled") - 1.25).abs() < 1e-9);
    assert!((modifiers.multiplier("carrot", "vegetable", "steamed") - 0.95).abs() < 1e-9);
}

#[test]
fn nutrition_file_loads_into_a_two_level_table() {
    let dir = TempDir::new().unwrap();
    let path = write_file(
        &dir,
        "micro_nutrition.json",
        r#"{
          "meat": {
            "chicken breast": {"protein": 31.0, "fat": 3.6, "carbohydrates": 0.0, "fiber": 0.0, "sugar": 0.0, "sodium": 74.0},
            "salmon": {"protein": 20.4, "fat": 13.4, "carbohydrates": 0.0, "fiber": 0.0, "sugar": 0.0, "sodium": 59.0}
          }
        }"#,
    );
    let table = load_nutrition_table(&path).unwrap();
    assert_eq!(table.category("meat").unwrap().len(), 2);
    let salmon = table.lookup("salmon").unwrap();
    assert!((salmon.fat() - 13.4).abs() < 1e-9);
    // Calories are derived, never read from the file.
    assert!((salmon.calories() - (20.4 * 4.0 + 13.4 * 9.0)).abs() < 1e-9);
}

#[test]
fn recipes_file_loads_with_nested_ingredients() {
    let dir = TempDir::new().unwrap();
    let path = write_file(
        &dir,
        "recipes.json",
        r#"[
          {
            "name": "Salmon Bowl",
            "flavor": "rich",
            "flavorTags": ["omega-3"],
            "cuisine": "nordic",
            "prepTime": 20,
            "ingredients": [
              {"name": "Salmon", "quantity": 150, "unit": "g", "caloriesPerUnit": 208, "pricePerUnit": 3.5, "category": "meat", "cookingMethod": "grilled"}
            ]
          }
        ]"#,
    );
    let recipes = load_recipes(&path).unwrap();
    assert_eq!(recipes.len(), 1);
    assert_eq!(recipes[0].ingredients.len(), 1);
    assert_eq!(recipes[0].ingredients[0].cooking_method, "grilled");
}

#[test]
fn catalog_loads_per_category_files() {
    let dir = TempDir::new().unwrap();
    write_file(
        &dir,
        "meat.json",
        r#"[{"name": "Salmon", "quantity": 1, "unit": "100g", "caloriesPerUnit": 208, "pricePerUnit": 3.5, "category": "meat"}]"#,
    );
    write_file(
        &dir,
        "CalorieModifier.json",
        r#"{"default": {"raw": 1.0}}"#,
    );

    let config = DataConfig::with_data_dir(dir.path().display().to_string());
    let catalog = Catalog::load(&config);

    // The meat file was read; missing category files fall back to defaults.
    assert_eq!(catalog.by_category("meat")[0].name, "Salmon");
    assert!(!catalog.by_category("dairy").is_empty());
    let salmon = catalog.by_name_with_quantity("salmon", 2.0).unwrap();
    assert!((salmon.quantity - 2.0).abs() < 1e-9);
}
