use mealplan::parser::{ingredients_from_str, modifiers_from_str, recipes_from_str};

const INGREDIENTS: &str = r#"[
  {
    "name": "TestChicken",
    "quantity": 200,
    "unit": "g",
    "caloriesPerUnit": 165,
    "pricePerUnit": 4.99,
    "category": "meat",
    "cookingMethod": "grilled",
    "description": "Test chicken description"
  },
  {
    "name": "TestBroccoli",
    "quantity": 100,
    "unit": "g",
    "caloriesPerUnit": 34,
    "pricePerUnit": 2.49,
    "category": "vegetable",
    "cookingMethod": "steamed",
    "description": "Test broccoli description"
  }
]"#;

#[test]
fn well_formed_array_round_trips_every_field() {
    let ingredients = ingredients_from_str(INGREDIENTS);
    assert_eq!(ingredients.len(), 2);

    let chicken = &ingredients[0];
    assert_eq!(chicken.name, "TestChicken");
    assert!((chicken.quantity - 200.0).abs() < 1e-9);
    assert_eq!(chicken.unit, "g");
    assert_eq!(chicken.calories_per_unit, 165);
    assert!((chicken.price_per_unit - 4.99).abs() < 1e-9);
    assert_eq!(chicken.category, "meat");
    assert_eq!(chicken.cooking_method, "grilled");
    assert_eq!(chicken.description, "Test chicken description");

    assert_eq!(ingredients[1].name, "TestBroccoli");
    assert_eq!(ingredients[1].cooking_method, "steamed");
}

#[test]
fn one_malformed_record_is_isolated() {
    let text = r#"[
      {"name": "First", "quantity": 1, "unit": "g", "caloriesPerUnit": 10, "pricePerUnit": 1.0, "category": "meat"},
      {"name": "Second", "quantity": "not-a-number", "unit": "g", "caloriesPerUnit": 10, "pricePerUnit": 1.0, "category": "meat"},
      {"name": "Third", "quantity": 2, "unit": "g", "caloriesPerUnit": 10, "pricePerUnit": 1.0, "category": "meat"}
    ]"#;
    let ingredients = ingredients_from_str(text);
    assert_eq!(ingredients.len(), 2);
    assert_eq!(ingredients[0].name, "First");
    assert_eq!(ingredients[1].name, "Third");
}

#[test]
fn record_missing_a_required_field_is_skipped() {
    let text = r#"[
      {"name": "NoCategory", "quantity": 1, "unit": "g", "caloriesPerUnit": 10, "pricePerUnit": 1.0}
    ]"#;
    assert!(ingredients_from_str(text).is_empty());
}

#[test]
fn empty_documents_yield_empty_results() {
    assert!(ingredients_from_str("[]").is_empty());
    assert!(recipes_from_str("[]").is_empty());
    let modifiers = modifiers_from_str("{}");
    assert!(modifiers.is_empty());
}

#[test]
fn non_json_text_yields_empty_results_without_error() {
    assert!(ingredients_from_str("just some prose").is_empty());
    assert!(modifiers_from_str("also not json").is_empty());
}

#[test]
fn escaped_quotes_survive_inside_descriptions() {
    let text = r#"[
      {"name": "Herb", "quantity": 1, "unit": "g", "caloriesPerUnit": 1, "pricePerUnit": 0.1,
       "category": "seasoning", "description": "so-called \"fines herbes\", chopped"}
    ]"#;
    let ingredients = ingredients_from_str(text);
    assert_eq!(ingredients.len(), 1);
    assert!(ingredients[0].description.contains("fines herbes"));
    assert!(ingredients[0].description.contains("chopped"));
}

#[test]
fn recipe_with_nested_arrays_parses_completely() {
    let text = r#"[
      {
        "name": "Test Stir Fry",
        "flavor": "savory",
        "flavorTags": ["healthy", "quick", "protein-rich"],
        "cuisine": "asian",
        "prepTime": 25,
        "ingredients": [
          {
            "name": "TestChicken",
            "quantity": 200,
            "unit": "g",
            "caloriesPerUnit": 165,
            "pricePerUnit": 4.99,
            "category": "meat",
            "cookingMethod": "grilled"
          },
          {
            "name": "TestBroccoli",
            "quantity": 100,
            "unit": "g",
            "caloriesPerUnit": 34,
            "pricePerUnit": 2.49,
            "category": "vegetable",
            "cookingMethod": "steamed"
          }
        ]
      }
    ]"#;

    let recipes = recipes_from_str(text);
    assert_eq!(recipes.len(), 1);
    let recipe = &recipes[0];
    assert_eq!(recipe.name, "Test Stir Fry");
    assert_eq!(recipe.flavor, "savory");
    assert_eq!(recipe.flavor_tags, vec!["healthy", "quick", "protein-rich"]);
    assert_eq!(recipe.cuisine, "asian");
    assert_eq!(recipe.prep_time, 25);
    assert_eq!(recipe.ingredients.len(), 2);
    assert_eq!(recipe.ingredients[0].name, "TestChicken");
    assert_eq!(recipe.ingredients[1].category, "vegetable");
}

#[test]
fn recipe_missing_flavor_tags_is_skipped() {
    let text = r#"[
      {"name": "Bare", "flavor": "plain", "cuisine": "none", "prepTime": 5, "ingredients": []}
    ]"#;
    assert!(recipes_from_str(text).is_empty());
}

#[test]
fn modifier_precedence_prefers_the_most_specific_scope() {
    let text = r#"{
      "default": {"raw": 1.0, "grilled": 1.05},
      "categories": {"meat": {"grilled": 1.3}},
      "subcategories": {"fish": {"grilled": 1.1}},
      "ingredients": {"salmon": {"grilled": 1.2}}
    }"#;
    let modifiers = modifiers_from_str(text);

    // Ingredient-level entry wins over the fish subcategory.
    assert!((modifiers.multiplier("salmon", "meat", "grilled") - 1.2).abs() < 1e-9);
    // No ingredient entry for tuna: the fish subcategory applies.
    assert!((modifiers.multiplier("tuna", "meat", "grilled") - 1.1).abs() < 1e-9);
    // Plain meat falls through to the category level.
    assert!((modifiers.multiplier("beef", "meat", "grilled") - 1.3).abs() < 1e-9);
    // Unknown category uses the default scope.
    assert!((modifiers.multiplier("salt", "seasoning", "grilled") - 1.05).abs() < 1e-9);
}
