use std::env;

use log::warn;

use mealplan::calc::{price, NutritionCalculator};
use mealplan::{Catalog, DataConfig, Recipe, ShoppingCart};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config = DataConfig::load().unwrap_or_else(|e| {
        warn!("Error loading configuration: {e}; using defaults");
        DataConfig::default()
    });

    let catalog = Catalog::load(&config);
    let calculator = NutritionCalculator::from_config(&config, catalog.modifiers().clone());
    let recipes = mealplan::load_recipes(&config.recipes_path()).unwrap_or_else(|e| {
        warn!("Error loading recipes: {e}");
        Vec::new()
    });

    let args: Vec<String> = env::args().collect();
    match args.get(1).map(String::as_str) {
        None | Some("list") => list_recipes(&recipes, &calculator),
        Some("show") => {
            let name = args.get(2).ok_or("Usage: mealplan show <recipe name>")?;
            show_recipe(&recipes, name, &calculator)?;
        }
        Some("cart") => {
            if args.len() < 3 {
                return Err("Usage: mealplan cart <recipe name>...".into());
            }
            build_cart(&recipes, &args[2..])?;
        }
        Some(other) => {
            eprintln!("Unknown command '{other}'. Commands: list, show, cart");
        }
    }

    Ok(())
}

fn find_recipe<'a>(recipes: &'a [Recipe], name: &str) -> Option<&'a Recipe> {
    recipes
        .iter()
        .find(|r| r.name.eq_ignore_ascii_case(name.trim()))
}

fn list_recipes(recipes: &[Recipe], calculator: &NutritionCalculator) {
    if recipes.is_empty() {
        println!("No recipes loaded.");
        return;
    }
    for recipe in recipes {
        let calories = calculator.recipe_nutrition(recipe).calories().round();
        println!("{recipe} - {calories} calories");
    }
}

fn show_recipe(
    recipes: &[Recipe],
    name: &str,
    calculator: &NutritionCalculator,
) -> Result<(), Box<dyn std::error::Error>> {
    let recipe = find_recipe(recipes, name).ok_or_else(|| format!("No such recipe: {name}"))?;

    println!("{recipe}\n");
    println!("Ingredients:\n{}", recipe.ingredients_text());
    println!("Nutrition: {}\n", calculator.recipe_nutrition(recipe));
    println!("{}", recipe.prep_text());
    println!("Estimated price: ${:.2}", price::recipe_price(recipe));
    Ok(())
}

fn build_cart(recipes: &[Recipe], names: &[String]) -> Result<(), Box<dyn std::error::Error>> {
    let mut cart = ShoppingCart::new();
    for name in names {
        let recipe = find_recipe(recipes, name).ok_or_else(|| format!("No such recipe: {name}"))?;
        cart.add_recipe(recipe);
    }
    print!("{}", cart.receipt());
    Ok(())
}
