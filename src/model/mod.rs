mod ingredient;
mod modifiers;
mod nutrition;
mod recipe;

pub use self::ingredient::Ingredient;
pub use self::modifiers::CalorieModifiers;
pub use self::nutrition::{NutritionInfo, NutritionTable};
pub use self::recipe::Recipe;
