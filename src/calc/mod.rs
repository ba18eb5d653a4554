pub mod nutrition;
pub mod price;
pub mod user;

pub use self::nutrition::NutritionCalculator;
pub use self::user::{Sex, UserProfile};
