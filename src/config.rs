use config::{Config, Environment, File};
use serde::Deserialize;
use std::path::Path;

use crate::error::LoadError;

/// Locations of the meal data files.
#[derive(Debug, Deserialize, Clone)]
pub struct DataConfig {
    /// Directory holding all data files
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
    /// Recipe array file name
    #[serde(default = "default_recipes_file")]
    pub recipes_file: String,
    /// Calorie modifier file name
    #[serde(default = "default_modifiers_file")]
    pub modifiers_file: String,
    /// Nutrition table file name
    #[serde(default = "default_nutrition_file")]
    pub nutrition_file: String,
}

impl Default for DataConfig {
    fn default() -> Self {
        DataConfig {
            data_dir: default_data_dir(),
            recipes_file: default_recipes_file(),
            modifiers_file: default_modifiers_file(),
            nutrition_file: default_nutrition_file(),
        }
    }
}

fn default_data_dir() -> String {
    "data".to_string()
}

fn default_recipes_file() -> String {
    "recipes.json".to_string()
}

fn default_modifiers_file() -> String {
    "CalorieModifier.json".to_string()
}

fn default_nutrition_file() -> String {
    "micro_nutrition.json".to_string()
}

impl DataConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with MEALPLAN__ prefix
    /// 2. mealplan.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: MEALPLAN__DATA_DIR
    pub fn load() -> Result<Self, LoadError> {
        let settings = Config::builder()
            // Optional config file (can be missing)
            .add_source(File::with_name("mealplan").required(false))
            .add_source(
                Environment::with_prefix("MEALPLAN")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    /// A config rooted at a specific data directory, for tests and tools.
    pub fn with_data_dir(data_dir: impl Into<String>) -> Self {
        DataConfig {
            data_dir: data_dir.into(),
            ..Default::default()
        }
    }

    pub fn recipes_path(&self) -> String {
        self.join(&self.recipes_file)
    }

    pub fn modifiers_path(&self) -> String {
        self.join(&self.modifiers_file)
    }

    pub fn nutrition_path(&self) -> String {
        self.join(&self.nutrition_file)
    }

    /// Path of the ingredient file for one food category.
    pub fn category_path(&self, category: &str) -> String {
        self.join(&format!("{category}.json"))
    }

    fn join(&self, file: &str) -> String {
        Path::new(&self.data_dir).join(file).display().to_string()
    }
}
