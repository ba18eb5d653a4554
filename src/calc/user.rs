//! User metabolic calculations: BMR via the Mifflin-St Jeor equation and
//! TDEE via standard activity multipliers.

/// Biological sex, as used by the BMR equation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sex {
    Male,
    Female,
}

/// Biometric data entered by the user.
#[derive(Debug, Clone)]
pub struct UserProfile {
    pub age: u32,
    /// Height in centimeters.
    pub height: f64,
    /// Weight in kilograms.
    pub weight: f64,
    pub sex: Sex,
    /// Free-form activity description, matched by substring.
    pub activity_level: String,
}

impl UserProfile {
    /// Basal metabolic rate in calories per day.
    pub fn bmr(&self) -> f64 {
        let base = 10.0 * self.weight + 6.25 * self.height - 5.0 * self.age as f64;
        match self.sex {
            Sex::Male => base + 5.0,
            Sex::Female => base - 161.0,
        }
    }

    /// Total daily energy expenditure: BMR scaled by the activity multiplier.
    pub fn tdee(&self) -> f64 {
        self.bmr() * activity_multiplier(&self.activity_level)
    }
}

fn activity_multiplier(activity_level: &str) -> f64 {
    if activity_level.contains("Lightly active") {
        1.375
    } else if activity_level.contains("Moderately active") {
        1.55
    } else if activity_level.contains("Very active") {
        1.725
    } else if activity_level.contains("Extra active") {
        1.9
    } else {
        // Sedentary
        1.2
    }
}
