use crate::models::{ActivityLevel, Gender, Goal, MealType};

// ─────────────────────────────────────────────────────────────────────────────
// Mifflin-St Jeor coefficients
// ─────────────────────────────────────────────────────────────────────────────

/// kcal per kilogram of body weight.
pub const BMR_WEIGHT_COEF: f64 = 10.0;

/// kcal per centimeter of height.
pub const BMR_HEIGHT_COEF: f64 = 6.25;

/// kcal per year of age (subtracted).
pub const BMR_AGE_COEF: f64 = 5.0;

pub const BMR_MALE_CONSTANT: f64 = 5.0;
pub const BMR_FEMALE_CONSTANT: f64 = -161.0;

/// Daily calorie shift applied for a weight-loss or weight-gain goal.
pub const GOAL_ADJUSTMENT_KCAL: f64 = 500.0;

// ─────────────────────────────────────────────────────────────────────────────
// Meal planning
// ─────────────────────────────────────────────────────────────────────────────

/// Items recommended per meal; the per-item target is the meal budget divided by this.
pub const DEFAULT_SERVINGS: usize = 5;

/// Default share of the daily target per meal, in plan order. Sums to 1.0.
pub const DEFAULT_MEAL_PROPORTIONS: [(MealType, f64); 4] = [
    (MealType::Breakfast, 0.30),
    (MealType::Lunch, 0.40),
    (MealType::Dinner, 0.25),
    (MealType::Snacks, 0.05),
];

/// Allowed drift when checking that meal proportions sum to one.
pub const PROPORTION_SUM_TOLERANCE: f64 = 1e-6;

// ─────────────────────────────────────────────────────────────────────────────
// Search
// ─────────────────────────────────────────────────────────────────────────────

/// Minimum Jaro-Winkler similarity for a "did you mean" suggestion.
pub const FUZZY_MATCH_THRESHOLD: f64 = 0.8;

/// Maximum number of fuzzy suggestions shown.
pub const FUZZY_MATCH_LIMIT: usize = 5;

/// Multiplier from BMR to daily energy expenditure.
pub fn activity_factor(level: ActivityLevel) -> f64 {
    match level {
        ActivityLevel::Sedentary => 1.2,
        ActivityLevel::LightlyActive => 1.375,
        ActivityLevel::ModeratelyActive => 1.55,
        ActivityLevel::VeryActive => 1.725,
    }
}

/// Signed kcal shift for a goal.
pub fn goal_adjustment(goal: Goal) -> f64 {
    match goal {
        Goal::Maintain => 0.0,
        Goal::Lose => -GOAL_ADJUSTMENT_KCAL,
        Goal::Gain => GOAL_ADJUSTMENT_KCAL,
    }
}

/// Sex-specific BMR constant.
pub fn gender_constant(gender: Gender) -> f64 {
    match gender {
        Gender::Male => BMR_MALE_CONSTANT,
        Gender::Female => BMR_FEMALE_CONSTANT,
    }
}
