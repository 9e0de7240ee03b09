use std::fmt;

use tracing::debug;

use crate::models::{Gender, UserProfile};
use crate::planner::constants::*;

/// Daily calorie budget derived from a profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct CalorieTarget(i32);

impl CalorieTarget {
    pub fn from_kcal(kcal: i32) -> Self {
        Self(kcal)
    }

    #[inline]
    pub fn kcal(self) -> i32 {
        self.0
    }
}

impl fmt::Display for CalorieTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} kcal", self.0)
    }
}

/// Basal metabolic rate using the Mifflin-St Jeor equation.
///
/// BMR = 10·weight + 6.25·height − 5·age + (5 for men, −161 for women)
pub fn basal_metabolic_rate(weight_kg: f64, height_cm: f64, age_years: u32, gender: Gender) -> f64 {
    BMR_WEIGHT_COEF * weight_kg + BMR_HEIGHT_COEF * height_cm - BMR_AGE_COEF * age_years as f64
        + gender_constant(gender)
}

/// Daily energy expenditure before any goal adjustment (BMR × activity factor).
pub fn maintenance_calories(profile: &UserProfile) -> f64 {
    basal_metabolic_rate(
        profile.weight_kg,
        profile.height_cm,
        profile.age_years,
        profile.gender,
    ) * activity_factor(profile.activity)
}

/// Daily calorie target: maintenance calories shifted by the goal, rounded half-to-even.
///
/// The result is not clamped; extreme profiles on a weight-loss goal can go negative.
pub fn calculate_calories(profile: &UserProfile) -> CalorieTarget {
    let maintenance = maintenance_calories(profile);
    let daily = (maintenance + goal_adjustment(profile.goal)).round_ties_even();

    debug!(
        maintenance,
        daily,
        goal = %profile.goal,
        activity = %profile.activity,
        "computed calorie target"
    );

    CalorieTarget(daily as i32)
}
