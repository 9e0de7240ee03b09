pub mod calories;
pub mod constants;
pub mod selection;

pub use calories::{
    basal_metabolic_rate, calculate_calories, maintenance_calories, CalorieTarget,
};
pub use constants::*;
pub use selection::{build_meal_plan, select_for_meal, MealSplit, PlanConfig};
