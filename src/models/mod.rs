pub mod food;
pub mod meal;
pub mod nutrient;
pub mod plan;
pub mod profile;

pub use food::FoodRecord;
pub use meal::{MealType, MealTypeSet};
pub use nutrient::Nutrient;
pub use plan::{MacroTotals, MealPlan, MealSlot, Selection};
pub use profile::{ActivityLevel, Gender, Goal, UserProfile};
