pub mod catalog;
pub mod classifier;
pub mod cli;
pub mod error;
pub mod interface;
pub mod logging;
pub mod models;
pub mod planner;

pub use catalog::Catalog;
pub use classifier::Classifier;
pub use error::{ChartError, Result};
pub use models::{FoodRecord, MealPlan, MealType, UserProfile};
