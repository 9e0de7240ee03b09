pub mod prompts;
pub mod render;

pub use prompts::{
    collect_user_profile, prompt_activity_level, prompt_age, prompt_gender, prompt_goal,
    prompt_height, prompt_path, prompt_weight, prompt_yes_no,
};
pub use render::{
    display_catalog_summary, display_food_list, display_labels, display_meal_plan,
    display_nutrition_breakdown, display_suggestions, display_target,
};
