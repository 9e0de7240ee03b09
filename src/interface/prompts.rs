use std::fmt::Display;
use std::ops::RangeInclusive;
use std::str::FromStr;

use dialoguer::{Confirm, Input, Select};

use crate::error::{ChartError, Result};
use crate::models::profile::{AGE_RANGE_YEARS, HEIGHT_RANGE_CM, WEIGHT_RANGE_KG};
use crate::models::{ActivityLevel, Gender, Goal, UserProfile};

/// Prompt for a number inside `range`, re-asking until the answer parses and fits.
fn prompt_in_range<T>(prompt: &str, range: RangeInclusive<T>, default: T) -> Result<T>
where
    T: FromStr + PartialOrd + Display + Copy,
{
    let (min, max) = (*range.start(), *range.end());
    let input: String = Input::new()
        .with_prompt(format!("{} ({}-{})", prompt, min, max))
        .default(default.to_string())
        .validate_with(|input: &String| -> std::result::Result<(), String> {
            match input.trim().parse::<T>() {
                Ok(value) if range.contains(&value) => Ok(()),
                Ok(_) => Err(format!("Enter a value between {} and {}", min, max)),
                Err(_) => Err("Invalid number".to_string()),
            }
        })
        .interact_text()?;

    input
        .trim()
        .parse()
        .map_err(|_| ChartError::InvalidInput("Invalid number".to_string()))
}

/// Prompt for body weight in kilograms.
pub fn prompt_weight() -> Result<f64> {
    prompt_in_range("Weight (kg)", WEIGHT_RANGE_KG, 70.0)
}

/// Prompt for height in centimeters.
pub fn prompt_height() -> Result<f64> {
    prompt_in_range("Height (cm)", HEIGHT_RANGE_CM, 170.0)
}

/// Prompt for age in years.
pub fn prompt_age() -> Result<u32> {
    prompt_in_range("Age", AGE_RANGE_YEARS, 25)
}

pub fn prompt_gender() -> Result<Gender> {
    let options = [Gender::Male, Gender::Female];
    let selection = Select::new()
        .with_prompt("Gender")
        .items(&options)
        .default(0)
        .interact()?;
    Ok(options[selection])
}

pub fn prompt_activity_level() -> Result<ActivityLevel> {
    let selection = Select::new()
        .with_prompt("Activity level")
        .items(&ActivityLevel::ALL)
        .default(0)
        .interact()?;
    Ok(ActivityLevel::ALL[selection])
}

pub fn prompt_goal() -> Result<Goal> {
    let selection = Select::new()
        .with_prompt("Goal")
        .items(&Goal::ALL)
        .default(0)
        .interact()?;
    Ok(Goal::ALL[selection])
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

/// Prompt for a path, offering `default`.
pub fn prompt_path(prompt: &str, default: &str) -> Result<String> {
    let input: String = Input::new()
        .with_prompt(prompt)
        .default(default.to_string())
        .interact_text()?;
    Ok(input.trim().to_string())
}

/// Collect a full profile interactively.
pub fn collect_user_profile() -> Result<UserProfile> {
    let weight = prompt_weight()?;
    let height = prompt_height()?;
    let age = prompt_age()?;
    let gender = prompt_gender()?;
    let activity = prompt_activity_level()?;
    let goal = prompt_goal()?;

    UserProfile::new(weight, height, age, gender, activity, goal)
}
