use crate::catalog::Catalog;
use crate::models::{FoodRecord, MealPlan, MealType, MealTypeSet, UserProfile};
use crate::planner::CalorieTarget;

/// Width of the longest bar in the text charts.
const BAR_WIDTH: usize = 40;

fn bar(value: f64, max: f64) -> String {
    if max <= 0.0 || value <= 0.0 {
        return String::new();
    }
    let len = ((value / max) * BAR_WIDTH as f64).round() as usize;
    "█".repeat(len.max(1))
}

/// Display the profile and the resulting calorie target.
pub fn display_target(profile: &UserProfile, bmr: f64, target: CalorieTarget) {
    println!();
    println!("=== Calorie Target ===");
    println!(
        "Profile: {} kg, {} cm, {} years, {}, {}, {}",
        profile.weight_kg,
        profile.height_cm,
        profile.age_years,
        profile.gender,
        profile.activity,
        profile.goal
    );
    println!("BMR: {:.1} kcal", bmr);
    println!("Daily calorie requirement: {}", target);
    println!();
}

/// Display a meal plan, one table per meal, followed by the nutrition breakdown.
pub fn display_meal_plan(plan: &MealPlan<'_>) {
    if plan.is_empty() {
        println!("No foods could be recommended (the catalog has no labeled foods).");
        return;
    }

    println!("=== Recommended Meals ===");

    let name_width = plan
        .foods()
        .map(|f| f.name.chars().count())
        .max()
        .unwrap_or(10)
        .max(4);

    for slot in &plan.slots {
        println!();
        println!(
            "{} ({:.0} kcal, ~{:.0} kcal per item)",
            slot.meal_type, slot.meal_calories, slot.per_item_target
        );

        if slot.is_empty() {
            println!("  (no foods labeled for {})", slot.meal_type);
            continue;
        }

        println!(
            "  {:<width$}  {:>8}  {:>8}  {:>8}  {:>8}",
            "food",
            "kcal",
            "protein",
            "fat",
            "carbs",
            width = name_width
        );
        for selection in &slot.items {
            let food = selection.food;
            println!(
                "  {:<width$}  {:>8.1}  {:>8.1}  {:>8.1}  {:>8.1}",
                food.name,
                food.caloric_value(),
                food.protein(),
                food.fat(),
                food.carbohydrates(),
                width = name_width
            );
        }
    }

    display_nutrition_breakdown(plan);
}

/// Macro totals and per-meal calories as text bars.
pub fn display_nutrition_breakdown(plan: &MealPlan<'_>) {
    let totals = plan.macro_summary();
    let macros = [
        ("Protein", totals.protein),
        ("Fat", totals.fat),
        ("Carbohydrates", totals.carbohydrates),
    ];
    let macro_max = macros.iter().map(|(_, v)| *v).fold(0.0, f64::max);

    println!();
    println!("--- Macronutrient Distribution (g) ---");
    for (label, value) in macros {
        println!("  {:<14} {:>8.1}  {}", label, value, bar(value, macro_max));
    }

    let per_meal = plan.calories_per_meal();
    let total: f64 = per_meal.iter().map(|(_, kcal)| kcal).sum();
    let meal_max = per_meal.iter().map(|(_, v)| *v).fold(0.0, f64::max);

    println!();
    println!("--- Calories per Meal ---");
    for (meal, kcal) in per_meal {
        let share = if total > 0.0 { kcal / total * 100.0 } else { 0.0 };
        println!(
            "  {:<14} {:>8.0}  {:>5.1}%  {}",
            meal.as_str(),
            kcal,
            share,
            bar(kcal, meal_max)
        );
    }

    println!();
    println!("--- Summary ---");
    println!("Daily target: {} kcal", plan.daily_calories);
    println!("Total items: {}", plan.item_count());
    println!("Total calories selected: {:.0}", total);
    println!();
}

/// Display foods matching a search, with derived calorie shares.
pub fn display_food_list(foods: &[&FoodRecord], title: &str) {
    if foods.is_empty() {
        println!("{}: (none)", title);
        return;
    }

    println!();
    println!("=== {} ({} items) ===", title, foods.len());
    println!();

    for food in foods {
        println!(
            "  {} - {} kcal, P:{} F:{} C:{} | P {:.0}% C {:.0}% F {:.0}% | {:.1} g protein/100 kcal | micro {:.2} | {}",
            food.name,
            food.caloric_value(),
            food.protein(),
            food.fat(),
            food.carbohydrates(),
            food.protein_calorie_pct(),
            food.carb_calorie_pct(),
            food.fat_calorie_pct(),
            food.protein_per_100kcal(),
            food.micronutrient_density(),
            food.meal_types
        );
    }

    println!();
}

/// Display name suggestions for a search with no hits.
pub fn display_suggestions(query: &str, suggestions: &[(&FoodRecord, f64)]) {
    if suggestions.is_empty() {
        println!("No food matches '{}'.", query);
        return;
    }

    println!("No food contains '{}'. Did you mean:", query);
    for (food, score) in suggestions {
        println!("  {} ({:.0}% similar)", food.name, score * 100.0);
    }
}

/// Display classifier labels for a list of names.
pub fn display_labels(labels: &[(String, MealTypeSet)]) {
    let width = labels.iter().map(|(n, _)| n.chars().count()).max().unwrap_or(0);
    for (name, set) in labels {
        println!("  {:<width$}  {}", name, set, width = width);
    }
}

/// Display how many foods each meal can draw from.
pub fn display_catalog_summary(catalog: &Catalog) {
    println!("Loaded {} foods", catalog.len());
    for meal in MealType::ALL {
        println!("  {:<10} {}", meal.as_str(), catalog.count_for(meal));
    }
    println!("  {:<10} {}", "Excluded", catalog.excluded_count());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_scales_to_width() {
        assert_eq!(bar(10.0, 10.0).chars().count(), BAR_WIDTH);
        assert_eq!(bar(5.0, 10.0).chars().count(), BAR_WIDTH / 2);
        assert_eq!(bar(0.01, 10.0).chars().count(), 1);
        assert!(bar(0.0, 10.0).is_empty());
        assert!(bar(3.0, 0.0).is_empty());
    }
}
