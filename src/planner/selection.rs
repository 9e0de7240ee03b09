use std::num::NonZeroUsize;

use tracing::debug;

use crate::catalog::Catalog;
use crate::error::{ChartError, Result};
use crate::models::{MealPlan, MealSlot, MealType, Selection};
use crate::planner::calories::CalorieTarget;
use crate::planner::constants::{DEFAULT_MEAL_PROPORTIONS, DEFAULT_SERVINGS, PROPORTION_SUM_TOLERANCE};

/// Share of the daily calorie target given to each meal.
#[derive(Debug, Clone, PartialEq)]
pub struct MealSplit {
    proportions: [f64; 4],
}

impl Default for MealSplit {
    fn default() -> Self {
        let mut proportions = [0.0; 4];
        for (meal, share) in DEFAULT_MEAL_PROPORTIONS {
            proportions[meal.index()] = share;
        }
        Self { proportions }
    }
}

impl MealSplit {
    /// Build a custom split. Shares must be non-negative and sum to 1.0.
    pub fn new(breakfast: f64, lunch: f64, dinner: f64, snacks: f64) -> Result<Self> {
        let proportions = [breakfast, lunch, dinner, snacks];

        if let Some(bad) = proportions.iter().find(|p| !p.is_finite() || **p < 0.0) {
            return Err(ChartError::InvalidArgument(format!(
                "meal proportion {} must be a non-negative number",
                bad
            )));
        }

        let sum: f64 = proportions.iter().sum();
        if (sum - 1.0).abs() > PROPORTION_SUM_TOLERANCE {
            return Err(ChartError::InvalidArgument(format!(
                "meal proportions sum to {}, expected 1.0",
                sum
            )));
        }

        Ok(Self { proportions })
    }

    #[inline]
    pub fn proportion(&self, meal: MealType) -> f64 {
        self.proportions[meal.index()]
    }
}

/// Settings for one planning request.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanConfig {
    pub split: MealSplit,
    pub servings: NonZeroUsize,
}

impl Default for PlanConfig {
    fn default() -> Self {
        Self {
            split: MealSplit::default(),
            servings: NonZeroUsize::new(DEFAULT_SERVINGS).unwrap_or(NonZeroUsize::MIN),
        }
    }
}

/// Rank the foods labeled for `meal` by closeness to `per_item_target` and keep the best `servings`.
///
/// The sort is stable, so equal distances keep catalog order.
pub fn select_for_meal<'a>(
    catalog: &'a Catalog,
    meal: MealType,
    per_item_target: f64,
    servings: usize,
) -> Vec<Selection<'a>> {
    let mut candidates: Vec<Selection<'a>> = catalog
        .for_meal(meal)
        .map(|food| Selection {
            food,
            calorie_diff: (food.caloric_value() - per_item_target).abs(),
        })
        .collect();

    let available = candidates.len();
    candidates.sort_by(|a, b| a.calorie_diff.total_cmp(&b.calorie_diff));
    candidates.truncate(servings);

    debug!(
        meal = %meal,
        per_item_target,
        available,
        selected = candidates.len(),
        "ranked meal candidates"
    );

    candidates
}

/// Build a full day's plan: one slot per meal type, each filled with the closest-calorie foods.
///
/// Meals with no labeled foods come back as empty slots.
pub fn build_meal_plan<'a>(catalog: &'a Catalog, target: CalorieTarget, config: &PlanConfig) -> MealPlan<'a> {
    let daily = target.kcal() as f64;
    let servings = config.servings.get();

    let slots = MealType::ALL
        .into_iter()
        .map(|meal_type| {
            let meal_calories = daily * config.split.proportion(meal_type);
            let per_item_target = meal_calories / servings as f64;
            let items = select_for_meal(catalog, meal_type, per_item_target, servings);

            MealSlot {
                meal_type,
                meal_calories,
                per_item_target,
                items,
            }
        })
        .collect();

    MealPlan {
        daily_calories: target.kcal(),
        servings,
        slots,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FoodRecord, Nutrient};

    fn food(name: &str, kcal: f64, meals: &[MealType]) -> FoodRecord {
        FoodRecord::new(name)
            .with(Nutrient::CaloricValue, kcal)
            .with_meal_types(meals.iter().copied().collect())
    }

    fn sample_catalog() -> Catalog {
        Catalog::from_foods(vec![
            food("Porridge", 150.0, &[MealType::Breakfast]),
            food("Omelet", 110.0, &[MealType::Breakfast]),
            food("Toast", 90.0, &[MealType::Breakfast, MealType::Snacks]),
            food("Curry", 300.0, &[MealType::Lunch, MealType::Dinner]),
            food("Olive Oil", 120.0, &[]),
        ])
    }

    #[test]
    fn test_meal_split_default_sums_to_one() {
        let split = MealSplit::default();
        let sum: f64 = MealType::ALL.iter().map(|m| split.proportion(*m)).sum();
        assert!((sum - 1.0).abs() < 1e-12);
        assert_eq!(split.proportion(MealType::Lunch), 0.40);
    }

    #[test]
    fn test_meal_split_rejects_bad_sums() {
        assert!(MealSplit::new(0.25, 0.25, 0.25, 0.25).is_ok());
        assert!(matches!(
            MealSplit::new(0.5, 0.5, 0.5, 0.0),
            Err(ChartError::InvalidArgument(_))
        ));
        assert!(matches!(
            MealSplit::new(1.2, -0.2, 0.0, 0.0),
            Err(ChartError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_select_for_meal_orders_by_distance() {
        let catalog = sample_catalog();
        let picks = select_for_meal(&catalog, MealType::Breakfast, 100.0, 5);

        let names: Vec<&str> = picks.iter().map(|s| s.food.name.as_str()).collect();
        // Omelet and Toast are both 10 away; catalog order breaks the tie
        assert_eq!(names, vec!["Omelet", "Toast", "Porridge"]);
        assert_eq!(picks[0].calorie_diff, 10.0);
    }

    #[test]
    fn test_select_for_meal_truncates_to_servings() {
        let catalog = sample_catalog();
        let picks = select_for_meal(&catalog, MealType::Breakfast, 100.0, 2);
        assert_eq!(picks.len(), 2);
    }

    #[test]
    fn test_excluded_foods_never_selected() {
        let catalog = sample_catalog();
        let plan = build_meal_plan(&catalog, CalorieTarget::from_kcal(2000), &PlanConfig::default());
        assert!(plan.foods().all(|f| f.name != "Olive Oil"));
    }

    #[test]
    fn test_build_meal_plan_targets() {
        let catalog = sample_catalog();
        let plan = build_meal_plan(&catalog, CalorieTarget::from_kcal(2000), &PlanConfig::default());

        assert_eq!(plan.slots.len(), 4);
        let breakfast = plan.slot(MealType::Breakfast).unwrap();
        assert!((breakfast.meal_calories - 600.0).abs() < 1e-9);
        assert!((breakfast.per_item_target - 120.0).abs() < 1e-9);

        let snacks = plan.slot(MealType::Snacks).unwrap();
        assert_eq!(snacks.items.len(), 1);
        assert_eq!(snacks.items[0].food.name, "Toast");
    }

    #[test]
    fn test_empty_catalog_gives_empty_slots() {
        let catalog = Catalog::from_foods(Vec::new());
        let plan = build_meal_plan(&catalog, CalorieTarget::from_kcal(1800), &PlanConfig::default());
        assert_eq!(plan.slots.len(), 4);
        assert!(plan.is_empty());
    }
}
