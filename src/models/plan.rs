use crate::models::food::FoodRecord;
use crate::models::meal::MealType;

/// A food picked for a meal slot together with its distance to the per-item target.
#[derive(Debug, Clone, Copy)]
pub struct Selection<'a> {
    pub food: &'a FoodRecord,

    /// Absolute difference between the food's caloric value and the per-item target.
    pub calorie_diff: f64,
}

/// One meal of the day and the foods chosen for it.
#[derive(Debug, Clone)]
pub struct MealSlot<'a> {
    pub meal_type: MealType,

    /// Share of the daily target allocated to this meal.
    pub meal_calories: f64,

    /// Calories each serving aims for (`meal_calories / servings`).
    pub per_item_target: f64,

    /// Chosen foods, closest to `per_item_target` first.
    pub items: Vec<Selection<'a>>,
}

impl MealSlot<'_> {
    /// Sum of the caloric values actually selected.
    pub fn selected_calories(&self) -> f64 {
        self.items.iter().map(|s| s.food.caloric_value()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Protein/fat/carbohydrate totals over a set of foods.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MacroTotals {
    pub calories: f64,
    pub protein: f64,
    pub fat: f64,
    pub carbohydrates: f64,
}

impl MacroTotals {
    fn add(&mut self, food: &FoodRecord) {
        self.calories += food.caloric_value();
        self.protein += food.protein();
        self.fat += food.fat();
        self.carbohydrates += food.carbohydrates();
    }
}

/// A day's recommendation: the calorie target and one slot per meal type.
#[derive(Debug, Clone)]
pub struct MealPlan<'a> {
    pub daily_calories: i32,
    pub servings: usize,
    pub slots: Vec<MealSlot<'a>>,
}

impl<'a> MealPlan<'a> {
    pub fn slot(&self, meal_type: MealType) -> Option<&MealSlot<'a>> {
        self.slots.iter().find(|s| s.meal_type == meal_type)
    }

    /// All selected foods across slots, in plan order.
    pub fn foods(&self) -> impl Iterator<Item = &'a FoodRecord> + '_ {
        self.slots
            .iter()
            .flat_map(|slot| slot.items.iter().map(|s| s.food))
    }

    /// Macro breakdown of everything the plan recommends.
    pub fn macro_summary(&self) -> MacroTotals {
        let mut totals = MacroTotals::default();
        for food in self.foods() {
            totals.add(food);
        }
        totals
    }

    /// Selected calories per meal, in plan order.
    pub fn calories_per_meal(&self) -> Vec<(MealType, f64)> {
        self.slots
            .iter()
            .map(|slot| (slot.meal_type, slot.selected_calories()))
            .collect()
    }

    pub fn item_count(&self) -> usize {
        self.slots.iter().map(|s| s.items.len()).sum()
    }

    /// True when no slot received any food.
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(MealSlot::is_empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::nutrient::Nutrient;

    #[test]
    fn test_macro_summary_and_calories_per_meal() {
        let eggs = FoodRecord::new("Eggs")
            .with(Nutrient::CaloricValue, 150.0)
            .with(Nutrient::Protein, 12.0)
            .with(Nutrient::Fat, 10.0)
            .with(Nutrient::Carbohydrates, 1.0);
        let rice = FoodRecord::new("Rice")
            .with(Nutrient::CaloricValue, 200.0)
            .with(Nutrient::Protein, 4.0)
            .with(Nutrient::Fat, 0.5)
            .with(Nutrient::Carbohydrates, 45.0);

        let plan = MealPlan {
            daily_calories: 2000,
            servings: 5,
            slots: vec![
                MealSlot {
                    meal_type: MealType::Breakfast,
                    meal_calories: 600.0,
                    per_item_target: 120.0,
                    items: vec![Selection { food: &eggs, calorie_diff: 30.0 }],
                },
                MealSlot {
                    meal_type: MealType::Lunch,
                    meal_calories: 800.0,
                    per_item_target: 160.0,
                    items: vec![Selection { food: &rice, calorie_diff: 40.0 }],
                },
                MealSlot {
                    meal_type: MealType::Snacks,
                    meal_calories: 100.0,
                    per_item_target: 20.0,
                    items: vec![],
                },
            ],
        };

        let totals = plan.macro_summary();
        assert_eq!(totals.calories, 350.0);
        assert_eq!(totals.protein, 16.0);
        assert_eq!(totals.fat, 10.5);
        assert_eq!(totals.carbohydrates, 46.0);

        let per_meal = plan.calories_per_meal();
        assert_eq!(per_meal[0], (MealType::Breakfast, 150.0));
        assert_eq!(per_meal[2], (MealType::Snacks, 0.0));

        assert_eq!(plan.item_count(), 2);
        assert!(!plan.is_empty());
        assert!(plan.slot(MealType::Snacks).unwrap().is_empty());
        assert!(plan.slot(MealType::Dinner).is_none());
    }
}
