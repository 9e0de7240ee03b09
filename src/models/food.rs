use crate::models::meal::{MealType, MealTypeSet};
use crate::models::nutrient::Nutrient;

/// A catalog entry: a named food with one value per nutrient column and its meal labels.
#[derive(Debug, Clone, PartialEq)]
pub struct FoodRecord {
    pub name: String,
    nutrients: [f64; Nutrient::COUNT],
    pub meal_types: MealTypeSet,
}

impl FoodRecord {
    /// Create a record with every nutrient at zero and no labels.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            nutrients: [0.0; Nutrient::COUNT],
            meal_types: MealTypeSet::EMPTY,
        }
    }

    /// Builder-style setter, mostly for fixtures.
    pub fn with(mut self, nutrient: Nutrient, value: f64) -> Self {
        self.set(nutrient, value);
        self
    }

    pub fn with_meal_types(mut self, meal_types: MealTypeSet) -> Self {
        self.meal_types = meal_types;
        self
    }

    #[inline]
    pub fn get(&self, nutrient: Nutrient) -> f64 {
        self.nutrients[nutrient.index()]
    }

    #[inline]
    pub fn set(&mut self, nutrient: Nutrient, value: f64) {
        self.nutrients[nutrient.index()] = value;
    }

    #[inline]
    pub fn caloric_value(&self) -> f64 {
        self.get(Nutrient::CaloricValue)
    }

    #[inline]
    pub fn protein(&self) -> f64 {
        self.get(Nutrient::Protein)
    }

    #[inline]
    pub fn fat(&self) -> f64 {
        self.get(Nutrient::Fat)
    }

    #[inline]
    pub fn carbohydrates(&self) -> f64 {
        self.get(Nutrient::Carbohydrates)
    }

    pub fn is_for(&self, meal: MealType) -> bool {
        self.meal_types.contains(meal)
    }

    /// Ingredient or non-edible entry, never recommended.
    pub fn is_excluded(&self) -> bool {
        self.meal_types.is_empty()
    }

    fn share_of_calories(&self, grams: f64, kcal_per_gram: f64) -> f64 {
        let calories = self.caloric_value();
        if calories > 0.0 {
            grams * kcal_per_gram / calories * 100.0
        } else {
            0.0
        }
    }

    /// Percentage of calories from protein (4 kcal/g).
    pub fn protein_calorie_pct(&self) -> f64 {
        self.share_of_calories(self.protein(), 4.0)
    }

    /// Percentage of calories from carbohydrates (4 kcal/g).
    pub fn carb_calorie_pct(&self) -> f64 {
        self.share_of_calories(self.carbohydrates(), 4.0)
    }

    /// Percentage of calories from fat (9 kcal/g).
    pub fn fat_calorie_pct(&self) -> f64 {
        self.share_of_calories(self.fat(), 9.0)
    }

    /// Grams of protein per 100 kcal.
    pub fn protein_per_100kcal(&self) -> f64 {
        self.share_of_calories(self.protein(), 1.0)
    }

    /// Mean of the 21 micronutrient columns.
    pub fn micronutrient_density(&self) -> f64 {
        let total: f64 = Nutrient::MICRONUTRIENTS.iter().map(|n| self.get(*n)).sum();
        total / Nutrient::MICRONUTRIENTS.len() as f64
    }

    /// Debug string for logging.
    pub fn debug_string(&self) -> String {
        format!(
            "{}: {} kcal, P:{} F:{} C:{} [{}]",
            self.name,
            self.caloric_value(),
            self.protein(),
            self.fat(),
            self.carbohydrates(),
            self.meal_types
        )
    }
}
