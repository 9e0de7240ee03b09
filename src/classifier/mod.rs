//! Keyword-based meal-type labeling.
//!
//! A name is case-folded and matched by substring: any exclusion keyword
//! empties the label set, otherwise every meal whose keyword list hits is
//! added, and a name that hits nothing falls back to Lunch and Dinner.

pub mod rules;

pub use rules::{KeywordRules, MealKeywords};

use crate::models::{MealType, MealTypeSet};

/// Labels given to edible foods that match no meal keyword.
pub const FALLBACK_MEAL_TYPES: MealTypeSet = MealTypeSet::of(&[MealType::Lunch, MealType::Dinner]);

/// Assigns meal labels to food names from a set of [`KeywordRules`].
#[derive(Debug, Clone)]
pub struct Classifier {
    rules: KeywordRules,
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new(KeywordRules::default())
    }
}

impl Classifier {
    pub fn new(rules: KeywordRules) -> Self {
        Self {
            rules: rules.normalized(),
        }
    }

    pub fn rules(&self) -> &KeywordRules {
        &self.rules
    }

    /// True if the name contains an exclusion keyword.
    pub fn is_excluded(&self, name: &str) -> bool {
        let folded = name.to_lowercase();
        self.excluded_folded(&folded)
    }

    fn excluded_folded(&self, folded: &str) -> bool {
        self.rules.exclusions.iter().any(|kw| folded.contains(kw.as_str()))
    }

    /// Meal labels for a food name. Exclusion wins over any meal keyword.
    pub fn classify(&self, name: &str) -> MealTypeSet {
        let folded = name.to_lowercase();
        if self.excluded_folded(&folded) {
            return MealTypeSet::EMPTY;
        }

        let matched: MealTypeSet = self
            .rules
            .meals
            .iter()
            .filter(|entry| entry.keywords.iter().any(|kw| folded.contains(kw.as_str())))
            .map(|entry| entry.meal)
            .collect();

        if matched.is_empty() {
            FALLBACK_MEAL_TYPES
        } else {
            matched
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(names: &[MealType]) -> MealTypeSet {
        names.iter().copied().collect()
    }

    #[test]
    fn test_exclusion_keyword_empties_labels() {
        let classifier = Classifier::default();
        assert!(classifier.classify("Olive Oil").is_empty());
        assert!(classifier.classify("Peanut Butter").is_empty());
        assert!(classifier.is_excluded("Garlic POWDER"));
    }

    #[test]
    fn test_shared_dish_gets_both_labels() {
        let classifier = Classifier::default();
        assert_eq!(
            classifier.classify("Chicken Biryani"),
            labels(&[MealType::Lunch, MealType::Dinner])
        );
    }

    #[test]
    fn test_unmatched_name_falls_back_to_lunch_and_dinner() {
        let classifier = Classifier::default();
        assert_eq!(
            classifier.classify("zzz_unknown_food"),
            labels(&[MealType::Lunch, MealType::Dinner])
        );
    }

    #[test]
    fn test_substring_matching_across_meals() {
        let classifier = Classifier::default();
        // "pancake" is breakfast, "cake" is a snack
        assert_eq!(
            classifier.classify("Pancake"),
            labels(&[MealType::Breakfast, MealType::Snacks])
        );
        assert_eq!(classifier.classify("Chocolate Cookie"), labels(&[MealType::Snacks]));
        assert_eq!(
            classifier.classify("Whole Wheat Toast"),
            labels(&[MealType::Breakfast, MealType::Snacks])
        );
    }

    #[test]
    fn test_exclusion_precedence_collisions_are_kept() {
        let classifier = Classifier::default();
        // "meal" and "oil" hide inside otherwise valid dishes
        assert!(classifier.classify("Oatmeal").is_empty());
        assert!(classifier.classify("Boiled Egg").is_empty());
    }

    #[test]
    fn test_custom_rules_swap_tables() {
        let rules = KeywordRules {
            exclusions: vec!["Raw".to_string()],
            meals: vec![MealKeywords {
                meal: MealType::Snacks,
                keywords: vec!["APPLE".to_string()],
            }],
        };
        let classifier = Classifier::new(rules);

        assert_eq!(classifier.classify("Green Apple"), labels(&[MealType::Snacks]));
        assert!(classifier.classify("Raw Apple").is_empty());
        assert_eq!(classifier.classify("Olive Oil"), FALLBACK_MEAL_TYPES);
    }
}
