use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ChartError;

/// A meal slot a food can be recommended for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    Snacks,
}

impl MealType {
    /// All meal types in the order a day's plan is presented.
    pub const ALL: [MealType; 4] = [
        MealType::Breakfast,
        MealType::Lunch,
        MealType::Dinner,
        MealType::Snacks,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            MealType::Breakfast => "Breakfast",
            MealType::Lunch => "Lunch",
            MealType::Dinner => "Dinner",
            MealType::Snacks => "Snacks",
        }
    }

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[inline]
    const fn bit(self) -> u8 {
        1 << self.index()
    }
}

impl fmt::Display for MealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MealType {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        MealType::ALL
            .into_iter()
            .find(|m| m.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ChartError::InvalidArgument(format!("unknown meal type '{}'", s)))
    }
}

/// Set of meal labels carried by a food.
///
/// The empty set marks an ingredient or non-edible item that is never recommended.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct MealTypeSet(u8);

impl MealTypeSet {
    pub const EMPTY: MealTypeSet = MealTypeSet(0);

    /// Const constructor for fixed label sets.
    pub const fn of(meals: &[MealType]) -> Self {
        let mut bits = 0;
        let mut i = 0;
        while i < meals.len() {
            bits |= meals[i].bit();
            i += 1;
        }
        MealTypeSet(bits)
    }

    pub fn contains(self, meal: MealType) -> bool {
        self.0 & meal.bit() != 0
    }

    pub fn insert(&mut self, meal: MealType) {
        self.0 |= meal.bit();
    }

    pub fn with(mut self, meal: MealType) -> Self {
        self.insert(meal);
        self
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Members in plan order.
    pub fn iter(self) -> impl Iterator<Item = MealType> {
        MealType::ALL.into_iter().filter(move |m| self.contains(*m))
    }

    /// Comma-joined, alphabetically sorted labels; empty string for the empty set.
    pub fn to_column(self) -> String {
        let mut labels: Vec<&str> = self.iter().map(MealType::as_str).collect();
        labels.sort_unstable();
        labels.join(",")
    }

    /// Parse the `Meal_Type` column form written by [`MealTypeSet::to_column`].
    pub fn parse_column(value: &str) -> crate::error::Result<Self> {
        value
            .split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(MealType::from_str)
            .collect()
    }
}

impl FromIterator<MealType> for MealTypeSet {
    fn from_iter<I: IntoIterator<Item = MealType>>(iter: I) -> Self {
        let mut set = MealTypeSet::EMPTY;
        for meal in iter {
            set.insert(meal);
        }
        set
    }
}

impl fmt::Display for MealTypeSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            f.write_str("(excluded)")
        } else {
            f.write_str(&self.to_column())
        }
    }
}
