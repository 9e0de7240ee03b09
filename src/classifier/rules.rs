use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::MealType;

/// Substrings that mark an ingredient or non-edible entry.
pub const EXCLUSION_KEYWORDS: &[&str] = &[
    "oil", "butter", "fat", "grease", "lard", "syrup", "vinegar", "sauce", "gravy", "powder",
    "spice", "seasoning", "salt", "sugar", "extract", "flour", "yeast", "baking", "mix", "starch",
    "gelatin", "pectin", "dressing", "essence", "seeds", "kernel", "bran", "meal",
];

pub const BREAKFAST_KEYWORDS: &[&str] = &[
    "egg", "omelet", "pancake", "muffin", "toast", "cereal", "oats", "oatmeal", "porridge", "idli",
    "dosa", "upma", "poha", "paratha", "bagel", "croissant", "yogurt", "lassi", "waffle", "donut",
    "jam", "honey", "tea", "coffee", "milk", "smoothie",
];

pub const LUNCH_KEYWORDS: &[&str] = &[
    "rice", "biryani", "sandwich", "burger", "wrap", "shawarma", "chicken", "fish", "beef",
    "mutton", "pork", "dal", "paneer", "sabji", "roti", "chapati", "thali", "noodle", "pasta",
    "curry", "quesadilla", "enchilada", "burrito", "taco", "paratha", "fried rice", "kebab",
    "cutlet", "idli sambar", "pulao", "pav bhaji",
];

pub const DINNER_KEYWORDS: &[&str] = &[
    "steak", "soup", "stew", "gravy", "chowder", "chop", "roast", "lasagna", "pizza", "spaghetti",
    "fajita", "saute", "fillet", "cutlet", "meatloaf", "dal", "sabji", "paneer", "biryani",
    "thali", "curry", "roti", "naan", "pulao", "fried rice", "korma",
];

pub const SNACKS_KEYWORDS: &[&str] = &[
    "chips", "fries", "pakora", "samosa", "vada", "bhel", "chaat", "puff", "roll", "spring roll",
    "nuts", "candy", "chocolate", "cookie", "crackers", "pastry", "pie", "cake", "snack", "fudge",
    "jelly", "pudding", "ice cream", "bar", "spread", "granola", "fruit", "kachori", "momo",
    "dumpling", "nachos", "biscuits", "toast", "sev",
];

/// Keyword lists for one meal type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealKeywords {
    pub meal: MealType,
    pub keywords: Vec<String>,
}

/// Data-driven classification tables.
///
/// Serialized form:
/// ```json
/// { "exclusions": ["oil"], "meals": [{ "meal": "Breakfast", "keywords": ["egg"] }] }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordRules {
    pub exclusions: Vec<String>,
    pub meals: Vec<MealKeywords>,
}

fn owned(keywords: &[&str]) -> Vec<String> {
    keywords.iter().map(|k| k.to_string()).collect()
}

impl Default for KeywordRules {
    fn default() -> Self {
        Self {
            exclusions: owned(EXCLUSION_KEYWORDS),
            meals: vec![
                MealKeywords {
                    meal: MealType::Breakfast,
                    keywords: owned(BREAKFAST_KEYWORDS),
                },
                MealKeywords {
                    meal: MealType::Lunch,
                    keywords: owned(LUNCH_KEYWORDS),
                },
                MealKeywords {
                    meal: MealType::Dinner,
                    keywords: owned(DINNER_KEYWORDS),
                },
                MealKeywords {
                    meal: MealType::Snacks,
                    keywords: owned(SNACKS_KEYWORDS),
                },
            ],
        }
    }
}

impl KeywordRules {
    /// Load rules from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Case-fold every keyword and drop blanks, which would otherwise match every name.
    pub fn normalized(mut self) -> Self {
        let fold = |keywords: &mut Vec<String>| {
            *keywords = keywords
                .iter()
                .map(|k| k.trim().to_lowercase())
                .filter(|k| !k.is_empty())
                .collect();
        };

        fold(&mut self.exclusions);
        for entry in &mut self.meals {
            fold(&mut entry.keywords);
        }
        self
    }
}
