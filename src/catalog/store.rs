use strsim::jaro_winkler;

use crate::models::{FoodRecord, MealType, Nutrient};

/// Columns assumed for a catalog built in memory rather than loaded from a file.
const DEFAULT_COLUMNS: [Nutrient; 4] = [
    Nutrient::CaloricValue,
    Nutrient::Fat,
    Nutrient::Carbohydrates,
    Nutrient::Protein,
];

/// The labeled food collection, loaded once and only read afterwards.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    foods: Vec<FoodRecord>,

    /// Nutrient columns present in the source, in schema order.
    columns: Vec<Nutrient>,
}

impl Catalog {
    pub fn new(foods: Vec<FoodRecord>, mut columns: Vec<Nutrient>) -> Self {
        columns.sort();
        columns.dedup();
        Self { foods, columns }
    }

    /// Catalog over records whose labels are already set.
    pub fn from_foods(foods: Vec<FoodRecord>) -> Self {
        Self::new(foods, DEFAULT_COLUMNS.to_vec())
    }

    pub fn foods(&self) -> &[FoodRecord] {
        &self.foods
    }

    pub fn columns(&self) -> &[Nutrient] {
        &self.columns
    }

    /// Foods labeled for a meal, in catalog order.
    pub fn for_meal(&self, meal: MealType) -> impl Iterator<Item = &FoodRecord> {
        self.foods.iter().filter(move |f| f.is_for(meal))
    }

    pub fn count_for(&self, meal: MealType) -> usize {
        self.for_meal(meal).count()
    }

    /// Foods carrying no label at all.
    pub fn excluded_count(&self) -> usize {
        self.foods.iter().filter(|f| f.is_excluded()).count()
    }

    /// First food whose name equals `name`, ignoring case.
    pub fn get(&self, name: &str) -> Option<&FoodRecord> {
        let name = name.to_lowercase();
        self.foods.iter().find(|f| f.name.to_lowercase() == name)
    }

    /// Case-insensitive substring search on food names, in catalog order.
    pub fn search(&self, query: &str) -> Vec<&FoodRecord> {
        let query = query.trim().to_lowercase();
        self.foods
            .iter()
            .filter(|f| f.name.to_lowercase().contains(&query))
            .collect()
    }

    /// Names similar to `query` (Jaro-Winkler), best first.
    pub fn suggest(&self, query: &str, threshold: f64, limit: usize) -> Vec<(&FoodRecord, f64)> {
        let query = query.trim().to_lowercase();
        let mut candidates: Vec<(&FoodRecord, f64)> = self
            .foods
            .iter()
            .map(|f| (f, jaro_winkler(&f.name.to_lowercase(), &query)))
            .filter(|(_, score)| *score > threshold)
            .collect();

        candidates.sort_by(|a, b| b.1.total_cmp(&a.1));
        candidates.truncate(limit);
        candidates
    }

    pub fn len(&self) -> usize {
        self.foods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.foods.is_empty()
    }
}
