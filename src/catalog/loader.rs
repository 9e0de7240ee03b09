use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, Trim};
use tracing::{debug, info, warn};

use crate::classifier::Classifier;
use crate::catalog::store::Catalog;
use crate::error::{ChartError, Result};
use crate::models::{FoodRecord, MealTypeSet, Nutrient};

/// Header holding the food name.
pub const NAME_COLUMN: &str = "food";

/// Header holding pre-computed meal labels.
pub const MEAL_TYPE_COLUMN: &str = "Meal_Type";

/// Name given to rows whose name cell is empty.
pub const UNKNOWN_NAME: &str = "Unknown";

/// Serial/index headers dropped without a warning.
const INDEX_COLUMNS: &[&str] = &["SL No", "Unnamed: 0", ""];

#[derive(Debug, Clone, Copy, PartialEq)]
enum Column {
    Name,
    Nutrient(Nutrient),
    MealTypes,
    Ignored,
}

fn map_header(header: &str) -> Column {
    let header = header.trim();
    if header == NAME_COLUMN {
        Column::Name
    } else if header == MEAL_TYPE_COLUMN {
        Column::MealTypes
    } else if let Some(nutrient) = Nutrient::from_header(header) {
        Column::Nutrient(nutrient)
    } else {
        if !INDEX_COLUMNS.contains(&header) {
            warn!(column = header, "ignoring unexpected catalog column");
        }
        Column::Ignored
    }
}

/// One parsed row before missing values are filled.
struct RawRow {
    name: Option<String>,
    values: [Option<f64>; Nutrient::COUNT],
    meal_types: MealTypeSet,
}

fn is_missing(field: &str) -> bool {
    field.is_empty() || field.eq_ignore_ascii_case("nan") || field.eq_ignore_ascii_case("na")
}

fn parse_number(field: &str, nutrient: Nutrient, line: usize) -> Result<Option<f64>> {
    if is_missing(field) {
        return Ok(None);
    }

    let value: f64 = field.parse().map_err(|_| {
        ChartError::DataFormat(format!(
            "line {}: '{}' is not a number in column '{}'",
            line,
            field,
            nutrient.header()
        ))
    })?;

    if !value.is_finite() {
        return Err(ChartError::DataFormat(format!(
            "line {}: non-finite value in column '{}'",
            line,
            nutrient.header()
        )));
    }
    if nutrient == Nutrient::CaloricValue && value < 0.0 {
        return Err(ChartError::DataFormat(format!(
            "line {}: negative caloric value {}",
            line, value
        )));
    }

    Ok(Some(value))
}

/// Median of the present values; mean of the two middle values for an even count.
pub fn median(values: &mut [f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }

    values.sort_by(f64::total_cmp);
    let mid = values.len() / 2;
    if values.len() % 2 == 0 {
        Some((values[mid - 1] + values[mid]) / 2.0)
    } else {
        Some(values[mid])
    }
}

/// Load a catalog from a CSV file.
///
/// Rows are labeled from a `Meal_Type` column when present, otherwise by `classifier`.
pub fn load_catalog<P: AsRef<Path>>(path: P, classifier: &Classifier) -> Result<Catalog> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let catalog = read_catalog(file, classifier)?;
    info!(path = %path.display(), foods = catalog.len(), "loaded food catalog");
    Ok(catalog)
}

/// Parse a catalog from any CSV source.
pub fn read_catalog<R: Read>(reader: R, classifier: &Classifier) -> Result<Catalog> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    let columns: Vec<Column> = headers.iter().map(map_header).collect();

    let mut present: Vec<Nutrient> = Vec::new();
    let mut has_name = false;
    let mut has_meal_types = false;
    for column in &columns {
        match column {
            Column::Name if has_name => {
                return Err(ChartError::DataFormat(format!("duplicate column '{}'", NAME_COLUMN)));
            }
            Column::Name => has_name = true,
            Column::Nutrient(n) if present.contains(n) => {
                return Err(ChartError::DataFormat(format!("duplicate column '{}'", n.header())));
            }
            Column::Nutrient(n) => present.push(*n),
            Column::MealTypes => has_meal_types = true,
            Column::Ignored => {}
        }
    }

    if !has_name {
        return Err(ChartError::DataFormat(format!(
            "missing required column '{}'",
            NAME_COLUMN
        )));
    }
    if !present.contains(&Nutrient::CaloricValue) {
        return Err(ChartError::DataFormat(format!(
            "missing required column '{}'",
            Nutrient::CaloricValue.header()
        )));
    }
    for macro_nutrient in [Nutrient::Protein, Nutrient::Fat, Nutrient::Carbohydrates] {
        if !present.contains(&macro_nutrient) {
            warn!(column = macro_nutrient.header(), "catalog has no column, reading as zero");
        }
    }

    let mut rows = Vec::new();
    for (row_index, result) in rdr.records().enumerate() {
        let record = result?;
        // header is line 1
        let line = row_index + 2;

        let mut row = RawRow {
            name: None,
            values: [None; Nutrient::COUNT],
            meal_types: MealTypeSet::EMPTY,
        };

        for (column, field) in columns.iter().zip(record.iter()) {
            match column {
                Column::Name => {
                    if !field.is_empty() {
                        row.name = Some(field.to_string());
                    }
                }
                Column::Nutrient(n) => row.values[n.index()] = parse_number(field, *n, line)?,
                Column::MealTypes => {
                    row.meal_types = MealTypeSet::parse_column(field).map_err(|e| {
                        ChartError::DataFormat(format!("line {}: {}", line, e))
                    })?;
                }
                Column::Ignored => {}
            }
        }

        rows.push(row);
    }

    let mut fill = [0.0; Nutrient::COUNT];
    for nutrient in &present {
        let mut values: Vec<f64> = rows.iter().filter_map(|r| r.values[nutrient.index()]).collect();
        let missing = rows.len() - values.len();
        fill[nutrient.index()] = median(&mut values).unwrap_or(0.0);
        if missing > 0 {
            debug!(
                column = nutrient.header(),
                missing,
                median = fill[nutrient.index()],
                "filled missing values"
            );
        }
    }

    let foods: Vec<FoodRecord> = rows
        .into_iter()
        .map(|row| {
            let name = row.name.unwrap_or_else(|| UNKNOWN_NAME.to_string());
            let mut food = FoodRecord::new(name);
            for nutrient in &present {
                let value = row.values[nutrient.index()].unwrap_or(fill[nutrient.index()]);
                food.set(*nutrient, value);
            }
            food.meal_types = if has_meal_types {
                row.meal_types
            } else {
                classifier.classify(&food.name)
            };
            food
        })
        .collect();

    debug!(
        rows = foods.len(),
        columns = present.len(),
        prelabeled = has_meal_types,
        "parsed catalog"
    );

    Ok(Catalog::new(foods, present))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MealType;

    fn load(csv: &str) -> Result<Catalog> {
        read_catalog(csv.as_bytes(), &Classifier::default())
    }

    #[test]
    fn test_median() {
        let mut empty: Vec<f64> = Vec::new();
        assert_eq!(median(&mut empty), None);
        assert_eq!(median(&mut [3.0, 1.0, 2.0]), Some(2.0));
        assert_eq!(median(&mut [4.0, 1.0, 3.0, 2.0]), Some(2.5));
    }

    #[test]
    fn test_load_classifies_rows() {
        let catalog = load(
            "SL No,food,Caloric Value,Fat,Carbohydrates,Protein\n\
             1,Chicken Biryani,290,11,30,15\n\
             2,Olive Oil,884,100,0,0\n",
        )
        .unwrap();

        assert_eq!(catalog.len(), 2);
        let biryani = &catalog.foods()[0];
        assert_eq!(biryani.caloric_value(), 290.0);
        assert_eq!(biryani.protein(), 15.0);
        assert!(biryani.is_for(MealType::Lunch));
        assert!(biryani.is_for(MealType::Dinner));
        assert!(catalog.foods()[1].is_excluded());
        assert_eq!(
            catalog.columns(),
            &[
                Nutrient::CaloricValue,
                Nutrient::Fat,
                Nutrient::Carbohydrates,
                Nutrient::Protein
            ]
        );
    }

    #[test]
    fn test_missing_cells_use_column_median() {
        let catalog = load(
            "food,Caloric Value,Protein\n\
             Rice,100,2\n\
             Dal,,8\n\
             Roti,300,\n\
             ,200,4\n",
        )
        .unwrap();

        let dal = catalog.get("dal").unwrap();
        assert_eq!(dal.caloric_value(), 200.0);
        let roti = catalog.get("roti").unwrap();
        assert_eq!(roti.protein(), 4.0);
        assert_eq!(catalog.foods()[3].name, UNKNOWN_NAME);
        // Fat is absent entirely
        assert_eq!(roti.fat(), 0.0);
    }

    #[test]
    fn test_missing_required_columns() {
        let no_calories = load("food,Protein\nRice,2\n");
        assert!(matches!(no_calories, Err(ChartError::DataFormat(_))));

        let no_name = load("name,Caloric Value\nRice,100\n");
        assert!(matches!(no_name, Err(ChartError::DataFormat(_))));
    }

    #[test]
    fn test_bad_cells_are_rejected() {
        let text = load("food,Caloric Value\nRice,lots\n");
        assert!(matches!(text, Err(ChartError::DataFormat(_))));

        let negative = load("food,Caloric Value\nRice,-5\n");
        assert!(matches!(negative, Err(ChartError::DataFormat(_))));

        let duplicate = load("food,Caloric Value,Caloric Value\nRice,1,2\n");
        assert!(matches!(duplicate, Err(ChartError::DataFormat(_))));
    }

    #[test]
    fn test_meal_type_column_is_trusted() {
        let catalog = load(
            "food,Caloric Value,Meal_Type\n\
             Olive Oil,884,Snacks\n\
             Chicken Biryani,290,\n\
             Porridge,120,\"Breakfast,Snacks\"\n",
        )
        .unwrap();

        assert!(catalog.foods()[0].is_for(MealType::Snacks));
        assert!(catalog.foods()[1].is_excluded());
        assert!(catalog.foods()[2].is_for(MealType::Breakfast));
        assert!(catalog.foods()[2].is_for(MealType::Snacks));

        let unknown = load("food,Caloric Value,Meal_Type\nRice,100,Brunch\n");
        assert!(matches!(unknown, Err(ChartError::DataFormat(_))));
    }

    #[test]
    fn test_unexpected_columns_are_ignored() {
        let catalog = load("food,Caloric Value,Color\nRice,100,white\n").unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.columns(), &[Nutrient::CaloricValue]);
    }
}
