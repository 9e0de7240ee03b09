use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use csv::WriterBuilder;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::catalog::loader::{MEAL_TYPE_COLUMN, NAME_COLUMN};
use crate::catalog::store::Catalog;
use crate::error::Result;
use crate::models::{FoodRecord, MealPlan, MealType};

/// Columns of every meal plan sheet, in order.
pub const PLAN_COLUMNS: [&str; 5] = ["food", "Caloric Value", "Protein", "Fat", "Carbohydrates"];

/// Output format for an exported meal plan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// A directory with one CSV sheet per meal.
    #[default]
    Csv,
    /// A single JSON document.
    Json,
}

/// One row of an exported meal plan sheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanRow {
    #[serde(rename = "food")]
    pub food: String,

    #[serde(rename = "Caloric Value")]
    pub caloric_value: f64,

    #[serde(rename = "Protein")]
    pub protein: f64,

    #[serde(rename = "Fat")]
    pub fat: f64,

    #[serde(rename = "Carbohydrates")]
    pub carbohydrates: f64,
}

impl From<&FoodRecord> for PlanRow {
    fn from(food: &FoodRecord) -> Self {
        Self {
            food: food.name.clone(),
            caloric_value: food.caloric_value(),
            protein: food.protein(),
            fat: food.fat(),
            carbohydrates: food.carbohydrates(),
        }
    }
}

/// JSON form of an exported plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanDocument {
    pub daily_calories: i32,
    pub servings: usize,
    pub meals: BTreeMap<String, Vec<PlanRow>>,
}

impl From<&MealPlan<'_>> for PlanDocument {
    fn from(plan: &MealPlan<'_>) -> Self {
        let meals = plan
            .slots
            .iter()
            .map(|slot| {
                let rows = slot.items.iter().map(|s| PlanRow::from(s.food)).collect();
                (slot.meal_type.to_string(), rows)
            })
            .collect();

        Self {
            daily_calories: plan.daily_calories,
            servings: plan.servings,
            meals,
        }
    }
}

/// File name of a meal's sheet inside an export directory.
pub fn sheet_path(dir: &Path, meal: MealType) -> PathBuf {
    dir.join(format!("{}.csv", meal))
}

/// Write the plan as one CSV sheet per meal into `dir`, creating it if needed.
///
/// Empty meals still get a header-only sheet. Returns the written paths in plan order.
pub fn export_plan_csv<P: AsRef<Path>>(dir: P, plan: &MealPlan<'_>) -> Result<Vec<PathBuf>> {
    let dir = dir.as_ref();
    fs::create_dir_all(dir)?;

    let mut written = Vec::with_capacity(plan.slots.len());
    for slot in &plan.slots {
        let path = sheet_path(dir, slot.meal_type);
        let mut wtr = WriterBuilder::new().has_headers(false).from_path(&path)?;
        wtr.write_record(PLAN_COLUMNS)?;
        for selection in &slot.items {
            wtr.serialize(PlanRow::from(selection.food))?;
        }
        wtr.flush()?;
        written.push(path);
    }

    info!(dir = %dir.display(), sheets = written.len(), "exported meal plan");
    Ok(written)
}

/// Write the plan as a single pretty-printed JSON document.
pub fn export_plan_json<P: AsRef<Path>>(path: P, plan: &MealPlan<'_>) -> Result<PathBuf> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let json = serde_json::to_string_pretty(&PlanDocument::from(plan))?;
    fs::write(path, json)?;

    info!(path = %path.display(), "exported meal plan");
    Ok(path.to_path_buf())
}

/// Export in the requested format, returning every file written.
pub fn export_plan<P: AsRef<Path>>(
    path: P,
    plan: &MealPlan<'_>,
    format: ExportFormat,
) -> Result<Vec<PathBuf>> {
    match format {
        ExportFormat::Csv => export_plan_csv(path, plan),
        ExportFormat::Json => Ok(vec![export_plan_json(path, plan)?]),
    }
}

/// Read back the sheets of a CSV export. Meals without a sheet are skipped.
pub fn read_plan_csv<P: AsRef<Path>>(dir: P) -> Result<Vec<(MealType, Vec<PlanRow>)>> {
    let dir = dir.as_ref();
    let mut sheets = Vec::new();

    for meal in MealType::ALL {
        let path = sheet_path(dir, meal);
        if !path.exists() {
            continue;
        }

        let mut rdr = csv::Reader::from_path(&path)?;
        let rows = rdr.deserialize().collect::<std::result::Result<Vec<PlanRow>, _>>()?;
        sheets.push((meal, rows));
    }

    Ok(sheets)
}

/// Write the catalog with its label column, ready to be reloaded without reclassifying.
pub fn write_labeled_catalog<W: Write>(writer: W, catalog: &Catalog) -> Result<()> {
    let mut wtr = WriterBuilder::new().has_headers(false).from_writer(writer);

    let mut header: Vec<&str> = Vec::with_capacity(catalog.columns().len() + 2);
    header.push(NAME_COLUMN);
    header.extend(catalog.columns().iter().map(|n| n.header()));
    header.push(MEAL_TYPE_COLUMN);
    wtr.write_record(&header)?;

    for food in catalog.foods() {
        let mut record: Vec<String> = Vec::with_capacity(header.len());
        record.push(food.name.clone());
        record.extend(catalog.columns().iter().map(|n| food.get(*n).to_string()));
        record.push(food.meal_types.to_column());
        wtr.write_record(&record)?;
    }

    wtr.flush()?;
    Ok(())
}

/// Write the labeled catalog to a file.
pub fn save_labeled_catalog<P: AsRef<Path>>(path: P, catalog: &Catalog) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path)?;
    write_labeled_catalog(file, catalog)?;
    info!(path = %path.display(), foods = catalog.len(), "wrote labeled catalog");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::loader::read_catalog;
    use crate::classifier::Classifier;
    use crate::models::{MealTypeSet, Nutrient};

    #[test]
    fn test_labeled_catalog_reloads_without_reclassifying() {
        let foods = vec![
            FoodRecord::new("Olive Oil")
                .with(Nutrient::CaloricValue, 884.0)
                .with_meal_types(MealTypeSet::EMPTY.with(MealType::Snacks)),
            FoodRecord::new("Chicken, roasted")
                .with(Nutrient::CaloricValue, 239.5)
                .with(Nutrient::Protein, 27.3),
        ];
        let catalog = Catalog::from_foods(foods);

        let mut buf = Vec::new();
        write_labeled_catalog(&mut buf, &catalog).unwrap();

        let text = String::from_utf8(buf.clone()).unwrap();
        assert!(text.starts_with("food,Caloric Value,Fat,Carbohydrates,Protein,Meal_Type"));

        let reloaded = read_catalog(buf.as_slice(), &Classifier::default()).unwrap();
        assert_eq!(reloaded.len(), 2);
        // Labels come from the column, not the classifier
        assert!(reloaded.foods()[0].is_for(MealType::Snacks));
        assert!(reloaded.foods()[1].is_excluded());
        assert_eq!(reloaded.foods()[1].name, "Chicken, roasted");
        assert_eq!(reloaded.foods()[1].caloric_value(), 239.5);
        assert_eq!(reloaded.foods()[1].protein(), 27.3);
    }

    #[test]
    fn test_plan_row_from_food() {
        let food = FoodRecord::new("Dal")
            .with(Nutrient::CaloricValue, 116.0)
            .with(Nutrient::Protein, 9.0)
            .with(Nutrient::Fat, 0.4)
            .with(Nutrient::Carbohydrates, 20.0);
        let row = PlanRow::from(&food);
        assert_eq!(row.food, "Dal");
        assert_eq!(row.caloric_value, 116.0);
        assert_eq!(row.fat, 0.4);
    }
}
