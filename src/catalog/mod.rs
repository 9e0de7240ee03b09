mod export;
mod loader;
mod store;

pub use export::{
    export_plan, export_plan_csv, export_plan_json, read_plan_csv, save_labeled_catalog,
    sheet_path, write_labeled_catalog, ExportFormat, PlanDocument, PlanRow, PLAN_COLUMNS,
};
pub use loader::{load_catalog, median, read_catalog, MEAL_TYPE_COLUMN, NAME_COLUMN, UNKNOWN_NAME};
pub use store::Catalog;
