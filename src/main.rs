use std::path::{Path, PathBuf};

use clap::Parser;
use tracing::{debug, info};

use food_chart_rs::catalog::{ExportFormat, export_plan, load_catalog, save_labeled_catalog};
use food_chart_rs::classifier::{Classifier, KeywordRules};
use food_chart_rs::cli::{Cli, Command, PlanArgs, ProfileArgs};
use food_chart_rs::error::Result;
use food_chart_rs::interface::{
    collect_user_profile, display_catalog_summary, display_food_list, display_labels,
    display_meal_plan, display_suggestions, display_target, prompt_path, prompt_yes_no,
};
use food_chart_rs::logging;
use food_chart_rs::models::UserProfile;
use food_chart_rs::planner::{
    FUZZY_MATCH_LIMIT, FUZZY_MATCH_THRESHOLD, PlanConfig, basal_metabolic_rate,
    build_meal_plan, calculate_calories,
};
use food_chart_rs::Catalog;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let classifier = build_classifier(cli.rules.as_deref())?;
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Plan(args) => cmd_plan(&cli.file, &classifier, &args),
        Command::Target(profile) => cmd_target(&profile),
        Command::Prepare { output } => cmd_prepare(&cli.file, &classifier, &output),
        Command::Classify { names } => cmd_classify(&classifier, &names),
        Command::Search { query } => cmd_search(&cli.file, &classifier, &query),
    }
}

fn build_classifier(rules: Option<&Path>) -> Result<Classifier> {
    match rules {
        Some(path) => {
            info!(path = %path.display(), "loading keyword rules");
            Ok(Classifier::new(KeywordRules::load(path)?))
        }
        None => Ok(Classifier::default()),
    }
}

/// Load the catalog, or explain where it was expected.
fn open_catalog(file_path: &Path, classifier: &Classifier) -> Result<Option<Catalog>> {
    if !file_path.exists() {
        eprintln!("Food catalog not found: {}", file_path.display());
        eprintln!("Pass --file <path> pointing at a CSV with 'food' and 'Caloric Value' columns.");
        return Ok(None);
    }

    load_catalog(file_path, classifier).map(Some)
}

/// Compute the calorie target and recommend foods for each meal.
fn cmd_plan(file_path: &Path, classifier: &Classifier, args: &PlanArgs) -> Result<()> {
    let Some(catalog) = open_catalog(file_path, classifier)? else {
        return Ok(());
    };
    display_catalog_summary(&catalog);

    let profile = if args.interactive {
        collect_user_profile()?
    } else {
        args.profile.to_profile()?
    };

    let target = calculate_calories(&profile);
    display_target(&profile, bmr_of(&profile), target);

    let config = PlanConfig {
        servings: args.servings,
        ..PlanConfig::default()
    };
    let plan = build_meal_plan(&catalog, target, &config);
    debug!(items = plan.item_count(), "built meal plan");

    display_meal_plan(&plan);

    let export_path = match &args.export {
        Some(path) => Some(path.clone()),
        None if args.interactive && !plan.is_empty() => {
            if prompt_yes_no("Export meal plan?", false)? {
                let default = match args.format {
                    ExportFormat::Csv => "meal_plan",
                    ExportFormat::Json => "meal_plan.json",
                };
                Some(PathBuf::from(prompt_path("Export to", default)?))
            } else {
                None
            }
        }
        None => None,
    };

    if let Some(path) = export_path {
        let written = export_plan(&path, &plan, args.format)?;
        for file in written {
            println!("Exported {}", file.display());
        }
    }

    Ok(())
}

fn bmr_of(profile: &UserProfile) -> f64 {
    basal_metabolic_rate(
        profile.weight_kg,
        profile.height_cm,
        profile.age_years,
        profile.gender,
    )
}

/// Print BMR and daily target only.
fn cmd_target(args: &ProfileArgs) -> Result<()> {
    let profile = args.to_profile()?;
    let target = calculate_calories(&profile);
    display_target(&profile, bmr_of(&profile), target);
    Ok(())
}

/// Write the catalog back out with its meal labels.
fn cmd_prepare(file_path: &Path, classifier: &Classifier, output: &Path) -> Result<()> {
    let Some(catalog) = open_catalog(file_path, classifier)? else {
        return Ok(());
    };

    save_labeled_catalog(output, &catalog)?;
    display_catalog_summary(&catalog);
    println!("Labeled catalog written to {}", output.display());
    Ok(())
}

fn cmd_classify(classifier: &Classifier, names: &[String]) -> Result<()> {
    let labels: Vec<_> = names
        .iter()
        .map(|name| (name.clone(), classifier.classify(name)))
        .collect();
    display_labels(&labels);
    Ok(())
}

/// Search food names, falling back to fuzzy suggestions.
fn cmd_search(file_path: &Path, classifier: &Classifier, query: &str) -> Result<()> {
    let Some(catalog) = open_catalog(file_path, classifier)? else {
        return Ok(());
    };

    let hits = catalog.search(query);
    if hits.is_empty() {
        let suggestions = catalog.suggest(query, FUZZY_MATCH_THRESHOLD, FUZZY_MATCH_LIMIT);
        display_suggestions(query, &suggestions);
    } else {
        display_food_list(&hits, &format!("Foods matching '{}'", query));
    }

    Ok(())
}
