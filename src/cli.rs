use std::num::NonZeroUsize;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::catalog::ExportFormat;
use crate::error::Result;
use crate::models::{ActivityLevel, Gender, Goal, UserProfile};
use crate::planner::PlanConfig;

/// Food Chart: daily calorie target and per-meal food recommendations from a nutrition catalog.
#[derive(Parser, Debug)]
#[command(name = "food_chart")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the food catalog CSV file.
    #[arg(short, long, global = true, default_value = "food_catalog.csv")]
    pub file: PathBuf,

    /// Optional JSON file replacing the built-in meal keyword rules.
    #[arg(long, global = true)]
    pub rules: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug). RUST_LOG takes precedence.
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compute the calorie target and recommend foods for every meal.
    Plan(PlanArgs),

    /// Print BMR and daily calorie target for a profile.
    Target(ProfileArgs),

    /// Write the catalog with a Meal_Type column added.
    Prepare {
        /// Destination CSV file.
        #[arg(short, long, default_value = "food_catalog_labeled.csv")]
        output: PathBuf,
    },

    /// Show the meal labels the classifier gives to food names.
    Classify {
        /// Food names to classify.
        #[arg(required = true)]
        names: Vec<String>,
    },

    /// Find foods whose name contains the query (case-insensitive).
    Search {
        /// Text to look for.
        query: String,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Plan(PlanArgs::default())
    }
}

/// Biometrics and goal.
#[derive(Args, Debug, Clone)]
pub struct ProfileArgs {
    /// Body weight in kg (30-200).
    #[arg(long, default_value_t = 70.0)]
    pub weight: f64,

    /// Height in cm (100-250).
    #[arg(long, default_value_t = 170.0)]
    pub height: f64,

    /// Age in years (10-100).
    #[arg(long, default_value_t = 25)]
    pub age: u32,

    /// male or female.
    #[arg(long, default_value = "male")]
    pub gender: Gender,

    /// sedentary, lightly-active, moderately-active or very-active.
    #[arg(long, default_value = "sedentary")]
    pub activity: ActivityLevel,

    /// maintain, lose or gain.
    #[arg(long, default_value = "maintain")]
    pub goal: Goal,
}

impl Default for ProfileArgs {
    fn default() -> Self {
        Self {
            weight: 70.0,
            height: 170.0,
            age: 25,
            gender: Gender::Male,
            activity: ActivityLevel::Sedentary,
            goal: Goal::Maintain,
        }
    }
}

impl ProfileArgs {
    /// Validate the flags into a profile.
    pub fn to_profile(&self) -> Result<UserProfile> {
        UserProfile::new(
            self.weight,
            self.height,
            self.age,
            self.gender,
            self.activity,
            self.goal,
        )
    }
}

fn default_servings() -> NonZeroUsize {
    PlanConfig::default().servings
}

#[derive(Args, Debug, Clone)]
pub struct PlanArgs {
    #[command(flatten)]
    pub profile: ProfileArgs,

    /// Foods recommended per meal.
    #[arg(short, long, default_value_t = default_servings())]
    pub servings: NonZeroUsize,

    /// Ask for the profile interactively instead of reading flags.
    #[arg(short, long)]
    pub interactive: bool,

    /// Export the plan to this path (a directory for csv, a file for json).
    #[arg(short, long)]
    pub export: Option<PathBuf>,

    /// Export format.
    #[arg(long, value_enum, default_value_t = ExportFormat::Csv)]
    pub format: ExportFormat,
}

impl Default for PlanArgs {
    fn default() -> Self {
        Self {
            profile: ProfileArgs::default(),
            servings: default_servings(),
            interactive: false,
            export: None,
            format: ExportFormat::Csv,
        }
    }
}
