use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use serde::Serialize;

use crate::error::{ChartError, Result};

/// Accepted body weight in kilograms.
pub const WEIGHT_RANGE_KG: RangeInclusive<f64> = 30.0..=200.0;

/// Accepted height in centimeters.
pub const HEIGHT_RANGE_CM: RangeInclusive<f64> = 100.0..=250.0;

/// Accepted age in years.
pub const AGE_RANGE_YEARS: RangeInclusive<u32> = 10..=100;

/// Fold "Lightly Active", "lightly-active" and "lightly_active" to the same key.
fn normalize_label(s: &str) -> String {
    s.trim()
        .chars()
        .filter(|c| !matches!(c, ' ' | '-' | '_'))
        .flat_map(char::to_lowercase)
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Gender {
    Male,
    Female,
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        })
    }
}

impl FromStr for Gender {
    type Err = ChartError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match normalize_label(s).as_str() {
            "male" => Ok(Gender::Male),
            "female" => Ok(Gender::Female),
            _ => Err(ChartError::InvalidArgument(format!("unknown gender '{}'", s))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ActivityLevel {
    Sedentary,
    LightlyActive,
    ModeratelyActive,
    VeryActive,
}

impl ActivityLevel {
    pub const ALL: [ActivityLevel; 4] = [
        ActivityLevel::Sedentary,
        ActivityLevel::LightlyActive,
        ActivityLevel::ModeratelyActive,
        ActivityLevel::VeryActive,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "Sedentary",
            ActivityLevel::LightlyActive => "Lightly Active",
            ActivityLevel::ModeratelyActive => "Moderately Active",
            ActivityLevel::VeryActive => "Very Active",
        }
    }
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActivityLevel {
    type Err = ChartError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let key = normalize_label(s);
        ActivityLevel::ALL
            .into_iter()
            .find(|level| normalize_label(level.as_str()) == key)
            .ok_or_else(|| ChartError::InvalidArgument(format!("unknown activity level '{}'", s)))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Goal {
    Maintain,
    Lose,
    Gain,
}

impl Goal {
    pub const ALL: [Goal; 3] = [Goal::Maintain, Goal::Lose, Goal::Gain];

    pub fn as_str(self) -> &'static str {
        match self {
            Goal::Maintain => "Maintain Weight",
            Goal::Lose => "Lose Weight",
            Goal::Gain => "Gain Weight",
        }
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Goal {
    type Err = ChartError;

    /// Accepts both the short form ("lose") and the full label ("Lose Weight").
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let key = normalize_label(s);
        let key = key.strip_suffix("weight").unwrap_or(key.as_str());
        match key {
            "maintain" => Ok(Goal::Maintain),
            "lose" => Ok(Goal::Lose),
            "gain" => Ok(Goal::Gain),
            _ => Err(ChartError::InvalidArgument(format!("unknown goal '{}'", s))),
        }
    }
}

/// Biometrics and goal for a single planning request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserProfile {
    pub weight_kg: f64,
    pub height_cm: f64,
    pub age_years: u32,
    pub gender: Gender,
    pub activity: ActivityLevel,
    pub goal: Goal,
}

impl UserProfile {
    /// Build a profile, rejecting biometrics outside the accepted ranges.
    pub fn new(
        weight_kg: f64,
        height_cm: f64,
        age_years: u32,
        gender: Gender,
        activity: ActivityLevel,
        goal: Goal,
    ) -> Result<Self> {
        if !WEIGHT_RANGE_KG.contains(&weight_kg) {
            return Err(ChartError::InvalidInput(format!(
                "weight {} kg outside {:?}",
                weight_kg, WEIGHT_RANGE_KG
            )));
        }
        if !HEIGHT_RANGE_CM.contains(&height_cm) {
            return Err(ChartError::InvalidInput(format!(
                "height {} cm outside {:?}",
                height_cm, HEIGHT_RANGE_CM
            )));
        }
        if !AGE_RANGE_YEARS.contains(&age_years) {
            return Err(ChartError::InvalidInput(format!(
                "age {} outside {:?}",
                age_years, AGE_RANGE_YEARS
            )));
        }

        Ok(Self {
            weight_kg,
            height_cm,
            age_years,
            gender,
            activity,
            goal,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_activity_level_variants() {
        assert_eq!("Sedentary".parse::<ActivityLevel>().unwrap(), ActivityLevel::Sedentary);
        assert_eq!(
            "Lightly Active".parse::<ActivityLevel>().unwrap(),
            ActivityLevel::LightlyActive
        );
        assert_eq!(
            "moderately-active".parse::<ActivityLevel>().unwrap(),
            ActivityLevel::ModeratelyActive
        );
        assert_eq!("very_active".parse::<ActivityLevel>().unwrap(), ActivityLevel::VeryActive);
    }

    #[test]
    fn test_unknown_values_fail_loudly() {
        assert!(matches!(
            "Extra Active".parse::<ActivityLevel>(),
            Err(ChartError::InvalidArgument(_))
        ));
        assert!(matches!("bulk".parse::<Goal>(), Err(ChartError::InvalidArgument(_))));
        assert!(matches!("other".parse::<Gender>(), Err(ChartError::InvalidArgument(_))));
    }

    #[test]
    fn test_parse_goal() {
        assert_eq!("Lose Weight".parse::<Goal>().unwrap(), Goal::Lose);
        assert_eq!("gain".parse::<Goal>().unwrap(), Goal::Gain);
        assert_eq!("Maintain Weight".parse::<Goal>().unwrap(), Goal::Maintain);
    }

    #[test]
    fn test_profile_bounds() {
        let ok = UserProfile::new(70.0, 170.0, 25, Gender::Male, ActivityLevel::Sedentary, Goal::Maintain);
        assert!(ok.is_ok());

        let too_light =
            UserProfile::new(29.9, 170.0, 25, Gender::Male, ActivityLevel::Sedentary, Goal::Maintain);
        assert!(matches!(too_light, Err(ChartError::InvalidInput(_))));

        let too_tall =
            UserProfile::new(70.0, 251.0, 25, Gender::Female, ActivityLevel::Sedentary, Goal::Lose);
        assert!(matches!(too_tall, Err(ChartError::InvalidInput(_))));

        let too_young =
            UserProfile::new(70.0, 170.0, 9, Gender::Female, ActivityLevel::Sedentary, Goal::Gain);
        assert!(matches!(too_young, Err(ChartError::InvalidInput(_))));
    }
}
