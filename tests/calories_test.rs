use assert_float_eq::*;

use food_chart_rs::models::{ActivityLevel, Gender, Goal, UserProfile};
use food_chart_rs::planner::{basal_metabolic_rate, calculate_calories, maintenance_calories};

fn profile(gender: Gender, activity: ActivityLevel, goal: Goal) -> UserProfile {
    UserProfile::new(70.0, 170.0, 25, gender, activity, goal).unwrap()
}

#[test]
fn test_male_female_bmr_gap() {
    for (w, h, a) in [(70.0, 170.0, 25), (55.5, 160.0, 40), (120.0, 201.0, 67)] {
        let male = basal_metabolic_rate(w, h, a, Gender::Male);
        let female = basal_metabolic_rate(w, h, a, Gender::Female);
        assert_float_absolute_eq!(male - female, 166.0, 1e-9);
    }
}

#[test]
fn test_reference_profile() {
    let p = profile(Gender::Male, ActivityLevel::Sedentary, Goal::Maintain);
    assert_float_absolute_eq!(basal_metabolic_rate(70.0, 170.0, 25, Gender::Male), 1642.5, 1e-9);
    assert_float_absolute_eq!(maintenance_calories(&p), 1971.0, 1e-9);
    assert_eq!(calculate_calories(&p).kcal(), 1971);
}

#[test]
fn test_goal_shifts_by_500() {
    for activity in ActivityLevel::ALL {
        for gender in [Gender::Male, Gender::Female] {
            let maintain = calculate_calories(&profile(gender, activity, Goal::Maintain)).kcal();
            let lose = calculate_calories(&profile(gender, activity, Goal::Lose)).kcal();
            let gain = calculate_calories(&profile(gender, activity, Goal::Gain)).kcal();

            assert_eq!(maintain - lose, 500, "{:?} {:?}", gender, activity);
            assert_eq!(gain - maintain, 500, "{:?} {:?}", gender, activity);
        }
    }
}

#[test]
fn test_activity_is_monotonic() {
    let targets: Vec<i32> = ActivityLevel::ALL
        .into_iter()
        .map(|a| calculate_calories(&profile(Gender::Female, a, Goal::Maintain)).kcal())
        .collect();

    assert!(targets.windows(2).all(|w| w[0] < w[1]), "{:?}", targets);
}

#[test]
fn test_profile_bounds_rejected() {
    let build = |w, h, a| {
        UserProfile::new(w, h, a, Gender::Male, ActivityLevel::Sedentary, Goal::Maintain)
    };

    assert!(build(29.9, 170.0, 25).is_err());
    assert!(build(70.0, 251.0, 25).is_err());
    assert!(build(70.0, 170.0, 9).is_err());
    assert!(build(30.0, 100.0, 100).is_ok());
}
