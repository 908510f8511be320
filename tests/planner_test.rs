// ABOUTME: Integration tests for the nutrition planner and its rayon batch path
// ABOUTME: Checks stage chaining, body fat precedence, config overrides, and batch ordering
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use calculeat::config::EngineConfig;
use calculeat::planner::{plan, plan_batch, NutritionRequest};
use calculeat::{
    ActivityLevel, BmrFormula, BodyCompositionMethod, CalorieGoal, DeficitLevel, ErrorCode,
    MacroRanges, PalSystem,
};
use calculeat_intelligence::algorithms::compute_bmr;

fn loss_request() -> NutritionRequest {
    let mut request = NutritionRequest::new(common::reference_male(), CalorieGoal::Lose);
    request.activity.activity_level = ActivityLevel::ModeratelyActive;
    request.deficit = Some(DeficitLevel::Moderate);
    request
}

#[test]
fn default_pipeline_reproduces_reference_figures() {
    common::init_test_logging();
    let result = plan(&loss_request(), &EngineConfig::default());

    assert!(result.bmr.is_some_and(|bmr| (bmr - 1781.6).abs() < 1e-9));
    assert_eq!(result.tdee, Some(3029));
    let range = result.calorie_range.unwrap();
    assert_eq!((range.min, range.target, range.max), (2429, 2529, 2629));
    let macros = result.macros.unwrap();
    assert_eq!(
        (macros.protein.grams, macros.fat.grams, macros.carbs.grams),
        (160, 70, 315)
    );
    assert!(result.body_fat_percent.is_none());
    assert!(result.body_metrics.ffmi.is_none());
}

#[test]
fn estimated_body_fat_feeds_lean_mass_formulas() {
    let mut request = loss_request();
    request.caliper = common::jackson_pollock_3_male_sites();
    request.body_fat_method = Some(BodyCompositionMethod::JacksonPollock3Male);
    request.bmr_formula = Some(BmrFormula::Cunningham);

    let result = plan(&request, &EngineConfig::default());
    let body_fat = result.body_fat_percent.unwrap();
    assert!((body_fat - 11.23).abs() < 0.05);

    let expected = compute_bmr(
        BmrFormula::Cunningham,
        &common::reference_male().with_body_fat(body_fat).unwrap(),
    );
    assert_eq!(result.bmr, expected);
    assert!(result.tdee.is_some());
    assert!(result.body_metrics.ffmi.is_some());
}

#[test]
fn profile_body_fat_wins_over_estimate() {
    let mut request = loss_request();
    request.profile = common::reference_male().with_body_fat(20.0).unwrap();
    request.caliper = common::jackson_pollock_3_male_sites();
    request.body_fat_method = Some(BodyCompositionMethod::JacksonPollock3Male);

    let result = plan(&request, &EngineConfig::default());
    assert_eq!(result.body_fat_percent, Some(20.0));
}

#[test]
fn unavailable_method_leaves_body_fat_empty() {
    let mut request = loss_request();
    request.body_fat_method = Some(BodyCompositionMethod::UsNavy);
    request.bmr_formula = Some(BmrFormula::MacroFactorFfm);

    let result = plan(&request, &EngineConfig::default());
    assert!(result.body_fat_percent.is_none());
    assert!(result.bmr.is_none());
    assert!(result.calorie_range.is_none());
    assert!(result.body_metrics.bmi > 0.0);
}

#[test]
fn custom_macro_bands_replace_auto_mode() {
    let mut request = loss_request();
    request.macro_ranges = Some(MacroRanges::default());

    let result = plan(&request, &EngineConfig::default());
    let macros = result.macros.unwrap();
    // 25% of 2429 kcal at 9 kcal/g
    assert_eq!(macros.fat.min_grams, 67);
    assert!((macros.fat.percent - 32.5).abs() < 1e-9);
}

#[test]
fn config_supplies_defaults_and_offsets() {
    let mut config = EngineConfig::default();
    config.defaults.pal_system = PalSystem::BasicInternet;
    config.goals.calorie_floor = 2600.0;

    let result = plan(&loss_request(), &config);
    let baseline = plan(&loss_request(), &EngineConfig::default());
    assert_ne!(result.tdee, baseline.tdee);

    let range = result.calorie_range.unwrap();
    assert!(range.target >= 2600);
    assert!(range.min >= 2600);

    let mut explicit = loss_request();
    explicit.pal_system = Some(PalSystem::FaoWhoUnu);
    assert_eq!(plan(&explicit, &config).tdee, baseline.tdee);
}

#[test]
fn batch_matches_sequential_and_keeps_order() {
    let config = EngineConfig::default();
    let requests: Vec<NutritionRequest> = (0..64)
        .map(|i| {
            let mut request = loss_request();
            request.profile = calculeat::AnthropometricProfile::new(
                20 + i % 40,
                if i % 2 == 0 {
                    calculeat::Gender::Male
                } else {
                    calculeat::Gender::Female
                },
                55.0 + f64::from(i),
                160.0 + f64::from(i % 30),
            )
            .unwrap();
            request.goal = match i % 3 {
                0 => CalorieGoal::Lose,
                1 => CalorieGoal::Gain,
                _ => CalorieGoal::Maintain,
            };
            request
        })
        .collect();

    let sequential: Vec<_> = requests.iter().map(|r| plan(r, &config)).collect();
    let parallel = plan_batch(&requests, &config);
    assert_eq!(parallel, sequential);
}

#[test]
fn request_json_rejects_invalid_profile() {
    let valid = r#"{
        "profile": {"age": 30, "gender": "male", "weight_kg": 80.0, "height_cm": 180.0},
        "activity": {"gender": "male", "activity_level": "moderately_active"},
        "goal": "lose"
    }"#;
    let request: NutritionRequest = serde_json::from_str(valid).unwrap();
    assert_eq!(plan(&request, &EngineConfig::default()).tdee, Some(3029));

    let invalid = valid.replace("80.0", "-80.0");
    assert!(serde_json::from_str::<NutritionRequest>(&invalid).is_err());

    let err = calculeat::AnthropometricProfile::new(30, calculeat::Gender::Male, -1.0, 180.0)
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::ValueOutOfRange);
}
