// ABOUTME: Tests for intelligence configuration loading and environment overrides
// ABOUTME: Validates override parsing, rejection of bad values, and their effect on analysis
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pulse Health Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{fixed_instant, minimal_profile};
use pulse_health::constants::env_config;
use pulse_health::constants::recommendation_categories as categories;
use pulse_health::errors::{AppError, ErrorCode};
use pulse_health::intelligence::config::intelligence::ConfigError;
use pulse_health::models::{RiskLevel, SubjectProfile};
use pulse_health::{FixedClock, HealthPredictionSystem, IntelligenceConfig};
use serial_test::serial;
use std::env;

const ALL_KEYS: [&str; 9] = [
    env_config::RISK_LOW_MAX,
    env_config::RISK_LOW_MODERATE_MAX,
    env_config::RISK_MODERATE_MAX,
    env_config::RISK_MODERATE_HIGH_MAX,
    env_config::RECOMMENDATION_CV_RISK,
    env_config::RECOMMENDATION_DIABETES_RISK,
    env_config::RECOMMENDATION_BMI,
    env_config::RECOMMENDATION_MIN_EXERCISE,
    env_config::DEFAULT_ACTIVITY_MULTIPLIER,
];

fn clear_overrides() {
    for key in ALL_KEYS {
        env::remove_var(key);
    }
}

#[test]
#[serial]
fn test_load_without_overrides_matches_defaults() {
    clear_overrides();

    let config = IntelligenceConfig::<true>::load().unwrap();

    assert!((config.risk_levels.low_max - 15.0).abs() < f64::EPSILON);
    assert!((config.recommendation_engine.thresholds.bmi - 30.0).abs() < f64::EPSILON);
    assert!((config.body_metrics.default_activity_multiplier - 1.2).abs() < f64::EPSILON);
}

#[test]
#[serial]
fn test_overrides_are_applied() {
    clear_overrides();
    env::set_var(env_config::RECOMMENDATION_BMI, "27.5");
    env::set_var(env_config::DEFAULT_ACTIVITY_MULTIPLIER, " 1.375 ");
    env::set_var(env_config::RISK_LOW_MAX, "10");

    let config = IntelligenceConfig::<true>::load();
    clear_overrides();
    let config = config.unwrap();

    assert!((config.recommendation_engine.thresholds.bmi - 27.5).abs() < f64::EPSILON);
    assert!((config.body_metrics.default_activity_multiplier - 1.375).abs() < f64::EPSILON);
    assert_eq!(config.risk_levels.classify(12.0), RiskLevel::LowModerate);
}

#[test]
#[serial]
fn test_unparsable_override_is_rejected() {
    clear_overrides();
    env::set_var(env_config::RECOMMENDATION_CV_RISK, "fifty");

    let result = IntelligenceConfig::<true>::load();
    clear_overrides();

    let error = result.unwrap_err();
    assert!(matches!(error, ConfigError::Parse(_)));
    assert!(error.to_string().contains(env_config::RECOMMENDATION_CV_RISK));
}

#[test]
#[serial]
fn test_unordered_risk_bands_fail_validation() {
    clear_overrides();
    env::set_var(env_config::RISK_LOW_MAX, "60");

    let result = IntelligenceConfig::<true>::load();
    clear_overrides();

    let error = AppError::from(result.unwrap_err());
    assert_eq!(error.code, ErrorCode::ConfigInvalid);
}

#[test]
#[serial]
fn test_out_of_range_activity_multiplier_fails_validation() {
    clear_overrides();
    env::set_var(env_config::DEFAULT_ACTIVITY_MULTIPLIER, "4.0");

    let result = IntelligenceConfig::<true>::load();
    clear_overrides();

    assert!(matches!(
        result.unwrap_err(),
        ConfigError::ValueOutOfRange(_)
    ));
}

#[test]
#[serial]
fn test_overridden_config_changes_analysis() {
    clear_overrides();
    env::set_var(env_config::RECOMMENDATION_BMI, "20");

    let config = IntelligenceConfig::<true>::load();
    clear_overrides();
    let system = HealthPredictionSystem::with_config(&config.unwrap())
        .with_clock(FixedClock::new(fixed_instant()));

    // 60 kg at 165 cm is a BMI of 22, above the lowered trigger
    let profile = SubjectProfile {
        exercise_frequency: Some(4.0),
        ..minimal_profile()
    };
    let report = system.analyze(&profile).unwrap();

    assert!(report.has_recommendation(categories::WEIGHT_MANAGEMENT));
}
