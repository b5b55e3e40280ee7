// ABOUTME: Tests for the type 2 diabetes risk predictor
// ABOUTME: Validates glucose floor, obesity-family multiplier, waist thresholds, and defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pulse Health Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{assert_close, very_high_risk_profile};
use pulse_health::intelligence::config::intelligence::{DiabetesModelConfig, RiskLevelThresholds};
use pulse_health::models::{Gender, RiskLevel, SubjectProfile};
use pulse_health::samples::high_risk_profile;
use pulse_health::{DiabetesRiskPredictor, RiskPredictor};

fn predictor() -> DiabetesRiskPredictor {
    DiabetesRiskPredictor::with_config(
        DiabetesModelConfig::default(),
        RiskLevelThresholds::default(),
    )
}

#[test]
fn test_diagnostic_glucose_sets_risk_floor() {
    let predictor = predictor();

    for sugar in [126.0, 140.0, 200.0] {
        let profile = SubjectProfile {
            fasting_blood_sugar: Some(sugar),
            ..SubjectProfile::new(30.0, Gender::Female, 165.0, 55.0).with_bmi(20.2)
        };
        assert!(predictor.predict_risk(&profile) >= 75.0);
    }

    let below = SubjectProfile {
        fasting_blood_sugar: Some(125.0),
        ..SubjectProfile::new(30.0, Gender::Female, 165.0, 55.0).with_bmi(20.2)
    };
    assert!(predictor.predict_risk(&below) < 75.0);
}

#[test]
fn test_floor_then_obesity_family_multiplier_is_capped() {
    let assessment = predictor().assess(&very_high_risk_profile().with_bmi(41.5));

    assert_close(assessment.risk_percentage, 95.0, 1e-9);
    assert_eq!(assessment.risk_level, RiskLevel::High);
}

#[test]
fn test_waist_threshold_depends_on_sex() {
    let predictor = predictor();
    let base = SubjectProfile {
        waist_circumference: Some(100.0),
        ..SubjectProfile::new(50.0, Gender::Male, 170.0, 85.0).with_bmi(29.4)
    };
    let female = SubjectProfile {
        gender: Some(Gender::Female),
        ..base.clone()
    };

    assert!(predictor.predict_risk(&female) > predictor.predict_risk(&base));
}

#[test]
fn test_missing_fields_use_defaults() {
    let predictor = predictor();
    let risk = predictor.predict_risk(&SubjectProfile::default());

    assert!((0.0..1.0).contains(&risk));
}

#[test]
fn test_no_contributing_factors_reported() {
    let predictor = predictor();
    let profile = high_risk_profile().with_bmi(34.3);
    let assessment = predictor.assess(&profile);

    assert!(assessment.contributing_factors.is_empty());
    assert_eq!(assessment.risk_level, RiskLevel::Low);
}
