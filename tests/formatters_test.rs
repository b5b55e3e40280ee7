// ABOUTME: Integration tests for report formatting and profile input loading
// ABOUTME: Tests the text layout, JSON output, and reading profiles from files
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pulse Health Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::create_test_system;
use pulse_health::errors::{ErrorCode, ErrorResponse};
use pulse_health::formatters::{format_report, format_structured, OutputFormat};
use pulse_health::input::{parse_profiles, read_profiles};
use pulse_health::models::{AnalysisReport, Gender, SubjectProfile};
use pulse_health::samples::{demo_subjects, high_risk_profile};
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_text_report_sections_and_rounding() {
    let report = create_test_system().analyze(&high_risk_profile()).unwrap();
    let text = format_report(&report, OutputFormat::Text).unwrap();

    assert!(text.contains("Age: 55 years"));
    assert!(text.contains("Gender: Male"));
    assert!(text.contains("BMI: 34.3"));
    // 1050 + 1093.75 - 275 + 5
    assert!(text.contains("BMR: 1874 cal/day"));
    assert!(text.contains("OVERALL HEALTH SCORE: 30/100"));
    assert!(text.contains("Category: Critical"));
    assert!(text.contains("- Lifestyle Habits: 0/100"));
    assert!(text.contains("- High BMI: 74.3% impact"));
    assert!(text.contains("[CRITICAL] Smoking Cessation: Quit smoking immediately."));
    assert!(text.contains("Generated: 2025-01-15 09:30:00 UTC"));

    let cardio = text.find("CARDIOVASCULAR RISK").unwrap();
    let diabetes = text.find("DIABETES RISK").unwrap();
    let advice = text.find("RECOMMENDATIONS").unwrap();
    assert!(cardio < diabetes && diabetes < advice);
}

#[test]
fn test_json_report_round_trips() {
    let report = create_test_system().analyze(&high_risk_profile()).unwrap();
    let json = format_report(&report, OutputFormat::Json).unwrap();

    let parsed: AnalysisReport = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, report);
}

#[test]
fn test_structured_output_of_error_envelope() {
    let error = create_test_system()
        .analyze(&SubjectProfile::default())
        .unwrap_err();
    let json = format_structured(&ErrorResponse::from(error), OutputFormat::Json).unwrap();

    assert!(json.contains("MISSING_REQUIRED_FIELD"));
}

#[test]
fn test_demo_subjects_analyze_cleanly() {
    let system = create_test_system();

    for subject in demo_subjects() {
        let report = system.analyze(&subject.profile).unwrap();
        assert!(!format_report(&report, OutputFormat::Text).unwrap().is_empty());
    }
}

#[test]
fn test_parse_profiles_accepts_aliases_and_arrays() {
    let profiles = parse_profiles(
        r#"[
            {"age": 35, "gender": "male", "height": 175, "weight": 75, "activity_level": 1.55},
            {"age": 48, "gender": "female", "height_cm": 162, "weight_kg": 70}
        ]"#,
    )
    .unwrap();
    let profiles: Vec<SubjectProfile> = profiles.into_iter().map(Result::unwrap).collect();

    assert_eq!(profiles.len(), 2);
    assert_eq!(profiles[0].height_cm, Some(175.0));
    assert_eq!(profiles[0].activity_multiplier, Some(1.55));
    assert_eq!(profiles[1].gender, Some(Gender::Female));
}

#[test]
fn test_parse_profiles_rejects_wrong_types() {
    let profiles = parse_profiles(r#"{"age": "old"}"#).unwrap();

    assert_eq!(profiles.len(), 1);
    assert_eq!(
        profiles[0].as_ref().unwrap_err().code,
        ErrorCode::InvalidFormat
    );
}

#[test]
fn test_parse_profiles_accepts_fractional_age() {
    let profiles =
        parse_profiles(r#"{"age": 45.5, "gender": "male", "height": 180, "weight": 82}"#).unwrap();
    let profile = profiles.into_iter().next().unwrap().unwrap();

    assert_eq!(profile.age, Some(45.5));
    let report = create_test_system().analyze(&profile).unwrap();
    assert!(report.derived_metrics.bmr > 0.0);
}

#[test]
fn test_fractional_tier_is_a_format_error() {
    let profiles = parse_profiles(r#"{"age": 40, "gender": "male", "stress_level": 2.5}"#).unwrap();

    assert_eq!(
        profiles[0].as_ref().unwrap_err().code,
        ErrorCode::InvalidFormat
    );
}

#[test]
fn test_mixed_batch_keeps_valid_profiles() {
    let profiles = parse_profiles(
        r#"[
            {"age": 35, "gender": "male", "height": 175, "weight": 75},
            {"age": "x"},
            {"age": 52, "gender": "female", "height": 160, "weight": 64, "smoking": 9}
        ]"#,
    )
    .unwrap();

    let results = create_test_system().analyze_decoded_batch(profiles);

    assert_eq!(results.len(), 3);
    assert_eq!(results[0].as_ref().unwrap().profile.age, Some(35.0));
    assert_eq!(
        results[1].as_ref().unwrap_err().code,
        ErrorCode::InvalidFormat
    );
    assert_eq!(
        results[2].as_ref().unwrap_err().code,
        ErrorCode::ValueOutOfRange
    );
}

#[test]
fn test_read_profiles_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{"age": 61, "gender": "female", "height": 158, "weight": 66, "smoking": 2}}"#
    )
    .unwrap();

    let profiles = read_profiles(file.path().to_str().unwrap()).unwrap();
    assert_eq!(profiles.len(), 1);
    let profile = profiles[0].as_ref().unwrap();
    assert_eq!(profile.smoking, Some(2));

    let report = create_test_system().analyze(profile).unwrap();
    assert!(report
        .recommendations
        .iter()
        .any(|r| r.category == "Smoking Cessation"));
}

#[test]
fn test_read_profiles_missing_file_is_io_error() {
    let error = read_profiles("/nonexistent/pulse/profile.json").unwrap_err();
    assert_eq!(error.code, ErrorCode::IoError);
}
