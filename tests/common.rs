// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides quiet logging, sample profiles, and a deterministic analysis system
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pulse Health Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::module_name_repetitions
)]
//! Shared test utilities for `pulse_health`
//!
//! This module provides common test setup functions to reduce duplication
//! across integration tests.

use chrono::{DateTime, TimeZone, Utc};
use pulse_health::models::{Gender, SubjectProfile};
use pulse_health::{FixedClock, HealthPredictionSystem, IntelligenceConfig};
use std::env;
use std::sync::Once;
use tracing::Level;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // TEST_LOG controls the level, WARN keeps test output quiet
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            _ => Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Instant every deterministic test report is stamped with
pub fn fixed_instant() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 15, 9, 30, 0).unwrap()
}

/// Analysis system on default configuration with a frozen clock
pub fn create_test_system() -> HealthPredictionSystem<FixedClock> {
    init_test_logging();
    HealthPredictionSystem::with_config(&IntelligenceConfig::<true>::default())
        .with_clock(FixedClock::new(fixed_instant()))
}

/// Profile with only the four required fields
pub fn minimal_profile() -> SubjectProfile {
    SubjectProfile::new(40.0, Gender::Female, 165.0, 60.0)
}

/// Elderly obese heavy smoker with diabetic fasting glucose and family history
pub fn very_high_risk_profile() -> SubjectProfile {
    SubjectProfile {
        waist_circumference: Some(130.0),
        exercise_frequency: Some(0.0),
        smoking: Some(3),
        blood_pressure_systolic: Some(190.0),
        cholesterol: Some(320.0),
        fasting_blood_sugar: Some(130.0),
        diet_quality: Some(1),
        stress_level: Some(5),
        family_heart_disease: Some(true),
        family_diabetes: Some(true),
        ..SubjectProfile::new(75.0, Gender::Male, 170.0, 120.0)
    }
}

/// Assert two floats agree within `tolerance`
pub fn assert_close(actual: f64, expected: f64, tolerance: f64) {
    assert!(
        (actual - expected).abs() <= tolerance,
        "expected {expected} +/- {tolerance}, got {actual}"
    );
}
