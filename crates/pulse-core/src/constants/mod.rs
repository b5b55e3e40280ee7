// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Service names, environment keys, and report field names for the Pulse engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pulse Health Intelligence

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single large list.

/// Service names used in structured logging
pub mod service_names {
    /// Analysis engine
    pub const PULSE_ENGINE: &str = "pulse-engine";
    /// Command-line driver
    pub const PULSE_CLI: &str = "pulse-cli";
}

/// Environment variables recognised by the configuration loader
pub mod env_config {
    /// Upper bound (exclusive) of the `Low` risk band
    pub const RISK_LOW_MAX: &str = "PULSE_RISK_LOW_MAX";
    /// Upper bound (exclusive) of the `Low-Moderate` risk band
    pub const RISK_LOW_MODERATE_MAX: &str = "PULSE_RISK_LOW_MODERATE_MAX";
    /// Upper bound (exclusive) of the `Moderate` risk band
    pub const RISK_MODERATE_MAX: &str = "PULSE_RISK_MODERATE_MAX";
    /// Upper bound (exclusive) of the `Moderate-High` risk band
    pub const RISK_MODERATE_HIGH_MAX: &str = "PULSE_RISK_MODERATE_HIGH_MAX";
    /// Cardiovascular risk above which a cardiology referral is advised
    pub const RECOMMENDATION_CV_RISK: &str = "PULSE_RECOMMENDATION_CV_RISK";
    /// Diabetes risk above which an endocrinology referral is advised
    pub const RECOMMENDATION_DIABETES_RISK: &str = "PULSE_RECOMMENDATION_DIABETES_RISK";
    /// BMI above which weight management is advised
    pub const RECOMMENDATION_BMI: &str = "PULSE_RECOMMENDATION_BMI";
    /// Weekly sessions below which more activity is advised
    pub const RECOMMENDATION_MIN_EXERCISE: &str = "PULSE_RECOMMENDATION_MIN_EXERCISE";
    /// Activity multiplier used when a profile does not supply one
    pub const DEFAULT_ACTIVITY_MULTIPLIER: &str = "PULSE_DEFAULT_ACTIVITY_MULTIPLIER";
}

/// Names of the health score dimensions as they appear in reports
pub mod dimensions {
    /// Physical fitness dimension
    pub const PHYSICAL_FITNESS: &str = "physical_fitness";
    /// Metabolic health dimension
    pub const METABOLIC_HEALTH: &str = "metabolic_health";
    /// Mental wellbeing dimension
    pub const MENTAL_WELLBEING: &str = "mental_wellbeing";
    /// Lifestyle habits dimension
    pub const LIFESTYLE_HABITS: &str = "lifestyle_habits";
    /// Preventive care dimension
    pub const PREVENTIVE_CARE: &str = "preventive_care";
}

/// Names of cardiovascular contributing factors
pub mod factor_names {
    /// Tobacco use
    pub const SMOKING: &str = "Smoking";
    /// BMI above the obesity threshold
    pub const HIGH_BMI: &str = "High BMI";
    /// Elevated systolic blood pressure
    pub const HYPERTENSION: &str = "Hypertension";
    /// Age above the attribution threshold
    pub const AGE: &str = "Age";
    /// Elevated total cholesterol
    pub const HIGH_CHOLESTEROL: &str = "High Cholesterol";
}

/// Categories of advisory recommendations
pub mod recommendation_categories {
    /// Elevated cardiovascular risk
    pub const CARDIOVASCULAR_HEALTH: &str = "Cardiovascular Health";
    /// Elevated diabetes risk
    pub const DIABETES_PREVENTION: &str = "Diabetes Prevention";
    /// Obesity
    pub const WEIGHT_MANAGEMENT: &str = "Weight Management";
    /// Insufficient exercise
    pub const PHYSICAL_ACTIVITY: &str = "Physical Activity";
    /// Tobacco use
    pub const SMOKING_CESSATION: &str = "Smoking Cessation";
}
