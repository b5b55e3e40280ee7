// ABOUTME: Recommendation engine configuration for advisory actions
// ABOUTME: Configures trigger thresholds, input defaults, and message templates for recommendations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pulse Health Intelligence

//! Recommendation Engine Configuration
//!
//! Thresholds that trigger each advisory rule and the texts attached to them.

use serde::{Deserialize, Serialize};

/// Recommendation Engine Configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecommendationEngineConfig {
    /// Threshold values for triggering recommendations
    pub thresholds: RecommendationThresholds,
    /// Values used for profile fields that are absent
    pub defaults: RecommendationDefaults,
    /// Template messages for recommendations
    pub messages: RecommendationMessages,
}

/// Thresholds for triggering recommendations; all comparisons are strict
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationThresholds {
    /// Cardiovascular risk percentage above which a HIGH action is issued
    pub cardiovascular_risk: f64,
    /// Diabetes risk percentage above which a HIGH action is issued
    pub diabetes_risk: f64,
    /// BMI above which weight management is advised
    pub bmi: f64,
    /// Weekly sessions below which more activity is advised
    pub min_exercise_frequency: f64,
}

/// Defaults for absent profile fields
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationDefaults {
    /// Body mass index
    pub bmi: f64,
    /// Weekly exercise sessions
    pub exercise_frequency: f64,
    /// Smoking tier
    pub smoking: u8,
}

/// Template messages for each recommendation rule
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationMessages {
    /// Elevated cardiovascular risk
    pub cardiovascular: String,
    /// Elevated diabetes risk
    pub diabetes: String,
    /// Obesity
    pub weight_management: String,
    /// Insufficient exercise
    pub physical_activity: String,
    /// Any smoking
    pub smoking_cessation: String,
}

impl Default for RecommendationThresholds {
    fn default() -> Self {
        Self {
            cardiovascular_risk: 50.0,
            diabetes_risk: 50.0,
            bmi: 30.0,
            min_exercise_frequency: 3.0,
        }
    }
}

impl Default for RecommendationDefaults {
    fn default() -> Self {
        Self {
            bmi: 25.0,
            exercise_frequency: 0.0,
            smoking: 0,
        }
    }
}

impl Default for RecommendationMessages {
    fn default() -> Self {
        Self {
            cardiovascular: "Immediate consultation with cardiologist recommended. \
                             Start cardiac risk reduction program."
                .to_owned(),
            diabetes: "High diabetes risk detected. Consult endocrinologist. \
                       Implement diabetes prevention program."
                .to_owned(),
            weight_management: "Focus on gradual weight loss through calorie deficit \
                                and increased physical activity."
                .into(),
            physical_activity:
                "Increase exercise to at least 150 minutes of moderate activity per week.".into(),
            smoking_cessation: "Quit smoking immediately. Seek professional cessation program."
                .into(),
        }
    }
}
