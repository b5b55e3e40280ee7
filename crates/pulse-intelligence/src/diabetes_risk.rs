// ABOUTME: Type 2 diabetes risk predictor using a weighted logistic model
// ABOUTME: Sex-specific waist thresholds plus diagnostic glucose and obesity overrides
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pulse Health Intelligence

//! Diabetes Risk Predictor
//!
//! Linear combination of BMI, age, family history, abdominal girth above the
//! sex-specific threshold, exercise, diet and fasting glucose, passed through a
//! sigmoid. A diagnostic fasting glucose sets a floor on the risk; severe obesity
//! combined with family history multiplies it up to a cap.

use crate::config::intelligence::diabetes::{REFERENCE_AGE, REFERENCE_DIET_QUALITY};
use crate::config::intelligence::{
    DiabetesDefaults, DiabetesModelConfig, IntelligenceConfig, RiskLevelThresholds,
};
use crate::physiological_constants::{bmi, glucose};
use crate::risk_model::{risk_percentage_from_log_odds, RiskPredictor};
use pulse_core::models::{Gender, SubjectProfile};
use tracing::trace;

/// Profile values as read by the diabetes model, defaults applied
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiabetesFeatures {
    /// Body mass index
    pub bmi: f64,
    /// Age in years
    pub age: f64,
    /// Family history of diabetes
    pub family_diabetes: bool,
    /// Waist circumference (cm)
    pub waist_circumference: f64,
    /// Weekly exercise sessions
    pub exercise_frequency: f64,
    /// Diet tier (1-4)
    pub diet_quality: u8,
    /// Fasting blood glucose (mg/dL)
    pub fasting_blood_sugar: f64,
    /// Sex
    pub gender: Gender,
}

impl DiabetesFeatures {
    /// Resolve every feature from the profile, falling back to the model defaults
    #[must_use]
    pub fn resolve(profile: &SubjectProfile, defaults: &DiabetesDefaults) -> Self {
        Self {
            bmi: profile.bmi.unwrap_or(defaults.bmi),
            age: profile.age.unwrap_or(defaults.age),
            family_diabetes: profile.family_diabetes.unwrap_or(defaults.family_diabetes),
            waist_circumference: profile
                .waist_circumference
                .unwrap_or(defaults.waist_circumference),
            exercise_frequency: profile
                .exercise_frequency
                .unwrap_or(defaults.exercise_frequency),
            diet_quality: profile.diet_quality.unwrap_or(defaults.diet_quality),
            fasting_blood_sugar: profile
                .fasting_blood_sugar
                .unwrap_or(defaults.fasting_blood_sugar),
            gender: profile.gender.unwrap_or(defaults.gender),
        }
    }
}

/// Diabetes risk predictor
#[derive(Debug, Clone)]
pub struct DiabetesRiskPredictor {
    config: DiabetesModelConfig,
    risk_levels: RiskLevelThresholds,
}

impl Default for DiabetesRiskPredictor {
    fn default() -> Self {
        Self::new()
    }
}

impl DiabetesRiskPredictor {
    /// Create a predictor from the global configuration
    #[must_use]
    pub fn new() -> Self {
        let global_config = IntelligenceConfig::global();
        Self {
            config: global_config.diabetes.clone(),
            risk_levels: global_config.risk_levels.clone(),
        }
    }

    /// Create with custom configuration
    #[must_use]
    pub const fn with_config(config: DiabetesModelConfig, risk_levels: RiskLevelThresholds) -> Self {
        Self {
            config,
            risk_levels,
        }
    }

    /// Model configuration in use
    #[must_use]
    pub const fn config(&self) -> &DiabetesModelConfig {
        &self.config
    }

    /// Centimeters of waist above the sex-specific threshold, never negative
    #[must_use]
    pub fn waist_risk(&self, features: &DiabetesFeatures) -> f64 {
        (features.waist_circumference - self.config.waist_threshold(features.gender)).max(0.0)
    }

    /// Log-odds of the linear model before any override
    #[must_use]
    pub fn log_odds(&self, features: &DiabetesFeatures) -> f64 {
        let weights = &self.config.weights;
        let family = if features.family_diabetes { 1.0 } else { 0.0 };

        self.config.intercept
            + weights.bmi * (features.bmi - bmi::REFERENCE_BMI)
            + weights.age * (features.age - REFERENCE_AGE)
            + weights.family_history * family * self.config.family_history_scale
            + weights.waist_circumference * self.waist_risk(features)
            + weights.exercise * features.exercise_frequency
            + weights.diet_quality * (f64::from(features.diet_quality) - REFERENCE_DIET_QUALITY)
            + weights.blood_sugar * (features.fasting_blood_sugar - glucose::REFERENCE_FASTING)
    }

    /// Apply the glucose floor, then the obesity-with-family-history multiplier
    #[must_use]
    pub fn apply_overrides(&self, risk: f64, features: &DiabetesFeatures) -> f64 {
        let overrides = &self.config.overrides;
        let mut risk = risk;

        if features.fasting_blood_sugar >= overrides.diagnostic_blood_sugar {
            risk = risk.max(overrides.diagnostic_risk_floor);
        }
        if features.bmi >= overrides.obesity_bmi && features.family_diabetes {
            risk = (risk * overrides.obesity_family_multiplier).min(overrides.obesity_family_cap);
        }

        risk
    }
}

impl RiskPredictor for DiabetesRiskPredictor {
    fn predict_risk(&self, profile: &SubjectProfile) -> f64 {
        let features = DiabetesFeatures::resolve(profile, &self.config.defaults);
        let z = self.log_odds(&features);
        let base_risk = risk_percentage_from_log_odds(z);
        let risk = self.apply_overrides(base_risk, &features).clamp(0.0, 100.0);

        trace!(z, base_risk, risk, "Diabetes risk computed");
        risk
    }

    fn risk_levels(&self) -> &RiskLevelThresholds {
        &self.risk_levels
    }
}
