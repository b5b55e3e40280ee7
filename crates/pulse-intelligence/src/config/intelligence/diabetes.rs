// ABOUTME: Diabetes risk model configuration: weights, intercept, defaults, and override rules
// ABOUTME: Fixed constants of the type 2 diabetes logistic model
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pulse Health Intelligence

//! Diabetes Risk Model Configuration

use crate::physiological_constants::waist;
use pulse_core::models::Gender;
use serde::{Deserialize, Serialize};

/// Diabetes risk model configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiabetesModelConfig {
    /// Linear model weights
    pub weights: DiabetesWeights,
    /// Linear model intercept (-15.0)
    pub intercept: f64,
    /// Scale applied to the family history indicator (5)
    pub family_history_scale: f64,
    /// Waist circumference above which abdominal risk accrues (male)
    pub waist_threshold_male: f64,
    /// Waist circumference above which abdominal risk accrues (female)
    pub waist_threshold_female: f64,
    /// Values used for profile fields that are absent
    pub defaults: DiabetesDefaults,
    /// Corrections applied after the logistic transform
    pub overrides: DiabetesOverrides,
}

/// Weights of the diabetes linear combination
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiabetesWeights {
    /// Per BMI unit above the reference
    pub bmi: f64,
    /// Per year above the reference age
    pub age: f64,
    /// Family history of diabetes (scaled indicator)
    pub family_history: f64,
    /// Per cm of waist above the sex-specific threshold
    pub waist_circumference: f64,
    /// Per weekly exercise session
    pub exercise: f64,
    /// Per diet tier above the reference
    pub diet_quality: f64,
    /// Per mg/dL of fasting glucose above the reference
    pub blood_sugar: f64,
}

/// Defaults for absent profile fields
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiabetesDefaults {
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
    /// Diet tier
    pub diet_quality: u8,
    /// Fasting blood glucose
    pub fasting_blood_sugar: f64,
    /// Sex
    pub gender: Gender,
}

/// Post-sigmoid corrections
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiabetesOverrides {
    /// Fasting glucose at or above which the risk floor applies
    pub diagnostic_blood_sugar: f64,
    /// Minimum risk for diagnostic glucose levels
    pub diagnostic_risk_floor: f64,
    /// BMI at or above which the family-history multiplier applies
    pub obesity_bmi: f64,
    /// Multiplier for severe obesity with family history
    pub obesity_family_multiplier: f64,
    /// Cap on the multiplied risk
    pub obesity_family_cap: f64,
}

/// Reference age used to center the diabetes model
pub const REFERENCE_AGE: f64 = 40.0;

/// Reference diet tier used to center the diabetes model
pub const REFERENCE_DIET_QUALITY: f64 = 2.0;

impl Default for DiabetesModelConfig {
    fn default() -> Self {
        Self {
            weights: DiabetesWeights::default(),
            intercept: -15.0,
            family_history_scale: 5.0,
            waist_threshold_male: waist::MALE_THRESHOLD,
            waist_threshold_female: waist::FEMALE_THRESHOLD,
            defaults: DiabetesDefaults::default(),
            overrides: DiabetesOverrides::default(),
        }
    }
}

impl Default for DiabetesWeights {
    fn default() -> Self {
        Self {
            bmi: 0.12,
            age: 0.04,
            family_history: 0.20,
            waist_circumference: 0.05,
            exercise: -0.08,
            diet_quality: -0.06,
            blood_sugar: 0.02,
        }
    }
}

impl Default for DiabetesDefaults {
    fn default() -> Self {
        Self {
            bmi: 25.0,
            age: 50.0,
            family_diabetes: false,
            waist_circumference: 80.0,
            exercise_frequency: 0.0,
            diet_quality: 2,
            fasting_blood_sugar: 90.0,
            gender: Gender::Male,
        }
    }
}

impl Default for DiabetesOverrides {
    fn default() -> Self {
        Self {
            diagnostic_blood_sugar: 126.0,
            diagnostic_risk_floor: 75.0,
            obesity_bmi: 35.0,
            obesity_family_multiplier: 1.4,
            obesity_family_cap: 95.0,
        }
    }
}

impl DiabetesModelConfig {
    /// Abdominal obesity threshold for the given sex
    #[must_use]
    pub const fn waist_threshold(&self, gender: Gender) -> f64 {
        match gender {
            Gender::Male => self.waist_threshold_male,
            Gender::Female => self.waist_threshold_female,
        }
    }
}
