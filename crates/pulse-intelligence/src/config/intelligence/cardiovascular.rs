// ABOUTME: Cardiovascular risk model configuration: weights, intercept, defaults, overrides
// ABOUTME: Fixed constants of the Framingham-inspired logistic model and its attribution rules
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pulse Health Intelligence

//! Cardiovascular Risk Model Configuration
//!
//! The weights are fixed constants, not fitted at runtime. Environment overrides
//! never touch this module so model outputs stay reproducible across deployments.

use pulse_core::models::Gender;
use serde::{Deserialize, Serialize};

/// Cardiovascular risk model configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardiovascularModelConfig {
    /// Linear model weights
    pub weights: CardiovascularWeights,
    /// Linear model intercept (-12.0)
    pub intercept: f64,
    /// Values used for profile fields that are absent
    pub defaults: CardiovascularDefaults,
    /// Multiplicative corrections applied after the logistic transform
    pub overrides: CardiovascularOverrides,
    /// Heuristic contributing-factor rules
    pub attribution: FactorAttributionConfig,
}

/// Weights of the cardiovascular linear combination
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardiovascularWeights {
    /// Per year of age (uncentered)
    pub age: f64,
    /// Per BMI unit above the reference
    pub bmi: f64,
    /// Per smoking tier
    pub smoking: f64,
    /// Per mmHg above the reference systolic pressure
    pub bp_systolic: f64,
    /// Per mg/dL above the reference cholesterol
    pub cholesterol: f64,
    /// HDL ratio weight; declared by the model but not wired to any input
    pub hdl_ratio: f64,
    /// Per weekly exercise session
    pub exercise: f64,
    /// Family history of heart disease (0/1)
    pub family_history: f64,
    /// Per stress tier
    pub stress: f64,
    /// Male sex (0/1)
    pub gender_male: f64,
}

/// Defaults for absent profile fields
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardiovascularDefaults {
    /// Age in years
    pub age: f64,
    /// Body mass index
    pub bmi: f64,
    /// Smoking tier
    pub smoking: u8,
    /// Systolic blood pressure
    pub blood_pressure_systolic: f64,
    /// Total cholesterol
    pub cholesterol: f64,
    /// Weekly exercise sessions
    pub exercise_frequency: f64,
    /// Family history of heart disease
    pub family_heart_disease: bool,
    /// Stress tier
    pub stress_level: u8,
    /// Sex
    pub gender: Gender,
}

/// Post-sigmoid multiplicative corrections
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardiovascularOverrides {
    /// Smoking tier that counts as heavy smoking
    pub heavy_smoking_tier: u8,
    /// BMI strictly above which heavy smokers get the multiplier
    pub smoking_obesity_bmi: f64,
    /// Multiplier for heavy smokers with severe obesity
    pub smoking_obesity_multiplier: f64,
    /// Systolic pressure strictly above which the marker multiplier applies
    pub severe_systolic: f64,
    /// Cholesterol strictly above which the marker multiplier applies
    pub severe_cholesterol: f64,
    /// Multiplier for severe blood pressure or cholesterol
    pub severe_marker_multiplier: f64,
}

/// Rules for the approximate contributing-factor explanation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FactorAttributionConfig {
    /// BMI strictly above which "High BMI" is reported
    pub bmi_threshold: f64,
    /// Systolic pressure strictly above which "Hypertension" is reported
    pub systolic_threshold: f64,
    /// Age strictly above which "Age" is reported
    pub age_threshold: f64,
    /// Cholesterol strictly above which "High Cholesterol" is reported
    pub cholesterol_threshold: f64,
    /// Scale applied to weighted deviations (percentage points)
    pub impact_scale: f64,
    /// Scale applied to the age term
    pub age_impact_scale: f64,
    /// Maximum number of factors returned
    pub max_factors: usize,
}

impl Default for CardiovascularModelConfig {
    fn default() -> Self {
        Self {
            weights: CardiovascularWeights::default(),
            intercept: -12.0,
            defaults: CardiovascularDefaults::default(),
            overrides: CardiovascularOverrides::default(),
            attribution: FactorAttributionConfig::default(),
        }
    }
}

impl Default for CardiovascularWeights {
    fn default() -> Self {
        Self {
            age: 0.05,
            bmi: 0.08,
            smoking: 0.15,
            bp_systolic: 0.006,
            cholesterol: 0.003,
            hdl_ratio: -0.02,
            exercise: -0.03,
            family_history: 0.10,
            stress: 0.04,
            gender_male: 0.08,
        }
    }
}

impl Default for CardiovascularDefaults {
    fn default() -> Self {
        Self {
            age: 50.0,
            bmi: 25.0,
            smoking: 0,
            blood_pressure_systolic: 120.0,
            cholesterol: 180.0,
            exercise_frequency: 0.0,
            family_heart_disease: false,
            stress_level: 1,
            gender: Gender::Male,
        }
    }
}

impl Default for CardiovascularOverrides {
    fn default() -> Self {
        Self {
            heavy_smoking_tier: 3,
            smoking_obesity_bmi: 35.0,
            smoking_obesity_multiplier: 1.5,
            severe_systolic: 160.0,
            severe_cholesterol: 280.0,
            severe_marker_multiplier: 1.3,
        }
    }
}

impl Default for FactorAttributionConfig {
    fn default() -> Self {
        Self {
            bmi_threshold: 30.0,
            systolic_threshold: 140.0,
            age_threshold: 55.0,
            cholesterol_threshold: 240.0,
            impact_scale: 100.0,
            age_impact_scale: 10.0,
            max_factors: 5,
        }
    }
}
