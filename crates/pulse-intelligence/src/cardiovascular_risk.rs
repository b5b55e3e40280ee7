// ABOUTME: Ten-year cardiovascular risk predictor using a weighted logistic model
// ABOUTME: Applies heavy-smoker and severe-marker overrides and ranks contributing factors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pulse Health Intelligence

//! Cardiovascular Risk Predictor
//!
//! Framingham-inspired linear combination of age, BMI, smoking, blood pressure,
//! cholesterol, exercise, family history, stress and sex, passed through a sigmoid.
//! Two multiplicative overrides then raise the risk for heavy smokers with severe
//! obesity and for severe blood pressure or cholesterol readings.
//!
//! The contributing-factor list is a heuristic explanation layer. It does not
//! decompose the log-odds and its impacts do not sum to the risk.

use crate::config::intelligence::{
    CardiovascularDefaults, CardiovascularModelConfig, IntelligenceConfig, RiskLevelThresholds,
};
use crate::physiological_constants::{bmi, blood_pressure, cholesterol};
use crate::risk_model::{risk_percentage_from_log_odds, RiskPredictor};
use pulse_core::constants::factor_names;
use pulse_core::models::{ContributingFactor, Gender, SubjectProfile};
use tracing::trace;

/// Profile values as read by the cardiovascular model, defaults applied
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardiovascularFeatures {
    /// Age in years
    pub age: f64,
    /// Body mass index
    pub bmi: f64,
    /// Smoking tier (0-3)
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

impl CardiovascularFeatures {
    /// Resolve every feature from the profile, falling back to the model defaults
    #[must_use]
    pub fn resolve(profile: &SubjectProfile, defaults: &CardiovascularDefaults) -> Self {
        Self {
            age: profile.age.unwrap_or(defaults.age),
            bmi: profile.bmi.unwrap_or(defaults.bmi),
            smoking: profile.smoking.unwrap_or(defaults.smoking),
            blood_pressure_systolic: profile
                .blood_pressure_systolic
                .unwrap_or(defaults.blood_pressure_systolic),
            cholesterol: profile.cholesterol.unwrap_or(defaults.cholesterol),
            exercise_frequency: profile
                .exercise_frequency
                .unwrap_or(defaults.exercise_frequency),
            family_heart_disease: profile
                .family_heart_disease
                .unwrap_or(defaults.family_heart_disease),
            stress_level: profile.stress_level.unwrap_or(defaults.stress_level),
            gender: profile.gender.unwrap_or(defaults.gender),
        }
    }
}

/// Cardiovascular risk predictor
///
/// Holds only constants, so one instance can serve concurrent analyses.
#[derive(Debug, Clone)]
pub struct CardiovascularRiskPredictor {
    config: CardiovascularModelConfig,
    risk_levels: RiskLevelThresholds,
}

impl Default for CardiovascularRiskPredictor {
    fn default() -> Self {
        Self::new()
    }
}

impl CardiovascularRiskPredictor {
    /// Create a predictor from the global configuration
    #[must_use]
    pub fn new() -> Self {
        let global_config = IntelligenceConfig::global();
        Self {
            config: global_config.cardiovascular.clone(),
            risk_levels: global_config.risk_levels.clone(),
        }
    }

    /// Create with custom configuration
    #[must_use]
    pub const fn with_config(
        config: CardiovascularModelConfig,
        risk_levels: RiskLevelThresholds,
    ) -> Self {
        Self {
            config,
            risk_levels,
        }
    }

    /// Model configuration in use
    #[must_use]
    pub const fn config(&self) -> &CardiovascularModelConfig {
        &self.config
    }

    /// Log-odds of the linear model before any override
    #[must_use]
    pub fn log_odds(&self, features: &CardiovascularFeatures) -> f64 {
        let weights = &self.config.weights;

        self.config.intercept
            + weights.age * features.age
            + weights.bmi * (features.bmi - bmi::REFERENCE_BMI)
            + weights.smoking * f64::from(features.smoking)
            + weights.bp_systolic
                * (features.blood_pressure_systolic - blood_pressure::NORMAL_SYSTOLIC)
            + weights.cholesterol * (features.cholesterol - cholesterol::DESIRABLE_MAX)
            + weights.exercise * features.exercise_frequency
            + weights.family_history * indicator(features.family_heart_disease)
            + weights.stress * f64::from(features.stress_level)
            + weights.gender_male * indicator(features.gender.is_male())
    }

    /// Apply the post-sigmoid overrides in order, each capped at 100
    #[must_use]
    pub fn apply_overrides(&self, risk: f64, features: &CardiovascularFeatures) -> f64 {
        let overrides = &self.config.overrides;
        let mut risk = risk;

        if features.smoking == overrides.heavy_smoking_tier
            && features.bmi > overrides.smoking_obesity_bmi
        {
            risk = (risk * overrides.smoking_obesity_multiplier).min(100.0);
        }

        if features.blood_pressure_systolic > overrides.severe_systolic
            || features.cholesterol > overrides.severe_cholesterol
        {
            risk = (risk * overrides.severe_marker_multiplier).min(100.0);
        }

        risk
    }

    fn factor_impacts(&self, features: &CardiovascularFeatures) -> Vec<ContributingFactor> {
        let weights = &self.config.weights;
        let rules = &self.config.attribution;
        let mut factors = Vec::with_capacity(5);

        if features.smoking > 0 {
            factors.push(ContributingFactor::new(
                factor_names::SMOKING,
                f64::from(features.smoking) * weights.smoking * rules.impact_scale,
            ));
        }
        if features.bmi > rules.bmi_threshold {
            factors.push(ContributingFactor::new(
                factor_names::HIGH_BMI,
                (features.bmi - bmi::REFERENCE_BMI) * weights.bmi * rules.impact_scale,
            ));
        }
        if features.blood_pressure_systolic > rules.systolic_threshold {
            factors.push(ContributingFactor::new(
                factor_names::HYPERTENSION,
                (features.blood_pressure_systolic - blood_pressure::NORMAL_SYSTOLIC)
                    * weights.bp_systolic
                    * rules.impact_scale,
            ));
        }
        if features.age > rules.age_threshold {
            factors.push(ContributingFactor::new(
                factor_names::AGE,
                features.age * weights.age * rules.age_impact_scale,
            ));
        }
        if features.cholesterol > rules.cholesterol_threshold {
            factors.push(ContributingFactor::new(
                factor_names::HIGH_CHOLESTEROL,
                (features.cholesterol - cholesterol::DESIRABLE_MAX)
                    * weights.cholesterol
                    * rules.impact_scale,
            ));
        }

        factors
    }
}

impl RiskPredictor for CardiovascularRiskPredictor {
    fn predict_risk(&self, profile: &SubjectProfile) -> f64 {
        let features = CardiovascularFeatures::resolve(profile, &self.config.defaults);
        let z = self.log_odds(&features);
        let base_risk = risk_percentage_from_log_odds(z);
        let risk = self.apply_overrides(base_risk, &features).clamp(0.0, 100.0);

        trace!(z, base_risk, risk, "Cardiovascular risk computed");
        risk
    }

    /// Heuristic attribution, independent of the log-odds
    ///
    /// Impacts are ranked by magnitude (ties keep rule order), truncated and
    /// reported as absolute values.
    fn contributing_factors(
        &self,
        profile: &SubjectProfile,
        _risk_score: f64,
    ) -> Vec<ContributingFactor> {
        let features = CardiovascularFeatures::resolve(profile, &self.config.defaults);
        let mut factors = self.factor_impacts(&features);

        factors.sort_by(|a, b| b.impact.abs().total_cmp(&a.impact.abs()));
        factors.truncate(self.config.attribution.max_factors);
        for factor in &mut factors {
            factor.impact = factor.impact.abs();
        }
        factors
    }

    fn risk_levels(&self) -> &RiskLevelThresholds {
        &self.risk_levels
    }
}

const fn indicator(flag: bool) -> f64 {
    if flag {
        1.0
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::intelligence::CardiovascularModelConfig;

    fn predictor() -> CardiovascularRiskPredictor {
        CardiovascularRiskPredictor::with_config(
            CardiovascularModelConfig::default(),
            RiskLevelThresholds::default(),
        )
    }

    #[test]
    fn test_empty_profile_uses_documented_defaults() {
        let features = CardiovascularFeatures::resolve(
            &SubjectProfile::default(),
            &CardiovascularDefaults::default(),
        );

        assert!((features.age - 50.0).abs() < f64::EPSILON);
        assert!((features.bmi - 25.0).abs() < f64::EPSILON);
        assert_eq!(features.smoking, 0);
        assert!((features.cholesterol - 180.0).abs() < f64::EPSILON);
        assert_eq!(features.stress_level, 1);
        assert_eq!(features.gender, Gender::Male);
    }

    #[test]
    fn test_default_log_odds_matches_hand_computation() {
        let predictor = predictor();
        let features = CardiovascularFeatures::resolve(
            &SubjectProfile::default(),
            &predictor.config().defaults,
        );

        // -12 + 0.05*50 + 0.003*(180-200) + 0.04*1 + 0.08*1
        let expected = -12.0 + 2.5 - 0.06 + 0.04 + 0.08;
        assert!((predictor.log_odds(&features) - expected).abs() < 1e-9);
    }

    #[test]
    fn test_overrides_compound_and_cap_at_100() {
        let predictor = predictor();
        let features = CardiovascularFeatures {
            smoking: 3,
            bmi: 36.0,
            blood_pressure_systolic: 170.0,
            ..CardiovascularFeatures::resolve(
                &SubjectProfile::default(),
                &predictor.config().defaults,
            )
        };

        assert!((predictor.apply_overrides(10.0, &features) - 19.5).abs() < 1e-9);
        assert!((predictor.apply_overrides(80.0, &features) - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_factors_ranked_by_impact_and_absolute() {
        let predictor = predictor();
        let profile = SubjectProfile {
            age: Some(60.0),
            smoking: Some(1),
            blood_pressure_systolic: Some(180.0),
            ..SubjectProfile::default()
        };

        let factors = predictor.contributing_factors(&profile, 0.0);
        let names: Vec<&str> = factors.iter().map(|f| f.name.as_str()).collect();

        // Hypertension 36.0, Age 30.0, Smoking 15.0
        assert_eq!(
            names,
            vec![
                factor_names::HYPERTENSION,
                factor_names::AGE,
                factor_names::SMOKING
            ]
        );
        assert!(factors.iter().all(|f| f.impact >= 0.0));
    }
}
