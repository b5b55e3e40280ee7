// ABOUTME: Shared logistic risk model primitives and the RiskPredictor trait
// ABOUTME: Sigmoid transform plus the default assess pipeline used by both predictors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pulse Health Intelligence

use crate::config::intelligence::RiskLevelThresholds;
use pulse_core::models::{ContributingFactor, RiskAssessment, SubjectProfile};

/// Logistic transform `1 / (1 + e^-z)`, in (0, 1)
///
/// Saturates to 0.0 or 1.0 for extreme inputs instead of producing NaN.
#[must_use]
pub fn logistic(z: f64) -> f64 {
    1.0 / (1.0 + (-z).exp())
}

/// Convert a log-odds value into a risk percentage
#[must_use]
pub fn risk_percentage_from_log_odds(z: f64) -> f64 {
    logistic(z) * 100.0
}

/// Common surface of the condition-specific risk models
pub trait RiskPredictor {
    /// Risk in percent, clamped to [0, 100]
    fn predict_risk(&self, profile: &SubjectProfile) -> f64;

    /// Ranked explanation of the risk; empty when the model has none
    fn contributing_factors(
        &self,
        _profile: &SubjectProfile,
        _risk_score: f64,
    ) -> Vec<ContributingFactor> {
        Vec::new()
    }

    /// Risk band thresholds used to classify the percentage
    fn risk_levels(&self) -> &RiskLevelThresholds;

    /// Predict, classify and explain in one step
    fn assess(&self, profile: &SubjectProfile) -> RiskAssessment {
        let risk_percentage = self.predict_risk(profile);
        RiskAssessment {
            risk_percentage,
            risk_level: self.risk_levels().classify(risk_percentage),
            contributing_factors: self.contributing_factors(profile, risk_percentage),
        }
    }
}
