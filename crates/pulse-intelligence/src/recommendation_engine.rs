// ABOUTME: Recommendation engine mapping risk and profile signals to advisory actions
// ABOUTME: Independent threshold rules evaluated in fixed order; insertion order is output order
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pulse Health Intelligence

//! Health recommendation engine

use crate::config::intelligence::{IntelligenceConfig, RecommendationEngineConfig};
use pulse_core::constants::recommendation_categories as categories;
use pulse_core::models::{
    HealthScoreReport, Recommendation, RecommendationPriority, RiskPredictions, SubjectProfile,
};

/// Generates prioritized advisory actions
#[derive(Debug, Clone)]
pub struct RecommendationEngine {
    config: RecommendationEngineConfig,
}

impl Default for RecommendationEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl RecommendationEngine {
    /// Create a recommendation engine from the global configuration
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: IntelligenceConfig::global().recommendation_engine.clone(),
        }
    }

    /// Create with custom configuration
    #[must_use]
    pub const fn with_config(config: RecommendationEngineConfig) -> Self {
        Self { config }
    }

    /// Evaluate every rule and collect the triggered recommendations
    ///
    /// Rules are not mutually exclusive and the result is not re-sorted by
    /// priority. The health score is accepted for future rules but no current
    /// rule reads it.
    #[must_use]
    pub fn generate_recommendations(
        &self,
        profile: &SubjectProfile,
        risks: &RiskPredictions,
        _health_score: &HealthScoreReport,
    ) -> Vec<Recommendation> {
        let thresholds = &self.config.thresholds;
        let defaults = &self.config.defaults;
        let messages = &self.config.messages;
        let mut recommendations = Vec::new();

        let mut push = |priority, category: &str, action: &str| {
            recommendations.push(Recommendation {
                priority,
                category: category.to_owned(),
                action: action.to_owned(),
            });
        };

        if risks.cardiovascular.risk_percentage > thresholds.cardiovascular_risk {
            push(
                RecommendationPriority::High,
                categories::CARDIOVASCULAR_HEALTH,
                &messages.cardiovascular,
            );
        }

        if risks.diabetes.risk_percentage > thresholds.diabetes_risk {
            push(
                RecommendationPriority::High,
                categories::DIABETES_PREVENTION,
                &messages.diabetes,
            );
        }

        if profile.bmi.unwrap_or(defaults.bmi) > thresholds.bmi {
            push(
                RecommendationPriority::Medium,
                categories::WEIGHT_MANAGEMENT,
                &messages.weight_management,
            );
        }

        if profile
            .exercise_frequency
            .unwrap_or(defaults.exercise_frequency)
            < thresholds.min_exercise_frequency
        {
            push(
                RecommendationPriority::Medium,
                categories::PHYSICAL_ACTIVITY,
                &messages.physical_activity,
            );
        }

        if profile.smoking.unwrap_or(defaults.smoking) > 0 {
            push(
                RecommendationPriority::Critical,
                categories::SMOKING_CESSATION,
                &messages.smoking_cessation,
            );
        }

        recommendations
    }
}
