// ABOUTME: Health prediction orchestrator assembling one analysis report per subject
// ABOUTME: Sequences body metrics, both risk predictors, health score and recommendations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pulse Health Intelligence

//! Health analysis orchestrator
//!
//! [`HealthPredictionSystem`] owns one instance of each stage. All stages hold only
//! constants, so a single system can analyze many profiles concurrently. The clock
//! is injectable so reports can be reproduced exactly in tests.

use crate::body_metrics::derive_metrics;
use crate::cardiovascular_risk::CardiovascularRiskPredictor;
use crate::config::intelligence::{BodyMetricsConfig, IntelligenceConfig};
use crate::diabetes_risk::DiabetesRiskPredictor;
use crate::health_score::HealthScoreCalculator;
use crate::recommendation_engine::RecommendationEngine;
use crate::risk_model::RiskPredictor;
use chrono::{DateTime, Utc};
use pulse_core::errors::AppResult;
use pulse_core::models::{AnalysisReport, RiskPredictions, SubjectProfile};
use rayon::prelude::*;
use tracing::{debug, info};
use uuid::Uuid;

/// Source of report timestamps
pub trait Clock: Send + Sync {
    /// Current instant
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock frozen at one instant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    instant: DateTime<Utc>,
}

impl FixedClock {
    /// Freeze time at `instant`
    #[must_use]
    pub const fn new(instant: DateTime<Utc>) -> Self {
        Self { instant }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.instant
    }
}

/// Complete health analysis pipeline
#[derive(Debug, Clone)]
pub struct HealthPredictionSystem<C: Clock = SystemClock> {
    body_metrics: BodyMetricsConfig,
    cardiovascular: CardiovascularRiskPredictor,
    diabetes: DiabetesRiskPredictor,
    health_score: HealthScoreCalculator,
    recommendations: RecommendationEngine,
    clock: C,
}

impl Default for HealthPredictionSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl HealthPredictionSystem {
    /// Create a system from the global configuration
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(IntelligenceConfig::global())
    }

    /// Create a system from an explicit configuration
    #[must_use]
    pub fn with_config(config: &IntelligenceConfig<true>) -> Self {
        Self {
            body_metrics: config.body_metrics.clone(),
            cardiovascular: CardiovascularRiskPredictor::with_config(
                config.cardiovascular.clone(),
                config.risk_levels.clone(),
            ),
            diabetes: DiabetesRiskPredictor::with_config(
                config.diabetes.clone(),
                config.risk_levels.clone(),
            ),
            health_score: HealthScoreCalculator::with_config(config.health_score.clone()),
            recommendations: RecommendationEngine::with_config(
                config.recommendation_engine.clone(),
            ),
            clock: SystemClock,
        }
    }
}

impl<C: Clock> HealthPredictionSystem<C> {
    /// Replace the timestamp source
    #[must_use]
    pub fn with_clock<D: Clock>(self, clock: D) -> HealthPredictionSystem<D> {
        HealthPredictionSystem {
            body_metrics: self.body_metrics,
            cardiovascular: self.cardiovascular,
            diabetes: self.diabetes,
            health_score: self.health_score,
            recommendations: self.recommendations,
            clock,
        }
    }

    /// Analyze one subject
    ///
    /// The input is not modified; the report carries a copy with `bmi` attached.
    ///
    /// # Errors
    ///
    /// Returns an input error if age, gender, height or weight are missing, if
    /// age, height or weight are not positive, or if a lifestyle tier is out of range
    pub fn analyze(&self, profile: &SubjectProfile) -> AppResult<AnalysisReport> {
        let report_id = Uuid::new_v4();

        let derived_metrics = derive_metrics(profile, &self.body_metrics)?;
        profile.validate_tiers()?;
        debug!(
            %report_id,
            bmi = derived_metrics.bmi,
            bmr = derived_metrics.bmr,
            tdee = derived_metrics.tdee,
            "Derived body metrics"
        );

        let augmented = profile.with_bmi(derived_metrics.bmi);

        let risk_predictions = RiskPredictions {
            cardiovascular: self.cardiovascular.assess(&augmented),
            diabetes: self.diabetes.assess(&augmented),
        };
        debug!(
            %report_id,
            cardiovascular_level = %risk_predictions.cardiovascular.risk_level,
            diabetes_level = %risk_predictions.diabetes.risk_level,
            factors = risk_predictions.cardiovascular.contributing_factors.len(),
            "Assessed risks"
        );

        let health_score = self.health_score.calculate_overall_score(&augmented);
        debug!(
            %report_id,
            category = %health_score.category.name,
            "Scored health dimensions"
        );

        let recommendations = self.recommendations.generate_recommendations(
            &augmented,
            &risk_predictions,
            &health_score,
        );

        info!(
            %report_id,
            cardiovascular_risk = risk_predictions.cardiovascular.risk_percentage,
            diabetes_risk = risk_predictions.diabetes.risk_percentage,
            overall_score = health_score.overall_score,
            recommendations = recommendations.len(),
            "Health analysis complete"
        );

        Ok(AnalysisReport {
            report_id,
            timestamp: self.clock.now(),
            profile: augmented,
            derived_metrics,
            risk_predictions,
            health_score,
            recommendations,
        })
    }

    /// Analyze independent subjects in parallel
    ///
    /// Results are returned in input order; one invalid profile does not affect the others.
    #[must_use]
    pub fn analyze_batch(&self, profiles: &[SubjectProfile]) -> Vec<AppResult<AnalysisReport>> {
        debug!(count = profiles.len(), "Starting batch analysis");
        profiles
            .par_iter()
            .map(|profile| self.analyze(profile))
            .collect()
    }

    /// Analyze profiles that were decoded individually
    ///
    /// Entries that failed to decode keep their error in place, so results line up
    /// with the input positions.
    #[must_use]
    pub fn analyze_decoded_batch(
        &self,
        profiles: Vec<AppResult<SubjectProfile>>,
    ) -> Vec<AppResult<AnalysisReport>> {
        debug!(count = profiles.len(), "Starting batch analysis of decoded profiles");
        profiles
            .into_par_iter()
            .map(|decoded| decoded.and_then(|profile| self.analyze(&profile)))
            .collect()
    }
}
