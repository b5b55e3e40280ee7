// ABOUTME: Intelligence module configuration for health risk prediction and scoring
// ABOUTME: Orchestrates domain-specific configs and provides unified validation and loading
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pulse Health Intelligence

//! Intelligence Configuration Module
//!
//! Provides type-safe configuration for every stage of a health analysis.
//!
//! # Module Structure
//!
//! - `body_metrics` - BMR coefficients and the default activity multiplier
//! - `cardiovascular` - Cardiovascular model weights, defaults, overrides and attribution
//! - `diabetes` - Diabetes model weights, defaults and overrides
//! - `health_score` - Dimension weights, category cut-offs and scoring defaults
//! - `risk_levels` - Risk band thresholds
//! - `recommendation` - Recommendation triggers and messages
//!
//! Model weights and intercepts are fixed. Environment overrides only reach the
//! presentation and advisory thresholds.

pub mod body_metrics;
pub mod cardiovascular;
pub mod diabetes;
pub mod error;
pub mod health_score;
pub mod recommendation;
pub mod risk_levels;

pub use body_metrics::{BmrConfig, BodyMetricsConfig};
pub use cardiovascular::{
    CardiovascularDefaults, CardiovascularModelConfig, CardiovascularOverrides,
    CardiovascularWeights, FactorAttributionConfig,
};
pub use diabetes::{DiabetesDefaults, DiabetesModelConfig, DiabetesOverrides, DiabetesWeights};
pub use error::ConfigError;
pub use health_score::{CategoryThresholds, DimensionWeights, HealthScoreConfig, ScoringDefaults};
pub use recommendation::{
    RecommendationDefaults, RecommendationEngineConfig, RecommendationMessages,
    RecommendationThresholds,
};
pub use risk_levels::RiskLevelThresholds;

use pulse_core::constants::env_config;
use serde::{Deserialize, Serialize};
use std::env;
use std::marker::PhantomData;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::warn;

/// Global configuration singleton
static INTELLIGENCE_CONFIG: OnceLock<IntelligenceConfig<true>> = OnceLock::new();

/// Main intelligence configuration container
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntelligenceConfig<const VALIDATED: bool = false> {
    /// Configuration for BMI, BMR and TDEE derivation
    pub body_metrics: BodyMetricsConfig,
    /// Configuration for the cardiovascular risk model
    pub cardiovascular: CardiovascularModelConfig,
    /// Configuration for the diabetes risk model
    pub diabetes: DiabetesModelConfig,
    /// Configuration for the health score aggregation
    pub health_score: HealthScoreConfig,
    /// Risk band thresholds shared by both predictors
    pub risk_levels: RiskLevelThresholds,
    /// Configuration for the recommendation engine
    pub recommendation_engine: RecommendationEngineConfig,
    #[serde(skip)]
    _phantom: PhantomData<()>,
}

impl IntelligenceConfig<true> {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        INTELLIGENCE_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load intelligence config: {e}, using defaults");
                Self::default()
            })
        })
    }

    /// Load configuration from environment
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns the first violated constraint
    pub fn validate(&self) -> Result<(), ConfigError> {
        let weight_sum = self.health_score.weights.total();
        if (weight_sum - 1.0).abs() > 0.01 {
            return Err(ConfigError::InvalidWeights(
                "Health score dimension weights must sum to 1.0",
            ));
        }

        self.health_score.categories.validate()?;
        self.risk_levels.validate()?;

        let multiplier = self.body_metrics.default_activity_multiplier;
        if !(1.0..=2.5).contains(&multiplier) {
            return Err(ConfigError::ValueOutOfRange(
                "Default activity multiplier must be between 1.0 and 2.5",
            ));
        }

        if self.body_metrics.bmr.msj_weight_coef <= 0.0
            || self.body_metrics.bmr.msj_height_coef <= 0.0
        {
            return Err(ConfigError::ValueOutOfRange(
                "BMR weight and height coefficients must be positive",
            ));
        }

        let thresholds = &self.recommendation_engine.thresholds;
        if !(0.0..=100.0).contains(&thresholds.cardiovascular_risk)
            || !(0.0..=100.0).contains(&thresholds.diabetes_risk)
        {
            return Err(ConfigError::ValueOutOfRange(
                "Recommendation risk thresholds must lie within 0-100",
            ));
        }
        if thresholds.bmi <= 0.0 || thresholds.min_exercise_frequency < 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "Recommendation BMI threshold must be positive and exercise threshold non-negative",
            ));
        }

        if self.cardiovascular.attribution.max_factors == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "At least one contributing factor must be reported",
            ));
        }

        Ok(())
    }

    /// Helper function to parse and apply an environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .trim()
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        }
        Ok(())
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        // Risk bands
        Self::apply_env_var(env_config::RISK_LOW_MAX, &mut self.risk_levels.low_max)?;
        Self::apply_env_var(
            env_config::RISK_LOW_MODERATE_MAX,
            &mut self.risk_levels.low_moderate_max,
        )?;
        Self::apply_env_var(
            env_config::RISK_MODERATE_MAX,
            &mut self.risk_levels.moderate_max,
        )?;
        Self::apply_env_var(
            env_config::RISK_MODERATE_HIGH_MAX,
            &mut self.risk_levels.moderate_high_max,
        )?;

        // Recommendation triggers
        let thresholds = &mut self.recommendation_engine.thresholds;
        Self::apply_env_var(
            env_config::RECOMMENDATION_CV_RISK,
            &mut thresholds.cardiovascular_risk,
        )?;
        Self::apply_env_var(
            env_config::RECOMMENDATION_DIABETES_RISK,
            &mut thresholds.diabetes_risk,
        )?;
        Self::apply_env_var(env_config::RECOMMENDATION_BMI, &mut thresholds.bmi)?;
        Self::apply_env_var(
            env_config::RECOMMENDATION_MIN_EXERCISE,
            &mut thresholds.min_exercise_frequency,
        )?;

        Self::apply_env_var(
            env_config::DEFAULT_ACTIVITY_MULTIPLIER,
            &mut self.body_metrics.default_activity_multiplier,
        )?;

        Ok(self)
    }
}

impl Default for IntelligenceConfig<true> {
    fn default() -> Self {
        Self {
            body_metrics: BodyMetricsConfig::default(),
            cardiovascular: CardiovascularModelConfig::default(),
            diabetes: DiabetesModelConfig::default(),
            health_score: HealthScoreConfig::default(),
            risk_levels: RiskLevelThresholds::default(),
            recommendation_engine: RecommendationEngineConfig::default(),
            _phantom: PhantomData,
        }
    }
}
