// ABOUTME: Health intelligence engine for risk prediction and wellness scoring
// ABOUTME: Body metrics, logistic risk models, health score, recommendations, and orchestration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pulse Health Intelligence

#![deny(unsafe_code)]

//! # Pulse Intelligence
//!
//! Stateless analysis engine turning a [`SubjectProfile`](pulse_core::models::SubjectProfile)
//! into an [`AnalysisReport`](pulse_core::models::AnalysisReport).
//!
//! ## Modules
//!
//! - **body_metrics**: BMI, BMR, TDEE, body fat and normalization helpers
//! - **cardiovascular_risk** / **diabetes_risk**: logistic risk models with override rules
//! - **health_score**: five-dimension weighted wellness score
//! - **recommendation_engine**: threshold-driven advisory actions
//! - **analyzer**: the [`HealthPredictionSystem`] pipeline
//! - **config**: model constants, thresholds, and environment overrides

/// Analysis pipeline and clocks
pub mod analyzer;

/// Anthropometric and energy metric derivation
pub mod body_metrics;

/// Ten-year cardiovascular risk model
pub mod cardiovascular_risk;

/// Intelligence configuration
pub mod config;

/// Type 2 diabetes risk model
pub mod diabetes_risk;

/// Composite health score
pub mod health_score;

/// Clinical reference values and published formula coefficients
pub mod physiological_constants;

/// Advisory recommendation rules
pub mod recommendation_engine;

/// Logistic transform and the shared predictor trait
pub mod risk_model;

pub use analyzer::{Clock, FixedClock, HealthPredictionSystem, SystemClock};
pub use cardiovascular_risk::CardiovascularRiskPredictor;
pub use config::IntelligenceConfig;
pub use diabetes_risk::DiabetesRiskPredictor;
pub use health_score::HealthScoreCalculator;
pub use recommendation_engine::RecommendationEngine;
pub use risk_model::RiskPredictor;
