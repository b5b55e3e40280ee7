// ABOUTME: Main library entry point for the Pulse health risk and wellness engine
// ABOUTME: Re-exports the core models and analysis pipeline, adds logging and report formatting
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pulse Health Intelligence

#![deny(unsafe_code)]

//! # Pulse Health
//!
//! A deterministic health analysis engine. Given one subject profile it derives
//! body metrics, estimates cardiovascular and type 2 diabetes risk with fixed
//! logistic models, aggregates a five-dimension wellness score and produces
//! prioritized recommendations.
//!
//! ## Architecture
//!
//! - **`pulse_core`**: Errors, constants, and the profile/report models
//! - **`pulse_intelligence`**: Metric derivation, risk predictors, scoring, recommendations
//!   and the [`HealthPredictionSystem`] orchestrator
//! - **This crate**: Logging setup, report formatting, and the `pulse-cli` binary
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use pulse_health::errors::AppResult;
//! use pulse_health::models::{Gender, SubjectProfile};
//! use pulse_health::HealthPredictionSystem;
//!
//! fn main() -> AppResult<()> {
//!     let system = HealthPredictionSystem::new();
//!     let profile = SubjectProfile::new(42.0, Gender::Female, 165.0, 62.0);
//!
//!     let report = system.analyze(&profile)?;
//!     println!("Overall score: {}", report.health_score.overall_score);
//!     Ok(())
//! }
//! ```

/// Unified error handling
pub use pulse_core::errors;

/// Shared constants
pub use pulse_core::constants;

/// Subject profile and analysis report models
pub use pulse_core::models;

/// Analysis pipeline components
pub use pulse_intelligence as intelligence;

pub use pulse_intelligence::{
    CardiovascularRiskPredictor, Clock, DiabetesRiskPredictor, FixedClock,
    HealthPredictionSystem, HealthScoreCalculator, IntelligenceConfig, RecommendationEngine,
    RiskPredictor, SystemClock,
};

/// Structured logging configuration
pub mod logging;

/// Report output formats (text, JSON, TOON)
pub mod formatters;

/// Profile loading from JSON files and stdin
pub mod input;

/// Built-in sample subjects
pub mod samples;
