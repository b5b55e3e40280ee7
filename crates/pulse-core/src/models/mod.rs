// ABOUTME: Core data models for subject input and analysis output
// ABOUTME: Re-exports profile, derived metric, risk, score, and report types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pulse Health Intelligence

//! # Data Models
//!
//! - [`SubjectProfile`]: the per-call input record, every field optional at the boundary
//! - [`AnalysisReport`]: the root aggregate produced by one analysis

/// Subject profile input record
pub mod profile;

/// Analysis output types (risk assessments, health score, recommendations)
pub mod report;

pub use profile::{Gender, SubjectProfile};
pub use report::{
    AnalysisReport, ContributingFactor, DerivedMetrics, DimensionScores, HealthCategory,
    HealthDimension, HealthScoreReport, Recommendation, RecommendationPriority, RiskAssessment,
    RiskLevel, RiskPredictions, ScoreCategory,
};
