// ABOUTME: Health score configuration: dimension weights, category cut-offs, input defaults
// ABOUTME: Drives the weighted five-dimension wellness aggregation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pulse Health Intelligence

//! Health Score Configuration

use crate::config::intelligence::error::ConfigError;
use pulse_core::models::{HealthCategory, HealthDimension};
use serde::{Deserialize, Serialize};

/// Health score aggregation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthScoreConfig {
    /// Weight of each dimension in the overall score
    pub weights: DimensionWeights,
    /// Overall score cut-offs per category
    pub categories: CategoryThresholds,
    /// Values used for profile fields that are absent
    pub defaults: ScoringDefaults,
    /// Fixed score of the preventive care dimension
    pub preventive_care_score: f64,
}

/// Dimension weights; must sum to 1.0
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DimensionWeights {
    /// Physical fitness weight
    pub physical_fitness: f64,
    /// Metabolic health weight
    pub metabolic_health: f64,
    /// Mental wellbeing weight
    pub mental_wellbeing: f64,
    /// Lifestyle habits weight
    pub lifestyle_habits: f64,
    /// Preventive care weight
    pub preventive_care: f64,
}

/// Lower bounds (inclusive) of each category
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryThresholds {
    /// Excellent from this score
    pub excellent: f64,
    /// Good from this score
    pub good: f64,
    /// Fair from this score
    pub fair: f64,
    /// Poor from this score; below is Critical
    pub poor: f64,
}

/// Defaults for absent profile fields, as read by the dimension scorers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringDefaults {
    /// Body mass index
    pub bmi: f64,
    /// Weekly exercise sessions
    pub exercise_frequency: f64,
    /// Fasting blood glucose
    pub fasting_blood_sugar: f64,
    /// Systolic blood pressure
    pub blood_pressure_systolic: f64,
    /// Total cholesterol
    pub cholesterol: f64,
    /// Nightly sleep hours
    pub sleep_hours: f64,
    /// Stress tier
    pub stress_level: u8,
    /// Social interaction tier
    pub social_interaction: f64,
    /// Smoking tier
    pub smoking: u8,
    /// Diet tier
    pub diet_quality: u8,
    /// Glasses of water per day
    pub water_intake: f64,
    /// Alcohol tier
    pub alcohol_consumption: f64,
}

impl Default for HealthScoreConfig {
    fn default() -> Self {
        Self {
            weights: DimensionWeights::default(),
            categories: CategoryThresholds::default(),
            defaults: ScoringDefaults::default(),
            preventive_care_score: 70.0,
        }
    }
}

impl Default for DimensionWeights {
    fn default() -> Self {
        Self {
            physical_fitness: 0.25,
            metabolic_health: 0.25,
            mental_wellbeing: 0.20,
            lifestyle_habits: 0.20,
            preventive_care: 0.10,
        }
    }
}

impl Default for CategoryThresholds {
    fn default() -> Self {
        Self {
            excellent: 85.0,
            good: 70.0,
            fair: 55.0,
            poor: 40.0,
        }
    }
}

impl Default for ScoringDefaults {
    fn default() -> Self {
        Self {
            bmi: 25.0,
            exercise_frequency: 0.0,
            fasting_blood_sugar: 90.0,
            blood_pressure_systolic: 120.0,
            cholesterol: 180.0,
            sleep_hours: 7.0,
            stress_level: 2,
            social_interaction: 2.0,
            smoking: 0,
            diet_quality: 2,
            water_intake: 6.0,
            alcohol_consumption: 1.0,
        }
    }
}

impl DimensionWeights {
    /// Weight of one dimension
    #[must_use]
    pub const fn get(&self, dimension: HealthDimension) -> f64 {
        match dimension {
            HealthDimension::PhysicalFitness => self.physical_fitness,
            HealthDimension::MetabolicHealth => self.metabolic_health,
            HealthDimension::MentalWellbeing => self.mental_wellbeing,
            HealthDimension::LifestyleHabits => self.lifestyle_habits,
            HealthDimension::PreventiveCare => self.preventive_care,
        }
    }

    /// Sum of all weights
    #[must_use]
    pub fn total(&self) -> f64 {
        HealthDimension::ALL.iter().map(|d| self.get(*d)).sum()
    }
}

impl CategoryThresholds {
    /// Category of an (unrounded) overall score
    #[must_use]
    pub fn categorize(&self, score: f64) -> HealthCategory {
        if score >= self.excellent {
            HealthCategory::Excellent
        } else if score >= self.good {
            HealthCategory::Good
        } else if score >= self.fair {
            HealthCategory::Fair
        } else if score >= self.poor {
            HealthCategory::Poor
        } else {
            HealthCategory::Critical
        }
    }

    /// Check that cut-offs are strictly descending and within [0, 100]
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidRange` if the cut-offs are out of order
    pub fn validate(&self) -> Result<(), ConfigError> {
        let ordered = self.poor < self.fair && self.fair < self.good && self.good < self.excellent;
        if !ordered {
            return Err(ConfigError::InvalidRange(
                "Category thresholds must satisfy poor < fair < good < excellent",
            ));
        }
        if self.poor < 0.0 || self.excellent > 100.0 {
            return Err(ConfigError::ValueOutOfRange(
                "Category thresholds must lie within 0-100",
            ));
        }
        Ok(())
    }
}
