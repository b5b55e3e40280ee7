// ABOUTME: Composite health score from five rule-based wellness dimensions
// ABOUTME: Physical, metabolic, mental, lifestyle and preventive scores combined by fixed weights
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pulse Health Intelligence

//! Health Score Aggregator
//!
//! Each dimension starts from a base value, accumulates point adjustments from
//! banded inputs and is clamped to [0, 100]. The overall score is the weighted sum
//! of the dimensions; the category is taken from the unrounded sum and the
//! reported score is rounded half to even.

use crate::config::intelligence::{HealthScoreConfig, IntelligenceConfig, ScoringDefaults};
use crate::physiological_constants::{
    blood_pressure, bmi, cholesterol, glucose, hydration, sleep,
};
use pulse_core::models::{DimensionScores, HealthDimension, HealthScoreReport, SubjectProfile};

const PHYSICAL_FITNESS_BASE: f64 = 50.0;
const METABOLIC_HEALTH_BASE: f64 = 70.0;
const MENTAL_WELLBEING_BASE: f64 = 60.0;
const LIFESTYLE_HABITS_BASE: f64 = 60.0;

const HEAVY_SMOKING_TIER: u8 = 3;

/// Profile values as read by the dimension scorers, defaults applied
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringFeatures {
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

impl ScoringFeatures {
    /// Resolve every feature from the profile, falling back to the scoring defaults
    #[must_use]
    pub fn resolve(profile: &SubjectProfile, defaults: &ScoringDefaults) -> Self {
        Self {
            bmi: profile.bmi.unwrap_or(defaults.bmi),
            exercise_frequency: profile
                .exercise_frequency
                .unwrap_or(defaults.exercise_frequency),
            fasting_blood_sugar: profile
                .fasting_blood_sugar
                .unwrap_or(defaults.fasting_blood_sugar),
            blood_pressure_systolic: profile
                .blood_pressure_systolic
                .unwrap_or(defaults.blood_pressure_systolic),
            cholesterol: profile.cholesterol.unwrap_or(defaults.cholesterol),
            sleep_hours: profile.sleep_hours.unwrap_or(defaults.sleep_hours),
            stress_level: profile.stress_level.unwrap_or(defaults.stress_level),
            social_interaction: profile
                .social_interaction
                .unwrap_or(defaults.social_interaction),
            smoking: profile.smoking.unwrap_or(defaults.smoking),
            diet_quality: profile.diet_quality.unwrap_or(defaults.diet_quality),
            water_intake: profile.water_intake.unwrap_or(defaults.water_intake),
            alcohol_consumption: profile
                .alcohol_consumption
                .unwrap_or(defaults.alcohol_consumption),
        }
    }
}

/// Health score calculator
#[derive(Debug, Clone)]
pub struct HealthScoreCalculator {
    config: HealthScoreConfig,
}

impl Default for HealthScoreCalculator {
    fn default() -> Self {
        Self::new()
    }
}

impl HealthScoreCalculator {
    /// Create a calculator from the global configuration
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: IntelligenceConfig::global().health_score.clone(),
        }
    }

    /// Create with custom configuration
    #[must_use]
    pub const fn with_config(config: HealthScoreConfig) -> Self {
        Self { config }
    }

    /// BMI band and exercise volume
    ///
    /// The bands leave gaps (24.9-25 and 29.9-35) that score no adjustment.
    #[must_use]
    pub fn physical_fitness_score(features: &ScoringFeatures) -> f64 {
        let mut score = PHYSICAL_FITNESS_BASE;

        let value = features.bmi;
        if (bmi::NORMAL_MIN..=bmi::NORMAL_MAX).contains(&value) {
            score += 25.0;
        } else if (bmi::OVERWEIGHT_MIN..=bmi::OVERWEIGHT_MAX).contains(&value) {
            score += 10.0;
        } else if value < bmi::NORMAL_MIN || value >= bmi::SEVERE_OBESITY {
            score -= 15.0;
        }

        score += (features.exercise_frequency * 5.0).min(25.0);

        clamp_score(score)
    }

    /// Fasting glucose, systolic pressure and cholesterol bands
    #[must_use]
    pub fn metabolic_health_score(features: &ScoringFeatures) -> f64 {
        let mut score = METABOLIC_HEALTH_BASE;

        score += if features.fasting_blood_sugar < glucose::NORMAL_FASTING_MAX {
            15.0
        } else if features.fasting_blood_sugar >= glucose::DIABETIC_FASTING {
            -30.0
        } else {
            -10.0
        };

        score += if features.blood_pressure_systolic < blood_pressure::NORMAL_SYSTOLIC {
            10.0
        } else if features.blood_pressure_systolic >= blood_pressure::HYPERTENSIVE_SYSTOLIC {
            -20.0
        } else {
            -5.0
        };

        if features.cholesterol < cholesterol::DESIRABLE_MAX {
            score += 5.0;
        } else if features.cholesterol >= cholesterol::HIGH {
            score -= 15.0;
        }

        clamp_score(score)
    }

    /// Sleep band, stress penalty and social bonus
    #[must_use]
    pub fn mental_wellbeing_score(features: &ScoringFeatures) -> f64 {
        let mut score = MENTAL_WELLBEING_BASE;

        let hours = features.sleep_hours;
        score += if (sleep::RECOMMENDED_MIN_HOURS..=sleep::RECOMMENDED_MAX_HOURS).contains(&hours) {
            20.0
        } else if hours < sleep::SHORT_SLEEP_HOURS {
            -20.0
        } else {
            10.0
        };

        score -= (f64::from(features.stress_level) - 1.0) * 10.0;
        score += features.social_interaction * 5.0;

        clamp_score(score)
    }

    /// Smoking tier, diet, hydration and alcohol
    #[must_use]
    pub fn lifestyle_habits_score(features: &ScoringFeatures) -> f64 {
        let mut score = LIFESTYLE_HABITS_BASE;

        score += match features.smoking {
            0 => 20.0,
            HEAVY_SMOKING_TIER => -30.0,
            _ => -10.0,
        };

        score += (f64::from(features.diet_quality) - 2.0) * 10.0;

        if features.water_intake >= hydration::ADEQUATE_GLASSES {
            score += 10.0;
        } else if features.water_intake < hydration::LOW_GLASSES {
            score -= 10.0;
        }

        score -= features.alcohol_consumption * 5.0;

        clamp_score(score)
    }

    /// All five dimension scores
    #[must_use]
    pub fn dimension_scores(&self, profile: &SubjectProfile) -> DimensionScores {
        let features = ScoringFeatures::resolve(profile, &self.config.defaults);

        DimensionScores {
            physical_fitness: Self::physical_fitness_score(&features),
            metabolic_health: Self::metabolic_health_score(&features),
            mental_wellbeing: Self::mental_wellbeing_score(&features),
            lifestyle_habits: Self::lifestyle_habits_score(&features),
            preventive_care: clamp_score(self.config.preventive_care_score),
        }
    }

    /// Unrounded weighted sum of the dimension scores
    #[must_use]
    pub fn weighted_overall(&self, scores: &DimensionScores) -> f64 {
        HealthDimension::ALL
            .iter()
            .map(|dimension| scores.get(*dimension) * self.config.weights.get(*dimension))
            .sum()
    }

    /// Compute the complete health score report
    #[must_use]
    pub fn calculate_overall_score(&self, profile: &SubjectProfile) -> HealthScoreReport {
        let dimension_scores = self.dimension_scores(profile);
        let overall = self.weighted_overall(&dimension_scores);
        let category = self.config.categories.categorize(overall);

        HealthScoreReport {
            overall_score: overall.round_ties_even().clamp(0.0, 100.0) as u8,
            dimension_scores,
            category: category.into(),
        }
    }
}

fn clamp_score(score: f64) -> f64 {
    score.clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn features() -> ScoringFeatures {
        ScoringFeatures::resolve(&SubjectProfile::default(), &ScoringDefaults::default())
    }

    #[test]
    fn test_bmi_band_gaps_score_no_adjustment() {
        let gap_low = ScoringFeatures {
            bmi: 24.95,
            ..features()
        };
        let gap_high = ScoringFeatures {
            bmi: 32.0,
            ..features()
        };

        assert!((HealthScoreCalculator::physical_fitness_score(&gap_low) - 50.0).abs() < 1e-9);
        assert!((HealthScoreCalculator::physical_fitness_score(&gap_high) - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_exercise_bonus_is_capped() {
        let athlete = ScoringFeatures {
            bmi: 22.0,
            exercise_frequency: 10.0,
            ..features()
        };

        assert!((HealthScoreCalculator::physical_fitness_score(&athlete) - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_lifestyle_floor_clamps_at_zero() {
        let worst = ScoringFeatures {
            smoking: 3,
            diet_quality: 1,
            water_intake: 1.0,
            alcohol_consumption: 10.0,
            ..features()
        };

        assert!(HealthScoreCalculator::lifestyle_habits_score(&worst).abs() < f64::EPSILON);
    }

    #[test]
    fn test_default_dimensions() {
        let calculator = HealthScoreCalculator::with_config(HealthScoreConfig::default());
        let scores = calculator.dimension_scores(&SubjectProfile::default());

        // bmi 25 -> +10, no exercise
        assert!((scores.physical_fitness - 60.0).abs() < 1e-9);
        // 70 + 15 - 5 + 5
        assert!((scores.metabolic_health - 85.0).abs() < 1e-9);
        // 60 + 20 - 10 + 10
        assert!((scores.mental_wellbeing - 80.0).abs() < 1e-9);
        // 60 + 20 + 0 + 0 - 5
        assert!((scores.lifestyle_habits - 75.0).abs() < 1e-9);
        assert!((scores.preventive_care - 70.0).abs() < 1e-9);
    }
}
