// ABOUTME: Analysis output models: derived metrics, risk assessments, health score, advice
// ABOUTME: AnalysisReport is the immutable root aggregate emitted once per analysis
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pulse Health Intelligence

use super::profile::SubjectProfile;
use crate::constants::dimensions;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Anthropometric and energy metrics computed from the raw profile
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DerivedMetrics {
    /// Body mass index (kg/m²)
    pub bmi: f64,
    /// Basal metabolic rate (kcal/day)
    pub bmr: f64,
    /// Total daily energy expenditure (kcal/day)
    pub tdee: f64,
    /// US Navy body fat estimate, absent when measurements are missing or the formula is undefined
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_fat_percentage: Option<f64>,
}

/// Five-band risk stratification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RiskLevel {
    /// Below the low-moderate band
    Low,
    /// Low to moderate risk
    #[serde(rename = "Low-Moderate")]
    LowModerate,
    /// Moderate risk
    Moderate,
    /// Moderate to high risk
    #[serde(rename = "Moderate-High")]
    ModerateHigh,
    /// High risk
    High,
}

impl RiskLevel {
    /// Label used in reports
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::LowModerate => "Low-Moderate",
            Self::Moderate => "Moderate",
            Self::ModerateHigh => "Moderate-High",
            Self::High => "High",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry of a ranked risk attribution
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContributingFactor {
    /// Factor name (e.g. "Smoking")
    pub name: String,
    /// Approximate impact in percentage points (always non-negative)
    pub impact: f64,
}

impl ContributingFactor {
    /// Create a factor entry
    pub fn new(name: impl Into<String>, impact: f64) -> Self {
        Self {
            name: name.into(),
            impact,
        }
    }
}

/// Output of one risk predictor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskAssessment {
    /// Risk in percent, within [0, 100]
    pub risk_percentage: f64,
    /// Stratified risk band
    pub risk_level: RiskLevel,
    /// At most five factors ordered by descending impact
    pub contributing_factors: Vec<ContributingFactor>,
}

/// Risk assessments for every supported condition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskPredictions {
    /// Ten-year cardiovascular disease risk
    pub cardiovascular: RiskAssessment,
    /// Type 2 diabetes risk
    pub diabetes: RiskAssessment,
}

/// Dimensions of the composite health score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HealthDimension {
    /// BMI band and exercise volume
    PhysicalFitness,
    /// Blood sugar, blood pressure, and cholesterol
    MetabolicHealth,
    /// Sleep, stress, and social connection
    MentalWellbeing,
    /// Smoking, diet, hydration, and alcohol
    LifestyleHabits,
    /// Screening and preventive care
    PreventiveCare,
}

impl HealthDimension {
    /// All dimensions in report order
    pub const ALL: [Self; 5] = [
        Self::PhysicalFitness,
        Self::MetabolicHealth,
        Self::MentalWellbeing,
        Self::LifestyleHabits,
        Self::PreventiveCare,
    ];

    /// Snake-case key used in serialized reports
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::PhysicalFitness => dimensions::PHYSICAL_FITNESS,
            Self::MetabolicHealth => dimensions::METABOLIC_HEALTH,
            Self::MentalWellbeing => dimensions::MENTAL_WELLBEING,
            Self::LifestyleHabits => dimensions::LIFESTYLE_HABITS,
            Self::PreventiveCare => dimensions::PREVENTIVE_CARE,
        }
    }

    /// Title-case name for display
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::PhysicalFitness => "Physical Fitness",
            Self::MetabolicHealth => "Metabolic Health",
            Self::MentalWellbeing => "Mental Wellbeing",
            Self::LifestyleHabits => "Lifestyle Habits",
            Self::PreventiveCare => "Preventive Care",
        }
    }
}

/// Per-dimension scores, each within [0, 100]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DimensionScores {
    /// Physical fitness score
    pub physical_fitness: f64,
    /// Metabolic health score
    pub metabolic_health: f64,
    /// Mental wellbeing score
    pub mental_wellbeing: f64,
    /// Lifestyle habits score
    pub lifestyle_habits: f64,
    /// Preventive care score
    pub preventive_care: f64,
}

impl DimensionScores {
    /// Score for one dimension
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

    /// Iterate `(dimension, score)` pairs in report order
    pub fn iter(&self) -> impl Iterator<Item = (HealthDimension, f64)> + '_ {
        HealthDimension::ALL.into_iter().map(|d| (d, self.get(d)))
    }
}

/// Overall health category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum HealthCategory {
    /// Overall score below 40
    Critical,
    /// 40 to below 55
    Poor,
    /// 55 to below 70
    Fair,
    /// 70 to below 85
    Good,
    /// 85 and above
    Excellent,
}

impl HealthCategory {
    /// Label used in reports
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Critical => "Critical",
            Self::Poor => "Poor",
            Self::Fair => "Fair",
            Self::Good => "Good",
            Self::Excellent => "Excellent",
        }
    }

    /// Display color as a hex RGB string
    #[must_use]
    pub const fn color(&self) -> &'static str {
        match self {
            Self::Critical => "#F44336",
            Self::Poor => "#FF9800",
            Self::Fair => "#FFC107",
            Self::Good => "#8BC34A",
            Self::Excellent => "#4CAF50",
        }
    }
}

impl fmt::Display for HealthCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Category with its display color, as serialized in reports
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreCategory {
    /// Category
    pub name: HealthCategory,
    /// Hex RGB color
    pub color: String,
}

impl From<HealthCategory> for ScoreCategory {
    fn from(name: HealthCategory) -> Self {
        Self {
            name,
            color: name.color().to_owned(),
        }
    }
}

/// Composite health score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthScoreReport {
    /// Weighted overall score rounded to the nearest integer
    pub overall_score: u8,
    /// Individual dimension scores
    pub dimension_scores: DimensionScores,
    /// Category of the unrounded overall score
    pub category: ScoreCategory,
}

/// Urgency of a recommendation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RecommendationPriority {
    /// Act immediately
    Critical,
    /// Act soon
    High,
    /// Worth addressing
    Medium,
}

impl RecommendationPriority {
    /// Upper-case label used in reports
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Critical => "CRITICAL",
            Self::High => "HIGH",
            Self::Medium => "MEDIUM",
        }
    }
}

impl fmt::Display for RecommendationPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Advisory action derived from risk and score outputs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    /// Urgency
    pub priority: RecommendationPriority,
    /// Topic (e.g. "Smoking Cessation")
    pub category: String,
    /// What the subject should do
    pub action: String,
}

/// Complete result of one analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Unique identifier of this report
    pub report_id: Uuid,
    /// When the report was created
    pub timestamp: DateTime<Utc>,
    /// Profile snapshot including the attached BMI
    pub profile: SubjectProfile,
    /// Derived anthropometric and energy metrics
    pub derived_metrics: DerivedMetrics,
    /// Risk assessments per condition
    pub risk_predictions: RiskPredictions,
    /// Composite health score
    pub health_score: HealthScoreReport,
    /// Recommendations in rule order
    pub recommendations: Vec<Recommendation>,
}

impl AnalysisReport {
    /// Whether a recommendation with the given category is present
    #[must_use]
    pub fn has_recommendation(&self, category: &str) -> bool {
        self.recommendations.iter().any(|r| r.category == category)
    }
}
