// ABOUTME: Subject profile model holding biometric, clinical, and lifestyle inputs
// ABOUTME: All fields optional at the boundary; consumers resolve documented defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pulse Health Intelligence

use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;

/// Accepted smoking tiers (0 none .. 3 heavy)
pub const SMOKING_TIERS: RangeInclusive<u8> = 0..=3;
/// Accepted diet quality tiers (1 poor .. 4 excellent)
pub const DIET_QUALITY_TIERS: RangeInclusive<u8> = 1..=4;
/// Accepted stress tiers (1 low .. 4 very high)
pub const STRESS_TIERS: RangeInclusive<u8> = 1..=4;

/// Biological sex used by sex-specific formulas
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    /// Male (the default wherever a formula needs a value)
    #[default]
    Male,
    /// Female
    Female,
}

impl Gender {
    /// Parse gender from a string, treating anything not recognised as male
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "female" | "f" => Self::Female,
            _ => Self::Male,
        }
    }

    /// Lowercase label used in reports
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }

    /// `true` for [`Gender::Male`]
    #[must_use]
    pub const fn is_male(&self) -> bool {
        matches!(self, Self::Male)
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Input record for one analysis
///
/// Every field is optional so partially filled profiles can be analyzed. The
/// orchestrator requires `age`, `gender`, `height_cm` and `weight_kg`; every other
/// field falls back to the default table of the component that reads it.
///
/// `smoking`, `diet_quality` and `stress_level` are whole-number tiers: fractional
/// values are rejected at the boundary and out-of-range tiers by [`Self::validate_tiers`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubjectProfile {
    /// Age in years, fractional values allowed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<f64>,
    /// Biological sex
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    /// Height in centimeters
    #[serde(alias = "height", skip_serializing_if = "Option::is_none")]
    pub height_cm: Option<f64>,
    /// Weight in kilograms
    #[serde(alias = "weight", skip_serializing_if = "Option::is_none")]
    pub weight_kg: Option<f64>,
    /// TDEE activity multiplier (1.2 sedentary .. 1.9 extra active)
    #[serde(alias = "activity_level", skip_serializing_if = "Option::is_none")]
    pub activity_multiplier: Option<f64>,
    /// Exercise sessions per week
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exercise_frequency: Option<f64>,
    /// Smoking tier: 0 none, 1 occasional, 2 regular, 3 heavy
    #[serde(skip_serializing_if = "Option::is_none")]
    pub smoking: Option<u8>,
    /// Diet quality: 1 poor .. 4 excellent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diet_quality: Option<u8>,
    /// Perceived stress: 1 low .. 4 very high
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stress_level: Option<u8>,
    /// Average nightly sleep in hours
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sleep_hours: Option<f64>,
    /// Daily water intake in glasses
    #[serde(skip_serializing_if = "Option::is_none")]
    pub water_intake: Option<f64>,
    /// Alcohol consumption tier (drinks per day)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alcohol_consumption: Option<f64>,
    /// Social interaction tier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub social_interaction: Option<f64>,
    /// Systolic blood pressure (mmHg)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blood_pressure_systolic: Option<f64>,
    /// Total cholesterol (mg/dL)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cholesterol: Option<f64>,
    /// Fasting blood glucose (mg/dL)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fasting_blood_sugar: Option<f64>,
    /// Waist circumference (cm)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub waist_circumference: Option<f64>,
    /// Neck circumference (cm), used for body fat estimation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub neck_circumference: Option<f64>,
    /// Hip circumference (cm), required for female body fat estimation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hip_circumference: Option<f64>,
    /// First-degree family history of heart disease
    #[serde(skip_serializing_if = "Option::is_none")]
    pub family_heart_disease: Option<bool>,
    /// First-degree family history of diabetes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub family_diabetes: Option<bool>,
    /// Body mass index, attached by the orchestrator before prediction
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bmi: Option<f64>,
}

impl SubjectProfile {
    /// Create a profile with the four fields the orchestrator requires
    #[must_use]
    pub fn new(age: f64, gender: Gender, height_cm: f64, weight_kg: f64) -> Self {
        Self {
            age: Some(age),
            gender: Some(gender),
            height_cm: Some(height_cm),
            weight_kg: Some(weight_kg),
            ..Self::default()
        }
    }

    /// Return a copy with `bmi` attached
    #[must_use]
    pub fn with_bmi(&self, bmi: f64) -> Self {
        Self {
            bmi: Some(bmi),
            ..self.clone()
        }
    }

    /// Age in years; must be present and positive
    ///
    /// # Errors
    ///
    /// Returns an error if `age` is absent or not a positive number
    pub fn required_age(&self) -> AppResult<f64> {
        positive(self.age, "age")
    }

    /// Gender, or `MissingRequiredField`
    ///
    /// # Errors
    ///
    /// Returns an error if `gender` is absent
    pub fn required_gender(&self) -> AppResult<Gender> {
        self.gender.ok_or_else(|| AppError::missing_field("gender"))
    }

    /// Height in cm; must be present and positive
    ///
    /// # Errors
    ///
    /// Returns an error if `height_cm` is absent or not a positive number
    pub fn required_height_cm(&self) -> AppResult<f64> {
        positive(self.height_cm, "height_cm")
    }

    /// Weight in kg; must be present and positive
    ///
    /// # Errors
    ///
    /// Returns an error if `weight_kg` is absent or not a positive number
    pub fn required_weight_kg(&self) -> AppResult<f64> {
        positive(self.weight_kg, "weight_kg")
    }

    /// Check the lifestyle tiers that are present against their documented ranges
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` naming the first tier outside its range
    pub fn validate_tiers(&self) -> AppResult<()> {
        check_tier(self.smoking, &SMOKING_TIERS, "smoking")?;
        check_tier(self.diet_quality, &DIET_QUALITY_TIERS, "diet_quality")?;
        check_tier(self.stress_level, &STRESS_TIERS, "stress_level")
    }
}

fn check_tier(value: Option<u8>, range: &RangeInclusive<u8>, field: &'static str) -> AppResult<()> {
    match value {
        Some(tier) if !range.contains(&tier) => Err(AppError::out_of_range(field, f64::from(tier))),
        _ => Ok(()),
    }
}

fn positive(value: Option<f64>, field: &'static str) -> AppResult<f64> {
    let value = value.ok_or_else(|| AppError::missing_field(field))?;
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(AppError::invalid_input(format!("{field} must be a positive number, got {value}"))
            .with_details(serde_json::json!({ "field": field })))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorCode;

    #[test]
    fn test_deserialize_accepts_short_aliases() {
        let profile: SubjectProfile = serde_json::from_str(
            r#"{"age": 40, "gender": "female", "height": 160, "weight": 58.5, "activity_level": 1.55}"#,
        )
        .unwrap();

        assert_eq!(profile.height_cm, Some(160.0));
        assert_eq!(profile.weight_kg, Some(58.5));
        assert_eq!(profile.activity_multiplier, Some(1.55));
        assert_eq!(profile.gender, Some(Gender::Female));
        assert!(profile.smoking.is_none());
    }

    #[test]
    fn test_serialize_skips_absent_fields() {
        let json = serde_json::to_value(SubjectProfile::new(30.0, Gender::Male, 180.0, 80.0)).unwrap();
        let object = json.as_object().unwrap();

        assert_eq!(object.len(), 4);
        assert_eq!(object["gender"], "male");
    }

    #[test]
    fn test_required_fields_report_missing_field() {
        let profile = SubjectProfile::default();

        assert_eq!(
            profile.required_age().unwrap_err().code,
            ErrorCode::MissingRequiredField
        );
        assert_eq!(
            profile.required_gender().unwrap_err().code,
            ErrorCode::MissingRequiredField
        );
    }

    #[test]
    fn test_non_positive_height_is_invalid_input() {
        let profile = SubjectProfile::new(30.0, Gender::Male, 0.0, 80.0);

        let error = profile.required_height_cm().unwrap_err();
        assert_eq!(error.code, ErrorCode::InvalidInput);
        assert_eq!(error.details["field"], "height_cm");
    }

    #[test]
    fn test_fractional_age_is_accepted() {
        let profile: SubjectProfile =
            serde_json::from_str(r#"{"age": 45.5, "gender": "male"}"#).unwrap();

        assert!((profile.required_age().unwrap() - 45.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_non_positive_age_is_invalid_input() {
        let profile = SubjectProfile::new(-1.0, Gender::Female, 160.0, 55.0);

        assert_eq!(
            profile.required_age().unwrap_err().code,
            ErrorCode::InvalidInput
        );
    }

    #[test]
    fn test_fractional_tier_is_rejected_at_the_boundary() {
        let result = serde_json::from_str::<SubjectProfile>(r#"{"stress_level": 2.5}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_tiers() {
        let valid = SubjectProfile {
            smoking: Some(3),
            diet_quality: Some(1),
            stress_level: Some(4),
            ..SubjectProfile::default()
        };
        assert!(valid.validate_tiers().is_ok());
        assert!(SubjectProfile::default().validate_tiers().is_ok());

        let heavy = SubjectProfile {
            smoking: Some(7),
            ..SubjectProfile::default()
        };
        let error = heavy.validate_tiers().unwrap_err();
        assert_eq!(error.code, ErrorCode::ValueOutOfRange);
        assert_eq!(error.details["field"], "smoking");

        let no_diet = SubjectProfile {
            diet_quality: Some(0),
            ..SubjectProfile::default()
        };
        assert_eq!(
            no_diet.validate_tiers().unwrap_err().details["field"],
            "diet_quality"
        );
    }

    #[test]
    fn test_with_bmi_leaves_original_untouched() {
        let profile = SubjectProfile::new(30.0, Gender::Male, 180.0, 81.0);
        let augmented = profile.with_bmi(25.0);

        assert_eq!(augmented.bmi, Some(25.0));
        assert!(profile.bmi.is_none());
    }

    #[test]
    fn test_gender_from_str_lossy() {
        assert_eq!(Gender::from_str_lossy("Female"), Gender::Female);
        assert_eq!(Gender::from_str_lossy(" f "), Gender::Female);
        assert_eq!(Gender::from_str_lossy("male"), Gender::Male);
        assert_eq!(Gender::from_str_lossy("unknown"), Gender::Male);
    }
}
