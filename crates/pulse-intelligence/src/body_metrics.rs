// ABOUTME: Body metric derivation using peer-reviewed anthropometric formulas
// ABOUTME: BMI, Mifflin-St Jeor BMR, TDEE, US Navy body fat, and input normalization
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pulse Health Intelligence

//! Body Metrics Module
//!
//! Derives the anthropometric and energy metrics attached to every analysis.
//!
//! # Scientific References
//!
//! - Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
//!   *American Journal of Clinical Nutrition*, 51(2), 241-247.
//!   <https://doi.org/10.1093/ajcn/51.2.241>
//!
//! - Hodgdon, J.A. & Beckett, M.B. (1984). Prediction of percent body fat for U.S. Navy
//!   men and women from body circumferences and height. NHRC Report 84-11.

use crate::config::intelligence::{BmrConfig, BodyMetricsConfig};
use crate::physiological_constants::{age, bmi, navy_body_fat};
use pulse_core::errors::{AppError, AppResult};
use pulse_core::models::{DerivedMetrics, Gender, SubjectProfile};
use tracing::debug;

/// Calculate Body Mass Index
///
/// Formula: BMI = `weight_kg` / (`height_cm` / 100)²
///
/// # Errors
///
/// Returns `InvalidInput` if either value is not a positive finite number
pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> AppResult<f64> {
    if !(weight_kg.is_finite() && weight_kg > 0.0) {
        return Err(AppError::invalid_input("Weight must be a positive number"));
    }
    if !(height_cm.is_finite() && height_cm > 0.0) {
        return Err(AppError::invalid_input("Height must be a positive number"));
    }

    let height_m = height_cm / 100.0;
    Ok(weight_kg / (height_m * height_m))
}

/// Calculate Basal Metabolic Rate using Mifflin-St Jeor equation (1990)
///
/// Formula: BMR = (10 x `weight_kg`) + (6.25 x `height_cm`) - (5 x age) + `gender_offset`
/// - Men: +5
/// - Women: -161
///
/// # Reference
/// Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241
#[must_use]
pub fn calculate_bmr_mifflin(
    weight_kg: f64,
    height_cm: f64,
    age: f64,
    gender: Gender,
    config: &BmrConfig,
) -> f64 {
    let gender_constant = match gender {
        Gender::Male => config.msj_male_constant,
        Gender::Female => config.msj_female_constant,
    };

    config.msj_weight_coef * weight_kg
        + config.msj_height_coef * height_cm
        + config.msj_age_coef * age
        + gender_constant
}

/// Calculate Total Daily Energy Expenditure
///
/// Formula: TDEE = BMR x activity multiplier
#[must_use]
pub fn calculate_tdee(bmr: f64, activity_multiplier: f64) -> f64 {
    bmr * activity_multiplier
}

/// Estimate body fat percentage with the US Navy circumference method
///
/// - Men: 495 / (1.0324 - 0.19077·log10(waist - neck) + 0.15456·log10(height)) - 450, clamped to [5, 50]
/// - Women: 495 / (1.29579 - 0.35004·log10(waist + hip - neck) + 0.22100·log10(height)) - 450, clamped to [10, 50]
///
/// Returns `None` when the formula is undefined: a non-positive log argument, a
/// female subject without a positive hip measurement, or a non-finite result.
#[must_use]
pub fn calculate_body_fat_navy(
    gender: Gender,
    waist_cm: f64,
    neck_cm: f64,
    height_cm: f64,
    hip_cm: Option<f64>,
) -> Option<f64> {
    if height_cm <= 0.0 {
        return None;
    }

    let (circumference, intercept, circumference_coef, height_coef, min_percent) = match gender {
        Gender::Male => (
            waist_cm - neck_cm,
            navy_body_fat::MALE_INTERCEPT,
            navy_body_fat::MALE_CIRCUMFERENCE_COEF,
            navy_body_fat::MALE_HEIGHT_COEF,
            navy_body_fat::MALE_MIN_PERCENT,
        ),
        Gender::Female => (
            waist_cm + hip_cm.filter(|hip| *hip > 0.0)? - neck_cm,
            navy_body_fat::FEMALE_INTERCEPT,
            navy_body_fat::FEMALE_CIRCUMFERENCE_COEF,
            navy_body_fat::FEMALE_HEIGHT_COEF,
            navy_body_fat::FEMALE_MIN_PERCENT,
        ),
    };

    if circumference <= 0.0 {
        return None;
    }

    let density =
        intercept - circumference_coef * circumference.log10() + height_coef * height_cm.log10();
    let body_fat = navy_body_fat::SIRI_NUMERATOR / density - navy_body_fat::SIRI_OFFSET;

    body_fat
        .is_finite()
        .then(|| body_fat.clamp(min_percent, navy_body_fat::MAX_PERCENT))
}

/// Map BMI 15..40 linearly onto [0, 1], clamped
#[must_use]
pub fn normalize_bmi(value: f64) -> f64 {
    ((value - bmi::NORMALIZATION_MIN) / bmi::NORMALIZATION_SPAN).clamp(0.0, 1.0)
}

/// Map age in years onto [0, 1] (age / 100), clamped
#[must_use]
pub fn normalize_age(years: f64) -> f64 {
    (years / age::NORMALIZATION_DIVISOR).clamp(0.0, 1.0)
}

/// Derive all body metrics for a profile
///
/// Body fat is estimated only when waist and neck circumferences are present
/// (and hip for women); otherwise it is left empty.
///
/// # Errors
///
/// Returns an error if age, gender, height or weight are missing, or height/weight are not positive
pub fn derive_metrics(
    profile: &SubjectProfile,
    config: &BodyMetricsConfig,
) -> AppResult<DerivedMetrics> {
    let weight_kg = profile.required_weight_kg()?;
    let height_cm = profile.required_height_cm()?;
    let age = profile.required_age()?;
    let gender = profile.required_gender()?;

    let bmi = calculate_bmi(weight_kg, height_cm)?;
    let bmr = calculate_bmr_mifflin(weight_kg, height_cm, age, gender, &config.bmr);
    let activity_multiplier = profile
        .activity_multiplier
        .unwrap_or(config.default_activity_multiplier);
    let tdee = calculate_tdee(bmr, activity_multiplier);

    let body_fat_percentage = match (profile.waist_circumference, profile.neck_circumference) {
        (Some(waist), Some(neck)) => {
            let estimate =
                calculate_body_fat_navy(gender, waist, neck, height_cm, profile.hip_circumference);
            if estimate.is_none() {
                debug!(%gender, waist, neck, "Navy body fat formula undefined for inputs");
            }
            estimate
        }
        _ => None,
    };

    Ok(DerivedMetrics {
        bmi,
        bmr,
        tdee,
        body_fat_percentage,
    })
}
