// ABOUTME: Clinical reference values and formula coefficients used by the risk and score models
// ABOUTME: Centering references, diagnostic cut-offs, BMI bands, and US Navy body fat constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pulse Health Intelligence

//! Physiological constants based on clinical guidelines
//!
//! Values that describe the physiology (cut-offs, reference points, published formula
//! coefficients) live here. Tunable model weights and advisory thresholds live in
//! [`crate::config::intelligence`].

/// Body mass index bands and normalization bounds
///
/// Reference: WHO (2000). Obesity: preventing and managing the global epidemic. TRS 894.
pub mod bmi {
    /// Reference BMI used to center model inputs
    pub const REFERENCE_BMI: f64 = 25.0;
    /// Lower bound of the normal weight band
    pub const NORMAL_MIN: f64 = 18.5;
    /// Upper bound of the normal weight band
    pub const NORMAL_MAX: f64 = 24.9;
    /// Lower bound of the overweight band
    pub const OVERWEIGHT_MIN: f64 = 25.0;
    /// Upper bound of the overweight band
    pub const OVERWEIGHT_MAX: f64 = 29.9;
    /// Class II obesity threshold
    pub const SEVERE_OBESITY: f64 = 35.0;
    /// Lower bound of the normalization range
    pub const NORMALIZATION_MIN: f64 = 15.0;
    /// Width of the normalization range (15..40)
    pub const NORMALIZATION_SPAN: f64 = 25.0;
}

/// Age normalization
pub mod age {
    /// Divisor mapping age in years onto [0, 1]
    pub const NORMALIZATION_DIVISOR: f64 = 100.0;
}

/// Blood pressure reference values (mmHg)
///
/// Reference: Whelton, P.K., et al. (2018). ACC/AHA Guideline for High Blood Pressure in Adults.
pub mod blood_pressure {
    /// Normal systolic pressure, also the model centering reference
    pub const NORMAL_SYSTOLIC: f64 = 120.0;
    /// Stage 2 hypertension systolic threshold
    pub const HYPERTENSIVE_SYSTOLIC: f64 = 140.0;
}

/// Lipid reference values (mg/dL)
///
/// Reference: NCEP ATP III (2002). Detection, Evaluation, and Treatment of High Blood Cholesterol.
pub mod cholesterol {
    /// Desirable total cholesterol upper limit, also the model centering reference
    pub const DESIRABLE_MAX: f64 = 200.0;
    /// High total cholesterol threshold
    pub const HIGH: f64 = 240.0;
}

/// Fasting plasma glucose values (mg/dL)
///
/// Reference: American Diabetes Association (2023). Standards of Care in Diabetes.
pub mod glucose {
    /// Reference fasting glucose used to center the diabetes model
    pub const REFERENCE_FASTING: f64 = 90.0;
    /// Upper bound (exclusive) of normal fasting glucose
    pub const NORMAL_FASTING_MAX: f64 = 100.0;
    /// Diagnostic threshold for diabetes
    pub const DIABETIC_FASTING: f64 = 126.0;
}

/// Waist circumference thresholds for abdominal obesity (cm)
///
/// Reference: NCEP ATP III metabolic syndrome criteria
pub mod waist {
    /// Male threshold
    pub const MALE_THRESHOLD: f64 = 102.0;
    /// Female threshold
    pub const FEMALE_THRESHOLD: f64 = 88.0;
}

/// Sleep duration bands (hours)
///
/// Reference: Watson, N.F., et al. (2015). Recommended amount of sleep for a healthy adult.
pub mod sleep {
    /// Lower bound of the recommended band
    pub const RECOMMENDED_MIN_HOURS: f64 = 7.0;
    /// Upper bound of the recommended band
    pub const RECOMMENDED_MAX_HOURS: f64 = 9.0;
    /// Below this is short sleep
    pub const SHORT_SLEEP_HOURS: f64 = 6.0;
}

/// Hydration bands (glasses per day)
pub mod hydration {
    /// Adequate daily intake
    pub const ADEQUATE_GLASSES: f64 = 8.0;
    /// Below this intake is low
    pub const LOW_GLASSES: f64 = 4.0;
}

/// US Navy circumference body fat method
///
/// Reference: Hodgdon, J.A. & Beckett, M.B. (1984). Prediction of percent body fat for
/// U.S. Navy men and women from body circumferences and height. NHRC Report 84-11.
pub mod navy_body_fat {
    /// Numerator of the density-to-fat conversion (Siri equation)
    pub const SIRI_NUMERATOR: f64 = 495.0;
    /// Offset of the density-to-fat conversion (Siri equation)
    pub const SIRI_OFFSET: f64 = 450.0;

    /// Male intercept
    pub const MALE_INTERCEPT: f64 = 1.0324;
    /// Male log10(waist - neck) coefficient
    pub const MALE_CIRCUMFERENCE_COEF: f64 = 0.19077;
    /// Male log10(height) coefficient
    pub const MALE_HEIGHT_COEF: f64 = 0.15456;
    /// Male lower clamp (%)
    pub const MALE_MIN_PERCENT: f64 = 5.0;

    /// Female intercept
    pub const FEMALE_INTERCEPT: f64 = 1.29579;
    /// Female log10(waist + hip - neck) coefficient
    pub const FEMALE_CIRCUMFERENCE_COEF: f64 = 0.35004;
    /// Female log10(height) coefficient
    pub const FEMALE_HEIGHT_COEF: f64 = 0.22100;
    /// Female lower clamp (%)
    pub const FEMALE_MIN_PERCENT: f64 = 10.0;

    /// Upper clamp for both sexes (%)
    pub const MAX_PERCENT: f64 = 50.0;
}
