// ABOUTME: Built-in sample subjects used by the demo command and benchmarks
// ABOUTME: One low-risk and one high-risk adult male profile
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pulse Health Intelligence

use pulse_core::models::{Gender, SubjectProfile};

/// A named sample subject
#[derive(Debug, Clone)]
pub struct SampleSubject {
    /// Label shown above the report
    pub name: &'static str,
    /// Profile to analyze
    pub profile: SubjectProfile,
}

/// Active non-smoker with normal labs
#[must_use]
pub fn low_risk_profile() -> SubjectProfile {
    SubjectProfile {
        activity_multiplier: Some(1.55),
        exercise_frequency: Some(5.0),
        smoking: Some(0),
        alcohol_consumption: Some(0.0),
        blood_pressure_systolic: Some(115.0),
        cholesterol: Some(180.0),
        fasting_blood_sugar: Some(85.0),
        diet_quality: Some(4),
        water_intake: Some(8.0),
        sleep_hours: Some(7.5),
        stress_level: Some(1),
        family_heart_disease: Some(false),
        family_diabetes: Some(false),
        ..SubjectProfile::new(35.0, Gender::Male, 175.0, 75.0)
    }
}

/// Sedentary heavy smoker with obesity, hypertension and impaired fasting glucose
#[must_use]
pub fn high_risk_profile() -> SubjectProfile {
    SubjectProfile {
        waist_circumference: Some(110.0),
        activity_multiplier: Some(1.2),
        exercise_frequency: Some(0.0),
        smoking: Some(3),
        alcohol_consumption: Some(3.0),
        blood_pressure_systolic: Some(155.0),
        cholesterol: Some(260.0),
        fasting_blood_sugar: Some(115.0),
        diet_quality: Some(1),
        water_intake: Some(3.0),
        sleep_hours: Some(5.0),
        stress_level: Some(4),
        family_heart_disease: Some(true),
        family_diabetes: Some(true),
        ..SubjectProfile::new(55.0, Gender::Male, 175.0, 105.0)
    }
}

/// Both demo subjects in display order
#[must_use]
pub fn demo_subjects() -> Vec<SampleSubject> {
    vec![
        SampleSubject {
            name: "Patient A - Low Risk",
            profile: low_risk_profile(),
        },
        SampleSubject {
            name: "Patient B - High Risk",
            profile: high_risk_profile(),
        },
    ]
}
