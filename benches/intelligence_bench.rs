// ABOUTME: Criterion benchmarks for the health analysis pipeline
// ABOUTME: Measures single-profile stages, full analysis, and parallel batch throughput
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pulse Health Intelligence

//! Criterion benchmarks for the analysis pipeline.
//!
//! Measures the individual risk and scoring stages, a full `analyze` call,
//! and `analyze_batch` over growing batches of synthetic subjects.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use pulse_health::formatters::{format_report, OutputFormat};
use pulse_health::models::{Gender, SubjectProfile};
use pulse_health::samples::{high_risk_profile, low_risk_profile};
use pulse_health::{
    CardiovascularRiskPredictor, DiabetesRiskPredictor, HealthPredictionSystem,
    HealthScoreCalculator, RiskPredictor,
};

/// Batch sizes for throughput measurements
const BATCH_SIZES: [usize; 3] = [10, 100, 1000];

/// Deterministic spread of subjects across ages, sizes and habits
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
fn generate_profiles(count: usize) -> Vec<SubjectProfile> {
    (0..count)
        .map(|index| {
            let gender = if index % 2 == 0 {
                Gender::Male
            } else {
                Gender::Female
            };
            let age = 20.0 + (index * 7 % 60) as f64;
            let height_cm = 150.0 + (index * 13 % 45) as f64;
            let weight_kg = 50.0 + (index * 11 % 70) as f64;

            SubjectProfile {
                exercise_frequency: Some((index % 7) as f64),
                smoking: Some((index % 4) as u8),
                blood_pressure_systolic: Some(105.0 + (index * 3 % 90) as f64),
                cholesterol: Some(150.0 + (index * 9 % 170) as f64),
                fasting_blood_sugar: Some(75.0 + (index * 5 % 80) as f64),
                waist_circumference: Some(70.0 + (index * 4 % 60) as f64),
                neck_circumference: Some(33.0 + (index % 8) as f64),
                hip_circumference: Some(90.0 + (index % 25) as f64),
                family_heart_disease: Some(index % 5 == 0),
                family_diabetes: Some(index % 3 == 0),
                ..SubjectProfile::new(age, gender, height_cm, weight_kg)
            }
        })
        .collect()
}

/// Benchmark each model stage on an already augmented profile
fn bench_model_stages(c: &mut Criterion) {
    let mut group = c.benchmark_group("model_stages");
    let profile = high_risk_profile().with_bmi(34.3);

    let cardiovascular = CardiovascularRiskPredictor::new();
    group.bench_function("cardiovascular_assess", |b| {
        b.iter(|| cardiovascular.assess(black_box(&profile)));
    });

    let diabetes = DiabetesRiskPredictor::new();
    group.bench_function("diabetes_assess", |b| {
        b.iter(|| diabetes.assess(black_box(&profile)));
    });

    let calculator = HealthScoreCalculator::new();
    group.bench_function("health_score", |b| {
        b.iter(|| calculator.calculate_overall_score(black_box(&profile)));
    });

    group.finish();
}

/// Benchmark a full analysis for the two sample subjects
fn bench_analyze(c: &mut Criterion) {
    let mut group = c.benchmark_group("analyze");
    let system = HealthPredictionSystem::new();

    for (name, profile) in [
        ("low_risk", low_risk_profile()),
        ("high_risk", high_risk_profile()),
    ] {
        group.bench_with_input(BenchmarkId::new("analyze", name), &profile, |b, profile| {
            b.iter(|| system.analyze(black_box(profile)));
        });
    }

    group.finish();
}

/// Benchmark parallel batch analysis with varying batch sizes
#[allow(clippy::cast_possible_truncation)]
fn bench_analyze_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("analyze_batch");
    let system = HealthPredictionSystem::new();

    for count in BATCH_SIZES {
        let profiles = generate_profiles(count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(
            BenchmarkId::new("analyze_batch", count),
            &profiles,
            |b, profiles| {
                b.iter(|| system.analyze_batch(black_box(profiles)));
            },
        );
    }

    group.finish();
}

/// Benchmark report rendering
fn bench_report_formatting(c: &mut Criterion) {
    let mut group = c.benchmark_group("report_formatting");
    let system = HealthPredictionSystem::new();

    if let Ok(report) = system.analyze(&high_risk_profile()) {
        for format in [OutputFormat::Text, OutputFormat::Json] {
            group.bench_with_input(
                BenchmarkId::new("format_report", format),
                &report,
                |b, report| {
                    b.iter(|| format_report(black_box(report), format));
                },
            );
        }
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_model_stages,
    bench_analyze,
    bench_analyze_batch,
    bench_report_formatting,
);
criterion_main!(benches);
