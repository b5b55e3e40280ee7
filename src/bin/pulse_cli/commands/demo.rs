// ABOUTME: Demo command for pulse-cli
// ABOUTME: Analyzes the built-in low-risk and high-risk sample subjects
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pulse Health Intelligence

use pulse_health::errors::AppResult;
use pulse_health::formatters::{format_report, format_structured, OutputFormat};
use pulse_health::samples::demo_subjects;
use pulse_health::HealthPredictionSystem;
use tracing::debug;

use crate::helpers::display::{display_demo_footer, display_demo_header, display_subject_banner};

type Result<T> = AppResult<T>;

/// Analyze and print both demo subjects
pub fn run(system: &HealthPredictionSystem, format: OutputFormat) -> Result<()> {
    let subjects = demo_subjects();
    debug!(count = subjects.len(), %format, "Running demo analysis");

    let mut reports = Vec::with_capacity(subjects.len());
    for subject in &subjects {
        reports.push(system.analyze(&subject.profile)?);
    }

    if format == OutputFormat::Text {
        display_demo_header();
        for (subject, report) in subjects.iter().zip(&reports) {
            display_subject_banner(subject.name);
            println!("{}", format_report(report, format)?);
        }
        display_demo_footer();
    } else {
        println!("{}", format_structured(&reports, format)?);
    }

    Ok(())
}
