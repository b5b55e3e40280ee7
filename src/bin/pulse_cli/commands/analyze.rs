// ABOUTME: Analyze command for pulse-cli
// ABOUTME: Reads profiles from a file or stdin, analyzes them in parallel and prints reports
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pulse Health Intelligence

use pulse_health::errors::{AppError, AppResult, ErrorResponse};
use pulse_health::formatters::{format_report, format_structured, OutputFormat};
use pulse_health::input::read_profiles;
use pulse_health::logging::AppLogger;
use pulse_health::models::AnalysisReport;
use pulse_health::HealthPredictionSystem;
use serde_json::Value;
use std::time::Instant;
use tracing::info;

use crate::helpers::display::display_rejected_profile;

type Result<T> = AppResult<T>;

/// Analyze every profile in `input` and print one report per profile
///
/// Profiles that fail to decode or to analyze are reported in place and do not
/// stop the others. The command fails afterwards if any profile was rejected.
pub fn run(system: &HealthPredictionSystem, input: &str, format: OutputFormat) -> Result<()> {
    let profiles = read_profiles(input)?;
    let total = profiles.len();
    info!(source = input, count = total, "Analyzing profiles");

    let started = Instant::now();
    let results = system.analyze_decoded_batch(profiles);
    let failed = results.iter().filter(|result| result.is_err()).count();
    AppLogger::log_batch_summary(results.len(), failed, started.elapsed().as_millis());

    if format == OutputFormat::Text {
        print_text(results)?;
    } else {
        print_structured(results, format)?;
    }

    if failed > 0 {
        return Err(AppError::invalid_input(format!(
            "{failed} of {total} profiles could not be analyzed"
        )));
    }

    Ok(())
}

fn print_text(results: Vec<AppResult<AnalysisReport>>) -> Result<()> {
    for (index, result) in results.into_iter().enumerate() {
        match result {
            Ok(report) => println!("{}", format_report(&report, OutputFormat::Text)?),
            Err(error) => {
                AppLogger::log_rejected_profile(index, &error);
                display_rejected_profile(index, &error);
            }
        }
    }
    Ok(())
}

fn print_structured(
    results: Vec<AppResult<AnalysisReport>>,
    format: OutputFormat,
) -> Result<()> {
    let single = results.len() == 1;
    let mut entries = Vec::with_capacity(results.len());

    for (index, result) in results.into_iter().enumerate() {
        let entry = match result {
            Ok(report) => serde_json::to_value(&report)?,
            Err(error) => {
                AppLogger::log_rejected_profile(index, &error);
                serde_json::to_value(ErrorResponse::from(error))?
            }
        };
        entries.push(entry);
    }

    let document = if single {
        entries.pop().unwrap_or(Value::Null)
    } else {
        Value::Array(entries)
    };
    println!("{}", format_structured(&document, format)?);
    Ok(())
}
