// ABOUTME: Output format abstraction for rendering analysis reports
// ABOUTME: Supports a human-readable text layout, JSON, and TOON (token-efficient for LLMs)
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pulse Health Intelligence

//! Report Output Formats
//!
//! ## Supported Formats
//!
//! - **Text**: Default format, sectioned summary for terminals
//! - **JSON**: Pretty-printed serialized report
//! - **TOON**: Token-Oriented Object Notation, available with the `toon` feature
//!
//! Reports keep unrounded values; rounding happens only here. Risk percentages and
//! BMI are shown to one decimal, energy figures as whole calories.

#[cfg(feature = "toon")]
use pulse_core::errors::AppError;
use pulse_core::errors::AppResult;
use pulse_core::models::AnalysisReport;
use serde::Serialize;
use std::fmt::{self, Write};

const RULE_WIDTH: usize = 80;

/// Output serialization format selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Sectioned plain text (default)
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
    /// TOON format - Token-Oriented Object Notation for LLM efficiency
    #[cfg(feature = "toon")]
    Toon,
}

impl OutputFormat {
    /// Parse format from string parameter (case-insensitive)
    /// Returns `Text` for unrecognized values
    #[must_use]
    pub fn from_str_param(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => Self::Json,
            #[cfg(feature = "toon")]
            "toon" => Self::Toon,
            _ => Self::Text,
        }
    }

    /// Get the format name as a string
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Json => "json",
            #[cfg(feature = "toon")]
            Self::Toon => "toon",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Render one report in the requested format
///
/// # Errors
///
/// Returns a serialization error if JSON or TOON encoding fails
pub fn format_report(report: &AnalysisReport, format: OutputFormat) -> AppResult<String> {
    match format {
        OutputFormat::Text => Ok(render_text(report)),
        OutputFormat::Json => format_structured(report, format),
        #[cfg(feature = "toon")]
        OutputFormat::Toon => format_structured(report, format),
    }
}

/// Serialize arbitrary data in a structured format
///
/// Text has no layout for arbitrary data, so it falls back to pretty JSON.
///
/// # Errors
///
/// Returns a serialization error if JSON or TOON encoding fails
pub fn format_structured<T: Serialize + ?Sized>(
    data: &T,
    format: OutputFormat,
) -> AppResult<String> {
    match format {
        OutputFormat::Text | OutputFormat::Json => Ok(serde_json::to_string_pretty(data)?),
        #[cfg(feature = "toon")]
        OutputFormat::Toon => encode_toon(data),
    }
}

#[cfg(feature = "toon")]
fn encode_toon<T: Serialize + ?Sized>(data: &T) -> AppResult<String> {
    let value = serde_json::to_value(data)?;
    let options = toon_format::EncodeOptions::default();
    toon_format::encode(&value, &options)
        .map_err(|e| AppError::internal(format!("TOON encoding failed: {e}")))
}

fn render_text(report: &AnalysisReport) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail
    let _ = write_text(&mut out, report);
    out
}

fn write_text(out: &mut String, report: &AnalysisReport) -> fmt::Result {
    let rule = "=".repeat(RULE_WIDTH);
    let metrics = &report.derived_metrics;
    let profile = &report.profile;

    writeln!(out, "{rule}")?;
    writeln!(out, "HEALTH ANALYSIS REPORT {}", report.report_id)?;
    writeln!(
        out,
        "Generated: {}",
        report.timestamp.format("%Y-%m-%d %H:%M:%S UTC")
    )?;
    writeln!(out, "{rule}")?;

    writeln!(out, "\nPROFILE:")?;
    if let Some(age) = profile.age {
        writeln!(out, "   Age: {age} years")?;
    }
    if let Some(gender) = profile.gender {
        writeln!(out, "   Gender: {}", title_case(gender.as_str()))?;
    }
    writeln!(out, "   BMI: {:.1}", metrics.bmi)?;
    writeln!(out, "   BMR: {:.0} cal/day", metrics.bmr)?;
    writeln!(out, "   TDEE: {:.0} cal/day", metrics.tdee)?;
    if let Some(body_fat) = metrics.body_fat_percentage {
        writeln!(out, "   Body Fat: {body_fat:.1}%")?;
    }

    let score = &report.health_score;
    writeln!(out, "\nOVERALL HEALTH SCORE: {}/100", score.overall_score)?;
    writeln!(out, "   Category: {}", score.category.name)?;
    writeln!(out, "\n   Dimension Breakdown:")?;
    for (dimension, value) in score.dimension_scores.iter() {
        writeln!(out, "   - {}: {value:.0}/100", dimension.display_name())?;
    }

    let cardiovascular = &report.risk_predictions.cardiovascular;
    writeln!(out, "\nCARDIOVASCULAR RISK:")?;
    writeln!(out, "   Risk Score: {:.1}%", cardiovascular.risk_percentage)?;
    writeln!(out, "   Risk Level: {}", cardiovascular.risk_level)?;
    if !cardiovascular.contributing_factors.is_empty() {
        writeln!(out, "   Top Contributing Factors:")?;
        for factor in &cardiovascular.contributing_factors {
            writeln!(out, "   - {}: {:.1}% impact", factor.name, factor.impact)?;
        }
    }

    let diabetes = &report.risk_predictions.diabetes;
    writeln!(out, "\nDIABETES RISK:")?;
    writeln!(out, "   Risk Score: {:.1}%", diabetes.risk_percentage)?;
    writeln!(out, "   Risk Level: {}", diabetes.risk_level)?;

    writeln!(out, "\nRECOMMENDATIONS:")?;
    if report.recommendations.is_empty() {
        writeln!(out, "   None - keep up the current routine")?;
    }
    for recommendation in &report.recommendations {
        writeln!(
            out,
            "   [{}] {}: {}",
            recommendation.priority, recommendation.category, recommendation.action
        )?;
    }

    Ok(())
}

fn title_case(s: &str) -> String {
    let mut chars = s.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_param_falls_back_to_text() {
        assert_eq!(OutputFormat::from_str_param("JSON"), OutputFormat::Json);
        assert_eq!(OutputFormat::from_str_param("text"), OutputFormat::Text);
        assert_eq!(OutputFormat::from_str_param("yaml"), OutputFormat::Text);
        assert_eq!(OutputFormat::Json.to_string(), "json");
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("female"), "Female");
        assert_eq!(title_case(""), "");
    }
}
