// ABOUTME: Config command for pulse-cli
// ABOUTME: Loads the intelligence configuration with environment overrides and prints it
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pulse Health Intelligence

use pulse_health::errors::AppResult;
use pulse_health::IntelligenceConfig;

type Result<T> = AppResult<T>;

/// Print the effective configuration as JSON
///
/// Unlike the analysis commands, which fall back to defaults, an invalid
/// override is reported as an error here.
pub fn show() -> Result<()> {
    let config = IntelligenceConfig::load()?;

    println!("{}", serde_json::to_string_pretty(&config)?);
    Ok(())
}
