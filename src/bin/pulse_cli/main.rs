// ABOUTME: Pulse CLI - command-line driver for the health analysis engine
// ABOUTME: Runs the built-in demo subjects or analyzes profiles read from JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pulse Health Intelligence
//!
//! Usage:
//! ```bash
//! # Analyze the two built-in sample subjects
//! pulse-cli demo
//!
//! # Same, as JSON reports
//! pulse-cli demo --format json
//!
//! # Analyze one profile (or an array of profiles) from a file
//! pulse-cli analyze subject.json
//!
//! # Read profiles from stdin
//! cat subjects.json | pulse-cli analyze - --format json
//!
//! # Print the effective configuration after environment overrides
//! pulse-cli config
//! ```

mod commands;
mod helpers;

use clap::{Parser, Subcommand};
use pulse_health::errors::{AppError, AppResult};
use pulse_health::formatters::OutputFormat;
use pulse_health::logging::LoggingConfig;
use pulse_health::HealthPredictionSystem;
use tracing::info;

type Result<T> = AppResult<T>;

#[derive(Parser)]
#[command(
    name = "pulse-cli",
    version,
    about = "Pulse health risk and wellness analysis",
    long_about = "Derives body metrics, estimates cardiovascular and diabetes risk, scores overall health and suggests actions for one or more subject profiles."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Analyze the built-in sample subjects
    Demo {
        /// Output format (text, json, toon)
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Analyze profiles from a JSON file, or stdin when the path is "-"
    Analyze {
        /// Path to a JSON profile or array of profiles
        input: String,

        /// Output format (text, json, toon)
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Print the effective intelligence configuration
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    LoggingConfig::from_env()
        .with_verbose(cli.verbose)
        .init()
        .map_err(|e| AppError::internal(format!("Failed to initialize logging: {e}")))?;

    info!("Pulse health analysis CLI");

    match cli.command {
        Command::Demo { format } => {
            let system = HealthPredictionSystem::new();
            commands::demo::run(&system, OutputFormat::from_str_param(&format))?;
        }
        Command::Analyze { input, format } => {
            let system = HealthPredictionSystem::new();
            commands::analyze::run(&system, &input, OutputFormat::from_str_param(&format))?;
        }
        Command::Config => {
            commands::config::show()?;
        }
    }

    Ok(())
}
