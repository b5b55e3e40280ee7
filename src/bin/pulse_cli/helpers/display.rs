// ABOUTME: Output formatting helpers for pulse-cli
// ABOUTME: Banners around demo reports and notices for rejected profiles
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pulse Health Intelligence

use pulse_health::errors::AppError;

const RULE_WIDTH: usize = 80;

/// Title banner printed before the demo subjects
pub fn display_demo_header() {
    println!("{}", "=".repeat(RULE_WIDTH));
    println!("PULSE HEALTH ANALYSIS - DEMONSTRATION");
    println!("{}", "=".repeat(RULE_WIDTH));
}

/// Name of the subject whose report follows
pub fn display_subject_banner(name: &str) {
    println!("\nANALYSIS: {name}");
}

/// Closing notes printed after the demo subjects
pub fn display_demo_footer() {
    println!("{}", "=".repeat(RULE_WIDTH));
    println!("DEMONSTRATION COMPLETE");
    println!("{}", "=".repeat(RULE_WIDTH));
    println!("\nModels used:");
    println!("- Logistic regression risk models for cardiovascular disease and type 2 diabetes");
    println!("- Feature normalization and rule-based dimension scoring");
    println!("- Weighted aggregation into a composite health score");
    println!("- Mifflin-St Jeor BMR and the US Navy body fat method");
}

/// Notice for a profile that could not be analyzed
pub fn display_rejected_profile(index: usize, error: &AppError) {
    println!("\nProfile #{index} rejected: {}", error.message);
    println!("   Code: {:?}", error.code);
    if !error.details.is_null() {
        println!("   Details: {}", error.details);
    }
}
