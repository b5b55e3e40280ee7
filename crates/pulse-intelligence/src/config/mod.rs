// ABOUTME: Configuration module for pulse-intelligence crate
// ABOUTME: Re-exports intelligence configuration types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pulse Health Intelligence

/// Intelligence module configuration (model weights, defaults, thresholds)
pub mod intelligence;

pub use intelligence::IntelligenceConfig;
