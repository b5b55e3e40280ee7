// ABOUTME: Risk stratification thresholds mapping a risk percentage onto five bands
// ABOUTME: Shared by the cardiovascular and diabetes assessments
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pulse Health Intelligence

//! Risk level bands
//!
//! Bounds are exclusive upper limits; anything at or above the last bound is `High`.

use crate::config::intelligence::error::ConfigError;
use pulse_core::models::RiskLevel;
use serde::{Deserialize, Serialize};

/// Upper bounds (exclusive) of the risk bands, in percent
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskLevelThresholds {
    /// `Low` below this value
    pub low_max: f64,
    /// `Low-Moderate` below this value
    pub low_moderate_max: f64,
    /// `Moderate` below this value
    pub moderate_max: f64,
    /// `Moderate-High` below this value; `High` otherwise
    pub moderate_high_max: f64,
}

impl Default for RiskLevelThresholds {
    fn default() -> Self {
        Self {
            low_max: 15.0,
            low_moderate_max: 30.0,
            moderate_max: 50.0,
            moderate_high_max: 70.0,
        }
    }
}

impl RiskLevelThresholds {
    /// Band of a risk percentage
    #[must_use]
    pub fn classify(&self, risk: f64) -> RiskLevel {
        if risk < self.low_max {
            RiskLevel::Low
        } else if risk < self.low_moderate_max {
            RiskLevel::LowModerate
        } else if risk < self.moderate_max {
            RiskLevel::Moderate
        } else if risk < self.moderate_high_max {
            RiskLevel::ModerateHigh
        } else {
            RiskLevel::High
        }
    }

    /// Check that band bounds ascend strictly within (0, 100]
    ///
    /// # Errors
    ///
    /// Returns an error if the bounds are unordered or outside the percentage range
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.low_max < self.low_moderate_max
            && self.low_moderate_max < self.moderate_max
            && self.moderate_max < self.moderate_high_max)
        {
            return Err(ConfigError::InvalidRange(
                "Risk level thresholds must be in ascending order",
            ));
        }
        if self.low_max <= 0.0 || self.moderate_high_max > 100.0 {
            return Err(ConfigError::ValueOutOfRange(
                "Risk level thresholds must lie within 0-100",
            ));
        }
        Ok(())
    }
}
