// ABOUTME: Core types and constants for the Pulse health analysis platform
// ABOUTME: Foundation crate with error handling, subject/report models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pulse Health Intelligence

#![deny(unsafe_code)]

//! # Pulse Core
//!
//! Foundation crate providing shared types and constants for the Pulse health
//! risk and wellness engine. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Service names and environment variable keys
//! - **models**: Subject profile input record and analysis report output types

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (`SubjectProfile`, `AnalysisReport`, risk and score types)
pub mod models;
