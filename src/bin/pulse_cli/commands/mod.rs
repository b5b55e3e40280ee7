// ABOUTME: Re-exports command modules for pulse-cli
// ABOUTME: Provides access to the demo, analyze, and config commands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pulse Health Intelligence

pub mod analyze;
pub mod config;
pub mod demo;
