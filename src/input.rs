// ABOUTME: Profile input loading from JSON files or stdin
// ABOUTME: Accepts either a single profile object or an array of profiles
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pulse Health Intelligence

//! Profile input
//!
//! Input documents are JSON. A top-level object is one profile, a top-level array
//! is a batch. Field names follow [`SubjectProfile`], with the short aliases
//! (`height`, `weight`, `activity_level`) also accepted.

use pulse_core::errors::{AppError, AppResult, ErrorCode};
use pulse_core::models::SubjectProfile;
use serde_json::Value;
use std::fs;
use std::io::{self, Read};
use std::path::Path;
use tracing::debug;

/// Path value that selects standard input
pub const STDIN_PATH: &str = "-";

/// Outcome of decoding one element of an input document
pub type DecodedProfile = AppResult<SubjectProfile>;

/// Parse one profile or an array of profiles
///
/// Each element is decoded on its own, so a malformed entry is returned as an
/// `InvalidFormat` error in its position while the other entries still decode.
///
/// # Errors
///
/// Returns an `InvalidFormat` error if the document is not valid JSON, or if the
/// top level is neither an object nor an array
pub fn parse_profiles(document: &str) -> AppResult<Vec<DecodedProfile>> {
    let value: Value = serde_json::from_str(document)?;

    match value {
        Value::Array(entries) => Ok(entries.into_iter().map(decode_profile).collect()),
        Value::Object(_) => Ok(vec![decode_profile(value)]),
        other => Err(AppError::new(
            ErrorCode::InvalidFormat,
            format!("Expected a profile object or an array of profiles, found {other}"),
        )),
    }
}

fn decode_profile(value: Value) -> DecodedProfile {
    Ok(serde_json::from_value(value)?)
}

/// Read and parse profiles from a file path, or from stdin when the path is `-`
///
/// # Errors
///
/// Returns an `IoError` if the input cannot be read, or a document-level parse
/// error as described in [`parse_profiles`]
pub fn read_profiles(path: &str) -> AppResult<Vec<DecodedProfile>> {
    let document = if path == STDIN_PATH {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else {
        fs::read_to_string(Path::new(path))?
    };

    let profiles = parse_profiles(&document)?;
    let malformed = profiles.iter().filter(|decoded| decoded.is_err()).count();
    debug!(source = path, count = profiles.len(), malformed, "Loaded subject profiles");
    Ok(profiles)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_object_is_one_profile() {
        let profiles = parse_profiles(r#"{"age": 30, "gender": "female"}"#).unwrap();
        assert_eq!(profiles.len(), 1);
        assert_eq!(profiles[0].as_ref().unwrap().age, Some(30.0));
    }

    #[test]
    fn test_scalar_document_rejected() {
        let error = parse_profiles("42").unwrap_err();
        assert_eq!(error.code, ErrorCode::InvalidFormat);
    }

    #[test]
    fn test_malformed_element_does_not_hide_the_others() {
        let profiles = parse_profiles(
            r#"[{"age": 41, "gender": "male"}, {"age": "x"}, {"age": 29.5, "gender": "female"}]"#,
        )
        .unwrap();

        assert_eq!(profiles.len(), 3);
        assert!(profiles[0].is_ok());
        assert_eq!(
            profiles[1].as_ref().unwrap_err().code,
            ErrorCode::InvalidFormat
        );
        assert_eq!(profiles[2].as_ref().unwrap().age, Some(29.5));
    }
}
