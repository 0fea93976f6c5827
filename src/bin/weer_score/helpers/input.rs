// ABOUTME: Input helpers for weer-score
// ABOUTME: Reads JSON documents from files or stdin and parses activity tags
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Weer Activity Contributors

use serde::de::DeserializeOwned;
use std::fs;
use std::io::{self, Read};
use std::path::Path;
use tracing::debug;
use weer_activity_score::errors::{AppError, AppResult, ErrorCode};
use weer_activity_score::ActivityKind;

/// Read and parse a JSON document from `path`, or stdin for `None` and `-`
pub fn read_json<T: DeserializeOwned>(path: Option<&Path>) -> AppResult<T> {
    let raw = match path {
        Some(path) if path != Path::new("-") => {
            debug!(path = %path.display(), "Reading input file");
            fs::read_to_string(path).map_err(|e| {
                AppError::new(
                    ErrorCode::InputUnreadable,
                    format!("cannot read {}", path.display()),
                )
                .with_source(e)
            })?
        }
        _ => {
            debug!("Reading input from stdin");
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };
    Ok(serde_json::from_str(&raw)?)
}

/// Parse activity tags, or the full catalog when none are given
pub fn parse_activities(tags: &[String]) -> AppResult<Vec<ActivityKind>> {
    if tags.is_empty() {
        return Ok(ActivityKind::ALL.to_vec());
    }
    tags.iter()
        .map(|tag| tag.parse::<ActivityKind>().map_err(AppError::from))
        .collect()
}
