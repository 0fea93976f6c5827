// ABOUTME: Output helpers for weer-score
// ABOUTME: Writes pretty JSON results to stdout and JSON error reports to stderr
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Weer Activity Contributors

use serde::Serialize;
use std::io::{self, Write};
use weer_activity_score::errors::{AppError, AppResult, ErrorCode, ErrorResponse};

/// Write `value` as pretty JSON followed by a newline
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> AppResult<()> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value)?;
    writeln!(stdout).map_err(|e| {
        AppError::new(ErrorCode::SerializationError, "cannot write output").with_source(e)
    })?;
    Ok(())
}

/// Report an error on stderr; falls back to plain text if serialization fails
pub fn print_error(response: &ErrorResponse) {
    match serde_json::to_string_pretty(response) {
        Ok(json) => eprintln!("{json}"),
        Err(_) => eprintln!("{}: {}", response.error.code.description(), response.error.message),
    }
}
