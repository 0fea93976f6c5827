// ABOUTME: Core library entry point for the weer activity suitability engine
// ABOUTME: Exposes weather input, activity catalog, score and error types shared across crates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Weer Activity Contributors

#![deny(unsafe_code)]

//! # Weer Core
//!
//! Foundation types for the activity suitability engine. Nothing in this crate
//! performs scoring; it only defines the values that flow in and out of it:
//!
//! - [`ActivityWeatherInput`]: normalized per-period weather metrics
//! - [`ActivityKind`]: the closed catalog of scored activities
//! - [`ActivityScore`]: the clamped 1-10 result with stars and reasons
//! - [`ReasonId`]: language-neutral identifiers for every rule label
//! - [`ConfigError`]: threshold configuration failures

/// Configuration error types
pub mod errors;

/// Value types consumed and produced by the scoring engine
pub mod models;

pub use errors::ConfigError;
pub use models::{
    clamp_score, sun_chance_from_durations, ActivityKind, ActivityScore, ActivityWeatherInput,
    ParseActivityKindError, ReasonId, MAX_SCORE, MIN_SCORE,
};
