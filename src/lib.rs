// ABOUTME: Main library entry point for the weer activity suitability scoring engine
// ABOUTME: Scores outdoor activities from normalized weather metrics with localized reasons
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Weer Activity Contributors

#![deny(unsafe_code)]

//! # Weer Activity Score
//!
//! Deterministic 1-10 suitability scores for outdoor activities, computed
//! from one period of already aggregated weather.
//!
//! ## Features
//!
//! - **Fifteen activities**: each with its own rule ladder
//! - **Global rules**: sunshine between showers and feels-like sub-zero
//! - **Override rules**: thunder or rain that makes an activity unsafe pins the score to 1
//! - **Localized reasons**: built-in English, Dutch and German labels or any resolver
//! - **Configurable thresholds**: JSON overlays and `WEER_SCORING_*` environment overrides
//! - **Forecast batches**: parallel scoring and per-day ranking
//!
//! ## Example Usage
//!
//! ```rust
//! use weer_activity_score::{intelligence::score, ActivityKind, ActivityWeatherInput};
//!
//! let input = ActivityWeatherInput {
//!     temp_feels_like: 22.0,
//!     wind_kmh: 5.0,
//!     gusts_kmh: 10.0,
//!     precip_mm: 0.0,
//!     precip_prob: 0.0,
//!     weather_code: 0,
//!     sun_chance: 15.0,
//!     cloud_cover: 0.0,
//!     visibility: 30_000.0,
//!     humidity: None,
//!     precip_24h: None,
//!     kp_index: None,
//!     moon_phase_text: None,
//! };
//!
//! let result = score(&input, ActivityKind::Bbq);
//! assert_eq!(result.score10, 10);
//! assert_eq!(result.text, "Perfect conditions");
//! ```

/// Scoring threshold configuration
pub mod config;

/// Named threshold constants and environment variable names
pub mod constants;

/// Error codes and the application error type
pub mod errors;

/// Scoring engine, reason labels and forecast batches
pub mod intelligence;

/// Structured logging setup
pub mod logging;

pub use weer_core::{
    clamp_score, sun_chance_from_durations, ActivityKind, ActivityScore, ActivityWeatherInput,
    ConfigError, ParseActivityKindError, ReasonId, MAX_SCORE, MIN_SCORE,
};
