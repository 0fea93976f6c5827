// ABOUTME: Core data models for activity suitability scoring
// ABOUTME: Re-exports weather input, activity kind, score result and reason identifiers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Weer Activity Contributors

//! # Data Models
//!
//! All models are plain values: created per evaluation, compared by value,
//! never shared mutably between calls.

mod activity_kind;
mod activity_score;
mod reason;
mod weather_input;

pub use activity_kind::{ActivityKind, ParseActivityKindError};
pub use activity_score::{clamp_score, ActivityScore, MAX_SCORE, MIN_SCORE};
pub use reason::ReasonId;
pub use weather_input::{sun_chance_from_durations, ActivityWeatherInput};
