// ABOUTME: Configuration management module for the activity scoring engine
// ABOUTME: Exposes the scoring threshold tables and a startup summary logger
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Weer Activity Contributors
//! Configuration module for the weer activity scoring engine
//!
//! - **Scoring**: per-activity thresholds, global rules, env and JSON overrides

use tracing::{debug, info};

/// Scoring thresholds and cross-cutting rule configuration
pub mod scoring;

pub use scoring::ScoringConfig;

/// Log the effective scoring configuration at startup
pub fn log_scoring_summary(config: &ScoringConfig) {
    info!(
        start_score = config.scale.start_score,
        override_score = config.scale.override_score,
        rainy_min_mm = config.global.rainy_min_mm,
        rainy_prob_percent = config.global.rainy_prob_percent,
        sub_zero_below_c = config.global.sub_zero.limit,
        "Scoring configuration loaded"
    );
    debug!(
        sun_bonus_exempt = ?config.global.sun_bonus_exempt,
        sub_zero_exempt = ?config.global.sub_zero_exempt,
        thunderstorm_codes = ?config.scale.thunderstorm_codes,
        "Global rule exemptions"
    );
}
