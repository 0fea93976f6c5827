// ABOUTME: Named constants used by the activity scoring engine
// ABOUTME: Every threshold and penalty lives here so configuration defaults and tests share one source
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Weer Activity Contributors

/// Per-activity thresholds and penalty points
pub mod activity_thresholds;

/// Environment variable names read by configuration loading
pub mod env_config {
    /// Optional JSON file overlaid on the default scoring configuration
    pub const CONFIG_FILE: &str = "WEER_SCORING_CONFIG_FILE";
    /// Score every evaluation starts from
    pub const START_SCORE: &str = "WEER_SCORING_START_SCORE";
    /// Score forced by override rules
    pub const OVERRIDE_SCORE: &str = "WEER_SCORING_OVERRIDE_SCORE";
    /// Precipitation above which a period counts as rainy
    pub const RAINY_MIN_MM: &str = "WEER_SCORING_RAINY_MIN_MM";
    /// Precipitation probability above which a period counts as rainy
    pub const RAINY_PROB_PERCENT: &str = "WEER_SCORING_RAINY_PROB_PERCENT";
    /// Minimum sun chance for the sunshine-during-rain bonus
    pub const SUN_BONUS_MIN_PERCENT: &str = "WEER_SCORING_SUN_BONUS_MIN_PERCENT";
    /// Temperature below which the sub-zero penalty applies
    pub const SUB_ZERO_BELOW_C: &str = "WEER_SCORING_SUB_ZERO_BELOW_C";
    /// Sub-zero penalty points
    pub const SUB_ZERO_PENALTY: &str = "WEER_SCORING_SUB_ZERO_PENALTY";
    /// Default locale for labels
    pub const LOCALE: &str = "WEER_LOCALE";
}
