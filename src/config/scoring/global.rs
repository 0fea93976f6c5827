// ABOUTME: Scale and cross-cutting rule configuration shared by every activity
// ABOUTME: Covers the starting score, override score, sunshine-during-rain bonus and sub-zero penalty
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Weer Activity Contributors

use super::tier::{check_descending, check_non_negative, check_percent};
use super::Tier;
use crate::constants::activity_thresholds::{global, scale};
use serde::{Deserialize, Serialize};
use weer_core::{ActivityKind, ActivityWeatherInput, ConfigError, MAX_SCORE, MIN_SCORE};

/// Where every evaluation starts and where overrides pin it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScaleConfig {
    /// Starting score before any rule fires
    pub start_score: f64,
    /// Score forced by override rules
    pub override_score: f64,
    /// WMO weather codes treated as thunderstorms
    pub thunderstorm_codes: Vec<i32>,
}

impl Default for ScaleConfig {
    fn default() -> Self {
        Self {
            start_score: scale::START_SCORE,
            override_score: scale::OVERRIDE_SCORE,
            thunderstorm_codes: ActivityWeatherInput::THUNDERSTORM_CODES.to_vec(),
        }
    }
}

/// Rules applied to every activity after its own ladder
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GlobalRulesConfig {
    /// Precipitation above which the period counts as rainy (mm)
    pub rainy_min_mm: f64,
    /// Precipitation probability above which the period counts as rainy (%)
    pub rainy_prob_percent: f64,
    /// Sun chance the sunshine bonus requires at minimum (%)
    pub sun_bonus_min_percent: f64,
    /// Sunshine-during-rain bonus tiers, highest sun chance first
    pub sun_bonus_tiers: Vec<Tier>,
    /// Activities that never receive the sunshine bonus
    pub sun_bonus_exempt: Vec<ActivityKind>,
    /// Feels-like temperature below which the sub-zero penalty applies
    pub sub_zero: Tier,
    /// Activities whose ladders already price in freezing temperatures
    pub sub_zero_exempt: Vec<ActivityKind>,
}

impl Default for GlobalRulesConfig {
    fn default() -> Self {
        Self {
            rainy_min_mm: global::RAINY_MIN_MM,
            rainy_prob_percent: global::RAINY_PROB_PERCENT,
            sun_bonus_min_percent: global::SUN_BONUS_MIN_PERCENT,
            sun_bonus_tiers: vec![
                Tier::new(global::SUN_BONUS_HIGH_PERCENT, global::SUN_BONUS_HIGH),
                Tier::new(global::SUN_BONUS_MEDIUM_PERCENT, global::SUN_BONUS_MEDIUM),
                Tier::new(global::SUN_BONUS_LOW_PERCENT, global::SUN_BONUS_LOW),
            ],
            sun_bonus_exempt: ActivityKind::ALL
                .into_iter()
                .filter(ActivityKind::is_indoor_leaning)
                .collect(),
            sub_zero: Tier::new(global::SUB_ZERO_BELOW_C, global::SUB_ZERO_PENALTY),
            sub_zero_exempt: ActivityKind::ALL
                .into_iter()
                .filter(ActivityKind::has_own_frost_tier)
                .collect(),
        }
    }
}

impl ScaleConfig {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        let (min, max) = (f64::from(MIN_SCORE), f64::from(MAX_SCORE));
        if !(min..=max).contains(&self.start_score) {
            return Err(ConfigError::ValueOutOfRange(format!(
                "start_score must be between {min} and {max}"
            )));
        }
        if !(min..=max).contains(&self.override_score) {
            return Err(ConfigError::ValueOutOfRange(format!(
                "override_score must be between {min} and {max}"
            )));
        }
        Ok(())
    }
}

impl GlobalRulesConfig {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        check_non_negative("global.rainy_min_mm", self.rainy_min_mm)?;
        check_percent("global.rainy_prob_percent", self.rainy_prob_percent)?;
        check_percent("global.sun_bonus_min_percent", self.sun_bonus_min_percent)?;
        check_descending("global.sun_bonus_tiers", &self.sun_bonus_tiers)?;
        for tier in &self.sun_bonus_tiers {
            check_percent("global.sun_bonus_tiers.limit", tier.limit)?;
        }
        check_non_negative("global.sub_zero.points", self.sub_zero.points)
    }
}
