// ABOUTME: Threshold tier pairing a weather limit with the points it is worth
// ABOUTME: Provides ordering and sign checks used when validating scoring ladders
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Weer Activity Contributors

use serde::{Deserialize, Serialize};
use weer_core::ConfigError;

/// One rung of a ladder: the limit to cross and the points at stake
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Tier {
    /// Boundary value in the unit of the measured dimension
    pub limit: f64,
    /// Points subtracted (penalty) or added (bonus) when the boundary is crossed
    pub points: f64,
}

impl Tier {
    /// Create a tier
    #[must_use]
    pub const fn new(limit: f64, points: f64) -> Self {
        Self { limit, points }
    }
}

/// Require limits to strictly decrease, as in "above 49, above 38, above 28"
pub(crate) fn check_descending(ladder: &str, tiers: &[Tier]) -> Result<(), ConfigError> {
    check_points(ladder, tiers)?;
    if tiers.windows(2).all(|pair| pair[0].limit > pair[1].limit) {
        Ok(())
    } else {
        Err(ConfigError::InvalidRange(format!(
            "{ladder}: tier limits must strictly decrease from most to least severe"
        )))
    }
}

/// Require limits to strictly increase, as in "below 0, below 5, below 10"
pub(crate) fn check_ascending(ladder: &str, tiers: &[Tier]) -> Result<(), ConfigError> {
    check_points(ladder, tiers)?;
    if tiers.windows(2).all(|pair| pair[0].limit < pair[1].limit) {
        Ok(())
    } else {
        Err(ConfigError::InvalidRange(format!(
            "{ladder}: tier limits must strictly increase from most to least severe"
        )))
    }
}

/// Points are magnitudes; the rule decides the sign
pub(crate) fn check_points(ladder: &str, tiers: &[Tier]) -> Result<(), ConfigError> {
    if tiers
        .iter()
        .all(|tier| tier.points.is_finite() && tier.points >= 0.0 && tier.limit.is_finite())
    {
        Ok(())
    } else {
        Err(ConfigError::ValueOutOfRange(format!(
            "{ladder}: limits must be finite and points non-negative"
        )))
    }
}

/// Require a value to be a non-negative finite number
pub(crate) fn check_non_negative(name: &str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::ValueOutOfRange(format!(
            "{name} must be a non-negative number, got {value}"
        )))
    }
}

/// Require a percentage threshold in 0-100
pub(crate) fn check_percent(name: &str, value: f64) -> Result<(), ConfigError> {
    if (0.0..=100.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::ValueOutOfRange(format!(
            "{name} must be between 0 and 100, got {value}"
        )))
    }
}
