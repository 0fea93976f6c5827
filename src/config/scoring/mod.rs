// ABOUTME: Scoring configuration for the activity suitability engine
// ABOUTME: Aggregates per-activity thresholds, applies env and JSON overrides, and validates ladders
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Weer Activity Contributors

//! Scoring Configuration Module
//!
//! Every threshold the engine compares against lives in [`ScoringConfig`].
//! Defaults come from [`crate::constants::activity_thresholds`]; deployments
//! can adjust them in three layers, applied in order:
//!
//! 1. a JSON overlay file named by `WEER_SCORING_CONFIG_FILE`
//! 2. individual `WEER_SCORING_*` environment variables for the global rules
//! 3. validation, which rejects ladders whose tiers are out of order
//!
//! # Module Structure
//!
//! - `tier` - the `(limit, points)` pair every ladder is built from
//! - `global` - scale and cross-cutting rules
//! - `leisure` - bbq, walking, beach, gardening, stargazing, drone, commute
//! - `sport` - cycling, sailing, running, golf, courts, field sports

mod global;
mod leisure;
mod sport;
mod tier;

pub use global::{GlobalRulesConfig, ScaleConfig};
pub use leisure::{
    BbqThresholds, BeachThresholds, CommuteThresholds, DroneThresholds, GardeningThresholds,
    StargazingThresholds, WalkingThresholds,
};
pub use sport::{
    CourtThresholds, CyclingThresholds, FieldSportsThresholds, GolfThresholds,
    RunningThresholds, SailingThresholds,
};
pub use tier::Tier;

use crate::constants::env_config;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::env;
use std::fs;
use std::path::Path;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::{debug, warn};
use weer_core::ConfigError;

/// Global configuration singleton
static SCORING_CONFIG: OnceLock<ScoringConfig> = OnceLock::new();

/// Complete threshold table for the scoring engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScoringConfig {
    /// Start and override scores, thunderstorm codes
    pub scale: ScaleConfig,
    /// Sunshine-during-rain bonus and sub-zero penalty
    pub global: GlobalRulesConfig,
    /// Outdoor barbecue
    pub bbq: BbqThresholds,
    /// Cycling
    pub cycling: CyclingThresholds,
    /// Walking and hiking
    pub walking: WalkingThresholds,
    /// Sailing
    pub sailing: SailingThresholds,
    /// Running
    pub running: RunningThresholds,
    /// Beach day
    pub beach: BeachThresholds,
    /// Gardening
    pub gardening: GardeningThresholds,
    /// Stargazing
    pub stargazing: StargazingThresholds,
    /// Golf
    pub golf: GolfThresholds,
    /// Outdoor padel
    pub padel: CourtThresholds,
    /// Football, hockey and other pitch sports
    pub field_sports: FieldSportsThresholds,
    /// Outdoor tennis
    pub tennis: CourtThresholds,
    /// Drone flying
    pub drone: DroneThresholds,
    /// Staying at home
    pub home: CommuteThresholds,
    /// Going to work
    pub work: CommuteThresholds,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            scale: ScaleConfig::default(),
            global: GlobalRulesConfig::default(),
            bbq: BbqThresholds::default(),
            cycling: CyclingThresholds::default(),
            walking: WalkingThresholds::default(),
            sailing: SailingThresholds::default(),
            running: RunningThresholds::default(),
            beach: BeachThresholds::default(),
            gardening: GardeningThresholds::default(),
            stargazing: StargazingThresholds::default(),
            golf: GolfThresholds::default(),
            padel: CourtThresholds::padel(),
            field_sports: FieldSportsThresholds::default(),
            tennis: CourtThresholds::tennis(),
            drone: DroneThresholds::default(),
            home: CommuteThresholds::default(),
            work: CommuteThresholds::default(),
        }
    }
}

impl ScoringConfig {
    /// Get the global configuration instance
    ///
    /// Loads once from the environment; an invalid environment falls back to
    /// the built-in defaults with a warning.
    pub fn global() -> &'static Self {
        SCORING_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load scoring config: {e}, using defaults");
                Self::default()
            })
        })
    }

    /// Load configuration from the environment
    ///
    /// # Errors
    ///
    /// Returns an error if the overlay file cannot be read or parsed, an
    /// environment variable holds an invalid value, or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_with_overlay(None)
    }

    /// Load configuration from an explicit overlay file, then the environment
    ///
    /// `overlay` takes the place of `WEER_SCORING_CONFIG_FILE`; the scalar
    /// `WEER_SCORING_*` overrides still apply on top of it.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`]
    pub fn load_with_overlay(overlay: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match overlay {
            Some(path) => Self::from_file(path)?,
            None => match env::var(env_config::CONFIG_FILE) {
                Ok(path) => Self::from_file(path)?,
                Err(_) => Self::default(),
            },
        };

        config.apply_env_overrides()?;
        config.validate()?;

        Ok(config)
    }

    /// Overlay a JSON document on the defaults
    ///
    /// Only the keys present in `json` change; nested sections merge key by
    /// key, so `{"cycling": {"windy": {"limit": 20, "points": 2}}}` touches a
    /// single tier. Keys the configuration does not know are rejected.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is not valid JSON, does not match the
    /// configuration shape, or fails validation
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let overlay: Value = serde_json::from_str(json)
            .map_err(|e| ConfigError::Parse(format!("scoring config: {e}")))?;
        let mut merged = serde_json::to_value(Self::default())
            .map_err(|e| ConfigError::Parse(format!("scoring config: {e}")))?;
        merge_json(&mut merged, overlay);

        let config: Self = serde_json::from_value(merged)
            .map_err(|e| ConfigError::Parse(format!("scoring config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Overlay a JSON file on the defaults
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or [`Self::from_json_str`] fails
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        debug!(path = %path.display(), "Loading scoring config overlay");
        let json = fs::read_to_string(path)
            .map_err(|e| ConfigError::Parse(format!("cannot read {}: {e}", path.display())))?;
        Self::from_json_str(&json)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns the first ladder whose tiers are out of order or whose values
    /// fall outside their valid range
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.scale.validate()?;
        self.global.validate()?;
        self.bbq.validate()?;
        self.cycling.validate()?;
        self.walking.validate()?;
        self.sailing.validate()?;
        self.running.validate()?;
        self.beach.validate()?;
        self.gardening.validate()?;
        self.stargazing.validate()?;
        self.golf.validate()?;
        self.padel.validate("padel")?;
        self.field_sports.validate()?;
        self.tennis.validate("tennis")?;
        self.drone.validate()?;
        self.home.validate("home")?;
        self.work.validate("work")
    }

    /// Helper function to parse and apply an environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .trim()
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        }
        Ok(())
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        Self::apply_env_var(env_config::START_SCORE, &mut self.scale.start_score)?;
        Self::apply_env_var(env_config::OVERRIDE_SCORE, &mut self.scale.override_score)?;
        Self::apply_env_var(env_config::RAINY_MIN_MM, &mut self.global.rainy_min_mm)?;
        Self::apply_env_var(
            env_config::RAINY_PROB_PERCENT,
            &mut self.global.rainy_prob_percent,
        )?;
        Self::apply_env_var(
            env_config::SUN_BONUS_MIN_PERCENT,
            &mut self.global.sun_bonus_min_percent,
        )?;
        Self::apply_env_var(env_config::SUB_ZERO_BELOW_C, &mut self.global.sub_zero.limit)?;
        Self::apply_env_var(env_config::SUB_ZERO_PENALTY, &mut self.global.sub_zero.points)?;
        Ok(())
    }
}

/// Recursively overlay `overlay` onto `base`; objects merge, everything else replaces
fn merge_json(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Object(base_map), Value::Object(overlay_map)) => {
            for (key, value) in overlay_map {
                merge_json(base_map.entry(key).or_insert(Value::Null), value);
            }
        }
        (slot, value) => *slot = value,
    }
}
