// ABOUTME: Threshold configuration for leisure activities and the commute
// ABOUTME: Covers bbq, walking, beach, gardening, stargazing, drone flying, home and work
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Weer Activity Contributors

use super::tier::{check_ascending, check_descending, check_non_negative, check_percent};
use super::Tier;
use crate::constants::activity_thresholds::{
    bbq, beach, commute, drone, gardening, stargazing, walking,
};
use serde::{Deserialize, Serialize};
use weer_core::ConfigError;

/// Outdoor barbecue thresholds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BbqThresholds {
    /// Precipitation above which the barbecue is rained out (mm)
    pub rain_min_mm: f64,
    /// Rain probability above which the barbecue is rained out (%)
    pub rain_prob_percent: f64,
    /// Rain penalty
    pub rain_penalty: f64,
    /// Below this it is too cold
    pub too_cold: Tier,
    /// Below this it is cold
    pub cold: Tier,
    /// Below this it is chilly
    pub chilly: Tier,
    /// Above this it is too hot
    pub too_hot: Tier,
    /// Strong wind
    pub strong_wind: Tier,
    /// Windy
    pub windy: Tier,
    /// Breezy
    pub breezy: Tier,
}

impl Default for BbqThresholds {
    fn default() -> Self {
        Self {
            rain_min_mm: bbq::RAIN_MIN_MM,
            rain_prob_percent: bbq::RAIN_PROB_PERCENT,
            rain_penalty: bbq::RAIN_PENALTY,
            too_cold: Tier::new(bbq::TOO_COLD_C, bbq::TOO_COLD_PENALTY),
            cold: Tier::new(bbq::COLD_C, bbq::COLD_PENALTY),
            chilly: Tier::new(bbq::CHILLY_C, bbq::CHILLY_PENALTY),
            too_hot: Tier::new(bbq::TOO_HOT_C, bbq::TOO_HOT_PENALTY),
            strong_wind: Tier::new(bbq::STRONG_WIND_KMH, bbq::STRONG_WIND_PENALTY),
            windy: Tier::new(bbq::WINDY_KMH, bbq::WINDY_PENALTY),
            breezy: Tier::new(bbq::BREEZY_KMH, bbq::BREEZY_PENALTY),
        }
    }
}

impl BbqThresholds {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        check_non_negative("bbq.rain_min_mm", self.rain_min_mm)?;
        check_percent("bbq.rain_prob_percent", self.rain_prob_percent)?;
        check_non_negative("bbq.rain_penalty", self.rain_penalty)?;
        check_ascending("bbq.cold", &[self.too_cold, self.cold, self.chilly])?;
        check_descending("bbq.heat", &[self.too_hot])?;
        if self.chilly.limit >= self.too_hot.limit {
            return Err(ConfigError::InvalidRange(
                "bbq: chilly limit must be below too_hot limit".into(),
            ));
        }
        check_descending("bbq.wind", &[self.strong_wind, self.windy, self.breezy])
    }
}

/// Walking and hiking thresholds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WalkingThresholds {
    /// Rain probability above which a shower is likely (%)
    pub rain_chance: Tier,
    /// Precipitation above which the walk gets wet (mm)
    pub rain: Tier,
    /// Storm
    pub storm: Tier,
    /// Very strong wind
    pub very_strong_wind: Tier,
    /// Strong wind
    pub strong_wind: Tier,
    /// Windy
    pub windy: Tier,
    /// Freezing
    pub freezing: Tier,
    /// Cold
    pub cold: Tier,
    /// Chilly
    pub chilly: Tier,
    /// Too hot
    pub too_hot: Tier,
    /// Hot
    pub hot: Tier,
    /// Sun chance below which the walk is dull (%)
    pub little_sun: Tier,
    /// Sun chance above which a non-perfect walk gains points (%)
    pub sunny_bonus: Tier,
}

impl Default for WalkingThresholds {
    fn default() -> Self {
        Self {
            rain_chance: Tier::new(walking::RAIN_CHANCE_PERCENT, walking::RAIN_CHANCE_PENALTY),
            rain: Tier::new(walking::RAIN_MM, walking::RAIN_PENALTY),
            storm: Tier::new(walking::STORM_KMH, walking::STORM_PENALTY),
            very_strong_wind: Tier::new(
                walking::VERY_STRONG_WIND_KMH,
                walking::VERY_STRONG_WIND_PENALTY,
            ),
            strong_wind: Tier::new(walking::STRONG_WIND_KMH, walking::STRONG_WIND_PENALTY),
            windy: Tier::new(walking::WINDY_KMH, walking::WINDY_PENALTY),
            freezing: Tier::new(walking::FREEZING_C, walking::FREEZING_PENALTY),
            cold: Tier::new(walking::COLD_C, walking::COLD_PENALTY),
            chilly: Tier::new(walking::CHILLY_C, walking::CHILLY_PENALTY),
            too_hot: Tier::new(walking::TOO_HOT_C, walking::TOO_HOT_PENALTY),
            hot: Tier::new(walking::HOT_C, walking::HOT_PENALTY),
            little_sun: Tier::new(walking::LITTLE_SUN_PERCENT, walking::LITTLE_SUN_PENALTY),
            sunny_bonus: Tier::new(walking::SUNNY_PERCENT, walking::SUNNY_BONUS),
        }
    }
}

impl WalkingThresholds {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        check_percent("walking.rain_chance", self.rain_chance.limit)?;
        check_descending("walking.rain_chance", &[self.rain_chance])?;
        check_descending("walking.rain", &[self.rain])?;
        check_descending(
            "walking.wind",
            &[self.storm, self.very_strong_wind, self.strong_wind, self.windy],
        )?;
        check_ascending("walking.cold", &[self.freezing, self.cold, self.chilly])?;
        check_descending("walking.heat", &[self.too_hot, self.hot])?;
        check_percent("walking.little_sun", self.little_sun.limit)?;
        check_percent("walking.sunny_bonus", self.sunny_bonus.limit)?;
        check_ascending("walking.sun", &[self.little_sun, self.sunny_bonus])
    }
}

/// Beach day thresholds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BeachThresholds {
    /// Too cold
    pub too_cold: Tier,
    /// Cold
    pub cold: Tier,
    /// Chilly
    pub chilly: Tier,
    /// Overcast (%)
    pub overcast: Tier,
    /// Cloudy (%)
    pub cloudy: Tier,
    /// Strong wind
    pub strong_wind: Tier,
    /// Rain probability (%)
    pub rain_chance: Tier,
}

impl Default for BeachThresholds {
    fn default() -> Self {
        Self {
            too_cold: Tier::new(beach::TOO_COLD_C, beach::TOO_COLD_PENALTY),
            cold: Tier::new(beach::COLD_C, beach::COLD_PENALTY),
            chilly: Tier::new(beach::CHILLY_C, beach::CHILLY_PENALTY),
            overcast: Tier::new(beach::OVERCAST_PERCENT, beach::OVERCAST_PENALTY),
            cloudy: Tier::new(beach::CLOUDY_PERCENT, beach::CLOUDY_PENALTY),
            strong_wind: Tier::new(beach::STRONG_WIND_KMH, beach::STRONG_WIND_PENALTY),
            rain_chance: Tier::new(beach::RAIN_CHANCE_PERCENT, beach::RAIN_CHANCE_PENALTY),
        }
    }
}

impl BeachThresholds {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        check_ascending("beach.cold", &[self.too_cold, self.cold, self.chilly])?;
        check_descending("beach.clouds", &[self.overcast, self.cloudy])?;
        check_percent("beach.overcast", self.overcast.limit)?;
        check_percent("beach.cloudy", self.cloudy.limit)?;
        check_descending("beach.wind", &[self.strong_wind])?;
        check_percent("beach.rain_chance", self.rain_chance.limit)?;
        check_descending("beach.rain_chance", &[self.rain_chance])
    }
}

/// Gardening thresholds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GardeningThresholds {
    /// Rain during the period (mm)
    pub rain: Tier,
    /// Rain over the previous day leaving the soil muddy (mm)
    pub muddy_soil: Tier,
    /// Frost
    pub frost: Tier,
    /// Cold
    pub cold: Tier,
    /// Chilly
    pub chilly: Tier,
    /// Too hot
    pub too_hot: Tier,
    /// Hot
    pub hot: Tier,
    /// Storm
    pub storm: Tier,
    /// Very strong wind
    pub very_strong_wind: Tier,
    /// Strong wind
    pub strong_wind: Tier,
}

impl Default for GardeningThresholds {
    fn default() -> Self {
        Self {
            rain: Tier::new(gardening::RAIN_MM, gardening::RAIN_PENALTY),
            muddy_soil: Tier::new(gardening::MUDDY_SOIL_MM, gardening::MUDDY_SOIL_PENALTY),
            frost: Tier::new(gardening::FROST_C, gardening::FROST_PENALTY),
            cold: Tier::new(gardening::COLD_C, gardening::COLD_PENALTY),
            chilly: Tier::new(gardening::CHILLY_C, gardening::CHILLY_PENALTY),
            too_hot: Tier::new(gardening::TOO_HOT_C, gardening::TOO_HOT_PENALTY),
            hot: Tier::new(gardening::HOT_C, gardening::HOT_PENALTY),
            storm: Tier::new(gardening::STORM_KMH, gardening::STORM_PENALTY),
            very_strong_wind: Tier::new(
                gardening::VERY_STRONG_WIND_KMH,
                gardening::VERY_STRONG_WIND_PENALTY,
            ),
            strong_wind: Tier::new(gardening::STRONG_WIND_KMH, gardening::STRONG_WIND_PENALTY),
        }
    }
}

impl GardeningThresholds {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        check_descending("gardening.rain", &[self.rain])?;
        check_descending("gardening.muddy_soil", &[self.muddy_soil])?;
        check_ascending("gardening.cold", &[self.frost, self.cold, self.chilly])?;
        check_descending("gardening.heat", &[self.too_hot, self.hot])?;
        check_descending(
            "gardening.wind",
            &[self.storm, self.very_strong_wind, self.strong_wind],
        )
    }
}

/// Stargazing thresholds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StargazingThresholds {
    /// Overcast (%)
    pub overcast: Tier,
    /// Mostly cloudy (%)
    pub mostly_cloudy: Tier,
    /// Cloudy (%)
    pub cloudy: Tier,
    /// Some clouds (%)
    pub some_clouds: Tier,
    /// Visibility below which the sky is hazy (m)
    pub poor_visibility: Tier,
    /// Freezing
    pub freezing: Tier,
    /// Cold
    pub cold: Tier,
    /// Chilly
    pub chilly: Tier,
    /// Strong wind
    pub strong_wind: Tier,
    /// Windy
    pub windy: Tier,
    /// New moon bonus
    pub new_moon_bonus: f64,
    /// Moon phase labels meaning new moon, compared case-insensitively
    pub new_moon_labels: Vec<String>,
}

impl Default for StargazingThresholds {
    fn default() -> Self {
        Self {
            overcast: Tier::new(stargazing::OVERCAST_PERCENT, stargazing::OVERCAST_PENALTY),
            mostly_cloudy: Tier::new(
                stargazing::MOSTLY_CLOUDY_PERCENT,
                stargazing::MOSTLY_CLOUDY_PENALTY,
            ),
            cloudy: Tier::new(stargazing::CLOUDY_PERCENT, stargazing::CLOUDY_PENALTY),
            some_clouds: Tier::new(stargazing::SOME_CLOUDS_PERCENT, stargazing::SOME_CLOUDS_PENALTY),
            poor_visibility: Tier::new(
                stargazing::POOR_VISIBILITY_M,
                stargazing::POOR_VISIBILITY_PENALTY,
            ),
            freezing: Tier::new(stargazing::FREEZING_C, stargazing::FREEZING_PENALTY),
            cold: Tier::new(stargazing::COLD_C, stargazing::COLD_PENALTY),
            chilly: Tier::new(stargazing::CHILLY_C, stargazing::CHILLY_PENALTY),
            strong_wind: Tier::new(stargazing::STRONG_WIND_KMH, stargazing::STRONG_WIND_PENALTY),
            windy: Tier::new(stargazing::WINDY_KMH, stargazing::WINDY_PENALTY),
            new_moon_bonus: stargazing::NEW_MOON_BONUS,
            new_moon_labels: stargazing::NEW_MOON_LABELS
                .iter()
                .map(|label| (*label).to_owned())
                .collect(),
        }
    }
}

impl StargazingThresholds {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        let clouds = [self.overcast, self.mostly_cloudy, self.cloudy, self.some_clouds];
        check_descending("stargazing.clouds", &clouds)?;
        for tier in clouds {
            check_percent("stargazing.clouds", tier.limit)?;
        }
        check_ascending("stargazing.visibility", &[self.poor_visibility])?;
        check_ascending("stargazing.cold", &[self.freezing, self.cold, self.chilly])?;
        check_descending("stargazing.wind", &[self.strong_wind, self.windy])?;
        check_non_negative("stargazing.new_moon_bonus", self.new_moon_bonus)
    }

    /// Whether a moon phase label denotes a new moon
    #[must_use]
    pub fn is_new_moon(&self, phase: &str) -> bool {
        let phase = phase.trim();
        self.new_moon_labels
            .iter()
            .any(|label| label.trim().eq_ignore_ascii_case(phase))
    }
}

/// Drone flying thresholds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DroneThresholds {
    /// Dangerous gusts
    pub dangerous_gusts: Tier,
    /// Strong gusts
    pub strong_gusts: Tier,
    /// Gusty
    pub gusty: Tier,
    /// Visibility below which line of sight is lost (m)
    pub poor_visibility: Tier,
    /// Batteries at risk below freezing
    pub battery_freezing: Tier,
    /// Batteries lose capacity
    pub battery_cold: Tier,
    /// K-index above which GPS degrades
    pub geomagnetic_storm: Tier,
}

impl Default for DroneThresholds {
    fn default() -> Self {
        Self {
            dangerous_gusts: Tier::new(drone::DANGEROUS_GUSTS_KMH, drone::DANGEROUS_GUSTS_PENALTY),
            strong_gusts: Tier::new(drone::STRONG_GUSTS_KMH, drone::STRONG_GUSTS_PENALTY),
            gusty: Tier::new(drone::GUSTY_KMH, drone::GUSTY_PENALTY),
            poor_visibility: Tier::new(drone::POOR_VISIBILITY_M, drone::POOR_VISIBILITY_PENALTY),
            battery_freezing: Tier::new(
                drone::BATTERY_FREEZING_C,
                drone::BATTERY_FREEZING_PENALTY,
            ),
            battery_cold: Tier::new(drone::BATTERY_COLD_C, drone::BATTERY_COLD_PENALTY),
            geomagnetic_storm: Tier::new(drone::GEOMAGNETIC_KP, drone::GEOMAGNETIC_PENALTY),
        }
    }
}

impl DroneThresholds {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        check_descending(
            "drone.gusts",
            &[self.dangerous_gusts, self.strong_gusts, self.gusty],
        )?;
        check_ascending("drone.visibility", &[self.poor_visibility])?;
        check_ascending("drone.battery", &[self.battery_freezing, self.battery_cold])?;
        if !(0.0..=9.0).contains(&self.geomagnetic_storm.limit) {
            return Err(ConfigError::ValueOutOfRange(
                "drone.geomagnetic_storm limit must be a K-index between 0 and 9".into(),
            ));
        }
        check_descending("drone.geomagnetic_storm", &[self.geomagnetic_storm])
    }
}

/// Commute thresholds used by the home and work activities
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CommuteThresholds {
    /// Rain on the way (mm)
    pub rain: Tier,
    /// Wind on the way (km/h)
    pub wind: Tier,
}

impl Default for CommuteThresholds {
    fn default() -> Self {
        Self {
            rain: Tier::new(commute::RAIN_MM, commute::RAIN_PENALTY),
            wind: Tier::new(commute::WIND_KMH, commute::WIND_PENALTY),
        }
    }
}

impl CommuteThresholds {
    pub(crate) fn validate(&self, name: &str) -> Result<(), ConfigError> {
        check_descending(&format!("{name}.rain"), &[self.rain])?;
        check_descending(&format!("{name}.wind"), &[self.wind])
    }
}
