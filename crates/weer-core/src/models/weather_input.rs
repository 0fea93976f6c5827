// ABOUTME: Normalized weather metrics for a single activity-period evaluation
// ABOUTME: Carries required forecast aggregates plus optional humidity, soil, geomagnetic and moon data
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Weer Activity Contributors

use serde::{Deserialize, Serialize};

/// Sun chance used when the source has no sunshine duration
const DEFAULT_SUN_CHANCE_PERCENT: f64 = 50.0;

/// Weather metrics for one period, already aggregated by the caller.
///
/// Units are fixed: degrees Celsius, km/h, millimetres, percent and metres.
/// The optional fields are genuinely optional: a missing value skips the rule
/// that depends on it and is never read as zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityWeatherInput {
    /// Apparent temperature for the period (°C)
    pub temp_feels_like: f64,
    /// Sustained wind speed (km/h)
    pub wind_kmh: f64,
    /// Peak gust speed (km/h)
    pub gusts_kmh: f64,
    /// Accumulated precipitation for the period (mm)
    pub precip_mm: f64,
    /// Probability of precipitation (0-100)
    pub precip_prob: f64,
    /// WMO weather code for the period
    pub weather_code: i32,
    /// Share of possible sunshine realized (0-100)
    pub sun_chance: f64,
    /// Cloud cover (0-100)
    pub cloud_cover: f64,
    /// Visibility (m)
    pub visibility: f64,
    /// Relative humidity (0-100)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub humidity: Option<f64>,
    /// Precipitation over the previous 24 hours (mm)
    #[serde(default, rename = "precip24h", skip_serializing_if = "Option::is_none")]
    pub precip_24h: Option<f64>,
    /// Planetary K-index (0-9)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kp_index: Option<f64>,
    /// Moon phase label as delivered by the astronomy source
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub moon_phase_text: Option<String>,
}

impl ActivityWeatherInput {
    /// WMO codes reporting a thunderstorm (slight/moderate, with hail, heavy hail)
    pub const THUNDERSTORM_CODES: [i32; 3] = [95, 96, 99];

    /// Set relative humidity
    #[must_use]
    pub fn with_humidity(mut self, humidity: f64) -> Self {
        self.humidity = Some(humidity);
        self
    }

    /// Set precipitation over the previous 24 hours
    #[must_use]
    pub fn with_precip_24h(mut self, precip_24h: f64) -> Self {
        self.precip_24h = Some(precip_24h);
        self
    }

    /// Set planetary K-index
    #[must_use]
    pub fn with_kp_index(mut self, kp_index: f64) -> Self {
        self.kp_index = Some(kp_index);
        self
    }

    /// Set moon phase label
    #[must_use]
    pub fn with_moon_phase(mut self, moon_phase_text: impl Into<String>) -> Self {
        self.moon_phase_text = Some(moon_phase_text.into());
        self
    }

    /// Whether any measured value, required or optional, is NaN
    ///
    /// Infinite values are kept: they still cross the most severe tier.
    #[must_use]
    pub fn has_nan(&self) -> bool {
        [
            self.temp_feels_like,
            self.wind_kmh,
            self.gusts_kmh,
            self.precip_mm,
            self.precip_prob,
            self.sun_chance,
            self.cloud_cover,
            self.visibility,
        ]
        .into_iter()
        .chain(self.humidity)
        .chain(self.precip_24h)
        .chain(self.kp_index)
        .any(f64::is_nan)
    }

    /// Whether the weather code reports a thunderstorm
    #[must_use]
    pub fn is_thunderstorm(&self) -> bool {
        Self::THUNDERSTORM_CODES.contains(&self.weather_code)
    }
}

/// Derive the sun chance percentage from sunshine and daylight durations.
///
/// Falls back to 50% when either duration is unknown or daylight is zero,
/// and clamps the ratio to 0-100.
#[must_use]
pub fn sun_chance_from_durations(
    sunshine_seconds: Option<f64>,
    daylight_seconds: Option<f64>,
) -> f64 {
    match (sunshine_seconds, daylight_seconds) {
        (Some(sunshine), Some(daylight)) if daylight > 0.0 => {
            (sunshine / daylight * 100.0).clamp(0.0, 100.0)
        }
        _ => DEFAULT_SUN_CHANCE_PERCENT,
    }
}
