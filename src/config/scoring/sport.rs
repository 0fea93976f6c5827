// ABOUTME: Threshold configuration for sport activities
// ABOUTME: Covers cycling, sailing, running, golf, court sports and field sports
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Weer Activity Contributors

use super::tier::{check_ascending, check_descending, check_non_negative, check_percent};
use super::Tier;
use crate::constants::activity_thresholds::{
    court, cycling, field_sports, golf, padel, running, sailing, tennis,
};
use serde::{Deserialize, Serialize};
use weer_core::ConfigError;

/// Cycling thresholds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CyclingThresholds {
    /// Storm
    pub storm: Tier,
    /// Very strong wind
    pub very_strong_wind: Tier,
    /// Strong wind
    pub strong_wind: Tier,
    /// Windy
    pub windy: Tier,
    /// Dangerous gusts
    pub dangerous_gusts: Tier,
    /// Strong gusts
    pub strong_gusts: Tier,
    /// Precipitation above which rain is penalized (mm)
    pub rain_min_mm: f64,
    /// Penalty per millimetre, rounded up
    pub rain_points_per_mm: f64,
    /// Penalty added on top of the per-millimetre part
    pub rain_base_penalty: f64,
    /// Rain penalty cap
    pub rain_max_penalty: f64,
    /// Freezing
    pub freezing: Tier,
    /// Too cold
    pub too_cold: Tier,
    /// Cold
    pub cold: Tier,
    /// Too hot
    pub too_hot: Tier,
    /// Hot
    pub hot: Tier,
}

impl Default for CyclingThresholds {
    fn default() -> Self {
        Self {
            storm: Tier::new(cycling::STORM_KMH, cycling::STORM_PENALTY),
            very_strong_wind: Tier::new(
                cycling::VERY_STRONG_WIND_KMH,
                cycling::VERY_STRONG_WIND_PENALTY,
            ),
            strong_wind: Tier::new(cycling::STRONG_WIND_KMH, cycling::STRONG_WIND_PENALTY),
            windy: Tier::new(cycling::WINDY_KMH, cycling::WINDY_PENALTY),
            dangerous_gusts: Tier::new(
                cycling::DANGEROUS_GUSTS_KMH,
                cycling::DANGEROUS_GUSTS_PENALTY,
            ),
            strong_gusts: Tier::new(cycling::STRONG_GUSTS_KMH, cycling::STRONG_GUSTS_PENALTY),
            rain_min_mm: cycling::RAIN_MIN_MM,
            rain_points_per_mm: cycling::RAIN_POINTS_PER_MM,
            rain_base_penalty: cycling::RAIN_BASE_PENALTY,
            rain_max_penalty: cycling::RAIN_MAX_PENALTY,
            freezing: Tier::new(cycling::FREEZING_C, cycling::FREEZING_PENALTY),
            too_cold: Tier::new(cycling::TOO_COLD_C, cycling::TOO_COLD_PENALTY),
            cold: Tier::new(cycling::COLD_C, cycling::COLD_PENALTY),
            too_hot: Tier::new(cycling::TOO_HOT_C, cycling::TOO_HOT_PENALTY),
            hot: Tier::new(cycling::HOT_C, cycling::HOT_PENALTY),
        }
    }
}

impl CyclingThresholds {
    /// Rain penalty for a precipitation amount, zero at or below the minimum
    #[must_use]
    pub fn rain_penalty(&self, precip_mm: f64) -> f64 {
        if precip_mm > self.rain_min_mm {
            ((precip_mm * self.rain_points_per_mm).ceil() + self.rain_base_penalty)
                .min(self.rain_max_penalty)
        } else {
            0.0
        }
    }

    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        check_descending(
            "cycling.wind",
            &[self.storm, self.very_strong_wind, self.strong_wind, self.windy],
        )?;
        check_descending("cycling.gusts", &[self.dangerous_gusts, self.strong_gusts])?;
        check_non_negative("cycling.rain_min_mm", self.rain_min_mm)?;
        check_non_negative("cycling.rain_points_per_mm", self.rain_points_per_mm)?;
        check_non_negative("cycling.rain_base_penalty", self.rain_base_penalty)?;
        check_non_negative("cycling.rain_max_penalty", self.rain_max_penalty)?;
        check_ascending("cycling.cold", &[self.freezing, self.too_cold, self.cold])?;
        check_descending("cycling.heat", &[self.too_hot, self.hot])
    }
}

/// Sailing thresholds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SailingThresholds {
    /// Storm
    pub storm: Tier,
    /// Very strong wind
    pub very_strong_wind: Tier,
    /// Windy
    pub windy: Tier,
    /// Too little wind to move
    pub no_wind: Tier,
    /// Light wind
    pub light_wind: Tier,
    /// Icy water
    pub icy_water: Tier,
    /// Cold water
    pub cold_water: Tier,
    /// Chilly on the water
    pub chilly: Tier,
}

impl Default for SailingThresholds {
    fn default() -> Self {
        Self {
            storm: Tier::new(sailing::STORM_KMH, sailing::STORM_PENALTY),
            very_strong_wind: Tier::new(
                sailing::VERY_STRONG_WIND_KMH,
                sailing::VERY_STRONG_WIND_PENALTY,
            ),
            windy: Tier::new(sailing::WINDY_KMH, sailing::WINDY_PENALTY),
            no_wind: Tier::new(sailing::NO_WIND_KMH, sailing::NO_WIND_PENALTY),
            light_wind: Tier::new(sailing::LIGHT_WIND_KMH, sailing::LIGHT_WIND_PENALTY),
            icy_water: Tier::new(sailing::ICY_WATER_C, sailing::ICY_WATER_PENALTY),
            cold_water: Tier::new(sailing::COLD_WATER_C, sailing::COLD_WATER_PENALTY),
            chilly: Tier::new(sailing::CHILLY_C, sailing::CHILLY_PENALTY),
        }
    }
}

impl SailingThresholds {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        check_descending(
            "sailing.strong_wind",
            &[self.storm, self.very_strong_wind, self.windy],
        )?;
        check_ascending("sailing.calm", &[self.no_wind, self.light_wind])?;
        if self.light_wind.limit > self.windy.limit {
            return Err(ConfigError::InvalidRange(
                "sailing: light_wind limit must not exceed windy limit".into(),
            ));
        }
        check_ascending(
            "sailing.water",
            &[self.icy_water, self.cold_water, self.chilly],
        )
    }
}

/// Running thresholds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RunningThresholds {
    /// Too hot
    pub too_hot: Tier,
    /// Warm
    pub warm: Tier,
    /// Freezing
    pub freezing: Tier,
    /// Cold
    pub cold: Tier,
    /// Humidity above which a warm run turns muggy (%)
    pub humid_percent: f64,
    /// Temperature above which humidity matters (°C)
    pub humid_min_c: f64,
    /// Humidity penalty
    pub humid_penalty: f64,
    /// Strong wind
    pub strong_wind: Tier,
    /// Heavy rain (mm)
    pub heavy_rain: Tier,
    /// Light rain (mm)
    pub light_rain: Tier,
}

impl Default for RunningThresholds {
    fn default() -> Self {
        Self {
            too_hot: Tier::new(running::TOO_HOT_C, running::TOO_HOT_PENALTY),
            warm: Tier::new(running::WARM_C, running::WARM_PENALTY),
            freezing: Tier::new(running::FREEZING_C, running::FREEZING_PENALTY),
            cold: Tier::new(running::COLD_C, running::COLD_PENALTY),
            humid_percent: running::HUMID_PERCENT,
            humid_min_c: running::HUMID_MIN_C,
            humid_penalty: running::HUMID_PENALTY,
            strong_wind: Tier::new(running::STRONG_WIND_KMH, running::STRONG_WIND_PENALTY),
            heavy_rain: Tier::new(running::HEAVY_RAIN_MM, running::HEAVY_RAIN_PENALTY),
            light_rain: Tier::new(running::LIGHT_RAIN_MM, running::LIGHT_RAIN_PENALTY),
        }
    }
}

impl RunningThresholds {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        check_descending("running.heat", &[self.too_hot, self.warm])?;
        check_ascending("running.cold", &[self.freezing, self.cold])?;
        if self.cold.limit >= self.warm.limit {
            return Err(ConfigError::InvalidRange(
                "running: cold limit must be below warm limit".into(),
            ));
        }
        check_percent("running.humid_percent", self.humid_percent)?;
        check_non_negative("running.humid_penalty", self.humid_penalty)?;
        check_descending("running.wind", &[self.strong_wind])?;
        check_descending("running.rain", &[self.heavy_rain, self.light_rain])
    }
}

/// Golf thresholds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GolfThresholds {
    /// Storm
    pub storm: Tier,
    /// Windy
    pub windy: Tier,
    /// Rain (mm)
    pub rain: Tier,
    /// Frost on the greens
    pub frost: Tier,
    /// Too cold
    pub too_cold: Tier,
    /// Cold
    pub cold: Tier,
}

impl Default for GolfThresholds {
    fn default() -> Self {
        Self {
            storm: Tier::new(golf::STORM_KMH, golf::STORM_PENALTY),
            windy: Tier::new(golf::WINDY_KMH, golf::WINDY_PENALTY),
            rain: Tier::new(golf::RAIN_MM, golf::RAIN_PENALTY),
            frost: Tier::new(golf::FROST_C, golf::FROST_PENALTY),
            too_cold: Tier::new(golf::TOO_COLD_C, golf::TOO_COLD_PENALTY),
            cold: Tier::new(golf::COLD_C, golf::COLD_PENALTY),
        }
    }
}

impl GolfThresholds {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        check_descending("golf.wind", &[self.storm, self.windy])?;
        check_descending("golf.rain", &[self.rain])?;
        check_ascending("golf.cold", &[self.frost, self.too_cold, self.cold])
    }
}

/// Thresholds for outdoor court sports (padel and tennis)
///
/// Both sports share one ladder shape. Tennis additionally penalizes a
/// light breeze and rewards a calm day, which padel leaves unset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CourtThresholds {
    /// Too hot
    pub too_hot: Tier,
    /// Warm
    pub warm: Tier,
    /// Frost
    pub frost: Tier,
    /// Too cold
    pub too_cold: Tier,
    /// Cold
    pub cold: Tier,
    /// Rain probability below which a dry court earns `dry_bonus` (%)
    pub dry_max_prob_percent: f64,
    /// Dry court bonus
    pub dry_bonus: f64,
    /// Precipitation above which the court is unplayable (mm)
    pub unplayable: Tier,
    /// Rain probability above which the court is likely wet (%)
    pub wet_prob_percent: f64,
    /// Wet court penalty
    pub wet_court_penalty: f64,
    /// Very strong wind
    pub very_strong_wind: Tier,
    /// Strong wind
    pub strong_wind: Tier,
    /// Windy
    pub windy: Tier,
    /// Breeze from this speed upward (inclusive)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub breezy: Option<Tier>,
    /// Bonus below this wind speed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calm_bonus: Option<Tier>,
}

impl CourtThresholds {
    /// Padel defaults
    #[must_use]
    pub fn padel() -> Self {
        Self::shared(
            padel::UNPLAYABLE_PENALTY,
            padel::WET_COURT_PENALTY,
            padel::STRONG_WIND_PENALTY,
            padel::WINDY_PENALTY,
        )
    }

    /// Tennis defaults
    #[must_use]
    pub fn tennis() -> Self {
        Self {
            breezy: Some(Tier::new(tennis::BREEZY_KMH, tennis::BREEZY_PENALTY)),
            calm_bonus: Some(Tier::new(tennis::CALM_KMH, tennis::CALM_BONUS)),
            ..Self::shared(
                tennis::UNPLAYABLE_PENALTY,
                tennis::WET_COURT_PENALTY,
                tennis::STRONG_WIND_PENALTY,
                tennis::WINDY_PENALTY,
            )
        }
    }

    fn shared(
        unplayable_penalty: f64,
        wet_court_penalty: f64,
        strong_wind_penalty: f64,
        windy_penalty: f64,
    ) -> Self {
        Self {
            too_hot: Tier::new(court::TOO_HOT_C, court::TOO_HOT_PENALTY),
            warm: Tier::new(court::WARM_C, court::WARM_PENALTY),
            frost: Tier::new(court::FROST_C, court::FROST_PENALTY),
            too_cold: Tier::new(court::TOO_COLD_C, court::TOO_COLD_PENALTY),
            cold: Tier::new(court::COLD_C, court::COLD_PENALTY),
            dry_max_prob_percent: court::DRY_MAX_PROB_PERCENT,
            dry_bonus: court::DRY_BONUS,
            unplayable: Tier::new(court::UNPLAYABLE_MM, unplayable_penalty),
            wet_prob_percent: court::WET_PROB_PERCENT,
            wet_court_penalty,
            very_strong_wind: Tier::new(
                court::VERY_STRONG_WIND_KMH,
                court::VERY_STRONG_WIND_PENALTY,
            ),
            strong_wind: Tier::new(court::STRONG_WIND_KMH, strong_wind_penalty),
            windy: Tier::new(court::WINDY_KMH, windy_penalty),
            breezy: None,
            calm_bonus: None,
        }
    }

    pub(crate) fn validate(&self, name: &str) -> Result<(), ConfigError> {
        check_descending(&format!("{name}.heat"), &[self.too_hot, self.warm])?;
        check_ascending(
            &format!("{name}.cold"),
            &[self.frost, self.too_cold, self.cold],
        )?;
        check_percent(&format!("{name}.dry_max_prob_percent"), self.dry_max_prob_percent)?;
        check_non_negative(&format!("{name}.dry_bonus"), self.dry_bonus)?;
        check_descending(&format!("{name}.unplayable"), &[self.unplayable])?;
        check_percent(&format!("{name}.wet_prob_percent"), self.wet_prob_percent)?;
        check_non_negative(&format!("{name}.wet_court_penalty"), self.wet_court_penalty)?;

        let mut wind = vec![self.very_strong_wind, self.strong_wind, self.windy];
        wind.extend(self.breezy);
        check_descending(&format!("{name}.wind"), &wind)?;
        if let Some(calm) = self.calm_bonus {
            check_descending(&format!("{name}.calm_bonus"), &[calm])?;
        }
        Ok(())
    }
}

/// Football, hockey and other pitch sports thresholds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FieldSportsThresholds {
    /// Too hot
    pub too_hot: Tier,
    /// Hot
    pub hot: Tier,
    /// Warm
    pub warm: Tier,
    /// Frost
    pub frost: Tier,
    /// Too cold
    pub too_cold: Tier,
    /// Cold
    pub cold: Tier,
    /// Rain probability below which a dry pitch earns `dry_bonus` (%)
    pub dry_max_prob_percent: f64,
    /// Dry pitch bonus
    pub dry_bonus: f64,
    /// Waterlogged pitch (mm)
    pub waterlogged: Tier,
    /// Wet pitch (mm)
    pub wet_field: Tier,
    /// Rain probability above which the pitch is likely damp (%)
    pub damp_prob_percent: f64,
    /// Damp pitch penalty
    pub damp_penalty: f64,
    /// Storm
    pub storm: Tier,
    /// Strong wind
    pub strong_wind: Tier,
}

impl Default for FieldSportsThresholds {
    fn default() -> Self {
        Self {
            too_hot: Tier::new(field_sports::TOO_HOT_C, field_sports::TOO_HOT_PENALTY),
            hot: Tier::new(field_sports::HOT_C, field_sports::HOT_PENALTY),
            warm: Tier::new(field_sports::WARM_C, field_sports::WARM_PENALTY),
            frost: Tier::new(field_sports::FROST_C, field_sports::FROST_PENALTY),
            too_cold: Tier::new(field_sports::TOO_COLD_C, field_sports::TOO_COLD_PENALTY),
            cold: Tier::new(field_sports::COLD_C, field_sports::COLD_PENALTY),
            dry_max_prob_percent: field_sports::DRY_MAX_PROB_PERCENT,
            dry_bonus: field_sports::DRY_BONUS,
            waterlogged: Tier::new(
                field_sports::WATERLOGGED_MM,
                field_sports::WATERLOGGED_PENALTY,
            ),
            wet_field: Tier::new(field_sports::WET_FIELD_MM, field_sports::WET_FIELD_PENALTY),
            damp_prob_percent: field_sports::DAMP_PROB_PERCENT,
            damp_penalty: field_sports::DAMP_PENALTY,
            storm: Tier::new(field_sports::STORM_KMH, field_sports::STORM_PENALTY),
            strong_wind: Tier::new(
                field_sports::STRONG_WIND_KMH,
                field_sports::STRONG_WIND_PENALTY,
            ),
        }
    }
}

impl FieldSportsThresholds {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        check_descending("field_sports.heat", &[self.too_hot, self.hot, self.warm])?;
        check_ascending(
            "field_sports.cold",
            &[self.frost, self.too_cold, self.cold],
        )?;
        check_percent("field_sports.dry_max_prob_percent", self.dry_max_prob_percent)?;
        check_non_negative("field_sports.dry_bonus", self.dry_bonus)?;
        check_descending("field_sports.wet", &[self.waterlogged, self.wet_field])?;
        check_percent("field_sports.damp_prob_percent", self.damp_prob_percent)?;
        check_non_negative("field_sports.damp_penalty", self.damp_penalty)?;
        check_descending("field_sports.wind", &[self.storm, self.strong_wind])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_validate() {
        assert!(CyclingThresholds::default().validate().is_ok());
        assert!(SailingThresholds::default().validate().is_ok());
        assert!(RunningThresholds::default().validate().is_ok());
        assert!(GolfThresholds::default().validate().is_ok());
        assert!(CourtThresholds::padel().validate("padel").is_ok());
        assert!(CourtThresholds::tennis().validate("tennis").is_ok());
        assert!(FieldSportsThresholds::default().validate().is_ok());
    }

    #[test]
    fn test_cycling_rain_penalty_curve() {
        let cycling = CyclingThresholds::default();
        assert!(cycling.rain_penalty(0.1).abs() < f64::EPSILON);
        // ceil(0.4) + 2
        assert!((cycling.rain_penalty(0.2) - 3.0).abs() < f64::EPSILON);
        // ceil(2.0) + 2
        assert!((cycling.rain_penalty(1.0) - 4.0).abs() < f64::EPSILON);
        // ceil(5.2) + 2
        assert!((cycling.rain_penalty(2.6) - 8.0).abs() < f64::EPSILON);
        assert!((cycling.rain_penalty(25.0) - 9.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_tennis_adds_breeze_tiers_padel_does_not() {
        let padel = CourtThresholds::padel();
        let tennis = CourtThresholds::tennis();
        assert!(padel.breezy.is_none());
        assert!(padel.calm_bonus.is_none());
        assert_eq!(tennis.breezy, Some(Tier::new(12.0, 2.0)));
        assert!((tennis.wet_court_penalty - 5.0).abs() < f64::EPSILON);
        assert!((padel.wet_court_penalty - 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_unordered_wind_rejected() {
        let cycling = CyclingThresholds {
            windy: Tier::new(30.0, 2.0),
            ..CyclingThresholds::default()
        };
        let err = cycling.validate().unwrap_err();
        assert!(err.to_string().contains("cycling.wind"));
    }
}
