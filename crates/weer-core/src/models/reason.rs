// ABOUTME: Language-neutral identifiers for every rule the scoring engine can fire
// ABOUTME: Maps each reason to a stable `reason.*` key used by localization tables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Weer Activity Contributors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Declares the reason enum together with its localization keys so the two
/// can never drift apart.
macro_rules! reason_ids {
    ($( $(#[$doc:meta])* $variant:ident => $key:literal, )+) => {
        /// Identifier of a triggered scoring rule
        ///
        /// Labels shown to users are resolved from [`ReasonId::key`] against a
        /// localization table; the engine itself only deals in identifiers.
        #[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[serde(rename_all = "snake_case")]
        pub enum ReasonId {
            $( $(#[$doc])* $variant, )+
        }

        impl ReasonId {
            /// Every reason identifier in declaration order
            pub const ALL: &'static [Self] = &[ $( Self::$variant, )+ ];

            /// Localization key, e.g. `reason.too_cold`
            #[must_use]
            pub const fn key(&self) -> &'static str {
                match self {
                    $( Self::$variant => $key, )+
                }
            }
        }
    };
}

reason_ids! {
    /// No rule fired
    Perfect => "reason.perfect",
    /// Rain expected during the period
    Rain => "reason.rain",
    /// High chance of rain
    RainChance => "reason.rain_chance",
    /// Heavy rain
    HeavyRain => "reason.heavy_rain",
    /// Light rain
    LightRain => "reason.light_rain",
    /// Soil soaked by the previous day's rain
    MuddySoil => "reason.muddy_soil",
    /// Court flooded
    CourtUnplayable => "reason.court_unplayable",
    /// Court wet and slippery
    WetCourt => "reason.wet_court",
    /// Pitch waterlogged
    FieldWaterlogged => "reason.field_waterlogged",
    /// Pitch wet
    WetField => "reason.wet_field",
    /// Pitch damp
    DampField => "reason.damp_field",
    /// Rain on the commute
    CommuteRain => "reason.commute_rain",
    /// Strong wind on the commute
    CommuteWind => "reason.commute_wind",
    /// Ground frost
    Frost => "reason.frost",
    /// Freezing temperatures
    Freezing => "reason.freezing",
    /// Too cold
    TooCold => "reason.too_cold",
    /// Cold
    Cold => "reason.cold",
    /// Chilly
    Chilly => "reason.chilly",
    /// Too hot
    TooHot => "reason.too_hot",
    /// Hot
    Hot => "reason.hot",
    /// Warm
    Warm => "reason.warm",
    /// Muggy, heat and humidity combined
    Humid => "reason.humid",
    /// Cold water
    ColdWater => "reason.cold_water",
    /// Near-freezing water
    IcyWater => "reason.icy_water",
    /// Batteries drain fast below freezing
    BatteryFreezing => "reason.battery_freezing",
    /// Batteries lose capacity in the cold
    BatteryCold => "reason.battery_cold",
    /// Storm
    Storm => "reason.storm",
    /// Very strong wind
    VeryStrongWind => "reason.very_strong_wind",
    /// Strong wind
    StrongWind => "reason.strong_wind",
    /// Windy
    Windy => "reason.windy",
    /// Breezy
    Breezy => "reason.breezy",
    /// Not enough wind to sail
    NoWind => "reason.no_wind",
    /// Light wind
    LightWind => "reason.light_wind",
    /// Dangerous gusts
    DangerousGusts => "reason.dangerous_gusts",
    /// Strong gusts
    StrongGusts => "reason.strong_gusts",
    /// Gusty
    Gusty => "reason.gusty",
    /// Overcast sky
    Overcast => "reason.overcast",
    /// Mostly cloudy
    MostlyCloudy => "reason.mostly_cloudy",
    /// Cloudy
    Cloudy => "reason.cloudy",
    /// Some clouds
    SomeClouds => "reason.some_clouds",
    /// Poor visibility
    PoorVisibility => "reason.poor_visibility",
    /// Little sunshine
    LittleSun => "reason.little_sun",
    /// Thunderstorm danger on the water
    ThunderDanger => "reason.thunder_danger",
    /// Life-threatening thunderstorm on the course
    ThunderLifeThreatening => "reason.thunder_life_threatening",
    /// Precipitation on the telescope optics
    TelescopeWet => "reason.telescope_wet",
    /// Precipitation on the drone electronics
    ElectronicsWater => "reason.electronics_water",
    /// Geomagnetic activity disturbing GPS
    GeomagneticStorm => "reason.geomagnetic_storm",
    /// New moon, dark sky
    NewMoon => "reason.new_moon",
    /// Sunshine between showers
    SunBetweenShowers => "reason.sun_between_showers",
    /// Feels-like temperature below zero
    FeelsSubZero => "reason.feels_sub_zero",
    /// A weather value was not a number
    MissingData => "reason.missing_data",
}

impl ReasonId {
    /// Look up a reason by its localization key
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|reason| reason.key() == key)
    }
}

impl fmt::Display for ReasonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
