// ABOUTME: Canonical weather thresholds and penalty points for every activity ladder
// ABOUTME: Grouped per activity; each limit pairs with the points it costs when crossed
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Weer Activity Contributors

//! Activity thresholds
//!
//! Units follow the weather input: feels-like temperature in °C, wind and
//! gusts in km/h, precipitation in mm, probabilities and cover in percent,
//! visibility in metres. `*_PENALTY` values are points subtracted from the
//! running score, `*_BONUS` values are points added.
//!
//! Tiers within one dimension are listed most severe first; only the first
//! crossed tier applies.

/// Scale shared by every ladder
pub mod scale {
    /// Score every evaluation starts from
    pub const START_SCORE: f64 = 10.0;

    /// Score forced by an override rule (thunder, precipitation on electronics)
    pub const OVERRIDE_SCORE: f64 = 1.0;
}

/// Cross-cutting rules applied after the activity ladder
pub mod global {
    /// Precipitation above which a period counts as rainy (mm)
    pub const RAINY_MIN_MM: f64 = 0.5;
    /// Precipitation probability above which a period counts as rainy (%)
    pub const RAINY_PROB_PERCENT: f64 = 40.0;

    /// Sun chance the bonus requires at minimum (%)
    pub const SUN_BONUS_MIN_PERCENT: f64 = 20.0;
    /// Sun chance for the full bonus (%)
    pub const SUN_BONUS_HIGH_PERCENT: f64 = 75.0;
    /// Full sunshine-during-rain bonus
    pub const SUN_BONUS_HIGH: f64 = 3.0;
    /// Sun chance for the medium bonus (%)
    pub const SUN_BONUS_MEDIUM_PERCENT: f64 = 50.0;
    /// Medium sunshine-during-rain bonus
    pub const SUN_BONUS_MEDIUM: f64 = 2.0;
    /// Sun chance for the small bonus (%)
    pub const SUN_BONUS_LOW_PERCENT: f64 = 25.0;
    /// Small sunshine-during-rain bonus
    pub const SUN_BONUS_LOW: f64 = 1.0;

    /// Feels-like temperature below which the sub-zero penalty applies (°C)
    pub const SUB_ZERO_BELOW_C: f64 = 0.0;
    /// Sub-zero penalty
    pub const SUB_ZERO_PENALTY: f64 = 2.0;
}

/// Outdoor barbecue
pub mod bbq {
    /// Precipitation that spoils a barbecue (mm)
    pub const RAIN_MIN_MM: f64 = 0.1;
    /// Rain probability that spoils a barbecue (%)
    pub const RAIN_PROB_PERCENT: f64 = 30.0;
    /// Rain penalty
    pub const RAIN_PENALTY: f64 = 8.0;

    /// Too cold below (°C)
    pub const TOO_COLD_C: f64 = 10.0;
    /// Too cold penalty
    pub const TOO_COLD_PENALTY: f64 = 8.0;
    /// Cold below (°C)
    pub const COLD_C: f64 = 15.0;
    /// Cold penalty
    pub const COLD_PENALTY: f64 = 4.0;
    /// Chilly below (°C)
    pub const CHILLY_C: f64 = 20.0;
    /// Chilly penalty
    pub const CHILLY_PENALTY: f64 = 2.0;
    /// Too hot above (°C)
    pub const TOO_HOT_C: f64 = 30.0;
    /// Too hot penalty
    pub const TOO_HOT_PENALTY: f64 = 2.0;

    /// Strong wind above (km/h)
    pub const STRONG_WIND_KMH: f64 = 38.0;
    /// Strong wind penalty
    pub const STRONG_WIND_PENALTY: f64 = 6.0;
    /// Windy above (km/h)
    pub const WINDY_KMH: f64 = 28.0;
    /// Windy penalty
    pub const WINDY_PENALTY: f64 = 3.0;
    /// Breezy above (km/h)
    pub const BREEZY_KMH: f64 = 19.0;
    /// Breezy penalty
    pub const BREEZY_PENALTY: f64 = 1.0;
}

/// Cycling
pub mod cycling {
    /// Storm above (km/h)
    pub const STORM_KMH: f64 = 49.0;
    /// Storm penalty
    pub const STORM_PENALTY: f64 = 9.0;
    /// Very strong wind above (km/h)
    pub const VERY_STRONG_WIND_KMH: f64 = 38.0;
    /// Very strong wind penalty
    pub const VERY_STRONG_WIND_PENALTY: f64 = 6.0;
    /// Strong wind above (km/h)
    pub const STRONG_WIND_KMH: f64 = 28.0;
    /// Strong wind penalty
    pub const STRONG_WIND_PENALTY: f64 = 4.0;
    /// Windy above (km/h)
    pub const WINDY_KMH: f64 = 19.0;
    /// Windy penalty
    pub const WINDY_PENALTY: f64 = 2.0;

    /// Dangerous gusts above (km/h)
    pub const DANGEROUS_GUSTS_KMH: f64 = 75.0;
    /// Dangerous gusts penalty
    pub const DANGEROUS_GUSTS_PENALTY: f64 = 5.0;
    /// Strong gusts above (km/h)
    pub const STRONG_GUSTS_KMH: f64 = 60.0;
    /// Strong gusts penalty
    pub const STRONG_GUSTS_PENALTY: f64 = 3.0;

    /// Precipitation above which rain is penalized (mm)
    pub const RAIN_MIN_MM: f64 = 0.1;
    /// Rain penalty per millimetre, rounded up
    pub const RAIN_POINTS_PER_MM: f64 = 2.0;
    /// Rain penalty added on top of the per-millimetre part
    pub const RAIN_BASE_PENALTY: f64 = 2.0;
    /// Rain penalty cap
    pub const RAIN_MAX_PENALTY: f64 = 9.0;

    /// Freezing below (°C)
    pub const FREEZING_C: f64 = 0.0;
    /// Freezing penalty
    pub const FREEZING_PENALTY: f64 = 7.0;
    /// Too cold below (°C)
    pub const TOO_COLD_C: f64 = 5.0;
    /// Too cold penalty
    pub const TOO_COLD_PENALTY: f64 = 4.0;
    /// Cold below (°C)
    pub const COLD_C: f64 = 10.0;
    /// Cold penalty
    pub const COLD_PENALTY: f64 = 2.0;

    /// Too hot above (°C)
    pub const TOO_HOT_C: f64 = 32.0;
    /// Too hot penalty
    pub const TOO_HOT_PENALTY: f64 = 5.0;
    /// Hot above (°C)
    pub const HOT_C: f64 = 28.0;
    /// Hot penalty
    pub const HOT_PENALTY: f64 = 3.0;
}

/// Walking and hiking
pub mod walking {
    /// Rain probability above (%)
    pub const RAIN_CHANCE_PERCENT: f64 = 40.0;
    /// Rain chance penalty
    pub const RAIN_CHANCE_PENALTY: f64 = 4.0;
    /// Precipitation above (mm)
    pub const RAIN_MM: f64 = 0.5;
    /// Rain penalty
    pub const RAIN_PENALTY: f64 = 6.0;

    /// Storm above (km/h)
    pub const STORM_KMH: f64 = 75.0;
    /// Storm penalty
    pub const STORM_PENALTY: f64 = 10.0;
    /// Very strong wind above (km/h)
    pub const VERY_STRONG_WIND_KMH: f64 = 61.0;
    /// Very strong wind penalty
    pub const VERY_STRONG_WIND_PENALTY: f64 = 7.0;
    /// Strong wind above (km/h)
    pub const STRONG_WIND_KMH: f64 = 49.0;
    /// Strong wind penalty
    pub const STRONG_WIND_PENALTY: f64 = 4.0;
    /// Windy above (km/h)
    pub const WINDY_KMH: f64 = 38.0;
    /// Windy penalty
    pub const WINDY_PENALTY: f64 = 2.0;

    /// Freezing below (°C)
    pub const FREEZING_C: f64 = 0.0;
    /// Freezing penalty
    pub const FREEZING_PENALTY: f64 = 5.0;
    /// Cold below (°C)
    pub const COLD_C: f64 = 5.0;
    /// Cold penalty
    pub const COLD_PENALTY: f64 = 3.0;
    /// Chilly below (°C)
    pub const CHILLY_C: f64 = 10.0;
    /// Chilly penalty
    pub const CHILLY_PENALTY: f64 = 1.0;
    /// Too hot above (°C)
    pub const TOO_HOT_C: f64 = 32.0;
    /// Too hot penalty
    pub const TOO_HOT_PENALTY: f64 = 5.0;
    /// Hot above (°C)
    pub const HOT_C: f64 = 28.0;
    /// Hot penalty
    pub const HOT_PENALTY: f64 = 3.0;

    /// Sun chance below which the walk is dull (%)
    pub const LITTLE_SUN_PERCENT: f64 = 20.0;
    /// Little sun penalty
    pub const LITTLE_SUN_PENALTY: f64 = 2.0;
    /// Sun chance above which a non-perfect walk gains a point (%)
    pub const SUNNY_PERCENT: f64 = 60.0;
    /// Sunny walk bonus
    pub const SUNNY_BONUS: f64 = 1.0;
}

/// Sailing
pub mod sailing {
    /// Storm above (km/h)
    pub const STORM_KMH: f64 = 49.0;
    /// Storm penalty
    pub const STORM_PENALTY: f64 = 9.0;
    /// Very strong wind above (km/h)
    pub const VERY_STRONG_WIND_KMH: f64 = 38.0;
    /// Very strong wind penalty
    pub const VERY_STRONG_WIND_PENALTY: f64 = 4.0;
    /// Windy above (km/h)
    pub const WINDY_KMH: f64 = 28.0;
    /// Windy penalty
    pub const WINDY_PENALTY: f64 = 1.0;
    /// No wind below (km/h)
    pub const NO_WIND_KMH: f64 = 6.0;
    /// No wind penalty
    pub const NO_WIND_PENALTY: f64 = 6.0;
    /// Light wind below (km/h)
    pub const LIGHT_WIND_KMH: f64 = 12.0;
    /// Light wind penalty
    pub const LIGHT_WIND_PENALTY: f64 = 2.0;

    /// Icy water below (°C)
    pub const ICY_WATER_C: f64 = 0.0;
    /// Icy water penalty
    pub const ICY_WATER_PENALTY: f64 = 10.0;
    /// Cold water below (°C)
    pub const COLD_WATER_C: f64 = 6.0;
    /// Cold water penalty
    pub const COLD_WATER_PENALTY: f64 = 6.0;
    /// Chilly below (°C)
    pub const CHILLY_C: f64 = 12.0;
    /// Chilly penalty
    pub const CHILLY_PENALTY: f64 = 3.0;
}

/// Running
pub mod running {
    /// Too hot above (°C)
    pub const TOO_HOT_C: f64 = 25.0;
    /// Too hot penalty
    pub const TOO_HOT_PENALTY: f64 = 6.0;
    /// Warm above (°C)
    pub const WARM_C: f64 = 20.0;
    /// Warm penalty
    pub const WARM_PENALTY: f64 = 3.0;
    /// Freezing below (°C)
    pub const FREEZING_C: f64 = 0.0;
    /// Freezing penalty
    pub const FREEZING_PENALTY: f64 = 4.0;
    /// Cold below (°C)
    pub const COLD_C: f64 = 5.0;
    /// Cold penalty
    pub const COLD_PENALTY: f64 = 2.0;

    /// Humidity above which a warm run is muggy (%)
    pub const HUMID_PERCENT: f64 = 85.0;
    /// Temperature above which humidity matters (°C)
    pub const HUMID_MIN_C: f64 = 20.0;
    /// Humidity penalty
    pub const HUMID_PENALTY: f64 = 4.0;

    /// Strong wind above (km/h)
    pub const STRONG_WIND_KMH: f64 = 29.0;
    /// Strong wind penalty
    pub const STRONG_WIND_PENALTY: f64 = 4.0;

    /// Heavy rain above (mm)
    pub const HEAVY_RAIN_MM: f64 = 3.0;
    /// Heavy rain penalty
    pub const HEAVY_RAIN_PENALTY: f64 = 5.0;
    /// Light rain above (mm)
    pub const LIGHT_RAIN_MM: f64 = 1.0;
    /// Light rain penalty
    pub const LIGHT_RAIN_PENALTY: f64 = 2.0;
}

/// Beach day
pub mod beach {
    /// Too cold below (°C)
    pub const TOO_COLD_C: f64 = 15.0;
    /// Too cold penalty
    pub const TOO_COLD_PENALTY: f64 = 9.0;
    /// Cold below (°C)
    pub const COLD_C: f64 = 18.0;
    /// Cold penalty
    pub const COLD_PENALTY: f64 = 6.0;
    /// Chilly below (°C)
    pub const CHILLY_C: f64 = 22.0;
    /// Chilly penalty
    pub const CHILLY_PENALTY: f64 = 3.0;

    /// Overcast above (%)
    pub const OVERCAST_PERCENT: f64 = 80.0;
    /// Overcast penalty
    pub const OVERCAST_PENALTY: f64 = 8.0;
    /// Cloudy above (%)
    pub const CLOUDY_PERCENT: f64 = 40.0;
    /// Cloudy penalty
    pub const CLOUDY_PENALTY: f64 = 4.0;

    /// Strong wind above (km/h)
    pub const STRONG_WIND_KMH: f64 = 28.0;
    /// Strong wind penalty
    pub const STRONG_WIND_PENALTY: f64 = 5.0;

    /// Rain probability above (%)
    pub const RAIN_CHANCE_PERCENT: f64 = 30.0;
    /// Rain chance penalty
    pub const RAIN_CHANCE_PENALTY: f64 = 6.0;
}

/// Gardening
pub mod gardening {
    /// Rain above (mm)
    pub const RAIN_MM: f64 = 0.5;
    /// Rain penalty
    pub const RAIN_PENALTY: f64 = 8.0;
    /// Previous-day precipitation above which soil is muddy (mm)
    pub const MUDDY_SOIL_MM: f64 = 10.0;
    /// Muddy soil penalty
    pub const MUDDY_SOIL_PENALTY: f64 = 3.0;

    /// Frost below (°C)
    pub const FROST_C: f64 = 0.0;
    /// Frost penalty
    pub const FROST_PENALTY: f64 = 9.0;
    /// Cold below (°C)
    pub const COLD_C: f64 = 5.0;
    /// Cold penalty
    pub const COLD_PENALTY: f64 = 4.0;
    /// Chilly below (°C)
    pub const CHILLY_C: f64 = 10.0;
    /// Chilly penalty
    pub const CHILLY_PENALTY: f64 = 1.0;
    /// Too hot above (°C)
    pub const TOO_HOT_C: f64 = 32.0;
    /// Too hot penalty
    pub const TOO_HOT_PENALTY: f64 = 6.0;
    /// Hot above (°C)
    pub const HOT_C: f64 = 28.0;
    /// Hot penalty
    pub const HOT_PENALTY: f64 = 4.0;

    /// Storm above (km/h)
    pub const STORM_KMH: f64 = 49.0;
    /// Storm penalty
    pub const STORM_PENALTY: f64 = 6.0;
    /// Very strong wind above (km/h)
    pub const VERY_STRONG_WIND_KMH: f64 = 38.0;
    /// Very strong wind penalty
    pub const VERY_STRONG_WIND_PENALTY: f64 = 4.0;
    /// Strong wind above (km/h)
    pub const STRONG_WIND_KMH: f64 = 29.0;
    /// Strong wind penalty
    pub const STRONG_WIND_PENALTY: f64 = 3.0;
}

/// Stargazing
pub mod stargazing {
    /// Overcast above (%)
    pub const OVERCAST_PERCENT: f64 = 75.0;
    /// Overcast penalty
    pub const OVERCAST_PENALTY: f64 = 9.0;
    /// Mostly cloudy above (%)
    pub const MOSTLY_CLOUDY_PERCENT: f64 = 50.0;
    /// Mostly cloudy penalty
    pub const MOSTLY_CLOUDY_PENALTY: f64 = 6.0;
    /// Cloudy above (%)
    pub const CLOUDY_PERCENT: f64 = 25.0;
    /// Cloudy penalty
    pub const CLOUDY_PENALTY: f64 = 4.0;
    /// Some clouds above (%)
    pub const SOME_CLOUDS_PERCENT: f64 = 10.0;
    /// Some clouds penalty
    pub const SOME_CLOUDS_PENALTY: f64 = 2.0;

    /// Poor visibility below (m)
    pub const POOR_VISIBILITY_M: f64 = 5000.0;
    /// Poor visibility penalty
    pub const POOR_VISIBILITY_PENALTY: f64 = 8.0;

    /// Freezing below (°C)
    pub const FREEZING_C: f64 = 0.0;
    /// Freezing penalty
    pub const FREEZING_PENALTY: f64 = 4.0;
    /// Cold below (°C)
    pub const COLD_C: f64 = 5.0;
    /// Cold penalty
    pub const COLD_PENALTY: f64 = 2.0;
    /// Chilly below (°C)
    pub const CHILLY_C: f64 = 10.0;
    /// Chilly penalty
    pub const CHILLY_PENALTY: f64 = 1.0;

    /// Strong wind above (km/h)
    pub const STRONG_WIND_KMH: f64 = 29.0;
    /// Strong wind penalty
    pub const STRONG_WIND_PENALTY: f64 = 5.0;
    /// Windy above (km/h)
    pub const WINDY_KMH: f64 = 19.0;
    /// Windy penalty
    pub const WINDY_PENALTY: f64 = 3.0;

    /// New moon bonus
    pub const NEW_MOON_BONUS: f64 = 1.0;
    /// Moon phase labels meaning new moon, compared case-insensitively
    pub const NEW_MOON_LABELS: [&str; 3] = ["new moon", "nieuwe maan", "neumond"];
}

/// Golf
pub mod golf {
    /// Storm above (km/h)
    pub const STORM_KMH: f64 = 49.0;
    /// Storm penalty
    pub const STORM_PENALTY: f64 = 9.0;
    /// Windy above (km/h)
    pub const WINDY_KMH: f64 = 19.0;
    /// Windy penalty
    pub const WINDY_PENALTY: f64 = 4.0;

    /// Rain above (mm)
    pub const RAIN_MM: f64 = 0.2;
    /// Rain penalty
    pub const RAIN_PENALTY: f64 = 4.0;

    /// Frost below (°C)
    pub const FROST_C: f64 = 0.0;
    /// Frost penalty
    pub const FROST_PENALTY: f64 = 10.0;
    /// Too cold below (°C)
    pub const TOO_COLD_C: f64 = 5.0;
    /// Too cold penalty
    pub const TOO_COLD_PENALTY: f64 = 5.0;
    /// Cold below (°C)
    pub const COLD_C: f64 = 10.0;
    /// Cold penalty
    pub const COLD_PENALTY: f64 = 2.0;
}

/// Temperature and dryness tiers shared by padel and tennis
pub mod court {
    /// Too hot above (°C)
    pub const TOO_HOT_C: f64 = 30.0;
    /// Too hot penalty
    pub const TOO_HOT_PENALTY: f64 = 5.0;
    /// Warm above (°C)
    pub const WARM_C: f64 = 25.0;
    /// Warm penalty
    pub const WARM_PENALTY: f64 = 2.0;
    /// Frost below (°C)
    pub const FROST_C: f64 = 0.0;
    /// Frost penalty
    pub const FROST_PENALTY: f64 = 10.0;
    /// Too cold below (°C)
    pub const TOO_COLD_C: f64 = 5.0;
    /// Too cold penalty
    pub const TOO_COLD_PENALTY: f64 = 5.0;
    /// Cold below (°C)
    pub const COLD_C: f64 = 10.0;
    /// Cold penalty
    pub const COLD_PENALTY: f64 = 2.0;

    /// Rain probability below which a dry court earns the bonus (%)
    pub const DRY_MAX_PROB_PERCENT: f64 = 10.0;
    /// Dry court bonus
    pub const DRY_BONUS: f64 = 1.0;

    /// Precipitation above which the court is unplayable (mm)
    pub const UNPLAYABLE_MM: f64 = 2.0;
    /// Rain probability above which the court is likely wet (%)
    pub const WET_PROB_PERCENT: f64 = 30.0;

    /// Very strong wind above (km/h)
    pub const VERY_STRONG_WIND_KMH: f64 = 38.0;
    /// Very strong wind penalty
    pub const VERY_STRONG_WIND_PENALTY: f64 = 8.0;
    /// Strong wind above (km/h)
    pub const STRONG_WIND_KMH: f64 = 28.0;
    /// Windy above (km/h)
    pub const WINDY_KMH: f64 = 19.0;
}

/// Outdoor padel
pub mod padel {
    /// Unplayable court penalty
    pub const UNPLAYABLE_PENALTY: f64 = 8.0;
    /// Wet court penalty
    pub const WET_COURT_PENALTY: f64 = 3.0;
    /// Strong wind penalty
    pub const STRONG_WIND_PENALTY: f64 = 4.0;
    /// Windy penalty
    pub const WINDY_PENALTY: f64 = 2.0;
}

/// Outdoor tennis
pub mod tennis {
    /// Unplayable court penalty
    pub const UNPLAYABLE_PENALTY: f64 = 9.0;
    /// Wet court penalty
    pub const WET_COURT_PENALTY: f64 = 5.0;
    /// Strong wind penalty
    pub const STRONG_WIND_PENALTY: f64 = 5.0;
    /// Windy penalty
    pub const WINDY_PENALTY: f64 = 3.0;
    /// Breezy from (km/h, inclusive)
    pub const BREEZY_KMH: f64 = 12.0;
    /// Breezy penalty
    pub const BREEZY_PENALTY: f64 = 2.0;
    /// Calm below which the ball flies true (km/h)
    pub const CALM_KMH: f64 = 12.0;
    /// Calm bonus
    pub const CALM_BONUS: f64 = 1.0;
}

/// Football, hockey and other pitch sports
pub mod field_sports {
    /// Too hot above (°C)
    pub const TOO_HOT_C: f64 = 30.0;
    /// Too hot penalty
    pub const TOO_HOT_PENALTY: f64 = 8.0;
    /// Hot above (°C)
    pub const HOT_C: f64 = 25.0;
    /// Hot penalty
    pub const HOT_PENALTY: f64 = 5.0;
    /// Warm above (°C)
    pub const WARM_C: f64 = 20.0;
    /// Warm penalty
    pub const WARM_PENALTY: f64 = 2.0;
    /// Frost below (°C)
    pub const FROST_C: f64 = 0.0;
    /// Frost penalty
    pub const FROST_PENALTY: f64 = 8.0;
    /// Too cold below (°C)
    pub const TOO_COLD_C: f64 = 5.0;
    /// Too cold penalty
    pub const TOO_COLD_PENALTY: f64 = 5.0;
    /// Cold below (°C)
    pub const COLD_C: f64 = 10.0;
    /// Cold penalty
    pub const COLD_PENALTY: f64 = 2.0;

    /// Rain probability below which a dry pitch earns the bonus (%)
    pub const DRY_MAX_PROB_PERCENT: f64 = 10.0;
    /// Dry pitch bonus
    pub const DRY_BONUS: f64 = 1.0;

    /// Waterlogged above (mm)
    pub const WATERLOGGED_MM: f64 = 5.0;
    /// Waterlogged penalty
    pub const WATERLOGGED_PENALTY: f64 = 9.0;
    /// Wet field above (mm)
    pub const WET_FIELD_MM: f64 = 2.0;
    /// Wet field penalty
    pub const WET_FIELD_PENALTY: f64 = 5.0;
    /// Rain probability above which the pitch is likely damp (%)
    pub const DAMP_PROB_PERCENT: f64 = 30.0;
    /// Damp field penalty
    pub const DAMP_PENALTY: f64 = 3.0;

    /// Storm above (km/h)
    pub const STORM_KMH: f64 = 49.0;
    /// Storm penalty
    pub const STORM_PENALTY: f64 = 8.0;
    /// Strong wind above (km/h)
    pub const STRONG_WIND_KMH: f64 = 28.0;
    /// Strong wind penalty
    pub const STRONG_WIND_PENALTY: f64 = 3.0;
}

/// Drone flying
pub mod drone {
    /// Dangerous gusts above (km/h)
    pub const DANGEROUS_GUSTS_KMH: f64 = 60.0;
    /// Dangerous gusts penalty
    pub const DANGEROUS_GUSTS_PENALTY: f64 = 9.0;
    /// Strong gusts above (km/h)
    pub const STRONG_GUSTS_KMH: f64 = 45.0;
    /// Strong gusts penalty
    pub const STRONG_GUSTS_PENALTY: f64 = 6.0;
    /// Gusty above (km/h)
    pub const GUSTY_KMH: f64 = 30.0;
    /// Gusty penalty
    pub const GUSTY_PENALTY: f64 = 3.0;

    /// Poor visibility below (m)
    pub const POOR_VISIBILITY_M: f64 = 2000.0;
    /// Poor visibility penalty
    pub const POOR_VISIBILITY_PENALTY: f64 = 6.0;

    /// Battery freezing below (°C)
    pub const BATTERY_FREEZING_C: f64 = 0.0;
    /// Battery freezing penalty
    pub const BATTERY_FREEZING_PENALTY: f64 = 4.0;
    /// Battery cold below (°C)
    pub const BATTERY_COLD_C: f64 = 5.0;
    /// Battery cold penalty
    pub const BATTERY_COLD_PENALTY: f64 = 2.0;

    /// K-index above which GPS becomes unreliable
    pub const GEOMAGNETIC_KP: f64 = 5.0;
    /// Geomagnetic storm penalty
    pub const GEOMAGNETIC_PENALTY: f64 = 2.0;
}

/// Home and work: only the commute is exposed to the weather
pub mod commute {
    /// Rain above (mm)
    pub const RAIN_MM: f64 = 2.0;
    /// Rain penalty
    pub const RAIN_PENALTY: f64 = 2.0;
    /// Wind above (km/h)
    pub const WIND_KMH: f64 = 50.0;
    /// Wind penalty
    pub const WIND_PENALTY: f64 = 2.0;
}
