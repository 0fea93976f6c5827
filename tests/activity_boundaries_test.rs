// ABOUTME: Table-driven tests pinning every ladder tier at its exact threshold
// ABOUTME: A value on the limit never fires the tier; a hair past it costs exactly the tier's points
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Weer Activity Contributors
#![allow(clippy::unwrap_used, clippy::float_cmp)]

mod common;

use common::calm_dry;
use weer_activity_score::constants::activity_thresholds::{
    bbq, beach, commute, court, cycling, drone, field_sports, gardening, global, golf, padel,
    running, sailing, scale, stargazing, tennis, walking,
};
use weer_activity_score::intelligence::ScoreEngine;
use weer_activity_score::{ActivityKind, ActivityWeatherInput, ReasonId};

/// Distance past a limit used to cross it
const NUDGE: f64 = 0.01;

#[derive(Debug, Clone, Copy)]
enum Dimension {
    Temp,
    Wind,
    Gusts,
    PrecipMm,
    PrecipProb,
    Cloud,
    Visibility,
    Precip24h,
    Kp,
}

#[derive(Debug, Clone, Copy)]
enum Side {
    Above,
    Below,
}

#[derive(Debug, Clone, Copy)]
struct Boundary {
    dimension: Dimension,
    side: Side,
    limit: f64,
    points: f64,
    reason: ReasonId,
}

const fn above(dimension: Dimension, limit: f64, points: f64, reason: ReasonId) -> Boundary {
    Boundary {
        dimension,
        side: Side::Above,
        limit,
        points,
        reason,
    }
}

const fn below(dimension: Dimension, limit: f64, points: f64, reason: ReasonId) -> Boundary {
    Boundary {
        dimension,
        side: Side::Below,
        limit,
        points,
        reason,
    }
}

/// Period on which no tier of `activity` fires except constant ones
fn neutral(activity: ActivityKind) -> ActivityWeatherInput {
    match activity {
        ActivityKind::Bbq => calm_dry(22.0),
        ActivityKind::Beach => calm_dry(25.0),
        ActivityKind::Running | ActivityKind::FieldSports => calm_dry(15.0),
        ActivityKind::Sailing => ActivityWeatherInput {
            wind_kmh: 20.0,
            ..calm_dry(18.0)
        },
        _ => calm_dry(18.0),
    }
}

fn with_value(base: &ActivityWeatherInput, dimension: Dimension, value: f64) -> ActivityWeatherInput {
    let mut input = base.clone();
    match dimension {
        Dimension::Temp => input.temp_feels_like = value,
        Dimension::Wind => input.wind_kmh = value,
        Dimension::Gusts => input.gusts_kmh = value,
        Dimension::PrecipMm => input.precip_mm = value,
        Dimension::PrecipProb => input.precip_prob = value,
        Dimension::Cloud => input.cloud_cover = value,
        Dimension::Visibility => input.visibility = value,
        Dimension::Precip24h => input.precip_24h = Some(value),
        Dimension::Kp => input.kp_index = Some(value),
    }
    input
}

fn check_boundaries(activity: ActivityKind, boundaries: &[Boundary]) {
    let engine = ScoreEngine::canonical();
    let base = neutral(activity);
    let baseline = engine.evaluate(&base, activity);
    assert!(!baseline.pinned, "{activity}: neutral period must not pin");

    for boundary in boundaries {
        let at_limit = engine.evaluate(&with_value(&base, boundary.dimension, boundary.limit), activity);
        assert!(
            !at_limit.reason_ids.contains(&boundary.reason),
            "{activity}: {:?} fired exactly at {}",
            boundary.reason,
            boundary.limit
        );

        let crossed_value = match boundary.side {
            Side::Above => boundary.limit + NUDGE,
            Side::Below => boundary.limit - NUDGE,
        };
        let crossed = engine.evaluate(&with_value(&base, boundary.dimension, crossed_value), activity);
        assert!(
            crossed.reason_ids.contains(&boundary.reason),
            "{activity}: {:?} did not fire at {crossed_value}",
            boundary.reason
        );

        let sub_zero = if matches!(boundary.dimension, Dimension::Temp)
            && crossed_value < global::SUB_ZERO_BELOW_C
            && !engine.config().global.sub_zero_exempt.contains(&activity)
        {
            global::SUB_ZERO_PENALTY
        } else {
            0.0
        };
        assert_eq!(
            crossed.running,
            baseline.running - boundary.points - sub_zero,
            "{activity}: {:?} at {crossed_value} should cost {} points",
            boundary.reason,
            boundary.points
        );
    }
}

#[test]
fn test_bbq_boundaries() {
    use Dimension::{PrecipMm, PrecipProb, Temp, Wind};
    check_boundaries(
        ActivityKind::Bbq,
        &[
            above(PrecipMm, bbq::RAIN_MIN_MM, bbq::RAIN_PENALTY, ReasonId::Rain),
            above(PrecipProb, bbq::RAIN_PROB_PERCENT, bbq::RAIN_PENALTY, ReasonId::Rain),
            below(Temp, bbq::TOO_COLD_C, bbq::TOO_COLD_PENALTY, ReasonId::TooCold),
            below(Temp, bbq::COLD_C, bbq::COLD_PENALTY, ReasonId::Cold),
            below(Temp, bbq::CHILLY_C, bbq::CHILLY_PENALTY, ReasonId::Chilly),
            above(Temp, bbq::TOO_HOT_C, bbq::TOO_HOT_PENALTY, ReasonId::TooHot),
            above(Wind, bbq::STRONG_WIND_KMH, bbq::STRONG_WIND_PENALTY, ReasonId::StrongWind),
            above(Wind, bbq::WINDY_KMH, bbq::WINDY_PENALTY, ReasonId::Windy),
            above(Wind, bbq::BREEZY_KMH, bbq::BREEZY_PENALTY, ReasonId::Breezy),
        ],
    );
}

#[test]
fn test_cycling_boundaries() {
    use Dimension::{Gusts, Temp, Wind};
    check_boundaries(
        ActivityKind::Cycling,
        &[
            above(Wind, cycling::STORM_KMH, cycling::STORM_PENALTY, ReasonId::Storm),
            above(
                Wind,
                cycling::VERY_STRONG_WIND_KMH,
                cycling::VERY_STRONG_WIND_PENALTY,
                ReasonId::VeryStrongWind,
            ),
            above(
                Wind,
                cycling::STRONG_WIND_KMH,
                cycling::STRONG_WIND_PENALTY,
                ReasonId::StrongWind,
            ),
            above(Wind, cycling::WINDY_KMH, cycling::WINDY_PENALTY, ReasonId::Windy),
            above(
                Gusts,
                cycling::DANGEROUS_GUSTS_KMH,
                cycling::DANGEROUS_GUSTS_PENALTY,
                ReasonId::DangerousGusts,
            ),
            above(
                Gusts,
                cycling::STRONG_GUSTS_KMH,
                cycling::STRONG_GUSTS_PENALTY,
                ReasonId::StrongGusts,
            ),
            below(Temp, cycling::FREEZING_C, cycling::FREEZING_PENALTY, ReasonId::Freezing),
            below(Temp, cycling::TOO_COLD_C, cycling::TOO_COLD_PENALTY, ReasonId::TooCold),
            below(Temp, cycling::COLD_C, cycling::COLD_PENALTY, ReasonId::Cold),
            above(Temp, cycling::TOO_HOT_C, cycling::TOO_HOT_PENALTY, ReasonId::TooHot),
            above(Temp, cycling::HOT_C, cycling::HOT_PENALTY, ReasonId::Hot),
        ],
    );
}

#[test]
fn test_walking_boundaries() {
    use Dimension::{PrecipMm, PrecipProb, Temp, Wind};
    check_boundaries(
        ActivityKind::Walking,
        &[
            above(
                PrecipProb,
                walking::RAIN_CHANCE_PERCENT,
                walking::RAIN_CHANCE_PENALTY,
                ReasonId::RainChance,
            ),
            above(PrecipMm, walking::RAIN_MM, walking::RAIN_PENALTY, ReasonId::Rain),
            above(Wind, walking::STORM_KMH, walking::STORM_PENALTY, ReasonId::Storm),
            above(
                Wind,
                walking::VERY_STRONG_WIND_KMH,
                walking::VERY_STRONG_WIND_PENALTY,
                ReasonId::VeryStrongWind,
            ),
            above(
                Wind,
                walking::STRONG_WIND_KMH,
                walking::STRONG_WIND_PENALTY,
                ReasonId::StrongWind,
            ),
            above(Wind, walking::WINDY_KMH, walking::WINDY_PENALTY, ReasonId::Windy),
            below(Temp, walking::FREEZING_C, walking::FREEZING_PENALTY, ReasonId::Freezing),
            below(Temp, walking::COLD_C, walking::COLD_PENALTY, ReasonId::Cold),
            below(Temp, walking::CHILLY_C, walking::CHILLY_PENALTY, ReasonId::Chilly),
            above(Temp, walking::TOO_HOT_C, walking::TOO_HOT_PENALTY, ReasonId::TooHot),
            above(Temp, walking::HOT_C, walking::HOT_PENALTY, ReasonId::Hot),
        ],
    );
}

#[test]
fn test_sailing_boundaries() {
    use Dimension::{Temp, Wind};
    check_boundaries(
        ActivityKind::Sailing,
        &[
            above(Wind, sailing::STORM_KMH, sailing::STORM_PENALTY, ReasonId::Storm),
            above(
                Wind,
                sailing::VERY_STRONG_WIND_KMH,
                sailing::VERY_STRONG_WIND_PENALTY,
                ReasonId::VeryStrongWind,
            ),
            above(Wind, sailing::WINDY_KMH, sailing::WINDY_PENALTY, ReasonId::Windy),
            below(Wind, sailing::NO_WIND_KMH, sailing::NO_WIND_PENALTY, ReasonId::NoWind),
            below(
                Wind,
                sailing::LIGHT_WIND_KMH,
                sailing::LIGHT_WIND_PENALTY,
                ReasonId::LightWind,
            ),
            below(Temp, sailing::ICY_WATER_C, sailing::ICY_WATER_PENALTY, ReasonId::IcyWater),
            below(
                Temp,
                sailing::COLD_WATER_C,
                sailing::COLD_WATER_PENALTY,
                ReasonId::ColdWater,
            ),
            below(Temp, sailing::CHILLY_C, sailing::CHILLY_PENALTY, ReasonId::Chilly),
        ],
    );
}

#[test]
fn test_running_boundaries() {
    use Dimension::{PrecipMm, Temp, Wind};
    check_boundaries(
        ActivityKind::Running,
        &[
            above(Temp, running::TOO_HOT_C, running::TOO_HOT_PENALTY, ReasonId::TooHot),
            above(Temp, running::WARM_C, running::WARM_PENALTY, ReasonId::Warm),
            below(Temp, running::FREEZING_C, running::FREEZING_PENALTY, ReasonId::Freezing),
            below(Temp, running::COLD_C, running::COLD_PENALTY, ReasonId::Cold),
            above(
                Wind,
                running::STRONG_WIND_KMH,
                running::STRONG_WIND_PENALTY,
                ReasonId::StrongWind,
            ),
            above(
                PrecipMm,
                running::HEAVY_RAIN_MM,
                running::HEAVY_RAIN_PENALTY,
                ReasonId::HeavyRain,
            ),
            above(
                PrecipMm,
                running::LIGHT_RAIN_MM,
                running::LIGHT_RAIN_PENALTY,
                ReasonId::LightRain,
            ),
        ],
    );
}

#[test]
fn test_beach_boundaries() {
    use Dimension::{Cloud, PrecipProb, Temp, Wind};
    check_boundaries(
        ActivityKind::Beach,
        &[
            below(Temp, beach::TOO_COLD_C, beach::TOO_COLD_PENALTY, ReasonId::TooCold),
            below(Temp, beach::COLD_C, beach::COLD_PENALTY, ReasonId::Cold),
            below(Temp, beach::CHILLY_C, beach::CHILLY_PENALTY, ReasonId::Chilly),
            above(Cloud, beach::OVERCAST_PERCENT, beach::OVERCAST_PENALTY, ReasonId::Overcast),
            above(Cloud, beach::CLOUDY_PERCENT, beach::CLOUDY_PENALTY, ReasonId::Cloudy),
            above(
                Wind,
                beach::STRONG_WIND_KMH,
                beach::STRONG_WIND_PENALTY,
                ReasonId::StrongWind,
            ),
            above(
                PrecipProb,
                beach::RAIN_CHANCE_PERCENT,
                beach::RAIN_CHANCE_PENALTY,
                ReasonId::RainChance,
            ),
        ],
    );
}

#[test]
fn test_gardening_boundaries() {
    use Dimension::{Precip24h, PrecipMm, Temp, Wind};
    check_boundaries(
        ActivityKind::Gardening,
        &[
            above(PrecipMm, gardening::RAIN_MM, gardening::RAIN_PENALTY, ReasonId::Rain),
            above(
                Precip24h,
                gardening::MUDDY_SOIL_MM,
                gardening::MUDDY_SOIL_PENALTY,
                ReasonId::MuddySoil,
            ),
            below(Temp, gardening::FROST_C, gardening::FROST_PENALTY, ReasonId::Frost),
            below(Temp, gardening::COLD_C, gardening::COLD_PENALTY, ReasonId::Cold),
            below(Temp, gardening::CHILLY_C, gardening::CHILLY_PENALTY, ReasonId::Chilly),
            above(Temp, gardening::TOO_HOT_C, gardening::TOO_HOT_PENALTY, ReasonId::TooHot),
            above(Temp, gardening::HOT_C, gardening::HOT_PENALTY, ReasonId::Hot),
            above(Wind, gardening::STORM_KMH, gardening::STORM_PENALTY, ReasonId::Storm),
            above(
                Wind,
                gardening::VERY_STRONG_WIND_KMH,
                gardening::VERY_STRONG_WIND_PENALTY,
                ReasonId::VeryStrongWind,
            ),
            above(
                Wind,
                gardening::STRONG_WIND_KMH,
                gardening::STRONG_WIND_PENALTY,
                ReasonId::StrongWind,
            ),
        ],
    );
}

#[test]
fn test_stargazing_boundaries() {
    use Dimension::{Cloud, Temp, Visibility, Wind};
    check_boundaries(
        ActivityKind::Stargazing,
        &[
            above(
                Cloud,
                stargazing::OVERCAST_PERCENT,
                stargazing::OVERCAST_PENALTY,
                ReasonId::Overcast,
            ),
            above(
                Cloud,
                stargazing::MOSTLY_CLOUDY_PERCENT,
                stargazing::MOSTLY_CLOUDY_PENALTY,
                ReasonId::MostlyCloudy,
            ),
            above(
                Cloud,
                stargazing::CLOUDY_PERCENT,
                stargazing::CLOUDY_PENALTY,
                ReasonId::Cloudy,
            ),
            above(
                Cloud,
                stargazing::SOME_CLOUDS_PERCENT,
                stargazing::SOME_CLOUDS_PENALTY,
                ReasonId::SomeClouds,
            ),
            below(
                Visibility,
                stargazing::POOR_VISIBILITY_M,
                stargazing::POOR_VISIBILITY_PENALTY,
                ReasonId::PoorVisibility,
            ),
            below(
                Temp,
                stargazing::FREEZING_C,
                stargazing::FREEZING_PENALTY,
                ReasonId::Freezing,
            ),
            below(Temp, stargazing::COLD_C, stargazing::COLD_PENALTY, ReasonId::Cold),
            below(Temp, stargazing::CHILLY_C, stargazing::CHILLY_PENALTY, ReasonId::Chilly),
            above(
                Wind,
                stargazing::STRONG_WIND_KMH,
                stargazing::STRONG_WIND_PENALTY,
                ReasonId::StrongWind,
            ),
            above(Wind, stargazing::WINDY_KMH, stargazing::WINDY_PENALTY, ReasonId::Windy),
        ],
    );
}

#[test]
fn test_golf_boundaries() {
    use Dimension::{PrecipMm, Temp, Wind};
    check_boundaries(
        ActivityKind::Golf,
        &[
            above(Wind, golf::STORM_KMH, golf::STORM_PENALTY, ReasonId::Storm),
            above(Wind, golf::WINDY_KMH, golf::WINDY_PENALTY, ReasonId::Windy),
            above(PrecipMm, golf::RAIN_MM, golf::RAIN_PENALTY, ReasonId::Rain),
            below(Temp, golf::FROST_C, golf::FROST_PENALTY, ReasonId::Frost),
            below(Temp, golf::TOO_COLD_C, golf::TOO_COLD_PENALTY, ReasonId::TooCold),
            below(Temp, golf::COLD_C, golf::COLD_PENALTY, ReasonId::Cold),
        ],
    );
}

fn court_temperature_boundaries() -> [Boundary; 5] {
    use Dimension::Temp;
    [
        above(Temp, court::TOO_HOT_C, court::TOO_HOT_PENALTY, ReasonId::TooHot),
        above(Temp, court::WARM_C, court::WARM_PENALTY, ReasonId::Warm),
        below(Temp, court::FROST_C, court::FROST_PENALTY, ReasonId::Frost),
        below(Temp, court::TOO_COLD_C, court::TOO_COLD_PENALTY, ReasonId::TooCold),
        below(Temp, court::COLD_C, court::COLD_PENALTY, ReasonId::Cold),
    ]
}

#[test]
fn test_padel_boundaries() {
    use Dimension::Wind;
    check_boundaries(ActivityKind::Padel, &court_temperature_boundaries());
    check_boundaries(
        ActivityKind::Padel,
        &[
            above(
                Wind,
                court::VERY_STRONG_WIND_KMH,
                court::VERY_STRONG_WIND_PENALTY,
                ReasonId::VeryStrongWind,
            ),
            above(
                Wind,
                court::STRONG_WIND_KMH,
                padel::STRONG_WIND_PENALTY,
                ReasonId::StrongWind,
            ),
            above(Wind, court::WINDY_KMH, padel::WINDY_PENALTY, ReasonId::Windy),
        ],
    );
}

#[test]
fn test_tennis_temperature_boundaries() {
    check_boundaries(ActivityKind::Tennis, &court_temperature_boundaries());
}

#[test]
fn test_tennis_wind_steps() {
    let engine = ScoreEngine::canonical();
    let dry_calm = scale::START_SCORE + court::DRY_BONUS + tennis::CALM_BONUS;
    let dry = scale::START_SCORE + court::DRY_BONUS;
    let cases = [
        (tennis::CALM_KMH - NUDGE, dry_calm, None),
        (tennis::BREEZY_KMH, dry - tennis::BREEZY_PENALTY, Some(ReasonId::Breezy)),
        (court::WINDY_KMH, dry - tennis::BREEZY_PENALTY, Some(ReasonId::Breezy)),
        (court::WINDY_KMH + NUDGE, dry - tennis::WINDY_PENALTY, Some(ReasonId::Windy)),
        (court::STRONG_WIND_KMH, dry - tennis::WINDY_PENALTY, Some(ReasonId::Windy)),
        (
            court::STRONG_WIND_KMH + NUDGE,
            dry - tennis::STRONG_WIND_PENALTY,
            Some(ReasonId::StrongWind),
        ),
        (
            court::VERY_STRONG_WIND_KMH,
            dry - tennis::STRONG_WIND_PENALTY,
            Some(ReasonId::StrongWind),
        ),
        (
            court::VERY_STRONG_WIND_KMH + NUDGE,
            dry - court::VERY_STRONG_WIND_PENALTY,
            Some(ReasonId::VeryStrongWind),
        ),
    ];

    for (wind, expected, reason) in cases {
        let input = with_value(&neutral(ActivityKind::Tennis), Dimension::Wind, wind);
        let raw = engine.evaluate(&input, ActivityKind::Tennis);
        assert_eq!(raw.running, expected, "tennis at {wind} km/h");
        assert_eq!(raw.reason_ids, reason.into_iter().collect::<Vec<_>>(), "tennis at {wind} km/h");
    }
}

#[test]
fn test_court_wetness_steps() {
    let engine = ScoreEngine::canonical();
    let courts = [
        (ActivityKind::Padel, padel::UNPLAYABLE_PENALTY, padel::WET_COURT_PENALTY, 0.0),
        (
            ActivityKind::Tennis,
            tennis::UNPLAYABLE_PENALTY,
            tennis::WET_COURT_PENALTY,
            tennis::CALM_BONUS,
        ),
    ];

    for (activity, unplayable, wet, calm) in courts {
        let start = scale::START_SCORE + calm;
        let cases = [
            (Dimension::PrecipProb, court::DRY_MAX_PROB_PERCENT - NUDGE, start + court::DRY_BONUS, None),
            (Dimension::PrecipProb, court::DRY_MAX_PROB_PERCENT, start, None),
            (Dimension::PrecipProb, court::WET_PROB_PERCENT, start, None),
            (
                Dimension::PrecipProb,
                court::WET_PROB_PERCENT + NUDGE,
                start - wet,
                Some(ReasonId::WetCourt),
            ),
            (Dimension::PrecipMm, court::UNPLAYABLE_MM, start - wet, Some(ReasonId::WetCourt)),
            (
                Dimension::PrecipMm,
                court::UNPLAYABLE_MM + NUDGE,
                start - unplayable,
                Some(ReasonId::CourtUnplayable),
            ),
        ];

        for (dimension, value, expected, reason) in cases {
            let input = with_value(&neutral(activity), dimension, value);
            let raw = engine.evaluate(&input, activity);
            assert_eq!(raw.running, expected, "{activity} at {dimension:?} {value}");
            assert_eq!(
                raw.reason_ids,
                reason.into_iter().collect::<Vec<_>>(),
                "{activity} at {dimension:?} {value}"
            );
        }
    }
}

#[test]
fn test_field_sports_boundaries() {
    use Dimension::{Temp, Wind};
    check_boundaries(
        ActivityKind::FieldSports,
        &[
            above(Temp, field_sports::TOO_HOT_C, field_sports::TOO_HOT_PENALTY, ReasonId::TooHot),
            above(Temp, field_sports::HOT_C, field_sports::HOT_PENALTY, ReasonId::Hot),
            above(Temp, field_sports::WARM_C, field_sports::WARM_PENALTY, ReasonId::Warm),
            below(Temp, field_sports::FROST_C, field_sports::FROST_PENALTY, ReasonId::Frost),
            below(
                Temp,
                field_sports::TOO_COLD_C,
                field_sports::TOO_COLD_PENALTY,
                ReasonId::TooCold,
            ),
            below(Temp, field_sports::COLD_C, field_sports::COLD_PENALTY, ReasonId::Cold),
            above(Wind, field_sports::STORM_KMH, field_sports::STORM_PENALTY, ReasonId::Storm),
            above(
                Wind,
                field_sports::STRONG_WIND_KMH,
                field_sports::STRONG_WIND_PENALTY,
                ReasonId::StrongWind,
            ),
        ],
    );
}

#[test]
fn test_field_sports_wetness_steps() {
    let engine = ScoreEngine::canonical();
    let start = scale::START_SCORE;
    let cases = [
        (
            Dimension::PrecipProb,
            field_sports::DRY_MAX_PROB_PERCENT - NUDGE,
            start + field_sports::DRY_BONUS,
            None,
        ),
        (Dimension::PrecipProb, field_sports::DAMP_PROB_PERCENT, start, None),
        (
            Dimension::PrecipProb,
            field_sports::DAMP_PROB_PERCENT + NUDGE,
            start - field_sports::DAMP_PENALTY,
            Some(ReasonId::DampField),
        ),
        (
            Dimension::PrecipMm,
            field_sports::WET_FIELD_MM,
            start - field_sports::DAMP_PENALTY,
            Some(ReasonId::DampField),
        ),
        (
            Dimension::PrecipMm,
            field_sports::WET_FIELD_MM + NUDGE,
            start - field_sports::WET_FIELD_PENALTY,
            Some(ReasonId::WetField),
        ),
        (
            Dimension::PrecipMm,
            field_sports::WATERLOGGED_MM,
            start - field_sports::WET_FIELD_PENALTY,
            Some(ReasonId::WetField),
        ),
        (
            Dimension::PrecipMm,
            field_sports::WATERLOGGED_MM + NUDGE,
            start - field_sports::WATERLOGGED_PENALTY,
            Some(ReasonId::FieldWaterlogged),
        ),
    ];

    for (dimension, value, expected, reason) in cases {
        let input = with_value(&neutral(ActivityKind::FieldSports), dimension, value);
        let raw = engine.evaluate(&input, ActivityKind::FieldSports);
        assert_eq!(raw.running, expected, "field sports at {dimension:?} {value}");
        assert_eq!(
            raw.reason_ids,
            reason.into_iter().collect::<Vec<_>>(),
            "field sports at {dimension:?} {value}"
        );
    }
}

#[test]
fn test_drone_boundaries() {
    use Dimension::{Gusts, Kp, Temp, Visibility};
    check_boundaries(
        ActivityKind::Drone,
        &[
            above(
                Gusts,
                drone::DANGEROUS_GUSTS_KMH,
                drone::DANGEROUS_GUSTS_PENALTY,
                ReasonId::DangerousGusts,
            ),
            above(
                Gusts,
                drone::STRONG_GUSTS_KMH,
                drone::STRONG_GUSTS_PENALTY,
                ReasonId::StrongGusts,
            ),
            above(Gusts, drone::GUSTY_KMH, drone::GUSTY_PENALTY, ReasonId::Gusty),
            below(
                Visibility,
                drone::POOR_VISIBILITY_M,
                drone::POOR_VISIBILITY_PENALTY,
                ReasonId::PoorVisibility,
            ),
            below(
                Temp,
                drone::BATTERY_FREEZING_C,
                drone::BATTERY_FREEZING_PENALTY,
                ReasonId::BatteryFreezing,
            ),
            below(
                Temp,
                drone::BATTERY_COLD_C,
                drone::BATTERY_COLD_PENALTY,
                ReasonId::BatteryCold,
            ),
            above(
                Kp,
                drone::GEOMAGNETIC_KP,
                drone::GEOMAGNETIC_PENALTY,
                ReasonId::GeomagneticStorm,
            ),
        ],
    );
}

#[test]
fn test_commute_boundaries() {
    use Dimension::{PrecipMm, Wind};
    let boundaries = [
        above(PrecipMm, commute::RAIN_MM, commute::RAIN_PENALTY, ReasonId::CommuteRain),
        above(Wind, commute::WIND_KMH, commute::WIND_PENALTY, ReasonId::CommuteWind),
    ];
    check_boundaries(ActivityKind::Home, &boundaries);
    check_boundaries(ActivityKind::Work, &boundaries);
}

#[test]
fn test_any_precipitation_grounds_drone_and_telescope() {
    let engine = ScoreEngine::canonical();
    for (activity, reason) in [
        (ActivityKind::Drone, ReasonId::ElectronicsWater),
        (ActivityKind::Stargazing, ReasonId::TelescopeWet),
    ] {
        let dry = engine.evaluate(&neutral(activity), activity);
        assert!(!dry.pinned, "{activity}");

        let drizzle = with_value(&neutral(activity), Dimension::PrecipMm, NUDGE);
        let wet = engine.evaluate(&drizzle, activity);
        assert!(wet.pinned, "{activity}");
        assert_eq!(wet.running, scale::OVERRIDE_SCORE);
        assert_eq!(wet.reason_ids.first(), Some(&reason));
    }
}

#[test]
fn test_walking_sunny_bonus_threshold() {
    let engine = ScoreEngine::canonical();
    let chilly_walk = |sun_chance: f64| ActivityWeatherInput {
        sun_chance,
        ..calm_dry(walking::CHILLY_C - 2.0)
    };
    let spoiled = scale::START_SCORE - walking::CHILLY_PENALTY;

    let at_limit = engine.evaluate(&chilly_walk(walking::SUNNY_PERCENT), ActivityKind::Walking);
    assert_eq!(at_limit.running, spoiled);

    let sunny = engine.evaluate(
        &chilly_walk(walking::SUNNY_PERCENT + NUDGE),
        ActivityKind::Walking,
    );
    assert_eq!(sunny.running, spoiled + walking::SUNNY_BONUS);
    assert_eq!(sunny.reason_ids, vec![ReasonId::Chilly]);
}
