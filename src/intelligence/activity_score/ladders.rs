// ABOUTME: Activity-specific rule ladders for the suitability engine
// ABOUTME: One pure function per activity feeding penalties, bonuses and overrides into the accumulator
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Weer Activity Contributors

//! Activity ladders
//!
//! Each weather dimension (wind, gusts, temperature, rain, ...) is its own
//! chain of rungs ordered most severe first, so at most one rung per chain
//! fires. Dimensions accumulate. Thresholds come from [`ScoringConfig`].

use super::accumulator::{Rung, ScoreAccumulator};
use crate::config::scoring::{CommuteThresholds, CourtThresholds, ScoringConfig};
use weer_core::{ActivityKind, ActivityWeatherInput, ReasonId};

/// Signature shared by every activity ladder
pub type Ladder = fn(&ScoringConfig, &ActivityWeatherInput, &mut ScoreAccumulator);

/// Ladder evaluating `activity`
#[must_use]
pub fn ladder_for(activity: ActivityKind) -> Ladder {
    match activity {
        ActivityKind::Bbq => bbq,
        ActivityKind::Cycling => cycling,
        ActivityKind::Walking => walking,
        ActivityKind::Sailing => sailing,
        ActivityKind::Running => running,
        ActivityKind::Beach => beach,
        ActivityKind::Gardening => gardening,
        ActivityKind::Stargazing => stargazing,
        ActivityKind::Golf => golf,
        ActivityKind::Padel => padel,
        ActivityKind::FieldSports => field_sports,
        ActivityKind::Tennis => tennis,
        ActivityKind::Drone => drone,
        ActivityKind::Home => home,
        ActivityKind::Work => work,
    }
}

fn is_thunderstorm(config: &ScoringConfig, input: &ActivityWeatherInput) -> bool {
    config.scale.thunderstorm_codes.contains(&input.weather_code)
}

/// No measurable precipitation and a low chance of any
fn is_dry(input: &ActivityWeatherInput, max_prob_percent: f64) -> bool {
    input.precip_mm.abs() < f64::EPSILON && input.precip_prob < max_prob_percent
}

fn bbq(config: &ScoringConfig, input: &ActivityWeatherInput, acc: &mut ScoreAccumulator) {
    let t = &config.bbq;
    if input.precip_mm > t.rain_min_mm || input.precip_prob > t.rain_prob_percent {
        acc.penalize(t.rain_penalty, ReasonId::Rain);
    }
    acc.apply(
        input.temp_feels_like,
        &[
            Rung::Below(t.too_cold, ReasonId::TooCold),
            Rung::Below(t.cold, ReasonId::Cold),
            Rung::Below(t.chilly, ReasonId::Chilly),
            Rung::Above(t.too_hot, ReasonId::TooHot),
        ],
    );
    acc.apply(
        input.wind_kmh,
        &[
            Rung::Above(t.strong_wind, ReasonId::StrongWind),
            Rung::Above(t.windy, ReasonId::Windy),
            Rung::Above(t.breezy, ReasonId::Breezy),
        ],
    );
}

fn cycling(config: &ScoringConfig, input: &ActivityWeatherInput, acc: &mut ScoreAccumulator) {
    let t = &config.cycling;
    acc.apply(
        input.wind_kmh,
        &[
            Rung::Above(t.storm, ReasonId::Storm),
            Rung::Above(t.very_strong_wind, ReasonId::VeryStrongWind),
            Rung::Above(t.strong_wind, ReasonId::StrongWind),
            Rung::Above(t.windy, ReasonId::Windy),
        ],
    );
    acc.apply(
        input.gusts_kmh,
        &[
            Rung::Above(t.dangerous_gusts, ReasonId::DangerousGusts),
            Rung::Above(t.strong_gusts, ReasonId::StrongGusts),
        ],
    );
    acc.penalize(t.rain_penalty(input.precip_mm), ReasonId::Rain);
    acc.apply(
        input.temp_feels_like,
        &[
            Rung::Below(t.freezing, ReasonId::Freezing),
            Rung::Below(t.too_cold, ReasonId::TooCold),
            Rung::Below(t.cold, ReasonId::Cold),
        ],
    );
    acc.apply(
        input.temp_feels_like,
        &[
            Rung::Above(t.too_hot, ReasonId::TooHot),
            Rung::Above(t.hot, ReasonId::Hot),
        ],
    );
}

fn walking(config: &ScoringConfig, input: &ActivityWeatherInput, acc: &mut ScoreAccumulator) {
    let t = &config.walking;
    acc.apply(
        input.precip_prob,
        &[Rung::Above(t.rain_chance, ReasonId::RainChance)],
    );
    acc.apply(input.precip_mm, &[Rung::Above(t.rain, ReasonId::Rain)]);
    acc.apply(
        input.wind_kmh,
        &[
            Rung::Above(t.storm, ReasonId::Storm),
            Rung::Above(t.very_strong_wind, ReasonId::VeryStrongWind),
            Rung::Above(t.strong_wind, ReasonId::StrongWind),
            Rung::Above(t.windy, ReasonId::Windy),
        ],
    );
    acc.apply(
        input.temp_feels_like,
        &[
            Rung::Below(t.freezing, ReasonId::Freezing),
            Rung::Below(t.cold, ReasonId::Cold),
            Rung::Below(t.chilly, ReasonId::Chilly),
        ],
    );
    acc.apply(
        input.temp_feels_like,
        &[
            Rung::Above(t.too_hot, ReasonId::TooHot),
            Rung::Above(t.hot, ReasonId::Hot),
        ],
    );

    let dull = acc.apply(input.sun_chance, &[Rung::Below(t.little_sun, ReasonId::LittleSun)]);
    // Sunshine only lifts a walk that something else already spoiled
    if !dull && input.sun_chance > t.sunny_bonus.limit && acc.score() < config.scale.start_score {
        acc.bonus(t.sunny_bonus.points, None);
    }
}

fn sailing(config: &ScoringConfig, input: &ActivityWeatherInput, acc: &mut ScoreAccumulator) {
    let t = &config.sailing;
    acc.apply(
        input.wind_kmh,
        &[
            Rung::Above(t.storm, ReasonId::Storm),
            Rung::Above(t.very_strong_wind, ReasonId::VeryStrongWind),
            Rung::Above(t.windy, ReasonId::Windy),
            Rung::Below(t.no_wind, ReasonId::NoWind),
            Rung::Below(t.light_wind, ReasonId::LightWind),
        ],
    );
    if is_thunderstorm(config, input) {
        acc.pin_to_floor(config.scale.override_score, ReasonId::ThunderDanger);
    }
    acc.apply(
        input.temp_feels_like,
        &[
            Rung::Below(t.icy_water, ReasonId::IcyWater),
            Rung::Below(t.cold_water, ReasonId::ColdWater),
            Rung::Below(t.chilly, ReasonId::Chilly),
        ],
    );
}

fn running(config: &ScoringConfig, input: &ActivityWeatherInput, acc: &mut ScoreAccumulator) {
    let t = &config.running;
    acc.apply(
        input.temp_feels_like,
        &[
            Rung::Above(t.too_hot, ReasonId::TooHot),
            Rung::Above(t.warm, ReasonId::Warm),
            Rung::Below(t.freezing, ReasonId::Freezing),
            Rung::Below(t.cold, ReasonId::Cold),
        ],
    );
    if let Some(humidity) = input.humidity {
        if humidity > t.humid_percent && input.temp_feels_like > t.humid_min_c {
            acc.penalize(t.humid_penalty, ReasonId::Humid);
        }
    }
    acc.apply(input.wind_kmh, &[Rung::Above(t.strong_wind, ReasonId::StrongWind)]);
    acc.apply(
        input.precip_mm,
        &[
            Rung::Above(t.heavy_rain, ReasonId::HeavyRain),
            Rung::Above(t.light_rain, ReasonId::LightRain),
        ],
    );
}

fn beach(config: &ScoringConfig, input: &ActivityWeatherInput, acc: &mut ScoreAccumulator) {
    let t = &config.beach;
    acc.apply(
        input.temp_feels_like,
        &[
            Rung::Below(t.too_cold, ReasonId::TooCold),
            Rung::Below(t.cold, ReasonId::Cold),
            Rung::Below(t.chilly, ReasonId::Chilly),
        ],
    );
    acc.apply(
        input.cloud_cover,
        &[
            Rung::Above(t.overcast, ReasonId::Overcast),
            Rung::Above(t.cloudy, ReasonId::Cloudy),
        ],
    );
    acc.apply(input.wind_kmh, &[Rung::Above(t.strong_wind, ReasonId::StrongWind)]);
    acc.apply(
        input.precip_prob,
        &[Rung::Above(t.rain_chance, ReasonId::RainChance)],
    );
}

fn gardening(config: &ScoringConfig, input: &ActivityWeatherInput, acc: &mut ScoreAccumulator) {
    let t = &config.gardening;
    acc.apply(input.precip_mm, &[Rung::Above(t.rain, ReasonId::Rain)]);
    if let Some(precip_24h) = input.precip_24h {
        acc.apply(precip_24h, &[Rung::Above(t.muddy_soil, ReasonId::MuddySoil)]);
    }
    acc.apply(
        input.temp_feels_like,
        &[
            Rung::Below(t.frost, ReasonId::Frost),
            Rung::Below(t.cold, ReasonId::Cold),
            Rung::Below(t.chilly, ReasonId::Chilly),
            Rung::Above(t.too_hot, ReasonId::TooHot),
            Rung::Above(t.hot, ReasonId::Hot),
        ],
    );
    acc.apply(
        input.wind_kmh,
        &[
            Rung::Above(t.storm, ReasonId::Storm),
            Rung::Above(t.very_strong_wind, ReasonId::VeryStrongWind),
            Rung::Above(t.strong_wind, ReasonId::StrongWind),
        ],
    );
}

fn stargazing(config: &ScoringConfig, input: &ActivityWeatherInput, acc: &mut ScoreAccumulator) {
    let t = &config.stargazing;
    acc.apply(
        input.cloud_cover,
        &[
            Rung::Above(t.overcast, ReasonId::Overcast),
            Rung::Above(t.mostly_cloudy, ReasonId::MostlyCloudy),
            Rung::Above(t.cloudy, ReasonId::Cloudy),
            Rung::Above(t.some_clouds, ReasonId::SomeClouds),
        ],
    );
    acc.apply(
        input.visibility,
        &[Rung::Below(t.poor_visibility, ReasonId::PoorVisibility)],
    );
    if input.precip_mm > 0.0 {
        acc.pin_to_floor(config.scale.override_score, ReasonId::TelescopeWet);
    }
    acc.apply(
        input.temp_feels_like,
        &[
            Rung::Below(t.freezing, ReasonId::Freezing),
            Rung::Below(t.cold, ReasonId::Cold),
            Rung::Below(t.chilly, ReasonId::Chilly),
        ],
    );
    acc.apply(
        input.wind_kmh,
        &[
            Rung::Above(t.strong_wind, ReasonId::StrongWind),
            Rung::Above(t.windy, ReasonId::Windy),
        ],
    );
    if input
        .moon_phase_text
        .as_deref()
        .is_some_and(|phase| t.is_new_moon(phase))
    {
        acc.bonus(t.new_moon_bonus, Some(ReasonId::NewMoon));
    }
}

fn golf(config: &ScoringConfig, input: &ActivityWeatherInput, acc: &mut ScoreAccumulator) {
    let t = &config.golf;
    acc.apply(
        input.wind_kmh,
        &[
            Rung::Above(t.storm, ReasonId::Storm),
            Rung::Above(t.windy, ReasonId::Windy),
        ],
    );
    acc.apply(input.precip_mm, &[Rung::Above(t.rain, ReasonId::Rain)]);
    if is_thunderstorm(config, input) {
        acc.pin_to_floor(config.scale.override_score, ReasonId::ThunderLifeThreatening);
    }
    acc.apply(
        input.temp_feels_like,
        &[
            Rung::Below(t.frost, ReasonId::Frost),
            Rung::Below(t.too_cold, ReasonId::TooCold),
            Rung::Below(t.cold, ReasonId::Cold),
        ],
    );
}

fn padel(config: &ScoringConfig, input: &ActivityWeatherInput, acc: &mut ScoreAccumulator) {
    court(&config.padel, input, acc);
}

fn tennis(config: &ScoringConfig, input: &ActivityWeatherInput, acc: &mut ScoreAccumulator) {
    court(&config.tennis, input, acc);
}

fn court(t: &CourtThresholds, input: &ActivityWeatherInput, acc: &mut ScoreAccumulator) {
    acc.apply(
        input.temp_feels_like,
        &[
            Rung::Above(t.too_hot, ReasonId::TooHot),
            Rung::Above(t.warm, ReasonId::Warm),
            Rung::Below(t.frost, ReasonId::Frost),
            Rung::Below(t.too_cold, ReasonId::TooCold),
            Rung::Below(t.cold, ReasonId::Cold),
        ],
    );

    if is_dry(input, t.dry_max_prob_percent) {
        acc.bonus(t.dry_bonus, None);
    }
    if input.precip_mm > t.unplayable.limit {
        acc.penalize(t.unplayable.points, ReasonId::CourtUnplayable);
    } else if input.precip_mm > 0.0 || input.precip_prob > t.wet_prob_percent {
        acc.penalize(t.wet_court_penalty, ReasonId::WetCourt);
    }

    let mut wind = vec![
        Rung::Above(t.very_strong_wind, ReasonId::VeryStrongWind),
        Rung::Above(t.strong_wind, ReasonId::StrongWind),
        Rung::Above(t.windy, ReasonId::Windy),
    ];
    wind.extend(t.breezy.map(|tier| Rung::AtLeast(tier, ReasonId::Breezy)));
    acc.apply(input.wind_kmh, &wind);

    if let Some(calm) = t.calm_bonus {
        if input.wind_kmh < calm.limit {
            acc.bonus(calm.points, None);
        }
    }
}

fn field_sports(config: &ScoringConfig, input: &ActivityWeatherInput, acc: &mut ScoreAccumulator) {
    let t = &config.field_sports;
    acc.apply(
        input.temp_feels_like,
        &[
            Rung::Above(t.too_hot, ReasonId::TooHot),
            Rung::Above(t.hot, ReasonId::Hot),
            Rung::Above(t.warm, ReasonId::Warm),
            Rung::Below(t.frost, ReasonId::Frost),
            Rung::Below(t.too_cold, ReasonId::TooCold),
            Rung::Below(t.cold, ReasonId::Cold),
        ],
    );

    if is_dry(input, t.dry_max_prob_percent) {
        acc.bonus(t.dry_bonus, None);
    }
    let soaked = acc.apply(
        input.precip_mm,
        &[
            Rung::Above(t.waterlogged, ReasonId::FieldWaterlogged),
            Rung::Above(t.wet_field, ReasonId::WetField),
        ],
    );
    if !soaked && (input.precip_mm > 0.0 || input.precip_prob > t.damp_prob_percent) {
        acc.penalize(t.damp_penalty, ReasonId::DampField);
    }

    acc.apply(
        input.wind_kmh,
        &[
            Rung::Above(t.storm, ReasonId::Storm),
            Rung::Above(t.strong_wind, ReasonId::StrongWind),
        ],
    );
}

fn drone(config: &ScoringConfig, input: &ActivityWeatherInput, acc: &mut ScoreAccumulator) {
    let t = &config.drone;
    if input.precip_mm > 0.0 {
        acc.pin_to_floor(config.scale.override_score, ReasonId::ElectronicsWater);
    }
    acc.apply(
        input.gusts_kmh,
        &[
            Rung::Above(t.dangerous_gusts, ReasonId::DangerousGusts),
            Rung::Above(t.strong_gusts, ReasonId::StrongGusts),
            Rung::Above(t.gusty, ReasonId::Gusty),
        ],
    );
    acc.apply(
        input.visibility,
        &[Rung::Below(t.poor_visibility, ReasonId::PoorVisibility)],
    );
    acc.apply(
        input.temp_feels_like,
        &[
            Rung::Below(t.battery_freezing, ReasonId::BatteryFreezing),
            Rung::Below(t.battery_cold, ReasonId::BatteryCold),
        ],
    );
    if let Some(kp_index) = input.kp_index {
        acc.apply(
            kp_index,
            &[Rung::Above(t.geomagnetic_storm, ReasonId::GeomagneticStorm)],
        );
    }
}

fn home(config: &ScoringConfig, input: &ActivityWeatherInput, acc: &mut ScoreAccumulator) {
    commute(&config.home, input, acc);
}

fn work(config: &ScoringConfig, input: &ActivityWeatherInput, acc: &mut ScoreAccumulator) {
    commute(&config.work, input, acc);
}

fn commute(t: &CommuteThresholds, input: &ActivityWeatherInput, acc: &mut ScoreAccumulator) {
    acc.apply(input.precip_mm, &[Rung::Above(t.rain, ReasonId::CommuteRain)]);
    acc.apply(input.wind_kmh, &[Rung::Above(t.wind, ReasonId::CommuteWind)]);
}
