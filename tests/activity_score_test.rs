// ABOUTME: Integration tests for the activity score engine's contract
// ABOUTME: Covers clamping, determinism, fallbacks, overrides and global rule behaviour
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Weer Activity Contributors
#![allow(clippy::unwrap_used, clippy::float_cmp)]

mod common;

use common::{calm_dry, extreme_inputs, init_test_logging, showery};
use weer_activity_score::intelligence::{score, LabelCatalog, Locale, ScoreEngine};
use weer_activity_score::{ActivityKind, ReasonId, MAX_SCORE, MIN_SCORE};

#[test]
fn test_scores_always_within_scale() {
    init_test_logging();
    let engine = ScoreEngine::canonical();
    for input in extreme_inputs() {
        for activity in ActivityKind::ALL {
            let result = engine.score(&input, activity);
            assert!(
                (MIN_SCORE..=MAX_SCORE).contains(&result.score10),
                "{activity}: {}",
                result.score10
            );
            assert_eq!(result.stars, f64::from(result.score10) / 2.0);
            assert_eq!(result.reasons.len(), result.reason_ids.len());
        }
    }
}

#[test]
fn test_scoring_is_deterministic() {
    let engine = ScoreEngine::canonical();
    for input in extreme_inputs().iter().step_by(7) {
        for activity in ActivityKind::ALL {
            assert_eq!(engine.score(input, activity), engine.score(input, activity));
        }
    }
}

#[test]
fn test_perfect_conditions_fallback() {
    let input = calm_dry(22.0);
    let result = score(&input, ActivityKind::Bbq);
    assert_eq!(result.score10, 10);
    assert_eq!(result.stars, 5.0);
    assert!(result.reasons.is_empty());
    assert!(result.is_perfect());
    assert_eq!(result.text, "Perfect conditions");
}

#[test]
fn test_sailing_thunder_forces_minimum() {
    let mut input = calm_dry(20.0);
    input.wind_kmh = 18.0;
    input.weather_code = 96;
    let result = score(&input, ActivityKind::Sailing);
    assert_eq!(result.score10, 1);
    assert_eq!(result.reason_ids[0], ReasonId::ThunderDanger);
}

#[test]
fn test_drone_any_rain_forces_minimum() {
    let mut input = calm_dry(20.0);
    input.precip_mm = 0.1;
    input.sun_chance = 90.0;
    input.precip_prob = 70.0;
    let result = score(&input, ActivityKind::Drone);
    assert_eq!(result.score10, 1);
    assert_eq!(result.reason_ids, vec![ReasonId::ElectronicsWater]);
}

#[test]
fn test_pinned_score_ignores_later_bonuses() {
    let mut input = calm_dry(20.0);
    input.precip_mm = 0.3;
    input.moon_phase_text = Some("New Moon".to_owned());
    input.sun_chance = 80.0;
    let raw = ScoreEngine::canonical().evaluate(&input, ActivityKind::Stargazing);
    assert!(raw.pinned);
    assert_eq!(raw.running, 1.0);
    assert_eq!(raw.reason_ids, vec![ReasonId::TelescopeWet]);
}

#[test]
fn test_walking_sunshine_between_showers() {
    let sunny = score(&showery(80.0), ActivityKind::Walking);
    let dull = score(&showery(10.0), ActivityKind::Walking);

    assert_eq!(sunny.score10, 8);
    assert!(sunny.reason_ids.contains(&ReasonId::SunBetweenShowers));
    assert_eq!(dull.score10, 2);
    assert!(!dull.reason_ids.contains(&ReasonId::SunBetweenShowers));
    assert!(dull.reason_ids.contains(&ReasonId::LittleSun));
}

#[test]
fn test_sunshine_bonus_skipped_for_indoor_activities() {
    let mut input = showery(90.0);
    input.precip_mm = 3.0;
    let result = score(&input, ActivityKind::Work);
    assert_eq!(result.score10, 8);
    assert_eq!(result.reason_ids, vec![ReasonId::CommuteRain]);
}

#[test]
fn test_sub_zero_penalty_exemptions() {
    let input = calm_dry(-1.0);

    let tennis = score(&input, ActivityKind::Tennis);
    assert_eq!(tennis.score10, 2);
    assert!(!tennis.reason_ids.contains(&ReasonId::FeelsSubZero));

    let cycling = score(&input, ActivityKind::Cycling);
    assert_eq!(cycling.score10, 1);
    assert_eq!(
        cycling.reason_ids,
        vec![ReasonId::Freezing, ReasonId::FeelsSubZero]
    );
}

#[test]
fn test_global_rules_come_last() {
    let mut input = showery(80.0);
    input.temp_feels_like = -2.0;
    let result = score(&input, ActivityKind::Walking);
    let n = result.reason_ids.len();
    assert_eq!(
        &result.reason_ids[n - 2..],
        &[ReasonId::SunBetweenShowers, ReasonId::FeelsSubZero]
    );
}

#[test]
fn test_cycling_non_increasing_in_wind() {
    let engine = ScoreEngine::canonical();
    for temp in [-5.0, 8.0, 20.0, 35.0] {
        let mut previous = u8::MAX;
        for wind in 0..=120 {
            let mut input = calm_dry(temp);
            input.wind_kmh = f64::from(wind);
            let current = engine.score(&input, ActivityKind::Cycling).score10;
            assert!(current <= previous, "wind {wind} at {temp}°C");
            previous = current;
        }
    }
}

#[test]
fn test_activities_are_independent_of_call_order() {
    let engine = ScoreEngine::canonical();
    let input = showery(55.0);
    let forward: Vec<_> = ActivityKind::ALL
        .iter()
        .map(|a| engine.score(&input, *a))
        .collect();
    let mut backward: Vec<_> = ActivityKind::ALL
        .iter()
        .rev()
        .map(|a| engine.score(&input, *a))
        .collect();
    backward.reverse();
    assert_eq!(forward, backward);
}

#[test]
fn test_locale_changes_labels_not_numbers() {
    let engine = ScoreEngine::canonical();
    let input = calm_dry(3.0);
    for activity in ActivityKind::ALL {
        let en = engine.score(&input, activity);
        for locale in Locale::ALL {
            let localized = engine.score_localized(&input, activity, locale);
            assert_eq!(localized.score10, en.score10);
            assert_eq!(localized.reason_ids, en.reason_ids);
        }
    }
    let nl = engine.score_with(&input, ActivityKind::Bbq, &LabelCatalog::for_locale("nl-BE"));
    assert_eq!(nl.text, Locale::Nl.label(ReasonId::TooCold));
}
