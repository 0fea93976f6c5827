// ABOUTME: Integration tests for multi-day forecast scoring and ranking
// ABOUTME: Parses forecast JSON as sent by the web client and checks parallel results
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Weer Activity Contributors
#![allow(clippy::unwrap_used)]

mod common;

use common::init_test_logging;
use weer_activity_score::intelligence::{ForecastDay, LabelCatalog, Locale, ScoreEngine};
use weer_activity_score::ActivityKind;

const WEEK_JSON: &str = r#"[
  {"date": "2025-07-14", "input": {"tempFeelsLike": 24.0, "windKmh": 8.0, "gustsKmh": 14.0,
    "precipMm": 0.0, "precipProb": 5.0, "weatherCode": 1, "sunChance": 85.0,
    "cloudCover": 10.0, "visibility": 30000.0}},
  {"date": "2025-07-15", "input": {"tempFeelsLike": 14.0, "windKmh": 42.0, "gustsKmh": 70.0,
    "precipMm": 6.0, "precipProb": 95.0, "weatherCode": 95, "sunChance": 5.0,
    "cloudCover": 100.0, "visibility": 4000.0, "humidity": 92.0}},
  {"date": "2025-07-16", "input": {"tempFeelsLike": 19.0, "windKmh": 22.0, "gustsKmh": 35.0,
    "precipMm": 0.8, "precipProb": 60.0, "weatherCode": 80, "sunChance": 65.0,
    "cloudCover": 55.0, "visibility": 20000.0, "kpIndex": 3.0,
    "moonPhaseText": "Waxing crescent"}}
]"#;

fn week() -> Vec<ForecastDay> {
    serde_json::from_str(WEEK_JSON).unwrap()
}

#[test]
fn test_parses_client_json_with_missing_optionals() {
    let days = week();
    assert_eq!(days.len(), 3);
    assert!(days[0].input.humidity.is_none());
    assert_eq!(days[1].input.humidity, Some(92.0));
    assert!(days[1].input.is_thunderstorm());
    assert_eq!(days[2].input.moon_phase_text.as_deref(), Some("Waxing crescent"));
}

#[test]
fn test_parallel_matches_sequential() {
    init_test_logging();
    let engine = ScoreEngine::canonical();
    let catalog = LabelCatalog::new(Locale::De);
    let days = week();

    let batch = engine.score_forecast(&days, &ActivityKind::ALL, &catalog);
    for (day, result) in days.iter().zip(&batch) {
        assert_eq!(result.date, day.date);
        for scored in &result.scores {
            assert_eq!(
                scored.score,
                engine.score_localized(&day.input, scored.activity, Locale::De)
            );
        }
    }
}

#[test]
fn test_stormy_day_ranks_outdoor_water_sports_last() {
    let engine = ScoreEngine::canonical();
    let batch = engine.score_forecast(&week(), &ActivityKind::ALL, &LabelCatalog::default());
    let stormy = &batch[1];

    let ranked = stormy.ranked();
    assert!(ranked
        .windows(2)
        .all(|pair| pair[0].score.score10 >= pair[1].score.score10));

    let sailing = stormy
        .scores
        .iter()
        .find(|s| s.activity == ActivityKind::Sailing)
        .unwrap();
    assert_eq!(sailing.score.score10, 1);
    assert_eq!(stormy.best().map(|s| s.activity), Some(ActivityKind::Home));
}

#[test]
fn test_serialized_scores_use_client_field_names() {
    let engine = ScoreEngine::canonical();
    let batch = engine.score_forecast(&week()[..1], &[ActivityKind::Beach], &LabelCatalog::default());
    let json = serde_json::to_value(&batch).unwrap();

    let scored = &json[0]["scores"][0];
    assert_eq!(json[0]["date"], "2025-07-14");
    assert_eq!(scored["activity"], "beach");
    assert!(scored["score10"].is_u64());
    assert!(scored["reasonIds"].is_array());
    assert!(scored["text"].is_string());
}

#[test]
fn test_empty_forecast() {
    let batch = ScoreEngine::canonical().score_forecast(
        &[],
        &ActivityKind::ALL,
        &LabelCatalog::default(),
    );
    assert!(batch.is_empty());
}
