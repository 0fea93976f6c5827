// ABOUTME: Forecast ranking command for weer-score
// ABOUTME: Scores every day of a forecast and prints the ranked activities per day
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Weer Activity Contributors

use chrono::NaiveDate;
use serde::Serialize;
use std::path::Path;
use tracing::info;
use weer_activity_score::errors::AppResult;
use weer_activity_score::intelligence::{ForecastDay, LabelResolver, ScoreEngine, ScoredActivity};
use weer_activity_score::ActivityKind;

use crate::helpers::input::{parse_activities, read_json};
use crate::helpers::output::print_json;

/// Ranked view of one forecast day
#[derive(Serialize)]
struct DayReport<'a> {
    date: NaiveDate,
    best: Option<ActivityKind>,
    ranked: Vec<&'a ScoredActivity>,
}

/// Score and rank activities for each forecast day
pub fn run(
    engine: &ScoreEngine,
    labels: &dyn LabelResolver,
    activity_tags: &[String],
    input_path: Option<&Path>,
    top: Option<usize>,
) -> AppResult<()> {
    let activities = parse_activities(activity_tags)?;
    let days: Vec<ForecastDay> = read_json(input_path)?;

    let results = engine.score_forecast(&days, &activities, labels);
    info!(days = results.len(), "Scored forecast");

    let reports: Vec<DayReport<'_>> = results
        .iter()
        .map(|day| {
            let mut ranked = day.ranked();
            if let Some(top) = top {
                ranked.truncate(top);
            }
            DayReport {
                date: day.date,
                best: day.best().map(|scored| scored.activity),
                ranked,
            }
        })
        .collect();

    print_json(&reports)
}
