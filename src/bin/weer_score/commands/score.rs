// ABOUTME: Single-period scoring command for weer-score
// ABOUTME: Scores the requested activities for one weather input and prints them as JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Weer Activity Contributors

use std::path::Path;
use tracing::info;
use weer_activity_score::errors::AppResult;
use weer_activity_score::intelligence::{LabelResolver, ScoreEngine, ScoredActivity};
use weer_activity_score::ActivityWeatherInput;

use crate::helpers::input::{parse_activities, read_json};
use crate::helpers::output::print_json;

/// Score one period for each requested activity
pub fn run(
    engine: &ScoreEngine,
    labels: &dyn LabelResolver,
    activity_tags: &[String],
    input_path: Option<&Path>,
) -> AppResult<()> {
    let activities = parse_activities(activity_tags)?;
    let input: ActivityWeatherInput = read_json(input_path)?;

    let scores: Vec<ScoredActivity> = activities
        .into_iter()
        .map(|activity| ScoredActivity {
            activity,
            score: engine.score_with(&input, activity, labels),
        })
        .collect();

    info!(activities = scores.len(), "Scored period");
    print_json(&scores)
}
