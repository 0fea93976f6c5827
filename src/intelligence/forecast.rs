// ABOUTME: Batch scoring of multi-day forecasts across a set of activities
// ABOUTME: Scores days in parallel with rayon and ranks activities per day
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Weer Activity Contributors

use super::activity_score::ScoreEngine;
use super::labels::LabelResolver;
use chrono::NaiveDate;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use tracing::debug;
use weer_core::{ActivityKind, ActivityScore, ActivityWeatherInput};

/// Aggregated weather for one forecast day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastDay {
    /// Calendar date in the location's time zone
    pub date: NaiveDate,
    /// Daily aggregates
    pub input: ActivityWeatherInput,
}

/// One activity's score on a given day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredActivity {
    /// Activity scored
    pub activity: ActivityKind,
    /// Its result
    #[serde(flatten)]
    pub score: ActivityScore,
}

/// Scores of every requested activity for one day, in request order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyActivityScores {
    /// Day scored
    pub date: NaiveDate,
    /// Scores in the order the activities were requested
    pub scores: Vec<ScoredActivity>,
}

impl DailyActivityScores {
    /// Scores from best to worst; ties keep catalog order
    #[must_use]
    pub fn ranked(&self) -> Vec<&ScoredActivity> {
        let mut ranked: Vec<&ScoredActivity> = self.scores.iter().collect();
        ranked.sort_by_key(|scored| (Reverse(scored.score.score10), scored.activity));
        ranked
    }

    /// Highest scoring activity, if any were requested
    #[must_use]
    pub fn best(&self) -> Option<&ScoredActivity> {
        self.ranked().into_iter().next()
    }
}

impl ScoreEngine {
    /// Score `activities` for every day of a forecast
    ///
    /// Days are scored in parallel; the output keeps the input day order.
    #[must_use]
    pub fn score_forecast(
        &self,
        days: &[ForecastDay],
        activities: &[ActivityKind],
        labels: &dyn LabelResolver,
    ) -> Vec<DailyActivityScores> {
        debug!(
            days = days.len(),
            activities = activities.len(),
            "Scoring forecast"
        );
        days.par_iter()
            .map(|day| DailyActivityScores {
                date: day.date,
                scores: activities
                    .iter()
                    .map(|activity| ScoredActivity {
                        activity: *activity,
                        score: self.score_with(&day.input, *activity, labels),
                    })
                    .collect(),
            })
            .collect()
    }
}
