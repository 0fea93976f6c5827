// ABOUTME: Result of scoring one activity for one weather period
// ABOUTME: Holds the clamped 1-10 score, star rating and ordered triggered reasons
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Weer Activity Contributors

use super::ReasonId;
use serde::{Deserialize, Serialize};

/// Lowest score an activity can receive
pub const MIN_SCORE: u8 = 1;

/// Highest score an activity can receive
pub const MAX_SCORE: u8 = 10;

/// Suitability of an activity for one period
///
/// `reasons` and `reason_ids` are parallel: the label at index `i` was
/// resolved from the identifier at index `i`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityScore {
    /// Score on a 1-10 scale
    pub score10: u8,
    /// Star rating, always `score10 / 2`
    pub stars: f64,
    /// Localized labels of triggered rules, in firing order
    pub reasons: Vec<String>,
    /// Identifiers of triggered rules, in firing order
    pub reason_ids: Vec<ReasonId>,
    /// Headline: the first reason, or the perfect-conditions label
    pub text: String,
}

impl ActivityScore {
    /// Build a score from a raw running total
    ///
    /// The total is rounded half away from zero and clamped into
    /// [`MIN_SCORE`]..=[`MAX_SCORE`]. `labels` must be parallel to `reason_ids`.
    #[must_use]
    pub fn from_running_total(
        running: f64,
        reason_ids: Vec<ReasonId>,
        reasons: Vec<String>,
        perfect_label: String,
    ) -> Self {
        let score10 = clamp_score(running);
        let text = reasons.first().cloned().unwrap_or(perfect_label);
        Self {
            score10,
            stars: f64::from(score10) / 2.0,
            reasons,
            reason_ids,
            text,
        }
    }

    /// Whether no labelled rule fired
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        self.reason_ids.is_empty()
    }
}

/// Round and clamp a running total onto the 1-10 scale
///
/// Non-finite totals collapse to the minimum.
#[must_use]
pub fn clamp_score(running: f64) -> u8 {
    if running.is_nan() {
        return MIN_SCORE;
    }
    let clamped = running
        .round()
        .clamp(f64::from(MIN_SCORE), f64::from(MAX_SCORE));
    // Range checked above, the cast cannot truncate
    clamped as u8
}
