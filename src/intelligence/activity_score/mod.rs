// ABOUTME: Activity suitability scoring engine turning one period of weather into a 1-10 score
// ABOUTME: Runs the activity ladder, applies global rules, clamps, and resolves reason labels
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Weer Activity Contributors

//! # Activity Score Engine
//!
//! Scoring is a pure function of `(config, input, activity)`:
//!
//! 1. Start from the configured start score (10)
//! 2. Run the activity's ladder, one first-match-wins chain per dimension
//! 3. Apply the global sunshine bonus and sub-zero penalty
//! 4. Round and clamp into 1..=10, halve for stars
//!
//! Override rules (thunder on the water or the course, any rain for drones
//! and telescopes) pin the score to the floor and put their reason first.
//! So does a NaN anywhere in the input.
//! Nothing that runs afterwards can lift a pinned score.
//!
//! Labels are resolved after the arithmetic so that every locale sees the
//! same numbers.

mod accumulator;
mod global_rules;
mod ladders;

pub use accumulator::{Rung, ScoreAccumulator};
pub use global_rules::sunshine_bonus;

use super::labels::{resolve_label, LabelCatalog, LabelResolver, Locale};
use crate::config::ScoringConfig;
use std::sync::OnceLock;
use tracing::trace;
use weer_core::{clamp_score, ActivityKind, ActivityScore, ActivityWeatherInput, ReasonId};

/// Arithmetic outcome of one evaluation, before labels are attached
#[derive(Debug, Clone, PartialEq)]
pub struct RawScore {
    /// Activity that was scored
    pub activity: ActivityKind,
    /// Running total before rounding and clamping
    pub running: f64,
    /// Whether an override rule pinned the score
    pub pinned: bool,
    /// Fired rules in order
    pub reason_ids: Vec<ReasonId>,
}

impl RawScore {
    /// Clamped 1-10 score
    #[must_use]
    pub fn score10(&self) -> u8 {
        clamp_score(self.running)
    }
}

/// Deterministic scorer parameterized by a [`ScoringConfig`]
#[derive(Debug, Clone, Default)]
pub struct ScoreEngine {
    config: ScoringConfig,
}

impl ScoreEngine {
    /// Engine with the given thresholds
    #[must_use]
    pub const fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    /// Shared engine with the built-in thresholds
    #[must_use]
    pub fn canonical() -> &'static Self {
        static CANONICAL: OnceLock<ScoreEngine> = OnceLock::new();
        CANONICAL.get_or_init(Self::default)
    }

    /// Engine using the process-wide configuration from the environment
    #[must_use]
    pub fn from_global() -> Self {
        Self::new(ScoringConfig::global().clone())
    }

    /// Thresholds this engine scores with
    #[must_use]
    pub const fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Run the arithmetic without resolving labels
    #[must_use]
    pub fn evaluate(&self, input: &ActivityWeatherInput, activity: ActivityKind) -> RawScore {
        let mut acc = ScoreAccumulator::new(self.config.scale.start_score);
        // NaN fails every comparison and would otherwise read as perfect weather
        if input.has_nan() {
            acc.pin_to_floor(self.config.scale.override_score, ReasonId::MissingData);
        }
        ladders::ladder_for(activity)(&self.config, input, &mut acc);
        global_rules::apply(&self.config.global, input, activity, &mut acc);

        let pinned = acc.is_pinned();
        let (running, reason_ids) = acc.into_parts();
        trace!(
            activity = %activity,
            running,
            pinned,
            reasons = ?reason_ids,
            "Scored activity"
        );
        RawScore {
            activity,
            running,
            pinned,
            reason_ids,
        }
    }

    /// Score with English labels
    #[must_use]
    pub fn score(&self, input: &ActivityWeatherInput, activity: ActivityKind) -> ActivityScore {
        self.score_localized(input, activity, Locale::En)
    }

    /// Score with labels from a built-in locale
    #[must_use]
    pub fn score_localized(
        &self,
        input: &ActivityWeatherInput,
        activity: ActivityKind,
        locale: Locale,
    ) -> ActivityScore {
        self.score_with(input, activity, &LabelCatalog::new(locale))
    }

    /// Score with labels from any resolver, falling back to English per key
    #[must_use]
    pub fn score_with(
        &self,
        input: &ActivityWeatherInput,
        activity: ActivityKind,
        labels: &dyn LabelResolver,
    ) -> ActivityScore {
        let raw = self.evaluate(input, activity);
        let reasons = raw
            .reason_ids
            .iter()
            .map(|reason| resolve_label(labels, *reason))
            .collect();
        ActivityScore::from_running_total(
            raw.running,
            raw.reason_ids,
            reasons,
            resolve_label(labels, ReasonId::Perfect),
        )
    }

    /// Score every activity in the catalog, in catalog order
    #[must_use]
    pub fn score_all(
        &self,
        input: &ActivityWeatherInput,
        labels: &dyn LabelResolver,
    ) -> Vec<(ActivityKind, ActivityScore)> {
        ActivityKind::ALL
            .into_iter()
            .map(|activity| (activity, self.score_with(input, activity, labels)))
            .collect()
    }
}

/// Score one activity with the built-in thresholds and English labels
#[must_use]
pub fn score(input: &ActivityWeatherInput, activity: ActivityKind) -> ActivityScore {
    ScoreEngine::canonical().score(input, activity)
}
