// ABOUTME: Per-evaluation running score with ordered reasons and override pinning
// ABOUTME: Applies ladder rungs where the first crossed tier wins within one weather dimension
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Weer Activity Contributors

use crate::config::scoring::Tier;
use weer_core::ReasonId;

/// One rung of a ladder, evaluated against a single measured value
#[derive(Debug, Clone, Copy)]
pub enum Rung {
    /// Fires when the value is strictly above the limit
    Above(Tier, ReasonId),
    /// Fires when the value is at or above the limit
    AtLeast(Tier, ReasonId),
    /// Fires when the value is strictly below the limit
    Below(Tier, ReasonId),
}

impl Rung {
    const fn tier(&self) -> Tier {
        match self {
            Self::Above(tier, _) | Self::AtLeast(tier, _) | Self::Below(tier, _) => *tier,
        }
    }

    const fn reason(&self) -> ReasonId {
        match self {
            Self::Above(_, reason) | Self::AtLeast(_, reason) | Self::Below(_, reason) => *reason,
        }
    }

    fn matches(&self, value: f64) -> bool {
        match self {
            Self::Above(tier, _) => value > tier.limit,
            Self::AtLeast(tier, _) => value >= tier.limit,
            Self::Below(tier, _) => value < tier.limit,
        }
    }
}

/// Running score for one evaluation
///
/// Starts at the configured start score. Once pinned by an override rule the
/// score stays at the override value and every later adjustment is ignored,
/// while the hazard reason stays first in the list.
#[derive(Debug, Clone)]
pub struct ScoreAccumulator {
    score: f64,
    reasons: Vec<ReasonId>,
    pinned: bool,
}

impl ScoreAccumulator {
    /// Start a new evaluation
    #[must_use]
    pub fn new(start_score: f64) -> Self {
        Self {
            score: start_score,
            reasons: Vec::new(),
            pinned: false,
        }
    }

    /// Subtract points and record the reason; zero or negative points are a no-op
    pub fn penalize(&mut self, points: f64, reason: ReasonId) {
        if self.pinned || points <= 0.0 {
            return;
        }
        self.score -= points;
        self.reasons.push(reason);
    }

    /// Add points, recording the reason when the bonus is labelled
    pub fn bonus(&mut self, points: f64, reason: Option<ReasonId>) {
        if self.pinned || points <= 0.0 {
            return;
        }
        self.score += points;
        if let Some(reason) = reason {
            self.reasons.push(reason);
        }
    }

    /// Force the score to the override value and make `reason` the headline
    pub fn pin_to_floor(&mut self, floor: f64, reason: ReasonId) {
        self.score = floor;
        if !self.pinned {
            self.reasons.insert(0, reason);
        }
        self.pinned = true;
    }

    /// Apply the first rung that matches `value`; returns whether one fired
    pub fn apply(&mut self, value: f64, rungs: &[Rung]) -> bool {
        rungs
            .iter()
            .find(|rung| rung.matches(value))
            .is_some_and(|rung| {
                self.penalize(rung.tier().points, rung.reason());
                true
            })
    }

    /// Current running score
    #[must_use]
    pub const fn score(&self) -> f64 {
        self.score
    }

    /// Whether an override rule pinned the score
    #[must_use]
    pub const fn is_pinned(&self) -> bool {
        self.pinned
    }

    /// Consume into the raw score and ordered reasons
    #[must_use]
    pub fn into_parts(self) -> (f64, Vec<ReasonId>) {
        (self.score, self.reasons)
    }
}
