// ABOUTME: Activity intelligence: suitability scoring, reason labels and forecast batches
// ABOUTME: Re-exports the engine, label resolvers and batch types for path-based access
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Weer Activity Contributors

//! # Intelligence Module
//!
//! Turns normalized weather into activity advice.

/// Rule ladders, global rules and the score engine
pub mod activity_score;
/// Multi-day batch scoring
pub mod forecast;
/// Reason label catalogs and resolvers
pub mod labels;

pub use activity_score::{score, RawScore, ScoreEngine};
pub use forecast::{DailyActivityScores, ForecastDay, ScoredActivity};
pub use labels::{
    audit_labels, resolve_label, LabelAudit, LabelCatalog, LabelResolver, LabelTable, Locale,
};
