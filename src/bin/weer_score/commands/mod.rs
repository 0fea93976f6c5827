// ABOUTME: Re-exports command modules for weer-score
// ABOUTME: Provides single-period scoring, forecast ranking and label audit commands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Weer Activity Contributors

pub mod audit;
pub mod forecast;
pub mod score;
