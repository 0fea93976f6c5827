// ABOUTME: Helper modules for weer-score
// ABOUTME: Provides input reading, activity parsing and JSON output helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Weer Activity Contributors

pub mod input;
pub mod output;
