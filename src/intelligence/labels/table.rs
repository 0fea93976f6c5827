// ABOUTME: Label table loaded from a flat JSON map of reason keys to text
// ABOUTME: Lets deployments ship translations without rebuilding the engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Weer Activity Contributors

use super::{LabelResolver, Locale};
use crate::errors::{AppError, AppResult, ErrorCode};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use weer_core::ReasonId;

/// Flat `{"reason.too_cold": "Too cold", ...}` table
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LabelTable {
    entries: BTreeMap<String, String>,
}

impl LabelTable {
    /// Full table for a built-in locale
    #[must_use]
    pub fn from_locale(locale: Locale) -> Self {
        ReasonId::ALL
            .iter()
            .map(|reason| (reason.key().to_owned(), locale.label(*reason).to_owned()))
            .collect()
    }

    /// Parse a JSON object of key to label
    ///
    /// # Errors
    ///
    /// Returns an error if the document is not a JSON object of strings
    pub fn from_json_str(json: &str) -> AppResult<Self> {
        serde_json::from_str(json).map_err(|e| {
            AppError::new(ErrorCode::InvalidLabels, format!("label table: {e}")).with_source(e)
        })
    }

    /// Read a JSON label table from disk
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a valid table
    pub fn from_file(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|e| {
            AppError::new(
                ErrorCode::InputUnreadable,
                format!("cannot read label table {}", path.display()),
            )
            .with_source(e)
        })?;
        Self::from_json_str(&json)
    }

    /// Label stored under `key`
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Insert or replace a label
    pub fn insert(&mut self, key: impl Into<String>, label: impl Into<String>) {
        self.entries.insert(key.into(), label.into());
    }

    /// Keys in sorted order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Entries in key order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(key, label)| (key.as_str(), label.as_str()))
    }

    /// Number of entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, String)> for LabelTable {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl LabelResolver for LabelTable {
    fn resolve(&self, key: &str) -> Option<String> {
        self.get(key).map(str::to_owned)
    }
}
