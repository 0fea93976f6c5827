// ABOUTME: Consistency audit for translated label tables against a reference locale
// ABOUTME: Flags missing keys, unknown keys, likely untranslated values and Title Case labels
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Weer Activity Contributors

use super::LabelTable;
use serde::Serialize;
use weer_core::ReasonId;

/// Values this short are often legitimately identical across languages
const MIN_UNTRANSLATED_LEN: usize = 6;

/// Labels with more words than this are checked for Title Case
const TITLE_CASE_MIN_WORDS: usize = 4;

/// Findings of a label audit
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct LabelAudit {
    /// Keys present in the reference but absent from the table
    pub missing: Vec<String>,
    /// Keys in the table that no scoring rule produces
    pub unknown: Vec<String>,
    /// `(key, value)` pairs identical to the reference, likely never translated
    pub untranslated: Vec<(String, String)>,
    /// `(key, value)` pairs written in Title Case instead of sentence case
    pub title_case: Vec<(String, String)>,
}

impl LabelAudit {
    /// Whether the audit found nothing to fix
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.missing.is_empty()
            && self.unknown.is_empty()
            && self.untranslated.is_empty()
            && self.title_case.is_empty()
    }
}

/// Compare `table` with `reference`
#[must_use]
pub fn audit_labels(table: &LabelTable, reference: &LabelTable) -> LabelAudit {
    let missing = reference
        .keys()
        .filter(|key| table.get(key).is_none())
        .map(str::to_owned)
        .collect();

    let unknown = table
        .keys()
        .filter(|key| ReasonId::from_key(key).is_none())
        .map(str::to_owned)
        .collect();

    let untranslated = table
        .iter()
        .filter(|(key, value)| reference.get(key) == Some(*value) && looks_translatable(value))
        .map(|(key, value)| (key.to_owned(), value.to_owned()))
        .collect();

    let title_case = table
        .iter()
        .filter(|(_, value)| is_title_case(value))
        .map(|(key, value)| (key.to_owned(), value.to_owned()))
        .collect();

    LabelAudit {
        missing,
        unknown,
        untranslated,
        title_case,
    }
}

/// Long enough and not a bare number
fn looks_translatable(value: &str) -> bool {
    let compact: String = value.chars().filter(|c| !c.is_whitespace()).collect();
    value.chars().count() >= MIN_UNTRANSLATED_LEN && !compact.chars().all(|c| c.is_ascii_digit())
}

/// Every word capitalized, ignoring ALL CAPS
fn is_title_case(value: &str) -> bool {
    let words: Vec<&str> = value.split_whitespace().collect();
    if words.len() < TITLE_CASE_MIN_WORDS {
        return false;
    }
    let all_capitalized = words
        .iter()
        .all(|word| word.chars().next().is_some_and(char::is_uppercase));
    let shouting = value.chars().filter(|c| c.is_alphabetic()).all(char::is_uppercase);
    all_capitalized && !shouting
}
