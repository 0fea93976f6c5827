// ABOUTME: Localization of scoring reasons through injectable label resolvers
// ABOUTME: Built-in English, Dutch and German catalogs with language-subtag matching and English fallback
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Weer Activity Contributors

//! # Reason labels
//!
//! The engine fires [`ReasonId`]s; turning them into text is a lookup keyed
//! by [`ReasonId::key`]. Any [`LabelResolver`] can serve that lookup:
//!
//! - [`LabelCatalog`] for the built-in locales
//! - [`LabelTable`] for a table loaded from JSON
//! - any `Fn(&str) -> Option<String>` closure
//!
//! A resolver that has no entry for a key falls back to English, so a
//! partially translated table still yields readable output.

mod audit;
mod de;
mod en;
mod nl;
mod table;

pub use audit::{audit_labels, LabelAudit};
pub use table::LabelTable;

use serde::{Deserialize, Serialize};
use std::fmt;
use weer_core::ReasonId;

/// Looks up the label for a `reason.*` key
pub trait LabelResolver: Sync {
    /// Label for `key`, or `None` when this resolver does not know it
    fn resolve(&self, key: &str) -> Option<String>;
}

impl<F> LabelResolver for F
where
    F: Fn(&str) -> Option<String> + Sync,
{
    fn resolve(&self, key: &str) -> Option<String> {
        self(key)
    }
}

/// Locales with a built-in label table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// English
    #[default]
    En,
    /// Dutch
    Nl,
    /// German
    De,
}

impl Locale {
    /// Every built-in locale
    pub const ALL: [Self; 3] = [Self::En, Self::Nl, Self::De];

    /// Match a BCP 47 style tag on its language subtag (`nl-BE` is Dutch)
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        let language = tag
            .trim()
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        match language.as_str() {
            "en" => Some(Self::En),
            "nl" => Some(Self::Nl),
            "de" => Some(Self::De),
            _ => None,
        }
    }

    /// Two-letter language code
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Nl => "nl",
            Self::De => "de",
        }
    }

    /// Built-in label for a reason
    #[must_use]
    pub const fn label(&self, reason: ReasonId) -> &'static str {
        match self {
            Self::En => en::label(reason),
            Self::Nl => nl::label(reason),
            Self::De => de::label(reason),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Resolver backed by a built-in locale table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LabelCatalog {
    locale: Locale,
}

impl LabelCatalog {
    /// Catalog for a built-in locale
    #[must_use]
    pub const fn new(locale: Locale) -> Self {
        Self { locale }
    }

    /// Catalog for a locale tag, falling back to English for unknown tags
    #[must_use]
    pub fn for_locale(tag: &str) -> Self {
        Self::new(Locale::from_tag(tag).unwrap_or_default())
    }

    /// Locale this catalog serves
    #[must_use]
    pub const fn locale(&self) -> Locale {
        self.locale
    }
}

impl LabelResolver for LabelCatalog {
    fn resolve(&self, key: &str) -> Option<String> {
        ReasonId::from_key(key).map(|reason| self.locale.label(reason).to_owned())
    }
}

/// Label for `reason` from `resolver`, falling back to English
#[must_use]
pub fn resolve_label(resolver: &dyn LabelResolver, reason: ReasonId) -> String {
    resolver
        .resolve(reason.key())
        .unwrap_or_else(|| Locale::En.label(reason).to_owned())
}
