// ABOUTME: Closed catalog of activities scored by the suitability engine
// ABOUTME: Defines activity tags with parsing, display and indoor/frost classification helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Weer Activity Contributors

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Activities with their own weather-sensitivity rule ladder
///
/// Serialized as the snake_case tags used by the web client
/// (`field_sports`, `drone`, ...).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    /// Outdoor barbecue
    Bbq,
    /// Road or leisure cycling
    Cycling,
    /// Walking or hiking
    Walking,
    /// Sailing
    Sailing,
    /// Running
    Running,
    /// Beach day
    Beach,
    /// Gardening
    Gardening,
    /// Stargazing with or without telescope
    Stargazing,
    /// Golf
    Golf,
    /// Outdoor padel
    Padel,
    /// Football, hockey and other pitch sports
    FieldSports,
    /// Outdoor tennis
    Tennis,
    /// Drone flying
    Drone,
    /// Staying at home (commute-only concerns)
    Home,
    /// Going to work (commute-only concerns)
    Work,
}

impl ActivityKind {
    /// Every activity in catalog order
    pub const ALL: [Self; 15] = [
        Self::Bbq,
        Self::Cycling,
        Self::Walking,
        Self::Sailing,
        Self::Running,
        Self::Beach,
        Self::Gardening,
        Self::Stargazing,
        Self::Golf,
        Self::Padel,
        Self::FieldSports,
        Self::Tennis,
        Self::Drone,
        Self::Home,
        Self::Work,
    ];

    /// Wire tag for this activity
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Bbq => "bbq",
            Self::Cycling => "cycling",
            Self::Walking => "walking",
            Self::Sailing => "sailing",
            Self::Running => "running",
            Self::Beach => "beach",
            Self::Gardening => "gardening",
            Self::Stargazing => "stargazing",
            Self::Golf => "golf",
            Self::Padel => "padel",
            Self::FieldSports => "field_sports",
            Self::Tennis => "tennis",
            Self::Drone => "drone",
            Self::Home => "home",
            Self::Work => "work",
        }
    }

    /// Activities mostly spent indoors; sunshine never offsets rain for them
    #[must_use]
    pub const fn is_indoor_leaning(&self) -> bool {
        matches!(self, Self::Home | Self::Work)
    }

    /// Activities whose own ladder already carries a full freezing tier
    #[must_use]
    pub const fn has_own_frost_tier(&self) -> bool {
        matches!(
            self,
            Self::Stargazing | Self::Padel | Self::FieldSports | Self::Tennis
        )
    }
}

impl fmt::Display for ActivityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unknown activity tag
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown activity '{0}'")]
pub struct ParseActivityKindError(pub String);

impl FromStr for ActivityKind {
    type Err = ParseActivityKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == normalized)
            .ok_or_else(|| ParseActivityKindError(s.to_owned()))
    }
}
