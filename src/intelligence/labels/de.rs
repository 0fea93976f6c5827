// ABOUTME: German labels for scoring reasons
// ABOUTME: Exhaustive match so a new reason cannot ship untranslated
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Weer Activity Contributors

use weer_core::ReasonId;

/// German label for a reason
pub const fn label(reason: ReasonId) -> &'static str {
    match reason {
        ReasonId::Perfect => "Perfekte Bedingungen",
        ReasonId::Rain => "Regen",
        ReasonId::RainChance => "Regenrisiko",
        ReasonId::HeavyRain => "Starkregen",
        ReasonId::LightRain => "Leichter Regen",
        ReasonId::MuddySoil => "Matschiger Boden",
        ReasonId::CourtUnplayable => "Platz unbespielbar",
        ReasonId::WetCourt => "Nasser Platz",
        ReasonId::FieldWaterlogged => "Spielfeld unter Wasser",
        ReasonId::WetField => "Nasses Spielfeld",
        ReasonId::DampField => "Feuchtes Spielfeld",
        ReasonId::CommuteRain => "Regen auf dem Arbeitsweg",
        ReasonId::CommuteWind => "Wind auf dem Arbeitsweg",
        ReasonId::Frost => "Frost",
        ReasonId::Freezing => "Eisig",
        ReasonId::TooCold => "Zu kalt",
        ReasonId::Cold => "Kalt",
        ReasonId::Chilly => "Frisch",
        ReasonId::TooHot => "Zu heiß",
        ReasonId::Hot => "Heiß",
        ReasonId::Warm => "Warm",
        ReasonId::Humid => "Schwül",
        ReasonId::ColdWater => "Kaltes Wasser",
        ReasonId::IcyWater => "Eiskaltes Wasser",
        ReasonId::BatteryFreezing => "Akku gefährdet (Frost)",
        ReasonId::BatteryCold => "Akku entlädt schneller (Kälte)",
        ReasonId::Storm => "Sturm",
        ReasonId::VeryStrongWind => "Sehr starker Wind",
        ReasonId::StrongWind => "Starker Wind",
        ReasonId::Windy => "Windig",
        ReasonId::Breezy => "Leichte Brise",
        ReasonId::NoWind => "Kein Wind",
        ReasonId::LightWind => "Schwacher Wind",
        ReasonId::DangerousGusts => "Gefährliche Böen",
        ReasonId::StrongGusts => "Starke Böen",
        ReasonId::Gusty => "Böig",
        ReasonId::Overcast => "Bedeckt",
        ReasonId::MostlyCloudy => "Überwiegend bewölkt",
        ReasonId::Cloudy => "Bewölkt",
        ReasonId::SomeClouds => "Einige Wolken",
        ReasonId::PoorVisibility => "Schlechte Sicht",
        ReasonId::LittleSun => "Wenig Sonne",
        ReasonId::ThunderDanger => "Gefahr: Gewitter",
        ReasonId::ThunderLifeThreatening => "Lebensgefährlich (Gewitter)",
        ReasonId::TelescopeWet => "Teleskop wird nass",
        ReasonId::ElectronicsWater => "Elektronik vs. Wasser",
        ReasonId::GeomagneticStorm => "Geomagnetischer Sturm (GPS)",
        ReasonId::NewMoon => "Neumond",
        ReasonId::SunBetweenShowers => "Sonne zwischen den Schauern",
        ReasonId::FeelsSubZero => "Gefühlt unter null",
        ReasonId::MissingData => "Unvollständige Wetterdaten",
    }
}
