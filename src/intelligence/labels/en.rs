// ABOUTME: English labels for scoring reasons
// ABOUTME: Reference wording every other locale falls back to
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Weer Activity Contributors

use weer_core::ReasonId;

/// English label for a reason
pub const fn label(reason: ReasonId) -> &'static str {
    match reason {
        ReasonId::Perfect => "Perfect conditions",
        ReasonId::Rain => "Rain",
        ReasonId::RainChance => "Chance of rain",
        ReasonId::HeavyRain => "Heavy rain",
        ReasonId::LightRain => "Light rain",
        ReasonId::MuddySoil => "Muddy soil",
        ReasonId::CourtUnplayable => "Court unplayable",
        ReasonId::WetCourt => "Wet court",
        ReasonId::FieldWaterlogged => "Waterlogged pitch",
        ReasonId::WetField => "Wet pitch",
        ReasonId::DampField => "Damp pitch",
        ReasonId::CommuteRain => "Rain on the commute",
        ReasonId::CommuteWind => "Wind on the commute",
        ReasonId::Frost => "Frost",
        ReasonId::Freezing => "Freezing",
        ReasonId::TooCold => "Too cold",
        ReasonId::Cold => "Cold",
        ReasonId::Chilly => "Chilly",
        ReasonId::TooHot => "Too hot",
        ReasonId::Hot => "Hot",
        ReasonId::Warm => "Warm",
        ReasonId::Humid => "Humid",
        ReasonId::ColdWater => "Cold water",
        ReasonId::IcyWater => "Icy water",
        ReasonId::BatteryFreezing => "Battery at risk (freezing)",
        ReasonId::BatteryCold => "Battery drains faster (cold)",
        ReasonId::Storm => "Storm",
        ReasonId::VeryStrongWind => "Very strong wind",
        ReasonId::StrongWind => "Strong wind",
        ReasonId::Windy => "Windy",
        ReasonId::Breezy => "Breezy",
        ReasonId::NoWind => "No wind",
        ReasonId::LightWind => "Light wind",
        ReasonId::DangerousGusts => "Dangerous gusts",
        ReasonId::StrongGusts => "Strong gusts",
        ReasonId::Gusty => "Gusty",
        ReasonId::Overcast => "Overcast",
        ReasonId::MostlyCloudy => "Mostly cloudy",
        ReasonId::Cloudy => "Cloudy",
        ReasonId::SomeClouds => "Some clouds",
        ReasonId::PoorVisibility => "Poor visibility",
        ReasonId::LittleSun => "Little sun",
        ReasonId::ThunderDanger => "Danger: thunder",
        ReasonId::ThunderLifeThreatening => "Life-threatening (thunder)",
        ReasonId::TelescopeWet => "Telescope gets wet",
        ReasonId::ElectronicsWater => "Electronics vs water",
        ReasonId::GeomagneticStorm => "Geomagnetic storm (GPS)",
        ReasonId::NewMoon => "New moon",
        ReasonId::SunBetweenShowers => "Sun between the showers",
        ReasonId::FeelsSubZero => "Feels like sub-zero",
        ReasonId::MissingData => "Incomplete weather data",
    }
}
