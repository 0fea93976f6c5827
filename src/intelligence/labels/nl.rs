// ABOUTME: Dutch labels for scoring reasons
// ABOUTME: Primary locale of the weather app the engine serves
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Weer Activity Contributors

use weer_core::ReasonId;

/// Dutch label for a reason
pub const fn label(reason: ReasonId) -> &'static str {
    match reason {
        ReasonId::Perfect => "Perfecte omstandigheden",
        ReasonId::Rain => "Regen",
        ReasonId::RainChance => "Kans op regen",
        ReasonId::HeavyRain => "Zware regen",
        ReasonId::LightRain => "Lichte regen",
        ReasonId::MuddySoil => "Modderige grond",
        ReasonId::CourtUnplayable => "Baan onbespeelbaar",
        ReasonId::WetCourt => "Natte baan",
        ReasonId::FieldWaterlogged => "Veld onder water",
        ReasonId::WetField => "Nat veld",
        ReasonId::DampField => "Vochtig veld",
        ReasonId::CommuteRain => "Regen onderweg",
        ReasonId::CommuteWind => "Wind onderweg",
        ReasonId::Frost => "Vorst",
        ReasonId::Freezing => "Vriezend koud",
        ReasonId::TooCold => "Te koud",
        ReasonId::Cold => "Koud",
        ReasonId::Chilly => "Fris",
        ReasonId::TooHot => "Te heet",
        ReasonId::Hot => "Heet",
        ReasonId::Warm => "Warm",
        ReasonId::Humid => "Benauwd",
        ReasonId::ColdWater => "Koud water",
        ReasonId::IcyWater => "IJskoud water",
        ReasonId::BatteryFreezing => "Accu in gevaar (vorst)",
        ReasonId::BatteryCold => "Accu loopt sneller leeg (kou)",
        ReasonId::Storm => "Storm",
        ReasonId::VeryStrongWind => "Zeer harde wind",
        ReasonId::StrongWind => "Harde wind",
        ReasonId::Windy => "Winderig",
        ReasonId::Breezy => "Briesje",
        ReasonId::NoWind => "Geen wind",
        ReasonId::LightWind => "Weinig wind",
        ReasonId::DangerousGusts => "Gevaarlijke windstoten",
        ReasonId::StrongGusts => "Harde windstoten",
        ReasonId::Gusty => "Vlagerig",
        ReasonId::Overcast => "Geheel bewolkt",
        ReasonId::MostlyCloudy => "Zwaar bewolkt",
        ReasonId::Cloudy => "Bewolkt",
        ReasonId::SomeClouds => "Enkele wolken",
        ReasonId::PoorVisibility => "Slecht zicht",
        ReasonId::LittleSun => "Weinig zon",
        ReasonId::ThunderDanger => "Gevaar: onweer",
        ReasonId::ThunderLifeThreatening => "Levensgevaarlijk (onweer)",
        ReasonId::TelescopeWet => "Telescoop wordt nat",
        ReasonId::ElectronicsWater => "Elektronica vs water",
        ReasonId::GeomagneticStorm => "Geomagnetische storm (GPS)",
        ReasonId::NewMoon => "Nieuwe maan",
        ReasonId::SunBetweenShowers => "Zon tussen de buien",
        ReasonId::FeelsSubZero => "Gevoelstemperatuur onder nul",
        ReasonId::MissingData => "Onvolledige weergegevens",
    }
}
