// ABOUTME: Shared test utilities and weather fixtures for integration tests
// ABOUTME: Provides quiet logging setup and builders for typical weather periods
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Weer Activity Contributors
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::module_name_repetitions
)]
//! Shared test utilities for `weer_activity_score`

use std::env;
use std::sync::Once;
use tracing::Level;
use weer_activity_score::ActivityWeatherInput;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            _ => Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Calm, dry, clear period with little sun at the given feels-like temperature
pub fn calm_dry(temp_feels_like: f64) -> ActivityWeatherInput {
    ActivityWeatherInput {
        temp_feels_like,
        wind_kmh: 5.0,
        gusts_kmh: 10.0,
        precip_mm: 0.0,
        precip_prob: 0.0,
        weather_code: 0,
        sun_chance: 15.0,
        cloud_cover: 0.0,
        visibility: 30_000.0,
        humidity: None,
        precip_24h: None,
        kp_index: None,
        moon_phase_text: None,
    }
}

/// Mild showery period: 15 °C, light wind, 1 mm of rain
pub fn showery(sun_chance: f64) -> ActivityWeatherInput {
    ActivityWeatherInput {
        temp_feels_like: 15.0,
        wind_kmh: 10.0,
        gusts_kmh: 20.0,
        precip_mm: 1.0,
        precip_prob: 0.0,
        weather_code: 80,
        sun_chance,
        cloud_cover: 50.0,
        visibility: 20_000.0,
        humidity: None,
        precip_24h: None,
        kp_index: None,
        moon_phase_text: None,
    }
}

/// Grid of awkward periods covering extremes on every axis
pub fn extreme_inputs() -> Vec<ActivityWeatherInput> {
    let mut inputs = Vec::new();
    for temp in [-30.0, -1.0, 0.0, 12.0, 22.0, 45.0, f64::NAN] {
        for wind in [0.0, 19.5, 60.0, 150.0] {
            for precip in [0.0, 0.05, 2.5, 40.0] {
                for code in [0, 61, 95] {
                    inputs.push(ActivityWeatherInput {
                        temp_feels_like: temp,
                        wind_kmh: wind,
                        gusts_kmh: wind * 1.6,
                        precip_mm: precip,
                        precip_prob: if precip > 0.0 { 90.0 } else { 0.0 },
                        weather_code: code,
                        sun_chance: 100.0,
                        cloud_cover: 100.0,
                        visibility: 500.0,
                        humidity: Some(99.0),
                        precip_24h: Some(precip * 10.0),
                        kp_index: Some(9.0),
                        moon_phase_text: Some("New Moon".to_owned()),
                    });
                }
            }
        }
    }
    inputs
}
