// ABOUTME: Cross-cutting rules applied to every activity after its own ladder
// ABOUTME: Sunshine-during-rain bonus and feels-like sub-zero penalty with per-activity exemptions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Weer Activity Contributors

use super::accumulator::ScoreAccumulator;
use crate::config::scoring::GlobalRulesConfig;
use weer_core::{ActivityKind, ActivityWeatherInput, ReasonId};

/// Apply the global rules in order: sunshine bonus, then sub-zero penalty
pub fn apply(
    rules: &GlobalRulesConfig,
    input: &ActivityWeatherInput,
    activity: ActivityKind,
    acc: &mut ScoreAccumulator,
) {
    if !rules.sun_bonus_exempt.contains(&activity) {
        acc.bonus(sunshine_bonus(rules, input), Some(ReasonId::SunBetweenShowers));
    }
    if input.temp_feels_like < rules.sub_zero.limit && !rules.sub_zero_exempt.contains(&activity) {
        acc.penalize(rules.sub_zero.points, ReasonId::FeelsSubZero);
    }
}

/// Points earned by sunshine breaking through a rainy period
///
/// Zero when the period is dry or the sun chance does not clear the minimum.
#[must_use]
pub fn sunshine_bonus(rules: &GlobalRulesConfig, input: &ActivityWeatherInput) -> f64 {
    let rainy =
        input.precip_mm > rules.rainy_min_mm || input.precip_prob > rules.rainy_prob_percent;
    if !rainy || input.sun_chance <= rules.sun_bonus_min_percent {
        return 0.0;
    }
    rules
        .sun_bonus_tiers
        .iter()
        .find(|tier| input.sun_chance > tier.limit)
        .map_or(0.0, |tier| tier.points)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn showery(sun_chance: f64) -> ActivityWeatherInput {
        ActivityWeatherInput {
            temp_feels_like: 12.0,
            wind_kmh: 10.0,
            gusts_kmh: 20.0,
            precip_mm: 1.0,
            precip_prob: 60.0,
            weather_code: 80,
            sun_chance,
            cloud_cover: 60.0,
            visibility: 20_000.0,
            humidity: None,
            precip_24h: None,
            kp_index: None,
            moon_phase_text: None,
        }
    }

    #[test]
    fn test_sunshine_bonus_tiers() {
        let rules = GlobalRulesConfig::default();
        assert!((sunshine_bonus(&rules, &showery(80.0)) - 3.0).abs() < f64::EPSILON);
        assert!((sunshine_bonus(&rules, &showery(75.0)) - 2.0).abs() < f64::EPSILON);
        assert!((sunshine_bonus(&rules, &showery(60.0)) - 2.0).abs() < f64::EPSILON);
        assert!((sunshine_bonus(&rules, &showery(30.0)) - 1.0).abs() < f64::EPSILON);
        assert!(sunshine_bonus(&rules, &showery(25.0)).abs() < f64::EPSILON);
        assert!(sunshine_bonus(&rules, &showery(10.0)).abs() < f64::EPSILON);
    }

    #[test]
    fn test_no_bonus_when_dry() {
        let rules = GlobalRulesConfig::default();
        let dry = ActivityWeatherInput {
            precip_mm: 0.0,
            precip_prob: 10.0,
            ..showery(90.0)
        };
        assert!(sunshine_bonus(&rules, &dry).abs() < f64::EPSILON);
    }

    #[test]
    fn test_exemptions() {
        let rules = GlobalRulesConfig::default();
        let freezing_shower = ActivityWeatherInput {
            temp_feels_like: -3.0,
            ..showery(80.0)
        };

        let mut work = ScoreAccumulator::new(10.0);
        apply(&rules, &freezing_shower, ActivityKind::Work, &mut work);
        assert_eq!(work.into_parts().1, vec![ReasonId::FeelsSubZero]);

        let mut tennis = ScoreAccumulator::new(10.0);
        apply(&rules, &freezing_shower, ActivityKind::Tennis, &mut tennis);
        assert_eq!(tennis.into_parts().1, vec![ReasonId::SunBetweenShowers]);
    }
}
