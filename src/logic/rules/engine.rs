use super::{
    humidity::HumidityRule, rain::RainRule, temperature::TemperatureRule,
    time_of_day::TimeOfDayRule, wind::WindRule, ConditionRule, Conditions, ScoreAdjustment,
};
use crate::logic::calculations::clamp_score;
use crate::logic::policy::WateringPolicy;
use crate::models::{WateringRecommendation, WeatherSnapshot};
use chrono::{DateTime, FixedOffset, Timelike};

const BASE_SCORE: i32 = 50;
const NEUTRAL_REASON: &str = "Conditions are neutral for watering";

/// Scores the present instant. Rules run in a fixed order and their deltas
/// add up independently; clamping happens once, at the end.
pub struct ConditionScorer {
    rules: Vec<Box<dyn ConditionRule>>,
}

impl ConditionScorer {
    pub fn new() -> Self {
        let rules: Vec<Box<dyn ConditionRule>> = vec![
            Box::new(TemperatureRule),
            Box::new(HumidityRule),
            Box::new(RainRule),
            Box::new(WindRule),
            Box::new(TimeOfDayRule),
        ];

        Self { rules }
    }

    pub fn analyze(
        &self,
        snapshot: &WeatherSnapshot,
        policy: &WateringPolicy,
        now: DateTime<FixedOffset>,
    ) -> WateringRecommendation {
        let conditions = Conditions {
            snapshot,
            hour: now.hour(),
        };

        let mut total = BASE_SCORE;
        let mut should_water = true;
        let mut reasons = Vec::new();

        for rule in &self.rules {
            if let Some(adjustment) = rule.evaluate(&conditions, policy) {
                tracing::debug!(
                    rule = rule.id(),
                    delta = adjustment.delta,
                    "condition rule triggered"
                );
                total += adjustment.delta;
                should_water &= !adjustment.blocks_watering;
                reasons.push(adjustment.reason);
            }
        }

        if reasons.is_empty() {
            reasons.push(NEUTRAL_REASON.to_string());
        }

        WateringRecommendation::new(clamp_score(total), should_water, &reasons)
    }

    pub fn evaluate_rule(
        &self,
        rule_id: &str,
        snapshot: &WeatherSnapshot,
        policy: &WateringPolicy,
        now: DateTime<FixedOffset>,
    ) -> Option<ScoreAdjustment> {
        let conditions = Conditions {
            snapshot,
            hour: now.hour(),
        };
        self.rules
            .iter()
            .find(|r| r.id() == rule_id)
            .and_then(|rule| rule.evaluate(&conditions, policy))
    }

    pub fn list_rules(&self) -> Vec<(&'static str, &'static str)> {
        self.rules.iter().map(|r| (r.id(), r.name())).collect()
    }
}

impl Default for ConditionScorer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Confidence, CurrentConditions, HourlyPoint};

    fn at_hour(hour: u32) -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339(&format!("2024-06-01T{:02}:30:00+00:00", hour)).unwrap()
    }

    fn analyze(snapshot: &WeatherSnapshot, hour: u32) -> WateringRecommendation {
        ConditionScorer::new().analyze(snapshot, &WateringPolicy::default(), at_hour(hour))
    }

    #[test]
    fn ideal_morning_scores_full_marks() {
        let snapshot = WeatherSnapshot::new(CurrentConditions::new(20.0, 55.0, 10.0, "clear"));
        let rec = analyze(&snapshot, 7);

        assert_eq!(rec.score, 100);
        assert!(rec.should_water);
        assert!(rec.is_optimal);
        assert_eq!(rec.confidence, Confidence::High);
        assert_eq!(
            rec.reason,
            "Good temperature for watering. Ideal humidity levels. \
             Early Morning is an optimal watering time"
        );
    }

    #[test]
    fn hot_stormy_midday_bottoms_out() {
        let snapshot = WeatherSnapshot::new(CurrentConditions::new(32.0, 85.0, 20.0, "rain"))
            .with_hourly(vec![HourlyPoint::new(at_hour(13), 32.0, 85.0, 20.0, 4.0)]);
        let rec = analyze(&snapshot, 13);

        assert_eq!(rec.score, 0);
        assert!(!rec.should_water);
        assert!(!rec.is_optimal);
        assert_eq!(rec.confidence, Confidence::Low);
        assert!(rec.reason.contains("Moderate to heavy rain"));
        assert!(rec.reason.contains("High winds"));
        assert!(rec.reason.contains("Midday heat"));
    }

    #[test]
    fn deltas_accumulate_before_clamping() {
        // 50 - 15 (cool) + 10 (dry air) - 30 (night) = 15
        let snapshot = WeatherSnapshot::new(CurrentConditions::new(5.0, 20.0, 0.0, "clear"));
        let rec = analyze(&snapshot, 23);
        assert_eq!(rec.score, 15);
        assert_eq!(rec.confidence, Confidence::Low);
        assert!(rec.should_water);
    }

    #[test]
    fn neutral_conditions_keep_base_score() {
        let snapshot = WeatherSnapshot::new(CurrentConditions::new(27.0, 75.0, 5.0, "clouds"));
        let rec = analyze(&snapshot, 9);
        assert_eq!(rec.score, 50);
        assert_eq!(rec.confidence, Confidence::Medium);
        assert_eq!(rec.reason, NEUTRAL_REASON);
    }

    #[test]
    fn score_always_in_range_and_optimal_implies_watering() {
        let temps = [-5.0, 8.0, 12.0, 20.0, 28.0, 35.0];
        let humidities = [10.0, 35.0, 55.0, 75.0, 95.0];
        let codes = ["clear", "rain"];

        for hour in 0..24 {
            for temp in temps {
                for humidity in humidities {
                    for code in codes {
                        let snapshot = WeatherSnapshot::new(CurrentConditions::new(
                            temp, humidity, 18.0, code,
                        ))
                        .with_hourly(vec![HourlyPoint::new(at_hour(hour), temp, humidity, 18.0, 3.5)]);
                        let rec = analyze(&snapshot, hour);
                        assert!(rec.score <= 100);
                        if rec.is_optimal {
                            assert!(rec.should_water);
                        }
                        assert_eq!(rec.confidence, Confidence::from_score(rec.score));
                    }
                }
            }
        }
    }

    #[test]
    fn evaluate_single_rule() {
        let scorer = ConditionScorer::new();
        let snapshot = WeatherSnapshot::new(CurrentConditions::new(20.0, 55.0, 25.0, "clear"));
        let wind = scorer
            .evaluate_rule("wind", &snapshot, &WateringPolicy::default(), at_hour(9))
            .unwrap();
        assert_eq!(wind.delta, -15);
        assert!(scorer
            .evaluate_rule("unknown", &snapshot, &WateringPolicy::default(), at_hour(9))
            .is_none());
    }

    #[test]
    fn rules_listed_in_evaluation_order() {
        let ids: Vec<_> = ConditionScorer::new()
            .list_rules()
            .into_iter()
            .map(|(id, _)| id)
            .collect();
        assert_eq!(ids, vec!["temperature", "humidity", "rain", "wind", "time_of_day"]);
    }
}
