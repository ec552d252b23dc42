use super::{ConditionRule, Conditions, ScoreAdjustment};
use crate::logic::policy::WateringPolicy;

/// Rain rule - only evaluated while it is currently raining
///
/// Intensity is read from the first hourly forecast point (0mm if absent):
/// - Moderate/heavy (>=3.0mm): -40 and watering is skipped
/// - Light (>=1.0mm): -20
/// - Very light: -10
pub struct RainRule;

impl ConditionRule for RainRule {
    fn id(&self) -> &'static str {
        "rain"
    }

    fn name(&self) -> &'static str {
        "Active Rain"
    }

    fn evaluate(
        &self,
        conditions: &Conditions<'_>,
        policy: &WateringPolicy,
    ) -> Option<ScoreAdjustment> {
        if !conditions.snapshot.current.is_raining() {
            return None;
        }

        let precipitation = conditions.snapshot.next_hour_precipitation_mm();

        let adjustment = if precipitation >= policy.rain.heavy_mm {
            ScoreAdjustment::new(-40, "Moderate to heavy rain — skip watering").blocking()
        } else if precipitation >= policy.rain.light_mm {
            ScoreAdjustment::new(-20, "Light rain — reduce watering amount")
        } else {
            ScoreAdjustment::new(-10, "Very light rain — monitor soil moisture")
        };

        Some(adjustment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CurrentConditions, HourlyPoint, WeatherSnapshot};
    use chrono::DateTime;

    fn raining_with(precipitation: Option<f64>) -> WeatherSnapshot {
        let snapshot = WeatherSnapshot::new(CurrentConditions::new(20.0, 50.0, 5.0, "rain"));
        match precipitation {
            Some(mm) => snapshot.with_hourly(vec![HourlyPoint::new(
                DateTime::parse_from_rfc3339("2024-06-01T09:00:00Z").unwrap(),
                20.0,
                50.0,
                5.0,
                mm,
            )]),
            None => snapshot,
        }
    }

    fn evaluate(snapshot: &WeatherSnapshot) -> Option<ScoreAdjustment> {
        let conditions = Conditions { snapshot, hour: 9 };
        RainRule.evaluate(&conditions, &WateringPolicy::default())
    }

    #[test]
    fn heavy_rain_blocks_watering() {
        let adjustment = evaluate(&raining_with(Some(3.0))).unwrap();
        assert_eq!(adjustment.delta, -40);
        assert!(adjustment.blocks_watering);
    }

    #[test]
    fn light_rain_reduces_score() {
        let adjustment = evaluate(&raining_with(Some(1.0))).unwrap();
        assert_eq!(adjustment.delta, -20);
        assert!(!adjustment.blocks_watering);
    }

    #[test]
    fn missing_hourly_counts_as_very_light() {
        let adjustment = evaluate(&raining_with(None)).unwrap();
        assert_eq!(adjustment.delta, -10);
        assert!(adjustment.reason.contains("monitor"));
    }

    #[test]
    fn dry_conditions_skip_rule() {
        let snapshot = WeatherSnapshot::new(CurrentConditions::new(20.0, 50.0, 5.0, "clouds"));
        assert!(evaluate(&snapshot).is_none());
    }
}
