use super::{ConditionRule, Conditions, ScoreAdjustment};
use crate::logic::policy::WateringPolicy;

/// Relative humidity rule
///
/// - Ideal (40-70%): +15
/// - High (>80%): -10, evaporation is slow
/// - Low (<30%): +10, plants dry out faster
pub struct HumidityRule;

impl ConditionRule for HumidityRule {
    fn id(&self) -> &'static str {
        "humidity"
    }

    fn name(&self) -> &'static str {
        "Relative Humidity"
    }

    fn evaluate(
        &self,
        conditions: &Conditions<'_>,
        policy: &WateringPolicy,
    ) -> Option<ScoreAdjustment> {
        let humidity = conditions.snapshot.current.relative_humidity;
        let bands = &policy.humidity;

        if bands.is_optimal(humidity) {
            Some(ScoreAdjustment::new(15, "Ideal humidity levels"))
        } else if humidity > bands.high {
            Some(ScoreAdjustment::new(
                -10,
                "High humidity — reduced evaporation",
            ))
        } else if humidity < bands.low {
            Some(ScoreAdjustment::new(
                10,
                "Low humidity — plants may need extra water",
            ))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CurrentConditions, WeatherSnapshot};

    fn delta_at(humidity: f64) -> Option<i32> {
        let snapshot = WeatherSnapshot::new(CurrentConditions::new(20.0, humidity, 5.0, "clear"));
        let conditions = Conditions {
            snapshot: &snapshot,
            hour: 9,
        };
        HumidityRule
            .evaluate(&conditions, &WateringPolicy::default())
            .map(|a| a.delta)
    }

    #[test]
    fn humidity_bands() {
        assert_eq!(delta_at(40.0), Some(15));
        assert_eq!(delta_at(70.0), Some(15));
        assert_eq!(delta_at(75.0), None);
        assert_eq!(delta_at(80.0), None);
        assert_eq!(delta_at(85.0), Some(-10));
        assert_eq!(delta_at(35.0), None);
        assert_eq!(delta_at(20.0), Some(10));
    }
}
