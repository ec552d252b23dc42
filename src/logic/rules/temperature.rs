use super::{ConditionRule, Conditions, ScoreAdjustment};
use crate::logic::policy::WateringPolicy;

/// Temperature rule
///
/// - Optimal range (15-25°C): +20
/// - Very hot (>30°C): -25
/// - Cool (<10°C): -15
///
/// 25-30°C and 10-15°C are left alone.
pub struct TemperatureRule;

impl ConditionRule for TemperatureRule {
    fn id(&self) -> &'static str {
        "temperature"
    }

    fn name(&self) -> &'static str {
        "Air Temperature"
    }

    fn evaluate(
        &self,
        conditions: &Conditions<'_>,
        policy: &WateringPolicy,
    ) -> Option<ScoreAdjustment> {
        let temp = conditions.snapshot.current.temperature;
        let bands = &policy.temperature;

        if bands.is_optimal(temp) {
            Some(ScoreAdjustment::new(20, "Good temperature for watering"))
        } else if temp > bands.hot_c {
            Some(ScoreAdjustment::new(
                -25,
                "Very hot — water will evaporate quickly",
            ))
        } else if temp < bands.cool_c {
            Some(ScoreAdjustment::new(
                -15,
                "Cool temperature — plants need less water",
            ))
        } else {
            None
        }
    }
}
