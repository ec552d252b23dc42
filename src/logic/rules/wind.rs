use super::{ConditionRule, Conditions, ScoreAdjustment};
use crate::logic::policy::WateringPolicy;

/// High wind rule - spray drifts away from the root zone above 15 km/h
pub struct WindRule;

impl ConditionRule for WindRule {
    fn id(&self) -> &'static str {
        "wind"
    }

    fn name(&self) -> &'static str {
        "Wind Speed"
    }

    fn evaluate(
        &self,
        conditions: &Conditions<'_>,
        policy: &WateringPolicy,
    ) -> Option<ScoreAdjustment> {
        if conditions.snapshot.current.wind_speed > policy.wind.high_kmh {
            Some(ScoreAdjustment::new(
                -15,
                "High winds — water may not reach roots effectively",
            ))
        } else {
            None
        }
    }
}
