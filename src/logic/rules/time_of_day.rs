use super::{ConditionRule, Conditions, ScoreAdjustment};
use crate::logic::policy::WateringPolicy;

/// Time-of-day rule
///
/// - Inside an optimal slot: +20
/// - Otherwise inside an avoid range: -30 (night wraps past midnight)
pub struct TimeOfDayRule;

impl ConditionRule for TimeOfDayRule {
    fn id(&self) -> &'static str {
        "time_of_day"
    }

    fn name(&self) -> &'static str {
        "Time of Day"
    }

    fn evaluate(
        &self,
        conditions: &Conditions<'_>,
        policy: &WateringPolicy,
    ) -> Option<ScoreAdjustment> {
        if let Some(slot) = policy.slot_for_hour(conditions.hour) {
            return Some(ScoreAdjustment::new(
                20,
                format!("{} is an optimal watering time", slot.name),
            ));
        }

        policy
            .avoid_range_for_hour(conditions.hour)
            .map(|range| ScoreAdjustment::new(-30, range.reason.clone()))
    }
}
