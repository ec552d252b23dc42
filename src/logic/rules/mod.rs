pub mod engine;
pub mod humidity;
pub mod rain;
pub mod temperature;
pub mod time_of_day;
pub mod wind;

pub use engine::ConditionScorer;

use crate::logic::policy::WateringPolicy;
use crate::models::WeatherSnapshot;

/// What a condition rule sees: the snapshot plus the local hour of "now"
pub struct Conditions<'a> {
    pub snapshot: &'a WeatherSnapshot,
    pub hour: u32,
}

/// A triggered rule's contribution to the running score
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreAdjustment {
    pub delta: i32,
    pub reason: String,
    pub blocks_watering: bool,
}

impl ScoreAdjustment {
    pub fn new(delta: i32, reason: impl Into<String>) -> Self {
        Self {
            delta,
            reason: reason.into(),
            blocks_watering: false,
        }
    }

    pub fn blocking(mut self) -> Self {
        self.blocks_watering = true;
        self
    }
}

/// Trait for current-condition scoring rules
pub trait ConditionRule: Send + Sync {
    /// Unique identifier for this rule
    fn id(&self) -> &'static str;

    /// Human-readable name
    fn name(&self) -> &'static str;

    /// Evaluate the rule and return an adjustment if it triggers
    fn evaluate(
        &self,
        conditions: &Conditions<'_>,
        policy: &WateringPolicy,
    ) -> Option<ScoreAdjustment>;
}
