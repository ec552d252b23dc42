use super::window::{CurrentWindowStatus, OptimalWateringWindow};
use super::WateringRecommendation;
use chrono::{DateTime, FixedOffset, NaiveDate};
use serde::{Deserialize, Serialize};

/// Watering plan for a single forecast day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyWateringSchedule {
    pub date: NaiveDate,
    pub recommended: bool,
    pub reason: String,
    pub optimal_windows: Vec<OptimalWateringWindow>,
    pub avoid_times: Vec<String>,
    /// Heuristic label (0/40/60/70/85), not a calibrated probability.
    pub rain_probability: u8,
    pub temperature: f64,
    pub humidity: f64,
}

/// Every engine output for one snapshot evaluated at one instant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WateringReport {
    pub generated_at: DateTime<FixedOffset>,
    pub recommendation: WateringRecommendation,
    pub windows: Vec<OptimalWateringWindow>,
    pub current: CurrentWindowStatus,
    pub schedule: Vec<DailyWateringSchedule>,
}
