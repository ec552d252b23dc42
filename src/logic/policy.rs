use crate::error::{PlantCareError, Result};
use serde::{Deserialize, Serialize};

/// Fixed watering heuristics shared by every scorer.
///
/// Defaults:
/// - Optimal temperature 15-25°C, optimal humidity 40-70%
/// - Rain: light >= 1.0mm, moderate/heavy >= 3.0mm
/// - High wind above 15 km/h
/// - Optimal slots: 06:00-08:00 "Early Morning" (100), 18:00-20:00 "Early Evening" (85)
/// - Avoid: 11:00-15:00 "Midday Heat", 21:00-05:00 "Night" (wraps past midnight)
///
/// Every field may be overridden from config; omitted fields keep defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WateringPolicy {
    pub temperature: TemperaturePolicy,
    pub humidity: HumidityPolicy,
    pub rain: RainPolicy,
    pub wind: WindPolicy,
    pub optimal_slots: Vec<TimeSlot>,
    pub avoid_ranges: Vec<AvoidRange>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemperaturePolicy {
    pub optimal_min_c: f64,
    pub optimal_max_c: f64,
    pub hot_c: f64,
    pub cool_c: f64,
    pub very_hot_day_c: f64,
    pub very_cold_day_c: f64,
}

impl TemperaturePolicy {
    pub fn is_optimal(&self, temp_c: f64) -> bool {
        temp_c >= self.optimal_min_c && temp_c <= self.optimal_max_c
    }
}

impl Default for TemperaturePolicy {
    fn default() -> Self {
        Self {
            optimal_min_c: 15.0,
            optimal_max_c: 25.0,
            hot_c: 30.0,
            cool_c: 10.0,
            very_hot_day_c: 35.0,
            very_cold_day_c: 5.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HumidityPolicy {
    pub optimal_min: f64,
    pub optimal_max: f64,
    pub high: f64,
    pub low: f64,
    pub humid_day: f64,
}

impl HumidityPolicy {
    pub fn is_optimal(&self, humidity: f64) -> bool {
        humidity >= self.optimal_min && humidity <= self.optimal_max
    }
}

impl Default for HumidityPolicy {
    fn default() -> Self {
        Self {
            optimal_min: 40.0,
            optimal_max: 70.0,
            high: 80.0,
            low: 30.0,
            humid_day: 85.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RainPolicy {
    pub light_mm: f64,
    pub heavy_mm: f64,
}

impl Default for RainPolicy {
    fn default() -> Self {
        Self {
            light_mm: 1.0,
            heavy_mm: 3.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindPolicy {
    pub high_kmh: f64,
}

impl Default for WindPolicy {
    fn default() -> Self {
        Self { high_kmh: 15.0 }
    }
}

/// An hour range favorable for watering. Slots never wrap midnight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSlot {
    pub name: String,
    pub start_hour: u32,
    pub end_hour: u32,
    pub base_score: u8,
}

impl TimeSlot {
    pub fn new(name: &str, start_hour: u32, end_hour: u32, base_score: u8) -> Self {
        Self {
            name: name.to_string(),
            start_hour,
            end_hour,
            base_score,
        }
    }

    pub fn contains(&self, hour: u32) -> bool {
        hour >= self.start_hour && hour < self.end_hour
    }
}

/// An hour range to avoid. `start_hour > end_hour` wraps past midnight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AvoidRange {
    pub name: String,
    pub start_hour: u32,
    pub end_hour: u32,
    pub reason: String,
    /// Note shown in daily avoid-time labels; ranges without one are not listed.
    #[serde(default)]
    pub daily_label: Option<String>,
}

impl AvoidRange {
    pub fn new(name: &str, start_hour: u32, end_hour: u32, reason: &str) -> Self {
        Self {
            name: name.to_string(),
            start_hour,
            end_hour,
            reason: reason.to_string(),
            daily_label: None,
        }
    }

    pub fn with_daily_label(mut self, label: &str) -> Self {
        self.daily_label = Some(label.to_string());
        self
    }

    pub fn wraps_midnight(&self) -> bool {
        self.start_hour > self.end_hour
    }

    pub fn contains(&self, hour: u32) -> bool {
        if self.wraps_midnight() {
            hour >= self.start_hour || hour < self.end_hour
        } else {
            hour >= self.start_hour && hour < self.end_hour
        }
    }
}

impl Default for WateringPolicy {
    fn default() -> Self {
        Self {
            temperature: TemperaturePolicy::default(),
            humidity: HumidityPolicy::default(),
            rain: RainPolicy::default(),
            wind: WindPolicy::default(),
            optimal_slots: vec![
                TimeSlot::new("Early Morning", 6, 8, 100),
                TimeSlot::new("Early Evening", 18, 20, 85),
            ],
            avoid_ranges: vec![
                AvoidRange::new(
                    "Midday Heat",
                    11,
                    15,
                    "Midday heat — water evaporates before reaching roots",
                )
                .with_daily_label("Midday heat"),
                AvoidRange::new(
                    "Night",
                    21,
                    5,
                    "Night watering — wet foliage overnight invites fungal disease",
                ),
            ],
        }
    }
}

impl WateringPolicy {
    /// First optimal slot containing the hour
    pub fn slot_for_hour(&self, hour: u32) -> Option<&TimeSlot> {
        self.optimal_slots.iter().find(|slot| slot.contains(hour))
    }

    /// First avoid range containing the hour
    pub fn avoid_range_for_hour(&self, hour: u32) -> Option<&AvoidRange> {
        self.avoid_ranges.iter().find(|range| range.contains(hour))
    }

    pub fn validate(&self) -> Result<()> {
        if self.temperature.optimal_min_c > self.temperature.optimal_max_c {
            return Err(PlantCareError::Config(format!(
                "optimal temperature range is inverted ({} > {})",
                self.temperature.optimal_min_c, self.temperature.optimal_max_c
            )));
        }

        if self.humidity.optimal_min > self.humidity.optimal_max {
            return Err(PlantCareError::Config(format!(
                "optimal humidity range is inverted ({} > {})",
                self.humidity.optimal_min, self.humidity.optimal_max
            )));
        }

        if self.rain.heavy_mm < self.rain.light_mm {
            return Err(PlantCareError::Config(format!(
                "heavy rain threshold {}mm is below light rain threshold {}mm",
                self.rain.heavy_mm, self.rain.light_mm
            )));
        }

        for slot in &self.optimal_slots {
            if slot.name.trim().is_empty() {
                return Err(PlantCareError::Config("optimal slot without a name".into()));
            }
            if slot.start_hour >= slot.end_hour || slot.end_hour > 24 {
                return Err(PlantCareError::Config(format!(
                    "optimal slot '{}' has invalid hours {}-{}",
                    slot.name, slot.start_hour, slot.end_hour
                )));
            }
            if slot.base_score > 100 {
                return Err(PlantCareError::Config(format!(
                    "optimal slot '{}' base score {} exceeds 100",
                    slot.name, slot.base_score
                )));
            }
        }

        for range in &self.avoid_ranges {
            if range.name.trim().is_empty() {
                return Err(PlantCareError::Config("avoid range without a name".into()));
            }
            if range.start_hour >= 24 || range.end_hour >= 24 || range.start_hour == range.end_hour
            {
                return Err(PlantCareError::Config(format!(
                    "avoid range '{}' has invalid hours {}-{}",
                    range.name, range.start_hour, range.end_hour
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_policy_is_valid() {
        assert!(WateringPolicy::default().validate().is_ok());
    }

    #[test]
    fn slot_membership_is_half_open() {
        let policy = WateringPolicy::default();
        assert!(policy.slot_for_hour(5).is_none());
        assert_eq!(policy.slot_for_hour(6).unwrap().name, "Early Morning");
        assert_eq!(policy.slot_for_hour(7).unwrap().name, "Early Morning");
        assert!(policy.slot_for_hour(8).is_none());
        assert_eq!(policy.slot_for_hour(19).unwrap().base_score, 85);
        assert!(policy.slot_for_hour(20).is_none());
    }

    #[test]
    fn night_range_wraps_past_midnight() {
        let policy = WateringPolicy::default();
        let night = |hour| {
            policy
                .avoid_range_for_hour(hour)
                .map(|r| r.name.as_str() == "Night")
                .unwrap_or(false)
        };

        for hour in [21, 22, 23, 0, 1, 2, 3, 4] {
            assert!(night(hour), "hour {} should be night", hour);
        }
        assert!(!night(5));
        assert!(!night(20));
    }

    #[test]
    fn midday_range_excludes_end_hour() {
        let policy = WateringPolicy::default();
        assert!(policy.avoid_range_for_hour(10).is_none());
        for hour in 11..15 {
            assert_eq!(policy.avoid_range_for_hour(hour).unwrap().name, "Midday Heat");
        }
        assert!(policy.avoid_range_for_hour(15).is_none());
    }

    #[test]
    fn validate_rejects_bad_ranges() {
        let mut policy = WateringPolicy::default();
        policy.rain.heavy_mm = 0.5;
        assert!(policy.validate().is_err());

        let mut policy = WateringPolicy::default();
        policy.optimal_slots[0].end_hour = 6;
        assert!(policy.validate().is_err());

        let mut policy = WateringPolicy::default();
        policy.avoid_ranges[1].start_hour = 24;
        assert!(policy.validate().is_err());

        let mut policy = WateringPolicy::default();
        policy.temperature.optimal_min_c = 30.0;
        assert!(policy.validate().is_err());
    }

    #[test]
    fn partial_override_keeps_defaults() {
        let yaml = "wind:\n  high_kmh: 20\n";
        let policy: WateringPolicy = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(policy.wind.high_kmh, 20.0);
        assert_eq!(policy.rain.heavy_mm, 3.0);
        assert_eq!(policy.optimal_slots.len(), 2);
    }
}
