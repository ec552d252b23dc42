use crate::error::{PlantCareError, Result};
use chrono::{DateTime, FixedOffset, NaiveDate};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use std::io::Read;
use std::path::Path;

/// A point-in-time bundle of current, hourly and daily weather data.
///
/// Units are fixed by the upstream weather collaborator: Celsius, km/h,
/// millimeters and ISO-8601 instants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherSnapshot {
    pub current: CurrentConditions,
    #[serde(
        default,
        deserialize_with = "lenient_sequence",
        skip_serializing_if = "Option::is_none"
    )]
    pub hourly_forecast: Option<Vec<HourlyPoint>>,
    #[serde(
        default,
        deserialize_with = "lenient_sequence",
        skip_serializing_if = "Option::is_none"
    )]
    pub daily_forecast: Option<Vec<DailyPoint>>,
}

impl WeatherSnapshot {
    pub fn new(current: CurrentConditions) -> Self {
        Self {
            current,
            hourly_forecast: None,
            daily_forecast: None,
        }
    }

    pub fn with_hourly(mut self, points: Vec<HourlyPoint>) -> Self {
        self.hourly_forecast = Some(points);
        self
    }

    pub fn with_daily(mut self, days: Vec<DailyPoint>) -> Self {
        self.daily_forecast = Some(days);
        self
    }

    /// Precipitation of the first hourly point, or 0 when there is none.
    pub fn next_hour_precipitation_mm(&self) -> f64 {
        self.hourly_forecast
            .as_deref()
            .and_then(|points| points.first())
            .map(|p| p.precipitation_mm)
            .unwrap_or(0.0)
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        serde_json::from_str(content)
            .map_err(|e| PlantCareError::InvalidSnapshot(format!("JSON: {}", e)))
    }

    pub fn from_yaml_str(content: &str) -> Result<Self> {
        serde_yaml::from_str(content)
            .map_err(|e| PlantCareError::InvalidSnapshot(format!("YAML: {}", e)))
    }

    /// Load a snapshot from disk. `.yaml`/`.yml` files are read as YAML,
    /// everything else as JSON. A path of `-` reads JSON from stdin.
    pub fn load(path: &Path) -> Result<Self> {
        if path.as_os_str() == "-" {
            let mut content = String::new();
            std::io::stdin().read_to_string(&mut content)?;
            return Self::from_json_str(&content);
        }

        let content = std::fs::read_to_string(path)?;
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml") | Some("yml") => Self::from_yaml_str(&content),
            _ => Self::from_json_str(&content),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentConditions {
    #[serde(default, deserialize_with = "number_or_zero")]
    pub temperature: f64,
    #[serde(default, deserialize_with = "number_or_zero")]
    pub relative_humidity: f64,
    #[serde(default, deserialize_with = "number_or_zero")]
    pub wind_speed: f64,
    #[serde(default)]
    pub condition_code: String,
    #[serde(default)]
    pub description: String,
}

impl CurrentConditions {
    pub fn new(
        temperature: f64,
        relative_humidity: f64,
        wind_speed: f64,
        condition_code: impl Into<String>,
    ) -> Self {
        Self {
            temperature,
            relative_humidity,
            wind_speed,
            condition_code: condition_code.into(),
            description: String::new(),
        }
    }

    pub fn is_raining(&self) -> bool {
        is_rain_code(&self.condition_code)
    }
}

/// A single hourly forecast point
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HourlyPoint {
    pub datetime: DateTime<FixedOffset>,
    #[serde(default, deserialize_with = "number_or_zero")]
    pub temperature: f64,
    #[serde(default, deserialize_with = "number_or_zero")]
    pub relative_humidity: f64,
    #[serde(default, deserialize_with = "number_or_zero")]
    pub wind_speed: f64,
    #[serde(default, deserialize_with = "number_or_zero")]
    pub precipitation_mm: f64,
}

impl HourlyPoint {
    pub fn new(
        datetime: DateTime<FixedOffset>,
        temperature: f64,
        relative_humidity: f64,
        wind_speed: f64,
        precipitation_mm: f64,
    ) -> Self {
        Self {
            datetime,
            temperature,
            relative_humidity,
            wind_speed,
            precipitation_mm,
        }
    }
}

/// A single day of the multi-day forecast
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyPoint {
    pub date: NaiveDate,
    #[serde(default, deserialize_with = "number_or_zero")]
    pub min_temp: f64,
    #[serde(default, deserialize_with = "number_or_zero")]
    pub max_temp: f64,
    #[serde(default, deserialize_with = "number_or_zero")]
    pub relative_humidity: f64,
    #[serde(default)]
    pub condition_code: String,
    #[serde(default)]
    pub description: String,
}

impl DailyPoint {
    pub fn new(
        date: NaiveDate,
        min_temp: f64,
        max_temp: f64,
        relative_humidity: f64,
        condition_code: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            date,
            min_temp,
            max_temp,
            relative_humidity,
            condition_code: condition_code.into(),
            description: description.into(),
        }
    }

    pub fn average_temp(&self) -> f64 {
        (self.min_temp + self.max_temp) / 2.0
    }

    pub fn is_raining(&self) -> bool {
        is_rain_code(&self.condition_code)
    }
}

fn is_rain_code(code: &str) -> bool {
    code.trim().eq_ignore_ascii_case("rain")
}

/// Accepts a sequence, or treats anything that is not one (missing, `null`,
/// an object, a scalar) as an absent forecast. Elements of a real sequence
/// must still decode.
fn lenient_sequence<'de, D, T>(deserializer: D) -> std::result::Result<Option<Vec<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    use serde::de::Error;
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::Array(items) => serde_json::from_value(serde_json::Value::Array(items))
            .map(Some)
            .map_err(D::Error::custom),
        _ => Ok(None),
    }
}

fn number_or_zero<'de, D>(deserializer: D) -> std::result::Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(0.0))
}
