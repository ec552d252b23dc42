use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Acceptable,
    Good,
    Best,
}

impl Priority {
    pub fn from_score(score: u8) -> Self {
        if score >= 85 {
            Priority::Best
        } else if score >= 70 {
            Priority::Good
        } else {
            Priority::Acceptable
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Best => "best",
            Priority::Good => "good",
            Priority::Acceptable => "acceptable",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Priority::Best => "★",
            Priority::Good => "●",
            Priority::Acceptable => "○",
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A clock-time interval judged favorable for watering
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimalWateringWindow {
    pub start_time: String,
    pub end_time: String,
    pub datetime: DateTime<FixedOffset>,
    pub score: u8,
    pub reason: String,
    pub priority: Priority,
}

impl OptimalWateringWindow {
    /// Windows scoring below this are never emitted.
    pub const MIN_SCORE: u8 = 50;

    pub fn new(
        start_time: String,
        end_time: String,
        datetime: DateTime<FixedOffset>,
        score: u8,
        reasons: &[String],
    ) -> Self {
        Self {
            start_time,
            end_time,
            datetime,
            score,
            reason: reasons.join(". "),
            priority: Priority::from_score(score),
        }
    }
}

/// Whether the present hour is a watering window, and if not, the next one
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentWindowStatus {
    pub is_optimal: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub window: Option<OptimalWateringWindow>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_window: Option<OptimalWateringWindow>,
}

impl CurrentWindowStatus {
    pub fn optimal(window: OptimalWateringWindow) -> Self {
        Self {
            is_optimal: true,
            window: Some(window),
            next_window: None,
        }
    }

    pub fn upcoming(next_window: OptimalWateringWindow) -> Self {
        Self {
            is_optimal: false,
            window: None,
            next_window: Some(next_window),
        }
    }

    pub fn none() -> Self {
        Self {
            is_optimal: false,
            window: None,
            next_window: None,
        }
    }
}
