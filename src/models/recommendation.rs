use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    High,
    Medium,
    Low,
}

impl Confidence {
    /// high at 75 and above, low at 40 and below
    pub fn from_score(score: u8) -> Self {
        if score >= 75 {
            Confidence::High
        } else if score <= 40 {
            Confidence::Low
        } else {
            Confidence::Medium
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Confidence::High => "high",
            Confidence::Medium => "medium",
            Confidence::Low => "low",
        }
    }
}

impl std::fmt::Display for Confidence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Point-in-time watering advice for the current conditions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WateringRecommendation {
    pub is_optimal: bool,
    pub score: u8,
    pub reason: String,
    pub should_water: bool,
    pub confidence: Confidence,
}

impl WateringRecommendation {
    pub const OPTIMAL_SCORE: u8 = 70;

    /// Derives `is_optimal` and `confidence` from the score so the two can
    /// never disagree with it.
    pub fn new(score: u8, should_water: bool, reasons: &[String]) -> Self {
        let score = score.min(100);
        Self {
            is_optimal: score >= Self::OPTIMAL_SCORE && should_water,
            score,
            reason: reasons.join(". "),
            should_water,
            confidence: Confidence::from_score(score),
        }
    }
}
