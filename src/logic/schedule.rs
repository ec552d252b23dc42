use crate::logic::calculations::{at_hour, clamp_score, format_hour};
use crate::logic::policy::WateringPolicy;
use crate::models::{DailyPoint, DailyWateringSchedule, OptimalWateringWindow, WeatherSnapshot};
use chrono::FixedOffset;

const GOOD_CONDITIONS: &str = "Good conditions for watering";
const RAIN_ALL_DAY: &str = "All day (Rain expected)";

/// Build one schedule entry per forecast day. No daily forecast, no schedule.
pub fn generate_weekly_schedule(
    snapshot: &WeatherSnapshot,
    policy: &WateringPolicy,
    offset: &FixedOffset,
) -> Vec<DailyWateringSchedule> {
    let Some(days) = snapshot.daily_forecast.as_deref() else {
        tracing::debug!("no daily forecast - schedule is empty");
        return Vec::new();
    };

    days.iter()
        .map(|day| schedule_day(day, policy, offset))
        .collect()
}

fn schedule_day(
    day: &DailyPoint,
    policy: &WateringPolicy,
    offset: &FixedOffset,
) -> DailyWateringSchedule {
    let description = day.description.to_lowercase();
    let severe = description.contains("heavy") || description.contains("moderate");
    let avg_temp = day.average_temp();

    let mut recommended = true;
    let mut rain_probability = 0;
    let mut reasons: Vec<&str> = Vec::new();

    if day.is_raining() {
        if severe {
            recommended = false;
            rain_probability = 85;
            reasons.push("Heavy/moderate rain expected");
        } else {
            rain_probability = 60;
            reasons.push("Light rain expected — reduce watering amount");
        }
    } else if description.contains("rain") {
        rain_probability = 40;
        if severe {
            recommended = false;
            rain_probability = 70;
            reasons.push("Heavy rain possible");
        } else {
            reasons.push("Light rain possible — monitor conditions");
        }
    }

    if avg_temp > policy.temperature.very_hot_day_c {
        reasons.push("Very hot day — water early morning");
    } else if avg_temp < policy.temperature.very_cold_day_c {
        recommended = false;
        reasons.push("Very cold — plants dormant");
    }

    if day.relative_humidity > policy.humidity.humid_day {
        reasons.push("High humidity — reduced watering need");
    } else if day.relative_humidity < policy.humidity.low {
        reasons.push("Low humidity — may need extra water");
    }

    let reason = if reasons.is_empty() {
        GOOD_CONDITIONS.to_string()
    } else {
        reasons.join(". ")
    };

    DailyWateringSchedule {
        date: day.date,
        recommended,
        reason,
        optimal_windows: day_windows(day, avg_temp, policy, offset),
        avoid_times: avoid_times(day, policy),
        rain_probability,
        temperature: avg_temp,
        humidity: day.relative_humidity,
    }
}

/// Simplified per-slot windows for a forecast day
fn day_windows(
    day: &DailyPoint,
    avg_temp: f64,
    policy: &WateringPolicy,
    offset: &FixedOffset,
) -> Vec<OptimalWateringWindow> {
    policy
        .optimal_slots
        .iter()
        .filter_map(|slot| {
            let mut score = i32::from(slot.base_score);
            let mut adjustments = Vec::new();

            if day.is_raining() {
                score -= 40;
                adjustments.push("rain expected");
            }
            if avg_temp > policy.temperature.hot_c {
                score -= 15;
                adjustments.push("hot day");
            }

            let score = clamp_score(score);
            if score < OptimalWateringWindow::MIN_SCORE {
                return None;
            }

            let reason = if adjustments.is_empty() {
                slot.name.clone()
            } else {
                format!("{} ({})", slot.name, adjustments.join(", "))
            };

            let datetime = at_hour(day.date, slot.start_hour, offset)?;
            Some(OptimalWateringWindow::new(
                format_hour(slot.start_hour),
                format_hour(slot.end_hour),
                datetime,
                score,
                &[reason],
            ))
        })
        .collect()
}

fn avoid_times(day: &DailyPoint, policy: &WateringPolicy) -> Vec<String> {
    let mut labels: Vec<String> = policy
        .avoid_ranges
        .iter()
        .filter(|range| !range.wraps_midnight())
        .filter_map(|range| {
            range.daily_label.as_ref().map(|label| {
                format!(
                    "{} - {} ({})",
                    format_hour(range.start_hour),
                    format_hour(range.end_hour),
                    label
                )
            })
        })
        .collect();

    if day.is_raining() {
        labels.push(RAIN_ALL_DAY.to_string());
    }

    labels
}
