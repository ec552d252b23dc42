use crate::logic::calculations::{at_hour, format_hour, local_hour};
use crate::logic::policy::{TimeSlot, WateringPolicy};
use crate::models::{HourlyPoint, OptimalWateringWindow, Priority, WeatherSnapshot};
use chrono::{DateTime, FixedOffset};

/// Fallback windows are labelled "best" at or above this score, else "good".
const FALLBACK_BEST_SCORE: u8 = 90;

/// Rank today's watering windows from the hourly forecast, best first.
///
/// Each hourly point that lands inside an optimal slot starts from the slot's
/// base score and is adjusted for rain, temperature, humidity and wind. Only
/// windows scoring 50 or more survive. Without an hourly forecast, one
/// window per slot is returned at its base score.
pub fn generate_optimal_windows(
    snapshot: &WeatherSnapshot,
    policy: &WateringPolicy,
    now: DateTime<FixedOffset>,
) -> Vec<OptimalWateringWindow> {
    let Some(hourly) = snapshot.hourly_forecast.as_deref() else {
        tracing::debug!("no hourly forecast - using fallback windows");
        return fallback_windows(policy, now);
    };

    let offset = now.offset();
    let mut windows: Vec<OptimalWateringWindow> = hourly
        .iter()
        .filter_map(|point| {
            let hour = local_hour(&point.datetime, offset);
            let slot = policy.slot_for_hour(hour)?;
            score_point(point, slot, policy, offset)
        })
        .collect();

    // stable, so equal scores keep forecast order
    windows.sort_by(|a, b| b.score.cmp(&a.score));
    windows
}

fn score_point(
    point: &HourlyPoint,
    slot: &TimeSlot,
    policy: &WateringPolicy,
    offset: &FixedOffset,
) -> Option<OptimalWateringWindow> {
    let mut score = i32::from(slot.base_score);
    let mut reasons = vec![slot.name.clone()];

    let precipitation = point.precipitation_mm;
    if precipitation >= policy.rain.heavy_mm {
        score -= 50;
        reasons.push("Heavy rain expected".to_string());
    } else if precipitation >= policy.rain.light_mm {
        score -= 25;
        reasons.push("Light rain expected".to_string());
    } else if precipitation > 0.0 {
        score -= 10;
        reasons.push("Very light rain possible".to_string());
    }

    if policy.temperature.is_optimal(point.temperature) {
        score += 10;
        reasons.push("Pleasant temperature".to_string());
    } else if point.temperature > policy.temperature.hot_c {
        score -= 20;
        reasons.push("Hot — faster evaporation".to_string());
    }

    if policy.humidity.is_optimal(point.relative_humidity) {
        score += 5;
        reasons.push("Good humidity".to_string());
    }

    if point.wind_speed > policy.wind.high_kmh {
        score -= 10;
        reasons.push("Windy".to_string());
    }

    if score < i32::from(OptimalWateringWindow::MIN_SCORE) {
        return None;
    }

    Some(OptimalWateringWindow::new(
        format_hour(slot.start_hour),
        format_hour(slot.start_hour + 1),
        point.datetime.with_timezone(offset),
        score.min(100) as u8,
        &reasons,
    ))
}

/// One window per slot, dated today, at the slot's base score
fn fallback_windows(
    policy: &WateringPolicy,
    now: DateTime<FixedOffset>,
) -> Vec<OptimalWateringWindow> {
    let today = now.date_naive();
    let offset = now.offset();

    policy
        .optimal_slots
        .iter()
        .filter_map(|slot| {
            let datetime = at_hour(today, slot.start_hour, offset)?;
            let priority = if slot.base_score >= FALLBACK_BEST_SCORE {
                Priority::Best
            } else {
                Priority::Good
            };
            let mut window = OptimalWateringWindow::new(
                format_hour(slot.start_hour),
                format_hour(slot.end_hour),
                datetime,
                slot.base_score,
                &[slot.name.clone()],
            );
            window.priority = priority;
            Some(window)
        })
        .collect()
}
