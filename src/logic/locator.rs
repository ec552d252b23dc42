use crate::logic::calculations::local_hour;
use crate::logic::policy::WateringPolicy;
use crate::logic::windows::generate_optimal_windows;
use crate::models::{CurrentWindowStatus, WeatherSnapshot};
use chrono::{DateTime, FixedOffset, Timelike};

/// Is the present hour one of today's windows? If not, which comes next?
///
/// Windows are scanned in the order the window generator returns them
/// (best score first), so `next_window` is the best upcoming window rather
/// than necessarily the earliest.
pub fn is_current_time_optimal(
    snapshot: &WeatherSnapshot,
    policy: &WateringPolicy,
    now: DateTime<FixedOffset>,
) -> CurrentWindowStatus {
    let windows = generate_optimal_windows(snapshot, policy, now);
    let current_hour = now.hour();

    if let Some(window) = windows
        .iter()
        .find(|w| local_hour(&w.datetime, now.offset()) == current_hour)
    {
        return CurrentWindowStatus::optimal(window.clone());
    }

    match windows.into_iter().find(|w| w.datetime > now) {
        Some(next) => CurrentWindowStatus::upcoming(next),
        None => CurrentWindowStatus::none(),
    }
}
