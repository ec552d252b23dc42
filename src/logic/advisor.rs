use super::locator::is_current_time_optimal;
use super::policy::WateringPolicy;
use super::rules::ConditionScorer;
use super::schedule::generate_weekly_schedule;
use super::windows::generate_optimal_windows;
use crate::models::{
    CurrentWindowStatus, DailyWateringSchedule, OptimalWateringWindow, WateringRecommendation,
    WateringReport, WeatherSnapshot,
};
use chrono::{DateTime, FixedOffset};

/// Entry point bundling an immutable policy with the condition scorer.
///
/// Holds no mutable state, so one advisor can serve any number of threads.
/// Every operation takes "now" explicitly; the hour of day and "today" are
/// read in `now`'s UTC offset.
pub struct WateringAdvisor {
    policy: WateringPolicy,
    scorer: ConditionScorer,
}

impl WateringAdvisor {
    pub fn new(policy: WateringPolicy) -> Self {
        Self {
            policy,
            scorer: ConditionScorer::new(),
        }
    }

    pub fn scorer(&self) -> &ConditionScorer {
        &self.scorer
    }

    pub fn analyze_current_conditions(
        &self,
        snapshot: &WeatherSnapshot,
        now: DateTime<FixedOffset>,
    ) -> WateringRecommendation {
        self.scorer.analyze(snapshot, &self.policy, now)
    }

    pub fn generate_optimal_windows(
        &self,
        snapshot: &WeatherSnapshot,
        now: DateTime<FixedOffset>,
    ) -> Vec<OptimalWateringWindow> {
        generate_optimal_windows(snapshot, &self.policy, now)
    }

    pub fn generate_weekly_schedule(
        &self,
        snapshot: &WeatherSnapshot,
        now: DateTime<FixedOffset>,
    ) -> Vec<DailyWateringSchedule> {
        generate_weekly_schedule(snapshot, &self.policy, now.offset())
    }

    pub fn is_current_time_optimal(
        &self,
        snapshot: &WeatherSnapshot,
        now: DateTime<FixedOffset>,
    ) -> CurrentWindowStatus {
        is_current_time_optimal(snapshot, &self.policy, now)
    }

    pub fn report(&self, snapshot: &WeatherSnapshot, now: DateTime<FixedOffset>) -> WateringReport {
        WateringReport {
            generated_at: now,
            recommendation: self.analyze_current_conditions(snapshot, now),
            windows: self.generate_optimal_windows(snapshot, now),
            current: self.is_current_time_optimal(snapshot, now),
            schedule: self.generate_weekly_schedule(snapshot, now),
        }
    }
}

impl Default for WateringAdvisor {
    fn default() -> Self {
        Self::new(WateringPolicy::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CurrentConditions, DailyPoint, HourlyPoint};
    use chrono::NaiveDate;

    fn instant(text: &str) -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339(text).unwrap()
    }

    fn week_snapshot() -> WeatherSnapshot {
        let start = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let days = (0..7)
            .map(|i| {
                let date = start + chrono::Duration::days(i);
                if i == 2 {
                    DailyPoint::new(date, 10.0, 20.0, 90.0, "rain", "heavy rain")
                } else {
                    DailyPoint::new(date, 14.0, 24.0, 55.0, "clear", "clear sky")
                }
            })
            .collect();

        WeatherSnapshot::new(CurrentConditions::new(20.0, 55.0, 10.0, "clear"))
            .with_hourly(vec![
                HourlyPoint::new(instant("2024-06-01T06:00:00+00:00"), 18.0, 55.0, 5.0, 0.0),
                HourlyPoint::new(instant("2024-06-01T07:00:00+00:00"), 19.0, 55.0, 5.0, 0.0),
                HourlyPoint::new(instant("2024-06-01T18:00:00+00:00"), 28.0, 60.0, 5.0, 2.0),
            ])
            .with_daily(days)
    }

    #[test]
    fn report_bundles_all_outputs() {
        let advisor = WateringAdvisor::default();
        let now = instant("2024-06-01T07:05:00+00:00");
        let report = advisor.report(&week_snapshot(), now);

        assert_eq!(report.generated_at, now);
        assert_eq!(report.recommendation.score, 100);
        assert!(report.recommendation.is_optimal);
        assert_eq!(report.windows.len(), 3);
        assert!(report.current.is_optimal);
        let current = report.current.window.unwrap();
        assert_eq!(current.datetime.to_rfc3339(), "2024-06-01T07:00:00+00:00");
        assert_eq!(current.start_time, "6:00 AM");
        assert_eq!(report.schedule.len(), 7);
        assert!(!report.schedule[2].recommended);
    }

    #[test]
    fn report_is_idempotent() {
        let advisor = WateringAdvisor::default();
        let now = instant("2024-06-01T10:00:00+00:00");
        let snapshot = week_snapshot();
        let first = serde_json::to_string(&advisor.report(&snapshot, now)).unwrap();
        let second = serde_json::to_string(&advisor.report(&snapshot, now)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn custom_policy_changes_scoring() {
        let mut policy = WateringPolicy::default();
        policy.wind.high_kmh = 5.0;
        let advisor = WateringAdvisor::new(policy);

        let rec = advisor.analyze_current_conditions(
            &week_snapshot(),
            instant("2024-06-01T09:00:00+00:00"),
        );
        // 50 + 20 + 15 - 15 (wind now counts as high)
        assert_eq!(rec.score, 70);
    }

    #[test]
    fn advisor_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<WateringAdvisor>();
    }
}
