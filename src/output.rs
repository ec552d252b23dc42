use crate::config::OutputFormat;
use crate::error::Result;
use crate::models::{
    CurrentWindowStatus, DailyWateringSchedule, OptimalWateringWindow, WateringRecommendation,
    WateringReport,
};
use serde::Serialize;
use std::fmt::Write;

/// Renders engine outputs for the terminal. JSON keeps the boundary field
/// names; text is a compact human summary.
pub trait Render: Serialize {
    fn render_text(&self) -> String;

    fn render(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(self)?),
            OutputFormat::Text => Ok(self.render_text()),
        }
    }
}

impl Render for WateringRecommendation {
    fn render_text(&self) -> String {
        let verdict = if self.is_optimal {
            "Water now"
        } else if self.should_water {
            "Watering possible"
        } else {
            "Skip watering"
        };
        format!(
            "{} (score {}/100, {} confidence)\n  {}\n",
            verdict, self.score, self.confidence, self.reason
        )
    }
}

impl Render for Vec<OptimalWateringWindow> {
    fn render_text(&self) -> String {
        if self.is_empty() {
            return "No suitable watering windows\n".to_string();
        }
        let mut out = String::new();
        for window in self {
            let _ = writeln!(out, "{}", window_line(window));
        }
        out
    }
}

impl Render for CurrentWindowStatus {
    fn render_text(&self) -> String {
        match (&self.window, &self.next_window) {
            (Some(window), _) => format!("Now is a watering window\n  {}\n", window_line(window)),
            (None, Some(next)) => format!("Next watering window\n  {}\n", window_line(next)),
            (None, None) => "No upcoming watering window\n".to_string(),
        }
    }
}

impl Render for Vec<DailyWateringSchedule> {
    fn render_text(&self) -> String {
        if self.is_empty() {
            return "No daily forecast available\n".to_string();
        }
        let mut out = String::new();
        for day in self {
            let mark = if day.recommended { "✓" } else { "✗" };
            let _ = writeln!(
                out,
                "{} {} {:.0}°C {:.0}% rain {}%: {}",
                mark,
                day.date.format("%a %b %d"),
                day.temperature,
                day.humidity,
                day.rain_probability,
                day.reason
            );
            for window in &day.optimal_windows {
                let _ = writeln!(out, "    {}", window_line(window));
            }
            if !day.avoid_times.is_empty() {
                let _ = writeln!(out, "    avoid: {}", day.avoid_times.join(", "));
            }
        }
        out
    }
}

impl Render for WateringReport {
    fn render_text(&self) -> String {
        format!(
            "Generated {}\n\n{}\nWindows\n{}\n{}\nSchedule\n{}",
            self.generated_at.format("%Y-%m-%d %H:%M %:z"),
            self.recommendation.render_text(),
            self.windows.render_text(),
            self.current.render_text(),
            self.schedule.render_text()
        )
    }
}

fn window_line(window: &OptimalWateringWindow) -> String {
    format!(
        "{} {} - {} [{} {}] {}",
        window.priority.symbol(),
        window.start_time,
        window.end_time,
        window.priority,
        window.score,
        window.reason
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;

    fn window(score: u8) -> OptimalWateringWindow {
        OptimalWateringWindow::new(
            "6:00 AM".into(),
            "7:00 AM".into(),
            DateTime::parse_from_rfc3339("2024-06-01T06:00:00+00:00").unwrap(),
            score,
            &["Early Morning".to_string()],
        )
    }

    #[test]
    fn recommendation_text() {
        let rec = WateringRecommendation::new(20, false, &["Moderate to heavy rain".to_string()]);
        let text = rec.render_text();
        assert!(text.starts_with("Skip watering (score 20/100, low confidence)"));
    }

    #[test]
    fn windows_text_lists_each_window() {
        let text = vec![window(100), window(65)].render_text();
        assert_eq!(text.lines().count(), 2);
        assert!(text.contains("[best 100]"));
        assert!(text.contains("[acceptable 65]"));
    }

    #[test]
    fn json_uses_boundary_names() {
        let json = CurrentWindowStatus::upcoming(window(90))
            .render(OutputFormat::Json)
            .unwrap();
        assert!(json.contains("\"nextWindow\""));
        assert!(!json.contains("\"window\""));
    }
}
