use chrono::{DateTime, FixedOffset, NaiveDate, Timelike};

/// Clamp a running score total into the 0-100 range
pub fn clamp_score(total: i32) -> u8 {
    total.clamp(0, 100) as u8
}

/// Hour of day of an instant, read in the viewer's UTC offset
pub fn local_hour(datetime: &DateTime<FixedOffset>, offset: &FixedOffset) -> u32 {
    datetime.with_timezone(offset).hour()
}

/// Instant at `hour`:00 on `date` in the given offset
pub fn at_hour(date: NaiveDate, hour: u32, offset: &FixedOffset) -> Option<DateTime<FixedOffset>> {
    date.and_hms_opt(hour % 24, 0, 0)?
        .and_local_timezone(*offset)
        .single()
}

/// 12-hour clock label, e.g. 6 -> "6:00 AM", 15 -> "3:00 PM", 24 -> "12:00 AM"
pub fn format_hour(hour: u32) -> String {
    let hour = hour % 24;
    let suffix = if hour < 12 { "AM" } else { "PM" };
    let display = match hour % 12 {
        0 => 12,
        h => h,
    };
    format!("{}:00 {}", display, suffix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_score_bounds() {
        assert_eq!(clamp_score(-70), 0);
        assert_eq!(clamp_score(0), 0);
        assert_eq!(clamp_score(65), 65);
        assert_eq!(clamp_score(105), 100);
    }

    #[test]
    fn format_hour_known_values() {
        assert_eq!(format_hour(0), "12:00 AM");
        assert_eq!(format_hour(6), "6:00 AM");
        assert_eq!(format_hour(11), "11:00 AM");
        assert_eq!(format_hour(12), "12:00 PM");
        assert_eq!(format_hour(15), "3:00 PM");
        assert_eq!(format_hour(20), "8:00 PM");
        assert_eq!(format_hour(24), "12:00 AM");
    }

    #[test]
    fn local_hour_uses_viewer_offset() {
        let utc_six = DateTime::parse_from_rfc3339("2024-06-01T06:00:00+00:00").unwrap();
        let plus_two = FixedOffset::east_opt(2 * 3600).unwrap();
        assert_eq!(local_hour(&utc_six, &plus_two), 8);
        assert_eq!(local_hour(&utc_six, utc_six.offset()), 6);
    }

    #[test]
    fn at_hour_builds_local_instant() {
        let offset = FixedOffset::west_opt(5 * 3600).unwrap();
        let date = NaiveDate::from_ymd_opt(2024, 6, 3).unwrap();
        let instant = at_hour(date, 18, &offset).unwrap();
        assert_eq!(instant.to_rfc3339(), "2024-06-03T18:00:00-05:00");
    }
}
