//! Date and time formatting in Indonesian
//!
//! Backend timestamps arrive either as RFC 3339 (`2026-10-18T07:05:00Z`),
//! as Laravel's `YYYY-MM-DD HH:MM:SS`, or as a bare date.

use chrono::{
    DateTime, Datelike, Duration, FixedOffset, NaiveDate, NaiveDateTime, Offset, Timelike, Utc,
};

const MONTHS_ID: [&str; 12] = [
    "Januari",
    "Februari",
    "Maret",
    "April",
    "Mei",
    "Juni",
    "Juli",
    "Agustus",
    "September",
    "Oktober",
    "November",
    "Desember",
];

/// Western Indonesia Time, UTC+7
const DISPLAY_OFFSET_SECS: i32 = 7 * 3600;

fn display_offset() -> FixedOffset {
    FixedOffset::east_opt(DISPLAY_OFFSET_SECS).unwrap_or_else(|| Utc.fix())
}

/// Parses a backend timestamp into display-zone local time.
/// Timestamps with an explicit offset are converted; naive ones are taken as-is.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&display_offset()).naive_local());
    }
    for fmt in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(dt);
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

fn month_name(month: u32) -> &'static str {
    MONTHS_ID
        .get(month.saturating_sub(1) as usize)
        .copied()
        .unwrap_or("")
}

/// "18 Oktober 2026, 14:05". Unparseable input is returned unchanged.
pub fn format_datetime_id(raw: &str) -> String {
    match parse_timestamp(raw) {
        Some(dt) => format!(
            "{} {} {}, {:02}:{:02}",
            dt.day(),
            month_name(dt.month()),
            dt.year(),
            dt.hour(),
            dt.minute()
        ),
        None => raw.to_string(),
    }
}

/// "18 Oktober 2026". Unparseable input is returned unchanged.
pub fn format_date_id(raw: &str) -> String {
    match parse_timestamp(raw) {
        Some(dt) => format!("{} {} {}", dt.day(), month_name(dt.month()), dt.year()),
        None => raw.to_string(),
    }
}

/// `YYYY-MM-DD` of a timestamp in display time, used for date-range filters
pub fn date_key(raw: &str) -> Option<String> {
    parse_timestamp(raw).map(|dt| dt.format("%Y-%m-%d").to_string())
}

/// Today's date in display time
pub fn today() -> NaiveDate {
    (Utc::now() + Duration::seconds(DISPLAY_OFFSET_SECS as i64)).date_naive()
}

pub fn iso(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// First day of the month containing `date`
pub fn month_start(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_datetime_id() {
        assert_eq!(format_datetime_id("2026-10-18 14:05:09"), "18 Oktober 2026, 14:05");
        assert_eq!(format_datetime_id("2026-01-02T08:30:00.000000"), "2 Januari 2026, 08:30");
    }

    #[test]
    fn test_rfc3339_is_shown_in_wib() {
        assert_eq!(format_datetime_id("2026-10-18T07:05:00Z"), "18 Oktober 2026, 14:05");
        assert_eq!(format_datetime_id("2026-12-31T20:00:00+00:00"), "1 Januari 2027, 03:00");
        assert_eq!(format_datetime_id("2026-03-01T10:00:00+07:00"), "1 Maret 2026, 10:00");
    }

    #[test]
    fn test_format_date_id() {
        assert_eq!(format_date_id("2026-08-17"), "17 Agustus 2026");
        assert_eq!(format_datetime_id("2026-08-17"), "17 Agustus 2026, 00:00");
    }

    #[test]
    fn test_invalid_input_is_echoed() {
        assert_eq!(format_datetime_id("kemarin"), "kemarin");
        assert_eq!(format_date_id(""), "");
        assert_eq!(date_key("2026-13-01"), None);
    }

    #[test]
    fn test_date_helpers() {
        assert_eq!(date_key("2026-10-18T20:00:00Z").as_deref(), Some("2026-10-19"));
        let d = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
        assert_eq!(iso(month_start(d)), "2026-10-01");
    }
}
