use chrono::{DateTime, NaiveDate, SecondsFormat, SubsecRound, Utc};

use crate::{Error, Result};

/// All stored instants are UTC with microsecond precision.
pub type Timestamp = DateTime<Utc>;

/// Current time, truncated to the precision the store keeps.
pub fn now() -> Timestamp {
    Utc::now().trunc_subsecs(6)
}

/// Fixed-width RFC 3339 form (`2025-01-31T09:00:00.000000Z`).
///
/// Every stored timestamp uses this form, so lexical order in SQL equals
/// chronological order.
pub fn format_timestamp(ts: &Timestamp) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Micros, true)
}

pub fn parse_timestamp(value: &str) -> Result<Timestamp> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc).trunc_subsecs(6))
        .map_err(|_| Error::InvalidTimestamp(value.to_string()))
}

/// Parse a user-chosen report date.
///
/// Accepts a calendar date (`YYYY-MM-DD`, interpreted as midnight UTC) or a
/// full RFC 3339 timestamp.
pub fn parse_report_date(value: &str) -> Result<Timestamp> {
    let trimmed = value.trim();
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        let midnight = date
            .and_hms_opt(0, 0, 0)
            .ok_or_else(|| Error::InvalidTimestamp(value.to_string()))?;
        return Ok(midnight.and_utc());
    }
    parse_timestamp(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_is_fixed_width() {
        let a = Utc.with_ymd_and_hms(2025, 1, 2, 3, 4, 5).unwrap();
        let b = a + chrono::Duration::microseconds(7);
        assert_eq!(format_timestamp(&a), "2025-01-02T03:04:05.000000Z");
        assert_eq!(format_timestamp(&b), "2025-01-02T03:04:05.000007Z");
        assert!(format_timestamp(&a) < format_timestamp(&b));
    }

    #[test]
    fn test_format_parse_roundtrip_keeps_now() {
        let ts = now();
        assert_eq!(parse_timestamp(&format_timestamp(&ts)).unwrap(), ts);
    }

    #[test]
    fn test_parse_report_date_calendar_day() {
        let ts = parse_report_date("2024-03-15").unwrap();
        assert_eq!(ts, Utc.with_ymd_and_hms(2024, 3, 15, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_parse_report_date_rfc3339_with_offset() {
        let ts = parse_report_date("2024-03-15T09:30:00+07:00").unwrap();
        assert_eq!(ts, Utc.with_ymd_and_hms(2024, 3, 15, 2, 30, 0).unwrap());
    }

    #[test]
    fn test_parse_report_date_rejects_garbage() {
        let err = parse_report_date("15/03/2024").unwrap_err();
        assert!(matches!(err, Error::InvalidTimestamp(_)));
    }
}
