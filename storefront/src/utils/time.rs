//! 时间工具函数 — 业务时区转换
//!
//! Orders carry UTC instants. Everything a person reads ("today", the printed
//! date) is derived in the configured business time zone.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use chrono_tz::Tz;
use shared::error::{AppError, AppResult};

/// Offset-less layouts accepted after RFC 3339, read as business-zone wall time
const NAIVE_LAYOUTS: [&str; 3] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S"];

/// Parse an ISO-8601 timestamp
///
/// Strings with an offset (`Z`, `+01:00`) are exact instants. Strings without
/// one are wall-clock times in `tz`; DST gaps fall back to reading them as UTC.
pub fn parse_timestamp(input: &str, tz: Tz) -> AppResult<DateTime<Utc>> {
    let trimmed = input.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(dt.with_timezone(&Utc));
    }

    NAIVE_LAYOUTS
        .iter()
        .find_map(|layout| NaiveDateTime::parse_from_str(trimmed, layout).ok())
        .map(|naive| {
            naive
                .and_local_timezone(tz)
                .latest()
                .map(|dt| dt.with_timezone(&Utc))
                .unwrap_or_else(|| naive.and_utc())
        })
        .ok_or_else(|| {
            AppError::invalid_format(format!("Invalid date: {}", input)).with_detail("input", input)
        })
}

/// Calendar date of an instant in the business time zone
pub fn local_date(instant: DateTime<Utc>, tz: Tz) -> NaiveDate {
    instant.with_timezone(&tz).date_naive()
}

/// Today's date in the business time zone
pub fn today(tz: Tz) -> NaiveDate {
    local_date(Utc::now(), tz)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Timelike};
    use chrono_tz::Europe::Paris;

    #[test]
    fn test_parse_rfc3339() {
        let dt = parse_timestamp("2024-01-15T10:30:00Z", Paris).unwrap();
        assert_eq!(dt, Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap());

        let dt = parse_timestamp("2024-01-15T10:30:00+02:00", Paris).unwrap();
        assert_eq!(dt.hour(), 8);
    }

    #[test]
    fn test_parse_naive_uses_business_zone() {
        // Paris is UTC+1 in January
        let dt = parse_timestamp("2024-01-15T10:30:00", Paris).unwrap();
        assert_eq!(dt, Utc.with_ymd_and_hms(2024, 1, 15, 9, 30, 0).unwrap());
    }

    #[test]
    fn test_parse_invalid_fails_loudly() {
        let err = parse_timestamp("not a date", Paris).unwrap_err();
        assert_eq!(err.code, shared::ErrorCode::InvalidFormat);
        assert_eq!(err.message, "Invalid date: not a date");
    }

    #[test]
    fn test_local_date_crosses_midnight() {
        // 23:30 UTC on the 15th is already the 16th in Paris
        let instant = Utc.with_ymd_and_hms(2024, 1, 15, 23, 30, 0).unwrap();
        assert_eq!(
            local_date(instant, Paris),
            NaiveDate::from_ymd_opt(2024, 1, 16).unwrap()
        );
        assert_eq!(
            local_date(instant, chrono_tz::UTC),
            NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
        );
    }
}
