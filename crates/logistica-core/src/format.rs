//! Display Formatting
//!
//! Chilean-locale rendering of timestamps and amounts. Every function is
//! total: absent input gives [`MISSING`], unparseable timestamps give
//! [`INVALID_DATE`] (or [`MISSING`] for relative times).

use std::fmt::Display;

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};

/// Shown when a value is absent
pub const MISSING: &str = "N/A";

/// Shown when a timestamp cannot be parsed
pub const INVALID_DATE: &str = "Fecha inválida";

const MINUTE_MS: i64 = 60_000;
const HOUR_MS: i64 = 3_600_000;
const DAY_MS: i64 = 86_400_000;

/// Offset-less forms, read as wall-clock time in the display zone
const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
];

/// Parse a backend timestamp into the given zone.
///
/// Accepts RFC 3339, Postgres-style `2026-10-16 15:00:00+00`, offset-less
/// date-times (taken as local wall-clock time) and bare dates (UTC midnight).
pub fn parse_timestamp<Tz: TimeZone>(raw: &str, tz: &Tz) -> Option<DateTime<Tz>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(tz));
    }
    if let Ok(dt) = DateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f%#z") {
        return Some(dt.with_timezone(tz));
    }
    for fmt in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, fmt) {
            return tz.from_local_datetime(&naive).earliest();
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        let midnight = Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN));
        return Some(midnight.with_timezone(tz));
    }
    None
}

// ========================
// Absolute dates
// ========================

/// `16-10-2026, 15:00` in the browser's zone
pub fn format_date(raw: Option<&str>) -> String {
    format_date_in(raw, &Local)
}

pub fn format_date_in<Tz>(raw: Option<&str>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    render(raw, tz, "%d-%m-%Y, %H:%M")
}

/// `16-10-2026` in the browser's zone
pub fn format_date_short(raw: Option<&str>) -> String {
    format_date_short_in(raw, &Local)
}

pub fn format_date_short_in<Tz>(raw: Option<&str>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    render(raw, tz, "%d-%m-%Y")
}

fn render<Tz>(raw: Option<&str>, tz: &Tz, pattern: &str) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let Some(raw) = raw.filter(|s| !s.trim().is_empty()) else {
        return MISSING.to_string();
    };
    match parse_timestamp(raw, tz) {
        Some(dt) => dt.format(pattern).to_string(),
        None => INVALID_DATE.to_string(),
    }
}

// ========================
// Relative time
// ========================

/// Elapsed time since `raw`, bucketed: moment, minutes, hours, days
pub fn format_time_ago(raw: Option<&str>) -> String {
    format_time_ago_at(raw, Utc::now())
}

/// [`format_time_ago`] against an explicit "now"
pub fn format_time_ago_at(raw: Option<&str>, now: DateTime<Utc>) -> String {
    let Some(then) = raw.and_then(|s| parse_timestamp(s, &Utc)) else {
        return MISSING.to_string();
    };

    let elapsed_ms = (now - then).num_milliseconds();
    let minutes = elapsed_ms.div_euclid(MINUTE_MS);
    let hours = elapsed_ms.div_euclid(HOUR_MS);
    let days = elapsed_ms.div_euclid(DAY_MS);

    if minutes < 1 {
        "Hace un momento".to_string()
    } else if minutes < 60 {
        format!("Hace {} min", minutes)
    } else if hours < 24 {
        format!("Hace {}h", hours)
    } else if days == 1 {
        "Hace 1 día".to_string()
    } else {
        format!("Hace {} días", days)
    }
}

// ========================
// Currency
// ========================

/// Chilean pesos: no decimals, `.` thousands separator, e.g. `$1.234.567`.
///
/// Zero is a real amount and formats as `$0`.
pub fn format_currency(amount: Option<f64>) -> String {
    let Some(amount) = amount.filter(|a| a.is_finite()) else {
        return MISSING.to_string();
    };

    let rounded = amount.round();
    let digits = group_thousands(rounded.abs() as u64);
    if rounded < 0.0 {
        format!("-${}", digits)
    } else {
        format!("${}", digits)
    }
}

fn group_thousands(value: u64) -> String {
    let raw = value.to_string();
    let mut grouped = String::with_capacity(raw.len() + raw.len() / 3);
    for (i, ch) in raw.chars().enumerate() {
        if i > 0 && (raw.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, FixedOffset};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 16, 12, 0, 0).unwrap()
    }

    fn ago(delta: Duration) -> String {
        (now() - delta).to_rfc3339()
    }

    #[test]
    fn test_format_date_placeholders() {
        assert_eq!(format_date_in(None, &Utc), MISSING);
        assert_eq!(format_date_in(Some(""), &Utc), MISSING);
        assert_eq!(format_date_in(Some("not a date"), &Utc), INVALID_DATE);
        assert_eq!(format_date_short_in(None, &Utc), MISSING);
        assert_eq!(format_date_short_in(Some("31/31/2026"), &Utc), INVALID_DATE);
        // Local-zone variants must not panic either
        assert_eq!(format_date(Some("garbage")), INVALID_DATE);
        assert_eq!(format_date_short(None), MISSING);
    }

    #[test]
    fn test_format_date_rfc3339() {
        let raw = Some("2026-10-16T15:04:00+00:00");
        assert_eq!(format_date_in(raw, &Utc), "16-10-2026, 15:04");
        assert_eq!(format_date_short_in(raw, &Utc), "16-10-2026");
    }

    #[test]
    fn test_format_date_converts_zone() {
        let santiago = FixedOffset::west_opt(3 * 3600).unwrap();
        let raw = Some("2026-10-16T02:30:00Z");
        assert_eq!(format_date_in(raw, &santiago), "15-10-2026, 23:30");
    }

    #[test]
    fn test_postgres_and_naive_forms() {
        assert_eq!(
            format_date_in(Some("2026-10-16 08:05:09.123+00"), &Utc),
            "16-10-2026, 08:05"
        );
        assert_eq!(format_date_in(Some("2026-10-16T08:05:09"), &Utc), "16-10-2026, 08:05");
        assert_eq!(format_date_short_in(Some("2026-10-16"), &Utc), "16-10-2026");
    }

    #[test]
    fn test_currency() {
        assert_eq!(format_currency(None), MISSING);
        assert_eq!(format_currency(Some(f64::NAN)), MISSING);
        assert_eq!(format_currency(Some(0.0)), "$0");
        assert_eq!(format_currency(Some(990.0)), "$990");
        assert_eq!(format_currency(Some(15990.0)), "$15.990");
        assert_eq!(format_currency(Some(1234567.4)), "$1.234.567");
        assert_eq!(format_currency(Some(999.5)), "$1.000");
        assert_eq!(format_currency(Some(-2500.0)), "-$2.500");
    }

    #[test]
    fn test_time_ago_boundaries() {
        let at = |d: Duration| format_time_ago_at(Some(&ago(d)), now());

        assert_eq!(at(Duration::seconds(59)), "Hace un momento");
        assert_eq!(at(Duration::seconds(60)), "Hace 1 min");
        assert_eq!(at(Duration::minutes(59)), "Hace 59 min");
        assert_eq!(at(Duration::minutes(60)), "Hace 1h");
        assert_eq!(at(Duration::hours(23)), "Hace 23h");
        assert_eq!(at(Duration::hours(24)), "Hace 1 día");
        assert_eq!(at(Duration::days(3) + Duration::hours(5)), "Hace 3 días");
    }

    #[test]
    fn test_time_ago_future_and_invalid() {
        assert_eq!(
            format_time_ago_at(Some(&ago(Duration::minutes(-10))), now()),
            "Hace un momento"
        );
        assert_eq!(format_time_ago_at(None, now()), MISSING);
        assert_eq!(format_time_ago_at(Some("ayer"), now()), MISSING);
    }
}
