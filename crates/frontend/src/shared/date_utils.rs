/// Utilities for date and time formatting
///
/// Backend timestamps are ISO-8601, either naive (`2024-03-15T14:02:26.123456`)
/// or with an offset. Both are rendered in the pt-BR layout; values that do not
/// parse are shown as received.
use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};

fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if let Ok(aware) = DateTime::parse_from_rfc3339(raw) {
        return Some(aware.with_timezone(&Local).naive_local());
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f"))
        .ok()
        .or_else(|| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}

/// Format ISO date or datetime string to DD/MM/YYYY
/// Example: "2024-03-15T14:02:26.123" -> "15/03/2024"
pub fn format_date(raw: &str) -> String {
    match parse_timestamp(raw) {
        Some(ts) => ts.format("%d/%m/%Y").to_string(),
        None => raw.to_string(),
    }
}

/// Format ISO datetime string to DD/MM/YYYY HH:MM:SS
/// Example: "2024-03-15T14:02:26.123" -> "15/03/2024 14:02:26"
pub fn format_datetime(raw: &str) -> String {
    match parse_timestamp(raw) {
        Some(ts) => ts.format("%d/%m/%Y %H:%M:%S").to_string(),
        None => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_datetime() {
        assert_eq!(
            format_datetime("2024-03-15T14:02:26.123456"),
            "15/03/2024 14:02:26"
        );
        assert_eq!(format_datetime("2024-12-31 23:59:59"), "31/12/2024 23:59:59");
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-03-15"), "15/03/2024");
        assert_eq!(format_date("2024-03-15T14:02:26.123"), "15/03/2024");
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(format_datetime("invalid"), "invalid");
        assert_eq!(format_date("invalid"), "invalid");
        assert_eq!(format_date(""), "");
    }
}
