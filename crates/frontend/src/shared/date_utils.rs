//! Timestamp formatting for detail views.

use chrono::DateTime;

/// Format an RFC 3339 timestamp as `DD.MM.YYYY HH:MM:SS`.
/// Example: "2024-03-15T14:02:26.123Z" -> "15.03.2024 14:02:26"
///
/// Unparseable input is returned unchanged.
pub fn format_datetime(value: &str) -> String {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.format("%d.%m.%Y %H:%M:%S").to_string())
        .unwrap_or_else(|_| value.to_string())
}

/// Same as [`format_datetime`] for optional API fields; `None` renders as a dash.
pub fn format_optional_datetime(value: Option<&str>) -> String {
    value.map(format_datetime).unwrap_or_else(|| "—".to_string())
}
