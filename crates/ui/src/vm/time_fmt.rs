use chrono::{DateTime, Utc};

/// Short calendar date, e.g. `Oct 17, 2026`.
#[must_use]
pub fn format_day(value: DateTime<Utc>) -> String {
    value.format("%b %-d, %Y").to_string()
}
