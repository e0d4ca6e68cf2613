use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

use crate::error::{DashboardError, Result};

/// Accepts `YYYY-MM-DD` (taken as UTC midnight) or a full RFC 3339 timestamp.
pub fn parse_release_date(value: &str) -> Result<DateTime<Utc>> {
    let value = value.trim();
    match NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        Ok(date) => Ok(date.and_time(NaiveTime::MIN).and_utc()),
        Err(date_err) => DateTime::parse_from_rfc3339(value)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(|_| DashboardError::InvalidReleaseDate {
                value: value.to_string(),
                source: date_err,
            }),
    }
}
