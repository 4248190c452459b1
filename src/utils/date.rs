use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// "Today" for grid building: the hidden `--today` override when given
/// (deterministic tests), the wall clock otherwise.
pub fn resolve_today(override_date: Option<&str>) -> AppResult<NaiveDate> {
    match override_date {
        Some(raw) => parse_date(raw).ok_or_else(|| AppError::InvalidDate(raw.to_string())),
        None => Ok(today()),
    }
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Parse a date from a snapshot or backup document.
///
/// Accepts plain "YYYY-MM-DD" as well as full ISO-8601 timestamps
/// ("2000-01-01T00:00:00.000Z"), which older backups contain. Only the
/// calendar date matters; any time component is discarded.
pub fn parse_iso_date(s: &str) -> Option<NaiveDate> {
    if let Some(d) = parse_date(s) {
        return Some(d);
    }

    let date_part = s.split('T').next().unwrap_or(s);
    parse_date(date_part)
}
