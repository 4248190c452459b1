//! Week arithmetic: the pure date math the whole grid hangs on.
//!
//! All functions here are deterministic given their arguments; "today" is
//! always passed in explicitly so renders are reproducible (and testable
//! via the global `--today` override).

use crate::models::milestone::Milestone;
use chrono::{Datelike, Duration, NaiveDate};

/// Whole 7-day periods elapsed between birth and today, clamped to 0.
///
/// Partial weeks truncate toward the earlier date: 6 days old is still
/// week 0. A birthdate in the future (clock skew, bad input) yields 0
/// rather than a negative count.
pub fn elapsed_weeks(birthdate: NaiveDate, today: NaiveDate) -> i64 {
    let days = (today - birthdate).num_days();
    (days / 7).max(0)
}

/// Week index the subject is currently living through.
///
/// Same value as [`elapsed_weeks`]; kept as its own operation because
/// current-cell highlighting and past-cell shading reason about it
/// separately.
pub fn current_week(birthdate: NaiveDate, today: NaiveDate) -> i64 {
    elapsed_weeks(birthdate, today)
}

/// Date reached by walking `week_offset` weeks forward from birth.
///
/// The offset may be fractional (month-view cell boundaries); it is
/// converted to whole days by truncation, matching how the grid's
/// real-valued boundaries collapse onto the calendar.
pub fn date_at_week(birthdate: NaiveDate, week_offset: f64) -> NaiveDate {
    birthdate + Duration::days((week_offset * 7.0) as i64)
}

/// Sunday that starts the calendar week containing `date`.
fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.weekday().num_days_from_sunday()))
}

/// True when both dates fall inside the same Sunday-started calendar week.
pub fn same_calendar_week(a: NaiveDate, b: NaiveDate) -> bool {
    week_start(a) == week_start(b)
}

/// First milestone (in collection order) whose date lands in the same
/// calendar week as `birthdate + week_offset` weeks.
///
/// Deliberately first-match, not nearest-match: when two milestones share
/// a week, whichever the user recorded first wins, at every zoom level.
pub fn milestone_for_week(
    birthdate: NaiveDate,
    week_offset: f64,
    milestones: &[Milestone],
) -> Option<&Milestone> {
    let week_date = date_at_week(birthdate, week_offset);
    milestones
        .iter()
        .find(|m| same_calendar_week(m.date, week_date))
}
