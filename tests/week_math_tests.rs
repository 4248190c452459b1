use chrono::NaiveDate;
use lifeweeks::core::weeks::{
    current_week, date_at_week, elapsed_weeks, milestone_for_week, same_calendar_week,
};
use lifeweeks::models::milestone::{Milestone, MilestoneCategory};

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn milestone(id: &str, date: NaiveDate) -> Milestone {
    Milestone::new(
        id.to_string(),
        date,
        format!("m-{id}"),
        "#4A90D9".to_string(),
        Some(MilestoneCategory::Personal),
    )
}

#[test]
fn elapsed_weeks_truncates_partial_weeks() {
    let birth = d(2000, 1, 1);
    assert_eq!(elapsed_weeks(birth, d(2000, 1, 1)), 0);
    assert_eq!(elapsed_weeks(birth, d(2000, 1, 7)), 0); // 6 days
    assert_eq!(elapsed_weeks(birth, d(2000, 1, 8)), 1); // exactly 7 days
    assert_eq!(elapsed_weeks(birth, d(2000, 1, 14)), 1); // 13 days
}

#[test]
fn elapsed_weeks_clamps_future_birthdate_to_zero() {
    let birth = d(2030, 1, 1);
    assert_eq!(elapsed_weeks(birth, d(2024, 1, 1)), 0);
    // one day of skew, same clamp
    assert_eq!(elapsed_weeks(d(2024, 1, 2), d(2024, 1, 1)), 0);
}

#[test]
fn elapsed_weeks_after_twenty_four_years() {
    // 2000-01-01 .. 2024-01-01 is 8766 days, 1252 whole weeks
    assert_eq!(elapsed_weeks(d(2000, 1, 1), d(2024, 1, 1)), 1252);
}

#[test]
fn current_week_matches_elapsed_weeks() {
    let birth = d(1990, 5, 20);
    for today in [d(1990, 5, 20), d(1995, 1, 1), d(2024, 12, 31)] {
        assert_eq!(current_week(birth, today), elapsed_weeks(birth, today));
    }
}

#[test]
fn same_calendar_week_uses_sunday_start() {
    // 2023-01-01 is a Sunday: that week runs through Saturday 2023-01-07
    assert!(same_calendar_week(d(2023, 1, 1), d(2023, 1, 7)));
    assert!(same_calendar_week(d(2023, 1, 4), d(2023, 1, 7)));
    // next Sunday starts a new week
    assert!(!same_calendar_week(d(2023, 1, 7), d(2023, 1, 8)));
    // Saturday belongs to the week of the preceding Sunday
    assert!(!same_calendar_week(d(2022, 12, 31), d(2023, 1, 1)));
}

#[test]
fn date_at_week_truncates_fractional_offsets() {
    let birth = d(2000, 1, 1);
    assert_eq!(date_at_week(birth, 0.0), birth);
    assert_eq!(date_at_week(birth, 1.0), d(2000, 1, 8));
    // 4.333... weeks = 30.33 days, truncated to 30
    assert_eq!(date_at_week(birth, 52.0 / 12.0), d(2000, 1, 31));
}

#[test]
fn milestone_for_week_finds_same_week_match() {
    let birth = d(2000, 1, 1);
    // birth + 285 weeks = 2005-06-18 (Saturday), same Sunday-week as
    // Wednesday 2005-06-15
    let ms = vec![milestone("a", d(2005, 6, 15))];

    let hit = milestone_for_week(birth, 285.0, &ms);
    assert_eq!(hit.map(|m| m.id.as_str()), Some("a"));

    assert!(milestone_for_week(birth, 284.0, &ms).is_none());
    assert!(milestone_for_week(birth, 286.0, &ms).is_none());
}

#[test]
fn milestone_for_week_returns_first_match_in_collection_order() {
    let birth = d(2000, 1, 1);
    // both in the same calendar week
    let ms = vec![milestone("first", d(2005, 6, 15)), milestone("second", d(2005, 6, 16))];

    let hit = milestone_for_week(birth, 285.0, &ms);
    assert_eq!(hit.map(|m| m.id.as_str()), Some("first"));
}

#[test]
fn milestone_for_week_returns_none_for_empty_collection() {
    assert!(milestone_for_week(d(2000, 1, 1), 10.0, &[]).is_none());
}
