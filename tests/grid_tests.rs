use chrono::NaiveDate;
use lifeweeks::core::grid::{GridInput, build_grid};
use lifeweeks::models::granularity::Granularity;
use lifeweeks::models::milestone::{Milestone, MilestoneCategory};

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn input<'a>(
    life_expectancy: u32,
    milestones: &'a [Milestone],
    granularity: Granularity,
    today: NaiveDate,
) -> GridInput<'a> {
    GridInput {
        birthdate: d(2000, 1, 1),
        life_expectancy,
        milestones,
        granularity,
        today,
    }
}

#[test]
fn cell_count_is_years_plus_one_times_units() {
    let today = d(2024, 1, 1);
    for (gran, units) in [
        (Granularity::Week, 52),
        (Granularity::Month, 12),
        (Granularity::Year, 1),
    ] {
        for expectancy in [0u32, 1, 42, 90, 120] {
            let cells = build_grid(&input(expectancy, &[], gran, today));
            assert_eq!(
                cells.len(),
                ((expectancy + 1) * units) as usize,
                "expectancy {expectancy}, {units} units/year"
            );
        }
    }
}

#[test]
fn cells_are_emitted_year_major_unit_minor() {
    let cells = build_grid(&input(2, &[], Granularity::Month, d(2024, 1, 1)));

    let order: Vec<(u32, u32)> = cells.iter().map(|c| (c.age_year, c.unit_index)).collect();
    let mut expected = Vec::new();
    for y in 0..=2 {
        for u in 0..12 {
            expected.push((y, u));
        }
    }
    assert_eq!(order, expected);
}

#[test]
fn exactly_one_current_cell_inside_span() {
    let today = d(2024, 1, 1); // week 1252 of 4680
    for gran in [Granularity::Week, Granularity::Month, Granularity::Year] {
        let cells = build_grid(&input(90, &[], gran, today));
        let current: Vec<_> = cells.iter().filter(|c| c.is_current).collect();
        assert_eq!(current.len(), 1, "{gran:?}");
    }
}

#[test]
fn week_view_marks_week_1252_current_for_24_year_old() {
    let cells = build_grid(&input(90, &[], Granularity::Week, d(2024, 1, 1)));

    let current: Vec<usize> = cells
        .iter()
        .enumerate()
        .filter(|(_, c)| c.is_current)
        .map(|(i, _)| i)
        .collect();

    assert_eq!(current, vec![1252]);
    assert_eq!(cells[1252].age_year, 24);
    assert_eq!(cells[1252].unit_index, 4);
    assert!(cells[1251].is_past);
    assert!(!cells[1253].is_past);
}

#[test]
fn no_current_cell_beyond_the_span() {
    // expectancy 1: grid rows for ages 0 and 1, but "today" is week 1252
    let cells = build_grid(&input(1, &[], Granularity::Week, d(2024, 1, 1)));
    assert!(cells.iter().all(|c| !c.is_current));
    assert!(cells.iter().all(|c| c.is_past));
}

#[test]
fn zero_life_expectancy_yields_single_year_row() {
    for (gran, units) in [
        (Granularity::Week, 52usize),
        (Granularity::Month, 12),
        (Granularity::Year, 1),
    ] {
        let cells = build_grid(&input(0, &[], gran, d(2000, 6, 1)));
        assert_eq!(cells.len(), units);
        assert!(cells.iter().all(|c| c.age_year == 0));
    }
}

#[test]
fn month_view_boundaries_are_fractional() {
    let cells = build_grid(&input(1, &[], Granularity::Month, d(2000, 1, 1)));
    // second cell starts at 52/12 weeks, not on a whole week
    let second = cells[1].start_week;
    assert!((second - 52.0 / 12.0).abs() < 1e-9);
    assert_ne!(second, second.trunc());
}

#[test]
fn milestone_attaches_to_exactly_one_cell_in_week_view() {
    let ms = vec![Milestone::new(
        "school".to_string(),
        d(2005, 6, 15),
        "Started school".to_string(),
        "#9B59B6".to_string(),
        Some(MilestoneCategory::Education),
    )];

    let cells = build_grid(&input(90, &ms, Granularity::Week, d(2024, 1, 1)));
    let hits: Vec<_> = cells.iter().filter(|c| c.milestone.is_some()).collect();

    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].age_year, 5);
    assert_eq!(hits[0].start_week, 285.0);
}

#[test]
fn milestone_never_attaches_to_two_cells_at_one_granularity() {
    let ms = vec![Milestone::new(
        "school".to_string(),
        d(2005, 6, 15),
        "Started school".to_string(),
        "#9B59B6".to_string(),
        None,
    )];

    for gran in [Granularity::Week, Granularity::Month, Granularity::Year] {
        let cells = build_grid(&input(90, &ms, gran, d(2024, 1, 1)));
        let hits = cells.iter().filter(|c| c.milestone.is_some()).count();
        assert!(hits <= 1, "{gran:?}: milestone attached to {hits} cells");
    }
}

#[test]
fn year_view_milestone_on_year_boundary_week_is_kept() {
    // year-5 cell starts at week 260 = birth + 1820 days = 2004-12-25;
    // a milestone inside that calendar week survives year zoom
    let ms = vec![Milestone::new(
        "boundary".to_string(),
        d(2004, 12, 22),
        "Moved".to_string(),
        "#E67E22".to_string(),
        None,
    )];

    let cells = build_grid(&input(90, &ms, Granularity::Year, d(2024, 1, 1)));
    let hits: Vec<_> = cells.iter().filter(|c| c.milestone.is_some()).collect();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].age_year, 5);
}

#[test]
fn first_milestone_in_collection_order_wins_ties() {
    let ms = vec![
        Milestone::new(
            "first".to_string(),
            d(2005, 6, 15),
            "A".to_string(),
            "#111111".to_string(),
            None,
        ),
        Milestone::new(
            "second".to_string(),
            d(2005, 6, 16),
            "B".to_string(),
            "#222222".to_string(),
            None,
        ),
    ];

    let cells = build_grid(&input(90, &ms, Granularity::Week, d(2024, 1, 1)));
    let hit = cells.iter().find_map(|c| c.milestone).unwrap();
    assert_eq!(hit.id, "first");
}

#[test]
fn grid_building_is_idempotent() {
    let ms = vec![Milestone::new(
        "m1".to_string(),
        d(2010, 3, 3),
        "X".to_string(),
        "#2ECC71".to_string(),
        None,
    )];

    let a = build_grid(&input(90, &ms, Granularity::Month, d(2024, 1, 1)));
    let b = build_grid(&input(90, &ms, Granularity::Month, d(2024, 1, 1)));
    assert_eq!(a, b);
}
