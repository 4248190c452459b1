//! Grid construction: expand a lifespan into renderable cells.

use crate::core::weeks::{current_week, elapsed_weeks, milestone_for_week};
use crate::models::granularity::{Granularity, WEEKS_PER_YEAR};
use crate::models::grid_cell::GridCell;
use crate::models::milestone::Milestone;
use chrono::NaiveDate;

/// Everything the builder needs for one render pass.
///
/// Callers guarantee the birthdate is present; an unset birthdate means
/// the grid is simply never built.
pub struct GridInput<'a> {
    pub birthdate: NaiveDate,
    pub life_expectancy: u32,
    pub milestones: &'a [Milestone],
    pub granularity: Granularity,
    pub today: NaiveDate,
}

/// Build the full cell sequence, year-major then unit-minor.
///
/// Rows are ages 0 through `life_expectancy` inclusive; each row holds
/// `units_per_year` cells. The ordering is the rendering contract (rows =
/// years, columns = units) and every consumer relies on it.
///
/// Cell classification:
/// - past: the cell starts before the elapsed-week count;
/// - current: the current week falls inside `[start, start + width)`.
///
/// In month view the cell width is 52/12 weeks, so `start_week` is
/// fractional and the comparisons run over reals. Rounding the boundaries
/// to whole weeks would shift which cell is flagged current, so they are
/// kept fractional on purpose.
pub fn build_grid<'a>(input: &GridInput<'a>) -> Vec<GridCell<'a>> {
    let units_per_year = input.granularity.units_per_year();
    let weeks_per_unit = input.granularity.weeks_per_unit();

    let elapsed = elapsed_weeks(input.birthdate, input.today) as f64;
    let current = current_week(input.birthdate, input.today) as f64;

    let mut cells =
        Vec::with_capacity(((input.life_expectancy + 1) * units_per_year) as usize);

    for year in 0..=input.life_expectancy {
        let year_start_week = f64::from(year * WEEKS_PER_YEAR);

        for unit in 0..units_per_year {
            let start_week = year_start_week + f64::from(unit) * weeks_per_unit;

            let is_past = start_week < elapsed;
            let is_current = start_week <= current && current < start_week + weeks_per_unit;
            let milestone = milestone_for_week(input.birthdate, start_week, input.milestones);

            cells.push(GridCell {
                start_week,
                age_year: year,
                unit_index: unit,
                is_past,
                is_current,
                milestone,
            });
        }
    }

    cells
}
