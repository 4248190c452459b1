use crate::models::milestone::Milestone;

/// One square of the rendered grid.
///
/// Derived and ephemeral: rebuilt from scratch on every render, never
/// persisted. The milestone is a borrow into the settings' collection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridCell<'a> {
    /// Week offset from birth at which this cell starts. Fractional in
    /// month view, where 52 weeks are spread evenly over 12 cells.
    pub start_week: f64,
    pub age_year: u32,
    /// Column within the year row, `0..units_per_year`.
    pub unit_index: u32,
    pub is_past: bool,
    pub is_current: bool,
    pub milestone: Option<&'a Milestone>,
}
