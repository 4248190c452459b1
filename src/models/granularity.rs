use clap::ValueEnum;

pub const WEEKS_PER_YEAR: u32 = 52;

/// Zoom level of the grid: one cell per week, month or year.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Granularity {
    #[default]
    Week,
    Month,
    Year,
}

impl Granularity {
    pub fn units_per_year(&self) -> u32 {
        match self {
            Granularity::Week => 52,
            Granularity::Month => 12,
            Granularity::Year => 1,
        }
    }

    /// Width of one cell in weeks. Fractional for month view (52/12): the
    /// year is split evenly, so month boundaries do not land on whole weeks
    /// and must be compared as reals, never rounded.
    pub fn weeks_per_unit(&self) -> f64 {
        f64::from(WEEKS_PER_YEAR) / f64::from(self.units_per_year())
    }

    pub fn unit_label(&self) -> &'static str {
        match self {
            Granularity::Week => "Week",
            Granularity::Month => "Month",
            Granularity::Year => "Year",
        }
    }
}
