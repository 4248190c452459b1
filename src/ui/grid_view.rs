//! Terminal renderer for the life grid.
//!
//! Consumes the cell sequence row by row (one row per age year, one glyph
//! per unit) and paints status with ANSI: past units filled, the current
//! unit highlighted, future units dimmed, milestone units in the
//! milestone's own color.

use crate::models::granularity::Granularity;
use crate::models::grid_cell::GridCell;
use crate::models::milestone::Milestone;
use crate::ui::messages::{BOLD, DIM, RESET, fg_rgb};
use crate::utils::color::hex_to_rgb;
use unicode_width::UnicodeWidthStr;

const FG_PAST: &str = "\x1b[36m";
const FG_CURRENT: &str = "\x1b[33m";

const AGE_LABEL_WIDTH: usize = 7;

/// Render the full grid (plus milestone legend) to a printable string.
///
/// Cells must be in builder order: year-major, unit-minor.
pub fn render(cells: &[GridCell], granularity: Granularity, cell_char: &str) -> String {
    let units_per_year = granularity.units_per_year() as usize;
    let mut out = String::new();

    for row in cells.chunks(units_per_year) {
        let Some(first) = row.first() else { continue };

        out.push_str(&format!(
            "{:>width$} ",
            format!("Age {}", first.age_year),
            width = AGE_LABEL_WIDTH
        ));

        for cell in row {
            out.push_str(&paint(cell, cell_char));
        }
        out.push('\n');
    }

    let milestones: Vec<&Milestone> = cells.iter().filter_map(|c| c.milestone).collect();
    if !milestones.is_empty() {
        out.push('\n');
        out.push_str(&legend(&milestones, cell_char));
    }

    out
}

fn paint(cell: &GridCell, cell_char: &str) -> String {
    if let Some(m) = cell.milestone {
        let colored = match hex_to_rgb(&m.color) {
            Some((r, g, b)) => format!("{}{cell_char}{RESET}", fg_rgb(r, g, b)),
            None => format!("{BOLD}{cell_char}{RESET}"),
        };
        return colored;
    }

    if cell.is_current {
        format!("{FG_CURRENT}{BOLD}{cell_char}{RESET}")
    } else if cell.is_past {
        format!("{FG_PAST}{cell_char}{RESET}")
    } else {
        format!("{DIM}·{RESET}")
    }
}

/// Milestone legend under the grid: colored square, name, date.
///
/// Deduplicated by id (year view can surface the same milestone only once,
/// but the same cells slice is reused for every zoom level).
fn legend(milestones: &[&Milestone], cell_char: &str) -> String {
    let mut seen: Vec<&str> = Vec::new();
    let mut rows: Vec<(&Milestone, String)> = Vec::new();
    let mut name_width = 0;

    for m in milestones {
        if seen.contains(&m.id.as_str()) {
            continue;
        }
        seen.push(&m.id);

        let square = match hex_to_rgb(&m.color) {
            Some((r, g, b)) => format!("{}{cell_char}{RESET}", fg_rgb(r, g, b)),
            None => cell_char.to_string(),
        };
        name_width = name_width.max(UnicodeWidthStr::width(m.name.as_str()));
        rows.push((m, square));
    }

    let mut out = String::new();
    for (m, square) in rows {
        let pad = name_width - UnicodeWidthStr::width(m.name.as_str());
        out.push_str(&format!(
            "  {square} {}{} {DIM}{} [{}]{RESET}\n",
            m.name,
            " ".repeat(pad),
            m.date_str(),
            m.id,
        ));
    }
    out
}
