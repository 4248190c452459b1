// src/export/xlsx.rs

use crate::errors::{AppError, AppResult};
use crate::export::notify_export_success;
use crate::models::granularity::Granularity;
use crate::models::grid_cell::GridCell;
use crate::models::milestone::Milestone;
use crate::ui::messages::info;
use crate::utils::color::hex_to_u32;
use rust_xlsxwriter::{Color, Format, FormatBorder, FormatPattern, Workbook, Worksheet};
use std::path::Path;

const PAST_COLOR: u32 = 0x3C78B4;
const CURRENT_COLOR: u32 = 0xF1C40F;
const FUTURE_COLOR: u32 = 0xF2F2F2;
const FALLBACK_MILESTONE_COLOR: u32 = 0xE05A8A;

/// XLSX export drawn as the grid itself: one worksheet row per age year,
/// one narrow colored column per unit, milestone legend underneath.
pub(crate) fn export_xlsx(
    cells: &[GridCell],
    granularity: Granularity,
    path: &Path,
) -> AppResult<()> {
    info(format!("Exporting to XLSX: {}", path.display()));

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet
        .set_name("Life grid")
        .map_err(to_export_error)?;

    let units_per_year = granularity.units_per_year() as usize;

    let label_format = Format::new().set_bold();

    for (row_index, row) in cells.chunks(units_per_year).enumerate() {
        let xr = row_index as u32;

        let Some(first) = row.first() else { continue };
        worksheet
            .write_with_format(xr, 0, format!("Age {}", first.age_year), &label_format)
            .map_err(to_export_error)?;

        for cell in row {
            let color = cell_color(cell);
            let fmt = Format::new()
                .set_background_color(Color::RGB(color))
                .set_pattern(FormatPattern::Solid)
                .set_border(FormatBorder::Thin)
                .set_border_color(Color::RGB(0xFFFFFF));

            worksheet
                .write_with_format(xr, (cell.unit_index + 1) as u16, "", &fmt)
                .map_err(to_export_error)?;
        }
    }

    // Narrow square-ish cells; wider label column.
    worksheet
        .set_column_width(0, 8.0)
        .map_err(to_export_error)?;
    for c in 1..=units_per_year {
        worksheet
            .set_column_width(c as u16, 2.5)
            .map_err(to_export_error)?;
    }

    let milestones: Vec<&Milestone> = dedup_milestones(cells);
    if !milestones.is_empty() {
        let rows_used = cells.len().div_ceil(units_per_year) as u32;
        write_legend(worksheet, rows_used + 2, &milestones)?;
    }

    let path_str = path
        .to_str()
        .ok_or_else(|| AppError::Export("invalid path".to_string()))?;
    workbook.save(path_str).map_err(to_export_error)?;

    notify_export_success("XLSX", path);
    Ok(())
}

fn cell_color(cell: &GridCell) -> u32 {
    if let Some(m) = cell.milestone {
        return hex_to_u32(&m.color).unwrap_or(FALLBACK_MILESTONE_COLOR);
    }
    if cell.is_current {
        CURRENT_COLOR
    } else if cell.is_past {
        PAST_COLOR
    } else {
        FUTURE_COLOR
    }
}

fn dedup_milestones<'a>(cells: &[GridCell<'a>]) -> Vec<&'a Milestone> {
    let mut out: Vec<&Milestone> = Vec::new();
    for m in cells.iter().filter_map(|c| c.milestone) {
        if !out.iter().any(|x| x.id == m.id) {
            out.push(m);
        }
    }
    out
}

fn write_legend(
    worksheet: &mut Worksheet,
    start_row: u32,
    milestones: &[&Milestone],
) -> AppResult<()> {
    let title_format = Format::new().set_bold();
    worksheet
        .write_with_format(start_row, 0, "Milestones", &title_format)
        .map_err(to_export_error)?;

    for (i, m) in milestones.iter().enumerate() {
        let row = start_row + 1 + i as u32;

        let swatch = Format::new()
            .set_background_color(Color::RGB(
                hex_to_u32(&m.color).unwrap_or(FALLBACK_MILESTONE_COLOR),
            ))
            .set_pattern(FormatPattern::Solid)
            .set_border(FormatBorder::Thin);
        worksheet
            .write_with_format(row, 0, "", &swatch)
            .map_err(to_export_error)?;

        worksheet
            .write(row, 1, m.name.as_str())
            .map_err(to_export_error)?;
        worksheet
            .write(row, 2, m.date_str())
            .map_err(to_export_error)?;
        worksheet
            .write(row, 3, m.category_str())
            .map_err(to_export_error)?;
    }

    Ok(())
}

fn to_export_error<E: std::fmt::Display>(e: E) -> AppError {
    AppError::Export(e.to_string())
}
