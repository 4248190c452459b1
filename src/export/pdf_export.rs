// src/export/pdf_export.rs

use crate::errors::AppResult;
use crate::export::notify_export_success;
use crate::export::pdf::PdfManager;
use crate::models::granularity::Granularity;
use crate::models::grid_cell::GridCell;
use crate::ui::messages::info;
use std::path::Path;

/// Draw the grid into a PDF via PdfManager.
pub(crate) fn export_pdf(
    cells: &[GridCell],
    granularity: Granularity,
    path: &Path,
    title: &str,
) -> AppResult<()> {
    info(format!("Exporting to PDF: {}", path.display()));

    let mut pdf = PdfManager::new();
    pdf.draw_grid(title, cells, granularity);

    pdf.save(path)?;

    notify_export_success("PDF", path);
    Ok(())
}
