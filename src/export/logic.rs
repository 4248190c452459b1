// src/export/logic.rs

use crate::core::grid::{GridInput, build_grid};
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::GridCellExport;
use crate::export::pdf_export::export_pdf;
use crate::export::xlsx::export_xlsx;
use crate::models::granularity::Granularity;
use crate::models::settings::LifeSettings;
use crate::utils::path::expand_tilde;
use chrono::NaiveDate;

/// High-level export entry point.
pub struct ExportLogic;

impl ExportLogic {
    /// Build the grid for `granularity` and write it to `file`.
    ///
    /// CSV/JSON/XLSX get one flat record per cell; PDF gets the grid drawn
    /// as colored squares. The grid is computed here, once, and handed to
    /// the backends fully built.
    pub fn export(
        settings: &LifeSettings,
        granularity: Granularity,
        today: NaiveDate,
        format: ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<()> {
        let birthdate = settings
            .birthdate
            .ok_or_else(|| AppError::Export("no birthdate set, nothing to export".to_string()))?;

        let path = expand_tilde(file);
        ensure_writable(&path, force)?;

        let input = GridInput {
            birthdate,
            life_expectancy: settings.life_expectancy,
            milestones: &settings.milestones,
            granularity,
            today,
        };
        let cells = build_grid(&input);

        match format {
            ExportFormat::Csv => {
                let flat: Vec<GridCellExport> = cells.iter().map(Into::into).collect();
                export_csv(&flat, &path)?;
            }
            ExportFormat::Json => {
                let flat: Vec<GridCellExport> = cells.iter().map(Into::into).collect();
                export_json(&flat, &path)?;
            }
            ExportFormat::Xlsx => export_xlsx(&cells, granularity, &path)?,
            ExportFormat::Pdf => {
                let title = format!("Your Life in {}s", granularity.unit_label());
                export_pdf(&cells, granularity, &path, &title)?;
            }
        }

        Ok(())
    }
}
