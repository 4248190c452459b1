// src/export/model.rs

use crate::models::grid_cell::GridCell;
use serde::Serialize;

/// Flat, owned record for one grid cell, one row per cell in CSV/JSON/XLSX
/// exports. Milestone fields are empty strings when the cell has none.
#[derive(Serialize, Clone, Debug)]
pub struct GridCellExport {
    pub age_year: u32,
    pub unit_index: u32,
    pub start_week: f64,
    pub status: String,
    pub milestone_id: String,
    pub milestone_name: String,
    pub milestone_date: String,
    pub milestone_color: String,
    pub milestone_category: String,
}

impl From<&GridCell<'_>> for GridCellExport {
    fn from(cell: &GridCell) -> Self {
        let status = if cell.is_current {
            "current"
        } else if cell.is_past {
            "past"
        } else {
            "future"
        };

        Self {
            age_year: cell.age_year,
            unit_index: cell.unit_index,
            start_week: cell.start_week,
            status: status.to_string(),
            milestone_id: cell.milestone.map(|m| m.id.clone()).unwrap_or_default(),
            milestone_name: cell.milestone.map(|m| m.name.clone()).unwrap_or_default(),
            milestone_date: cell.milestone.map(|m| m.date_str()).unwrap_or_default(),
            milestone_color: cell.milestone.map(|m| m.color.clone()).unwrap_or_default(),
            milestone_category: cell
                .milestone
                .map(|m| m.category_str().to_string())
                .unwrap_or_default(),
        }
    }
}
