//! Unified application error type.
//! All modules (core, cli, export, config) return AppError to keep the
//! error handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0} (expected YYYY-MM-DD)")]
    InvalidDate(String),

    #[error("Invalid color '{0}' (expected #RRGGBB)")]
    InvalidColor(String),

    #[error("Invalid category '{0}' (career, education, relationship, health, travel, personal, other)")]
    InvalidCategory(String),

    #[error("Invalid theme '{0}' (light or dark)")]
    InvalidTheme(String),

    #[error("Life expectancy must be at least 1 year, got {0}")]
    InvalidLifeExpectancy(u32),

    // ---------------------------
    // Logic errors
    // ---------------------------
    #[error("No milestone found with id '{0}'")]
    MilestoneNotFound(String),

    // ---------------------------
    // Config / settings errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to save settings: {0}")]
    SettingsSave(String),

    // ---------------------------
    // Backup errors
    // ---------------------------
    #[error("Backup file not found: {0}")]
    BackupNotFound(String),

    #[error("Backup file is not readable: {0}")]
    BackupInvalid(String),

    #[error("Backup error: {0}")]
    Backup(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),
}

pub type AppResult<T> = Result<T, AppError>;
