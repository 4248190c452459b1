//! Backup and restore of the settings snapshot.
//!
//! A backup is the snapshot JSON itself (optionally zipped); restoring
//! runs it through the same lenient validation as a normal load, so a
//! hand-edited or half-broken backup degrades instead of erroring out.

use crate::core::settings::SettingsStore;
use crate::errors::{AppError, AppResult};
use crate::models::settings::LifeSettings;
use crate::ui::messages::{info, success, warning};
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use zip::ZipWriter;
use zip::write::FileOptions;

pub struct BackupLogic;

impl BackupLogic {
    /// Write the current settings to `dest_file` as a JSON backup,
    /// optionally zip-compressed.
    pub fn backup(store: &SettingsStore, dest_file: &str, compress: bool) -> AppResult<()> {
        let dest = Path::new(dest_file);

        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)?;
        }

        let json = store
            .settings
            .to_json_string()
            .map_err(|e| AppError::SettingsSave(e.to_string()))?;

        let final_path = if compress {
            let zip_path = with_zip_extension(dest);
            write_zip(&zip_path, &json)?;
            zip_path
        } else {
            fs::write(dest, json)?;
            dest.to_path_buf()
        };

        success(format!("Backup created: {}", final_path.display()));
        Ok(())
    }

    /// Read a backup (.json or .zip), validate it, and replace the stored
    /// settings with its contents.
    ///
    /// Replacing a snapshot that already holds data asks for confirmation
    /// unless `force` is set.
    pub fn restore(store: &mut SettingsStore, src_file: &str, force: bool) -> AppResult<()> {
        let src = Path::new(src_file);

        if !src.exists() {
            return Err(AppError::BackupNotFound(src.display().to_string()));
        }

        confirm_replace(store, force)?;

        let raw = if src.extension().is_some_and(|e| e == "zip") {
            read_zip(src)?
        } else {
            fs::read_to_string(src)?
        };

        let settings = LifeSettings::from_json_str(&raw)
            .map_err(|e| AppError::BackupInvalid(e.to_string()))?;

        let dropped = count_dropped_milestones(&raw, &settings);
        if dropped > 0 {
            info(format!(
                "{dropped} milestone(s) with unreadable dates were skipped"
            ));
        }

        store.replace(settings)?;
        success(format!("Settings restored from {}", src.display()));
        Ok(())
    }
}

/// Ask before replacing a snapshot that already holds user data
/// (a birthdate or milestones). Fresh or default snapshots are
/// replaced silently.
fn confirm_replace(store: &SettingsStore, force: bool) -> AppResult<()> {
    let holds_data = store.settings.birthdate.is_some() || !store.settings.milestones.is_empty();

    if force || !store.path().exists() || !holds_data {
        return Ok(());
    }

    warning(format!(
        "The settings file '{}' already holds data.",
        store.path().display()
    ));

    print!("Overwrite? [y/N]: ");
    io::stdout().flush().ok();

    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;
    let ans = answer.trim().to_ascii_lowercase();

    if ans == "y" || ans == "yes" {
        Ok(())
    } else {
        Err(AppError::Backup(
            "cancelled: existing settings not replaced".to_string(),
        ))
    }
}

fn with_zip_extension(dest: &Path) -> PathBuf {
    match dest.extension() {
        Some(ext) if ext == "zip" => dest.to_path_buf(),
        _ => dest.with_extension("zip"),
    }
}

fn write_zip(zip_path: &Path, json: &str) -> AppResult<()> {
    let file = fs::File::create(zip_path)?;
    let mut zip = ZipWriter::new(file);

    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    zip.start_file("settings.json", options)
        .map_err(|e| AppError::Backup(e.to_string()))?;
    zip.write_all(json.as_bytes())?;
    zip.finish().map_err(|e| AppError::Backup(e.to_string()))?;

    Ok(())
}

fn read_zip(src: &Path) -> AppResult<String> {
    let file = fs::File::open(src)?;
    let mut archive =
        zip::ZipArchive::new(file).map_err(|e| AppError::BackupInvalid(e.to_string()))?;

    // Single-entry archives only: the first file is the snapshot.
    let mut entry = archive
        .by_index(0)
        .map_err(|e| AppError::BackupInvalid(e.to_string()))?;

    let mut raw = String::new();
    entry.read_to_string(&mut raw)?;
    Ok(raw)
}

/// Milestone entries present in the raw document but absent after lenient
/// parsing were dropped for unreadable dates.
fn count_dropped_milestones(raw: &str, parsed: &LifeSettings) -> usize {
    let total = serde_json::from_str::<serde_json::Value>(raw)
        .ok()
        .and_then(|v| v.get("milestones").and_then(|m| m.as_array().map(Vec::len)))
        .unwrap_or(0);

    total.saturating_sub(parsed.milestones.len())
}
