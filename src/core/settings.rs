//! Settings store: the one owner of the persisted snapshot.
//!
//! Load once at startup (validate-or-default, never fail), save after every
//! successful mutation. Nothing else touches the snapshot file.

use crate::errors::{AppError, AppResult};
use crate::models::settings::LifeSettings;
use crate::ui::messages::warning;
use std::fs;
use std::path::{Path, PathBuf};

pub struct SettingsStore {
    path: PathBuf,
    pub settings: LifeSettings,
}

impl SettingsStore {
    /// Read and validate the snapshot at `path`.
    ///
    /// A missing file or a file that is not JSON at all falls back to
    /// defaults (no birthdate, configured expectancy, no milestones);
    /// damaged individual fields are dropped during parsing. The
    /// expectancy fallback is the `default_life_expectancy` value from
    /// the configuration file. Loading never fails.
    pub fn load(path: &Path, default_life_expectancy: u32) -> Self {
        let fallback = || LifeSettings {
            life_expectancy: default_life_expectancy.max(1),
            ..LifeSettings::default()
        };

        let settings = match fs::read_to_string(path) {
            Ok(raw) => {
                match LifeSettings::from_json_str_with_default(&raw, default_life_expectancy) {
                    Ok(s) => s,
                    Err(_) => {
                        warning(format!(
                            "Settings file '{}' is corrupted, starting from defaults",
                            path.display()
                        ));
                        fallback()
                    }
                }
            }
            Err(_) => fallback(),
        };

        Self {
            path: path.to_path_buf(),
            settings,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Persist the current snapshot. Called after each successful mutation.
    pub fn save(&self) -> AppResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json = self
            .settings
            .to_json_string()
            .map_err(|e| AppError::SettingsSave(e.to_string()))?;

        fs::write(&self.path, json)?;
        Ok(())
    }

    /// Replace the snapshot wholesale (used by restore) and persist it.
    pub fn replace(&mut self, settings: LifeSettings) -> AppResult<()> {
        self.settings = settings;
        self.save()
    }
}
