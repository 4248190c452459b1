use crate::ui::messages::success;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Path of the settings snapshot (JSON).
    pub settings_file: String,
    #[serde(default = "default_life_expectancy")]
    pub default_life_expectancy: u32,
    /// Square glyph used by the terminal grid.
    #[serde(default = "default_cell_char")]
    pub cell_char: String,
}

fn default_life_expectancy() -> u32 {
    90
}
fn default_cell_char() -> String {
    "■".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            settings_file: Self::settings_file().to_string_lossy().to_string(),
            default_life_expectancy: default_life_expectancy(),
            cell_char: default_cell_char(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("lifeweeks")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".lifeweeks")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("lifeweeks.conf")
    }

    /// Return the default path of the settings snapshot
    pub fn settings_file() -> PathBuf {
        Self::config_dir().join("settings.json")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> Self {
        let path = Self::config_file();

        if path.exists() {
            match fs::read_to_string(&path) {
                Ok(content) => serde_yaml::from_str(&content).unwrap_or_default(),
                Err(_) => Config::default(),
            }
        } else {
            Config::default()
        }
    }

    /// Verify the config file parses and report missing optional fields.
    pub fn check() -> Vec<String> {
        let path = Self::config_file();
        let mut problems = Vec::new();

        if !path.exists() {
            problems.push(format!("Config file not found: {}", path.display()));
            return problems;
        }

        let content = match fs::read_to_string(&path) {
            Ok(c) => c,
            Err(e) => {
                problems.push(format!("Config file unreadable: {e}"));
                return problems;
            }
        };

        match serde_yaml::from_str::<serde_yaml::Value>(&content) {
            Ok(doc) => {
                for field in ["settings_file", "default_life_expectancy", "cell_char"] {
                    if doc.get(field).is_none() {
                        problems.push(format!("Missing field '{field}' (default applies)"));
                    }
                }
            }
            Err(e) => problems.push(format!("Config file is not valid YAML: {e}")),
        }

        problems
    }

    /// Initialize configuration and an empty settings snapshot
    pub fn init_all(custom_settings: Option<String>, is_test: bool) -> io::Result<()> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let settings_path = if let Some(name) = custom_settings {
            let p = std::path::Path::new(&name);
            if p.is_absolute() {
                p.to_path_buf()
            } else {
                dir.join(p)
            }
        } else {
            Self::settings_file()
        };

        let config = Config {
            settings_file: settings_path.to_string_lossy().to_string(),
            default_life_expectancy: default_life_expectancy(),
            cell_char: default_cell_char(),
        };

        // Write config file
        if !is_test {
            let yaml = serde_yaml::to_string(&config)
                .map_err(|e| io::Error::other(e.to_string()))?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            success(format!("Config file: {}", Self::config_file().display()));
        }

        // Create an empty default snapshot if not present
        if !settings_path.exists() {
            if let Some(parent) = settings_path.parent() {
                fs::create_dir_all(parent)?;
            }
            let defaults = crate::models::settings::LifeSettings::default();
            let json = defaults
                .to_json_string()
                .map_err(|e| io::Error::other(e.to_string()))?;
            fs::write(&settings_path, json)?;
        }

        success(format!("Settings file: {}", settings_path.display()));

        Ok(())
    }
}
