use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::backup::BackupLogic;
use crate::core::settings::SettingsStore;
use crate::errors::AppResult;
use std::path::Path;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Backup { file, compress } = cmd {
        let store = SettingsStore::load(Path::new(&cfg.settings_file), cfg.default_life_expectancy);
        BackupLogic::backup(&store, file, *compress)?;
    }

    Ok(())
}
