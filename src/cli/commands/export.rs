use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::settings::SettingsStore;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::utils::date::resolve_today;
use std::path::Path;

/// Export the computed grid to CSV/JSON/XLSX/PDF.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        view,
        force,
    } = &cli.command
    {
        let store = SettingsStore::load(Path::new(&cfg.settings_file), cfg.default_life_expectancy);
        let today = resolve_today(cli.today.as_deref())?;

        ExportLogic::export(
            &store.settings,
            *view,
            today,
            format.clone(),
            file,
            *force,
        )?;
    }

    Ok(())
}
