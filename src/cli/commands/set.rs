use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::settings::SettingsStore;
use crate::errors::{AppError, AppResult};
use crate::models::settings::Theme;
use crate::ui::messages::success;
use crate::utils::date;
use std::path::Path;

/// Update birthdate, life expectancy and/or theme in one shot.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Set {
        birthdate,
        expectancy,
        theme,
    } = cmd
    {
        let mut store =
            SettingsStore::load(Path::new(&cfg.settings_file), cfg.default_life_expectancy);

        if let Some(raw) = birthdate {
            let d = date::parse_date(raw).ok_or_else(|| AppError::InvalidDate(raw.clone()))?;
            store.settings.birthdate = Some(d);
        }

        if let Some(years) = expectancy {
            if *years < 1 {
                return Err(AppError::InvalidLifeExpectancy(*years));
            }
            store.settings.life_expectancy = *years;
        }

        if let Some(raw) = theme {
            let t = Theme::from_code(raw).ok_or_else(|| AppError::InvalidTheme(raw.clone()))?;
            store.settings.theme = t;
        }

        store.save()?;

        if let Some(d) = store.settings.birthdate {
            success(format!("Birthdate: {}", d.format("%Y-%m-%d")));
        }
        success(format!(
            "Life expectancy: {} years",
            store.settings.life_expectancy
        ));
        success(format!("Theme: {}", store.settings.theme.as_str()));
    }

    Ok(())
}
