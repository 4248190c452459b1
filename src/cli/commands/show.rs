use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::grid::{GridInput, build_grid};
use crate::core::settings::SettingsStore;
use crate::core::weeks::elapsed_weeks;
use crate::errors::AppResult;
use crate::models::granularity::WEEKS_PER_YEAR;
use crate::ui::grid_view;
use crate::ui::messages::{header, info};
use crate::utils::date::resolve_today;
use std::path::Path;

/// Render the grid in the terminal.
///
/// No birthdate is a valid, stable state, not an error: the command prints
/// a hint and exits 0, same as the original's input-form-only screen.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let Commands::Show { view } = &cli.command else {
        return Ok(());
    };

    let store = SettingsStore::load(Path::new(&cfg.settings_file), cfg.default_life_expectancy);

    let Some(birthdate) = store.settings.birthdate else {
        info("No birthdate set. Run `lifeweeks set --birthdate YYYY-MM-DD` first.");
        info(format!(
            "Life expectancy: {} years, milestones: {}",
            store.settings.life_expectancy,
            store.settings.milestones.len()
        ));
        return Ok(());
    };

    let today = resolve_today(cli.today.as_deref())?;

    let input = GridInput {
        birthdate,
        life_expectancy: store.settings.life_expectancy,
        milestones: &store.settings.milestones,
        granularity: *view,
        today,
    };
    let cells = build_grid(&input);

    header(format!("Your Life in {}s", view.unit_label()));
    print!("{}", grid_view::render(&cells, *view, &cfg.cell_char));

    let elapsed = elapsed_weeks(birthdate, today);
    let total = i64::from(store.settings.life_expectancy * WEEKS_PER_YEAR);
    let percent = if total > 0 {
        (elapsed as f64 / total as f64 * 100.0).min(100.0)
    } else {
        100.0
    };
    println!();
    info(format!(
        "Week {elapsed} of {total} ({percent:.1}% of a {}-year span)",
        store.settings.life_expectancy
    ));

    Ok(())
}
