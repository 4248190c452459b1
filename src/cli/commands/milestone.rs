use crate::cli::parser::{Commands, MilestoneAction};
use crate::config::Config;
use crate::core::settings::SettingsStore;
use crate::errors::{AppError, AppResult};
use crate::models::milestone::{Milestone, MilestoneCategory};
use crate::ui::messages::{info, success};
use crate::utils::color::is_valid_hex;
use crate::utils::date;
use std::path::Path;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Milestone { action } = cmd {
        let mut store =
            SettingsStore::load(Path::new(&cfg.settings_file), cfg.default_life_expectancy);

        match action {
            MilestoneAction::Add {
                date: raw_date,
                name,
                color,
                category,
            } => add(&mut store, raw_date, name, color, category),
            MilestoneAction::Del { id } => del(&mut store, id),
            MilestoneAction::List => list(&store),
        }
    } else {
        Ok(())
    }
}

fn add(
    store: &mut SettingsStore,
    raw_date: &str,
    name: &str,
    color: &Option<String>,
    category: &Option<String>,
) -> AppResult<()> {
    //
    // 1. Parse date (mandatory)
    //
    let d = date::parse_date(raw_date).ok_or_else(|| AppError::InvalidDate(raw_date.to_string()))?;

    //
    // 2. Parse category (optional)
    //
    let cat = match category {
        Some(code) => Some(
            MilestoneCategory::from_code(code)
                .ok_or_else(|| AppError::InvalidCategory(code.clone()))?,
        ),
        None => None,
    };

    //
    // 3. Color: explicit, or the category default
    //
    let color_final = match color {
        Some(c) => {
            if !is_valid_hex(c) {
                return Err(AppError::InvalidColor(c.clone()));
            }
            c.clone()
        }
        None => cat
            .unwrap_or(MilestoneCategory::Other)
            .default_color()
            .to_string(),
    };

    let milestone = Milestone::new(new_id(), d, name.to_string(), color_final, cat);
    let id = milestone.id.clone();

    store.settings.milestones.push(milestone);
    store.save()?;

    success(format!("Milestone added: {name} ({raw_date}) [id {id}]"));
    Ok(())
}

fn del(store: &mut SettingsStore, id: &str) -> AppResult<()> {
    let before = store.settings.milestones.len();
    store.settings.milestones.retain(|m| m.id != id);

    if store.settings.milestones.len() == before {
        return Err(AppError::MilestoneNotFound(id.to_string()));
    }

    store.save()?;
    success(format!("Milestone removed: {id}"));
    Ok(())
}

fn list(store: &SettingsStore) -> AppResult<()> {
    if store.settings.milestones.is_empty() {
        info("No milestones recorded.");
        return Ok(());
    }

    println!(
        "{:<18} {:<12} {:<28} {:<9} {}",
        "ID", "DATE", "NAME", "COLOR", "CATEGORY"
    );
    for m in &store.settings.milestones {
        println!(
            "{:<18} {:<12} {:<28} {:<9} {}",
            m.id,
            m.date_str(),
            m.name,
            m.color,
            m.category_str()
        );
    }

    Ok(())
}

/// Opaque unique id: creation timestamp in hex.
fn new_id() -> String {
    let nanos = chrono::Local::now()
        .timestamp_nanos_opt()
        .unwrap_or_default();
    format!("m{nanos:x}")
}
