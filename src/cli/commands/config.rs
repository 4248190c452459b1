use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success, warning};
use std::fs;

pub fn handle(cmd: &Commands, _cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
    } = cmd
    {
        if *print_config {
            let path = Config::config_file();
            if !path.exists() {
                return Err(AppError::Config(format!(
                    "Config file not found: {} (run `lifeweeks init`)",
                    path.display()
                )));
            }
            let content = fs::read_to_string(&path)?;
            info(format!("Config file: {}", path.display()));
            println!("{content}");
        }

        if *check {
            let problems = Config::check();
            if problems.is_empty() {
                success("Configuration file is valid.");
            } else {
                for p in problems {
                    warning(p);
                }
            }
        }
    }

    Ok(())
}
