use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;

/// Create the config directory, config file and an empty settings snapshot.
pub fn handle(cli: &Cli) -> AppResult<()> {
    Config::init_all(cli.settings.clone(), cli.test)?;
    Ok(())
}
