use crate::export::ExportFormat;
use crate::models::granularity::Granularity;
use clap::{Parser, Subcommand};

/// Command-line interface definition for lifeweeks
/// CLI application that renders a lifespan as a grid of weeks
#[derive(Parser)]
#[command(
    name = "lifeweeks",
    version = env!("CARGO_PKG_VERSION"),
    about = "Render your life as a grid of weeks, months or years, with milestones",
    long_about = None
)]
pub struct Cli {
    /// Override settings snapshot path (useful for tests or custom profiles)
    #[arg(global = true, long = "settings")]
    pub settings: Option<String>,

    /// Override the current date (testing)
    #[arg(global = true, long = "today", hide = true)]
    pub today: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration and settings snapshot
    Init,

    /// Manage the configuration file (view or check)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,
    },

    /// Set birthdate, life expectancy or theme
    Set {
        /// Birthdate (YYYY-MM-DD)
        #[arg(long = "birthdate", help = "Birthdate (YYYY-MM-DD)")]
        birthdate: Option<String>,

        /// Life expectancy in years (minimum 1)
        #[arg(long = "expectancy", help = "Life expectancy in years")]
        expectancy: Option<u32>,

        /// Display theme
        #[arg(long = "theme", help = "Display theme: light or dark")]
        theme: Option<String>,
    },

    /// Manage milestones
    Milestone {
        #[command(subcommand)]
        action: MilestoneAction,
    },

    /// Render the life grid in the terminal
    Show {
        #[arg(long, value_enum, default_value = "week", help = "Grid zoom level")]
        view: Granularity,
    },

    /// Export the life grid to a file
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, value_enum, default_value = "week", help = "Grid zoom level")]
        view: Granularity,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Write a backup copy of the settings snapshot
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,
    },

    /// Restore settings from a backup file (.json or .zip)
    Restore {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short = 'f', help = "Replace existing settings without asking")]
        force: bool,
    },
}

#[derive(Subcommand)]
pub enum MilestoneAction {
    /// Add a milestone
    Add {
        /// Date of the milestone (YYYY-MM-DD)
        date: String,

        /// Short name shown in the legend
        name: String,

        #[arg(long, help = "Display color (#RRGGBB); defaults per category")]
        color: Option<String>,

        #[arg(
            long,
            help = "Category: career, education, relationship, health, travel, personal, other"
        )]
        category: Option<String>,
    },

    /// Remove a milestone by id
    Del {
        /// Milestone id (shown by `milestone list`)
        id: String,
    },

    /// List all milestones
    List,
}
