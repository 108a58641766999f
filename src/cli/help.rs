//! CLI help and command-name contract for logging and routing.

use crate::cli::parse::{Commands, ConfigCommands};

/// Command name string for log spans (e.g. "search", "config.set").
pub fn command_name(command: &Commands) -> String {
    match command {
        Commands::Search(_) => "search".to_string(),
        Commands::Engines => "engines".to_string(),
        Commands::Categories => "categories".to_string(),
        Commands::Config { command } => format!("config.{}", config_command_name(command)),
    }
}

pub fn config_command_name(command: &ConfigCommands) -> &'static str {
    match command {
        ConfigCommands::Show => "show",
        ConfigCommands::Set { .. } => "set",
    }
}
