//! CLI domain: hoist, parse, route, help, output, and presentation only.
//! No domain orchestration; single route table dispatches to the client and config store.

mod help;
mod hoist;
mod output;
mod parse;
mod presentation;
mod route;

pub use help::{command_name, config_command_name};
pub use hoist::hoist_global_options;
pub use output::map_error;
pub use parse::{Cli, Commands, ConfigCommands, SearchArgs};
pub use presentation::{
    format_categories_text, format_config_set, format_config_show, format_engines_text,
    format_search_result_json, format_search_result_text,
};
pub use route::RunContext;
