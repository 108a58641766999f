//! CLI presentation: text and json formatters per command family.

mod config;
mod instance;
mod search;
mod shared;

pub use config::{format_config_set, format_config_show};
pub use instance::{format_categories_text, format_engines_text};
pub use search::{format_search_result_json, format_search_result_text};
