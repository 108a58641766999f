//! CLI parse: clap types for the SearXNG CLI. No behavior; definitions only.
//!
//! Global options are declared on [`Cli`] only. They are accepted after a subcommand name
//! because the raw arguments go through [`crate::cli::hoist_global_options`] before parsing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// SearXNG CLI - A command-line interface for SearXNG.
#[derive(Parser, Debug)]
#[command(name = "searxng")]
#[command(version)]
#[command(about = "A command-line interface for SearXNG.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to config file [env: SEARXNG_CONFIG]
    #[arg(short = 'c', long = "config")]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short = 'v', long)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Search using SearXNG
    Search(SearchArgs),
    /// List available search engines
    Engines,
    /// List available search categories
    Categories,
    /// Configuration management
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

/// Arguments for the `search` subcommand.
#[derive(clap::Args, Debug, Clone, PartialEq, Eq)]
pub struct SearchArgs {
    /// Search query
    pub query: String,

    /// Comma-separated categories (general, images, news, videos, etc.)
    #[arg(short = 'c', long)]
    pub categories: Option<String>,

    /// Comma-separated engines
    #[arg(short = 'e', long)]
    pub engines: Option<String>,

    /// Language code (en, de, cs, etc.)
    #[arg(short = 'l', long)]
    pub language: Option<String>,

    /// Number of results to display
    #[arg(short = 'n', long, default_value_t = 10)]
    pub num: usize,

    /// Page number
    #[arg(short = 'p', long, default_value_t = 1)]
    pub page: u32,

    /// Time range: day, week, month, year
    #[arg(short = 't', long)]
    pub time_range: Option<String>,

    /// Safe search level: 0, 1, or 2
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=2))]
    pub safe_search: Option<u8>,

    /// Output raw JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ConfigCommands {
    /// Show the current configuration
    Show,
    /// Set a configuration value
    Set {
        /// Config key to set
        key: String,
        /// Value to set
        value: String,
    },
}
