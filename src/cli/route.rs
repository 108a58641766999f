//! CLI route: single route table and run context. Dispatches to the API client, the config
//! store and presentation.

use crate::client::{SearchRequest, SearxngClient};
use crate::config::{ConfigLoader, SearxngConfig};
use crate::error::ApiError;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info};

use crate::cli::command_name;
use crate::cli::parse::{Commands, ConfigCommands, SearchArgs};
use crate::cli::presentation::{
    format_categories_text, format_config_set, format_config_show, format_engines_text,
    format_search_result_json, format_search_result_text,
};

/// Runtime context for one CLI invocation: resolved config path, verbosity and the
/// configuration, loaded on first use and cached afterwards.
pub struct RunContext {
    config_path: PathBuf,
    config: Option<SearxngConfig>,
    verbose: bool,
}

impl RunContext {
    /// Create run context from an optional `--config` path. Resolution order is flag,
    /// `SEARXNG_CONFIG`, then the per-user default. Nothing is read yet.
    pub fn new(config_path: Option<PathBuf>, verbose: bool) -> Result<Self, ApiError> {
        let config_path = ConfigLoader::resolve_path(config_path.as_deref())?;
        debug!(path = %config_path.display(), "Resolved config path");
        Ok(Self {
            config_path,
            config: None,
            verbose,
        })
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    pub fn verbose(&self) -> bool {
        self.verbose
    }

    /// Loaded configuration. The file is read at most once per context.
    pub fn config(&mut self) -> Result<&SearxngConfig, ApiError> {
        let config = match self.config.take() {
            Some(config) => config,
            None => ConfigLoader::load(&self.config_path)?,
        };
        Ok(&*self.config.insert(config))
    }

    /// API client bound to the configured `base_url`.
    pub fn client(&mut self) -> Result<SearxngClient, ApiError> {
        let base_url = self.config()?.base_url.clone();
        SearxngClient::new(&base_url)
    }

    /// Execute a CLI command via the single route table on a current-thread runtime.
    pub fn execute(&mut self, command: &Commands) -> Result<String, ApiError> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| ApiError::RuntimeError(format!("Failed to create runtime: {}", e)))?;
        runtime.block_on(self.execute_async(command))
    }

    /// Route table. Use directly when already inside a tokio runtime.
    pub async fn execute_async(&mut self, command: &Commands) -> Result<String, ApiError> {
        let name = command_name(command);
        let started = Instant::now();
        debug!(command = %name, "Executing command");

        let result = self.execute_inner(command).await;

        info!(
            command = %name,
            ok = result.is_ok(),
            duration_ms = started.elapsed().as_millis() as u64,
            "Command finished"
        );
        result
    }

    async fn execute_inner(&mut self, command: &Commands) -> Result<String, ApiError> {
        match command {
            Commands::Search(args) => self.handle_search(args).await,
            Commands::Engines => {
                let engines = self.client()?.get_engines().await?;
                Ok(format_engines_text(&engines))
            }
            Commands::Categories => {
                let categories = self.client()?.get_categories().await?;
                Ok(format_categories_text(&categories))
            }
            Commands::Config { command } => self.handle_config_command(command),
        }
    }

    async fn handle_search(&mut self, args: &SearchArgs) -> Result<String, ApiError> {
        let client = self.client()?;
        let response = client.search(&SearchRequest::from(args)).await?;
        if args.json {
            format_search_result_json(&response)
        } else {
            Ok(format_search_result_text(&response, args.num))
        }
    }

    fn handle_config_command(&mut self, command: &ConfigCommands) -> Result<String, ApiError> {
        match command {
            ConfigCommands::Show => {
                let config = self.config()?.clone();
                format_config_show(&config, &self.config_path)
            }
            ConfigCommands::Set { key, value } => {
                let updated = ConfigLoader::set(&self.config_path, key, value)?;
                self.config = Some(updated);
                Ok(format_config_set(key, value, &self.config_path))
            }
        }
    }
}

impl From<&SearchArgs> for SearchRequest {
    fn from(args: &SearchArgs) -> Self {
        Self {
            query: args.query.clone(),
            categories: args.categories.clone(),
            engines: args.engines.clone(),
            language: args.language.clone(),
            page: args.page,
            time_range: args.time_range.clone(),
            safe_search: args.safe_search,
        }
    }
}
