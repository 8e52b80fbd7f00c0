//! CLI command definitions and dispatch.

pub mod config;
pub mod folder;

use clap::{Parser, Subcommand};
use tracing::info;

use crate::output::OutputFormat;
use folderhub_core::config::AppConfig;
use folderhub_core::error::AppError;
use folderhub_service::HierarchyStore;

/// FolderHub: organization-scoped folder hierarchies
#[derive(Debug, Parser)]
#[command(name = "folderhub", version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: String,

    /// JSON seed file with folder records (overrides the configured seed)
    #[arg(short, long)]
    pub seed: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Folder queries and moves
    Folder(folder::FolderArgs),
    /// Configuration management
    Config(config::ConfigArgs),
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(&self) -> Result<(), AppError> {
        match &self.command {
            Commands::Folder(args) => {
                let config = load_config(&self.config)?;
                let store = open_store(&config, self.seed.as_deref())?;
                folder::execute(args, &store, self.format)
            }
            Commands::Config(args) => config::execute(args, &self.config, self.format),
        }
    }
}

/// Helper: load configuration from file
pub fn load_config(config_path: &str) -> Result<AppConfig, AppError> {
    AppConfig::load_from(config_path)
        .map_err(|e| AppError::configuration(format!("Failed to load config: {}", e)))
}

/// Helper: build the hierarchy from the seed override, the configured seed,
/// or the built-in sample data, in that order
pub fn open_store(config: &AppConfig, seed: Option<&str>) -> Result<HierarchyStore, AppError> {
    match seed.or(config.hierarchy.seed_file.as_deref()) {
        Some(path) => {
            info!(path, "Loading folders from seed file");
            HierarchyStore::from_json_file(path)
        }
        None => {
            info!("Loading built-in sample folders");
            HierarchyStore::sample()
        }
    }
}
