//! Configuration management CLI commands.

use clap::{Args, Subcommand};

use crate::output::{self, OutputFormat};
use folderhub_core::error::AppError;

/// Arguments for config commands
#[derive(Debug, Args)]
pub struct ConfigArgs {
    /// Config subcommand
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Config subcommands
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show,
    /// Validate the configuration and the seed it points at
    Validate,
}

/// Execute config commands
pub fn execute(args: &ConfigArgs, config_path: &str, format: OutputFormat) -> Result<(), AppError> {
    match &args.command {
        ConfigCommand::Show => {
            let config = super::load_config(config_path)?;
            output::print_item(&config, format);
        }
        ConfigCommand::Validate => {
            let config = super::load_config(config_path)?;
            match super::open_store(&config, None) {
                Ok(store) => {
                    output::print_success(&format!("Configuration '{}' is valid", config_path));
                    output::print_kv("Log level", &config.logging.level);
                    output::print_kv(
                        "Seed",
                        config
                            .hierarchy
                            .seed_file
                            .as_deref()
                            .unwrap_or("(built-in sample)"),
                    );
                    output::print_kv("Folders", &store.len().to_string());
                }
                Err(e) => {
                    output::print_error(&format!("Seed data invalid: {}", e));
                    return Err(e);
                }
            }
        }
    }

    Ok(())
}
