//! FolderHub demo: builds a hierarchy, moves one subtree, and prints the result.

use tracing_subscriber::{EnvFilter, fmt};

use folderhub_core::config::AppConfig;
use folderhub_core::error::AppError;
use folderhub_entity::folder::Folder;
use folderhub_service::{FolderDriver, HierarchyStore};

fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(&config) {
        tracing::error!("Demo failed: {}", e);
        std::process::exit(1);
    }
}

/// Load configuration for the environment named by `FOLDERHUB_ENV`
fn load_configuration() -> Result<AppConfig, AppError> {
    let env = std::env::var("FOLDERHUB_ENV").unwrap_or_else(|_| "development".to_string());
    AppConfig::load(&env)
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}

fn run(config: &AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting FolderHub demo v{}", env!("CARGO_PKG_VERSION"));

    let store = match &config.hierarchy.seed_file {
        Some(path) => HierarchyStore::from_json_file(path)?,
        None => HierarchyStore::sample()?,
    };

    let source = &config.hierarchy.demo_source;
    let destination = &config.hierarchy.demo_destination;

    println!("Before moving '{}' under '{}':", source, destination);
    print_folders(&store.get_all_folders());

    let folders = store.move_folder(source, destination)?;
    store.check_consistency()?;

    println!("\nAfter:");
    print_folders(&folders);
    Ok(())
}

fn print_folders(folders: &[Folder]) {
    for folder in folders {
        println!("  {:<38} {:<12} {}", folder.org_id.to_string(), folder.name, folder.path);
    }
}
