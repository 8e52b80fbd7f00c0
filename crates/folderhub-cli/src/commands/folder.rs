//! Folder query and move commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use crate::output::{self, OutputFormat};
use folderhub_core::error::AppError;
use folderhub_core::types::OrgId;
use folderhub_entity::folder::Folder;
use folderhub_service::{FolderDriver, HierarchyStore};

/// Arguments for folder commands
#[derive(Debug, Args)]
pub struct FolderArgs {
    /// Folder subcommand
    #[command(subcommand)]
    pub command: FolderCommand,
}

/// Folder subcommands
#[derive(Debug, Subcommand)]
pub enum FolderCommand {
    /// List every folder in the store
    All,
    /// List the folders of one organization
    List {
        /// Organization ID
        #[arg(short, long)]
        org_id: String,
    },
    /// List every descendant of a folder
    Children {
        /// Organization ID
        #[arg(short, long)]
        org_id: String,
        /// Folder name
        #[arg(short, long)]
        name: String,
    },
    /// Move a folder (and its subtree) under another folder
    Move {
        /// Name of the folder to move
        #[arg(short, long)]
        source: String,
        /// Name of the new parent folder
        #[arg(short, long)]
        destination: String,
    },
    /// Show the folder tree of an organization
    Tree {
        /// Organization ID
        #[arg(short, long)]
        org_id: String,
    },
    /// Show the ancestor chain of a folder
    Breadcrumbs {
        /// Organization ID
        #[arg(short, long)]
        org_id: String,
        /// Folder name
        #[arg(short, long)]
        name: String,
    },
    /// Look up a folder by its full dotted path
    Resolve {
        /// Organization ID
        #[arg(short, long)]
        org_id: String,
        /// Dotted path, e.g. alpha.bravo
        #[arg(short, long)]
        path: String,
    },
}

/// Folder display row
#[derive(Debug, Serialize, Tabled)]
struct FolderRow {
    /// Name
    name: String,
    /// Organization
    org_id: String,
    /// Path
    path: String,
    /// Depth
    depth: usize,
}

impl From<&Folder> for FolderRow {
    fn from(folder: &Folder) -> Self {
        Self {
            name: folder.name.clone(),
            org_id: folder.org_id.to_string(),
            path: folder.path.clone(),
            depth: folder.depth(),
        }
    }
}

/// Execute folder commands
pub fn execute(
    args: &FolderArgs,
    store: &HierarchyStore,
    format: OutputFormat,
) -> Result<(), AppError> {
    match &args.command {
        FolderCommand::All => print_folders(&store.get_all_folders(), format),
        FolderCommand::List { org_id } => {
            let org_id = parse_org_id(org_id)?;
            print_folders(&store.get_folders_by_org_id(org_id), format);
        }
        FolderCommand::Children { org_id, name } => {
            let org_id = parse_org_id(org_id)?;
            let children = store.get_all_child_folders(org_id, name)?;
            print_folders(&children, format);
        }
        FolderCommand::Move {
            source,
            destination,
        } => {
            let folders = store.move_folder(source, destination)?;
            output::print_success(&format!("Moved '{}' under '{}'", source, destination));
            print_folders(&folders, format);
        }
        FolderCommand::Tree { org_id } => {
            let org_id = parse_org_id(org_id)?;
            let tree = store.folder_tree(org_id)?;
            match format {
                OutputFormat::Table => {
                    println!("{} ({} folders)", tree.org_id, tree.total_folders);
                    print!("{}", tree.render());
                }
                OutputFormat::Json => output::print_item(&tree, format),
            }
        }
        FolderCommand::Breadcrumbs { org_id, name } => {
            let org_id = parse_org_id(org_id)?;
            let crumbs = store.breadcrumbs(org_id, name)?;
            print_folders(&crumbs, format);
        }
        FolderCommand::Resolve { org_id, path } => {
            let org_id = parse_org_id(org_id)?;
            let folder = store
                .resolve_path(org_id, path)
                .ok_or_else(|| AppError::not_found(format!("No folder at path '{}'", path)))?;
            print_folders(std::slice::from_ref(&folder), format);
        }
    }

    Ok(())
}

fn parse_org_id(raw: &str) -> Result<OrgId, AppError> {
    raw.parse::<OrgId>()
        .map_err(|e| AppError::validation(format!("Invalid organization UUID '{}': {}", raw, e)))
}

fn print_folders(folders: &[Folder], format: OutputFormat) {
    let rows: Vec<FolderRow> = folders.iter().map(FolderRow::from).collect();
    output::print_list(&rows, format);
}
