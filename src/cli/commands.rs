//! CLI commands and argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use uuid::Uuid;

/// Browse the folders that belong to an organization
#[derive(Parser, Debug)]
#[command(name = "tenant-folders")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Organization ID (defaults to the configured default organization)
    #[arg(short, long, global = true)]
    pub org_id: Option<Uuid>,

    /// Folder data file (JSON array); the bundled sample data is used otherwise
    #[arg(short, long, global = true)]
    pub data: Option<PathBuf>,

    /// Configuration file (YAML)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Folders per page
    #[arg(long, global = true)]
    pub page_size: Option<usize>,

    /// Leave out soft-deleted folders
    #[arg(long, global = true)]
    pub exclude_deleted: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// CLI subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Print all folders of the organization in one response
    Dump,

    /// Print a single page
    Page {
        /// Page token returned by a previous call (empty = first page)
        #[arg(short, long)]
        token: Option<String>,
    },

    /// Step through pages, asking before each next page
    Paginate {
        /// Print every page without prompting
        #[arg(long)]
        all: bool,
    },
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Indented JSON
    Json,
    /// One folder per line
    Table,
}
