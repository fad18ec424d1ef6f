//! tenant-folders CLI
//!
//! Command-line interface for browsing an organization's folders

use clap::Parser;
use tenant_folders::cli::{Cli, Runner};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();

    // Initialize logging
    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = Runner::new(cli).and_then(|runner| runner.run()) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
