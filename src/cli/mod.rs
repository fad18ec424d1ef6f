//! CLI module
//!
//! Command-line interface for browsing an organization's folders.
//!
//! # Commands
//!
//! - `dump` - Print every folder of the organization
//! - `page` - Print one page, resuming from an optional token
//! - `paginate` - Step through pages interactively (or all at once with `--all`)
//!
//! Without a subcommand an interactive menu asks for dump or paginate mode.

mod commands;
mod render;
mod runner;

pub use commands::{Cli, Commands, OutputFormat};
pub use render::render;
pub use runner::Runner;
