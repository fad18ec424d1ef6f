//! CLI runner - executes commands

use super::commands::{Cli, Commands};
use super::render::render;
use crate::config::FolderConfig;
use crate::error::Result;
use crate::filter::FolderFetcher;
use crate::types::{FetchRequest, FetchResponse};
use std::io::{BufRead, Write};
use tracing::debug;

/// CLI runner
#[derive(Debug)]
pub struct Runner {
    cli: Cli,
    config: FolderConfig,
    fetcher: FolderFetcher,
}

impl Runner {
    /// Resolve configuration and build the fetcher
    pub fn new(cli: Cli) -> Result<Self> {
        let config = Self::load_config(&cli)?;
        let fetcher = FolderFetcher::from_config(&config)?;
        Ok(Self {
            cli,
            config,
            fetcher,
        })
    }

    /// Config file, then environment, then command-line flags
    fn load_config(cli: &Cli) -> Result<FolderConfig> {
        let mut config = match &cli.config {
            Some(path) => FolderConfig::from_file(path)?,
            None => FolderConfig::default(),
        }
        .with_env_overrides()?;

        if let Some(page_size) = cli.page_size {
            config.page_size = page_size;
        }
        if let Some(data) = &cli.data {
            config.data_file = Some(data.clone());
        }
        if cli.exclude_deleted {
            config.include_deleted = false;
        }
        config.validate()?;

        debug!(
            page_size = config.page_size,
            data_file = ?config.data_file,
            include_deleted = config.include_deleted,
            "Resolved configuration"
        );
        Ok(config)
    }

    /// Run the CLI command against stdin/stdout
    pub fn run(&self) -> Result<()> {
        let stdin = std::io::stdin();
        let stdout = std::io::stdout();
        self.run_with(&mut stdin.lock(), &mut stdout.lock())
    }

    /// Run the CLI command with explicit input and output
    pub fn run_with<R: BufRead, W: Write>(&self, input: &mut R, out: &mut W) -> Result<()> {
        match &self.cli.command {
            Some(Commands::Dump) => self.dump(out),
            Some(Commands::Page { token }) => self.page(token.as_deref().unwrap_or(""), out),
            Some(Commands::Paginate { all }) => self.paginate(*all, input, out),
            None => self.menu(input, out),
        }
    }

    fn request(&self) -> FetchRequest {
        FetchRequest::new(self.cli.org_id.unwrap_or(self.config.default_org_id))
            .with_deleted(self.config.deleted_filter())
    }

    /// Print a fetch result. An empty result is reported, not propagated.
    fn show<W: Write>(
        &self,
        result: Result<FetchResponse>,
        out: &mut W,
    ) -> Result<Option<FetchResponse>> {
        match result {
            Ok(response) => {
                writeln!(out, "{}", render(&response, self.cli.format)?)?;
                Ok(Some(response))
            }
            Err(e) if e.is_not_found() => {
                writeln!(out, "{e}")?;
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    fn dump<W: Write>(&self, out: &mut W) -> Result<()> {
        self.show(self.fetcher.fetch(&self.request()), out)?;
        Ok(())
    }

    fn page<W: Write>(&self, token: &str, out: &mut W) -> Result<()> {
        let request = self.request().paginated().with_page_token(token);
        self.show(self.fetcher.fetch(&request), out)?;
        Ok(())
    }

    fn paginate<R: BufRead, W: Write>(&self, all: bool, input: &mut R, out: &mut W) -> Result<()> {
        let mut token = String::new();
        loop {
            if token.is_empty() {
                writeln!(out, "Fetching the first page.")?;
            } else {
                writeln!(out, "Using page token: {token}")?;
            }

            let request = self.request().paginated().with_page_token(token.as_str());
            let Some(response) = self.show(self.fetcher.fetch(&request), out)? else {
                break;
            };

            if !response.has_next_page() {
                writeln!(out, "No more pages available.")?;
                break;
            }

            if !all {
                writeln!(out, "\nOptions:")?;
                writeln!(out, "1. Fetch next page")?;
                writeln!(out, "2. Exit")?;
                let choice = prompt(input, out, "Enter your choice (1 or 2): ")?;
                if choice != "1" {
                    writeln!(out, "Exiting pagination.")?;
                    break;
                }
            }
            token = response.next_page_token;
        }
        Ok(())
    }

    fn menu<R: BufRead, W: Write>(&self, input: &mut R, out: &mut W) -> Result<()> {
        writeln!(out, "Select an option:")?;
        writeln!(out, "1. DUMP (receive ALL data in a single output)")?;
        writeln!(out, "2. PAGINATE (receive paginated data)")?;
        let choice = prompt(input, out, "Enter your choice (1 or 2): ")?;

        match choice.as_str() {
            "1" => {
                writeln!(out, "You selected DUMP.")?;
                self.dump(out)
            }
            "2" => {
                writeln!(out, "You selected PAGINATE.")?;
                self.paginate(false, input, out)
            }
            _ => {
                writeln!(out, "Invalid choice. Defaulting to DUMP.")?;
                self.dump(out)
            }
        }
    }
}

/// Ask a question and read one trimmed line (empty at end of input)
fn prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W, question: &str) -> Result<String> {
    write!(out, "{question}")?;
    out.flush()?;
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().to_string())
}
