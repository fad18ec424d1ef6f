//! Response rendering

use super::commands::OutputFormat;
use crate::error::Result;
use crate::types::FetchResponse;
use std::fmt::Write as _;

/// Render a response in the requested format
pub fn render(response: &FetchResponse, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(response)?),
        OutputFormat::Table => Ok(render_table(response)),
    }
}

fn render_table(response: &FetchResponse) -> String {
    let width = response
        .folders
        .iter()
        .map(|f| f.name.len())
        .max()
        .unwrap_or(0)
        .max("NAME".len());

    let mut out = String::new();
    let _ = writeln!(out, "{:<36}  {:<width$}  DELETED", "ID", "NAME");
    for folder in &response.folders {
        let deleted = if folder.deleted { "yes" } else { "no" };
        let _ = writeln!(out, "{:<36}  {:<width$}  {deleted}", folder.id, folder.name);
    }
    if response.has_next_page() {
        let _ = writeln!(out, "next page token: {}", response.next_page_token);
    }
    out
}
