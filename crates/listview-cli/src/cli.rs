//! Command-line arguments.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "listview",
    version,
    about = "Search, filter, sort and page the job portal's list screens"
)]
pub struct Cli {
    /// Screen definitions to load instead of ~/.config/listview/screens.toml
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List configured screens
    Screens,

    /// Run a query against a screen and print the resulting page
    Query(QueryArgs),
}

#[derive(Debug, clap::Args)]
pub struct QueryArgs {
    /// Screen id, e.g. "applications"
    pub screen: String,

    /// Free-text search
    #[arg(short, long, default_value = "")]
    pub search: String,

    /// Filter as field=value; an empty value means "All"
    #[arg(short, long = "filter", value_parser = parse_filter)]
    pub filters: Vec<(String, String)>,

    /// Column header click; repeat to cycle ascending, descending, unsorted
    #[arg(long = "sort")]
    pub sort_clicks: Vec<String>,

    /// Page number (1-indexed)
    #[arg(short, long, default_value_t = 1)]
    pub page: usize,

    /// Rows per page, overriding the screen default
    #[arg(long)]
    pub page_size: Option<usize>,

    /// JSON file with an array of records, instead of the built-in mock data
    #[arg(long)]
    pub records: Option<PathBuf>,

    /// Record id to check; repeatable
    #[arg(long = "select")]
    pub selected: Vec<u64>,

    #[arg(long, value_enum, default_value_t = Format::Table)]
    pub format: Format,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Table,
    Json,
}

fn parse_filter(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((field, value)) if !field.trim().is_empty() => {
            Ok((field.trim().to_string(), value.to_string()))
        }
        _ => Err(format!("expected field=value, got '{}'", raw)),
    }
}
