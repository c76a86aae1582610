//! listview - run list-screen queries from the command line.
//!
//! Mounts one of the job portal's list screens over mock or JSON records,
//! replays the requested interactions and prints the resulting page.

mod cli;
mod defaults;
mod mock_data;
mod render;

use std::fs::File;
use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use serde::Serialize;
use thiserror::Error;

use listview_core::{
    load_config, load_user_config, ConfigError, QueryDescriptor, Record, RecordId, Selection,
    SourceError, Value,
};
use listview_engine::{EngineError, JsonSource, QueryError, ScreenRegistry, ScreenSession, View};

use crate::cli::{Cli, Command, Format, QueryArgs};

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error("Screen '{0}' has no built-in records; pass --records FILE")]
    NoRecords(String),

    #[error("Failed to encode output: {0}")]
    Output(#[from] serde_json::Error),
}

impl From<QueryError> for CliError {
    fn from(e: QueryError) -> Self {
        CliError::Engine(e.into())
    }
}

// =============================================================================
// Entry Point
// =============================================================================

fn main() -> ExitCode {
    init_tracing();

    let cli = Cli::parse();
    match run(cli) {
        Ok(output) => {
            print!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::debug!("Command failed: {:?}", e);
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Initialize the tracing subscriber.
///
/// Logs go to stderr so `--format json` output stays parseable. Levels are
/// controlled with `RUST_LOG`, e.g. `RUST_LOG=listview_engine=debug`.
fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
        .with(filter)
        .init();
}

fn run(cli: Cli) -> Result<String, CliError> {
    let registry = load_registry(cli.config.as_deref())?;
    match cli.command {
        Command::Screens => Ok(list_screens(&registry)),
        Command::Query(args) => run_query(&registry, &args),
    }
}

/// Built-in screens, overridden by the user's screen definitions.
fn load_registry(config: Option<&Path>) -> Result<ScreenRegistry, CliError> {
    let registry = defaults::registry();
    let user = match config {
        Some(path) => Some(load_config(path).map_err(EngineError::from)?),
        None => match load_user_config() {
            Ok(user) => user,
            Err(ConfigError::NoConfigDir) => {
                tracing::debug!("No config directory; using built-in screens only");
                None
            }
            Err(e) => return Err(EngineError::from(e).into()),
        },
    };
    if let Some(user) = user {
        tracing::info!("Loaded {} screen definitions from config", user.screens.len());
        for screen in user.screens {
            registry.upsert(screen).map_err(EngineError::from)?;
        }
    }
    Ok(registry)
}

fn list_screens(registry: &ScreenRegistry) -> String {
    let mut out = String::new();
    for id in registry.list() {
        if let Some(line) = registry.with_screen(&id, |screen| {
            format!(
                "{:<14} {:<16} {} fields, {} per page\n",
                screen.id,
                screen.title.as_deref().unwrap_or("-"),
                screen.fields.len(),
                screen.page_size
            )
        }) {
            out.push_str(&line);
        }
    }
    out
}

// =============================================================================
// Query
// =============================================================================

fn run_query(registry: &ScreenRegistry, args: &QueryArgs) -> Result<String, CliError> {
    let screen = registry.require(&args.screen)?;

    let mut session = match &args.records {
        Some(path) => {
            let source = open_records(path)?;
            ScreenSession::mount(screen, &source)?
        }
        None => {
            let source = mock_data::source_for(&screen.id)
                .ok_or_else(|| CliError::NoRecords(screen.id.clone()))?;
            ScreenSession::mount(screen, &source)?
        }
    };

    replay(&mut session, args)?;

    let view = session.view()?;
    match args.format {
        Format::Table => Ok(render::render_table(
            session.screen().schema(),
            session.descriptor(),
            &view,
            session.selection(),
        )),
        Format::Json => {
            let output = QueryOutput {
                screen: &session.screen().id,
                descriptor: session.descriptor(),
                view: &view,
                selection: session.selection(),
                hidden_selected: session.selection().hidden_count(&view.visible_ids()),
            };
            let mut json = serde_json::to_string_pretty(&output)?;
            json.push('\n');
            Ok(json)
        }
    }
}

fn open_records(path: &Path) -> Result<JsonSource, CliError> {
    let name = path.display().to_string();
    let file = File::open(path).map_err(|e| {
        EngineError::from(SourceError::Unavailable {
            source_name: name.clone(),
            message: e.to_string(),
        })
    })?;
    Ok(JsonSource::from_reader(name, file).map_err(EngineError::from)?)
}

/// Apply the interactions in the order a user would make them: page size,
/// search box, filter dropdowns, header clicks, pager, then checkboxes.
fn replay(session: &mut ScreenSession, args: &QueryArgs) -> Result<(), QueryError> {
    if let Some(page_size) = args.page_size {
        session.set_page_size(page_size)?;
    }
    if !args.search.is_empty() {
        session.search(&args.search)?;
    }
    for (field, value) in &args.filters {
        // An empty value is the "All" entry
        let value = (!value.is_empty()).then(|| Value::from(value.as_str()));
        session.set_filter(field, value)?;
    }
    for field in &args.sort_clicks {
        session.click_header(field)?;
    }
    session.go_to_page(args.page)?;
    for id in &args.selected {
        session.toggle_row(RecordId(*id));
    }
    Ok(())
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct QueryOutput<'a> {
    screen: &'a str,
    descriptor: &'a QueryDescriptor,
    view: &'a View<'a, Record>,
    selection: &'a Selection,
    hidden_selected: usize,
}
