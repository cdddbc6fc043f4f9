//! CLI command implementations
//!
//! `serve` tolerates a missing dataset and answers 503 until restarted with
//! one; `query` and `inspect` need the data and fail without it.

use serde_json::json;

use crate::dataset::{DatasetLoader, Table};
use crate::http_server::{AppState, HttpServer};
use crate::observability::{self, log_event, log_event_with_fields, Event};
use crate::query::Query;

use super::args::{Command, QueryCommand, SourceArgs};
use super::config::Config;
use super::errors::{CliError, CliResult};
use super::io::{write_error, write_json, write_response};

/// Main CLI entry point
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    run_command(cli.command)
}

pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Serve { source, port } => serve(&source, port),
        Command::Query { source, query: cmd } => query(&source, cmd),
        Command::Inspect { source, rows } => inspect(&source, rows),
    }
}

/// Load the dataset once and serve the HTTP API until the process exits.
pub fn serve(source: &SourceArgs, port: Option<u16>) -> CliResult<()> {
    log_event(Event::BootStart);

    let mut config = Config::resolve(source)?;
    if let Some(path) = &source.config {
        let path_str = path.display().to_string();
        log_event_with_fields(Event::ConfigLoaded, &[("path", path_str.as_str())]);
    }
    if let Some(port) = port {
        config.http.port = port;
    }

    observability::init_tracing();

    let state = AppState::new(DatasetLoader::new(config.dataset_path()).load_or_unavailable());
    let rows = state.table().map_or(0, Table::len).to_string();
    let server = HttpServer::with_config(config.http, state);

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::boot_failed(format!("Failed to create tokio runtime: {}", e)))?;

    log_event_with_fields(Event::BootComplete, &[("rows", rows.as_str())]);

    rt.block_on(async {
        server
            .start()
            .await
            .map_err(|e| CliError::boot_failed(format!("HTTP server failed: {}", e)))
    })
}

/// Execute a single query and print the result envelope.
pub fn query(source: &SourceArgs, cmd: QueryCommand) -> CliResult<()> {
    let table = load_quietly(source)?;
    let query = Query::from(cmd);

    match query.execute(&table) {
        Ok(data) => write_response(data),
        Err(e) => {
            let err = CliError::from(e);
            write_error(err.code_str(), err.message())?;
            Err(err)
        }
    }
}

/// Print the row count and the first `rows` rows.
pub fn inspect(source: &SourceArgs, rows: usize) -> CliResult<()> {
    let table = load_quietly(source)?;

    write_json(&json!({
        "source": table.source().display().to_string(),
        "rows": table.len(),
        "head": serde_json::to_value(table.head(rows))?,
    }))
}

/// One-shot commands own stdout, so the dataset is loaded without the
/// structured log lines.
fn load_quietly(source: &SourceArgs) -> CliResult<Table> {
    let config = Config::resolve(source)?;
    Ok(DatasetLoader::new(config.dataset_path()).load()?)
}
