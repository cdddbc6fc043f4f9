//! CLI module
//!
//! Provides command-line interface for:
//! - serve: load the dataset and run the HTTP API
//! - query: one-shot query execution
//! - inspect: dataset row count and preview

mod args;
mod commands;
mod config;
mod errors;
mod io;

pub use args::{Cli, Command, QueryCommand, SourceArgs};
pub use commands::{inspect, query, run, run_command, serve};
pub use config::Config;
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::{write_error, write_json, write_response};
