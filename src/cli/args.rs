//! CLI argument definitions using clap
//!
//! Commands:
//! - gamequery serve [--config <path>] [--dataset <path>] [--port <port>]
//! - gamequery query [--config <path>] [--dataset <path>] <operation> <param>
//! - gamequery inspect [--config <path>] [--dataset <path>] [--rows <n>]

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::query::Query;

/// gamequery - analytical queries over a game/user/review table
#[derive(Parser, Debug)]
#[command(name = "gamequery")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Where the dataset and settings come from
#[derive(Args, Debug, Clone, Default)]
pub struct SourceArgs {
    /// Path to JSON configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// CSV dataset path (overrides the configuration file)
    #[arg(long)]
    pub dataset: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Load the dataset and serve the HTTP API
    Serve {
        #[command(flatten)]
        source: SourceArgs,

        /// Port to listen on (overrides the configuration file)
        #[arg(long)]
        port: Option<u16>,
    },

    /// Run a single query and print the JSON result
    Query {
        #[command(flatten)]
        source: SourceArgs,

        #[command(subcommand)]
        query: QueryCommand,
    },

    /// Print the row count and the first rows of the dataset
    Inspect {
        #[command(flatten)]
        source: SourceArgs,

        /// Number of rows to show
        #[arg(long, default_value_t = 5)]
        rows: usize,
    },
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum QueryCommand {
    /// Items and free-content percentage per year for a developer
    Developer { name: String },
    /// Money spent, recommendation percentage and items for a user
    Userdata { user_id: String },
    /// Top player and hours per year for a genre
    UserForGenre { genre: String },
    /// Three most recommended developers of a year
    BestDeveloperYear { year: i32 },
    /// Sentiment label counts for a developer
    DeveloperReviews { name: String },
}

impl From<QueryCommand> for Query {
    fn from(cmd: QueryCommand) -> Self {
        match cmd {
            QueryCommand::Developer { name } => Query::Developer { developer: name },
            QueryCommand::Userdata { user_id } => Query::UserData { user_id },
            QueryCommand::UserForGenre { genre } => Query::UserForGenre { genre },
            QueryCommand::BestDeveloperYear { year } => Query::BestDeveloperYear { year },
            QueryCommand::DeveloperReviews { name } => {
                Query::DeveloperReviewsAnalysis { developer: name }
            }
        }
    }
}

impl Cli {
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
