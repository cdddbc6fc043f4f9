//! # HTTP Server Module
//!
//! Axum server exposing the query engine over HTTP.
//!
//! # Endpoints
//!
//! - `/developer`, `/userdata`, `/UserForGenre`, `/best_developer_year`,
//!   `/developer_reviews_analysis` - analytical queries
//! - `/health` - liveness and dataset status
//! - `/metrics` - query counters

pub mod config;
pub mod errors;
pub mod observability_routes;
pub mod query_routes;
pub mod server;
pub mod state;

pub use config::HttpServerConfig;
pub use errors::{ApiError, ApiResult, ErrorResponse};
pub use server::HttpServer;
pub use state::AppState;
