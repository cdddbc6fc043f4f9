//! gamequery - read-only analytical queries over a game/user/review table
//!
//! The table is loaded from CSV once at startup ([`dataset`]), queried by
//! pure functions ([`query`]) and served over HTTP ([`http_server`]).

pub mod cli;
pub mod dataset;
pub mod http_server;
pub mod observability;
pub mod query;
