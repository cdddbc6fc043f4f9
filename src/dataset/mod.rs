//! Dataset subsystem
//!
//! The consultable record table: a flat CSV export of game, user and review
//! data joined one row per (user, game, review). It is read once at startup
//! and is immutable for the lifetime of the process.

mod errors;
mod loader;
mod record;
mod table;

pub use errors::{DatasetError, DatasetErrorCode, DatasetResult};
pub use loader::{default_dataset_path, DatasetLoader, DEFAULT_DATASET_FILE};
pub use record::Record;
pub use table::Table;
