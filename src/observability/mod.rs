//! Observability subsystem
//!
//! - Structured logging (JSON, one line per event)
//! - Query counters
//! - Lifecycle event tracing
//!
//! Observability is read-only: nothing here influences query results, and a
//! failure to write a log line is swallowed.
//!
//! ```ignore
//! use gamequery::observability::{Logger, Event, MetricsRegistry};
//!
//! Logger::info("QUERY_SERVED", &[("operation", "developer")]);
//! log_event_with_fields(Event::DatasetLoaded, &[("rows", "42")]);
//! ```

mod events;
mod logger;
mod metrics;
mod scope;

pub use events::Event;
pub use logger::{Logger, Severity};
pub use metrics::{MetricsRegistry, MetricsSnapshot, OperationSnapshot};
pub use scope::ObservationScope;

/// Log a lifecycle event
pub fn log_event(event: Event) {
    log_event_with_fields(event, &[]);
}

/// Log a lifecycle event with fields
pub fn log_event_with_fields(event: Event, fields: &[(&str, &str)]) {
    let severity = if event.is_error() {
        Severity::Error
    } else {
        Severity::Info
    };
    Logger::log(severity, event.as_str(), fields);
}

/// Install the `tracing` subscriber used by the HTTP trace layer.
///
/// Honors `RUST_LOG`; defaults to `info`. Safe to call more than once.
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
