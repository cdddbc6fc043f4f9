//! Observable lifecycle events
//!
//! Events are explicit and typed. Their string forms are stable and appear
//! verbatim in the `event` field of every log line.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Boot & Lifecycle
    /// Startup begins
    BootStart,
    /// Startup complete, ready to serve
    BootComplete,
    /// Configuration loaded
    ConfigLoaded,

    // Dataset
    /// Dataset read into memory
    DatasetLoaded,
    /// First rows of the dataset
    DatasetPreview,
    /// Dataset could not be read; serving without data
    DatasetLoadFailed,

    // Server
    /// HTTP listener bound
    ServerListening,

    // Queries
    /// Query answered
    QueryServed,
    /// Query refused (no data, no matching rows)
    QueryRejected,
}

impl Event {
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::BootStart => "GAMEQUERY_STARTUP_BEGIN",
            Event::BootComplete => "GAMEQUERY_STARTUP_COMPLETE",
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::DatasetLoaded => "DATASET_LOADED",
            Event::DatasetPreview => "DATASET_PREVIEW",
            Event::DatasetLoadFailed => "DATASET_LOAD_FAILED",
            Event::ServerListening => "GAMEQUERY_SERVING",
            Event::QueryServed => "QUERY_SERVED",
            Event::QueryRejected => "QUERY_REJECTED",
        }
    }

    /// Returns true if this event indicates a failure worth stderr
    pub fn is_error(&self) -> bool {
        matches!(self, Event::DatasetLoadFailed)
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_events_have_string_representation() {
        let events = [
            Event::BootStart,
            Event::BootComplete,
            Event::ConfigLoaded,
            Event::DatasetLoaded,
            Event::DatasetPreview,
            Event::DatasetLoadFailed,
            Event::ServerListening,
            Event::QueryServed,
            Event::QueryRejected,
        ];

        for event in events {
            let s = event.as_str();
            assert!(!s.is_empty());
            assert!(s.chars().all(|c| c.is_uppercase() || c == '_'));
        }
    }

    #[test]
    fn test_error_events() {
        assert!(Event::DatasetLoadFailed.is_error());
        assert!(!Event::DatasetLoaded.is_error());
        assert!(!Event::QueryRejected.is_error());
    }

    #[test]
    fn test_event_display() {
        assert_eq!(format!("{}", Event::BootStart), "GAMEQUERY_STARTUP_BEGIN");
        assert_eq!(format!("{}", Event::DatasetLoaded), "DATASET_LOADED");
    }
}
