//! Shared router state
//!
//! The table is injected here once and only ever read. Handlers reach it
//! through [`AppState::answer`], which also keeps the counters current.

use std::sync::Arc;

use crate::dataset::Table;
use crate::observability::{log_event_with_fields, Event, Logger, MetricsRegistry};
use crate::query::{Operation, QueryResult};

use super::errors::{ApiError, ApiResult};

pub struct AppState {
    table: Option<Arc<Table>>,
    metrics: MetricsRegistry,
}

impl AppState {
    /// `table` is `None` when the dataset failed to load; every query then
    /// answers 503.
    pub fn new(table: Option<Arc<Table>>) -> Self {
        let metrics = MetricsRegistry::new();
        metrics.set_dataset_rows(table.as_ref().map_or(0, |t| t.len() as u64));
        Self { table, metrics }
    }

    pub fn with_table(table: Table) -> Self {
        Self::new(Some(Arc::new(table)))
    }

    pub fn unavailable() -> Self {
        Self::new(None)
    }

    pub fn table(&self) -> Option<&Table> {
        self.table.as_deref()
    }

    pub fn metrics(&self) -> &MetricsRegistry {
        &self.metrics
    }

    /// Run one query operation against the table and record its outcome.
    pub fn answer<T>(
        &self,
        op: Operation,
        param: &str,
        run: impl FnOnce(&Table) -> QueryResult<T>,
    ) -> ApiResult<T> {
        let result = match self.table() {
            Some(table) => run(table).map_err(ApiError::from),
            None => Err(ApiError::DatasetUnavailable),
        };

        match &result {
            Ok(_) => {
                self.metrics.record_served(op);
                Logger::trace(
                    Event::QueryServed.as_str(),
                    &[("operation", op.name()), ("param", param)],
                );
            }
            Err(e) => {
                self.metrics.record_rejected(op);
                let reason = e.to_string();
                log_event_with_fields(
                    Event::QueryRejected,
                    &[("operation", op.name()), ("param", param), ("reason", reason.as_str())],
                );
            }
        }

        result
    }
}
