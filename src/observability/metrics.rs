//! Metrics registry
//!
//! - Counters only
//! - Monotonic increase, reset only on process start
//! - Lock-free; relaxed ordering is enough for counters

use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

use crate::query::Operation;

/// Served/rejected counters for one query operation
#[derive(Debug, Default)]
struct OperationCounters {
    served: AtomicU64,
    rejected: AtomicU64,
}

/// Operational counters shared by all request handlers
#[derive(Debug, Default)]
pub struct MetricsRegistry {
    operations: [OperationCounters; Operation::COUNT],
    /// Rows in the loaded dataset (0 when unavailable)
    dataset_rows: AtomicU64,
}

impl MetricsRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a successfully answered query
    pub fn record_served(&self, op: Operation) {
        self.operations[op.index()]
            .served
            .fetch_add(1, Ordering::Relaxed);
    }

    /// Record a query answered with an error
    pub fn record_rejected(&self, op: Operation) {
        self.operations[op.index()]
            .rejected
            .fetch_add(1, Ordering::Relaxed);
    }

    pub fn set_dataset_rows(&self, rows: u64) {
        self.dataset_rows.store(rows, Ordering::Relaxed);
    }

    pub fn served(&self, op: Operation) -> u64 {
        self.operations[op.index()].served.load(Ordering::Relaxed)
    }

    pub fn rejected(&self, op: Operation) -> u64 {
        self.operations[op.index()].rejected.load(Ordering::Relaxed)
    }

    /// Point-in-time copy of every counter
    pub fn snapshot(&self) -> MetricsSnapshot {
        let operations = Operation::ALL
            .iter()
            .map(|op| OperationSnapshot {
                operation: op.name(),
                served: self.served(*op),
                rejected: self.rejected(*op),
            })
            .collect::<Vec<_>>();

        MetricsSnapshot {
            queries_served: operations.iter().map(|o| o.served).sum(),
            queries_rejected: operations.iter().map(|o| o.rejected).sum(),
            dataset_rows: self.dataset_rows.load(Ordering::Relaxed),
            operations,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OperationSnapshot {
    pub operation: &'static str,
    pub served: u64,
    pub rejected: u64,
}

/// A point-in-time snapshot of all metrics
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetricsSnapshot {
    pub queries_served: u64,
    pub queries_rejected: u64,
    pub dataset_rows: u64,
    pub operations: Vec<OperationSnapshot>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_registry_has_zero_values() {
        let snapshot = MetricsRegistry::new().snapshot();

        assert_eq!(snapshot.queries_served, 0);
        assert_eq!(snapshot.queries_rejected, 0);
        assert_eq!(snapshot.dataset_rows, 0);
        assert_eq!(snapshot.operations.len(), Operation::COUNT);
    }

    #[test]
    fn test_counters_are_per_operation() {
        let registry = MetricsRegistry::new();

        registry.record_served(Operation::Developer);
        registry.record_served(Operation::Developer);
        registry.record_rejected(Operation::UserForGenre);

        assert_eq!(registry.served(Operation::Developer), 2);
        assert_eq!(registry.served(Operation::UserData), 0);
        assert_eq!(registry.rejected(Operation::UserForGenre), 1);

        let snapshot = registry.snapshot();
        assert_eq!(snapshot.queries_served, 2);
        assert_eq!(snapshot.queries_rejected, 1);
    }

    #[test]
    fn test_snapshot_serializes() {
        let registry = MetricsRegistry::new();
        registry.set_dataset_rows(1234);
        registry.record_served(Operation::BestDeveloperYear);

        let json = serde_json::to_value(registry.snapshot()).unwrap();
        assert_eq!(json["dataset_rows"], 1234);
        assert_eq!(json["queries_served"], 1);
        assert_eq!(json["operations"][3]["operation"], "best_developer_year");
        assert_eq!(json["operations"][3]["served"], 1);
    }

    #[test]
    fn test_thread_safety() {
        use std::sync::Arc;
        use std::thread;

        let registry = Arc::new(MetricsRegistry::new());
        let mut handles = vec![];

        for _ in 0..10 {
            let reg = Arc::clone(&registry);
            handles.push(thread::spawn(move || {
                for _ in 0..100 {
                    reg.record_served(Operation::UserData);
                }
            }));
        }

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(registry.served(Operation::UserData), 1000);
    }
}
