//! ObservationScope for automatic begin/complete logging
//!
//! - Logs `{name}_BEGIN` on creation
//! - Logs `{name}_COMPLETE` or `{name}_FAILED` when closed
//! - Logs `{name}_INCOMPLETE` if dropped without either

use std::cell::Cell;
use std::time::Instant;

use super::logger::Logger;

/// A scope that logs start and completion of a unit of work
///
/// ```ignore
/// let scope = ObservationScope::with_fields("DATASET_LOAD", &[("path", "df.csv")]);
/// // ... do work ...
/// scope.complete_with_fields(&[("rows", "42")]);
/// ```
pub struct ObservationScope<'a> {
    name: &'a str,
    completed: Cell<bool>,
    fields: Vec<(&'a str, String)>,
    started: Instant,
}

impl<'a> ObservationScope<'a> {
    pub fn new(name: &'a str) -> Self {
        Self::with_fields(name, &[])
    }

    pub fn with_fields(name: &'a str, fields: &[(&'a str, &str)]) -> Self {
        Logger::info(&format!("{}_BEGIN", name), fields);

        Self {
            name,
            completed: Cell::new(false),
            fields: fields.iter().map(|(k, v)| (*k, v.to_string())).collect(),
            started: Instant::now(),
        }
    }

    fn all_fields<'b>(&'b self, extra: &[(&'b str, &'b str)], elapsed: &'b str) -> Vec<(&'b str, &'b str)> {
        let mut all: Vec<(&str, &str)> = self.fields.iter().map(|(k, v)| (*k, v.as_str())).collect();
        all.extend(extra.iter().copied());
        all.push(("elapsed_ms", elapsed));
        all
    }

    pub fn complete(self) {
        self.complete_with_fields(&[]);
    }

    /// Logs `{name}_COMPLETE` at INFO level with the extra fields and elapsed time.
    pub fn complete_with_fields(self, extra_fields: &[(&str, &str)]) {
        self.completed.set(true);
        let elapsed = self.elapsed_ms();
        Logger::info(
            &format!("{}_COMPLETE", self.name),
            &self.all_fields(extra_fields, &elapsed),
        );
    }

    /// Logs `{name}_FAILED` at ERROR level.
    pub fn fail(self, reason: &str) {
        self.completed.set(true);
        let elapsed = self.elapsed_ms();
        Logger::error(
            &format!("{}_FAILED", self.name),
            &self.all_fields(&[("reason", reason)], &elapsed),
        );
    }

    pub fn is_completed(&self) -> bool {
        self.completed.get()
    }

    fn elapsed_ms(&self) -> String {
        self.started.elapsed().as_millis().to_string()
    }
}

impl Drop for ObservationScope<'_> {
    fn drop(&mut self) {
        if !self.completed.get() {
            Logger::warn(
                &format!("{}_INCOMPLETE", self.name),
                &[("reason", "scope dropped without completion")],
            );
        }
    }
}
