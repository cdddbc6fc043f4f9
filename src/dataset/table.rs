//! The immutable in-memory table

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};

use super::record::Record;

/// Rows loaded once at startup; never mutated afterwards.
///
/// Shared across request handlers as `Arc<Table>`.
#[derive(Debug, Clone)]
pub struct Table {
    records: Vec<Record>,
    source: PathBuf,
    loaded_at: DateTime<Utc>,
}

impl Table {
    /// Build a table from rows already in memory.
    pub fn new(records: Vec<Record>) -> Self {
        Self::from_source(records, PathBuf::from("<in-memory>"))
    }

    pub(crate) fn from_source(records: Vec<Record>, source: PathBuf) -> Self {
        Self {
            records,
            source,
            loaded_at: Utc::now(),
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All rows in file order
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }

    /// First `n` rows (fewer if the table is shorter)
    pub fn head(&self, n: usize) -> &[Record] {
        &self.records[..n.min(self.records.len())]
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }
}

impl FromIterator<Record> for Table {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(user: &str) -> Record {
        Record {
            user_id: Some(user.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_head_is_bounded() {
        let table: Table = ["a", "b", "c"].into_iter().map(row).collect();

        assert_eq!(table.len(), 3);
        assert_eq!(table.head(2).len(), 2);
        assert_eq!(table.head(10).len(), 3);
        assert_eq!(table.head(1)[0].user_id.as_deref(), Some("a"));
    }

    #[test]
    fn test_empty_table() {
        let table = Table::new(Vec::new());
        assert!(table.is_empty());
        assert!(table.head(5).is_empty());
        assert_eq!(table.source(), Path::new("<in-memory>"));
    }
}
