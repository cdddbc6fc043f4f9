//! Dataset loader
//!
//! Reads the CSV export into a [`Table`] once at process start. A missing
//! file is reported and logged; the caller decides whether that is fatal.
//! The server keeps running without data, one-shot CLI commands exit.

use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use csv::ReaderBuilder;

use super::errors::{DatasetError, DatasetResult};
use super::record::Record;
use super::table::Table;
use crate::observability::{log_event_with_fields, Event, ObservationScope};

/// File name looked up next to the executable when no path is configured
pub const DEFAULT_DATASET_FILE: &str = "df_para_consultas.csv";

/// Rows included in the `DATASET_PREVIEW` log line
const PREVIEW_ROWS: usize = 5;

pub struct DatasetLoader {
    path: PathBuf,
}

impl DatasetLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Loader for [`DEFAULT_DATASET_FILE`] in the executable's directory.
    pub fn with_default_path() -> Self {
        Self::new(default_dataset_path())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and parse the whole file.
    pub fn load(&self) -> DatasetResult<Table> {
        let display = self.path.display().to_string();

        let file = File::open(&self.path).map_err(|e| DatasetError::not_found(&display, &e))?;

        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(file);

        let mut records = Vec::new();
        for result in reader.deserialize::<Record>() {
            let record = result.map_err(|e| {
                let line = e.position().map(|p| p.line());
                DatasetError::malformed(&display, line, e.to_string())
            })?;
            records.push(record);
        }

        Ok(Table::from_source(records, self.path.clone()))
    }

    /// Load inside an observation scope and emit the load diagnostics.
    pub fn load_logged(&self) -> DatasetResult<Table> {
        let display = self.path.display().to_string();
        let scope = ObservationScope::with_fields("DATASET_LOAD", &[("path", display.as_str())]);

        match self.load() {
            Ok(table) => {
                let rows = table.len().to_string();
                scope.complete_with_fields(&[("rows", rows.as_str())]);
                log_event_with_fields(
                    Event::DatasetLoaded,
                    &[("path", display.as_str()), ("rows", rows.as_str())],
                );
                log_preview(&table);
                Ok(table)
            }
            Err(e) => {
                scope.fail(e.message());
                log_event_with_fields(
                    Event::DatasetLoadFailed,
                    &[
                        ("path", display.as_str()),
                        ("code", e.code().code()),
                        ("reason", e.message()),
                    ],
                );
                Err(e)
            }
        }
    }

    /// Load for serving: failures are logged and leave the table unset.
    pub fn load_or_unavailable(&self) -> Option<Arc<Table>> {
        self.load_logged().ok().map(Arc::new)
    }
}

/// `<dir of current executable>/df_para_consultas.csv`, or the bare file
/// name when the executable location cannot be determined.
pub fn default_dataset_path() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join(DEFAULT_DATASET_FILE)))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATASET_FILE))
}

fn log_preview(table: &Table) {
    let head = serde_json::to_string(table.head(PREVIEW_ROWS)).unwrap_or_default();
    log_event_with_fields(Event::DatasetPreview, &[("head", head.as_str())]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::DatasetErrorCode;
    use std::fs;
    use tempfile::TempDir;

    const HEADER: &str =
        "developer,year,id,price,user_id,recommend,playtime_forever,genres,sentiment_analysis\n";

    fn write_csv(dir: &TempDir, body: &str) -> PathBuf {
        let path = dir.path().join("df.csv");
        fs::write(&path, format!("{}{}", HEADER, body)).unwrap();
        path
    }

    #[test]
    fn test_load_rows_in_file_order() {
        let tmp = TempDir::new().unwrap();
        let path = write_csv(
            &tmp,
            "Valve,2015,1,0.0,alice,1,10,Action,2\n\
             Valve,2016,2,9.99,bob,0,20,Indie,0\n",
        );

        let table = DatasetLoader::new(&path).load().unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.records()[0].user_id.as_deref(), Some("alice"));
        assert_eq!(table.records()[1].year, Some(2016));
        assert_eq!(table.source(), path.as_path());
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let tmp = TempDir::new().unwrap();
        let err = DatasetLoader::new(tmp.path().join("absent.csv"))
            .load()
            .unwrap_err();
        assert_eq!(err.code(), DatasetErrorCode::NotFound);
    }

    #[test]
    fn test_malformed_cell_reports_line() {
        let tmp = TempDir::new().unwrap();
        let path = write_csv(
            &tmp,
            "Valve,2015,1,0.0,alice,1,10,Action,2\n\
             Valve,2015,2,cheap,bob,1,10,Action,2\n",
        );

        let err = DatasetLoader::new(&path).load().unwrap_err();
        assert_eq!(err.code(), DatasetErrorCode::Malformed);
        assert_eq!(err.line(), Some(3));
    }

    #[test]
    fn test_load_or_unavailable_swallows_failure() {
        let tmp = TempDir::new().unwrap();
        let loader = DatasetLoader::new(tmp.path().join("absent.csv"));
        assert!(loader.load_or_unavailable().is_none());
    }

    #[test]
    fn test_default_path_uses_dataset_file_name() {
        let path = default_dataset_path();
        assert!(path.ends_with(DEFAULT_DATASET_FILE));
    }
}
