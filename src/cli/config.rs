//! Configuration file
//!
//! ```json
//! {
//!   "dataset_path": "df_para_consultas.csv",
//!   "host": "0.0.0.0",
//!   "port": 8000,
//!   "cors_origins": []
//! }
//! ```
//!
//! Every field is optional. Command-line flags win over file values.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::args::SourceArgs;
use super::errors::{CliError, CliResult};
use crate::dataset::default_dataset_path;
use crate::http_server::HttpServerConfig;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// CSV dataset; defaults to `df_para_consultas.csv` beside the executable
    #[serde(default)]
    pub dataset_path: Option<PathBuf>,

    #[serde(flatten)]
    pub http: HttpServerConfig,
}

impl Config {
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| CliError::config_error(format!("Failed to read config: {}", e)))?;

        let config: Config = serde_json::from_str(&content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    fn validate(&self) -> CliResult<()> {
        if self.http.port == 0 {
            return Err(CliError::config_error("port must be > 0"));
        }

        if self
            .dataset_path
            .as_ref()
            .is_some_and(|p| p.as_os_str().is_empty())
        {
            return Err(CliError::config_error("dataset_path must not be empty"));
        }

        if self.http.host.trim().is_empty() {
            return Err(CliError::config_error("host must not be empty"));
        }

        Ok(())
    }

    /// Config file (if any) with the command-line dataset override applied.
    ///
    /// Writes nothing: one-shot commands own stdout.
    pub fn resolve(source: &SourceArgs) -> CliResult<Self> {
        let mut config = match &source.config {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };

        if let Some(dataset) = &source.dataset {
            config.dataset_path = Some(dataset.clone());
        }

        Ok(config)
    }

    /// Dataset to load: the configured path, else the default beside the
    /// executable.
    pub fn dataset_path(&self) -> PathBuf {
        self.dataset_path
            .clone()
            .unwrap_or_else(default_dataset_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::DEFAULT_DATASET_FILE;
    use tempfile::TempDir;

    fn write_config(dir: &TempDir, body: &str) -> PathBuf {
        let path = dir.path().join("gamequery.json");
        fs::write(&path, body).unwrap();
        path
    }

    #[test]
    fn test_load_full_config() {
        let tmp = TempDir::new().unwrap();
        let path = write_config(
            &tmp,
            r#"{"dataset_path": "/data/df.csv", "host": "127.0.0.1", "port": 9000, "cors_origins": ["http://localhost:3000"]}"#,
        );

        let config = Config::load(&path).unwrap();
        assert_eq!(config.dataset_path(), PathBuf::from("/data/df.csv"));
        assert_eq!(config.http.socket_addr(), "127.0.0.1:9000");
        assert_eq!(config.http.cors_origins.len(), 1);
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let tmp = TempDir::new().unwrap();
        let path = write_config(&tmp, "{}");

        let config = Config::load(&path).unwrap();
        assert_eq!(config.http, HttpServerConfig::default());
        assert!(config.dataset_path().ends_with(DEFAULT_DATASET_FILE));
    }

    #[test]
    fn test_zero_port_rejected() {
        let tmp = TempDir::new().unwrap();
        let path = write_config(&tmp, r#"{"port": 0}"#);
        assert!(Config::load(&path).is_err());
    }

    #[test]
    fn test_invalid_json_rejected() {
        let tmp = TempDir::new().unwrap();
        let path = write_config(&tmp, "port = 8000");
        let err = Config::load(&path).unwrap_err();
        assert!(err.message().contains("Invalid config JSON"));
    }

    #[test]
    fn test_missing_config_file_rejected() {
        let tmp = TempDir::new().unwrap();
        assert!(Config::load(&tmp.path().join("absent.json")).is_err());
    }

    #[test]
    fn test_dataset_flag_overrides_file() {
        let tmp = TempDir::new().unwrap();
        let path = write_config(&tmp, r#"{"dataset_path": "from_file.csv"}"#);

        let source = SourceArgs {
            config: Some(path),
            dataset: Some(PathBuf::from("from_flag.csv")),
        };
        let config = Config::resolve(&source).unwrap();
        assert_eq!(config.dataset_path(), PathBuf::from("from_flag.csv"));
    }
}
