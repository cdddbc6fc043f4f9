//! Dataset error types
//!
//! Error codes:
//! - GAMEQUERY_DATASET_NOT_FOUND
//! - GAMEQUERY_DATASET_MALFORMED

use std::fmt;
use std::io;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasetErrorCode {
    /// Input file absent or unreadable
    NotFound,
    /// CSV structure or a cell value could not be parsed
    Malformed,
}

impl DatasetErrorCode {
    pub fn code(&self) -> &'static str {
        match self {
            DatasetErrorCode::NotFound => "GAMEQUERY_DATASET_NOT_FOUND",
            DatasetErrorCode::Malformed => "GAMEQUERY_DATASET_MALFORMED",
        }
    }
}

impl fmt::Display for DatasetErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Dataset load failure with the offending path and, when known, line
#[derive(Debug)]
pub struct DatasetError {
    code: DatasetErrorCode,
    path: String,
    line: Option<u64>,
    message: String,
}

impl DatasetError {
    pub fn not_found(path: impl Into<String>, source: &io::Error) -> Self {
        Self {
            code: DatasetErrorCode::NotFound,
            path: path.into(),
            line: None,
            message: source.to_string(),
        }
    }

    pub fn malformed(path: impl Into<String>, line: Option<u64>, reason: impl Into<String>) -> Self {
        Self {
            code: DatasetErrorCode::Malformed,
            path: path.into(),
            line,
            message: reason.into(),
        }
    }

    pub fn code(&self) -> DatasetErrorCode {
        self.code
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn line(&self) -> Option<u64> {
        self.line
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for DatasetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.path)?;
        if let Some(line) = self.line {
            write!(f, " (line {})", line)?;
        }
        write!(f, ": {}", self.message)
    }
}

impl std::error::Error for DatasetError {}

pub type DatasetResult<T> = Result<T, DatasetError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "No such file or directory");
        let err = DatasetError::not_found("/data/df.csv", &io_err);

        assert_eq!(err.code(), DatasetErrorCode::NotFound);
        let display = err.to_string();
        assert!(display.starts_with("GAMEQUERY_DATASET_NOT_FOUND: /data/df.csv"));
        assert!(display.contains("No such file"));
    }

    #[test]
    fn test_malformed_display_includes_line() {
        let err = DatasetError::malformed("df.csv", Some(7), "invalid price 'abc'");
        assert_eq!(err.line(), Some(7));
        assert_eq!(
            err.to_string(),
            "GAMEQUERY_DATASET_MALFORMED: df.csv (line 7): invalid price 'abc'"
        );
    }
}
