//! Query error types

use thiserror::Error;

pub type QueryResult<T> = Result<T, QueryError>;

/// Raised only when an answer has to be picked from a row and no row
/// qualifies. Aggregates over an empty selection are not errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// The filter selected nothing
    #[error("No rows match {field} '{value}'")]
    NoMatchingRows { field: &'static str, value: String },

    /// Rows matched but none carries the value being maximized
    #[error("No {field} recorded for {filter} '{value}'")]
    MissingValues {
        field: &'static str,
        filter: &'static str,
        value: String,
    },
}

impl QueryError {
    pub fn no_matching_rows(field: &'static str, value: impl Into<String>) -> Self {
        QueryError::NoMatchingRows {
            field,
            value: value.into(),
        }
    }

    pub fn missing_values(field: &'static str, filter: &'static str, value: impl Into<String>) -> Self {
        QueryError::MissingValues {
            field,
            filter,
            value: value.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            QueryError::no_matching_rows("genre", "Puzzle").to_string(),
            "No rows match genre 'Puzzle'"
        );
        assert_eq!(
            QueryError::missing_values("playtime_forever", "genre", "Action").to_string(),
            "No playtime_forever recorded for genre 'Action'"
        );
    }
}
