//! Query engine
//!
//! Five read-only aggregations over the [`Table`]. Each is a pure function of
//! the table and its scalar parameter; none of them allocate anything that
//! outlives the result.
//!
//! | Operation | Filter | Aggregate |
//! |---|---|---|
//! | [`developer`] | developer == name | rows and % free per year |
//! | [`userdata`] | user_id == id | price sum, recommend mean, rows |
//! | [`user_for_genre`] | genres ∋ genre (case-insensitive) | argmax playtime, playtime per year |
//! | [`best_developer_year`] | year == y ∧ recommend | top 3 developers by rows |
//! | [`developer_reviews_analysis`] | developer == name | rows per sentiment label |

mod best_developer;
mod counter;
mod developer;
mod errors;
pub mod format;
mod genre;
mod reviews;
mod userdata;

use std::fmt;

use serde_json::Value;

use crate::dataset::Table;

pub use best_developer::{best_developer_year, DeveloperRank, TOP_DEVELOPERS};
pub use developer::{developer, DeveloperYear};
pub use errors::{QueryError, QueryResult};
pub use genre::{user_for_genre, GenrePlaytime, YearHours};
pub use reviews::{developer_reviews_analysis, ReviewsAnalysis};
pub use userdata::{userdata, UserData};

/// The query operations, in route order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Developer,
    UserData,
    UserForGenre,
    BestDeveloperYear,
    DeveloperReviewsAnalysis,
}

impl Operation {
    pub const COUNT: usize = 5;

    pub const ALL: [Operation; Operation::COUNT] = [
        Operation::Developer,
        Operation::UserData,
        Operation::UserForGenre,
        Operation::BestDeveloperYear,
        Operation::DeveloperReviewsAnalysis,
    ];

    /// Public name; also the HTTP route segment
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Developer => "developer",
            Operation::UserData => "userdata",
            Operation::UserForGenre => "UserForGenre",
            Operation::BestDeveloperYear => "best_developer_year",
            Operation::DeveloperReviewsAnalysis => "developer_reviews_analysis",
        }
    }

    pub(crate) fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A fully parameterized query, for callers that dispatch dynamically
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    Developer { developer: String },
    UserData { user_id: String },
    UserForGenre { genre: String },
    BestDeveloperYear { year: i32 },
    DeveloperReviewsAnalysis { developer: String },
}

impl Query {
    pub fn operation(&self) -> Operation {
        match self {
            Query::Developer { .. } => Operation::Developer,
            Query::UserData { .. } => Operation::UserData,
            Query::UserForGenre { .. } => Operation::UserForGenre,
            Query::BestDeveloperYear { .. } => Operation::BestDeveloperYear,
            Query::DeveloperReviewsAnalysis { .. } => Operation::DeveloperReviewsAnalysis,
        }
    }

    /// Run against `table` and return the JSON body the HTTP layer would send.
    pub fn execute(&self, table: &Table) -> QueryResult<Value> {
        let value = match self {
            Query::Developer { developer: name } => to_json(developer(table, name)),
            Query::UserData { user_id } => to_json(userdata(table, user_id)),
            Query::UserForGenre { genre } => to_json(user_for_genre(table, genre)?),
            Query::BestDeveloperYear { year } => to_json(best_developer_year(table, *year)),
            Query::DeveloperReviewsAnalysis { developer } => {
                to_json(developer_reviews_analysis(table, developer))
            }
        };
        Ok(value)
    }
}

fn to_json<T: serde::Serialize>(result: T) -> Value {
    // Result types contain only strings, integers and finite floats.
    serde_json::to_value(result).unwrap_or(Value::Null)
}
